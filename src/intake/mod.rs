//! Line-oriented form primitives.
//!
//! Each prompt shows the previous answer as its default so a rejected
//! form can be corrected without retyping everything — pressing Enter
//! keeps the current value. Parsing is split from I/O so the accept rules
//! are unit-testable.

use std::fmt::Display;
use std::io::{self, Write as _};

use anyhow::{Context, Result};

use crate::render::{BOLD, DIM, RESET};

/// Read one trimmed line from stdin.
fn read_line() -> Result<String> {
    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .context("failed to read from stdin")?;
    Ok(input.trim().to_string())
}

fn flush_prompt(prompt: &str) -> Result<()> {
    print!("{prompt}");
    io::stdout().flush().context("failed to flush stdout")?;
    Ok(())
}

/// Single-line text field. Empty input keeps `current`.
pub fn text(label: &str, current: &str) -> Result<String> {
    if current.is_empty() {
        flush_prompt(&format!("{BOLD}{label}{RESET}: "))?;
    } else {
        flush_prompt(&format!("{BOLD}{label}{RESET} [{current}]: "))?;
    }
    let input = read_line()?;
    Ok(if input.is_empty() { current.to_string() } else { input })
}

/// Multi-line-flavoured text field with an example hint, still read as
/// one line (the original text areas collapse fine to a sentence).
pub fn text_area(label: &str, hint: Option<&str>, current: &str) -> Result<String> {
    if let Some(hint) = hint {
        println!("{DIM}{hint}{RESET}");
    }
    text(label, current)
}

/// Pick exactly one option by number. Empty input keeps `current`.
pub fn select<T: Display>(label: &str, options: &[T], current: usize) -> Result<usize> {
    println!("{BOLD}{label}{RESET}");
    for (i, option) in options.iter().enumerate() {
        println!("  [{i}] {option}");
    }
    loop {
        flush_prompt(&format!("Pick one [default {current}]: "))?;
        let input = read_line()?;
        if input.is_empty() {
            return Ok(current);
        }
        match parse_selection(&input, options.len()) {
            Some(idx) => return Ok(idx),
            None => println!("Enter a number between 0 and {}.", options.len() - 1),
        }
    }
}

/// Pick any number of options as comma-separated indices. Empty input
/// keeps `current`; `-` clears the selection.
pub fn multi_select<T: Display>(label: &str, options: &[T], current: &[usize]) -> Result<Vec<usize>> {
    println!("{BOLD}{label}{RESET}");
    for (i, option) in options.iter().enumerate() {
        let mark = if current.contains(&i) { "x" } else { " " };
        println!("  [{mark}] {i}: {option}");
    }
    loop {
        flush_prompt("Pick numbers, comma-separated (Enter keeps current, - clears): ")?;
        let input = read_line()?;
        if input.is_empty() {
            return Ok(current.to_vec());
        }
        if input == "-" {
            return Ok(Vec::new());
        }
        match parse_multi_selection(&input, options.len()) {
            Some(picks) => return Ok(picks),
            None => println!(
                "Enter numbers between 0 and {}, separated by commas.",
                options.len() - 1
            ),
        }
    }
}

/// Bounded integer scale. Empty input keeps `current`.
pub fn scale(label: &str, min: u8, max: u8, current: u8) -> Result<u8> {
    loop {
        flush_prompt(&format!("{BOLD}{label}{RESET} ({min}-{max}) [{current}]: "))?;
        let input = read_line()?;
        if input.is_empty() {
            return Ok(current);
        }
        match parse_scale(&input, min, max) {
            Some(value) => return Ok(value),
            None => println!("Enter a number between {min} and {max}."),
        }
    }
}

/// Yes/no confirmation, defaulting to no.
pub fn confirm(label: &str) -> Result<bool> {
    flush_prompt(&format!("{label} [y/N]: "))?;
    let input = read_line()?;
    Ok(matches!(input.as_str(), "y" | "Y" | "yes" | "Yes"))
}

// ─── Option/index mapping ─────────────────────────────────────────────────────

/// Positions of the already-picked options within the full option list —
/// feeds `multi_select`'s current-selection markers.
pub fn indices_of<T: PartialEq>(all: &[T], picked: &[T]) -> Vec<usize> {
    all.iter()
        .enumerate()
        .filter(|(_, option)| picked.contains(option))
        .map(|(i, _)| i)
        .collect()
}

/// Map picked indices back to options, in pick order.
pub fn picked<T: Copy>(all: &[T], picks: &[usize]) -> Vec<T> {
    picks.iter().filter_map(|&i| all.get(i).copied()).collect()
}

// ─── Pure parsers ─────────────────────────────────────────────────────────────

fn parse_selection(input: &str, len: usize) -> Option<usize> {
    input.trim().parse::<usize>().ok().filter(|&idx| idx < len)
}

/// Parse `"0, 2,5"` into `[0, 2, 5]`. Duplicates collapse, first
/// occurrence wins the position. Any invalid entry rejects the whole line.
fn parse_multi_selection(input: &str, len: usize) -> Option<Vec<usize>> {
    let mut picks = Vec::new();
    for part in input.split(',') {
        let part = part.trim();
        if part.is_empty() {
            continue;
        }
        let idx = parse_selection(part, len)?;
        if !picks.contains(&idx) {
            picks.push(idx);
        }
    }
    if picks.is_empty() {
        None
    } else {
        Some(picks)
    }
}

fn parse_scale(input: &str, min: u8, max: u8) -> Option<u8> {
    input
        .trim()
        .parse::<u8>()
        .ok()
        .filter(|&v| v >= min && v <= max)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_selection_bounds() {
        assert_eq!(parse_selection("0", 3), Some(0));
        assert_eq!(parse_selection(" 2 ", 3), Some(2));
        assert_eq!(parse_selection("3", 3), None);
        assert_eq!(parse_selection("x", 3), None);
    }

    #[test]
    fn test_parse_multi_selection() {
        assert_eq!(parse_multi_selection("0, 2,5", 7), Some(vec![0, 2, 5]));
        assert_eq!(parse_multi_selection("1,1,1", 3), Some(vec![1]));
        assert_eq!(parse_multi_selection("0,9", 3), None);
        assert_eq!(parse_multi_selection(",", 3), None);
        assert_eq!(parse_multi_selection("a,b", 3), None);
    }

    #[test]
    fn test_parse_scale() {
        assert_eq!(parse_scale("7", 1, 10), Some(7));
        assert_eq!(parse_scale("1", 1, 10), Some(1));
        assert_eq!(parse_scale("10", 1, 10), Some(10));
        assert_eq!(parse_scale("0", 1, 10), None);
        assert_eq!(parse_scale("11", 1, 10), None);
        assert_eq!(parse_scale("seven", 1, 10), None);
    }
}
