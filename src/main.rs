use anyhow::Result;
use clap::{Parser, Subcommand};
use senior_intern::{cli, config::Config, AppContext};
use tracing::info;

#[derive(Parser)]
#[command(
    name = "senior-intern",
    about = "Senior Intern — where experience meets speed",
    version
)]
struct Args {
    #[command(subcommand)]
    command: Option<Command>,

    /// Data directory for the optional config.toml
    #[arg(long, env = "SENIOR_INTERN_DATA_DIR")]
    data_dir: Option<std::path::PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "SENIOR_INTERN_LOG")]
    log: Option<String>,

    /// Write logs to this file path (rotated daily). Optional.
    #[arg(long, env = "SENIOR_INTERN_LOG_FILE")]
    log_file: Option<std::path::PathBuf>,
}

#[derive(Subcommand)]
enum Command {
    /// Show the landing page (default when no subcommand given).
    ///
    /// Hero copy, the audience question carousels, and pointers to the
    /// senior and founder flows.
    ///
    /// Examples:
    ///   senior-intern home
    ///   senior-intern
    Home,
    /// Create a Senior Intern profile.
    ///
    /// Interactive intake form. All answers stay in memory for this run
    /// only — nothing is persisted anywhere.
    ///
    /// Examples:
    ///   senior-intern senior
    Senior,
    /// Describe a startup problem and get the advisory-board analysis.
    ///
    /// Interactive intake form followed by the Virtual Senior Advisory
    /// Board's rule-based diagnosis and a shortlist of up to three
    /// suggested Senior Interns.
    ///
    /// Examples:
    ///   senior-intern founder
    Founder,
    /// Run the early combined demo (home / senior / founder / match).
    ///
    /// The original single-screen prototype with its own dummy senior
    /// list. Kept for hackathon demos.
    ///
    /// Examples:
    ///   senior-intern demo
    Demo,
    /// Check Gemini API connectivity.
    ///
    /// Reads GEMINI_API_KEY, lists the models the key can call, and runs
    /// one text generation against the first of them.
    ///
    /// Exit code 0 if all checks pass, 1 on a missing credential, an
    /// empty model list, or an upstream failure.
    ///
    /// Examples:
    ///   GEMINI_API_KEY=… senior-intern doctor
    Doctor,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let config = Config::new(args.data_dir.clone(), args.log.clone());
    let _log_guard = setup_logging(&config.log, args.log_file.as_deref(), &config.log_format);
    info!(version = env!("CARGO_PKG_VERSION"), "senior-intern starting");

    let mut ctx = AppContext::new(config);

    match args.command.unwrap_or(Command::Home) {
        Command::Home => cli::home::run(),
        Command::Senior => cli::senior::run(&mut ctx)?,
        Command::Founder => cli::founder::run(&mut ctx)?,
        Command::Demo => cli::demo::run()?,
        Command::Doctor => {
            let code = cli::doctor::run(&ctx.config).await?;
            std::process::exit(code);
        }
    }

    Ok(())
}

/// Initialise the tracing subscriber.
///
/// Pretty (compact) or JSON output per config; when a log file is given,
/// logs also go to a daily-rotated file and the returned guard must stay
/// alive for the background writer to flush.
fn setup_logging(
    log_level: &str,
    log_file: Option<&std::path::Path>,
    log_format: &str,
) -> Option<tracing_appender::non_blocking::WorkerGuard> {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let use_json = log_format == "json";

    if let Some(path) = log_file {
        let dir = path.parent().unwrap_or_else(|| std::path::Path::new("."));
        let filename = path
            .file_name()
            .unwrap_or_else(|| std::ffi::OsStr::new("senior-intern.log"));

        // Ensure the directory exists before tracing-appender tries to open it.
        if let Err(e) = std::fs::create_dir_all(dir) {
            eprintln!(
                "warn: could not create log directory '{}': {e} — falling back to stderr",
                dir.display()
            );
            init_stderr_only(log_level, use_json);
            return None;
        }

        let appender = tracing_appender::rolling::daily(dir, filename);
        let (non_blocking, guard) = tracing_appender::non_blocking(appender);

        if use_json {
            tracing_subscriber::registry()
                .with(EnvFilter::new(log_level))
                .with(fmt::layer().json().with_writer(std::io::stderr))
                .with(fmt::layer().json().with_writer(non_blocking))
                .init();
        } else {
            tracing_subscriber::registry()
                .with(EnvFilter::new(log_level))
                .with(fmt::layer().compact().with_writer(std::io::stderr))
                .with(fmt::layer().with_writer(non_blocking))
                .init();
        }
        Some(guard)
    } else {
        init_stderr_only(log_level, use_json);
        None
    }
}

/// Logs go to stderr so they never interleave with the rendered pages.
fn init_stderr_only(log_level: &str, use_json: bool) {
    if use_json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(log_level)
            .with_writer(std::io::stderr)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(log_level)
            .compact()
            .with_writer(std::io::stderr)
            .init();
    }
}
