use criterion::{black_box, criterion_group, criterion_main, Criterion};
use senior_intern::board::{diagnose, match_advisors};
use senior_intern::model::{
    CompanyStage, FounderProblem, FounderProblemDraft, ImpactArea, Remedy, RootCause,
};

fn worst_case_problem() -> FounderProblem {
    let draft = FounderProblemDraft {
        founder_name: "Priya Shah".into(),
        founder_email: "priya@example.com".into(),
        company_name: "Shelfwise".into(),
        company_one_liner: "Inventory SaaS for small retailers.".into(),
        main_problem_one_line: "We don't have repeat customers.".into(),
        impact_areas: ImpactArea::ALL.to_vec(),
        why_exists: RootCause::ALL.to_vec(),
        what_tried: Remedy::ALL.to_vec(),
        urgency: 10,
        company_stage: CompanyStage::Scaling,
        detailed_description: "Everything is on fire at once.".into(),
    };
    FounderProblem::new(&draft).unwrap()
}

fn bench_board(c: &mut Criterion) {
    let problem = worst_case_problem();

    c.bench_function("diagnose_all_triggers", |b| {
        b.iter(|| diagnose(black_box(&problem)))
    });

    c.bench_function("match_advisors_all_impacts", |b| {
        b.iter(|| match_advisors(black_box(&problem)))
    });
}

criterion_group!(benches, bench_board);
criterion_main!(benches);
