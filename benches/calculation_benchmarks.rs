//! Performance benchmarks for the teacher pay engine.
//!
//! The calculator reruns on every form edit, so a single calculation should
//! stay well under a millisecond. The HTTP benchmarks include JSON parsing
//! and response serialization.
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use teacher_pay::api::{AppState, create_router};
use teacher_pay::calculation::compute;
use teacher_pay::config::PayConfig;
use teacher_pay::models::{GroupClass, SalaryState, StudentGrade, TeacherLevel, TrialSuccessRecord};

use axum::{body::Body, http::Request};
use tower::ServiceExt;

/// Builds a state with every grade taught and `groups` group classes.
fn create_state(groups: usize) -> SalaryState {
    let mut state = SalaryState::new();
    state.set_level(TeacherLevel::Four);
    for (i, grade) in StudentGrade::ALL.into_iter().enumerate() {
        state.set_personal_class_count(grade, (i as u32 % 4) + 1);
    }
    state.group_classes = (0..groups)
        .map(|i| GroupClass {
            id: format!("group_{:03}", i),
            grade: StudentGrade::ALL[i % StudentGrade::ALL.len()],
            student_count: (i as u32 % 6) + 1,
            class_count: (i as u32 % 3) + 1,
        })
        .collect();
    state.trial_success_records = vec![TrialSuccessRecord {
        id: "trial_001".to_string(),
        grade: StudentGrade::Middle2,
        count: 2,
    }];
    state.set_trial_fail_count(3);
    state
}

/// Benchmark: calculator alone, varying the number of group classes.
fn bench_compute(c: &mut Criterion) {
    let mut group = c.benchmark_group("compute");

    for groups in [0usize, 10, 100] {
        let state = create_state(groups);
        group.bench_with_input(BenchmarkId::from_parameter(groups), &state, |b, state| {
            b.iter(|| black_box(compute(black_box(state))))
        });
    }

    group.finish();
}

/// Benchmark: a single POST /calculate round trip.
fn bench_http_request(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let router = create_router(AppState::new(PayConfig::standard()));
    let body = serde_json::to_string(&create_state(10)).unwrap();

    c.bench_function("http_calculate", |b| {
        b.to_async(&rt).iter(|| async {
            let router = router.clone();
            let response = router
                .oneshot(
                    Request::builder()
                        .method("POST")
                        .uri("/calculate")
                        .header("Content-Type", "application/json")
                        .body(Body::from(body.clone()))
                        .unwrap(),
                )
                .await
                .unwrap();
            black_box(response)
        })
    });
}

/// Benchmark: recalculating 1000 states, as when replaying a form session.
fn bench_batch_1000(c: &mut Criterion) {
    let states: Vec<SalaryState> = (0..1000).map(|i| create_state(i % 8)).collect();

    let mut group = c.benchmark_group("batch_processing");
    group.throughput(Throughput::Elements(states.len() as u64));
    group.bench_function("batch_1000", |b| {
        b.iter(|| {
            let results: Vec<_> = states.iter().map(compute).collect();
            black_box(results)
        })
    });
    group.finish();
}

criterion_group!(benches, bench_compute, bench_http_request, bench_batch_1000);
criterion_main!(benches);
