//! Performance benchmarks for the Employer Cost Engine.
//!
//! The calculator runs on every keystroke, so a single derive must stay well
//! under a millisecond:
//! - Single compute: < 20μs mean
//! - Derive from raw text: < 25μs mean
//! - Argument sheet rendering: < 50μs mean
//! - HTTP /calculate round trip: < 1ms mean
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use chrono::NaiveDate;
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rust_decimal::Decimal;

use employer_cost_engine::api::{AppState, create_router};
use employer_cost_engine::calculation::{compute, derive};
use employer_cost_engine::config::ConfigLoader;
use employer_cost_engine::export::{build_argument_sheet, build_share_text};
use employer_cost_engine::models::GrossSalary;

use axum::{body::Body, http::Request};
use tower::ServiceExt;

/// Creates a test state with loaded configuration.
fn create_test_state() -> AppState {
    let config = ConfigLoader::load("./config/es2026").expect("Failed to load config");
    AppState::new(config)
}

/// Benchmark: a single compute from an already-parsed salary.
fn bench_compute(c: &mut Criterion) {
    let salary = GrossSalary::new(Decimal::new(35000, 0)).unwrap();
    let rate = Decimal::new(15, 3);

    c.bench_function("compute", |b| {
        b.iter(|| black_box(compute(black_box(salary), black_box(rate))))
    });
}

/// Benchmark: derive from raw input across the bracket range.
fn bench_derive(c: &mut Criterion) {
    let mut group = c.benchmark_group("derive");

    for raw in ["18.000 €", "35000", "59.999", "120.000 €"] {
        group.bench_with_input(BenchmarkId::from_parameter(raw), raw, |b, raw| {
            b.iter(|| black_box(derive(black_box(raw), "construction")))
        });
    }

    group.finish();
}

/// Benchmark: the export and share texts.
fn bench_texts(c: &mut Criterion) {
    let result = derive("35000", "office").unwrap();
    let date = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap();

    c.bench_function("argument_sheet", |b| {
        b.iter(|| black_box(build_argument_sheet(black_box(&result), date)))
    });
    c.bench_function("share_text", |b| {
        b.iter(|| black_box(build_share_text(black_box(&result))))
    });
}

/// Benchmark: one request through the router.
fn bench_http_calculate(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let router = create_router(create_test_state());
    let body = serde_json::json!({ "salary": "35.000 €", "sector": "transport" }).to_string();

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

/// Benchmark: a burst of keystrokes, each re-deriving the result.
fn bench_typing_burst(c: &mut Criterion) {
    let typed = "48000";
    let keystrokes: Vec<&str> = (1..=typed.len()).map(|n| &typed[..n]).collect();

    let mut group = c.benchmark_group("typing");
    group.throughput(Throughput::Elements(keystrokes.len() as u64));

    group.bench_function("burst_5_keystrokes", |b| {
        b.iter(|| {
            for raw in &keystrokes {
                black_box(derive(black_box(raw), "office"));
            }
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_compute,
    bench_derive,
    bench_texts,
    bench_http_calculate,
    bench_typing_burst
);
criterion_main!(benches);
