//! Usage extraction performance benchmarks

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use aimetascan::services::{classify_output, extract_usage};
use serde_json::{json, Value};

/// Create a flat payload with all four fields at the top level
fn create_flat_payload() -> Value {
    json!({
        "model": "gpt-4o",
        "promptTokens": 377,
        "completionTokens": 60,
        "totalTokens": 437
    })
}

/// Create a payload with the usage block buried under step results
fn create_nested_payload(steps: usize) -> Value {
    let steps: Vec<Value> = (0..steps)
        .map(|i| {
            json!({
                "id": format!("step-{i}"),
                "response": {
                    "usage": {"prompt_tokens": 21, "completion_tokens": 42, "total_tokens": 63},
                    "modelId": "gpt-4o-mini"
                }
            })
        })
        .collect();
    json!({"result": {"steps": steps}})
}

fn bench_extract_usage(c: &mut Criterion) {
    let flat = create_flat_payload();
    c.bench_function("extract_flat", |b| {
        b.iter(|| extract_usage(black_box(&flat)))
    });

    let mut group = c.benchmark_group("extract_nested");
    for size in [1usize, 10, 100] {
        let payload = create_nested_payload(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &payload, |b, payload| {
            b.iter(|| extract_usage(black_box(payload)))
        });
    }
    group.finish();
}

fn bench_classify_output(c: &mut Criterion) {
    let raw = serde_json::to_string(&create_nested_payload(10)).unwrap();
    c.bench_function("classify_non_ai", |b| {
        b.iter(|| classify_output(black_box(&raw)))
    });

    let ai_raw = serde_json::to_string(&create_flat_payload()).unwrap();
    c.bench_function("classify_ai", |b| {
        b.iter(|| classify_output(black_box(&ai_raw)))
    });
}

criterion_group!(benches, bench_extract_usage, bench_classify_output);
criterion_main!(benches);
