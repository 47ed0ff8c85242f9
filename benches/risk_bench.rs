// ABOUTME: Criterion benchmarks for the risk engine
// ABOUTME: Measures single assessments, answer decoding and parallel batch assessment
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Criterion benchmarks for the risk engine.
//!
//! Measures the per-request path (decode then assess) and batch throughput
//! for offline re-scoring.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]

use carebridge_server::intelligence::RiskEngine;
use carebridge_server::models::AnswerRecord;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use serde_json::{json, Value};

const BATCH_SIZES: [usize; 3] = [10, 100, 1000];

fn full_answers() -> Value {
    json!({
        "age": 52,
        "gender": "female",
        "height_cm": 158,
        "weight_kg": 71,
        "waist": 88,
        "physical_activity": "low",
        "family_diabetes": "one",
        "family_hypertension": "yes",
        "family_heart": "no",
        "family_cholesterol": "yes",
        "family_thyroid": "yes",
        "tobacco_use": "no",
        "diet_salt": "high",
        "diet_sugar": "moderate",
        "diet_fried": "moderate",
        "diet_vegetables": "low",
        "stress_level": "moderate",
        "symptom_thirst": "yes",
        "symptom_urination": "no",
        "symptom_fatigue": "yes",
        "thyroid_symptoms": "yes",
        "neck_swelling": "no"
    })
}

/// Records spread over the age and BMI ranges so branches vary
fn generate_records(count: usize) -> Vec<AnswerRecord> {
    (0..count)
        .map(|index| {
            let mut answers = full_answers();
            answers["age"] = json!(20 + index % 60);
            answers["weight_kg"] = json!(50 + index % 50);
            answers["gender"] = json!(if index % 2 == 0 { "male" } else { "female" });
            serde_json::from_value(answers).unwrap_or_default()
        })
        .collect()
}

fn bench_single_assessment(c: &mut Criterion) {
    let engine = RiskEngine::default();
    let record: AnswerRecord = serde_json::from_value(full_answers()).unwrap_or_default();
    let raw = full_answers().to_string();

    let mut group = c.benchmark_group("assess");

    group.bench_function("assess_record", |b| {
        b.iter(|| engine.assess(black_box(&record)));
    });

    group.bench_function("decode_and_assess", |b| {
        b.iter(|| {
            let decoded: AnswerRecord = serde_json::from_str(black_box(&raw)).unwrap_or_default();
            engine.assess(&decoded)
        });
    });

    group.finish();
}

fn bench_batch_assessment(c: &mut Criterion) {
    let engine = RiskEngine::default();
    let mut group = c.benchmark_group("assess_batch");

    for size in BATCH_SIZES {
        let records = generate_records(size);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("parallel", size), &records, |b, records| {
            b.iter(|| engine.assess_batch(black_box(records)));
        });

        group.bench_with_input(BenchmarkId::new("sequential", size), &records, |b, records| {
            b.iter(|| {
                records
                    .iter()
                    .map(|record| engine.assess(black_box(record)))
                    .collect::<Vec<_>>()
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_single_assessment, bench_batch_assessment);
criterion_main!(benches);
