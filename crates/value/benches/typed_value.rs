// Benchmarks for the hot paths of dynval-value

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use dynval_value::{PointF, TypedValue, best_number_type};

// ===== ETV =====

fn bench_etv(c: &mut Criterion) {
    let mut group = c.benchmark_group("etv");

    let samples = [
        ("unsigned64", TypedValue::unsigned64(123_456_789)),
        ("float64", TypedValue::float64(3.25)),
        ("utf8", TypedValue::utf8("a {quoted} \"string\"")),
        ("point", TypedValue::point(PointF::new(1.5, -2.5))),
    ];

    for (name, value) in &samples {
        group.bench_with_input(BenchmarkId::new("encode", name), value, |b, value| {
            b.iter(|| black_box(value).to_etv());
        });
        let text = value.to_etv();
        group.bench_with_input(BenchmarkId::new("decode", name), &text, |b, text| {
            b.iter(|| TypedValue::from_etv(black_box(text)));
        });
    }

    for len in [10_u64, 1000] {
        let ids = TypedValue::entity_vector((0..len).collect::<Vec<_>>());
        let text = ids.to_etv();
        group.bench_with_input(BenchmarkId::new("decode_entity_vector", len), &text, |b, text| {
            b.iter(|| TypedValue::from_etv(black_box(text)));
        });
    }

    group.finish();
}

// ===== COMPARE =====

fn bench_compare(c: &mut Criterion) {
    let mut group = c.benchmark_group("compare");
    let float = TypedValue::float64(42.0);
    let signed = TypedValue::signed64(42);
    let text = TypedValue::utf8("42");

    group.bench_function("float_signed", |b| {
        b.iter(|| black_box(&float).compare(black_box(&signed), false));
    });
    group.bench_function("float_text", |b| {
        b.iter(|| black_box(&float).compare(black_box(&text), false));
    });
    group.bench_function("strict_eq", |b| {
        b.iter(|| black_box(&float) == black_box(&signed));
    });
    group.finish();
}

// ===== OPS =====

fn bench_ops(c: &mut Criterion) {
    let mut group = c.benchmark_group("ops");
    let a = TypedValue::unsigned64(100);
    let b_val = TypedValue::signed64(-200);

    group.bench_function("mixed_add", |b| b.iter(|| black_box(&a) + black_box(&b_val)));
    group.bench_function("clone_handle", |b| b.iter(|| black_box(&a).clone()));
    group.bench_function("infer", |b| {
        b.iter(|| best_number_type(black_box("1.2k"), false));
    });
    group.finish();
}

criterion_group!(benches, bench_etv, bench_compare, bench_ops);
criterion_main!(benches);
