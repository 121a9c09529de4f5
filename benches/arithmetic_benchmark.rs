// ============================================================================
// Decimal Arithmetic Benchmarks
// ============================================================================
//
// Benchmark Categories:
// 1. Long Multiplication - Full multiply_strings by operand size
// 2. Single Digit - Scaling one operand by a digit
// 3. Offset Addition - Carry-propagating sum with positional offset
// 4. Buffer Growth - Exact-fit appends vs. a pre-sized buffer
//
// Long multiplication is quadratic in the operand length; the size sweep
// should show it.
// ============================================================================

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use decimal_strings::prelude::*;
use std::hint::black_box;

/// Deterministic operand of `len` digits with no leading zero
fn operand(len: usize, seed: u8) -> String {
    (0..len)
        .map(|i| char::from(b'1' + ((i as u8).wrapping_mul(7).wrapping_add(seed)) % 9))
        .collect()
}

// ============================================================================
// Long Multiplication Benchmarks
// ============================================================================

fn benchmark_multiply_strings(c: &mut Criterion) {
    let mut group = c.benchmark_group("multiply_strings");

    for num_digits in [10, 100, 1000].iter() {
        let lhs = operand(*num_digits, 3);
        let rhs = operand(*num_digits, 5);

        group.bench_with_input(
            BenchmarkId::from_parameter(num_digits),
            &(&lhs, &rhs),
            |b, (lhs, rhs)| {
                let mut result = DynamicString::new().unwrap();
                b.iter(|| {
                    multiply_strings(&mut result, black_box(lhs), black_box(rhs)).unwrap();
                    black_box(result.len())
                });
            },
        );
    }

    group.finish();
}

fn benchmark_engine_overhead(c: &mut Criterion) {
    let mut group = c.benchmark_group("engine_vs_free_function");
    let lhs = operand(100, 1);
    let rhs = operand(100, 2);

    group.bench_function("free_function", |b| {
        let mut result = DynamicString::new().unwrap();
        b.iter(|| multiply_strings(&mut result, black_box(&lhs), black_box(&rhs)).unwrap());
    });

    group.bench_function("engine_noop_handler", |b| {
        let engine = DecimalEngine::with_defaults();
        let mut result = engine.new_buffer(None).unwrap();
        b.iter(|| engine.multiply(&mut result, black_box(&lhs), black_box(&rhs)).unwrap());
    });

    group.finish();
}

// ============================================================================
// Single Digit and Addition Benchmarks
// ============================================================================

fn benchmark_multiply_by_digit(c: &mut Criterion) {
    let mut group = c.benchmark_group("multiply_by_digit");

    for num_digits in [10, 100, 1000, 10000].iter() {
        let text = operand(*num_digits, 4);

        group.bench_with_input(BenchmarkId::from_parameter(num_digits), &text, |b, text| {
            let mut result = DynamicString::new().unwrap();
            b.iter(|| multiply_by_digit(&mut result, black_box(text), -7, false).unwrap());
        });
    }

    group.finish();
}

fn benchmark_add(c: &mut Criterion) {
    let mut group = c.benchmark_group("add");

    for num_digits in [10, 100, 1000, 10000].iter() {
        let a = operand(*num_digits, 6);
        let b_text = operand(*num_digits / 2, 8);

        for using_reversed in [false, true] {
            let label = if using_reversed { "reversed" } else { "natural" };
            group.bench_with_input(
                BenchmarkId::new(label, num_digits),
                &(&a, &b_text),
                |b, (a, b_text)| {
                    let mut result = DynamicString::new().unwrap();
                    b.iter(|| {
                        add(&mut result, black_box(a), black_box(b_text), 3, using_reversed)
                            .unwrap()
                    });
                },
            );
        }
    }

    group.finish();
}

// ============================================================================
// Buffer Growth Benchmarks
// ============================================================================

fn benchmark_buffer_growth(c: &mut Criterion) {
    let mut group = c.benchmark_group("buffer_append");

    for num_bytes in [100, 1000, 10000].iter() {
        group.bench_with_input(
            BenchmarkId::new("exact_fit", num_bytes),
            num_bytes,
            |b, &num_bytes| {
                b.iter(|| {
                    let mut buf = DynamicString::new().unwrap();
                    for _ in 0..num_bytes {
                        buf.append_char(b'7').unwrap();
                    }
                    black_box(buf.capacity())
                });
            },
        );

        group.bench_with_input(
            BenchmarkId::new("reserved", num_bytes),
            num_bytes,
            |b, &num_bytes| {
                b.iter(|| {
                    let mut buf = DynamicString::new().unwrap();
                    buf.reserve_exact(num_bytes + 1).unwrap();
                    for _ in 0..num_bytes {
                        buf.append_char(b'7').unwrap();
                    }
                    black_box(buf.capacity())
                });
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_multiply_strings,
    benchmark_engine_overhead,
    benchmark_multiply_by_digit,
    benchmark_add,
    benchmark_buffer_growth,
);
criterion_main!(benches);
