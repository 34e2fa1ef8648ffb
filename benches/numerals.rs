//! Benchmarks for conversion and glyph mapping.

use criterion::{Criterion, black_box, criterion_group, criterion_main};

use uinal::convert;
use uinal::digit::Digit;
use uinal::glyph::codepoint;
use uinal::glyph::pictogram::Pictogram;

fn bench_to_base20(c: &mut Criterion) {
    c.bench_function("to_base20_i64_max", |bench| {
        bench.iter(|| black_box(convert::to_base20(black_box(i64::MAX)).unwrap()))
    });
}

fn bench_codepoint_string(c: &mut Criterion) {
    let digits = convert::to_base20(i64::MAX).unwrap();
    c.bench_function("codepoint_string_15_digits", |bench| {
        bench.iter(|| black_box(codepoint::codepoint_string(black_box(&digits))))
    });
}

fn bench_pictogram_rows(c: &mut Criterion) {
    let digit = Digit::new(19).unwrap();
    c.bench_function("pictogram_rows_19", |bench| {
        bench.iter(|| black_box(Pictogram::for_digit(black_box(digit)).rows()))
    });
}

criterion_group!(
    benches,
    bench_to_base20,
    bench_codepoint_string,
    bench_pictogram_rows
);
criterion_main!(benches);
