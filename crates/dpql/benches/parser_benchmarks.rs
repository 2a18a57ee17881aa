//! Ingestion performance benchmarks.
//!
//! Measures CSV/TSV loading across row counts, column counts and delimiters.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use dpql::Parser;
use std::io::Write;
use tempfile::NamedTempFile;

/// Generate delimited text with keys, foreign references and quoted values.
fn generate_data(rows: usize, cols: usize, delimiter: char) -> String {
    let mut data = String::new();

    let header: Vec<String> = (0..cols).map(|i| format!("column_{}", i + 1)).collect();
    data.push_str(&header.join(&delimiter.to_string()));
    data.push('\n');

    for row in 0..rows {
        let cells: Vec<String> = (0..cols)
            .map(|col| match col % 4 {
                0 => format!("ID_{:06}", row),
                1 => format!("CUST_{:04}", row % 250),
                2 => format!("\"Region {}{} North\"", row % 8, delimiter),
                _ => format!("Category_{}", row % 10),
            })
            .collect();
        data.push_str(&cells.join(&delimiter.to_string()));
        data.push('\n');
    }

    data
}

/// Benchmark in-memory parsing with delimiter auto-detection.
fn bench_parse_str(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_str");

    for (label, delimiter) in [("csv", ','), ("tsv", '\t')] {
        for rows in [100, 1_000, 10_000] {
            let data = generate_data(rows, 10, delimiter);

            group.throughput(Throughput::Bytes(data.len() as u64));
            group.bench_with_input(BenchmarkId::new(label, rows), &data, |b, data| {
                let parser = Parser::new();
                b.iter(|| black_box(parser.parse_str("bench", data).unwrap()))
            });
        }
    }

    group.finish();
}

/// Benchmark loading from disk with varying column counts.
fn bench_parse_file_column_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_file_column_scaling");

    for cols in [5, 10, 20, 50] {
        let data = generate_data(1_000, cols, ',');
        let mut temp = NamedTempFile::with_suffix(".csv").unwrap();
        temp.write_all(data.as_bytes()).unwrap();

        group.throughput(Throughput::Bytes(data.len() as u64));
        group.bench_with_input(BenchmarkId::new("cols", cols), &temp, |b, temp| {
            let parser = Parser::new();
            b.iter(|| black_box(parser.parse_file(temp.path()).unwrap()))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_parse_str, bench_parse_file_column_scaling);
criterion_main!(benches);
