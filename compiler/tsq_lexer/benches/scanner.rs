//! Scanner and assembler throughput.
//!
//! `raw` measures single-token scanning with keyword resolution only.
//! `assembled` adds separator skipping, stitching, and sign attachment.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use tsq_lexer::{LexOptions, TokenAssembler};
use tsq_lexer_core::{RawScanner, SourceBuffer, TokenKind};

/// Generate N insert/select statement pairs.
fn generate_n_statements(n: usize) -> String {
    (0..n)
        .map(|i| {
            format!(
                "insert into db.d{i} values (now, {i}.5, -{i}, 'v{i}');\n\
                 select avg(v), max(v) from db.d{i} where ts > now - 1h \
                 interval(10m) fill(prev) limit {i};\n"
            )
        })
        .collect()
}

fn bench_raw_throughput(c: &mut Criterion) {
    let mut group = c.benchmark_group("scanner/raw/throughput");

    for num_statements in [10, 100, 1000] {
        let source = generate_n_statements(num_statements);
        let bytes = source.len() as u64;

        group.throughput(Throughput::Bytes(bytes));
        group.bench_with_input(
            BenchmarkId::from_parameter(num_statements),
            &source,
            |b, src| {
                b.iter(|| {
                    let buf = SourceBuffer::new(src);
                    let mut scanner = RawScanner::with_global_keywords(buf.cursor());
                    loop {
                        let tok = scanner.next_token();
                        if tok.len == 0 {
                            break;
                        }
                        black_box(tok);
                    }
                });
            },
        );
    }

    group.finish();
}

fn bench_assembled_throughput(c: &mut Criterion) {
    let mut group = c.benchmark_group("scanner/assembled/throughput");

    for num_statements in [10, 100, 1000] {
        let source = generate_n_statements(num_statements);
        let bytes = source.len() as u64;

        group.throughput(Throughput::Bytes(bytes));
        group.bench_with_input(
            BenchmarkId::from_parameter(num_statements),
            &source,
            |b, src| {
                b.iter(|| {
                    let buf = SourceBuffer::new(src);
                    let asm = TokenAssembler::new(&buf, LexOptions::default());
                    let mut pos = 0;
                    let mut prev_is_operator = true;
                    loop {
                        let tok = asm.next_token(&mut pos, prev_is_operator);
                        match tok.kind {
                            TokenKind::Semi => {
                                pos += 1;
                                prev_is_operator = true;
                            }
                            _ if tok.is_empty() => break,
                            kind => prev_is_operator = !kind.ends_operand(),
                        }
                        black_box(tok);
                    }
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_raw_throughput, bench_assembled_throughput);
criterion_main!(benches);
