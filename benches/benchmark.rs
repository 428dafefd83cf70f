//! Performance benchmarks for FastUpd
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use fast_upd::core::{call_regions, classify_site, GenotypeCode, SiteCall, SiteRecord};
use fast_upd::vcf::Variant;

/// Benchmark the trio classifier over the full code space
fn bench_classifier(c: &mut Criterion) {
    let codes = [
        GenotypeCode::HomRef,
        GenotypeCode::Het,
        GenotypeCode::HomAlt,
        GenotypeCode::Other,
    ];

    c.bench_function("classify_all_combinations", |b| {
        b.iter(|| {
            for pb in codes {
                for mo in codes {
                    for fa in codes {
                        black_box(classify_site(
                            black_box(pb),
                            black_box(mo),
                            black_box(fa),
                        ));
                    }
                }
            }
        })
    });
}

/// Benchmark data-line parsing
fn bench_variant_parse(c: &mut Criterion) {
    let line = "15\t48729423\trs1805007\tC\tT\t1284.5\tPASS\tCSQ=T|missense_variant|MC1R|0.081;DP=88\tGT:AD:DP:GQ\t0/1:40,38:78:99\t0/0:44,0:44:99\t0/1:31,30:61:99";

    c.bench_function("variant_parse", |b| {
        b.iter(|| {
            let var = Variant::parse(black_box(line), 1).unwrap();
            black_box(var)
        })
    });
}

/// Benchmark region aggregation over a synthetic chromosome
fn bench_region_calling(c: &mut Criterion) {
    let calls = [
        SiteCall::PbHeterozygous,
        SiteCall::PbHomozygous,
        SiteCall::UpdPaternalOrigin,
        SiteCall::AntiUpd,
        SiteCall::Uninformative,
    ];
    let sites: Vec<SiteRecord> = (0..100_000u64)
        .map(|i| SiteRecord {
            chrom: "1".to_string(),
            pos: 1 + i * 37,
            call: calls[(i % calls.len() as u64) as usize],
        })
        .collect();

    let mut group = c.benchmark_group("region_calling");
    group.throughput(Throughput::Elements(sites.len() as u64));
    group.bench_function("100k_sites", |b| {
        b.iter(|| {
            let regions = call_regions(black_box(sites.clone()));
            black_box(regions)
        })
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_classifier,
    bench_variant_parse,
    bench_region_calling
);
criterion_main!(benches);
