//! Benchmarks for automaton construction and scanning.

use acdetector::{Automaton, Detector};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn vocabulary(size: usize) -> Vec<String> {
    (0..size).map(|i| format!("word{i}")).collect()
}

fn prose(words: usize) -> String {
    // Text with a hit roughly every tenth word.
    let mut text = String::new();
    for i in 0..words {
        if i % 10 == 0 {
            text.push_str(&format!("word{} ", i % 1000));
        } else {
            text.push_str("filler ");
        }
    }
    text
}

fn bench_build_10k(c: &mut Criterion) {
    let vocab = vocabulary(10_000);

    c.bench_function("build_10k_patterns", |b| {
        b.iter(|| Automaton::build(black_box(&vocab)))
    });
}

fn bench_scan_sparse_hits(c: &mut Criterion) {
    let automaton = Automaton::build(&vocabulary(10_000));
    let text = prose(2_000);

    c.bench_function("scan_sparse_hits", |b| {
        b.iter(|| automaton.find_all(black_box(&text)))
    });
}

fn bench_scan_no_hits(c: &mut Criterion) {
    let automaton = Automaton::build(&vocabulary(10_000));
    let text = "filler ".repeat(2_000);

    c.bench_function("scan_no_hits", |b| {
        b.iter(|| automaton.find_all(black_box(&text)))
    });
}

fn bench_scan_cjk(c: &mut Criterion) {
    let vocab = ["自杀指南", "法.轮.功", "红客联盟", "手机卡复制器", "三.级.片"];
    let automaton = Automaton::build(&vocab);
    let text = "然后法.轮.功 我们的扮演的角色就是跟随着主人公的喜红客联盟 怒哀乐"
        .repeat(100);

    c.bench_function("scan_cjk_text", |b| {
        b.iter(|| automaton.find_all(black_box(&text)))
    });
}

fn bench_detector_scan(c: &mut Criterion) {
    // Full path through the lifecycle guard, counter bump included.
    let detector = Detector::new();
    detector.build(&vocabulary(10_000)).unwrap();
    let text = prose(2_000);

    c.bench_function("detector_scan", |b| {
        b.iter(|| detector.scan(black_box(&text)))
    });
}

criterion_group!(
    benches,
    bench_build_10k,
    bench_scan_sparse_hits,
    bench_scan_no_hits,
    bench_scan_cjk,
    bench_detector_scan
);
criterion_main!(benches);
