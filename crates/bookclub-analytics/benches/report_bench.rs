//! Full report pipeline benchmark (100, 1K, 10K books).

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use bookclub_analytics::report::ReportPipeline;
use bookclub_core::config::ReportOptions;
use bookclub_core::types::group::{
    BookRecord, GroupRoster, GroupSnapshot, Member, MemberEligibility, RatingRecord,
};
use bookclub_core::{BookId, MemberId};

const MEMBERS: u64 = 8;

fn make_snapshot(n: usize) -> GroupSnapshot {
    let books: Vec<BookRecord> = (0..n)
        .map(|i| {
            // Mostly round-robin with a streaky picker and the odd group pick.
            let slot = if i % 17 == 0 { 0 } else if i % 5 == 0 { 1 } else { (i as u64 % MEMBERS) + 1 };
            BookRecord {
                id: BookId(i as u64 + 1),
                display_order: i as i64,
                picked_by: (slot > 0).then(|| MemberId(slot)),
                is_collective_pick: slot == 0,
            }
        })
        .collect();

    let roster = GroupRoster::new(
        (1..=MEMBERS)
            .map(|i| Member { id: MemberId(i), username: format!("member_{}", i) })
            .collect(),
        vec![MemberId(1)],
    );

    let eligibility = (1..=MEMBERS)
        .map(|i| MemberEligibility {
            member_id: MemberId(i),
            starting_book_id: BookId(((i - 1) * n as u64 / (MEMBERS * 2)).max(1)),
        })
        .collect();

    let ratings = (0..n)
        .flat_map(|i| {
            (1..=3).map(move |m| RatingRecord {
                book_id: BookId(i as u64 + 1),
                member_id: MemberId(m),
                rating: 1.0 + ((i + m as usize) % 9) as f64 * 0.5,
            })
        })
        .collect();

    GroupSnapshot { books, roster, eligibility, ratings, ..Default::default() }
}

fn bench_report_pipeline(c: &mut Criterion) {
    let pipeline = ReportPipeline::with_options(ReportOptions::all());

    let snapshot_100 = make_snapshot(100);
    let snapshot_1k = make_snapshot(1_000);
    let snapshot_10k = make_snapshot(10_000);

    c.bench_function("report_100_books", |b| {
        b.iter(|| {
            let report = pipeline.run(black_box(&snapshot_100));
            black_box(report);
        })
    });

    c.bench_function("report_1k_books", |b| {
        b.iter(|| {
            let report = pipeline.run(black_box(&snapshot_1k));
            black_box(report);
        })
    });

    c.bench_function("report_10k_books", |b| {
        b.iter(|| {
            let report = pipeline.run(black_box(&snapshot_10k));
            black_box(report);
        })
    });
}

criterion_group!(benches, bench_report_pipeline);
criterion_main!(benches);
