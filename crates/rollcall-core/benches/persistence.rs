use criterion::{black_box, criterion_group, criterion_main, Criterion};

use chrono::{Duration, NaiveDate};
use rollcall_core::model::AttendanceMark;
use rollcall_core::store::AttendanceStore;

fn bench_record_codec(c: &mut Criterion) {
    let mut group = c.benchmark_group("record_codec");

    let mark = AttendanceMark {
        student_id: 20511,
        timestamp: NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap(),
        present: true,
    };
    let line = mark.to_string();

    group.bench_function("render", |b| {
        b.iter(|| black_box(&mark).to_string());
    });

    group.bench_function("parse", |b| {
        b.iter(|| black_box(line.as_str()).parse::<AttendanceMark>().unwrap());
    });

    group.finish();
}

fn bench_snapshot_save(c: &mut Criterion) {
    let mut group = c.benchmark_group("snapshot_save");

    // A term's worth of marks: 30 students, 100 marks each.
    let start = NaiveDate::from_ymd_opt(2024, 1, 1)
        .unwrap()
        .and_hms_opt(9, 0, 0)
        .unwrap();
    let mut store = AttendanceStore::new();
    for student_id in 1..=30 {
        for day in 0..100 {
            store.insert(AttendanceMark {
                student_id,
                timestamp: start + Duration::days(day),
                present: day % 7 != 0,
            });
        }
    }

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("records.txt");

    group.bench_function("save_3000_marks", |b| {
        b.iter(|| black_box(&store).save(&path).unwrap());
    });

    group.finish();
}

criterion_group!(benches, bench_record_codec, bench_snapshot_save);
criterion_main!(benches);
