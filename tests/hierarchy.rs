mod common;

use box_counting::diagnostics::{CacheReport, EntryKind};
use box_counting::{run_sweep, BoxSchedule, BoxSize, Feature};
use common::synthetic_raster::{disc, sierpinski_carpet};

#[test]
fn carpet_counts_follow_self_similarity() {
    let _ = env_logger::builder().is_test(true).try_init();
    let mut root = Feature::new(sierpinski_carpet(4));
    let sizes = BoxSchedule::Explicit {
        sizes: vec![[3, 3], [9, 9], [27, 27], [81, 81]],
    }
    .sizes()
    .unwrap();
    let report = run_sweep(&mut root, &sizes).expect("sweep over carpet");

    let counts: Vec<_> = report.levels.iter().map(|l| l.count).collect();
    assert_eq!(counts, vec![512, 64, 8, 1]);

    let (sides, all_counts) = root.covering_points();
    assert_eq!(sides, vec![1.0, 3.0, 9.0, 27.0, 81.0]);
    assert_eq!(all_counts[0], 4096);

    let slope = (all_counts[1] as f64 / all_counts[2] as f64).ln() / 3f64.ln();
    assert!(
        (slope - 8f64.ln() / 3f64.ln()).abs() < 1e-9,
        "unexpected carpet dimension estimate {slope}"
    );
}

#[test]
fn reuse_equals_direct_for_uneven_disc() {
    let _ = env_logger::builder().is_test(true).try_init();
    let grid = disc(101, 67, 30.0);
    let direct = Feature::new(grid.clone());
    let mut root = Feature::new(grid);

    for side in [2usize, 4, 8, 16, 32, 64, 128] {
        let target = BoxSize::square(side);
        let reused = root.generate_covering_from_existing(target).unwrap();
        let expected = direct.generate_covering(target).unwrap();
        assert_eq!(reused.count(), expected.count(), "box side {side}");
        assert_eq!(reused.grid(), expected.grid(), "box side {side}");
    }

    let report = CacheReport::from_feature(&root);
    assert_eq!(report.count_kind(EntryKind::Materialized), 7);
    assert_eq!(report.entries.len(), 8);
    assert_eq!(report.count_kind(EntryKind::Own), 8);
}

#[test]
fn dyadic_sweep_counts_do_not_increase() {
    let grid = disc(90, 90, 40.0);
    let schedule = BoxSchedule::dyadic_for(90, 90);
    let mut root = Feature::new(grid);
    let report = run_sweep(&mut root, &schedule.sizes().unwrap()).unwrap();

    assert_eq!(report.levels.last().map(|l| l.count), Some(1));
    for pair in report.points.windows(2) {
        assert!(
            pair[1].count <= pair[0].count,
            "count increased from {:?} to {:?}",
            pair[0],
            pair[1]
        );
    }
}
