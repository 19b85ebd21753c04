#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use shutter_core::processing::{round1, round4, ProcessingReport};

fn report(total: f64, load: f64, process: f64) -> ProcessingReport {
    ProcessingReport {
        total_secs: total,
        load_secs: load,
        process_secs: process,
        outputs: vec![],
    }
}

#[test]
fn breakdown_percentages_sum_close_to_hundred() {
    let (load_pct, process_pct) = report(0.3, 0.1, 0.2).breakdown();
    assert_eq!(load_pct, 33.3);
    assert_eq!(process_pct, 66.7);
    assert!((load_pct + process_pct - 100.0).abs() < 0.2);
}

#[test]
fn breakdown_rounds_to_one_decimal() {
    let (load_pct, process_pct) = report(1.0, 0.12345, 0.87655).breakdown();
    assert_eq!(load_pct, 12.3);
    assert_eq!(process_pct, 87.7);
}

#[test]
fn zero_total_reports_zero_percentages() {
    assert_eq!(report(0.0, 0.0, 0.0).breakdown(), (0.0, 0.0));
    assert_eq!(report(-1.0, 0.5, 0.5).breakdown(), (0.0, 0.0));
}

#[test]
fn rounding_helpers() {
    assert_eq!(round4(0.123456), 0.1235);
    assert_eq!(round4(1.0), 1.0);
    assert_eq!(round1(99.95), 100.0);
}
