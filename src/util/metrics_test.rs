use super::*;

fn summary(compliant: u32, partial: u32, missing: u32, not_assessed: u32) -> DashboardSummary {
    DashboardSummary { compliant, partial, missing, not_assessed, ..DashboardSummary::default() }
}

// =============================================================
// Percentages and readiness
// =============================================================

#[test]
fn percentage_zero_total_is_zero() {
    assert_eq!(percentage(5, 0), 0);
}

#[test]
fn percentage_rounds_to_nearest() {
    assert_eq!(percentage(1, 3), 33);
    assert_eq!(percentage(2, 3), 67);
    assert_eq!(percentage(3, 3), 100);
}

#[test]
fn readiness_score_weights_partial_at_half() {
    // 10 compliant + 4 partial of 20 total: (10 + 2) / 20 = 60%.
    assert_eq!(readiness_score(&summary(10, 4, 4, 2)), 60);
}

#[test]
fn readiness_score_empty_program_is_zero() {
    assert_eq!(readiness_score(&summary(0, 0, 0, 0)), 0);
}

#[test]
fn readiness_score_fully_compliant_is_hundred() {
    assert_eq!(readiness_score(&summary(8, 0, 0, 0)), 100);
}

#[test]
fn readiness_class_thresholds() {
    assert_eq!(readiness_class(70), "good");
    assert_eq!(readiness_class(69), "fair");
    assert_eq!(readiness_class(40), "fair");
    assert_eq!(readiness_class(39), "poor");
}

// =============================================================
// Risk bands
// =============================================================

#[test]
fn risk_band_buckets_cover_the_grid() {
    assert_eq!(risk_band(1, 1), RiskBand::Low);
    assert_eq!(risk_band(2, 2), RiskBand::Low);
    assert_eq!(risk_band(1, 5), RiskBand::Moderate);
    assert_eq!(risk_band(3, 3), RiskBand::Moderate);
    assert_eq!(risk_band(2, 5), RiskBand::Elevated);
    assert_eq!(risk_band(3, 5), RiskBand::High);
    assert_eq!(risk_band(4, 4), RiskBand::High);
    assert_eq!(risk_band(4, 5), RiskBand::Critical);
    assert_eq!(risk_band(5, 5), RiskBand::Critical);
}

#[test]
fn risk_band_css_classes_are_distinct() {
    let classes = [
        RiskBand::Low.css_class(),
        RiskBand::Moderate.css_class(),
        RiskBand::Elevated.css_class(),
        RiskBand::High.css_class(),
        RiskBand::Critical.css_class(),
    ];
    for (i, a) in classes.iter().enumerate() {
        for (j, b) in classes.iter().enumerate() {
            if i != j {
                assert_ne!(a, b);
            }
        }
    }
}

// =============================================================
// Trend series
// =============================================================

#[test]
fn trend_series_is_deterministic() {
    assert_eq!(trend_series(60, 12), trend_series(60, 12));
}

#[test]
fn trend_series_has_requested_length_and_ends_at_score() {
    let series = trend_series(72, 12);
    assert_eq!(series.len(), 12);
    assert_eq!(series.last().copied(), Some(72));
}

#[test]
fn trend_series_stays_in_bounds_for_extreme_scores() {
    for value in trend_series(0, 12) {
        assert!(value <= 100);
    }
    assert!(trend_series(3, 12).iter().all(|v| *v <= 100));
    assert_eq!(trend_series(100, 12).last().copied(), Some(100));
}

#[test]
fn trend_series_single_point_is_the_score() {
    assert_eq!(trend_series(55, 1), vec![55]);
}

// =============================================================
// Polyline
// =============================================================

#[test]
fn polyline_points_empty_series_is_empty() {
    assert_eq!(polyline_points(&[], 100.0, 40.0), "");
}

#[test]
fn polyline_points_maps_value_range_onto_viewbox() {
    let points = polyline_points(&[0, 50, 100], 100.0, 40.0);
    assert_eq!(points, "0.0,40.0 50.0,20.0 100.0,0.0");
}
