// Pure functions for per-parameter sub-index (QI) calculation.

use super::score::IndexScore;
use super::standards::{ScoringPolicy, StandardEntry, StandardsCatalog};

/// Calculate the sub-index for a single reading against a standards entry.
///
/// Returns `None` when the reading is not a finite number; the caller
/// excludes such parameters from aggregation entirely instead of treating
/// them as zero. The result is clamped to [0, 100], which defends against
/// formula overshoot on extreme readings.
pub fn sub_index(value: f64, entry: &StandardEntry) -> Option<IndexScore> {
    if !value.is_finite() {
        return None;
    }

    let qi = match entry.policy {
        ScoringPolicy::RangeCentered => range_centered_qi(value, entry),
        ScoringPolicy::ZeroIdeal => zero_ideal_qi(value, entry),
        ScoringPolicy::BoundedIdeal => bounded_ideal_qi(value, entry),
    };

    Some(IndexScore::new(qi))
}

/// Catalog-keyed variant: unknown parameter names score as missing.
pub fn sub_index_for(
    name: &str,
    value: f64,
    catalog: &StandardsCatalog,
) -> Option<IndexScore> {
    match catalog.get(name) {
        Some(entry) => sub_index(value, entry),
        None => {
            log::debug!("no standards entry for parameter {}, excluding", name);
            None
        }
    }
}

// Mild penalty per unit of deviation inside the acceptable band, double
// rate outside it.
fn range_centered_qi(value: f64, entry: &StandardEntry) -> f64 {
    if value >= entry.min && value <= entry.max {
        100.0 - (value - entry.ideal).abs() * 10.0
    } else {
        (100.0 - (value - entry.ideal).abs() * 20.0).max(0.0)
    }
}

// Linear decay to 0 at the ceiling, 1.5x the rate beyond it.
fn zero_ideal_qi(value: f64, entry: &StandardEntry) -> f64 {
    if value <= entry.max {
        100.0 - (value / entry.max) * 100.0
    } else {
        (100.0 - (value / entry.max) * 150.0).max(0.0)
    }
}

// Deviation from the ideal scaled by the ceiling; past the ceiling only the
// excess is scored.
fn bounded_ideal_qi(value: f64, entry: &StandardEntry) -> f64 {
    if value <= entry.max {
        100.0 - (value - entry.ideal).abs() / entry.max * 100.0
    } else {
        (100.0 - (value - entry.max) / entry.max * 100.0).max(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn catalog() -> StandardsCatalog {
        StandardsCatalog::who_bis()
    }

    fn qi(name: &str, value: f64) -> f64 {
        sub_index_for(name, value, &catalog())
            .expect("expected a defined sub-index")
            .value()
    }

    #[test]
    fn ph_at_ideal_scores_perfectly() {
        assert_eq!(qi("pH", 7.0), 100.0);
    }

    #[test]
    fn ph_inside_band_uses_mild_penalty() {
        // 100 - |7.2 - 7.0| * 10
        assert!((qi("pH", 7.2) - 98.0).abs() < 1e-9);
        // 100 - |6.5 - 7.0| * 10
        assert!((qi("pH", 6.5) - 95.0).abs() < 1e-9);
    }

    #[test]
    fn ph_outside_band_doubles_the_penalty_rate() {
        // 100 - |5.0 - 7.0| * 20
        assert!((qi("pH", 5.0) - 60.0).abs() < 1e-9);
        // 100 - |11.0 - 7.0| * 20 = 20
        assert!((qi("pH", 11.0) - 20.0).abs() < 1e-9);
    }

    #[test]
    fn bod_boundaries_for_zero_ideal_policy() {
        assert_eq!(qi("BOD", 0.0), 100.0);
        assert_eq!(qi("BOD", 3.0), 0.0);
        // Midpoint decays linearly: 100 - (1.5/3)*100
        assert!((qi("BOD", 1.5) - 50.0).abs() < 1e-9);
    }

    #[test]
    fn bod_beyond_ceiling_decays_faster_and_clamps() {
        // 100 - (4/3)*150 < 0, clamped
        assert_eq!(qi("BOD", 4.0), 0.0);
        assert_eq!(qi("BOD", 10000.0), 0.0);
    }

    #[test]
    fn do_at_ideal_scores_perfectly() {
        // 100 - |6 - 6| / 14 * 100
        assert_eq!(qi("DO", 6.0), 100.0);
    }

    #[test]
    fn do_below_ideal_penalized_by_deviation_over_ceiling() {
        // 100 - |2 - 6| / 14 * 100
        assert!((qi("DO", 2.0) - (100.0 - 4.0 / 14.0 * 100.0)).abs() < 1e-9);
    }

    #[test]
    fn do_above_ceiling_scores_the_excess() {
        // 100 - (16 - 14) / 14 * 100
        assert!((qi("DO", 16.0) - (100.0 - 2.0 / 14.0 * 100.0)).abs() < 1e-9);
    }

    #[test]
    fn tds_at_ideal_scores_perfectly() {
        assert_eq!(qi("TDS", 300.0), 100.0);
    }

    #[test]
    fn tds_above_ceiling_uses_excess_branch() {
        // 100 - (900 - 500) / 500 * 100
        assert!((qi("TDS", 900.0) - 20.0).abs() < 1e-9);
    }

    #[test]
    fn unknown_parameter_is_excluded() {
        assert!(sub_index_for("Selenium", 1.0, &catalog()).is_none());
    }

    #[test]
    fn non_finite_readings_are_excluded() {
        assert!(sub_index_for("pH", f64::NAN, &catalog()).is_none());
        assert!(sub_index_for("pH", f64::INFINITY, &catalog()).is_none());
    }

    #[test]
    fn extremely_low_do_is_clamped_not_negative() {
        // Deep negative DO readings are sensor garbage; the formula would
        // overshoot below zero without the clamp.
        let entry = catalog().get("DO").cloned().unwrap();
        let score = sub_index(-100.0, &entry).unwrap();
        assert!(score.value() >= 0.0);
    }
}
