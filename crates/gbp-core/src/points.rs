//! Point calculation from a work item's labels.

use tracing::debug;

use crate::config::{CollectionMethod, PointsConfiguration};

/// Compute the point value of a label set.
///
/// A configured `no_balance_label` anywhere in `labels` forces `0`. Otherwise
/// the configured collection method decides how values combine. Labels with no
/// configured value contribute nothing.
pub fn compute_points<S: AsRef<str>>(configuration: &PointsConfiguration, labels: &[S]) -> i64 {
    if let Some(no_balance) = configuration.no_balance_label.as_deref() {
        if labels.iter().any(|label| label.as_ref() == no_balance) {
            debug!(label = no_balance, "no-balance label present");
            return 0;
        }
    }

    let method = configuration.method();
    let points = match method {
        CollectionMethod::HighVsLow => high_vs_low(configuration, labels),
        CollectionMethod::Sum => sum(configuration, labels),
    };
    debug!(?method, labels = labels.len(), points, "computed points");
    points
}

fn high_vs_low<S: AsRef<str>>(configuration: &PointsConfiguration, labels: &[S]) -> i64 {
    let mut highest = 0;
    let mut lowest = 0;

    for value in labels
        .iter()
        .filter_map(|label| configuration.value_of(label.as_ref()))
    {
        if value > 0 {
            highest = highest.max(value);
        } else {
            lowest = lowest.min(value);
        }
    }

    highest + lowest
}

/// Saturates at the `i64` bounds instead of overflowing.
fn sum<S: AsRef<str>>(configuration: &PointsConfiguration, labels: &[S]) -> i64 {
    labels
        .iter()
        .filter_map(|label| configuration.value_of(label.as_ref()))
        .fold(0i64, i64::saturating_add)
}
