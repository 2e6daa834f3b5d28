use std::collections::BTreeSet;

use crate::data::filter::{FilterSelection, FilteredView};
use crate::data::model::Status;

use super::ranking::{rank_labels, Ranked, RankedAggregate};
use super::tier::{RiskLevel, Tier};

/// Placeholder for a modal value that does not exist.
pub const NOT_AVAILABLE: &str = "N/A";

/// How many diseases the alert chart lists by default.
pub const TOP_DISEASES: usize = 5;

/// Row counts per status over the whole view.
pub type StatusDistribution = Ranked<Status>;

// ---------------------------------------------------------------------------
// Scalar metrics
// ---------------------------------------------------------------------------

/// Headline numbers for a filtered view.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricBundle {
    pub total_cases: usize,
    /// Percentage of diseased rows, `0.0..=100.0`.
    pub disease_ratio: f64,
    pub most_affected_crop: String,
    /// Raw `disease_name`, not prettified.
    pub most_common_disease: String,
    pub risk_level: RiskLevel,
}

impl Default for MetricBundle {
    fn default() -> Self {
        Self {
            total_cases: 0,
            disease_ratio: 0.0,
            most_affected_crop: NOT_AVAILABLE.to_string(),
            most_common_disease: NOT_AVAILABLE.to_string(),
            risk_level: Tier::Low,
        }
    }
}

/// Percentage of `diseased` in `total`; `0.0` when there is nothing to divide.
pub fn disease_ratio(diseased: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    100.0 * diseased as f64 / total as f64
}

fn mode_or_na(ranked: &RankedAggregate) -> String {
    ranked
        .mode()
        .cloned()
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

/// Compute the headline metrics. Total for every view, including empty ones.
pub fn summarize(view: &FilteredView<'_>) -> MetricBundle {
    let total_cases = view.len();
    let diseased = view.diseased().count();
    let ratio = disease_ratio(diseased, total_cases);
    let crops = rank_labels(view.diseased().map(|o| o.crop_name.as_str()));

    MetricBundle {
        total_cases,
        disease_ratio: ratio,
        most_affected_crop: mode_or_na(&crops),
        most_common_disease: mode_or_na(&disease_counts(view)),
        risk_level: Tier::classify(ratio),
    }
}

// ---------------------------------------------------------------------------
// Grouped aggregates
// ---------------------------------------------------------------------------

/// Diseased rows per `disease_name`, ranked, untruncated.
pub fn disease_counts(view: &FilteredView<'_>) -> RankedAggregate {
    rank_labels(view.diseased().map(|o| o.disease_name.as_str()))
}

/// Diseased rows per region, ranked.
pub fn region_counts(view: &FilteredView<'_>) -> RankedAggregate {
    rank_labels(view.diseased().map(|o| o.region.as_str()))
}

/// All rows per status, ranked.
pub fn status_distribution(view: &FilteredView<'_>) -> StatusDistribution {
    Ranked::count(view.iter().map(|o| o.status.clone()))
}

/// Row counts by `(crop_name, status)` with every combination present.
///
/// Crops are in first-seen order of the view. A non-empty view always has
/// `Healthy` and `Diseased` columns, followed by any other status present.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Crosstab {
    crops: Vec<String>,
    statuses: Vec<Status>,
    /// `counts[crop][status]`
    counts: Vec<Vec<usize>>,
}

impl Crosstab {
    pub fn from_view(view: &FilteredView<'_>) -> Self {
        if view.is_empty() {
            return Self::default();
        }

        let statuses: Vec<Status> = FilterSelection::default_statuses()
            .into_iter()
            .chain(view.iter().map(|o| o.status.clone()))
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        let mut crops: Vec<String> = Vec::new();
        let mut counts: Vec<Vec<usize>> = Vec::new();

        for obs in view.iter() {
            let row = match crops.iter().position(|c| *c == obs.crop_name) {
                Some(row) => row,
                None => {
                    crops.push(obs.crop_name.clone());
                    counts.push(vec![0; statuses.len()]);
                    crops.len() - 1
                }
            };
            if let Some(col) = statuses.iter().position(|s| *s == obs.status) {
                counts[row][col] += 1;
            }
        }

        Self {
            crops,
            statuses,
            counts,
        }
    }

    /// Count for a combination; `0` for combinations not seen.
    pub fn get(&self, crop: &str, status: &Status) -> usize {
        let row = self.crops.iter().position(|c| c == crop);
        let col = self.statuses.iter().position(|s| s == status);
        match (row, col) {
            (Some(row), Some(col)) => self.counts[row][col],
            _ => 0,
        }
    }

    pub fn crops(&self) -> &[String] {
        &self.crops
    }

    pub fn statuses(&self) -> &[Status] {
        &self.statuses
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.crops.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Everything the dashboard needs from one view
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Summary {
    pub metrics: MetricBundle,
    /// Top diseases among diseased rows.
    pub top_diseases: RankedAggregate,
    /// Diseased rows per region, all regions.
    pub region_counts: RankedAggregate,
    pub crop_health: Crosstab,
    pub status_distribution: StatusDistribution,
}

impl Summary {
    pub fn compute(view: &FilteredView<'_>, top_n: usize) -> Self {
        let metrics = summarize(view);
        log::debug!(
            "Summarized {} rows: ratio {:.1}%, risk {}",
            metrics.total_cases,
            metrics.disease_ratio,
            metrics.risk_level
        );

        Self {
            metrics,
            top_diseases: disease_counts(view).truncated(top_n),
            region_counts: region_counts(view),
            crop_health: Crosstab::from_view(view),
            status_distribution: status_distribution(view),
        }
    }
}
