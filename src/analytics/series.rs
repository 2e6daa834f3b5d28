use crate::data::model::Status;

use super::metrics::{Crosstab, StatusDistribution, Summary};
use super::ranking::RankedAggregate;
use super::tier::Tier;

/// One bar of a ranked chart.
#[derive(Debug, Clone, PartialEq)]
pub struct SeverityBar {
    pub label: String,
    pub value: usize,
    pub severity: Tier,
}

/// One column of the stacked crop-health chart.
#[derive(Debug, Clone, PartialEq)]
pub struct StackedColumn {
    pub crop: String,
    /// Count per status, in crosstab status order. Zero counts included.
    pub segments: Vec<(Status, usize)>,
}

impl StackedColumn {
    pub fn total(&self) -> usize {
        self.segments.iter().map(|(_, c)| c).sum()
    }
}

/// First `n` entries of an already ranked aggregate, tagged with severity.
pub fn top_n(ranked: &RankedAggregate, n: usize) -> Vec<SeverityBar> {
    ranked
        .iter()
        .take(n)
        .map(|(label, value)| SeverityBar {
            label: label.clone(),
            value,
            severity: Tier::classify_count(value),
        })
        .collect()
}

/// Columns for a stacked bar chart, one per crop in first-seen order.
pub fn stacked(crosstab: &Crosstab) -> Vec<StackedColumn> {
    crosstab
        .crops()
        .iter()
        .map(|crop| StackedColumn {
            crop: crop.clone(),
            segments: crosstab
                .statuses()
                .iter()
                .map(|status| (status.clone(), crosstab.get(crop, status)))
                .collect(),
        })
        .collect()
}

/// Share of each status. Empty when there are no rows.
pub fn proportions(distribution: &StatusDistribution) -> Vec<(Status, f64)> {
    let total = distribution.total();
    if total == 0 {
        return Vec::new();
    }
    distribution
        .iter()
        .map(|(status, count)| (status.clone(), count as f64 / total as f64))
        .collect()
}

/// Render-ready series for the four dashboard charts.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChartSeries {
    pub disease_alerts: Vec<SeverityBar>,
    pub regional_hotspots: Vec<SeverityBar>,
    pub crop_health: Vec<StackedColumn>,
    pub status_ratio: Vec<(Status, f64)>,
}

impl ChartSeries {
    pub fn prepare(summary: &Summary) -> Self {
        Self {
            disease_alerts: top_n(&summary.top_diseases, summary.top_diseases.len()),
            regional_hotspots: top_n(&summary.region_counts, summary.region_counts.len()),
            crop_health: stacked(&summary.crop_health),
            status_ratio: proportions(&summary.status_distribution),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::metrics::TOP_DISEASES;
    use crate::analytics::ranking::{rank_labels, Ranked};
    use crate::data::filter::{apply, FilterSelection};
    use crate::data::model::{Observation, ObservationTable};

    fn repeated(label: &str, count: usize) -> impl Iterator<Item = &str> {
        std::iter::repeat(label).take(count)
    }

    #[test]
    fn top_n_assigns_severity_per_bar() {
        let ranked = rank_labels(
            repeated("a", 51)
                .chain(repeated("b", 50))
                .chain(repeated("c", 21))
                .chain(repeated("d", 20)),
        );
        let bars = top_n(&ranked, 10);
        let severities: Vec<Tier> = bars.iter().map(|b| b.severity).collect();
        assert_eq!(
            severities,
            [Tier::High, Tier::Medium, Tier::Medium, Tier::Low]
        );
        assert_eq!(bars[0].label, "a");
        assert_eq!(bars[0].value, 51);
    }

    #[test]
    fn top_n_truncates_and_tolerates_empty_input() {
        let ranked = rank_labels(["x", "y", "z"]);
        assert_eq!(top_n(&ranked, 2).len(), 2);
        assert!(top_n(&RankedAggregate::default(), 5).is_empty());
    }

    #[test]
    fn stacked_keeps_crop_order_and_zero_segments() {
        let table = ObservationTable::from_observations(vec![
            Observation::new("Corn", Status::Healthy, "North", "Corn___healthy"),
            Observation::new("Apple", Status::Diseased, "North", "Apple___Scab"),
            Observation::new("Corn", Status::Healthy, "North", "Corn___healthy"),
        ]);
        let view = apply(&table, &FilterSelection::defaults_for(&table));
        let columns = stacked(&Crosstab::from_view(&view));

        assert_eq!(columns.len(), 2);
        assert_eq!(columns[0].crop, "Corn");
        assert_eq!(
            columns[0].segments,
            [(Status::Healthy, 2), (Status::Diseased, 0)]
        );
        assert_eq!(columns[1].crop, "Apple");
        assert_eq!(columns[1].total(), 1);
        assert!(stacked(&Crosstab::default()).is_empty());
    }

    #[test]
    fn stacked_lists_healthy_as_zero_when_only_diseased_rows_remain() {
        let table = ObservationTable::from_observations(vec![
            Observation::new("Corn", Status::Healthy, "North", "Corn___healthy"),
            Observation::new("Apple", Status::Diseased, "South", "Apple___Scab"),
        ]);
        let mut selection = FilterSelection::defaults_for(&table);
        selection.crops.remove("Corn");
        let columns = stacked(&Crosstab::from_view(&apply(&table, &selection)));

        assert_eq!(columns.len(), 1);
        assert_eq!(
            columns[0].segments,
            [(Status::Healthy, 0), (Status::Diseased, 1)]
        );
    }

    #[test]
    fn proportions_sum_to_one() {
        let distribution = Ranked::count(
            [Status::Healthy, Status::Diseased, Status::Healthy]
                .into_iter()
                .chain(std::iter::once(Status::Other("Unknown".into()))),
        );
        let shares = proportions(&distribution);
        let sum: f64 = shares.iter().map(|(_, f)| f).sum();
        assert!((sum - 1.0).abs() < 1e-9);
        assert_eq!(shares[0], (Status::Healthy, 0.5));

        let distribution = Ranked::count((0..7).map(|i| {
            if i % 3 == 0 {
                Status::Diseased
            } else {
                Status::Healthy
            }
        }));
        let sum: f64 = proportions(&distribution).iter().map(|(_, f)| f).sum();
        assert!((sum - 1.0).abs() < 1e-9);
    }

    #[test]
    fn proportions_of_nothing_are_empty() {
        assert!(proportions(&StatusDistribution::default()).is_empty());
    }

    #[test]
    fn prepares_empty_series_for_empty_view() {
        let table = ObservationTable::from_observations(vec![Observation::new(
            "Corn",
            Status::Diseased,
            "North",
            "Corn___Common_rust",
        )]);
        let view = apply(&table, &FilterSelection::default());
        let series = ChartSeries::prepare(&Summary::compute(&view, TOP_DISEASES));
        assert_eq!(series, ChartSeries::default());
    }
}
