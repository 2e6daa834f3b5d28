use std::collections::BTreeSet;

use super::model::{Observation, ObservationTable, Status};

// ---------------------------------------------------------------------------
// Filter selection: which values are selected per column
// ---------------------------------------------------------------------------

/// The user's selection over the three filterable columns.
///
/// An empty set selects nothing for that column; it is never read as
/// "show all".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSelection {
    pub crops: BTreeSet<String>,
    pub statuses: BTreeSet<Status>,
    pub regions: BTreeSet<String>,
}

impl FilterSelection {
    /// Statuses selected when the dashboard opens, whatever the data holds.
    pub fn default_statuses() -> BTreeSet<Status> {
        BTreeSet::from([Status::Healthy, Status::Diseased])
    }

    /// Initial selection: every crop and region seen in the table, and the
    /// two standard statuses. Other status values stay unselected.
    pub fn defaults_for(table: &ObservationTable) -> Self {
        Self {
            crops: table.crops().iter().cloned().collect(),
            statuses: Self::default_statuses(),
            regions: table.regions().iter().cloned().collect(),
        }
    }

    /// Whether an observation passes all three membership tests.
    pub fn matches(&self, obs: &Observation) -> bool {
        self.crops.contains(&obs.crop_name)
            && self.statuses.contains(&obs.status)
            && self.regions.contains(&obs.region)
    }
}

/// Add `value` if absent, remove it if present.
pub fn toggle<T: Ord + Clone>(set: &mut BTreeSet<T>, value: &T) {
    if !set.remove(value) {
        set.insert(value.clone());
    }
}

// ---------------------------------------------------------------------------
// Filtered view
// ---------------------------------------------------------------------------

/// The rows of a table that pass a selection, in source order.
#[derive(Debug, Clone)]
pub struct FilteredView<'a> {
    table: &'a ObservationTable,
    indices: Vec<usize>,
}

impl<'a> FilteredView<'a> {
    /// Indices into the source table of the rows in this view.
    #[cfg(test)]
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    pub fn into_indices(self) -> Vec<usize> {
        self.indices
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a Observation> + '_ {
        let rows = self.table.rows();
        self.indices.iter().map(move |&i| &rows[i])
    }

    /// Rows with status `Diseased`, in view order.
    pub fn diseased(&self) -> impl Iterator<Item = &'a Observation> + '_ {
        self.iter().filter(|obs| obs.status.is_diseased())
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

/// Apply `selection` to `table`, keeping source order.
pub fn apply<'a>(table: &'a ObservationTable, selection: &FilterSelection) -> FilteredView<'a> {
    let indices = table
        .rows()
        .iter()
        .enumerate()
        .filter(|(_, obs)| selection.matches(obs))
        .map(|(i, _)| i)
        .collect();
    FilteredView { table, indices }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_table() -> ObservationTable {
        ObservationTable::from_observations(vec![
            Observation::new("Tomato", Status::Diseased, "North", "Tomato___Late_blight"),
            Observation::new("Apple", Status::Healthy, "South", "Apple___healthy"),
            Observation::new("Tomato", Status::Healthy, "South", "Tomato___healthy"),
            Observation::new("Corn", Status::Diseased, "North", "Corn___Common_rust"),
            Observation::new("Corn", Status::Other("Unknown".into()), "West", "Corn___unknown"),
        ])
    }

    #[test]
    fn defaults_select_everything_but_unexpected_statuses() {
        let table = sample_table();
        let selection = FilterSelection::defaults_for(&table);

        assert_eq!(selection.crops.len(), 3);
        assert_eq!(selection.regions.len(), 3);
        assert_eq!(selection.statuses, FilterSelection::default_statuses());

        let view = apply(&table, &selection);
        assert_eq!(view.indices(), [0, 1, 2, 3]);
    }

    #[test]
    fn view_contains_exactly_the_matching_rows_in_order() {
        let table = sample_table();
        let selection = FilterSelection {
            crops: BTreeSet::from(["Tomato".to_string(), "Corn".to_string()]),
            statuses: BTreeSet::from([Status::Diseased, Status::Healthy]),
            regions: BTreeSet::from(["North".to_string()]),
        };

        let view = apply(&table, &selection);
        assert_eq!(view.indices(), [0, 3]);
        assert!(view.len() <= table.len());
        for obs in view.iter() {
            assert!(selection.matches(obs));
        }
        let excluded = table
            .rows()
            .iter()
            .enumerate()
            .filter(|(i, _)| !view.indices().contains(i));
        for (_, obs) in excluded {
            assert!(!selection.matches(obs));
        }
    }

    /// Every subset of `universe`.
    fn subsets<T: Ord + Clone>(universe: &[T]) -> Vec<BTreeSet<T>> {
        (0..1u32 << universe.len())
            .map(|mask| {
                universe
                    .iter()
                    .enumerate()
                    .filter(|(i, _)| mask & (1 << i) != 0)
                    .map(|(_, v)| v.clone())
                    .collect()
            })
            .collect()
    }

    #[test]
    fn every_selection_yields_exactly_the_matching_rows() {
        let table = sample_table();
        let crops = subsets(table.crops());
        let statuses = subsets(table.statuses());
        let regions = subsets(table.regions());
        assert_eq!(crops.len() * statuses.len() * regions.len(), 512);

        for c in &crops {
            for s in &statuses {
                for r in &regions {
                    let selection = FilterSelection {
                        crops: c.clone(),
                        statuses: s.clone(),
                        regions: r.clone(),
                    };
                    let view = apply(&table, &selection);

                    let expected: Vec<usize> = table
                        .rows()
                        .iter()
                        .enumerate()
                        .filter(|(_, o)| {
                            c.contains(&o.crop_name)
                                && s.contains(&o.status)
                                && r.contains(&o.region)
                        })
                        .map(|(i, _)| i)
                        .collect();
                    assert_eq!(view.indices(), expected.as_slice());
                    assert!(view.len() <= table.len());
                }
            }
        }
    }

    #[test]
    fn empty_set_selects_nothing() {
        let table = sample_table();
        let mut selection = FilterSelection::defaults_for(&table);
        selection.regions.clear();

        let view = apply(&table, &selection);
        assert!(view.is_empty());
        assert_eq!(view.iter().count(), 0);
    }

    #[test]
    fn diseased_iterates_only_diseased_rows() {
        let table = sample_table();
        let view = apply(&table, &FilterSelection::defaults_for(&table));
        let crops: Vec<&str> = view.diseased().map(|o| o.crop_name.as_str()).collect();
        assert_eq!(crops, ["Tomato", "Corn"]);
    }

    #[test]
    fn toggle_adds_then_removes() {
        let mut set = BTreeSet::new();
        toggle(&mut set, &Status::Healthy);
        assert!(set.contains(&Status::Healthy));
        toggle(&mut set, &Status::Healthy);
        assert!(set.is_empty());
    }

    #[test]
    fn unexpected_status_can_be_selected_explicitly() {
        let table = sample_table();
        let mut selection = FilterSelection::defaults_for(&table);
        toggle(&mut selection.statuses, &Status::Other("Unknown".into()));

        let view = apply(&table, &selection);
        assert_eq!(view.len(), table.len());
    }
}
