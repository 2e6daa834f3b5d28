use std::collections::HashSet;
use std::fmt;

// ---------------------------------------------------------------------------
// Status – health state of a single observation
// ---------------------------------------------------------------------------

/// Health status recorded for an observation.
///
/// `Healthy` and `Diseased` are the two values the dashboard reasons about.
/// Anything else found in the data is carried verbatim in `Other` so it can
/// still be listed and selected manually.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Status {
    Healthy,
    Diseased,
    Other(String),
}

impl Status {
    /// Parse a raw cell value. Surrounding whitespace is ignored, matching is
    /// otherwise exact.
    pub fn parse(raw: &str) -> Self {
        match raw.trim() {
            "Healthy" => Status::Healthy,
            "Diseased" => Status::Diseased,
            other => Status::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Status::Healthy => "Healthy",
            Status::Diseased => "Diseased",
            Status::Other(s) => s,
        }
    }

    pub fn is_diseased(&self) -> bool {
        matches!(self, Status::Diseased)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Observation – one row of the source table
// ---------------------------------------------------------------------------

/// A single plant-health observation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Observation {
    pub crop_name: String,
    pub status: Status,
    pub region: String,
    /// `<Crop>___<Disease>`, or the healthy sentinel for healthy rows.
    pub disease_name: String,
}

impl Observation {
    pub fn new(
        crop_name: impl Into<String>,
        status: Status,
        region: impl Into<String>,
        disease_name: impl Into<String>,
    ) -> Self {
        Self {
            crop_name: crop_name.into(),
            status,
            region: region.into(),
            disease_name: disease_name.into(),
        }
    }
}

// ---------------------------------------------------------------------------
// ObservationTable – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The loaded observations in source order, with the distinct values of each
/// filterable column in first-seen order.
///
/// Read-only after construction.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ObservationTable {
    rows: Vec<Observation>,
    crops: Vec<String>,
    statuses: Vec<Status>,
    regions: Vec<String>,
}

impl ObservationTable {
    /// Build the column indices from the loaded observations.
    pub fn from_observations(rows: Vec<Observation>) -> Self {
        let mut crops = FirstSeen::default();
        let mut statuses = FirstSeen::default();
        let mut regions = FirstSeen::default();

        for obs in &rows {
            crops.push(&obs.crop_name);
            statuses.push(&obs.status);
            regions.push(&obs.region);
        }

        ObservationTable {
            rows,
            crops: crops.values,
            statuses: statuses.values,
            regions: regions.values,
        }
    }

    pub fn rows(&self) -> &[Observation] {
        &self.rows
    }

    pub fn get(&self, index: usize) -> Option<&Observation> {
        self.rows.get(index)
    }

    /// Distinct crop names, first-seen order.
    pub fn crops(&self) -> &[String] {
        &self.crops
    }

    /// Distinct statuses, first-seen order.
    pub fn statuses(&self) -> &[Status] {
        &self.statuses
    }

    /// Distinct regions, first-seen order.
    pub fn regions(&self) -> &[String] {
        &self.regions
    }

    /// Number of observations.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Accumulates distinct values while keeping their first-seen order.
struct FirstSeen<T> {
    seen: HashSet<T>,
    values: Vec<T>,
}

impl<T> Default for FirstSeen<T> {
    fn default() -> Self {
        Self {
            seen: HashSet::new(),
            values: Vec::new(),
        }
    }
}

impl<T: Clone + Eq + std::hash::Hash> FirstSeen<T> {
    fn push(&mut self, value: &T) {
        if self.seen.insert(value.clone()) {
            self.values.push(value.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_and_unknown_statuses() {
        assert_eq!(Status::parse("Healthy"), Status::Healthy);
        assert_eq!(Status::parse(" Diseased "), Status::Diseased);
        assert_eq!(
            Status::parse("Unknown"),
            Status::Other("Unknown".to_string())
        );
        // Matching is case sensitive.
        assert_eq!(
            Status::parse("healthy"),
            Status::Other("healthy".to_string())
        );
    }

    #[test]
    fn distinct_values_keep_first_seen_order() {
        let table = ObservationTable::from_observations(vec![
            Observation::new("Tomato", Status::Diseased, "North", "Tomato___Late_blight"),
            Observation::new("Apple", Status::Healthy, "South", "Apple___healthy"),
            Observation::new("Tomato", Status::Healthy, "East", "Tomato___healthy"),
            Observation::new("Corn", Status::Diseased, "South", "Corn___Common_rust"),
        ]);

        assert_eq!(table.len(), 4);
        assert_eq!(table.crops(), ["Tomato", "Apple", "Corn"]);
        assert_eq!(table.statuses(), [Status::Diseased, Status::Healthy]);
        assert_eq!(table.regions(), ["North", "South", "East"]);
    }

    #[test]
    fn empty_table_has_no_distinct_values() {
        let table = ObservationTable::from_observations(Vec::new());
        assert!(table.is_empty());
        assert!(table.crops().is_empty());
        assert!(table.statuses().is_empty());
        assert!(table.regions().is_empty());
    }
}
