/// Analytics over a filtered view: classification, ranking, metrics and the
/// series handed to the charts.
///
/// ```text
///   FilteredView
///        │
///        ▼
///   ┌──────────┐
///   │ metrics   │  MetricBundle, ranked counts, crosstab, status split
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ series    │  severity bars, stacked columns, proportions
///   └──────────┘
/// ```

pub mod metrics;
pub mod ranking;
pub mod series;
pub mod tier;
