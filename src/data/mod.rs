/// Data layer: core types, loading, caching and filtering.
///
/// Architecture:
/// ```text
///  .csv / .json / .parquet
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → ObservationTable
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  cache    │  single-slot, loaded once per process
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  crop / status / region selection → FilteredView
///   └──────────┘
/// ```

pub mod cache;
pub mod filter;
pub mod loader;
pub mod model;
