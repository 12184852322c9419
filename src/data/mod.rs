/// Data layer: records, loading, filtering and aggregation.
///
/// Architecture:
/// ```text
///   Provisional_Natality_2025_CDC.csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  normalize labels, check schema, coerce births
///   └──────────┘
///        │
///        ▼
///   ┌──────────────┐
///   │  DataStore    │  read once at startup, owns NatalityDataset
///   └──────────────┘
///        │
///        ▼
///   ┌──────────┐      ┌─────────────┐
///   │  filter   │ ──▶ │  aggregate   │  (state, sex) → total births
///   └──────────┘      └─────────────┘
///        │                   │
///        └──────┬────────────┘
///               ▼
///         DataView (NoData | Populated)
/// ```

pub mod aggregate;
pub mod filter;
pub mod loader;
pub mod model;
pub mod store;
pub mod view;
