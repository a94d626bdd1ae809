/// Data layer: core types, loading, filtering and aggregation.
///
/// Architecture:
/// ```text
///  remote URL / local .csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  fetch + parse → Catalog (cached once per process)
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  type set ∧ release-year range → FilteredView
///   └──────────┘
///        │
///        ▼
///   ┌───────────┐
///   │ aggregate │  count, distinct, top genres, trend …
///   └───────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ summary  │  one owned Snapshot per control change
///   └──────────┘
/// ```

pub mod aggregate;
pub mod filter;
pub mod loader;
pub mod model;
pub mod summary;
