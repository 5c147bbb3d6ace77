/// Data layer: core types, loading/writing, and sorting.
///
/// Architecture:
/// ```text
///   input .csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → Table
///   └──────────┘
///        │
///        ▼
///   ┌──────────────┐
///   │    Table      │  Header + Vec<Record>
///   └──────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │   sort    │  stable descending order by numeric key
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  write header + sorted rows
///   └──────────┘
/// ```

pub mod loader;
pub mod model;
pub mod sort;
