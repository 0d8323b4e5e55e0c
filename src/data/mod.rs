/// Data layer: core types, loading, and statistics.
///
/// Architecture:
/// ```text
///  array.txt / rbtree.txt / rbtreev2.txt  (.csv / .json also accepted)
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  pick one column → Column
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  Column   │  Vec<f64>, source path, column index
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  stats    │  mean / Summary
///   └──────────┘
/// ```

pub mod loader;
pub mod model;
pub mod stats;
