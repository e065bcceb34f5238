/// Data layer: core types, loading, deduplication, and output.
///
/// Architecture:
/// ```text
///  .csv / .xlsx uploads, priority = upload order
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → Dataset
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  dedup    │  normalize first-column keys, drop rows already
///   └──────────┘  seen in higher-priority files
///        │
///        ▼
///   ┌──────────┐
///   │  writer   │  serialize survivors → zip archive
///   └──────────┘
/// ```
/// `pipeline` drives the three stages over a queue of paths.

pub mod dedup;
pub mod loader;
pub mod model;
pub mod normalize;
pub mod pipeline;
pub mod writer;
