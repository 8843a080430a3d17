/// Data layer: core types, fetching, and CSV decoding.
///
/// Architecture:
/// ```text
///  fixed remote URL
///        │
///        ▼
///   ┌──────────┐
///   │  fetch    │  blocking GET → CSV text
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  validate header, decode rows → IrisTable
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ IrisTable │  Vec<Observation>, column views
///   └──────────┘
/// ```
pub mod error;
pub mod fetch;
pub mod loader;
pub mod model;
