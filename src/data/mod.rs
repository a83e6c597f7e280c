/// Data layer: core types, loading, and row decoding.
///
/// Architecture:
/// ```text
///  measurements.dat / *_setup_explore.dat
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  whitespace matrix, one header line skipped
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  model    │  row → metadata + (x, y) pairs → Curve
///   └──────────┘
/// ```

pub mod loader;
pub mod model;
