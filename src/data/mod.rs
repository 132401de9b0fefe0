/// Data layer: core types, loading, column selection and export.
///
/// Architecture:
/// ```text
///  Ek.dat / Speck.dat
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse whitespace matrix → Matrix
///   └──────────┘
///        │
///        ▼
///   ┌──────────────┐
///   │  selection    │  checked slots (display order) → x, y, z columns
///   └──────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  chart    │  Matrix + picks → RenderedChart + RetainedPair
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  export   │  RetainedPair → x_data / y_data CSV
///   └──────────┘
/// ```

pub mod chart;
pub mod export;
pub mod loader;
pub mod model;
pub mod selection;
