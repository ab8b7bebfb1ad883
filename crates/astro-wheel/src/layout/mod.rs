pub mod assembler;
pub mod geometry;
pub mod placement;
pub mod rings;
pub mod types;

pub use assembler::{slugify, AssembledRing, AssembledWheel, WheelAssembler};
pub use geometry::{ChartGeometry, GLYPH_EM};
pub use placement::{adjust_positions, place_symbols, SymbolPlacement};
pub use rings::{wheel_angle, RingItem};
pub use types::{RingDataSource, RingType};
