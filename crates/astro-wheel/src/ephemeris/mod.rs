//! Input contract with the external ephemeris provider.
//!
//! Positions arrive already computed. This module only describes and loads them.

pub mod loader;
pub mod types;

pub use loader::load_positions_from_json;
pub use types::{BodyPosition, ChartPositions};
