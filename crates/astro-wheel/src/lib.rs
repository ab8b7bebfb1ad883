//! Astrological chart wheels from precomputed positions.
//!
//! The crate takes body longitudes, house cusps and angles from an external
//! ephemeris, finds aspects, assigns houses, builds composite charts and draws
//! the result as a self-contained SVG wheel. Everything is synchronous and pure.

pub mod angles;
pub mod aspects;
pub mod catalog;
pub mod chart;
pub mod config;
pub mod ephemeris;
pub mod error;
pub mod houses;
pub mod layout;
pub mod rendering;
pub mod wheel;

pub use aspects::{Aspect, AspectCalculator, AspectCatalog, AspectKind, AspectSet, OrbPolicy};
pub use catalog::{BodyId, Classification, Sign};
pub use chart::{ChartData, CompositeCalculator};
pub use config::WheelConfig;
pub use ephemeris::{load_positions_from_json, BodyPosition, ChartPositions};
pub use error::{ChartError, ChartResult, ConfigError};
pub use houses::HouseSet;
pub use wheel::{BodyPlacement, WheelKind, WheelOutput, WheelRenderer, WheelRequest};
