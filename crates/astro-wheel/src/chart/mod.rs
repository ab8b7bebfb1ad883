//! Resolved charts: validated input, composites and sign patterns.

pub mod composite;
pub mod data;
pub mod patterns;

pub use composite::CompositeCalculator;
pub use data::{ChartBody, ChartData};
pub use patterns::{find_stelliums, Stellium, STELLIUM_MIN_BODIES};
