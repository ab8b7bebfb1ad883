pub mod calculator;
pub mod catalog;
pub mod policy;
pub mod types;

pub use calculator::{AspectCalculator, EXACT_ORB};
pub use catalog::AspectCatalog;
pub use policy::{default_enabled, OrbPolicy, OrbPreset};
pub use types::{
    Aspect, AspectDefinition, AspectGrid, AspectKind, AspectObjectRef, AspectPair, AspectSet, AspectSetKind,
    Nature,
};
