//! Static, read-only lookup tables for bodies, signs and dignities.

pub mod bodies;
pub mod dignities;
pub mod signs;

pub use bodies::{BodyId, BodyInfo, BodyKind, Classification, UnknownBody};
pub use dignities::{dignity_of, planet_dignities, Dignity, PlanetDignities};
pub use signs::{
    degree_in_sign, degree_minute_in_sign, Element, Modality, Polarity, Sign, SignInfo, SignRulers,
    SIGNS,
};
