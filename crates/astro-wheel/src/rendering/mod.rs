//! Turning an assembled wheel into drawable shapes and SVG.

pub mod generator;
pub mod glyphs;
pub mod primitives;
pub mod spec;
pub mod svg;
pub mod theme;

pub use generator::ChartSpecGenerator;
pub use glyphs::Glyph;
pub use primitives::{Color, Point, Shape, Stroke, TextAnchor};
pub use spec::{ChartMetadata, ChartSpec, RingMetadata};
pub use svg::SvgWriter;
pub use theme::{aspect_classification, PaletteOverrides, Theme, ThemeKind};
