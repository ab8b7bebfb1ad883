use crate::aspects::types::{AspectDefinition, AspectKind, Nature};

fn definition(
    kind: AspectKind,
    angle: f64,
    base_orb: f64,
    nature: Nature,
    symbol: &'static str,
    description: &'static str,
) -> AspectDefinition {
    AspectDefinition {
        kind,
        angle,
        base_orb,
        nature,
        symbol,
        description,
    }
}

fn build_standard_catalog() -> AspectCatalog {
    AspectCatalog::new(vec![
        definition(AspectKind::Conjunction, 0.0, 8.0, Nature::Neutral, "☌", "Blending and intensifying energies"),
        definition(AspectKind::Semisextile, 30.0, 1.0, Nature::Neutral, "⚺", "Slight friction needing adjustment"),
        definition(AspectKind::Semisquare, 45.0, 1.0, Nature::Challenging, "∠", "Minor irritation and pressure"),
        definition(AspectKind::Sextile, 60.0, 4.0, Nature::Harmonious, "⚹", "Opportunity through effort"),
        definition(AspectKind::Square, 90.0, 6.0, Nature::Challenging, "□", "Tension that demands action"),
        definition(AspectKind::Trine, 120.0, 7.0, Nature::Harmonious, "△", "Easy flow and natural talent"),
        definition(AspectKind::Sesquisquare, 135.0, 1.0, Nature::Challenging, "⚼", "Agitation and restlessness"),
        definition(AspectKind::Quincunx, 150.0, 2.0, Nature::Neutral, "⚻", "Awkward adjustment between ill-fitting needs"),
        definition(AspectKind::Opposition, 180.0, 8.0, Nature::Challenging, "☍", "Polarity seeking balance"),
    ])
}

lazy_static::lazy_static! {
    static ref STANDARD_CATALOG: AspectCatalog = build_standard_catalog();
}

/// Immutable table of aspect definitions.
///
/// Declaration order is significant: when two definitions match a pair with
/// the same deviation, the one declared first wins.
#[derive(Debug, Clone, PartialEq)]
pub struct AspectCatalog {
    definitions: Vec<AspectDefinition>,
}

impl AspectCatalog {
    pub fn new(definitions: Vec<AspectDefinition>) -> Self {
        Self { definitions }
    }

    /// The nine standard aspects, ordered by exact angle
    pub fn standard() -> &'static AspectCatalog {
        &STANDARD_CATALOG
    }

    pub fn definitions(&self) -> &[AspectDefinition] {
        &self.definitions
    }

    pub fn get(&self, kind: AspectKind) -> Option<&AspectDefinition> {
        self.definitions.iter().find(|d| d.kind == kind)
    }
}
