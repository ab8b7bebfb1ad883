use crate::aspects::types::{AspectDefinition, AspectKind};
use crate::catalog::BodyId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Named starting points for an [`OrbPolicy`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrbPreset {
    /// Majors plus quincunx, catalog orbs, no body adjustments
    #[default]
    Default,
    MajorOnly,
    All,
    /// Default aspects with luminaries and outer planets widened
    Weighted,
}

/// Configuration that shifts catalog orbs before matching.
///
/// The limit for a pair is `orb(kind) + adjustment(body1) + adjustment(body2)`;
/// a limit at or below zero disables the aspect for that pair.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrbPolicy {
    /// Replaces the catalog base orb for a kind
    pub orbs: BTreeMap<AspectKind, f64>,
    /// Kinds not listed fall back to [`default_enabled`]
    pub enabled: BTreeMap<AspectKind, bool>,
    /// Per-body widening (positive) or narrowing (negative)
    pub body_orbs: BTreeMap<BodyId, f64>,
}

/// Whether a kind is enabled when the policy does not say otherwise.
pub fn default_enabled(kind: AspectKind) -> bool {
    kind.is_major() || kind == AspectKind::Quincunx
}

impl OrbPolicy {
    pub fn from_preset(preset: OrbPreset) -> Self {
        match preset {
            OrbPreset::Default => Self::default(),
            OrbPreset::MajorOnly => Self::major_only(),
            OrbPreset::All => Self::all(),
            OrbPreset::Weighted => Self::weighted(),
        }
    }

    pub fn major_only() -> Self {
        Self::with_enabled(|kind| kind.is_major())
    }

    pub fn all() -> Self {
        Self::with_enabled(|_| true)
    }

    pub fn weighted() -> Self {
        let body_orbs = [
            (BodyId::Sun, 1.0),
            (BodyId::Moon, 1.0),
            (BodyId::Jupiter, 1.0),
            (BodyId::Saturn, 1.0),
            (BodyId::Uranus, 2.0),
            (BodyId::Neptune, 2.0),
            (BodyId::Pluto, 2.0),
        ]
        .into_iter()
        .collect();
        Self {
            body_orbs,
            ..Self::default()
        }
    }

    fn with_enabled(rule: impl Fn(AspectKind) -> bool) -> Self {
        Self {
            enabled: AspectKind::ALL.iter().map(|&k| (k, rule(k))).collect(),
            ..Self::default()
        }
    }

    pub fn is_enabled(&self, kind: AspectKind) -> bool {
        self.enabled
            .get(&kind)
            .copied()
            .unwrap_or_else(|| default_enabled(kind))
    }

    pub fn set_enabled(&mut self, kind: AspectKind, enabled: bool) {
        self.enabled.insert(kind, enabled);
    }

    pub fn set_orb(&mut self, kind: AspectKind, orb: f64) {
        self.orbs.insert(kind, orb);
    }

    pub fn base_orb(&self, definition: &AspectDefinition) -> f64 {
        self.orbs
            .get(&definition.kind)
            .copied()
            .unwrap_or(definition.base_orb)
    }

    pub fn body_adjustment(&self, body: Option<BodyId>) -> f64 {
        body.and_then(|b| self.body_orbs.get(&b).copied())
            .unwrap_or(0.0)
    }

    /// Orb limit for a definition and an optional pair of bodies
    pub fn effective_orb(
        &self,
        definition: &AspectDefinition,
        body1: Option<BodyId>,
        body2: Option<BodyId>,
    ) -> f64 {
        self.base_orb(definition) + self.body_adjustment(body1) + self.body_adjustment(body2)
    }
}
