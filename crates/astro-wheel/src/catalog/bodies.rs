//! Bodies that can appear on a wheel and their fixed classification.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Identity of a point drawn on the wheel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BodyId {
    Sun,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Pluto,
    NorthNode,
    SouthNode,
    Chiron,
    Ceres,
    Pallas,
    Juno,
    Vesta,
    Ascendant,
    ImumCoeli,
    Descendant,
    Midheaven,
}

/// Broad kind of a body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BodyKind {
    Planet,
    Node,
    Asteroid,
    Angle,
}

/// Symbolic classification used only to pick a palette color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Classification {
    Fire,
    Earth,
    Air,
    Water,
    Points,
    Asteroids,
    Angle,
    Others,
}

/// Static metadata for one body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyInfo {
    pub id: BodyId,
    pub key: &'static str,
    pub name: &'static str,
    pub kind: BodyKind,
    pub classification: Classification,
}

const fn info(
    id: BodyId,
    key: &'static str,
    name: &'static str,
    kind: BodyKind,
    classification: Classification,
) -> BodyInfo {
    BodyInfo {
        id,
        key,
        name,
        kind,
        classification,
    }
}

/// Indexed by `BodyId as usize`.
static BODY_TABLE: [BodyInfo; 21] = [
    info(BodyId::Sun, "sun", "Sun", BodyKind::Planet, Classification::Fire),
    info(BodyId::Moon, "moon", "Moon", BodyKind::Planet, Classification::Water),
    info(BodyId::Mercury, "mercury", "Mercury", BodyKind::Planet, Classification::Air),
    info(BodyId::Venus, "venus", "Venus", BodyKind::Planet, Classification::Earth),
    info(BodyId::Mars, "mars", "Mars", BodyKind::Planet, Classification::Fire),
    info(BodyId::Jupiter, "jupiter", "Jupiter", BodyKind::Planet, Classification::Fire),
    info(BodyId::Saturn, "saturn", "Saturn", BodyKind::Planet, Classification::Earth),
    info(BodyId::Uranus, "uranus", "Uranus", BodyKind::Planet, Classification::Air),
    info(BodyId::Neptune, "neptune", "Neptune", BodyKind::Planet, Classification::Water),
    info(BodyId::Pluto, "pluto", "Pluto", BodyKind::Planet, Classification::Water),
    info(BodyId::NorthNode, "north_node", "North Node", BodyKind::Node, Classification::Points),
    info(BodyId::SouthNode, "south_node", "South Node", BodyKind::Node, Classification::Points),
    info(BodyId::Chiron, "chiron", "Chiron", BodyKind::Asteroid, Classification::Asteroids),
    info(BodyId::Ceres, "ceres", "Ceres", BodyKind::Asteroid, Classification::Asteroids),
    info(BodyId::Pallas, "pallas", "Pallas", BodyKind::Asteroid, Classification::Asteroids),
    info(BodyId::Juno, "juno", "Juno", BodyKind::Asteroid, Classification::Asteroids),
    info(BodyId::Vesta, "vesta", "Vesta", BodyKind::Asteroid, Classification::Asteroids),
    info(BodyId::Ascendant, "ascendant", "Ascendant", BodyKind::Angle, Classification::Angle),
    info(BodyId::ImumCoeli, "imum_coeli", "Imum Coeli", BodyKind::Angle, Classification::Angle),
    info(BodyId::Descendant, "descendant", "Descendant", BodyKind::Angle, Classification::Angle),
    info(BodyId::Midheaven, "midheaven", "Midheaven", BodyKind::Angle, Classification::Angle),
];

impl BodyId {
    pub const ALL: [BodyId; 21] = [
        BodyId::Sun,
        BodyId::Moon,
        BodyId::Mercury,
        BodyId::Venus,
        BodyId::Mars,
        BodyId::Jupiter,
        BodyId::Saturn,
        BodyId::Uranus,
        BodyId::Neptune,
        BodyId::Pluto,
        BodyId::NorthNode,
        BodyId::SouthNode,
        BodyId::Chiron,
        BodyId::Ceres,
        BodyId::Pallas,
        BodyId::Juno,
        BodyId::Vesta,
        BodyId::Ascendant,
        BodyId::ImumCoeli,
        BodyId::Descendant,
        BodyId::Midheaven,
    ];

    pub fn info(self) -> &'static BodyInfo {
        &BODY_TABLE[self as usize]
    }

    /// Stable snake_case key, as used in config files and JSON.
    pub fn key(self) -> &'static str {
        self.info().key
    }

    pub fn name(self) -> &'static str {
        self.info().name
    }

    pub fn kind(self) -> BodyKind {
        self.info().kind
    }

    pub fn classification(self) -> Classification {
        self.info().classification
    }

    pub fn is_angle(self) -> bool {
        self.kind() == BodyKind::Angle
    }
}

impl fmt::Display for BodyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown body: {0}")]
pub struct UnknownBody(pub String);

impl FromStr for BodyId {
    type Err = UnknownBody;

    /// Accepts canonical keys, display names and the usual ephemeris aliases,
    /// ignoring case, spaces, dashes and underscores.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let folded: String = s
            .chars()
            .filter(|c| !matches!(c, ' ' | '_' | '-'))
            .flat_map(char::to_lowercase)
            .collect();

        let id = match folded.as_str() {
            "sun" => BodyId::Sun,
            "moon" => BodyId::Moon,
            "mercury" => BodyId::Mercury,
            "venus" => BodyId::Venus,
            "mars" => BodyId::Mars,
            "jupiter" => BodyId::Jupiter,
            "saturn" => BodyId::Saturn,
            "uranus" => BodyId::Uranus,
            "neptune" => BodyId::Neptune,
            "pluto" => BodyId::Pluto,
            "northnode" | "ascnode" | "truenode" | "meannode" | "nnode" | "node" => BodyId::NorthNode,
            "southnode" | "descnode" | "snode" => BodyId::SouthNode,
            "chiron" => BodyId::Chiron,
            "ceres" => BodyId::Ceres,
            "pallas" => BodyId::Pallas,
            "juno" => BodyId::Juno,
            "vesta" => BodyId::Vesta,
            "ascendant" | "asc" | "as" => BodyId::Ascendant,
            "imumcoeli" | "ic" => BodyId::ImumCoeli,
            "descendant" | "dsc" | "dc" | "ds" => BodyId::Descendant,
            "midheaven" | "mc" => BodyId::Midheaven,
            _ => return Err(UnknownBody(s.to_string())),
        };
        Ok(id)
    }
}
