use serde::{Deserialize, Serialize};

/// One body as reported by the ephemeris provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodyPosition {
    /// Body name, matched against the body catalog
    pub name: String,
    /// Longitude in degrees (0-360)
    #[serde(alias = "lon")]
    pub longitude: f64,
    /// Latitude in degrees
    #[serde(default, alias = "lat")]
    pub latitude: f64,
    /// Speed in longitude (degrees per day), negative when retrograde
    #[serde(default, alias = "speed_lon")]
    pub speed: f64,
}

impl BodyPosition {
    pub fn new(name: impl Into<String>, longitude: f64, speed: f64) -> Self {
        Self {
            name: name.into(),
            longitude,
            latitude: 0.0,
            speed,
        }
    }
}

/// Raw positions for one chart, before any validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPositions {
    #[serde(default)]
    pub label: String,
    pub bodies: Vec<BodyPosition>,
    /// House cusps 1..12 in house order
    pub cusps: Vec<f64>,
    #[serde(default, alias = "asc")]
    pub ascendant: Option<f64>,
    #[serde(default, alias = "mc")]
    pub midheaven: Option<f64>,
}

impl ChartPositions {
    /// Positions whose ascendant and midheaven are read from cusps 1 and 10.
    pub fn from_cusps(label: impl Into<String>, bodies: Vec<BodyPosition>, cusps: Vec<f64>) -> Self {
        let ascendant = cusps.first().copied();
        let midheaven = cusps.get(9).copied();
        Self {
            label: label.into(),
            bodies,
            cusps,
            ascendant,
            midheaven,
        }
    }
}
