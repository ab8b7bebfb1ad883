use serde::{Deserialize, Serialize};

/// Ring type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RingType {
    Signs,
    Houses,
    Vertices,
    Bodies,
    Aspects,
}

impl RingType {
    pub fn key(self) -> &'static str {
        match self {
            RingType::Signs => "signs",
            RingType::Houses => "houses",
            RingType::Vertices => "vertices",
            RingType::Bodies => "bodies",
            RingType::Aspects => "aspects",
        }
    }
}

/// Data source for a ring
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RingDataSource {
    StaticZodiac,
    ChartHouses { chart: String },
    ChartVertices { chart: String },
    ChartBodies { chart: String },
    AspectSet { aspect_set_id: String },
}
