use crate::catalog::{BodyId, Sign};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Vector symbols drawn on the wheel. Paths live in a 20x20 box and are stroked, not filled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Glyph {
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
    Descendant,
    Midheaven,
    ImumCoeli,
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

impl FromStr for Glyph {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(body) = s.parse::<BodyId>() {
            return Ok(Glyph::for_body(body));
        }
        Sign::all()
            .find(|sign| sign.name().eq_ignore_ascii_case(s.trim()))
            .map(Glyph::for_sign)
            .ok_or_else(|| format!("unknown glyph: {}", s))
    }
}

impl Glyph {
    pub fn for_body(body: BodyId) -> Self {
        match body {
            BodyId::Sun => Glyph::Sun,
            BodyId::Moon => Glyph::Moon,
            BodyId::Mercury => Glyph::Mercury,
            BodyId::Venus => Glyph::Venus,
            BodyId::Mars => Glyph::Mars,
            BodyId::Jupiter => Glyph::Jupiter,
            BodyId::Saturn => Glyph::Saturn,
            BodyId::Uranus => Glyph::Uranus,
            BodyId::Neptune => Glyph::Neptune,
            BodyId::Pluto => Glyph::Pluto,
            BodyId::NorthNode => Glyph::NorthNode,
            BodyId::SouthNode => Glyph::SouthNode,
            BodyId::Chiron => Glyph::Chiron,
            BodyId::Ceres => Glyph::Ceres,
            BodyId::Pallas => Glyph::Pallas,
            BodyId::Juno => Glyph::Juno,
            BodyId::Vesta => Glyph::Vesta,
            BodyId::Ascendant => Glyph::Ascendant,
            BodyId::ImumCoeli => Glyph::ImumCoeli,
            BodyId::Descendant => Glyph::Descendant,
            BodyId::Midheaven => Glyph::Midheaven,
        }
    }

    pub fn for_sign(sign: Sign) -> Self {
        match sign {
            Sign::Aries => Glyph::Aries,
            Sign::Taurus => Glyph::Taurus,
            Sign::Gemini => Glyph::Gemini,
            Sign::Cancer => Glyph::Cancer,
            Sign::Leo => Glyph::Leo,
            Sign::Virgo => Glyph::Virgo,
            Sign::Libra => Glyph::Libra,
            Sign::Scorpio => Glyph::Scorpio,
            Sign::Sagittarius => Glyph::Sagittarius,
            Sign::Capricorn => Glyph::Capricorn,
            Sign::Aquarius => Glyph::Aquarius,
            Sign::Pisces => Glyph::Pisces,
        }
    }

    /// SVG path data in glyph units
    pub fn path_data(self) -> &'static str {
        match self {
            Glyph::Sun => "M3 10a7 7 0 1 0 14 0a7 7 0 1 0 -14 0M9 10a1 1 0 1 0 2 0a1 1 0 1 0 -2 0",
            Glyph::Moon => "M12 3a7 7 0 1 0 0 14a5.5 5.5 0 1 1 0 -14z",
            Glyph::Mercury => "M6 2a4 4 0 0 0 8 0M6 9a4 4 0 1 0 8 0a4 4 0 1 0 -8 0M10 13v6M7 16h6",
            Glyph::Venus => "M5 7a5 5 0 1 0 10 0a5 5 0 1 0 -10 0M10 12v7M7 16h6",
            Glyph::Mars => "M3 13a5 5 0 1 0 10 0a5 5 0 1 0 -10 0M11.5 8.5L18 2M13 2h5v5",
            Glyph::Jupiter => "M4 5c3 -3 7 0 2 7h11M14 3v16",
            Glyph::Saturn => "M6 2v12M3 5h6M6 8c3 -3 8 0 3 6c-2 3 0 5 2 4",
            Glyph::Uranus => "M5 2v9M15 2v9M5 6.5h10M10 2v11M8 16a2 2 0 1 0 4 0a2 2 0 1 0 -4 0",
            Glyph::Neptune => "M4 3v4a6 6 0 0 0 12 0v-4M10 3v16M7 16h6",
            Glyph::Pluto => "M4 4a6 6 0 0 0 12 0M7 4a3 3 0 1 0 6 0a3 3 0 1 0 -6 0M10 10v9M7 15h6",
            Glyph::NorthNode => {
                "M3 16a2 2 0 1 0 4 0a2 2 0 1 0 -4 0M13 16a2 2 0 1 0 4 0a2 2 0 1 0 -4 0M5 14C1 8 5 3 10 3s9 5 5 11"
            }
            Glyph::SouthNode => {
                "M3 4a2 2 0 1 0 4 0a2 2 0 1 0 -4 0M13 4a2 2 0 1 0 4 0a2 2 0 1 0 -4 0M5 6C1 12 5 17 10 17s9 -5 5 -11"
            }
            Glyph::Chiron => "M7 2v12M7 8l6 -6M7 8l6 6M4 16a3 3 0 1 0 6 0a3 3 0 1 0 -6 0",
            Glyph::Ceres => "M6 3a4 4 0 1 1 4 7v9M7 15h6",
            Glyph::Pallas => "M10 2l5 5l-5 5l-5 -5zM10 12v7M7 16h6",
            Glyph::Juno => "M10 2v10M6 4l8 6M14 4l-8 6M10 12v7M7 16h6",
            Glyph::Vesta => "M3 4l7 10l7 -10M3 18h14",
            Glyph::Ascendant => "M1 16L4.5 4L8 16M2.3 11.5h4.4M18 6a5 6 0 1 0 0 8",
            Glyph::Descendant => "M1 4v12h3a6 6 0 0 0 0 -12zM18 6a5 6 0 1 0 0 8",
            Glyph::Midheaven => "M1 16V4l3.5 7L8 4v12M18 6a5 6 0 1 0 0 8",
            Glyph::ImumCoeli => "M4 4v12M2 4h4M2 16h4M18 6a5 6 0 1 0 0 8",
            Glyph::Aries => "M10 18V8M10 8C10 2 3 1 3 6M10 8C10 2 17 1 17 6",
            Glyph::Taurus => "M6 12a4 4 0 1 0 8 0a4 4 0 1 0 -8 0M3 3c2 5 12 5 14 0",
            Glyph::Gemini => "M4 3c4 2 8 2 12 0M4 17c4 -2 8 -2 12 0M7 4v12M13 4v12",
            Glyph::Cancer => {
                "M3 8a2 2 0 1 0 4 0a2 2 0 1 0 -4 0M13 12a2 2 0 1 0 4 0a2 2 0 1 0 -4 0M5 6c3 -4 10 -3 12 2M15 14c-3 4 -10 3 -12 -2"
            }
            Glyph::Leo => {
                "M4 14a2.5 2.5 0 1 0 5 0a2.5 2.5 0 1 0 -5 0M9 14C9 9 6 7 8 4s8 -1 6 5c-1 3 -2 6 1 8s3 0 3 -1"
            }
            Glyph::Virgo => {
                "M2 5v11M2 7c2 -3 5 -3 5 0v9M7 7c2 -3 5 -3 5 0v9M12 7c2 -3 5 -3 5 0v5c0 3 -2 5 -5 6"
            }
            Glyph::Libra => "M2 17h16M2 13h5a3 3 0 1 1 6 0h5",
            Glyph::Scorpio => "M2 5v11M2 7c2 -3 5 -3 5 0v9M7 7c2 -3 5 -3 5 0v9l3 2l2 -3",
            Glyph::Sagittarius => "M3 17L17 3M11 3h6v6M6 9l5 5",
            Glyph::Capricorn => "M2 4l3 10l3 -10v10c0 4 6 4 6 0a3 3 0 1 0 -3 3",
            Glyph::Aquarius => "M2 8l3 -2l3 2l3 -2l3 2l3 -2M2 14l3 -2l3 2l3 -2l3 2l3 -2",
            Glyph::Pisces => "M4 2c5 4 5 12 0 16M16 2c-5 4 -5 12 0 16M4 10h12",
        }
    }
}
