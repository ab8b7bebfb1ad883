//! The twelve tropical signs.

use crate::angles::normalize;
use crate::catalog::bodies::{BodyId, Classification};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sign {
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

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Element {
    Fire,
    Earth,
    Air,
    Water,
}

impl Element {
    pub fn classification(self) -> Classification {
        match self {
            Element::Fire => Classification::Fire,
            Element::Earth => Classification::Earth,
            Element::Air => Classification::Air,
            Element::Water => Classification::Water,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Modality {
    Cardinal,
    Fixed,
    Mutable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Polarity {
    Positive,
    Negative,
}

/// Rulership columns of a sign. Modern rulers give the outer planets their
/// signs; the classic columns keep the seven visible planets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignRulers {
    pub ruler: BodyId,
    pub detriment: BodyId,
    pub classic_ruler: BodyId,
    pub classic_detriment: BodyId,
    /// Planet exalted here, if any
    pub exaltation: Option<BodyId>,
    pub fall: Option<BodyId>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SignInfo {
    pub sign: Sign,
    pub name: &'static str,
    pub symbol: &'static str,
    pub element: Element,
    pub modality: Modality,
    pub polarity: Polarity,
    pub rulers: SignRulers,
}

const fn sign(
    sign: Sign,
    name: &'static str,
    symbol: &'static str,
    element: Element,
    modality: Modality,
    polarity: Polarity,
    rulers: SignRulers,
) -> SignInfo {
    SignInfo {
        sign,
        name,
        symbol,
        element,
        modality,
        polarity,
        rulers,
    }
}

const fn rulers(
    (ruler, detriment): (BodyId, BodyId),
    (classic_ruler, classic_detriment): (BodyId, BodyId),
    exaltation: Option<BodyId>,
    fall: Option<BodyId>,
) -> SignRulers {
    SignRulers {
        ruler,
        detriment,
        classic_ruler,
        classic_detriment,
        exaltation,
        fall,
    }
}

use BodyId::{Jupiter, Mars, Mercury, Moon, Neptune, Pluto, Saturn, Sun, Uranus, Venus};
use Element::{Air, Earth, Fire, Water};
use Modality::{Cardinal, Fixed, Mutable};
use Polarity::{Negative, Positive};

/// Zodiac order, indexed by `Sign as usize`.
pub static SIGNS: [SignInfo; 12] = [
    sign(Sign::Aries, "Aries", "♈", Fire, Cardinal, Positive,
        rulers((Mars, Venus), (Mars, Venus), Some(Sun), Some(Saturn))),
    sign(Sign::Taurus, "Taurus", "♉", Earth, Fixed, Negative,
        rulers((Venus, Pluto), (Venus, Mars), Some(Moon), None)),
    sign(Sign::Gemini, "Gemini", "♊", Air, Mutable, Positive,
        rulers((Mercury, Jupiter), (Mercury, Jupiter), None, None)),
    sign(Sign::Cancer, "Cancer", "♋", Water, Cardinal, Negative,
        rulers((Moon, Saturn), (Moon, Saturn), Some(Jupiter), Some(Mars))),
    sign(Sign::Leo, "Leo", "♌", Fire, Fixed, Positive,
        rulers((Sun, Uranus), (Sun, Saturn), None, None)),
    sign(Sign::Virgo, "Virgo", "♍", Earth, Mutable, Negative,
        rulers((Mercury, Neptune), (Mercury, Jupiter), Some(Mercury), Some(Venus))),
    sign(Sign::Libra, "Libra", "♎", Air, Cardinal, Positive,
        rulers((Venus, Mars), (Venus, Mars), Some(Saturn), Some(Sun))),
    sign(Sign::Scorpio, "Scorpio", "♏", Water, Fixed, Negative,
        rulers((Pluto, Venus), (Mars, Venus), None, Some(Moon))),
    sign(Sign::Sagittarius, "Sagittarius", "♐", Fire, Mutable, Positive,
        rulers((Jupiter, Mercury), (Jupiter, Mercury), None, None)),
    sign(Sign::Capricorn, "Capricorn", "♑", Earth, Cardinal, Negative,
        rulers((Saturn, Moon), (Saturn, Moon), Some(Mars), Some(Jupiter))),
    sign(Sign::Aquarius, "Aquarius", "♒", Air, Fixed, Positive,
        rulers((Uranus, Sun), (Saturn, Sun), None, None)),
    sign(Sign::Pisces, "Pisces", "♓", Water, Mutable, Negative,
        rulers((Neptune, Mercury), (Jupiter, Mercury), Some(Venus), Some(Mercury))),
];

impl Sign {
    pub fn all() -> impl Iterator<Item = Sign> {
        SIGNS.iter().map(|info| info.sign)
    }

    pub fn from_index(index: usize) -> Sign {
        SIGNS[index % 12].sign
    }

    /// Sign containing a longitude.
    pub fn from_longitude(longitude: f64) -> Sign {
        Self::from_index((normalize(longitude) / 30.0).floor() as usize)
    }

    pub fn info(self) -> &'static SignInfo {
        &SIGNS[self as usize]
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        self.info().name
    }

    pub fn element(self) -> Element {
        self.info().element
    }

    /// Modern ruler, Uranus, Neptune and Pluto included
    pub fn ruler(self) -> BodyId {
        self.info().rulers.ruler
    }

    /// Traditional ruler among the seven visible planets
    pub fn classic_ruler(self) -> BodyId {
        self.info().rulers.classic_ruler
    }

    /// Longitude of 0° of this sign.
    pub fn start_longitude(self) -> f64 {
        self as usize as f64 * 30.0
    }
}

/// Position within the containing sign, in [0, 30).
pub fn degree_in_sign(longitude: f64) -> f64 {
    normalize(longitude) % 30.0
}

/// Whole degrees and arc-minutes within the sign, with minutes rounded down.
pub fn degree_minute_in_sign(longitude: f64) -> (u8, u8) {
    let within = degree_in_sign(longitude);
    let degree = within.floor();
    let minute = ((within - degree) * 60.0).floor().min(59.0);
    (degree as u8, minute as u8)
}
