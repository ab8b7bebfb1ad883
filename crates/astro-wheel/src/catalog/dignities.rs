//! Essential dignities of the ten planets.
//!
//! A planet in a sign holds at most one dignity. When more than one applies,
//! exaltation wins over domicile, which wins over detriment, then fall.

use crate::catalog::bodies::BodyId;
use crate::catalog::signs::Sign;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Dignity {
    Exaltation,
    Domicile,
    Detriment,
    Fall,
    /// None of the other four
    Peregrine,
}

impl Dignity {
    pub fn score(self) -> i8 {
        match self {
            Dignity::Exaltation => 2,
            Dignity::Domicile => 1,
            Dignity::Peregrine => 0,
            Dignity::Detriment => -1,
            Dignity::Fall => -2,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Dignity::Exaltation => "Exaltation",
            Dignity::Domicile => "Domicile",
            Dignity::Detriment => "Detriment",
            Dignity::Fall => "Fall",
            Dignity::Peregrine => "Peregrine",
        }
    }
}

/// Signs where one planet is strong or weak
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlanetDignities {
    pub body: BodyId,
    pub domicile: &'static [Sign],
    pub exaltation: Sign,
    pub detriment: &'static [Sign],
    pub fall: Sign,
}

use Sign::*;

pub static PLANET_DIGNITIES: [PlanetDignities; 10] = [
    PlanetDignities {
        body: BodyId::Sun,
        domicile: &[Leo],
        exaltation: Aries,
        detriment: &[Aquarius],
        fall: Libra,
    },
    PlanetDignities {
        body: BodyId::Moon,
        domicile: &[Cancer],
        exaltation: Taurus,
        detriment: &[Capricorn],
        fall: Scorpio,
    },
    PlanetDignities {
        body: BodyId::Mercury,
        domicile: &[Gemini, Virgo],
        exaltation: Virgo,
        detriment: &[Sagittarius, Pisces],
        fall: Pisces,
    },
    PlanetDignities {
        body: BodyId::Venus,
        domicile: &[Taurus, Libra],
        exaltation: Pisces,
        detriment: &[Aries, Scorpio],
        fall: Virgo,
    },
    PlanetDignities {
        body: BodyId::Mars,
        domicile: &[Aries, Scorpio],
        exaltation: Capricorn,
        detriment: &[Libra, Taurus],
        fall: Cancer,
    },
    PlanetDignities {
        body: BodyId::Jupiter,
        domicile: &[Sagittarius, Pisces],
        exaltation: Cancer,
        detriment: &[Gemini, Virgo],
        fall: Capricorn,
    },
    PlanetDignities {
        body: BodyId::Saturn,
        domicile: &[Capricorn, Aquarius],
        exaltation: Libra,
        detriment: &[Cancer, Leo],
        fall: Aries,
    },
    PlanetDignities {
        body: BodyId::Uranus,
        domicile: &[Aquarius],
        exaltation: Scorpio,
        detriment: &[Leo],
        fall: Taurus,
    },
    PlanetDignities {
        body: BodyId::Neptune,
        domicile: &[Pisces],
        exaltation: Aquarius,
        detriment: &[Virgo],
        fall: Leo,
    },
    PlanetDignities {
        body: BodyId::Pluto,
        domicile: &[Scorpio],
        exaltation: Aries,
        detriment: &[Taurus],
        fall: Libra,
    },
];

/// Dignity table of a planet; `None` for nodes, asteroids and angles
pub fn planet_dignities(body: BodyId) -> Option<&'static PlanetDignities> {
    PLANET_DIGNITIES.iter().find(|entry| entry.body == body)
}

/// Dignity of `body` placed in `sign`, or `None` when the body has no dignities
pub fn dignity_of(body: BodyId, sign: Sign) -> Option<Dignity> {
    let entry = planet_dignities(body)?;
    let dignity = if entry.exaltation == sign {
        Dignity::Exaltation
    } else if entry.domicile.contains(&sign) {
        Dignity::Domicile
    } else if entry.detriment.contains(&sign) {
        Dignity::Detriment
    } else if entry.fall == sign {
        Dignity::Fall
    } else {
        Dignity::Peregrine
    };
    Some(dignity)
}
