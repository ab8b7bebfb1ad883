//! House assignment over twelve cusp longitudes.

use crate::angles::{angular_distance, normalize};
use crate::catalog::{BodyId, Sign};
use crate::error::ChartError;
use serde::{Deserialize, Serialize};

/// One house with its cusp and span to the next cusp
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HouseCusp {
    /// 1-based house number
    pub number: u8,
    pub longitude: f64,
    pub size: f64,
    /// Sign on the cusp
    pub sign: Sign,
    /// Classic ruler of the cusp sign
    pub ruler: BodyId,
}

/// Validated set of twelve cusps, in house order
#[derive(Debug, Clone, PartialEq)]
pub struct HouseSet {
    cusps: [f64; 12],
}

impl HouseSet {
    /// Fails unless exactly twelve finite cusps are given
    pub fn new(cusps: &[f64]) -> Result<Self, ChartError> {
        let cusps: [f64; 12] = cusps
            .try_into()
            .map_err(|_| ChartError::InvalidCuspCount { found: cusps.len() })?;
        for (i, cusp) in cusps.iter().enumerate() {
            if !cusp.is_finite() {
                return Err(ChartError::NonFiniteValue {
                    field: format!("cusp {}", i + 1),
                    value: *cusp,
                });
            }
        }
        Ok(Self {
            cusps: cusps.map(normalize),
        })
    }

    /// Normalized cusp longitude for a 1-based house number
    pub fn cusp(&self, number: u8) -> Option<f64> {
        match number {
            1..=12 => Some(self.cusps[usize::from(number) - 1]),
            _ => None,
        }
    }

    pub fn longitudes(&self) -> &[f64; 12] {
        &self.cusps
    }

    pub fn cusps(&self) -> Vec<HouseCusp> {
        let sizes = self.sizes();
        self.cusps
            .iter()
            .zip(sizes)
            .enumerate()
            .map(|(i, (&longitude, size))| {
                let sign = Sign::from_longitude(longitude);
                HouseCusp {
                    number: i as u8 + 1,
                    longitude,
                    size,
                    sign,
                    ruler: sign.classic_ruler(),
                }
            })
            .collect()
    }

    /// Classic ruler of the sign on a house cusp
    pub fn ruler(&self, number: u8) -> Option<BodyId> {
        self.cusp(number)
            .map(|longitude| Sign::from_longitude(longitude).classic_ruler())
    }

    /// Span of every house, each in [0, 360).
    ///
    /// The total is 360 when the cusps run in zodiacal order. Cusps that
    /// wind around the circle more than once add a further 360 per turn.
    pub fn sizes(&self) -> [f64; 12] {
        std::array::from_fn(|i| house_size(self.cusps[i], self.cusps[(i + 1) % 12]))
    }

    pub fn house_of(&self, longitude: f64) -> u8 {
        assign_house(longitude, &self.cusps)
    }
}

/// House span from a cusp to the next, measured forward around the zodiac
pub fn house_size(cusp: f64, next_cusp: f64) -> f64 {
    (next_cusp - cusp + 360.0).rem_euclid(360.0)
}

/// 1-based house containing a longitude.
///
/// House `i` spans `[cusp[i], cusp[i+1])`. A span whose next cusp is numerically
/// smaller crosses 0°. When no span matches, the house whose cusp is nearest wins.
pub fn assign_house(longitude: f64, cusps: &[f64; 12]) -> u8 {
    let lon = normalize(longitude);

    for i in 0..12 {
        let current = normalize(cusps[i]);
        let next = normalize(cusps[(i + 1) % 12]);

        let inside = if next < current {
            lon >= current || lon < next
        } else {
            current <= lon && lon < next
        };
        if inside {
            return i as u8 + 1;
        }
    }

    closest_cusp(lon, cusps)
}

fn closest_cusp(longitude: f64, cusps: &[f64; 12]) -> u8 {
    let mut best = 0;
    let mut best_distance = f64::INFINITY;
    for (i, &cusp) in cusps.iter().enumerate() {
        let distance = angular_distance(longitude, cusp);
        if distance < best_distance {
            best = i;
            best_distance = distance;
        }
    }
    best as u8 + 1
}
