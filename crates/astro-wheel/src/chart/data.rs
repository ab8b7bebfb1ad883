use crate::angles::normalize;
use crate::catalog::{degree_minute_in_sign, dignity_of, BodyId, BodyKind, Classification, Dignity, Sign};
use crate::ephemeris::{BodyPosition, ChartPositions};
use crate::error::{AngleName, ChartError};
use crate::houses::HouseSet;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A recognised, displayed body with everything the wheel needs to draw it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartBody {
    pub id: BodyId,
    pub longitude: f64,
    pub latitude: f64,
    pub speed: f64,
    pub sign: Sign,
    /// Whole degrees within the sign
    pub degree: u8,
    pub minute: u8,
    pub house: u8,
    pub retrograde: bool,
}

impl ChartBody {
    pub fn kind(&self) -> BodyKind {
        self.id.kind()
    }

    pub fn classification(&self) -> Classification {
        self.id.classification()
    }

    /// Essential dignity in the current sign, for the ten planets only
    pub fn dignity(&self) -> Option<Dignity> {
        dignity_of(self.id, self.sign)
    }
}

/// Validated chart ready for aspecting and layout
#[derive(Debug, Clone, PartialEq)]
pub struct ChartData {
    pub label: String,
    pub houses: HouseSet,
    pub ascendant: f64,
    pub midheaven: f64,
    /// Displayed bodies in catalog order, including the four angles
    pub bodies: Vec<ChartBody>,
}

impl ChartData {
    /// Validate raw positions and resolve displayed bodies.
    ///
    /// Unknown names and bodies outside `display` are skipped whatever their
    /// values. Angle entries in the body list are ignored in favour of the
    /// explicit ascendant and midheaven.
    pub fn from_positions(
        positions: &ChartPositions,
        display: &BTreeSet<BodyId>,
    ) -> Result<Self, ChartError> {
        let validated = validate_positions(positions)?;
        let houses = validated.houses;
        let (ascendant, midheaven) = (validated.ascendant, validated.midheaven);

        let mut bodies: Vec<ChartBody> = Vec::new();
        for (id, position) in resolve_bodies(positions) {
            if id.is_angle() {
                log::debug!("{}: ignoring angle '{}' in body list", positions.label, position.name);
                continue;
            }
            if !display.contains(&id) {
                continue;
            }
            require_finite(position)?;
            bodies.push(make_body(
                id,
                position.longitude,
                position.latitude,
                position.speed,
                &houses,
            ));
        }

        let angles = [
            (BodyId::Ascendant, ascendant),
            (BodyId::ImumCoeli, normalize(midheaven + 180.0)),
            (BodyId::Descendant, normalize(ascendant + 180.0)),
            (BodyId::Midheaven, midheaven),
        ];
        for (id, longitude) in angles {
            if display.contains(&id) {
                bodies.push(make_body(id, longitude, 0.0, 0.0, &houses));
            }
        }

        bodies.sort_by_key(|b| b.id);

        Ok(Self {
            label: positions.label.clone(),
            houses,
            ascendant,
            midheaven,
            bodies,
        })
    }

    pub fn body(&self, id: BodyId) -> Option<&ChartBody> {
        self.bodies.iter().find(|b| b.id == id)
    }
}

fn make_body(id: BodyId, longitude: f64, latitude: f64, speed: f64, houses: &HouseSet) -> ChartBody {
    let longitude = normalize(longitude);
    let (degree, minute) = degree_minute_in_sign(longitude);
    ChartBody {
        id,
        longitude,
        latitude,
        speed,
        sign: Sign::from_longitude(longitude),
        degree,
        minute,
        house: houses.house_of(longitude),
        retrograde: speed < 0.0,
    }
}

/// Angles and cusps of a chart that passed validation
pub(crate) struct ValidatedChart {
    pub houses: HouseSet,
    pub ascendant: f64,
    pub midheaven: f64,
}

/// Everything a render needs from the raw input, checked up front
pub(crate) fn validate_positions(positions: &ChartPositions) -> Result<ValidatedChart, ChartError> {
    let houses = HouseSet::new(&positions.cusps)?;
    let ascendant = required_angle(positions.ascendant, AngleName::Ascendant)?;
    let midheaven = required_angle(positions.midheaven, AngleName::Midheaven)?;

    Ok(ValidatedChart {
        houses,
        ascendant,
        midheaven,
    })
}

/// Reject a body that will be drawn with a longitude, latitude or speed that is not finite
fn require_finite(body: &BodyPosition) -> Result<(), ChartError> {
    for (field, value) in [
        ("longitude", body.longitude),
        ("latitude", body.latitude),
        ("speed", body.speed),
    ] {
        if !value.is_finite() {
            return Err(ChartError::NonFiniteValue {
                field: format!("{} {}", body.name, field),
                value,
            });
        }
    }
    Ok(())
}

fn required_angle(value: Option<f64>, name: AngleName) -> Result<f64, ChartError> {
    let value = value.ok_or(ChartError::MissingAngle(name))?;
    if !value.is_finite() {
        return Err(ChartError::NonFiniteValue {
            field: name.to_string(),
            value,
        });
    }
    Ok(normalize(value))
}

/// Recognised bodies in input order, first occurrence of each identity only
pub(crate) fn resolve_bodies(
    positions: &ChartPositions,
) -> Vec<(BodyId, &BodyPosition)> {
    let mut seen = BTreeSet::new();
    let mut resolved = Vec::new();
    for position in &positions.bodies {
        match position.name.parse::<BodyId>() {
            Ok(id) if seen.insert(id) => resolved.push((id, position)),
            Ok(id) => {
                log::debug!("{}: duplicate entry for {} skipped", positions.label, id);
            }
            Err(err) => {
                log::debug!("{}: {} skipped", positions.label, err);
            }
        }
    }
    resolved
}
