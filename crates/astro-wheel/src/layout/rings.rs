use crate::angles::normalize;
use crate::aspects::{AspectKind, AspectSet};
use crate::catalog::{BodyId, Classification, Sign};
use crate::chart::ChartData;
use crate::layout::placement::place_symbols;
use serde::{Deserialize, Serialize};

/// Wheel angle of a longitude: 0 at the rotation point, increasing counter-clockwise
pub fn wheel_angle(longitude: f64, rotation: f64) -> f64 {
    normalize(longitude - rotation)
}

/// Sign ring item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignRingItem {
    pub id: String,
    pub sign: Sign,
    pub start_angle: f64,
    pub end_angle: f64,
    pub classification: Classification,
}

/// House ring item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HouseRingItem {
    pub id: String,
    pub number: u8,
    pub cusp_longitude: f64,
    pub size: f64,
    pub start_angle: f64,
    /// `start_angle + size`, may exceed 360
    pub end_angle: f64,
    /// Color cycles through the four elements in house order
    pub classification: Classification,
}

/// Cusp line item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VertexRingItem {
    pub id: String,
    pub house: u8,
    pub angle: f64,
    /// Houses 1, 4, 7 and 10 mark the chart angles
    pub emphasized: bool,
}

/// Body ring item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodyRingItem {
    pub id: String,
    pub chart: String,
    pub body: BodyId,
    pub longitude: f64,
    pub angle: f64,
    pub adjusted_angle: f64,
    pub classification: Classification,
    pub retrograde: bool,
}

/// Aspect line item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AspectRingItem {
    pub id: String,
    pub kind: AspectKind,
    pub from_angle: f64,
    pub to_angle: f64,
    pub strength: f64,
}

/// Ring item (enum of all types)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "item", rename_all = "snake_case")]
pub enum RingItem {
    Sign(SignRingItem),
    House(HouseRingItem),
    Vertex(VertexRingItem),
    Body(BodyRingItem),
    Aspect(AspectRingItem),
}

const ELEMENT_CYCLE: [Classification; 4] = [
    Classification::Fire,
    Classification::Earth,
    Classification::Air,
    Classification::Water,
];

/// Build static zodiac items (12 signs)
pub fn build_static_zodiac_items(slug: &str, rotation: f64) -> Vec<SignRingItem> {
    Sign::all()
        .map(|sign| {
            let start_angle = wheel_angle(sign.start_longitude(), rotation);
            SignRingItem {
                id: format!("{}_sign_{}", slug, sign.name().to_lowercase()),
                sign,
                start_angle,
                end_angle: start_angle + 30.0,
                classification: sign.element().classification(),
            }
        })
        .collect()
}

/// Build house items from a chart's cusps
pub fn build_house_items(slug: &str, chart: &ChartData, rotation: f64) -> Vec<HouseRingItem> {
    chart
        .houses
        .cusps()
        .into_iter()
        .map(|cusp| {
            let start_angle = wheel_angle(cusp.longitude, rotation);
            HouseRingItem {
                id: format!("{}_house_{}", slug, cusp.number),
                number: cusp.number,
                cusp_longitude: cusp.longitude,
                size: cusp.size,
                start_angle,
                end_angle: start_angle + cusp.size,
                classification: ELEMENT_CYCLE[usize::from(cusp.number - 1) % 4],
            }
        })
        .collect()
}

/// Build one cusp line per house
pub fn build_vertex_items(slug: &str, chart: &ChartData, rotation: f64) -> Vec<VertexRingItem> {
    chart
        .houses
        .cusps()
        .into_iter()
        .map(|cusp| VertexRingItem {
            id: format!("{}_vertex_{}", slug, cusp.number),
            house: cusp.number,
            angle: wheel_angle(cusp.longitude, rotation),
            emphasized: matches!(cusp.number, 1 | 4 | 7 | 10),
        })
        .collect()
}

/// Build body items with de-collided symbol angles, in ascending wheel angle
pub fn build_body_items(
    slug: &str,
    chart: &ChartData,
    rotation: f64,
    min_separation: f64,
) -> Vec<BodyRingItem> {
    let angles: Vec<(BodyId, f64)> = chart
        .bodies
        .iter()
        .map(|b| (b.id, wheel_angle(b.longitude, rotation)))
        .collect();

    place_symbols(&angles, min_separation)
        .into_iter()
        .filter_map(|placement| {
            let body = chart.body(placement.body)?;
            Some(BodyRingItem {
                id: format!("{}_body_{}", slug, body.id.key()),
                chart: chart.label.clone(),
                body: body.id,
                longitude: body.longitude,
                angle: placement.original,
                adjusted_angle: placement.adjusted,
                classification: body.classification(),
                retrograde: body.retrograde,
            })
        })
        .collect()
}

/// Build aspect line items from true body longitudes
pub fn build_aspect_items(slug: &str, aspects: &AspectSet, rotation: f64) -> Vec<AspectRingItem> {
    aspects
        .pairs
        .iter()
        .enumerate()
        .map(|(i, pair)| AspectRingItem {
            id: format!(
                "{}_aspect_{}_{}_{}_{}",
                slug,
                i,
                pair.from.body.key(),
                pair.aspect.kind,
                pair.to.body.key()
            ),
            kind: pair.aspect.kind,
            from_angle: wheel_angle(pair.from.longitude, rotation),
            to_angle: wheel_angle(pair.to.longitude, rotation),
            strength: pair.aspect.strength,
        })
        .collect()
}
