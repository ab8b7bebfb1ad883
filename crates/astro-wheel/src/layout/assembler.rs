use crate::aspects::AspectSet;
use crate::chart::ChartData;
use crate::config::ChartLayoutConfig;
use crate::layout::geometry::ChartGeometry;
use crate::layout::rings::{
    build_aspect_items, build_body_items, build_house_items, build_static_zodiac_items,
    build_vertex_items, RingItem,
};
use crate::layout::types::{RingDataSource, RingType};
use serde::{Deserialize, Serialize};

/// Assembled wheel with resolved ring items
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssembledWheel {
    pub id: String,
    pub name: String,
    /// Longitude drawn at the left of the wheel (the primary ascendant)
    pub rotation: f64,
    pub geometry: ChartGeometry,
    /// Outermost first
    pub rings: Vec<AssembledRing>,
}

impl AssembledWheel {
    pub fn ring(&self, ring_type: RingType) -> impl Iterator<Item = &AssembledRing> {
        self.rings.iter().filter(move |r| r.ring_type == ring_type)
    }
}

/// Assembled ring with resolved items
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssembledRing {
    pub id: String,
    pub ring_type: RingType,
    pub label: String,
    pub order: u32,
    pub radius_inner: f64,
    pub radius_outer: f64,
    pub data_source: RingDataSource,
    /// Minimum symbol separation used on body rings
    pub min_separation: Option<f64>,
    pub items: Vec<RingItem>,
}

/// Wheel assembler
pub struct WheelAssembler;

impl WheelAssembler {
    /// Build a complete wheel, outer ring to inner.
    ///
    /// With a secondary chart the primary's bodies move to the inner ring and the
    /// secondary's take the outer one. `aspects` feeds the central line layer.
    pub fn build_wheel(
        name: &str,
        primary: &ChartData,
        secondary: Option<&ChartData>,
        aspects: &AspectSet,
        geometry: ChartGeometry,
        layout: &ChartLayoutConfig,
    ) -> AssembledWheel {
        let rotation = primary.ascendant;
        let g = &geometry;
        let slug = slugify(name);
        let mut rings = Vec::new();

        rings.push(AssembledRing {
            id: format!("{}_signs", slug),
            ring_type: RingType::Signs,
            label: "Signs".to_string(),
            order: 0,
            radius_inner: g.house_ring_radius(),
            radius_outer: g.sign_ring_radius(),
            data_source: RingDataSource::StaticZodiac,
            min_separation: None,
            items: build_static_zodiac_items(&slug, rotation)
                .into_iter()
                .map(RingItem::Sign)
                .collect(),
        });

        rings.push(AssembledRing {
            id: format!("{}_houses", slug),
            ring_type: RingType::Houses,
            label: "Houses".to_string(),
            order: 1,
            radius_inner: g.house_inner_radius(),
            radius_outer: g.house_ring_radius(),
            data_source: RingDataSource::ChartHouses {
                chart: primary.label.clone(),
            },
            min_separation: None,
            items: build_house_items(&slug, primary, rotation)
                .into_iter()
                .map(RingItem::House)
                .collect(),
        });

        rings.push(AssembledRing {
            id: format!("{}_vertices", slug),
            ring_type: RingType::Vertices,
            label: "Vertices".to_string(),
            order: 2,
            radius_inner: 0.0,
            radius_outer: g.vertex_radius(),
            data_source: RingDataSource::ChartVertices {
                chart: primary.label.clone(),
            },
            min_separation: None,
            items: build_vertex_items(&slug, primary, rotation)
                .into_iter()
                .map(RingItem::Vertex)
                .collect(),
        });

        let outer_chart = secondary.unwrap_or(primary);
        rings.push(Self::body_ring(
            &slug,
            "outer",
            3,
            outer_chart,
            rotation,
            g.outer_body_radius(),
            g.ring_thickness,
            layout.outer_min_degree,
        ));

        let aspect_radius = if secondary.is_some() {
            rings.push(Self::body_ring(
                &slug,
                "inner",
                4,
                primary,
                rotation,
                g.inner_body_radius(),
                g.ring_thickness,
                layout.inner_min_degree,
            ));
            g.inner_body_radius()
        } else {
            g.outer_body_radius()
        };

        let order = rings.len() as u32;
        rings.push(AssembledRing {
            id: format!("{}_aspects", slug),
            ring_type: RingType::Aspects,
            label: aspects.label.clone(),
            order,
            radius_inner: 0.0,
            radius_outer: aspect_radius,
            data_source: RingDataSource::AspectSet {
                aspect_set_id: aspects.id.clone(),
            },
            min_separation: None,
            items: build_aspect_items(&slug, aspects, rotation)
                .into_iter()
                .map(RingItem::Aspect)
                .collect(),
        });

        AssembledWheel {
            id: slug,
            name: name.to_string(),
            rotation,
            geometry,
            rings,
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn body_ring(
        slug: &str,
        position: &str,
        order: u32,
        chart: &ChartData,
        rotation: f64,
        radius: f64,
        ring_thickness: f64,
        min_separation: f64,
    ) -> AssembledRing {
        let ring_slug = format!("{}_{}", slug, position);
        AssembledRing {
            id: format!("{}_bodies", ring_slug),
            ring_type: RingType::Bodies,
            label: format!("{} Bodies", chart.label),
            order,
            radius_inner: radius,
            radius_outer: radius + ring_thickness,
            data_source: RingDataSource::ChartBodies {
                chart: chart.label.clone(),
            },
            min_separation: Some(min_separation),
            items: build_body_items(&ring_slug, chart, rotation, min_separation)
                .into_iter()
                .map(RingItem::Body)
                .collect(),
        }
    }
}

/// Lowercase id fragment built from a display name
pub fn slugify(name: &str) -> String {
    let mut slug = String::new();
    for c in name.trim().chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
        } else if !slug.ends_with('_') {
            slug.push('_');
        }
    }
    let slug = slug.trim_matches('_').to_string();
    if slug.is_empty() {
        "wheel".to_string()
    } else {
        slug
    }
}
