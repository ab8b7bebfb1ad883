use crate::angles::arc_midpoint;
use crate::chart::data::{resolve_bodies, validate_positions};
use crate::ephemeris::{BodyPosition, ChartPositions};
use crate::error::ChartError;

/// Builds the midpoint chart of two source charts
pub struct CompositeCalculator;

impl CompositeCalculator {
    /// Midpoint every body present in both charts, every cusp, the ascendant and the midheaven.
    ///
    /// Bodies found in only one chart are dropped. The descendant and imum coeli are
    /// not midpointed; they are derived from the composite ascendant and midheaven
    /// once the result is resolved into a chart. Composite bodies carry no motion.
    pub fn composite(a: &ChartPositions, b: &ChartPositions) -> Result<ChartPositions, ChartError> {
        let chart_a = validate_positions(a)?;
        let chart_b = validate_positions(b)?;

        let bodies_b = resolve_bodies(b);
        let bodies = resolve_bodies(a)
            .into_iter()
            .filter(|(id, _)| !id.is_angle())
            .filter_map(|(id, pos_a)| {
                let (_, pos_b) = bodies_b.iter().find(|(other, _)| *other == id)?;
                Some(BodyPosition {
                    name: id.key().to_string(),
                    longitude: arc_midpoint(pos_a.longitude, pos_b.longitude),
                    latitude: (pos_a.latitude + pos_b.latitude) / 2.0,
                    speed: 0.0,
                })
            })
            .collect();

        let cusps = chart_a
            .houses
            .longitudes()
            .iter()
            .zip(chart_b.houses.longitudes())
            .map(|(&ca, &cb)| arc_midpoint(ca, cb))
            .collect();

        Ok(ChartPositions {
            label: composite_label(&a.label, &b.label),
            bodies,
            cusps,
            ascendant: Some(arc_midpoint(chart_a.ascendant, chart_b.ascendant)),
            midheaven: Some(arc_midpoint(chart_a.midheaven, chart_b.midheaven)),
        })
    }
}

fn composite_label(a: &str, b: &str) -> String {
    match (a.is_empty(), b.is_empty()) {
        (true, true) => "composite".to_string(),
        _ => format!("{} + {} composite", a, b),
    }
}
