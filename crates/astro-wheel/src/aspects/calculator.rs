use crate::angles::angular_distance;
use crate::aspects::catalog::AspectCatalog;
use crate::aspects::policy::OrbPolicy;
use crate::aspects::types::{
    Aspect, AspectDefinition, AspectObjectRef, AspectPair, AspectSet, AspectSetKind,
};
use crate::catalog::BodyId;
use crate::chart::data::{ChartBody, ChartData};
use crate::layout::slugify;

/// Orb below which an aspect counts as exact
pub const EXACT_ORB: f64 = 1.0;

/// Aspect calculator bound to a catalog and an orb policy
#[derive(Debug, Clone)]
pub struct AspectCalculator<'c> {
    catalog: &'c AspectCatalog,
    policy: OrbPolicy,
}

impl AspectCalculator<'static> {
    /// Standard catalog with the default policy
    pub fn standard() -> Self {
        Self::new(AspectCatalog::standard(), OrbPolicy::default())
    }
}

impl<'c> AspectCalculator<'c> {
    /// Create a new aspect calculator
    pub fn new(catalog: &'c AspectCatalog, policy: OrbPolicy) -> Self {
        Self { catalog, policy }
    }

    pub fn catalog(&self) -> &'c AspectCatalog {
        self.catalog
    }

    pub fn policy(&self) -> &OrbPolicy {
        &self.policy
    }

    /// Classify two raw longitudes with their daily speeds
    pub fn calculate(&self, lon1: f64, speed1: f64, lon2: f64, speed2: f64) -> Option<Aspect> {
        self.classify(lon1, speed1, None, lon2, speed2, None)
    }

    /// Classify two resolved bodies, applying their orb adjustments
    pub fn calculate_between(&self, a: &ChartBody, b: &ChartBody) -> Option<Aspect> {
        self.classify(a.longitude, a.speed, Some(a.id), b.longitude, b.speed, Some(b.id))
    }

    /// Compute aspects within a single chart. Pairs of chart angles are skipped.
    pub fn intra_chart(&self, chart: &ChartData) -> AspectSet {
        let bodies = &chart.bodies;
        let mut pairs = Vec::new();

        for i in 0..bodies.len() {
            for j in (i + 1)..bodies.len() {
                let (a, b) = (&bodies[i], &bodies[j]);
                if a.id.is_angle() && b.id.is_angle() {
                    continue;
                }
                if let Some(aspect) = self.calculate_between(a, b) {
                    pairs.push(make_pair(&chart.label, a, &chart.label, b, aspect));
                }
            }
        }

        AspectSet {
            id: slugify(&chart.label),
            label: format!("{} Aspects", capitalize_first(&chart.label)),
            kind: AspectSetKind::IntraChart,
            charts: vec![chart.label.clone()],
            pairs,
        }
    }

    /// Compute aspects across two charts, every body of `a` against every body of `b`
    pub fn inter_chart(&self, a: &ChartData, b: &ChartData) -> AspectSet {
        let mut pairs = Vec::new();

        for body_a in &a.bodies {
            for body_b in &b.bodies {
                if let Some(aspect) = self.calculate_between(body_a, body_b) {
                    pairs.push(make_pair(&a.label, body_a, &b.label, body_b, aspect));
                }
            }
        }

        AspectSet {
            id: format!("{}:{}", slugify(&a.label), slugify(&b.label)),
            label: format!(
                "{} / {} Aspects",
                capitalize_first(&a.label),
                capitalize_first(&b.label)
            ),
            kind: AspectSetKind::InterChart,
            charts: vec![a.label.clone(), b.label.clone()],
            pairs,
        }
    }

    fn classify(
        &self,
        lon1: f64,
        speed1: f64,
        body1: Option<BodyId>,
        lon2: f64,
        speed2: f64,
        body2: Option<BodyId>,
    ) -> Option<Aspect> {
        if !(lon1.is_finite() && lon2.is_finite()) {
            return None;
        }
        let distance = angular_distance(lon1, lon2);

        // Strict comparison keeps the earlier catalog entry on equal deviation
        let mut best: Option<(&AspectDefinition, f64, f64)> = None;
        for definition in self.catalog.definitions() {
            if !self.policy.is_enabled(definition.kind) {
                continue;
            }
            let limit = self.policy.effective_orb(definition, body1, body2);
            if limit <= 0.0 {
                continue;
            }
            let deviation = angular_distance(distance, definition.angle);
            if deviation > limit {
                continue;
            }
            match best {
                Some((_, best_deviation, _)) if deviation >= best_deviation => {}
                _ => best = Some((definition, deviation, limit)),
            }
        }

        let (definition, orb, limit) = best?;
        Some(Aspect {
            kind: definition.kind,
            nature: definition.nature,
            exact_angle: definition.angle,
            distance,
            orb,
            max_orb: limit,
            strength: (1.0 - orb / limit).max(0.0),
            is_applying: is_aspect_applying(lon1, speed1, lon2, speed2, definition.angle),
            is_exact: orb < EXACT_ORB,
        })
    }
}

impl Default for AspectCalculator<'static> {
    fn default() -> Self {
        Self::standard()
    }
}

/// Applying when one time unit of motion brings the pair closer to exact.
/// Equal projected and current deviation, including two stationary bodies, is separating.
fn is_aspect_applying(lon1: f64, speed1: f64, lon2: f64, speed2: f64, exact_angle: f64) -> bool {
    let speed1 = if speed1.is_finite() { speed1 } else { 0.0 };
    let speed2 = if speed2.is_finite() { speed2 } else { 0.0 };

    let current = (angular_distance(lon1, lon2) - exact_angle).abs();
    let projected = (angular_distance(lon1 + speed1, lon2 + speed2) - exact_angle).abs();
    projected < current
}

fn make_pair(
    chart_a: &str,
    a: &ChartBody,
    chart_b: &str,
    b: &ChartBody,
    aspect: Aspect,
) -> AspectPair {
    AspectPair {
        from: AspectObjectRef {
            chart: chart_a.to_string(),
            body: a.id,
            longitude: a.longitude,
        },
        to: AspectObjectRef {
            chart: chart_b.to_string(),
            body: b.id,
            longitude: b.longitude,
        },
        aspect,
    }
}

/// Capitalize first letter of a string
fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
    }
}
