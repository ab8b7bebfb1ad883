use crate::aspects::AspectKind;
use crate::config::ChartLayoutConfig;
use crate::layout::rings::{
    AspectRingItem, BodyRingItem, HouseRingItem, RingItem, SignRingItem, VertexRingItem,
};
use crate::layout::{AssembledRing, AssembledWheel, ChartGeometry, RingDataSource, RingType};
use crate::rendering::glyphs::Glyph;
use crate::rendering::primitives::{Color, Point, Shape, Stroke, TextAnchor};
use crate::rendering::spec::{ChartMetadata, ChartSpec, RingMetadata};
use crate::rendering::theme::Theme;

/// ChartSpec generator - converts assembled wheel to ChartSpec
#[derive(Debug, Clone)]
pub struct ChartSpecGenerator {
    theme: Theme,
    layout: ChartLayoutConfig,
}

impl ChartSpecGenerator {
    pub fn new(theme: Theme, layout: ChartLayoutConfig) -> Self {
        Self { theme, layout }
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Generate ChartSpec from assembled wheel.
    ///
    /// Layers are emitted back to front: sign sectors, houses, cusp lines,
    /// sign symbols, body rings from outer to inner, then aspect lines.
    pub fn generate(&self, wheel: &AssembledWheel) -> ChartSpec {
        let g = &wheel.geometry;
        let mut shapes = Vec::new();
        let mut rings = Vec::new();
        let mut aspect_set_id = String::new();

        let mut push_group = |id: String, kind: &str, children: Vec<Shape>| {
            rings.push(RingMetadata {
                id: id.clone(),
                kind: kind.to_string(),
            });
            shapes.push(Shape::Group {
                id,
                shapes: children,
            });
        };

        for ring in wheel.ring(RingType::Signs) {
            push_group(ring.id.clone(), ring.ring_type.key(), self.sign_sectors(g, ring));
        }
        for ring in wheel.ring(RingType::Houses) {
            push_group(ring.id.clone(), ring.ring_type.key(), self.houses(g, ring));
        }
        for ring in wheel.ring(RingType::Vertices) {
            push_group(ring.id.clone(), ring.ring_type.key(), self.vertices(g, ring));
        }
        for ring in wheel.ring(RingType::Signs) {
            push_group(
                format!("{}_symbols", ring.id),
                "sign_symbols",
                self.sign_symbols(g, ring),
            );
        }
        for ring in wheel.ring(RingType::Bodies) {
            push_group(ring.id.clone(), ring.ring_type.key(), self.bodies(g, ring));
        }
        for ring in wheel.ring(RingType::Aspects) {
            if let RingDataSource::AspectSet { aspect_set_id: id } = &ring.data_source {
                aspect_set_id = id.clone();
            }
            push_group(ring.id.clone(), ring.ring_type.key(), self.aspects(g, ring));
        }

        ChartSpec {
            width: g.width,
            height: g.height,
            center: g.center,
            title: wheel.name.clone(),
            font_family: self.layout.font.clone(),
            background_color: self.theme.background,
            shapes,
            metadata: ChartMetadata {
                wheel_id: wheel.id.clone(),
                rings,
                aspect_set_id,
            },
        }
    }

    fn outline(&self) -> Stroke {
        Stroke::solid(self.theme.foreground, self.layout.stroke_width)
            .with_opacity(self.layout.stroke_opacity)
    }

    fn disc(&self, g: &ChartGeometry, radius: f64, stroke: Option<Stroke>) -> Shape {
        Shape::Circle {
            center: g.center,
            radius,
            fill: Some(self.theme.background),
            stroke,
        }
    }

    fn sector(&self, g: &ChartGeometry, radius: f64, start: f64, end: f64, fill: Color) -> Shape {
        Shape::Sector {
            center: g.center,
            radius,
            start: g.polar(start, radius),
            end: g.polar(end, radius),
            large_arc: end - start > 180.0,
            fill,
            fill_opacity: self.theme.sector_opacity,
            stroke: Some(self.outline()),
        }
    }

    fn glyph(&self, g: &ChartGeometry, at: Point, glyph: Glyph, color: Color) -> Shape {
        Shape::Glyph {
            origin: Point {
                x: at.x - g.pos_adj,
                y: at.y - g.pos_adj,
            },
            glyph,
            scale: g.symbol_scale,
            color,
            stroke_width: self.layout.stroke_width * 1.5,
        }
    }

    fn sign_sectors(&self, g: &ChartGeometry, ring: &AssembledRing) -> Vec<Shape> {
        let radius = ring.radius_outer;
        let mut shapes = vec![self.disc(g, radius, None)];
        shapes.extend(sign_items(ring).map(|item| {
            let fill = self.theme.color_for(item.classification);
            self.sector(g, radius, item.start_angle, item.end_angle, fill)
        }));
        shapes
    }

    fn sign_symbols(&self, g: &ChartGeometry, ring: &AssembledRing) -> Vec<Shape> {
        let radius = ring.radius_outer - g.ring_thickness / 2.0;
        sign_items(ring)
            .map(|item| {
                let at = g.polar(item.start_angle + 15.0, radius);
                let color = self.theme.color_for(item.classification);
                self.glyph(g, at, Glyph::for_sign(item.sign), color)
            })
            .collect()
    }

    fn houses(&self, g: &ChartGeometry, ring: &AssembledRing) -> Vec<Shape> {
        let radius = ring.radius_outer;
        let number_radius = radius - g.ring_thickness / 2.0;
        let mut shapes = vec![self.disc(g, radius, None)];

        for item in house_items(ring) {
            let color = self.theme.color_for(item.classification);
            shapes.push(self.sector(g, radius, item.start_angle, item.end_angle, color));
            shapes.push(Shape::Text {
                position: g.polar(item.start_angle + item.size / 2.0, number_radius),
                content: item.number.to_string(),
                size: g.font_size * 0.8,
                color,
                anchor: TextAnchor::Middle,
            });
        }
        shapes
    }

    fn vertices(&self, g: &ChartGeometry, ring: &AssembledRing) -> Vec<Shape> {
        let width = self.layout.stroke_width;
        let mut shapes = vec![
            self.disc(
                g,
                g.house_inner_radius(),
                Some(Stroke::solid(self.theme.foreground, width)),
            ),
            Shape::Circle {
                center: g.center,
                radius: g.outer_body_radius(),
                fill: None,
                stroke: Some(Stroke::solid(self.theme.dim, width)),
            },
        ];

        for item in vertex_items(ring) {
            let (radius, color) = if item.emphasized {
                (g.vertex_radius(), self.theme.foreground)
            } else {
                (g.house_inner_radius(), self.theme.dim)
            };
            shapes.push(Shape::Line {
                from: g.center,
                to: g.polar(item.angle, radius),
                stroke: Stroke::solid(color, width).with_opacity(self.layout.stroke_opacity),
            });
        }
        shapes
    }

    fn bodies(&self, g: &ChartGeometry, ring: &AssembledRing) -> Vec<Shape> {
        let wheel_radius = ring.radius_inner;
        let symbol_radius = wheel_radius + g.ring_thickness / 2.0;
        let inner_radius = wheel_radius - g.ring_thickness;
        let thin = self.layout.stroke_width / 2.0;
        let mut shapes = Vec::new();

        for item in body_items(ring) {
            let color = self.theme.color_for(item.classification);
            let degree = g.polar(item.angle, wheel_radius);
            let symbol = g.polar(item.adjusted_angle, symbol_radius);

            shapes.push(Shape::Line {
                from: degree,
                to: symbol,
                stroke: Stroke::solid(color, thin),
            });
            shapes.push(Shape::Circle {
                center: symbol,
                radius: g.font_size / 2.0,
                fill: Some(self.theme.background),
                stroke: None,
            });
            shapes.push(Shape::Line {
                from: degree,
                to: g.polar(item.angle, inner_radius),
                stroke: Stroke::solid(self.theme.dim, thin).dashed(g.ring_thickness / 11.0),
            });
            shapes.push(self.glyph(g, symbol, Glyph::for_body(item.body), color));

            if item.retrograde {
                shapes.push(Shape::Text {
                    position: Point {
                        x: symbol.x + g.pos_adj,
                        y: symbol.y + g.pos_adj,
                    },
                    content: "R".to_string(),
                    size: g.font_size * 0.4,
                    color,
                    anchor: TextAnchor::Start,
                });
            }
        }
        shapes
    }

    fn aspects(&self, g: &ChartGeometry, ring: &AssembledRing) -> Vec<Shape> {
        let radius = ring.radius_outer;
        let mut shapes = vec![self.disc(
            g,
            radius,
            Some(Stroke::solid(self.theme.dim, self.layout.stroke_width)),
        )];

        for item in aspect_items(ring) {
            let factor = if item.kind == AspectKind::Conjunction {
                1.0
            } else {
                item.strength
            };
            let color = self.theme.aspect_color(item.kind);
            shapes.push(Shape::Line {
                from: g.polar(item.from_angle, radius),
                to: g.polar(item.to_angle, radius),
                stroke: Stroke::solid(color, self.layout.stroke_width / 2.0)
                    .with_opacity(self.layout.stroke_opacity * factor),
            });
        }
        shapes
    }
}

impl Default for ChartSpecGenerator {
    fn default() -> Self {
        Self::new(Theme::default(), ChartLayoutConfig::default())
    }
}

fn sign_items(ring: &AssembledRing) -> impl Iterator<Item = &SignRingItem> {
    ring.items.iter().filter_map(|item| match item {
        RingItem::Sign(sign) => Some(sign),
        _ => None,
    })
}

fn house_items(ring: &AssembledRing) -> impl Iterator<Item = &HouseRingItem> {
    ring.items.iter().filter_map(|item| match item {
        RingItem::House(house) => Some(house),
        _ => None,
    })
}

fn vertex_items(ring: &AssembledRing) -> impl Iterator<Item = &VertexRingItem> {
    ring.items.iter().filter_map(|item| match item {
        RingItem::Vertex(vertex) => Some(vertex),
        _ => None,
    })
}

fn body_items(ring: &AssembledRing) -> impl Iterator<Item = &BodyRingItem> {
    ring.items.iter().filter_map(|item| match item {
        RingItem::Body(body) => Some(body),
        _ => None,
    })
}

fn aspect_items(ring: &AssembledRing) -> impl Iterator<Item = &AspectRingItem> {
    ring.items.iter().filter_map(|item| match item {
        RingItem::Aspect(aspect) => Some(aspect),
        _ => None,
    })
}
