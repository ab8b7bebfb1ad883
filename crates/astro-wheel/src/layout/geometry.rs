use crate::angles::normalize;
use crate::config::ChartLayoutConfig;
use crate::error::ChartError;
use crate::rendering::primitives::Point;
use serde::{Deserialize, Serialize};

/// Source glyph em box, in glyph units
pub const GLYPH_EM: f64 = 20.0;

/// Concentric ring geometry derived from canvas size and layout fractions
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartGeometry {
    pub width: f64,
    pub height: f64,
    pub center: Point,
    pub margin: f64,
    pub max_radius: f64,
    pub ring_thickness: f64,
    pub font_size: f64,
    /// Offset that centres a glyph on its anchor point
    pub pos_adj: f64,
    /// Scale applied to [`GLYPH_EM`]-sized glyph paths
    pub symbol_scale: f64,
}

impl ChartGeometry {
    /// `height` defaults to `width` when omitted
    pub fn new(width: f64, height: Option<f64>, layout: &ChartLayoutConfig) -> Result<Self, ChartError> {
        let height = height.unwrap_or(width);
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            return Err(ChartError::InvalidCanvas { width, height });
        }

        let margin = width.min(height) * layout.margin_factor;
        let max_radius = (width - margin).min(height - margin) / 2.0;
        let ring_thickness = max_radius * layout.ring_thickness_fraction;
        let font_size = ring_thickness * layout.font_size_fraction;

        Ok(Self {
            width,
            height,
            center: Point {
                x: width / 2.0,
                y: height / 2.0,
            },
            margin,
            max_radius,
            ring_thickness,
            font_size,
            pos_adj: font_size / layout.pos_adj_factor,
            symbol_scale: font_size * 0.8 / GLYPH_EM,
        })
    }

    /// Outer edge of the sign ring
    pub fn sign_ring_radius(&self) -> f64 {
        self.max_radius
    }

    /// Outer edge of the house ring
    pub fn house_ring_radius(&self) -> f64 {
        self.max_radius - self.ring_thickness
    }

    /// Inner edge of the house ring, where minor cusp lines stop
    pub fn house_inner_radius(&self) -> f64 {
        self.max_radius - 2.0 * self.ring_thickness
    }

    /// The four angle lines reach past the sign ring into the margin
    pub fn vertex_radius(&self) -> f64 {
        self.max_radius + self.margin / 2.0
    }

    pub fn outer_body_radius(&self) -> f64 {
        self.max_radius - 3.0 * self.ring_thickness
    }

    pub fn inner_body_radius(&self) -> f64 {
        self.max_radius - 4.0 * self.ring_thickness
    }

    /// Point on the wheel for an angle measured from the left, counter-clockwise
    pub fn polar(&self, angle: f64, radius: f64) -> Point {
        let theta = normalize(angle).to_radians();
        Point {
            x: self.center.x - radius * theta.cos(),
            y: self.center.y + radius * theta.sin(),
        }
    }
}
