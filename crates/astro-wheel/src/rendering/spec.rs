use crate::rendering::primitives::{Color, Point, Shape};
use serde::{Deserialize, Serialize};

/// Chart metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartMetadata {
    pub wheel_id: String,
    pub rings: Vec<RingMetadata>,
    pub aspect_set_id: String,
}

/// Ring metadata, one entry per emitted group
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RingMetadata {
    pub id: String,
    pub kind: String,
}

/// Declarative description of a chart to render
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSpec {
    pub width: f64,
    pub height: f64,
    pub center: Point,
    pub title: String,
    pub font_family: String,
    pub background_color: Color,
    /// Painted in order, later shapes on top
    pub shapes: Vec<Shape>,
    pub metadata: ChartMetadata,
}

impl ChartSpec {
    /// Create a new empty chart spec
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            center: Point {
                x: width / 2.0,
                y: height / 2.0,
            },
            title: String::new(),
            font_family: "sans-serif".to_string(),
            background_color: Color::WHITE,
            shapes: Vec::new(),
            metadata: ChartMetadata {
                wheel_id: String::new(),
                rings: Vec::new(),
                aspect_set_id: String::new(),
            },
        }
    }

    /// Number of shapes including those nested in groups
    pub fn shape_count(&self) -> usize {
        fn count(shapes: &[Shape]) -> usize {
            shapes
                .iter()
                .map(|s| match s {
                    Shape::Group { shapes, .. } => 1 + count(shapes),
                    _ => 1,
                })
                .sum()
        }
        count(&self.shapes)
    }
}
