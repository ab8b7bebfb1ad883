//! Serializes a [`ChartSpec`] to an SVG document.
//!
//! Numbers are written with two decimals so equal specs always produce
//! byte-identical output.

use crate::rendering::primitives::{Color, Point, Shape, Stroke, TextAnchor};
use crate::rendering::spec::ChartSpec;

const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// SVG writer
#[derive(Debug, Clone, Copy, Default)]
pub struct SvgWriter;

impl SvgWriter {
    pub fn write(spec: &ChartSpec) -> String {
        let mut out = String::with_capacity(spec.shape_count() * 96 + 256);
        out.push_str(&format!(
            "<svg xmlns=\"{}\" version=\"1.1\" width=\"{}\" height=\"{}\" viewBox=\"0 0 {} {}\" font-family=\"{}\">\n",
            SVG_NS,
            num(spec.width),
            num(spec.height),
            num(spec.width),
            num(spec.height),
            escape(&spec.font_family),
        ));
        if !spec.title.is_empty() {
            out.push_str(&format!("<title>{}</title>\n", escape(&spec.title)));
        }
        for shape in &spec.shapes {
            write_shape(&mut out, shape, 0);
        }
        out.push_str("</svg>\n");
        out
    }
}

fn write_shape(out: &mut String, shape: &Shape, depth: usize) {
    let indent = "  ".repeat(depth);
    match shape {
        Shape::Group { id, shapes } => {
            out.push_str(&format!("{}<g id=\"{}\">\n", indent, escape(id)));
            for child in shapes {
                write_shape(out, child, depth + 1);
            }
            out.push_str(&format!("{}</g>\n", indent));
        }
        Shape::Circle {
            center,
            radius,
            fill,
            stroke,
        } => {
            let fill = match fill {
                Some(color) => paint("fill", *color, 1.0),
                None => "fill=\"none\"".to_string(),
            };
            out.push_str(&format!(
                "{}<circle cx=\"{}\" cy=\"{}\" r=\"{}\" {}{}/>\n",
                indent,
                num(center.x),
                num(center.y),
                num(*radius),
                fill,
                stroke_attrs(stroke.as_ref()),
            ));
        }
        Shape::Sector {
            center,
            radius,
            start,
            end,
            large_arc,
            fill,
            fill_opacity,
            stroke,
        } => {
            let d = format!(
                "M{} L{} A{} {} 0 {} 0 {} Z",
                pair(*center),
                pair(*start),
                num(*radius),
                num(*radius),
                u8::from(*large_arc),
                pair(*end),
            );
            out.push_str(&format!(
                "{}<path d=\"{}\" fill=\"{}\" fill-opacity=\"{}\"{}/>\n",
                indent,
                d,
                fill.to_hex(),
                num(fill_opacity * fill.opacity()),
                stroke_attrs(stroke.as_ref()),
            ));
        }
        Shape::Line { from, to, stroke } => {
            out.push_str(&format!(
                "{}<line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\"{}/>\n",
                indent,
                num(from.x),
                num(from.y),
                num(to.x),
                num(to.y),
                stroke_attrs(Some(stroke)),
            ));
        }
        Shape::Text {
            position,
            content,
            size,
            color,
            anchor,
        } => {
            let anchor = match anchor {
                TextAnchor::Start => "start",
                TextAnchor::Middle => "middle",
                TextAnchor::End => "end",
            };
            out.push_str(&format!(
                "{}<text x=\"{}\" y=\"{}\" {} font-size=\"{}\" text-anchor=\"{}\" dominant-baseline=\"central\">{}</text>\n",
                indent,
                num(position.x),
                num(position.y),
                paint("fill", *color, 1.0),
                num(*size),
                anchor,
                escape(content),
            ));
        }
        Shape::Glyph {
            origin,
            glyph,
            scale,
            color,
            stroke_width,
        } => {
            out.push_str(&format!(
                "{}<g fill=\"none\" {} stroke-width=\"{}\" stroke-linecap=\"round\" stroke-linejoin=\"round\" transform=\"translate({}, {}) scale({:.3})\"><path d=\"{}\"/></g>\n",
                indent,
                paint("stroke", *color, 1.0),
                num(*stroke_width),
                num(origin.x),
                num(origin.y),
                scale,
                glyph.path_data(),
            ));
        }
    }
}

fn stroke_attrs(stroke: Option<&Stroke>) -> String {
    let Some(stroke) = stroke else {
        return String::new();
    };
    let opacity = stroke.opacity.unwrap_or(1.0) * stroke.color.opacity();
    let mut attrs = format!(
        " stroke=\"{}\" stroke-width=\"{}\"",
        stroke.color.to_hex(),
        num(stroke.width)
    );
    if opacity < 1.0 {
        attrs.push_str(&format!(" stroke-opacity=\"{:.3}\"", opacity.max(0.0)));
    }
    if let Some(dash) = &stroke.dash_array {
        let dash: Vec<String> = dash.iter().map(|d| num(*d)).collect();
        attrs.push_str(&format!(" stroke-dasharray=\"{}\"", dash.join(" ")));
    }
    attrs
}

/// `fill="#rrggbb"` plus an opacity attribute when the color is translucent
fn paint(attr: &str, color: Color, opacity: f64) -> String {
    let opacity = opacity * color.opacity();
    if opacity < 1.0 {
        format!(
            "{attr}=\"{}\" {attr}-opacity=\"{:.3}\"",
            color.to_hex(),
            opacity
        )
    } else {
        format!("{attr}=\"{}\"", color.to_hex())
    }
}

fn pair(p: Point) -> String {
    format!("{} {}", num(p.x), num(p.y))
}

fn num(value: f64) -> String {
    // Avoid "-0.00"
    if value.abs() < 0.005 {
        "0.00".to_string()
    } else {
        format!("{:.2}", value)
    }
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
