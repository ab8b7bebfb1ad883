use astro_wheel::aspects::AspectKind;
use astro_wheel::catalog::{BodyId, Classification, Dignity, Sign};
use astro_wheel::config::WheelConfig;
use astro_wheel::ephemeris::{BodyPosition, ChartPositions};
use astro_wheel::error::{AngleName, ChartError};
use astro_wheel::rendering::primitives::{Color, Point, Shape, Stroke};
use astro_wheel::rendering::{ChartSpec, SvgWriter, Theme, ThemeKind};
use astro_wheel::wheel::{WheelKind, WheelRenderer, WheelRequest};

fn positions(label: &str, first_cusp: f64) -> ChartPositions {
    let bodies = vec![
        BodyPosition::new("Sun", 100.0, 1.0),
        BodyPosition::new("Moon", 220.0, 13.2),
        BodyPosition::new("Mercury", 110.0, -0.4),
        BodyPosition::new("Venus", 130.0, 1.2),
        BodyPosition::new("Mars", 10.0, 0.6),
        BodyPosition::new("Jupiter", 250.0, 0.1),
        BodyPosition::new("Saturn", 300.0, 0.05),
        BodyPosition::new("Uranus", 40.0, 0.02),
        BodyPosition::new("Neptune", 350.0, 0.01),
        BodyPosition::new("Pluto", 290.0, 0.01),
        BodyPosition::new("True Node", 80.0, -0.05),
    ];
    let cusps = (0..12)
        .map(|i| (first_cusp + 30.0 * i as f64) % 360.0)
        .collect();
    ChartPositions::from_cusps(label, bodies, cusps)
}

fn renderer() -> WheelRenderer<'static> {
    WheelRenderer::new(WheelConfig::default()).unwrap()
}

#[test]
fn test_chartspec_new() {
    let spec = ChartSpec::new(800.0, 600.0);

    assert_eq!(spec.width, 800.0);
    assert_eq!(spec.height, 600.0);
    assert_eq!(spec.center.x, 400.0);
    assert_eq!(spec.center.y, 300.0);
    assert!(spec.shapes.is_empty());
    assert_eq!(spec.shape_count(), 0);
}

#[test]
fn test_color_from_hex_rgba() {
    let color = Color::from_hex("#FF000080").unwrap();
    assert_eq!(color.r, 255);
    assert_eq!(color.g, 0);
    assert_eq!(color.b, 0);
    assert_eq!(color.a, 128);
    assert_eq!(color.to_hex(), "#ff0000");
}

#[test]
fn test_color_from_hex_invalid() {
    assert!(Color::from_hex("invalid").is_none());
    assert!(Color::from_hex("#FF").is_none());
    assert!(Color::from_hex("#FF00000").is_none());
    assert!(Color::from_hex("#GG0000").is_none());
}

#[test]
fn test_theme_classification_lookup() {
    let light = Theme::light();
    assert_eq!(light.color_for(Classification::Fire).to_hex(), "#ef476f");
    assert_eq!(light.color_for(Classification::Water).to_hex(), "#81bce7");
    assert_eq!(light.aspect_color(AspectKind::Trine), light.air);
    assert_eq!(light.aspect_color(AspectKind::Conjunction), light.others);

    let dark = ThemeKind::Dark.palette();
    assert_eq!(dark.background.to_hex(), "#343a40");
    assert_eq!(dark.fire, light.fire);

    let mono = Theme::mono();
    assert_eq!(mono.fire, mono.water);
}

#[test]
fn test_svg_writer_emits_shapes() {
    let mut spec = ChartSpec::new(100.0, 100.0);
    spec.title = "A & B".to_string();
    spec.shapes.push(Shape::Group {
        id: "g".to_string(),
        shapes: vec![
            Shape::Circle {
                center: Point { x: 50.0, y: 50.0 },
                radius: 10.0,
                fill: Some(Color::WHITE),
                stroke: None,
            },
            Shape::Line {
                from: Point { x: 0.0, y: 0.0 },
                to: Point { x: 100.0, y: 100.0 },
                stroke: Stroke::solid(Color::BLACK, 0.5).with_opacity(0.25).dashed(3.0),
            },
        ],
    });

    let svg = SvgWriter::write(&spec);
    assert!(svg.starts_with("<svg xmlns=\"http://www.w3.org/2000/svg\""));
    assert!(svg.contains("viewBox=\"0 0 100.00 100.00\""));
    assert!(svg.contains("<title>A &amp; B</title>"));
    assert!(svg.contains("<circle cx=\"50.00\" cy=\"50.00\" r=\"10.00\" fill=\"#ffffff\"/>"));
    assert!(svg.contains("stroke-opacity=\"0.250\""));
    assert!(svg.contains("stroke-dasharray=\"3.00\""));
    assert!(svg.trim_end().ends_with("</svg>"));
}

#[test]
fn test_natal_render_structure() {
    let output = renderer().render(&WheelRequest::natal(positions("natal", 15.0))).unwrap();
    let svg = &output.svg;

    assert!(svg.starts_with("<svg"));
    assert!(svg.contains("font-family=\"sans-serif\""));
    assert!(svg.contains("<g id=\"natal_natal_signs\">"));
    assert!(svg.contains("<g id=\"natal_natal_houses\">"));
    assert!(svg.contains("<g id=\"natal_natal_vertices\">"));
    assert!(svg.contains("<g id=\"natal_natal_outer_bodies\">"));
    assert!(svg.contains("<g id=\"natal_natal_aspects\">"));
    assert!(!svg.contains("_inner_bodies"));

    // Layers come back to front
    let signs = svg.find("_signs\"").unwrap();
    let symbols = svg.find("_signs_symbols\"").unwrap();
    let bodies = svg.find("_outer_bodies\"").unwrap();
    let aspects = svg.find("_aspects\"").unwrap();
    assert!(signs < symbols && symbols < bodies && bodies < aspects);

    // Twelve sign sectors plus twelve house sectors
    assert_eq!(svg.matches("fill-opacity=\"0.30\"").count(), 24);
    // Mercury is retrograde
    assert!(svg.contains(">R</text>"));
    assert!(!output.aspects.is_empty());
}

#[test]
fn test_render_is_idempotent() {
    let renderer = renderer();
    let request = WheelRequest::natal(positions("natal", 15.0));
    let first = renderer.render(&request).unwrap();
    let second = renderer.render(&request).unwrap();

    assert_eq!(first.svg, second.svg);
    assert_eq!(first, second);
}

#[test]
fn test_render_reports_placements() {
    let output = renderer().render(&WheelRequest::natal(positions("natal", 15.0))).unwrap();

    let sun = output
        .placements
        .iter()
        .find(|p| p.body == BodyId::Sun)
        .unwrap();
    assert_eq!(sun.sign, Sign::Cancer);
    assert_eq!(sun.degree, 10);
    assert_eq!(sun.house, 3);
    assert!(!sun.retrograde);

    let node = output
        .placements
        .iter()
        .find(|p| p.body == BodyId::NorthNode)
        .unwrap();
    assert!(node.retrograde);

    // Sun, Mercury and Venus aren't enough: Venus sits in Leo
    assert!(output.stelliums.is_empty());
}

#[test]
fn test_render_reports_dignities() {
    let output = renderer().render(&WheelRequest::natal(positions("natal", 15.0))).unwrap();
    let dignity = |body: BodyId| {
        output
            .placements
            .iter()
            .find(|p| p.body == body)
            .unwrap()
            .dignity
    };

    assert_eq!(dignity(BodyId::Mars), Some(Dignity::Domicile));
    assert_eq!(dignity(BodyId::Moon), Some(Dignity::Fall));
    assert_eq!(dignity(BodyId::Uranus), Some(Dignity::Fall));
    assert_eq!(dignity(BodyId::Sun), Some(Dignity::Peregrine));
    assert_eq!(dignity(BodyId::NorthNode), None);
    assert_eq!(dignity(BodyId::Ascendant), None);
}

#[test]
fn test_render_reports_house_rulers() {
    let request = WheelRequest::with_second(
        WheelKind::Synastry,
        positions("alice", 15.0),
        positions("bob", 75.0),
    );
    let output = renderer().render(&request).unwrap();

    assert_eq!(output.houses.len(), 2);
    let alice = &output.houses[0];
    assert_eq!(alice.chart, "alice");
    assert_eq!(alice.cusps.len(), 12);
    // 15° Aries rising
    assert_eq!(alice.cusps[0].ruler, BodyId::Mars);
    // 15° Gemini rising
    assert_eq!(output.houses[1].cusps[0].sign, Sign::Gemini);
    assert_eq!(output.houses[1].cusps[0].ruler, BodyId::Mercury);
}

#[test]
fn test_stellium_reported() {
    let mut chart = positions("natal", 15.0);
    chart.bodies.push(BodyPosition::new("Mars", 105.0, 0.6));
    chart.bodies.retain(|b| b.name != "Mars" || b.longitude == 105.0);
    let output = renderer().render(&WheelRequest::natal(chart)).unwrap();

    assert_eq!(output.stelliums.len(), 1);
    assert_eq!(output.stelliums[0].sign, Sign::Cancer);
    assert_eq!(
        output.stelliums[0].bodies,
        vec![BodyId::Sun, BodyId::Mercury, BodyId::Mars]
    );
}

#[test]
fn test_synastry_render_has_two_body_rings() {
    let request = WheelRequest::with_second(
        WheelKind::Synastry,
        positions("alice", 15.0),
        positions("bob", 75.0),
    );
    let output = renderer().render(&request).unwrap();

    assert!(output.svg.contains("_outer_bodies\""));
    assert!(output.svg.contains("_inner_bodies\""));
    assert_eq!(output.aspects.charts.len(), 2);
    assert!(output
        .aspects
        .pairs
        .iter()
        .all(|p| p.from.chart == "alice" && p.to.chart == "bob"));
    assert!(output.placements.iter().any(|p| p.chart == "bob"));
}

#[test]
fn test_composite_render_is_single_chart() {
    let request = WheelRequest::with_second(
        WheelKind::Composite,
        positions("alice", 15.0),
        positions("bob", 75.0),
    );
    let output = renderer().render(&request).unwrap();

    assert!(!output.svg.contains("_inner_bodies"));
    assert_eq!(output.aspects.charts, vec!["alice + bob composite".to_string()]);
}

#[test]
fn test_second_chart_required() {
    let request = WheelRequest {
        kind: WheelKind::Transit,
        primary: positions("natal", 15.0),
        secondary: None,
    };
    assert_eq!(
        renderer().render(&request),
        Err(ChartError::MissingSecondChart("transit".to_string()))
    );
}

#[test]
fn test_missing_angle_fails_atomically() {
    let mut chart = positions("natal", 15.0);
    chart.midheaven = None;
    assert_eq!(
        renderer().render(&WheelRequest::natal(chart)),
        Err(ChartError::MissingAngle(AngleName::Midheaven))
    );
}

#[test]
fn test_bad_cusp_count_fails_atomically() {
    let mut chart = positions("natal", 15.0);
    chart.cusps.pop();
    assert_eq!(
        renderer().render(&WheelRequest::natal(chart)),
        Err(ChartError::InvalidCuspCount { found: 11 })
    );
}

#[test]
fn test_unknown_body_is_skipped() {
    let mut chart = positions("natal", 15.0);
    chart.bodies.push(BodyPosition::new("Nibiru", 42.0, 1.0));
    let output = renderer().render(&WheelRequest::natal(chart)).unwrap();

    assert_eq!(output.placements.len(), 13);
}

#[test]
fn test_non_finite_values_on_skipped_bodies_are_ignored() {
    let mut chart = positions("natal", 15.0);
    chart.bodies.push(BodyPosition::new("Vulcan", 42.0, f64::NAN));
    // recognised but outside the default display set
    chart.bodies.push(BodyPosition::new("Chiron", f64::INFINITY, 0.0));
    let output = renderer().render(&WheelRequest::natal(chart)).unwrap();

    assert_eq!(output.placements.len(), 13);
}

#[test]
fn test_non_finite_value_on_displayed_body_is_rejected() {
    let mut chart = positions("natal", 15.0);
    chart.bodies[1].speed = f64::NAN;
    match renderer().render(&WheelRequest::natal(chart)) {
        Err(ChartError::NonFiniteValue { field, .. }) => assert_eq!(field, "Moon speed"),
        other => panic!("expected NonFiniteValue, got {other:?}"),
    }
}

#[test]
fn test_theme_changes_background() {
    let mut config = WheelConfig::default();
    config.theme = ThemeKind::Light;
    let output = WheelRenderer::new(config)
        .unwrap()
        .render(&WheelRequest::natal(positions("natal", 15.0)))
        .unwrap();
    assert!(output.svg.contains("fill=\"#fffdf1\""));
}
