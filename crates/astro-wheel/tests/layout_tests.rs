use astro_wheel::aspects::AspectCalculator;
use astro_wheel::catalog::{BodyId, Sign};
use astro_wheel::chart::ChartData;
use astro_wheel::config::{default_display, ChartLayoutConfig};
use astro_wheel::ephemeris::{BodyPosition, ChartPositions};
use astro_wheel::error::ChartError;
use astro_wheel::layout::rings::RingItem;
use astro_wheel::layout::{
    adjust_positions, place_symbols, wheel_angle, ChartGeometry, RingType, WheelAssembler,
};

fn circular_gaps(positions: &[f64]) -> Vec<f64> {
    let n = positions.len();
    (0..n)
        .map(|i| {
            let next = positions[(i + 1) % n];
            (next - positions[i]).rem_euclid(360.0)
        })
        .collect()
}

fn chart(label: &str, first_cusp: f64) -> ChartData {
    let bodies = vec![
        BodyPosition::new("sun", 100.0, 1.0),
        BodyPosition::new("moon", 101.0, 13.0),
        BodyPosition::new("mercury", 102.0, -0.5),
        BodyPosition::new("mars", 220.0, 0.6),
    ];
    let cusps = (0..12)
        .map(|i| (first_cusp + 30.0 * i as f64) % 360.0)
        .collect();
    let positions = ChartPositions::from_cusps(label, bodies, cusps);
    ChartData::from_positions(&positions, &default_display()).unwrap()
}

#[test]
fn test_geometry_for_default_canvas() {
    let g = ChartGeometry::new(600.0, None, &ChartLayoutConfig::default()).unwrap();

    assert_eq!(g.height, 600.0);
    assert_eq!(g.center.x, 300.0);
    assert_eq!(g.center.y, 300.0);
    assert!((g.margin - 24.0).abs() < 1e-9);
    assert!((g.max_radius - 288.0).abs() < 1e-9);
    assert!((g.ring_thickness - 43.2).abs() < 1e-9);
    assert!((g.font_size - 23.76).abs() < 1e-9);
    assert!(g.house_ring_radius() < g.sign_ring_radius());
    assert!(g.inner_body_radius() < g.outer_body_radius());
    assert!(g.vertex_radius() > g.max_radius);
}

#[test]
fn test_geometry_uses_smaller_side() {
    let g = ChartGeometry::new(800.0, Some(400.0), &ChartLayoutConfig::default()).unwrap();
    assert_eq!(g.center.x, 400.0);
    assert_eq!(g.center.y, 200.0);
    assert!((g.max_radius - 192.0).abs() < 1e-9);
}

#[test]
fn test_geometry_rejects_empty_canvas() {
    let result = ChartGeometry::new(0.0, None, &ChartLayoutConfig::default());
    assert!(matches!(result, Err(ChartError::InvalidCanvas { .. })));
}

#[test]
fn test_polar_puts_zero_on_the_left() {
    let g = ChartGeometry::new(600.0, None, &ChartLayoutConfig::default()).unwrap();
    let left = g.polar(0.0, 100.0);
    assert!((left.x - 200.0).abs() < 1e-9);
    assert!((left.y - 300.0).abs() < 1e-9);

    // Counter-clockwise: a quarter turn lands at the bottom
    let bottom = g.polar(90.0, 100.0);
    assert!((bottom.x - 300.0).abs() < 1e-9);
    assert!((bottom.y - 400.0).abs() < 1e-9);
}

#[test]
fn test_adjust_positions_spreads_cluster() {
    let input = [100.0, 101.0, 102.0];
    let out = adjust_positions(&input, 8.0);

    assert_eq!(out.len(), 3);
    for gap in circular_gaps(&out) {
        assert!(gap >= 8.0 - 1e-6, "gap {gap}");
    }
    assert!((circular_gaps(&out).iter().sum::<f64>() - 360.0).abs() < 1e-6);
    // Order kept and the cluster stays centred on the middle body
    assert!(out[0] < out[1] && out[1] < out[2]);
    assert!((out[1] - 101.0).abs() < 1e-6);
}

#[test]
fn test_adjust_positions_single_is_unchanged() {
    assert_eq!(adjust_positions(&[123.4], 8.0), vec![123.4]);
    assert!(adjust_positions(&[], 8.0).is_empty());
}

#[test]
fn test_adjust_positions_leaves_spaced_positions_alone() {
    let input = [10.0, 100.0, 200.0, 300.0];
    let out = adjust_positions(&input, 8.0);
    for (a, b) in input.iter().zip(&out) {
        assert!((a - b).abs() < 1e-9);
    }
}

#[test]
fn test_adjust_positions_across_seam() {
    let input = [1.0, 2.0, 358.0, 359.0];
    let mut sorted = input.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap());
    let out = adjust_positions(&sorted, 8.0);

    for gap in circular_gaps(&out) {
        assert!(gap >= 8.0 - 1e-6, "gap {gap}");
    }
}

#[test]
fn test_adjust_positions_crowded_ring() {
    let input: Vec<f64> = (0..13).map(|i| 100.0 + 1.5 * i as f64).collect();
    let out = adjust_positions(&input, 8.0);

    let gaps = circular_gaps(&out);
    assert!(gaps.iter().all(|&g| g >= 8.0 - 1e-6));
    assert!((gaps.iter().sum::<f64>() - 360.0).abs() < 1e-6);
}

#[test]
fn test_adjust_positions_keeps_gap_for_wide_separations() {
    // fixed-seed LCG so the sweep is reproducible
    let mut state: u64 = 0x2545_f491_4f6c_dd1d;
    let mut next = move || {
        state = state
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);
        (state >> 11) as f64 / (1u64 << 53) as f64
    };

    for case in 0..2000 {
        let n = 2 + (next() * 19.0) as usize;
        let mut input: Vec<f64> = (0..n).map(|_| next() * 360.0).collect();
        input.sort_by(|a, b| a.partial_cmp(b).unwrap());
        let min_sep = 1.0 + next() * (360.0 / n as f64 - 1.2);

        let out = adjust_positions(&input, min_sep);
        let gaps = circular_gaps(&out);
        for gap in &gaps {
            assert!(*gap >= min_sep - 1e-6, "case {case}: n={n} min_sep={min_sep} gap {gap}");
        }
        // one full turn means the circular order survived
        assert!(
            (gaps.iter().sum::<f64>() - 360.0).abs() < 1e-6,
            "case {case}: n={n} min_sep={min_sep} reordered"
        );
    }
}

#[test]
fn test_adjust_positions_nineteen_bodies_at_wide_separation() {
    let input: Vec<f64> = (0..19).map(|i| 40.0 + 2.0 * i as f64).collect();
    let out = adjust_positions(&input, 14.43);

    let gaps = circular_gaps(&out);
    assert!(gaps.iter().all(|&g| g >= 14.43 - 1e-6), "{gaps:?}");
    assert!((gaps.iter().sum::<f64>() - 360.0).abs() < 1e-6);
}

#[test]
fn test_place_symbols_sorts_by_angle() {
    let placements = place_symbols(
        &[(BodyId::Mars, 50.0), (BodyId::Sun, 10.0), (BodyId::Moon, 12.0)],
        8.0,
    );
    let order: Vec<BodyId> = placements.iter().map(|p| p.body).collect();
    assert_eq!(order, vec![BodyId::Sun, BodyId::Moon, BodyId::Mars]);
    assert_eq!(placements[0].original, 10.0);
    assert!(placements[1].adjusted - placements[0].adjusted >= 8.0 - 1e-6);
}

#[test]
fn test_wheel_angle_rotates_by_ascendant() {
    assert_eq!(wheel_angle(15.0, 15.0), 0.0);
    assert_eq!(wheel_angle(0.0, 15.0), 345.0);
}

#[test]
fn test_natal_wheel_has_one_body_ring() {
    let natal = chart("natal", 15.0);
    let aspects = AspectCalculator::standard().intra_chart(&natal);
    let layout = ChartLayoutConfig::default();
    let geometry = ChartGeometry::new(600.0, None, &layout).unwrap();
    let wheel = WheelAssembler::build_wheel("Natal", &natal, None, &aspects, geometry, &layout);

    assert_eq!(wheel.id, "natal");
    assert_eq!(wheel.rotation, 15.0);
    assert_eq!(wheel.ring(RingType::Signs).count(), 1);
    assert_eq!(wheel.ring(RingType::Houses).count(), 1);
    assert_eq!(wheel.ring(RingType::Vertices).count(), 1);
    assert_eq!(wheel.ring(RingType::Bodies).count(), 1);
    assert_eq!(wheel.ring(RingType::Aspects).count(), 1);

    let signs = wheel.ring(RingType::Signs).next().unwrap();
    assert_eq!(signs.items.len(), 12);
    match &signs.items[0] {
        RingItem::Sign(aries) => {
            assert_eq!(aries.sign, Sign::Aries);
            assert_eq!(aries.start_angle, 345.0);
        }
        other => panic!("unexpected item {:?}", other),
    }

    let vertices = wheel.ring(RingType::Vertices).next().unwrap();
    let emphasized = vertices
        .items
        .iter()
        .filter(|item| matches!(item, RingItem::Vertex(v) if v.emphasized))
        .count();
    assert_eq!(emphasized, 4);
}

#[test]
fn test_body_ring_spreads_symbols() {
    let natal = chart("natal", 15.0);
    let aspects = AspectCalculator::standard().intra_chart(&natal);
    let layout = ChartLayoutConfig::default();
    let geometry = ChartGeometry::new(600.0, None, &layout).unwrap();
    let wheel = WheelAssembler::build_wheel("Natal", &natal, None, &aspects, geometry, &layout);

    let ring = wheel.ring(RingType::Bodies).next().unwrap();
    assert_eq!(ring.min_separation, Some(layout.outer_min_degree));
    let adjusted: Vec<f64> = ring
        .items
        .iter()
        .filter_map(|item| match item {
            RingItem::Body(body) => Some(body.adjusted_angle),
            _ => None,
        })
        .collect();
    // Four bodies plus the ascendant and midheaven
    assert_eq!(adjusted.len(), 6);
    for gap in circular_gaps(&adjusted) {
        assert!(gap >= layout.outer_min_degree - 1e-6, "gap {gap}");
    }
}

#[test]
fn test_two_chart_wheel_puts_primary_inside() {
    let inner = chart("alice", 15.0);
    let outer = chart("bob", 75.0);
    let aspects = AspectCalculator::standard().inter_chart(&inner, &outer);
    let layout = ChartLayoutConfig::default();
    let geometry = ChartGeometry::new(600.0, None, &layout).unwrap();
    let wheel =
        WheelAssembler::build_wheel("Synastry", &inner, Some(&outer), &aspects, geometry, &layout);

    let bodies: Vec<_> = wheel.ring(RingType::Bodies).collect();
    assert_eq!(bodies.len(), 2);
    assert!(bodies[0].label.starts_with("bob"));
    assert!(bodies[1].label.starts_with("alice"));
    assert!(bodies[1].radius_inner < bodies[0].radius_inner);
    assert_eq!(bodies[1].min_separation, Some(layout.inner_min_degree));

    // Oriented by the primary ascendant
    assert_eq!(wheel.rotation, 15.0);
    let aspect_ring = wheel.ring(RingType::Aspects).next().unwrap();
    assert_eq!(aspect_ring.radius_outer, geometry.inner_body_radius());
}
