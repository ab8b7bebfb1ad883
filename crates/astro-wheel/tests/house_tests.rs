use astro_wheel::catalog::{BodyId, Sign};
use astro_wheel::error::ChartError;
use astro_wheel::houses::{assign_house, house_size, HouseSet};

fn shifted_cusps(first: f64) -> Vec<f64> {
    (0..12).map(|i| (first + 30.0 * i as f64) % 360.0).collect()
}

#[test]
fn test_wraparound_first_house() {
    let houses = HouseSet::new(&shifted_cusps(350.0)).unwrap();

    assert_eq!(houses.house_of(5.0), 1);
    assert_eq!(houses.house_of(350.0), 1);
    assert_eq!(houses.house_of(19.999), 1);
    assert_eq!(houses.house_of(20.0), 2);
    // Just before the first cusp belongs to the previous house
    assert_eq!(houses.house_of(340.0), 12);
}

#[test]
fn test_every_longitude_gets_a_house() {
    let houses = HouseSet::new(&shifted_cusps(123.4)).unwrap();
    let mut lon = 0.0;
    while lon < 360.0 {
        let house = houses.house_of(lon);
        assert!((1..=12).contains(&house), "{lon} -> {house}");
        lon += 0.5;
    }
}

#[test]
fn test_unequal_house_sizes() {
    let cusps = [
        10.0, 38.0, 70.0, 100.0, 128.0, 160.0, 190.0, 218.0, 250.0, 280.0, 308.0, 340.0,
    ];
    let houses = HouseSet::new(&cusps).unwrap();
    let sizes = houses.sizes();

    assert_eq!(sizes[0], 28.0);
    assert_eq!(sizes[2], 30.0);
    assert_eq!(sizes[11], 30.0);
    assert!((sizes.iter().sum::<f64>() - 360.0).abs() < 1e-9);

    let cusp_list = houses.cusps();
    assert_eq!(cusp_list.len(), 12);
    assert_eq!(cusp_list[0].number, 1);
    assert_eq!(cusp_list[11].number, 12);
    assert_eq!(cusp_list[11].size, 30.0);
}

#[test]
fn test_house_size_across_seam() {
    assert_eq!(house_size(350.0, 20.0), 30.0);
    assert_eq!(house_size(20.0, 50.0), 30.0);
}

#[test]
fn test_cusps_are_normalized() {
    let mut cusps = shifted_cusps(0.0);
    cusps[0] = 360.0;
    cusps[1] = -330.0;
    let houses = HouseSet::new(&cusps).unwrap();

    assert_eq!(houses.cusp(1), Some(0.0));
    assert_eq!(houses.cusp(2), Some(30.0));
    assert_eq!(houses.cusp(13), None);
}

#[test]
fn test_wrong_cusp_count_is_rejected() {
    let result = HouseSet::new(&[0.0, 30.0, 60.0]);
    assert_eq!(result, Err(ChartError::InvalidCuspCount { found: 3 }));
}

#[test]
fn test_non_finite_cusp_is_rejected() {
    let mut cusps = shifted_cusps(0.0);
    cusps[4] = f64::NAN;
    match HouseSet::new(&cusps) {
        Err(ChartError::NonFiniteValue { field, .. }) => assert_eq!(field, "cusp 5"),
        other => panic!("unexpected {:?}", other),
    }
}

#[test]
fn test_assign_house_on_raw_cusps() {
    let cusps: [f64; 12] = std::array::from_fn(|i| 30.0 * i as f64);
    assert_eq!(assign_house(0.0, &cusps), 1);
    assert_eq!(assign_house(359.0, &cusps), 12);
    assert_eq!(assign_house(-1.0, &cusps), 12);
}

#[test]
fn test_house_rulers_use_classic_rulers() {
    // first cusp at 15° Scorpio
    let houses = HouseSet::new(&shifted_cusps(225.0)).unwrap();

    assert_eq!(houses.ruler(1), Some(BodyId::Mars)); // not the modern Pluto
    assert_eq!(Sign::Scorpio.ruler(), BodyId::Pluto);
    assert_eq!(houses.ruler(4), Some(BodyId::Saturn)); // Aquarius
    assert_eq!(houses.ruler(5), Some(BodyId::Jupiter)); // Pisces
    assert_eq!(houses.ruler(13), None);

    let cusps = houses.cusps();
    assert_eq!(cusps[0].sign, Sign::Scorpio);
    assert_eq!(cusps[9].sign, Sign::Leo);
    assert_eq!(cusps[9].ruler, BodyId::Sun);
    for cusp in &cusps {
        assert_eq!(houses.ruler(cusp.number), Some(cusp.ruler));
    }
}
