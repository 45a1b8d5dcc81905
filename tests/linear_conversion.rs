//! 배율 기반 변환(길이·시간·속도) 회귀 테스트.
use unit_conversion_toolbox::conversion::{convert_linear, ConversionError};
use unit_conversion_toolbox::registry::LinearRegistry;
use unit_conversion_toolbox::units::{length, speed, time};

fn assert_close(label: &str, actual: f64, expected: f64, rel_tol: f64) {
    let denom = expected.abs().max(1.0);
    let diff = (actual - expected).abs();
    assert!(
        diff <= rel_tol * denom,
        "{label} expected {expected:e} got {actual:e} (diff {diff:e}, tol {rel_tol})"
    );
}

fn registries() -> Vec<LinearRegistry> {
    vec![
        length::registry().expect("length registry"),
        time::registry().expect("time registry"),
        speed::registry().expect("speed registry"),
    ]
}

fn ids(reg: &LinearRegistry) -> Vec<String> {
    reg.iter().map(|u| u.id().to_string()).collect()
}

#[test]
fn centimetres_to_metres() {
    let reg = length::registry().expect("length registry");
    let m = convert_linear(100.0, "Centimetres", "Metres", &reg).expect("convert");
    assert_close("cm->m", m, 1.0, 1e-12);
}

#[test]
fn kilometres_per_hour_to_metres_per_second() {
    let reg = speed::registry().expect("speed registry");
    let v = convert_linear(100.0, "Kilometres per hour", "Metres per second", &reg)
        .expect("convert");
    assert!((v - 27.7778).abs() < 1e-4, "km/h->m/s = {v}");
}

#[test]
fn hours_to_minutes() {
    let reg = time::registry().expect("time registry");
    let min = convert_linear(1.0, "Hours", "Minutes", &reg).expect("convert");
    assert_close("h->min", min, 60.0, 1e-12);
}

#[test]
fn corrected_constants() {
    let len = length::registry().expect("length registry");
    assert_close(
        "nmi->m",
        convert_linear(1.0, "Nautical miles", "Metres", &len).expect("nmi"),
        1852.0,
        1e-12,
    );
    assert_close(
        "ftm->ft",
        convert_linear(1.0, "Fathoms", "Feet", &len).expect("ftm"),
        6.0,
        1e-12,
    );
    assert_close(
        "bus->m",
        convert_linear(1.0, "Bus", "Metres", &len).expect("bus"),
        8.4,
        1e-12,
    );

    let spd = speed::registry().expect("speed registry");
    assert_close(
        "yd/h->m/s",
        convert_linear(3600.0, "Yards per hour", "Metres per second", &spd).expect("yd/h"),
        0.9144,
        1e-12,
    );
    assert_close(
        "0.3c",
        convert_linear(1.0, "Neutron star escape velocity", "Light", &spd).expect("0.3c"),
        0.3,
        1e-12,
    );
    assert_close(
        "mph->km/h",
        convert_linear(60.0, "Miles per hour", "Kilometres per hour", &spd).expect("mph"),
        96.56064,
        1e-12,
    );
}

#[test]
fn unknown_unit_is_reported_not_computed() {
    let reg = length::registry().expect("length registry");
    assert_eq!(
        convert_linear(5.0, "furlongs-per-fortnight-typo", "Metres", &reg),
        Err(ConversionError::UnknownUnit(
            "furlongs-per-fortnight-typo".to_string()
        ))
    );
    assert_eq!(
        convert_linear(5.0, "Metres", "Parsec", &reg),
        Err(ConversionError::UnknownUnit("Parsec".to_string()))
    );
    // 같은 단위라도 없는 id면 실패한다.
    assert!(convert_linear(5.0, "nope", "nope", &reg).is_err());
}

#[test]
fn identity_conversion_is_exact() {
    for reg in registries() {
        for id in ids(&reg) {
            for v in [0.1, -3.7, 1e-300, 123_456.789] {
                let out = convert_linear(v, &id, &id, &reg).expect("identity");
                assert_eq!(out, v, "{id}");
            }
        }
    }
}

#[test]
fn zero_is_a_fixed_point() {
    for reg in registries() {
        let ids = ids(&reg);
        for a in &ids {
            for b in &ids {
                let out = convert_linear(0.0, a, b, &reg).expect("zero");
                assert_eq!(out, 0.0, "{a} -> {b}");
            }
        }
    }
}

#[test]
fn round_trip_returns_original_value() {
    for reg in registries() {
        let ids = ids(&reg);
        for a in &ids {
            for b in &ids {
                let there = convert_linear(42.5, a, b, &reg).expect("there");
                let back = convert_linear(there, b, a, &reg).expect("back");
                assert_close(&format!("{a} <-> {b}"), back, 42.5, 1e-12);
            }
        }
    }
}

#[test]
fn conversion_is_transitive_through_the_base() {
    for reg in registries() {
        let ids = ids(&reg);
        let pivots: Vec<_> = ids.iter().step_by(4).collect();
        for a in &ids {
            for b in &pivots {
                for c in &ids {
                    let direct = convert_linear(-7.25, a, c, &reg).expect("direct");
                    let via = convert_linear(
                        convert_linear(-7.25, a, b, &reg).expect("a->b"),
                        b,
                        c,
                        &reg,
                    )
                    .expect("b->c");
                    let rel = (via - direct).abs() / direct.abs().max(f64::MIN_POSITIVE);
                    assert!(rel <= 1e-12, "{a} -> {b} -> {c}: {via} vs {direct}");
                }
            }
        }
    }
}

#[test]
fn huge_values_can_overflow_through_the_base() {
    let reg = length::registry().expect("length registry");
    let pc = convert_linear(1e300, "Light-years", "Parsecs", &reg).expect("convert");
    assert!(pc.is_infinite() && pc > 0.0, "{pc}");
    // 기준 단위에서 범위 안이면 그대로 계산된다
    let pc = convert_linear(1e290, "Light-years", "Parsecs", &reg).expect("convert");
    assert_close("1e290 ly->pc", pc, 1e290 * 9_460_730_472_580_800.0 / 3.085_677_581_491_367e16, 1e-12);
}
