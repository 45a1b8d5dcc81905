use super::{AffineFn, AffinePair, UnitDefinition, UnitMeta};
use crate::quantity::QuantityKind;
use crate::registry::{AffineRegistry, RegistryError};

/// 0 °C 의 켈빈 값
const ZERO_C_IN_K: f64 = 273.15;

/// 온도 눈금 하나: (id, 이름, 기호, 분류, 섭씨로, 섭씨에서).
type ScaleRow = (&'static str, &'static str, &'static str, &'static str, AffineFn, AffineFn);

/// 온도 눈금표. 내부 기준은 섭씨이다.
const TEMPERATURE_SCALES: [ScaleRow; 8] = [
    (
        "celsius",
        "Celsius",
        "°C",
        "Common",
        AffineFn::IDENTITY,
        AffineFn::IDENTITY,
    ),
    (
        "fahrenheit",
        "Fahrenheit",
        "°F",
        "Common",
        // (F - 32) × 5/9
        AffineFn::new(5.0 / 9.0, -160.0 / 9.0),
        AffineFn::new(9.0 / 5.0, 32.0),
    ),
    (
        "kelvin",
        "Kelvin",
        "K",
        "Common",
        AffineFn::new(1.0, -ZERO_C_IN_K),
        AffineFn::new(1.0, ZERO_C_IN_K),
    ),
    (
        "rankine",
        "Rankine",
        "°R",
        "Common",
        // (R - 491.67) × 5/9
        AffineFn::new(5.0 / 9.0, -ZERO_C_IN_K),
        AffineFn::new(9.0 / 5.0, ZERO_C_IN_K * 9.0 / 5.0),
    ),
    (
        "delisle",
        "Delisle",
        "°De",
        "Historical",
        // 100 - De × 2/3
        AffineFn::new(-2.0 / 3.0, 100.0),
        AffineFn::new(-3.0 / 2.0, 150.0),
    ),
    (
        "newton",
        "Newton",
        "°N",
        "Historical",
        AffineFn::new(100.0 / 33.0, 0.0),
        AffineFn::new(33.0 / 100.0, 0.0),
    ),
    (
        "reaumur",
        "Réaumur",
        "°Ré",
        "Historical",
        AffineFn::new(5.0 / 4.0, 0.0),
        AffineFn::new(4.0 / 5.0, 0.0),
    ),
    (
        "romer",
        "Rømer",
        "°Rø",
        "Historical",
        // (Rø - 7.5) × 40/21
        AffineFn::new(40.0 / 21.0, -7.5 * 40.0 / 21.0),
        AffineFn::new(21.0 / 40.0, 7.5),
    ),
];

/// 기본 온도 눈금 정의 목록.
pub fn definitions() -> Vec<UnitDefinition<AffinePair>> {
    TEMPERATURE_SCALES
        .iter()
        .map(|(id, name, symbol, group, to_c, from_c)| {
            UnitDefinition::new(
                UnitMeta::new(id, name, Some(*symbol), Some(*group)),
                AffinePair::new(*to_c, *from_c),
            )
        })
        .collect()
}

/// 기본 온도 레지스트리를 만든다.
pub fn registry() -> Result<AffineRegistry, RegistryError> {
    AffineRegistry::new(QuantityKind::Temperature, definitions())
}
