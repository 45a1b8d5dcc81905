use super::{linear_definitions, Multiplier, UnitDefinition};
use crate::quantity::QuantityKind;
use crate::registry::{LinearRegistry, RegistryError};

const MINUTE: f64 = 60.0;
const HOUR: f64 = 3600.0;
const DAY: f64 = 86_400.0;
/// 율리우스년 (365.25일)
const YEAR: f64 = 365.25 * DAY;

/// 시간 단위표. 내부 기준은 초이다. 월/년은 율리우스년 기준 평균값이다.
const TIME_UNITS: &[(&str, &[(&str, f64)])] = &[(
    "Time",
    &[
        ("Picoseconds (ps)", 1e-12),
        ("Nanoseconds (ns)", 1e-9),
        ("Microseconds (µs)", 1e-6),
        ("Milliseconds (ms)", 1e-3),
        ("Seconds (s)", 1.0),
        ("Minutes (min)", MINUTE),
        ("Hours (h)", HOUR),
        ("Days (d)", DAY),
        ("Weeks (wk)", 7.0 * DAY),
        ("Months (mo)", YEAR / 12.0),
        ("Years (yr)", YEAR),
        ("Decades", 10.0 * YEAR),
        ("Centuries", 100.0 * YEAR),
        ("Millennia", 1000.0 * YEAR),
    ],
)];

/// 기본 시간 단위 정의 목록.
pub fn definitions() -> Vec<UnitDefinition<Multiplier>> {
    linear_definitions(TIME_UNITS)
}

/// 기본 시간 레지스트리를 만든다.
pub fn registry() -> Result<LinearRegistry, RegistryError> {
    LinearRegistry::new(QuantityKind::Time, definitions())
}
