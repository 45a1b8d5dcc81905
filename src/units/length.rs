use super::{linear_definitions, Multiplier, UnitDefinition};
use crate::quantity::QuantityKind;
use crate::registry::{LinearRegistry, RegistryError};

/// 길이 단위표. 내부 기준은 미터이며 값은 단위 1개의 미터 환산값이다.
const LENGTH_UNITS: &[(&str, &[(&str, f64)])] = &[
    (
        "Metric",
        &[
            ("Nanometres (nm)", 1e-9),
            ("Micrometres (µm)", 1e-6),
            ("Millimetres (mm)", 1e-3),
            ("Centimetres (cm)", 1e-2),
            ("Metres (m)", 1.0),
            ("Kilometres (km)", 1e3),
        ],
    ),
    (
        "Imperial",
        &[
            ("Thou (th)", 2.54e-5),
            ("Inches (in)", 0.0254),
            ("Feet (ft)", 0.3048),
            ("Yards (yd)", 0.9144),
            ("Chains (ch)", 20.1168),
            ("Furlongs (fur)", 201.168),
            ("Miles (mi)", 1609.344),
            ("Leagues (lea)", 4828.032),
        ],
    ),
    (
        "Maritime",
        &[
            // 6 ft
            ("Fathoms (ftm)", 1.8288),
            // 국제 해리의 1/10
            ("Cables (cb)", 185.2),
            ("Nautical miles (nmi)", 1852.0),
        ],
    ),
    (
        "Astronomical",
        &[
            ("Astronomical units (au)", 149_597_870_700.0),
            ("Light-years (ly)", 9_460_730_472_580_800.0),
            ("Parsecs (pc)", 3.085_677_581_491_367e16),
        ],
    ),
    (
        "Comparisons",
        &[
            ("Bus (8.4m)", 8.4),
            ("Football pitch (100.6m)", 100.6),
            // 평균 거리
            ("Earth to Moon", 384_400_000.0),
        ],
    ),
];

/// 기본 길이 단위 정의 목록.
pub fn definitions() -> Vec<UnitDefinition<Multiplier>> {
    linear_definitions(LENGTH_UNITS)
}

/// 기본 길이 레지스트리를 만든다.
pub fn registry() -> Result<LinearRegistry, RegistryError> {
    LinearRegistry::new(QuantityKind::Length, definitions())
}
