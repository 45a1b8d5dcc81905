use super::{linear_definitions, Multiplier, UnitDefinition};
use crate::quantity::QuantityKind;
use crate::registry::{LinearRegistry, RegistryError};

const MIN: f64 = 60.0;
const HOUR: f64 = 3600.0;
const FORTNIGHT: f64 = 14.0 * 86_400.0;

const INCH: f64 = 0.0254;
const FOOT: f64 = 0.3048;
const YARD: f64 = 0.9144;
const FURLONG: f64 = 201.168;
const MILE: f64 = 1609.344;
const NAUTICAL_MILE: f64 = 1852.0;
/// 영국 해리 (Admiralty mile, 6080 ft)
const ADMIRALTY_MILE: f64 = 6080.0 * FOOT;

/// 진공 중 광속 [m/s]
pub const SPEED_OF_LIGHT: f64 = 299_792_458.0;
/// ISA 해면 음속 [m/s]
const SOUND_ISA_SEA_LEVEL: f64 = 340.294;

/// 속도 단위표. 내부 기준은 m/s 이다.
const SPEED_UNITS: &[(&str, &[(&str, f64)])] = &[
    (
        "Metric",
        &[
            ("Nanometres per second (nm/s)", 1e-9),
            ("Micrometres per second (µm/s)", 1e-6),
            ("Millimetres per second (mm/s)", 1e-3),
            ("Centimetres per second (cm/s)", 1e-2),
            ("Metres per second (m/s)", 1.0),
            ("Kilometres per second (km/s)", 1e3),
            ("Nanometres per minute (nm/min)", 1e-9 / MIN),
            ("Micrometres per minute (µm/min)", 1e-6 / MIN),
            ("Millimetres per minute (mm/min)", 1e-3 / MIN),
            ("Centimetres per minute (cm/min)", 1e-2 / MIN),
            ("Metres per minute (m/min)", 1.0 / MIN),
            ("Kilometres per minute (km/min)", 1e3 / MIN),
            ("Nanometres per hour (nm/h)", 1e-9 / HOUR),
            ("Micrometres per hour (µm/h)", 1e-6 / HOUR),
            ("Millimetres per hour (mm/h)", 1e-3 / HOUR),
            ("Centimetres per hour (cm/h)", 1e-2 / HOUR),
            ("Metres per hour (m/h)", 1.0 / HOUR),
            ("Kilometres per hour (km/h)", 1e3 / HOUR),
        ],
    ),
    (
        "Imperial",
        &[
            ("Furlongs per fortnight (fur/ftn)", FURLONG / FORTNIGHT),
            ("Inches per hour (in/h)", INCH / HOUR),
            ("Feet per hour (ft/h)", FOOT / HOUR),
            ("Yards per hour (yd/h)", YARD / HOUR),
            ("Inches per minute (in/min)", INCH / MIN),
            ("Feet per minute (ft/min)", FOOT / MIN),
            ("Yards per minute (yd/min)", YARD / MIN),
            ("Inches per second (in/s)", INCH),
            ("Feet per second (ft/s)", FOOT),
            ("Yards per second (yd/s)", YARD),
            ("Miles per hour (mph)", MILE / HOUR),
            ("Miles per minute (mi/min)", MILE / MIN),
            ("Miles per second (mi/s)", MILE),
            ("Knots (kn)", NAUTICAL_MILE / HOUR),
            ("Knots UK", ADMIRALTY_MILE / HOUR),
        ],
    ),
    (
        "Scientific",
        &[
            ("Mach 1", SOUND_ISA_SEA_LEVEL),
            ("Sound in water", 1500.0),
            ("Lunar escape velocity", 2375.0),
            ("Earth escape velocity", 11_200.0),
            ("Earth's solar orbit", 29_800.0),
            ("Solar system's Milky Way orbit", 200_000.0),
            ("Milky Way relative to the cosmic microwave background", 552_000.0),
            ("Solar escape velocity", 617_700.0),
            ("Neutron star escape velocity (0.3c)", 0.3 * SPEED_OF_LIGHT),
            ("Light in a diamond (0.4136c)", 0.4136 * SPEED_OF_LIGHT),
            ("Signal in an optical fibre (0.667c)", 0.667 * SPEED_OF_LIGHT),
            ("Light (c)", SPEED_OF_LIGHT),
        ],
    ),
    (
        "Comparisons",
        &[
            ("Usain Bolt's top speed", 12.42),
            ("Jet airliner cruising speed", 250.0),
            ("Concorde", 603.0),
            ("SR-71 Blackbird", 981.0),
            ("Space Shuttle", 1400.0),
            ("International Space Station", 7700.0),
        ],
    ),
];

/// 기본 속도 단위 정의 목록.
pub fn definitions() -> Vec<UnitDefinition<Multiplier>> {
    linear_definitions(SPEED_UNITS)
}

/// 기본 속도 레지스트리를 만든다.
pub fn registry() -> Result<LinearRegistry, RegistryError> {
    LinearRegistry::new(QuantityKind::Speed, definitions())
}
