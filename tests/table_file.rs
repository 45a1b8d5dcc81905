//! TOML 단위표 파일과 카탈로그 덮어쓰기.
use unit_conversion_toolbox::catalog::{Catalog, CatalogError};
use unit_conversion_toolbox::quantity::QuantityKind;
use unit_conversion_toolbox::registry::RegistryError;
use unit_conversion_toolbox::table_file::{TableFileError, UnitTableFile};

const NAUTICAL: &str = r#"
[[length]]
id = "Metres"
symbol = "m"
group = "SI"
multiplier = 1.0

[[length]]
id = "Nautical miles"
symbol = "nmi"
group = "Nautical"
multiplier = 1852.0

[[length]]
id = "Cables"
symbol = "cb"
group = "Nautical"
multiplier = 185.2
"#;

const KELVIN_ONLY: &str = r#"
[[temperature]]
id = "kelvin"
name = "Kelvin"
symbol = "K"
to_base = { scale = 1.0 }
from_base = { scale = 1.0 }

[[temperature]]
id = "celsius"
name = "Celsius"
symbol = "°C"
to_base = { scale = 1.0, offset = 273.15 }
from_base = { scale = 1.0, offset = -273.15 }
"#;

#[test]
fn parses_linear_entries_in_order() {
    let table = UnitTableFile::parse(NAUTICAL).expect("parse");
    let ids: Vec<_> = table
        .entries(QuantityKind::Length)
        .iter()
        .map(|e| e.id.as_str())
        .collect();
    assert_eq!(ids, ["Metres", "Nautical miles", "Cables"]);
    assert!(table.entries(QuantityKind::Time).is_empty());
}

#[test]
fn table_overrides_only_listed_quantities() {
    let table = UnitTableFile::parse(NAUTICAL).expect("parse");
    let catalog = Catalog::with_table(&table).expect("catalog");

    let length = catalog.engine(QuantityKind::Length);
    assert_eq!(length.units().len(), 3);
    let cables = length.convert(1.0, "Nautical miles", "Cables").expect("nmi->cb");
    assert!((cables - 10.0).abs() < 1e-12, "{cables}");
    assert!(length.unit("Centimetres").is_none());

    let builtin = Catalog::builtin().expect("builtin");
    assert_eq!(
        catalog.engine(QuantityKind::Time).units().len(),
        builtin.engine(QuantityKind::Time).units().len()
    );
}

#[test]
fn affine_table_with_kelvin_base() {
    let table = UnitTableFile::parse(KELVIN_ONLY).expect("parse");
    let catalog = Catalog::with_table(&table).expect("catalog");
    let engine = catalog.engine(QuantityKind::Temperature);
    assert_eq!(engine.base_unit().id, "kelvin");
    let c = engine.convert(300.0, "kelvin", "celsius").expect("K->C");
    assert!((c - 26.85).abs() < 1e-9, "{c}");
}

#[test]
fn linear_entry_without_multiplier() {
    let table = UnitTableFile::parse(
        r#"
[[speed]]
id = "Metres per second"
"#,
    )
    .expect("parse");
    assert!(matches!(
        Catalog::with_table(&table),
        Err(CatalogError::TableFile(TableFileError::MissingMultiplier { .. }))
    ));
}

#[test]
fn multiplier_on_temperature_is_mixed_mapping() {
    let table = UnitTableFile::parse(
        r#"
[[temperature]]
id = "celsius"
multiplier = 1.0
"#,
    )
    .expect("parse");
    assert!(matches!(
        Catalog::with_table(&table),
        Err(CatalogError::TableFile(TableFileError::MixedMapping { .. }))
    ));
}

#[test]
fn affine_entry_needs_both_directions() {
    let table = UnitTableFile::parse(
        r#"
[[temperature]]
id = "celsius"
to_base = { scale = 1.0 }
"#,
    )
    .expect("parse");
    assert!(matches!(
        Catalog::with_table(&table),
        Err(CatalogError::TableFile(TableFileError::MissingAffinePair { .. }))
    ));
}

#[test]
fn invalid_multiplier_in_file_fails_registry_validation() {
    let table = UnitTableFile::parse(
        r#"
[[length]]
id = "Metres"
multiplier = 1.0

[[length]]
id = "Negative"
multiplier = -3.0
"#,
    )
    .expect("parse");
    assert!(matches!(
        Catalog::with_table(&table),
        Err(CatalogError::Registry(RegistryError::InvalidMapping { .. }))
    ));
}

#[test]
fn unknown_fields_are_rejected() {
    let err = UnitTableFile::parse(
        r#"
[[length]]
id = "Metres"
factor = 1.0
"#,
    )
    .unwrap_err();
    assert!(matches!(err, TableFileError::Parse(_)), "{err:?}");
}

#[test]
fn missing_file_is_io_error() {
    let err = UnitTableFile::load(std::path::Path::new("no/such/units.toml")).unwrap_err();
    assert!(matches!(err, TableFileError::Io { .. }), "{err:?}");
}
