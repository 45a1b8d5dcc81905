//! 단위 쌍 위젯과 온도 표 위젯의 상태 전이.
use unit_conversion_toolbox::catalog::Catalog;
use unit_conversion_toolbox::config::Config;
use unit_conversion_toolbox::conversion::ConversionError;
use unit_conversion_toolbox::quantity::QuantityKind;
use unit_conversion_toolbox::widgets::{PairOutput, PairWidget, TableWidget, INVALID_SELECTION};

fn catalog() -> Catalog {
    Catalog::builtin().expect("builtin catalog")
}

fn cell_value(table: &TableWidget, id: &str) -> f64 {
    table
        .text(id)
        .and_then(|t| t.parse().ok())
        .unwrap_or_else(|| panic!("{id} has no numeric text"))
}

#[test]
fn pair_widget_converts_on_refresh() {
    let catalog = catalog();
    let engine = catalog.engine(QuantityKind::Length);
    let mut w = PairWidget::new(QuantityKind::Length, "Centimetres", "Metres");
    w.value_text = "100".to_string();
    match w.refresh(engine) {
        PairOutput::Converted(report) => assert!((report.result - 1.0).abs() < 1e-12),
        other => panic!("unexpected {other:?}"),
    }
    assert_eq!(w.output_text(false), "100 Centimetres (cm) = 1 Metres (m)");
    assert_eq!(w.output_text(true), "100 cm = 1 m");
    assert_eq!(
        w.caption().as_deref(),
        Some("Centimetres (cm) to Metres (m)")
    );
}

#[test]
fn non_numeric_input_clears_output() {
    let catalog = catalog();
    let engine = catalog.engine(QuantityKind::Time);
    let mut w = PairWidget::new(QuantityKind::Time, "Hours", "Minutes");
    w.refresh(engine);
    assert!(matches!(w.output(), PairOutput::Converted(_)));

    for text in ["", "   ", "abc", "1.2.3"] {
        w.value_text = text.to_string();
        assert_eq!(w.refresh(engine), &PairOutput::Empty, "{text:?}");
        assert_eq!(w.output_text(false), "");
    }
}

#[test]
fn unknown_unit_shows_invalid_selection() {
    let catalog = catalog();
    let engine = catalog.engine(QuantityKind::Speed);
    let mut w = PairWidget::new(
        QuantityKind::Speed,
        "furlongs-per-fortnight-typo",
        "Metres per second",
    );
    assert_eq!(
        w.refresh(engine),
        &PairOutput::Invalid(ConversionError::UnknownUnit(
            "furlongs-per-fortnight-typo".to_string()
        ))
    );
    assert_eq!(w.output_text(false), INVALID_SELECTION);
    assert_eq!(w.caption(), None);
}

#[test]
fn swap_exchanges_units() {
    let catalog = catalog();
    let engine = catalog.engine(QuantityKind::Time);
    let mut w = PairWidget::new(QuantityKind::Time, "Hours", "Minutes");
    w.value_text = "120".to_string();
    w.swap();
    w.refresh(engine);
    assert_eq!(w.from, "Minutes");
    assert_eq!(w.output_text(true), "120 min = 2 h");
}

#[test]
fn from_config_applies_precision_and_defaults() {
    let catalog = catalog();
    let mut cfg = Config::default();
    cfg.display.precision = Some(2);
    let w = PairWidget::from_config(&catalog, &cfg, QuantityKind::Speed);
    assert_eq!(w.from, "Kilometres per hour");
    assert_eq!(w.to, "Metres per second");
    assert_eq!(w.output_text(true), "1.00 km/h = 0.28 m/s");
}

#[test]
fn temperature_table_starts_at_zero_celsius() {
    let catalog = catalog();
    let table = TableWidget::new(catalog.engine(QuantityKind::Temperature), None);
    assert_eq!(table.cells().len(), 8);
    assert_eq!(table.text("celsius"), Some("0"));
    assert_eq!(table.text("fahrenheit"), Some("32"));
    assert_eq!(table.text("kelvin"), Some("273.15"));
}

#[test]
fn editing_one_cell_updates_the_others() {
    let catalog = catalog();
    let engine = catalog.engine(QuantityKind::Temperature);
    let mut table = TableWidget::new(engine, None);
    table.edit(engine, "fahrenheit", "212").expect("edit");
    assert_eq!(table.text("fahrenheit"), Some("212"));
    assert!((cell_value(&table, "celsius") - 100.0).abs() < 1e-9);
    assert!((cell_value(&table, "kelvin") - 373.15).abs() < 1e-9);
    assert!((cell_value(&table, "reaumur") - 80.0).abs() < 1e-9);
}

#[test]
fn blank_cell_clears_the_others() {
    let catalog = catalog();
    let engine = catalog.engine(QuantityKind::Temperature);
    let mut table = TableWidget::new(engine, None);
    table.edit(engine, "kelvin", "").expect("edit");
    assert!(table.cells().iter().all(|c| c.text.is_empty()));
}

#[test]
fn non_numeric_cell_leaves_the_others() {
    let catalog = catalog();
    let engine = catalog.engine(QuantityKind::Temperature);
    let mut table = TableWidget::new(engine, None);
    table.edit(engine, "celsius", "-").expect("edit");
    assert_eq!(table.text("celsius"), Some("-"));
    assert_eq!(table.text("fahrenheit"), Some("32"));
}

#[test]
fn editing_unknown_cell_is_an_error() {
    let catalog = catalog();
    let engine = catalog.engine(QuantityKind::Temperature);
    let mut table = TableWidget::new(engine, None);
    assert_eq!(
        table.edit(engine, "gas mark", "4"),
        Err(ConversionError::UnknownUnit("gas mark".to_string()))
    );
}
