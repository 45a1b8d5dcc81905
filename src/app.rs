use std::path::Path;

use tracing::info;

use crate::catalog::{Catalog, CatalogError};
use crate::config::{Config, ConfigError};
use crate::conversion::{ConversionEngine, ConversionError, ConversionReport};
use crate::input::InputError;
use crate::quantity::QuantityKind;
use crate::table_file::UnitTableFile;
use crate::ui_cli::{self, MenuChoice};

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// 파일 입출력 오류
    #[error("입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    /// 설정 저장/로드 오류
    #[error("설정 오류: {0}")]
    Config(#[from] ConfigError),
    /// 단위표 구성 오류
    #[error("단위표 오류: {0}")]
    Catalog(#[from] CatalogError),
    /// 단위 변환 오류
    #[error("단위 변환 오류: {0}")]
    Conversion(#[from] ConversionError),
    /// 숫자 입력 오류
    #[error("입력 오류: {0}")]
    Input(#[from] InputError),
}

/// 설정에 맞춰 카탈로그를 만든다. `override_table`이 있으면 설정의 단위표보다 우선한다.
pub fn bootstrap(cfg: &Config, override_table: Option<&Path>) -> Result<Catalog, AppError> {
    let table_path = override_table.or(cfg.unit_table.as_deref());
    let catalog = match table_path {
        Some(path) => {
            info!(path = %path.display(), "사용자 단위표 로드");
            let table = UnitTableFile::load(path).map_err(CatalogError::from)?;
            Catalog::with_table(&table)?
        }
        None => Catalog::builtin().map_err(CatalogError::from)?,
    };
    Ok(catalog)
}

/// 사용자가 입력한 단위 이름을 id로 바꾼다.
pub fn resolve_unit<'e>(engine: &'e ConversionEngine, query: &str) -> Result<&'e str, ConversionError> {
    engine
        .resolve(query)
        .ok_or_else(|| ConversionError::UnknownUnit(query.trim().to_string()))
}

/// 이름(또는 기호)으로 지정된 두 단위 사이에서 값을 변환한다.
pub fn convert_command(
    catalog: &Catalog,
    kind: QuantityKind,
    value: f64,
    from: &str,
    to: &str,
    cfg: &Config,
) -> Result<ConversionReport, AppError> {
    let engine = catalog.engine(kind);
    let from_id = resolve_unit(engine, from)?;
    let to_id = resolve_unit(engine, to)?;
    let report = engine.report(value, from_id, to_id)?;
    Ok(report.with_precision(cfg.display.precision))
}

/// 한 값을 모든 단위로 변환한 (라벨, 값) 목록.
pub fn table_command(
    catalog: &Catalog,
    kind: QuantityKind,
    value: f64,
    from: &str,
) -> Result<Vec<(String, f64)>, AppError> {
    let engine = catalog.engine(kind);
    let from_id = resolve_unit(engine, from)?;
    let rows = engine
        .convert_all(value, from_id)?
        .into_iter()
        .map(|item| (item.unit.label(), item.value))
        .collect();
    Ok(rows)
}

/// 대화형 CLI의 메인 루프를 실행한다. 입력이 닫히면 설정을 저장하고 끝낸다.
pub fn run(config: &mut Config, catalog: &Catalog, config_path: &Path) -> Result<(), AppError> {
    loop {
        let step = match ui_cli::main_menu()? {
            MenuChoice::Convert(kind) => ui_cli::handle_conversion(config, catalog, kind),
            MenuChoice::TemperatureTable => ui_cli::handle_temperature_table(config, catalog),
            MenuChoice::ListUnits => ui_cli::handle_list_units(catalog),
            MenuChoice::Settings => ui_cli::handle_settings(config)
                .and_then(|()| config.save_to(config_path).map_err(AppError::from)),
            MenuChoice::Exit => break,
        };
        match step {
            Ok(()) => {}
            Err(e) if is_end_of_input(&e) => break,
            Err(e) => return Err(e),
        }
    }
    config.save_to(config_path)?;
    println!("프로그램을 종료합니다.");
    Ok(())
}

fn is_end_of_input(err: &AppError) -> bool {
    matches!(err, AppError::Io(e) if e.kind() == std::io::ErrorKind::UnexpectedEof)
}
