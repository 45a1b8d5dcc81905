use tracing::{info, warn};

use crate::config::Config;
use crate::conversion::ConversionEngine;
use crate::quantity::{QuantityKind, ScaleKind};
use crate::registry::{AffineRegistry, LinearRegistry, RegistryError};
use crate::table_file::{TableFileError, UnitTableFile};
use crate::units;

/// 카탈로그 구성 오류.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error(transparent)]
    Registry(#[from] RegistryError),
    #[error(transparent)]
    TableFile(#[from] TableFileError),
}

/// 물리량별 변환 엔진 모음. 시작 시 한 번 만들고 이후에는 읽기만 한다.
#[derive(Debug, Clone)]
pub struct Catalog {
    length: ConversionEngine,
    time: ConversionEngine,
    speed: ConversionEngine,
    temperature: ConversionEngine,
}

impl Catalog {
    /// 내장 단위표로 카탈로그를 만든다.
    pub fn builtin() -> Result<Self, RegistryError> {
        let catalog = Self {
            length: units::length::registry()?.into(),
            time: units::time::registry()?.into(),
            speed: units::speed::registry()?.into(),
            temperature: units::temperature::registry()?.into(),
        };
        for kind in QuantityKind::ALL {
            info!(
                quantity = %kind,
                units = catalog.engine(kind).units().len(),
                "내장 단위표 로드"
            );
        }
        Ok(catalog)
    }

    /// 내장 단위표 위에 파일에 적힌 물리량의 단위표를 덮어쓴다.
    pub fn with_table(table: &UnitTableFile) -> Result<Self, CatalogError> {
        let mut catalog = Self::builtin()?;
        for kind in QuantityKind::ALL {
            if table.entries(kind).is_empty() {
                continue;
            }
            let engine: ConversionEngine = match kind.scale_kind() {
                ScaleKind::Linear => {
                    LinearRegistry::new(kind, table.linear_definitions(kind)?)?.into()
                }
                ScaleKind::Affine => {
                    AffineRegistry::new(kind, table.affine_definitions(kind)?)?.into()
                }
            };
            info!(quantity = %kind, units = engine.units().len(), "사용자 단위표 적용");
            *catalog.engine_mut(kind) = engine;
        }
        Ok(catalog)
    }

    pub fn engine(&self, kind: QuantityKind) -> &ConversionEngine {
        match kind {
            QuantityKind::Length => &self.length,
            QuantityKind::Time => &self.time,
            QuantityKind::Speed => &self.speed,
            QuantityKind::Temperature => &self.temperature,
        }
    }

    fn engine_mut(&mut self, kind: QuantityKind) -> &mut ConversionEngine {
        match kind {
            QuantityKind::Length => &mut self.length,
            QuantityKind::Time => &mut self.time,
            QuantityKind::Speed => &mut self.speed,
            QuantityKind::Temperature => &mut self.temperature,
        }
    }

    /// 설정된 기본 단위 쌍을 돌려준다. 레지스트리에 없는 id는 기준 단위로 대체한다.
    pub fn default_pair(&self, kind: QuantityKind, cfg: &Config) -> (String, String) {
        let engine = self.engine(kind);
        let pair = cfg.default_units.get(kind);
        let pick = |id: &str| match engine.unit(id) {
            Some(meta) => meta.id.clone(),
            None => {
                let base = engine.base_unit().id.clone();
                warn!(quantity = %kind, unit = id, fallback = %base, "설정된 기본 단위가 없음");
                base
            }
        };
        (pick(&pair.from), pick(&pair.to))
    }
}
