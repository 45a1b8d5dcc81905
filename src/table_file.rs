//! 사용자 정의 단위표 (TOML) 형식.
//!
//! ```toml
//! [[length]]
//! id = "Metres"
//! symbol = "m"
//! group = "Metric"
//! multiplier = 1.0
//!
//! [[temperature]]
//! id = "kelvin"
//! name = "Kelvin"
//! to_base = { scale = 1.0, offset = -273.15 }
//! from_base = { scale = 1.0, offset = 273.15 }
//! ```
//!
//! 파일은 로드 시 한 번만 정규 [`UnitDefinition`]으로 바뀐다.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::quantity::QuantityKind;
use crate::units::{AffineFn, AffinePair, Multiplier, UnitDefinition, UnitMeta};

/// 단위표 파일 오류.
#[derive(Debug, thiserror::Error)]
pub enum TableFileError {
    #[error("단위표 파일을 읽을 수 없음 ({}): {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("단위표 파싱 오류: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("{quantity} 단위 {id}: multiplier가 필요함")]
    MissingMultiplier { quantity: QuantityKind, id: String },
    #[error("{quantity} 단위 {id}: to_base와 from_base가 모두 필요함")]
    MissingAffinePair { quantity: QuantityKind, id: String },
    #[error("{quantity} 단위 {id}: multiplier와 to_base/from_base를 함께 쓸 수 없음")]
    MixedMapping { quantity: QuantityKind, id: String },
}

/// 파일의 단위 항목 하나.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UnitEntry {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub multiplier: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to_base: Option<AffineFn>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from_base: Option<AffineFn>,
}

impl UnitEntry {
    fn meta(&self) -> UnitMeta {
        UnitMeta::new(
            &self.id,
            self.name.as_deref().unwrap_or(&self.id),
            self.symbol.as_deref(),
            self.group.as_deref(),
        )
    }

    fn has_affine(&self) -> bool {
        self.to_base.is_some() || self.from_base.is_some()
    }
}

/// 물리량별 단위 목록. 비어 있는 물리량은 기본 단위표를 그대로 쓴다.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UnitTableFile {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub length: Vec<UnitEntry>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub time: Vec<UnitEntry>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub speed: Vec<UnitEntry>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub temperature: Vec<UnitEntry>,
}

impl UnitTableFile {
    pub fn load(path: &Path) -> Result<Self, TableFileError> {
        let content = fs::read_to_string(path).map_err(|source| TableFileError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self, TableFileError> {
        Ok(toml::from_str(content)?)
    }

    pub fn entries(&self, kind: QuantityKind) -> &[UnitEntry] {
        match kind {
            QuantityKind::Length => &self.length,
            QuantityKind::Time => &self.time,
            QuantityKind::Speed => &self.speed,
            QuantityKind::Temperature => &self.temperature,
        }
    }

    /// 배율 기반 정의로 바꾼다. 검증은 레지스트리 생성 시 이루어진다.
    pub fn linear_definitions(
        &self,
        kind: QuantityKind,
    ) -> Result<Vec<UnitDefinition<Multiplier>>, TableFileError> {
        self.entries(kind)
            .iter()
            .map(|entry| {
                if entry.has_affine() {
                    return Err(TableFileError::MixedMapping {
                        quantity: kind,
                        id: entry.id.clone(),
                    });
                }
                let factor = entry
                    .multiplier
                    .ok_or_else(|| TableFileError::MissingMultiplier {
                        quantity: kind,
                        id: entry.id.clone(),
                    })?;
                Ok(UnitDefinition::new(entry.meta(), Multiplier(factor)))
            })
            .collect()
    }

    /// 아핀 변환 쌍 기반 정의로 바꾼다.
    pub fn affine_definitions(
        &self,
        kind: QuantityKind,
    ) -> Result<Vec<UnitDefinition<AffinePair>>, TableFileError> {
        self.entries(kind)
            .iter()
            .map(|entry| {
                if entry.multiplier.is_some() {
                    return Err(TableFileError::MixedMapping {
                        quantity: kind,
                        id: entry.id.clone(),
                    });
                }
                match (entry.to_base, entry.from_base) {
                    (Some(to_base), Some(from_base)) => Ok(UnitDefinition::new(
                        entry.meta(),
                        AffinePair::new(to_base, from_base),
                    )),
                    _ => Err(TableFileError::MissingAffinePair {
                        quantity: kind,
                        id: entry.id.clone(),
                    }),
                }
            })
            .collect()
    }
}
