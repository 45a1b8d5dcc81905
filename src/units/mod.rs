//! 단위 정의 스키마와 물리량별 기본 단위표 모음.

pub mod length;
pub mod speed;
pub mod temperature;
pub mod time;

use std::fmt;

use serde::{Deserialize, Serialize};

/// 단위의 식별 정보. 변환 계산에는 `id`만 쓰이고 나머지는 표시용이다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitMeta {
    pub id: String,
    pub display_name: String,
    /// 약칭 (예: `m`, `km/h`, `°F`)
    pub symbol: Option<String>,
    /// 표시용 분류 (예: `Metric`, `Imperial`)
    pub group: Option<String>,
}

impl UnitMeta {
    pub fn new(id: &str, display_name: &str, symbol: Option<&str>, group: Option<&str>) -> Self {
        Self {
            id: id.to_string(),
            display_name: display_name.to_string(),
            symbol: symbol.map(str::to_string),
            group: group.map(str::to_string),
        }
    }

    /// `"Name (sym)"` 형태의 라벨을 해석한다. 이름이 곧 id가 된다.
    pub fn from_label(label: &str, group: Option<&str>) -> Self {
        let (name, symbol) = split_label(label);
        Self::new(name, name, symbol, group)
    }

    /// `"Name (sym)"` 또는 약칭이 없으면 `"Name"`.
    pub fn label(&self) -> String {
        match &self.symbol {
            Some(sym) => format!("{} ({sym})", self.display_name),
            None => self.display_name.clone(),
        }
    }

    /// 약칭이 없으면 이름을 대신 쓴다.
    pub fn short_label(&self) -> &str {
        self.symbol.as_deref().unwrap_or(&self.display_name)
    }
}

/// 라벨 끝의 괄호를 약칭으로 분리한다. 괄호가 없으면 약칭도 없다.
pub fn split_label(label: &str) -> (&str, Option<&str>) {
    let label = label.trim();
    if let Some(body) = label.strip_suffix(')') {
        if let Some(open) = body.rfind('(') {
            let name = body[..open].trim_end();
            let symbol = body[open + 1..].trim();
            if !name.is_empty() && !symbol.is_empty() {
                return (name, Some(symbol));
            }
        }
    }
    (label, None)
}

/// 기준 단위와의 대응 관계. 레지스트리는 이 트레이트만 보고 변환한다.
pub trait BaseMapping {
    /// 이 단위의 값을 기준 단위 값으로 바꾼다.
    fn to_base(&self, value: f64) -> f64;
    /// 기준 단위 값을 이 단위의 값으로 바꾼다.
    fn from_base(&self, value: f64) -> f64;
    /// 매핑 자체가 유효한지 검사한다.
    fn validate(&self) -> Result<(), MappingError>;
    /// 기준 단위 자신인지 여부.
    fn is_base(&self) -> bool;
}

/// 매핑 검증 실패 사유. 레지스트리가 단위 id를 붙여 [`crate::registry::RegistryError`]로 감싼다.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MappingError {
    #[error("배율은 0보다 큰 유한값이어야 함 (현재 {0})")]
    InvalidMultiplier(f64),
    #[error("아핀 변환 계수가 잘못됨: {0}")]
    InvalidAffine(String),
    #[error("to_base/from_base가 서로 역함수가 아님: {input} -> {roundtrip}")]
    NotInverse { input: f64, roundtrip: f64 },
}

/// 기준 단위 1개에 해당하는 배율. 값 × 배율 = 기준 단위 값.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Multiplier(pub f64);

impl BaseMapping for Multiplier {
    fn to_base(&self, value: f64) -> f64 {
        value * self.0
    }

    fn from_base(&self, value: f64) -> f64 {
        value / self.0
    }

    fn validate(&self) -> Result<(), MappingError> {
        if self.0.is_finite() && self.0 > 0.0 {
            Ok(())
        } else {
            Err(MappingError::InvalidMultiplier(self.0))
        }
    }

    fn is_base(&self) -> bool {
        self.0 == 1.0
    }
}

/// `v * scale + offset` 형태의 실수 함수.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AffineFn {
    pub scale: f64,
    #[serde(default)]
    pub offset: f64,
}

impl AffineFn {
    pub const IDENTITY: AffineFn = AffineFn::new(1.0, 0.0);

    pub const fn new(scale: f64, offset: f64) -> Self {
        Self { scale, offset }
    }

    pub fn apply(&self, value: f64) -> f64 {
        value * self.scale + self.offset
    }
}

impl fmt::Display for AffineFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v × {} + {}", self.scale, self.offset)
    }
}

/// 역함수 검사에 쓰는 표본 입력.
const INVERSE_SAMPLES: [f64; 8] = [-1000.0, -40.0, -1.0, 0.0, 1.0, 37.0, 100.0, 1000.0];
const INVERSE_REL_TOL: f64 = 1e-9;

/// 기준 단위로 가는 함수와 돌아오는 함수의 쌍. 온도처럼 영점이 다른 눈금에 쓴다.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AffinePair {
    pub to_base: AffineFn,
    pub from_base: AffineFn,
}

impl AffinePair {
    pub const IDENTITY: AffinePair = AffinePair::new(AffineFn::IDENTITY, AffineFn::IDENTITY);

    pub const fn new(to_base: AffineFn, from_base: AffineFn) -> Self {
        Self { to_base, from_base }
    }
}

impl BaseMapping for AffinePair {
    fn to_base(&self, value: f64) -> f64 {
        self.to_base.apply(value)
    }

    fn from_base(&self, value: f64) -> f64 {
        self.from_base.apply(value)
    }

    fn validate(&self) -> Result<(), MappingError> {
        for (name, func) in [("to_base", self.to_base), ("from_base", self.from_base)] {
            if !func.scale.is_finite() || func.scale == 0.0 || !func.offset.is_finite() {
                return Err(MappingError::InvalidAffine(format!("{name} = {func}")));
            }
        }
        for input in INVERSE_SAMPLES {
            let roundtrip = self.from_base.apply(self.to_base.apply(input));
            let tol = INVERSE_REL_TOL * input.abs().max(1.0);
            if (roundtrip - input).abs() > tol {
                return Err(MappingError::NotInverse { input, roundtrip });
            }
        }
        Ok(())
    }

    fn is_base(&self) -> bool {
        *self == AffinePair::IDENTITY
    }
}

/// 단위 하나의 정규 정의. `M`은 [`Multiplier`] 또는 [`AffinePair`].
#[derive(Debug, Clone, PartialEq)]
pub struct UnitDefinition<M> {
    pub meta: UnitMeta,
    pub mapping: M,
}

impl<M> UnitDefinition<M> {
    pub fn new(meta: UnitMeta, mapping: M) -> Self {
        Self { meta, mapping }
    }

    pub fn id(&self) -> &str {
        &self.meta.id
    }
}

/// 분류별 `"Name (sym)"` 라벨과 배율로 적힌 단위표를 정규 정의 목록으로 펼친다.
pub(crate) fn linear_definitions(
    groups: &[(&str, &[(&str, f64)])],
) -> Vec<UnitDefinition<Multiplier>> {
    groups
        .iter()
        .flat_map(|(group, entries)| {
            entries.iter().map(move |(label, factor)| {
                UnitDefinition::new(UnitMeta::from_label(label, Some(*group)), Multiplier(*factor))
            })
        })
        .collect()
}
