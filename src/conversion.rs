use std::fmt;

use tracing::debug;

use crate::quantity::QuantityKind;
use crate::registry::{AffineRegistry, ConversionRegistry, LinearRegistry};
use crate::units::{BaseMapping, UnitDefinition, UnitMeta};

/// 단위 변환 시 발생 가능한 오류.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConversionError {
    /// 레지스트리에 없는 단위 id
    #[error("알 수 없는 단위: {0}")]
    UnknownUnit(String),
}

fn lookup<'r, M>(
    registry: &'r ConversionRegistry<M>,
    id: &str,
) -> Result<&'r UnitDefinition<M>, ConversionError> {
    registry
        .get(id)
        .ok_or_else(|| ConversionError::UnknownUnit(id.to_string()))
}

/// 기준 단위를 거쳐 변환한다. 같은 단위끼리는 값을 그대로 돌려준다.
fn convert_via_base<M: BaseMapping>(
    value: f64,
    from_id: &str,
    to_id: &str,
    registry: &ConversionRegistry<M>,
) -> Result<f64, ConversionError> {
    let from = lookup(registry, from_id)?;
    let to = lookup(registry, to_id)?;
    if from_id == to_id {
        return Ok(value);
    }
    let result = to.mapping.from_base(from.mapping.to_base(value));
    if value.is_finite() && !result.is_finite() {
        debug!(
            quantity = %registry.quantity(),
            value,
            from = from_id,
            to = to_id,
            "기준 단위 경유 중 f64 범위 초과"
        );
    }
    debug!(
        quantity = %registry.quantity(),
        value,
        from = from_id,
        to = to_id,
        result,
        "converted"
    );
    Ok(result)
}

/// 배율 기반 변환. 원 단위 배율을 곱해 기준 단위로 옮긴 뒤 목표 단위 배율로 나눈다.
///
/// 중간값이 기준 단위로 표현되므로 최종 결과가 f64 범위 안이라도 중간값이 넘치면
/// `Ok(inf)`가 된다 (예: `1e300` 광년을 파섹으로).
pub fn convert_linear(
    value: f64,
    from_id: &str,
    to_id: &str,
    registry: &LinearRegistry,
) -> Result<f64, ConversionError> {
    convert_via_base(value, from_id, to_id, registry)
}

/// 아핀 변환 (온도). 원 단위의 `to_base` 후 목표 단위의 `from_base`를 적용한다.
pub fn convert_affine(
    value: f64,
    from_id: &str,
    to_id: &str,
    registry: &AffineRegistry,
) -> Result<f64, ConversionError> {
    convert_via_base(value, from_id, to_id, registry)
}

/// 한 물리량의 변환 엔진. 레지스트리 종류에 따라 선형/아핀 변환으로 나뉜다.
#[derive(Debug, Clone)]
pub enum ConversionEngine {
    Linear(LinearRegistry),
    Affine(AffineRegistry),
}

/// 한 값을 레지스트리의 모든 단위로 펼친 결과 항목.
#[derive(Debug, Clone, PartialEq)]
pub struct ConvertedValue<'a> {
    pub unit: &'a UnitMeta,
    pub value: f64,
}

impl ConversionEngine {
    pub fn quantity(&self) -> QuantityKind {
        match self {
            ConversionEngine::Linear(reg) => reg.quantity(),
            ConversionEngine::Affine(reg) => reg.quantity(),
        }
    }

    /// 두 단위 id 사이에서 값을 변환한다.
    pub fn convert(&self, value: f64, from_id: &str, to_id: &str) -> Result<f64, ConversionError> {
        match self {
            ConversionEngine::Linear(reg) => convert_linear(value, from_id, to_id, reg),
            ConversionEngine::Affine(reg) => convert_affine(value, from_id, to_id, reg),
        }
    }

    /// 값을 등록된 모든 단위로 변환한다. 결과는 등록 순서를 따른다.
    pub fn convert_all(
        &self,
        value: f64,
        from_id: &str,
    ) -> Result<Vec<ConvertedValue<'_>>, ConversionError> {
        match self {
            ConversionEngine::Linear(reg) => fan_out(value, from_id, reg),
            ConversionEngine::Affine(reg) => fan_out(value, from_id, reg),
        }
    }

    /// 변환 결과와 양쪽 단위 정보를 묶은 보고서를 만든다.
    pub fn report(
        &self,
        value: f64,
        from_id: &str,
        to_id: &str,
    ) -> Result<ConversionReport, ConversionError> {
        let result = self.convert(value, from_id, to_id)?;
        let meta = |id: &str| {
            self.unit(id)
                .cloned()
                .ok_or_else(|| ConversionError::UnknownUnit(id.to_string()))
        };
        Ok(ConversionReport {
            value,
            result,
            from: meta(from_id)?,
            to: meta(to_id)?,
            precision: None,
        })
    }

    pub fn unit(&self, id: &str) -> Option<&UnitMeta> {
        match self {
            ConversionEngine::Linear(reg) => reg.get(id).map(|u| &u.meta),
            ConversionEngine::Affine(reg) => reg.get(id).map(|u| &u.meta),
        }
    }

    /// 사용자 입력을 단위 id로 해석한다.
    pub fn resolve(&self, query: &str) -> Option<&str> {
        match self {
            ConversionEngine::Linear(reg) => reg.resolve(query).map(UnitDefinition::id),
            ConversionEngine::Affine(reg) => reg.resolve(query).map(UnitDefinition::id),
        }
    }

    pub fn base_unit(&self) -> &UnitMeta {
        match self {
            ConversionEngine::Linear(reg) => &reg.base_unit().meta,
            ConversionEngine::Affine(reg) => &reg.base_unit().meta,
        }
    }

    /// 등록 순서대로 단위 메타 정보를 돌려준다.
    pub fn units(&self) -> Vec<&UnitMeta> {
        match self {
            ConversionEngine::Linear(reg) => reg.iter().map(|u| &u.meta).collect(),
            ConversionEngine::Affine(reg) => reg.iter().map(|u| &u.meta).collect(),
        }
    }

    pub fn groups(&self) -> Vec<(Option<&str>, Vec<&UnitMeta>)> {
        match self {
            ConversionEngine::Linear(reg) => reg.groups(),
            ConversionEngine::Affine(reg) => reg.groups(),
        }
    }
}

fn fan_out<'r, M: BaseMapping>(
    value: f64,
    from_id: &str,
    registry: &'r ConversionRegistry<M>,
) -> Result<Vec<ConvertedValue<'r>>, ConversionError> {
    let from = lookup(registry, from_id)?;
    let base = from.mapping.to_base(value);
    Ok(registry
        .iter()
        .map(|unit| ConvertedValue {
            unit: &unit.meta,
            value: if unit.id() == from_id {
                value
            } else {
                unit.mapping.from_base(base)
            },
        })
        .collect())
}

impl From<LinearRegistry> for ConversionEngine {
    fn from(value: LinearRegistry) -> Self {
        ConversionEngine::Linear(value)
    }
}

impl From<AffineRegistry> for ConversionEngine {
    fn from(value: AffineRegistry) -> Self {
        ConversionEngine::Affine(value)
    }
}

/// 변환 결과를 화면 문구로 옮기기 위한 보고서.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionReport {
    pub value: f64,
    pub result: f64,
    pub from: UnitMeta,
    pub to: UnitMeta,
    /// 소수점 자리수. `None`이면 f64 기본 표기를 쓴다.
    pub precision: Option<usize>,
}

impl ConversionReport {
    pub fn with_precision(mut self, precision: Option<usize>) -> Self {
        self.precision = precision;
        self
    }

    /// `1 Hours (h) = 60 Minutes (min)`
    pub fn long_text(&self) -> String {
        format!(
            "{} {} = {} {}",
            format_number(self.value, self.precision),
            self.from.label(),
            format_number(self.result, self.precision),
            self.to.label()
        )
    }

    /// `1 h = 60 min`
    pub fn short_text(&self) -> String {
        format!(
            "{} {} = {} {}",
            format_number(self.value, self.precision),
            self.from.short_label(),
            format_number(self.result, self.precision),
            self.to.short_label()
        )
    }

    /// `Hours (h) to Minutes (min)`
    pub fn pair_caption(&self) -> String {
        format!("{} to {}", self.from.label(), self.to.label())
    }
}

impl fmt::Display for ConversionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.long_text())
    }
}

/// 표시용 숫자 포맷. 계산 결과 자체는 반올림하지 않는다.
pub fn format_number(value: f64, precision: Option<usize>) -> String {
    match precision {
        Some(digits) => format!("{value:.digits$}"),
        None => format!("{value}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_number_respects_precision() {
        assert_eq!(format_number(27.777777, Some(2)), "27.78");
        assert_eq!(format_number(60.0, None), "60");
        assert_eq!(format_number(-1.25, Some(3)), "-1.250");
    }
}
