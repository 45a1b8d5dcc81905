use std::collections::HashMap;

use crate::quantity::QuantityKind;
use crate::units::{AffinePair, BaseMapping, MappingError, Multiplier, UnitDefinition, UnitMeta};

/// 레지스트리 생성 시 검출되는 오류. 어떤 경우든 레지스트리를 쓰면 안 된다.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RegistryError {
    #[error("{0} 레지스트리에 단위가 없음")]
    Empty(QuantityKind),
    #[error("{0} 레지스트리에 id가 빈 단위가 있음")]
    EmptyId(QuantityKind),
    #[error("{quantity} 레지스트리에 중복된 단위 id: {id}")]
    DuplicateId { quantity: QuantityKind, id: String },
    #[error("{quantity} 단위 {id}: {source}")]
    InvalidMapping {
        quantity: QuantityKind,
        id: String,
        #[source]
        source: MappingError,
    },
    #[error("{0} 레지스트리에 기준 단위(배율 1)가 없음")]
    MissingBaseUnit(QuantityKind),
}

/// 한 물리량의 단위 정의를 순서대로 담는 불변 레지스트리.
///
/// 생성 시 모든 정의를 검증하며 이후에는 변경할 수 없다. id 조회는 색인을 통해 O(1)이다.
#[derive(Debug, Clone)]
pub struct ConversionRegistry<M> {
    quantity: QuantityKind,
    units: Vec<UnitDefinition<M>>,
    index: HashMap<String, usize>,
    base: usize,
}

/// 배율 기반 레지스트리 (길이, 시간, 속도).
pub type LinearRegistry = ConversionRegistry<Multiplier>;
/// 아핀 변환 쌍 기반 레지스트리 (온도).
pub type AffineRegistry = ConversionRegistry<AffinePair>;

impl<M: BaseMapping> ConversionRegistry<M> {
    /// 정의 목록을 검증하여 레지스트리를 만든다. 기준 단위는 처음 나온 항등 매핑 단위이다.
    pub fn new(
        quantity: QuantityKind,
        units: Vec<UnitDefinition<M>>,
    ) -> Result<Self, RegistryError> {
        if units.is_empty() {
            return Err(RegistryError::Empty(quantity));
        }
        let mut index = HashMap::with_capacity(units.len());
        let mut base = None;
        for (pos, unit) in units.iter().enumerate() {
            let id = unit.id();
            if id.trim().is_empty() {
                return Err(RegistryError::EmptyId(quantity));
            }
            unit.mapping
                .validate()
                .map_err(|source| RegistryError::InvalidMapping {
                    quantity,
                    id: id.to_string(),
                    source,
                })?;
            if index.insert(id.to_string(), pos).is_some() {
                return Err(RegistryError::DuplicateId {
                    quantity,
                    id: id.to_string(),
                });
            }
            if base.is_none() && unit.mapping.is_base() {
                base = Some(pos);
            }
        }
        let base = base.ok_or(RegistryError::MissingBaseUnit(quantity))?;
        Ok(Self {
            quantity,
            units,
            index,
            base,
        })
    }
}

impl<M> ConversionRegistry<M> {
    pub fn quantity(&self) -> QuantityKind {
        self.quantity
    }

    /// id로 정확히 일치하는 단위를 찾는다.
    pub fn get(&self, id: &str) -> Option<&UnitDefinition<M>> {
        self.index.get(id).map(|&pos| &self.units[pos])
    }

    pub fn base_unit(&self) -> &UnitDefinition<M> {
        &self.units[self.base]
    }

    /// 등록 순서대로 순회한다.
    pub fn iter(&self) -> impl Iterator<Item = &UnitDefinition<M>> {
        self.units.iter()
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// 사용자 입력 문자열을 단위로 해석한다.
    ///
    /// id, 기호, 대소문자 무시 id, 대소문자 무시 기호, `"Name (sym)"` 라벨 순서로 찾는다.
    pub fn resolve(&self, query: &str) -> Option<&UnitDefinition<M>> {
        let q = query.trim();
        if q.is_empty() {
            return None;
        }
        if let Some(unit) = self.get(q) {
            return Some(unit);
        }
        self.units
            .iter()
            .find(|u| u.meta.symbol.as_deref() == Some(q))
            .or_else(|| self.units.iter().find(|u| u.id().eq_ignore_ascii_case(q)))
            .or_else(|| {
                self.units.iter().find(|u| {
                    u.meta
                        .symbol
                        .as_deref()
                        .is_some_and(|s| s.eq_ignore_ascii_case(q))
                })
            })
            .or_else(|| self.units.iter().find(|u| u.meta.label() == q))
    }

    /// 분류별로 묶은 단위 메타 정보. 분류는 처음 등장한 순서를 따른다.
    pub fn groups(&self) -> Vec<(Option<&str>, Vec<&UnitMeta>)> {
        let mut out: Vec<(Option<&str>, Vec<&UnitMeta>)> = Vec::new();
        for unit in &self.units {
            let group = unit.meta.group.as_deref();
            match out.iter_mut().find(|(g, _)| *g == group) {
                Some((_, members)) => members.push(&unit.meta),
                None => out.push((group, vec![&unit.meta])),
            }
        }
        out
    }
}
