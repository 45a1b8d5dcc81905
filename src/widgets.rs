//! 변환기 화면의 상태. GUI와 CLI가 공유하며 그리기 자체는 하지 않는다.
//!
//! 두 가지 형태가 있다. 값 하나와 단위 두 개를 고르는 [`PairWidget`]과,
//! 어느 칸을 고치든 나머지 칸이 모두 갱신되는 [`TableWidget`](온도 표)이다.

use tracing::debug;

use crate::catalog::Catalog;
use crate::config::Config;
use crate::conversion::{format_number, ConversionEngine, ConversionError, ConversionReport};
use crate::input::parse_value;
use crate::quantity::QuantityKind;

/// 단위 선택이 잘못되었을 때 보여 줄 문구.
pub const INVALID_SELECTION: &str = "Invalid unit selection.";

/// 단위 쌍 변환기의 출력 상태.
#[derive(Debug, Clone, PartialEq)]
pub enum PairOutput {
    /// 입력이 비었거나 숫자가 아님
    Empty,
    /// 선택된 단위가 레지스트리에 없음
    Invalid(ConversionError),
    Converted(ConversionReport),
}

/// 값 하나를 두 단위 사이에서 변환하는 위젯.
#[derive(Debug, Clone)]
pub struct PairWidget {
    pub quantity: QuantityKind,
    pub value_text: String,
    pub from: String,
    pub to: String,
    pub precision: Option<usize>,
    output: PairOutput,
}

impl PairWidget {
    pub fn new(quantity: QuantityKind, from: &str, to: &str) -> Self {
        Self {
            quantity,
            value_text: "1".to_string(),
            from: from.to_string(),
            to: to.to_string(),
            precision: None,
            output: PairOutput::Empty,
        }
    }

    /// 설정의 기본 단위 쌍과 표시 자리수로 위젯을 만들고 첫 결과를 계산한다.
    pub fn from_config(catalog: &Catalog, cfg: &Config, quantity: QuantityKind) -> Self {
        let (from, to) = catalog.default_pair(quantity, cfg);
        let mut widget = Self::new(quantity, &from, &to);
        widget.precision = cfg.display.precision;
        widget.refresh(catalog.engine(quantity));
        widget
    }

    /// 현재 입력으로 출력을 다시 계산한다.
    pub fn refresh(&mut self, engine: &ConversionEngine) -> &PairOutput {
        self.output = match parse_value(&self.value_text) {
            Err(_) => PairOutput::Empty,
            Ok(value) => match engine.report(value, &self.from, &self.to) {
                Ok(report) => PairOutput::Converted(report.with_precision(self.precision)),
                Err(err) => {
                    debug!(quantity = %self.quantity, error = %err, "단위 선택 오류");
                    PairOutput::Invalid(err)
                }
            },
        };
        &self.output
    }

    /// 원 단위와 목표 단위를 맞바꾼다. 출력은 `refresh` 후에 바뀐다.
    pub fn swap(&mut self) {
        std::mem::swap(&mut self.from, &mut self.to);
    }

    pub fn output(&self) -> &PairOutput {
        &self.output
    }

    /// `"Hours (h) to Minutes (min)"` 형태의 단위 쌍 제목. 변환 결과가 있을 때만 있다.
    pub fn caption(&self) -> Option<String> {
        match &self.output {
            PairOutput::Converted(report) => Some(report.pair_caption()),
            _ => None,
        }
    }

    /// 결과 문구. 비어 있으면 빈 문자열이다.
    pub fn output_text(&self, short: bool) -> String {
        match &self.output {
            PairOutput::Empty => String::new(),
            PairOutput::Invalid(_) => INVALID_SELECTION.to_string(),
            PairOutput::Converted(report) if short => report.short_text(),
            PairOutput::Converted(report) => report.long_text(),
        }
    }
}

/// 표의 한 칸.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableCell {
    pub id: String,
    pub label: String,
    pub text: String,
}

/// 모든 단위를 한 번에 보여 주는 표 위젯.
#[derive(Debug, Clone)]
pub struct TableWidget {
    pub quantity: QuantityKind,
    pub precision: Option<usize>,
    cells: Vec<TableCell>,
}

impl TableWidget {
    /// 기준 단위 칸에 0을 넣은 상태로 표를 만든다.
    pub fn new(engine: &ConversionEngine, precision: Option<usize>) -> Self {
        let cells = engine
            .units()
            .into_iter()
            .map(|meta| TableCell {
                id: meta.id.clone(),
                label: meta.label(),
                text: String::new(),
            })
            .collect();
        let mut table = Self {
            quantity: engine.quantity(),
            precision,
            cells,
        };
        let base = engine.base_unit().id.clone();
        // 기준 단위는 레지스트리에 반드시 있으므로 실패하지 않는다.
        let _ = table.edit(engine, &base, "0");
        table
    }

    pub fn cells(&self) -> &[TableCell] {
        &self.cells
    }

    pub fn text(&self, id: &str) -> Option<&str> {
        self.cells
            .iter()
            .find(|c| c.id == id)
            .map(|c| c.text.as_str())
    }

    /// 한 칸을 고친다. 빈 값이면 나머지를 비우고, 숫자가 아니면 나머지를 그대로 둔다.
    pub fn edit(
        &mut self,
        engine: &ConversionEngine,
        id: &str,
        text: &str,
    ) -> Result<(), ConversionError> {
        let Some(cell) = self.cells.iter_mut().find(|c| c.id == id) else {
            return Err(ConversionError::UnknownUnit(id.to_string()));
        };
        cell.text = text.to_string();
        if text.trim().is_empty() {
            for other in self.cells.iter_mut().filter(|c| c.id != id) {
                other.text.clear();
            }
            return Ok(());
        }
        let Ok(value) = parse_value(text) else {
            return Ok(());
        };
        let converted = engine.convert_all(value, id)?;
        for item in converted {
            if item.unit.id == id {
                continue;
            }
            if let Some(other) = self.cells.iter_mut().find(|c| c.id == item.unit.id) {
                other.text = format_number(item.value, self.precision);
            }
        }
        Ok(())
    }
}
