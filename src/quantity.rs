use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// 다루는 물리량 종류를 나타낸다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuantityKind {
    Length,
    Time,
    Speed,
    Temperature,
}

/// 기준 단위와의 관계 형태. 배율만 쓰는 선형과 오프셋이 있는 아핀으로 나뉜다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScaleKind {
    Linear,
    Affine,
}

impl QuantityKind {
    /// 화면 표시 순서대로 나열한 전체 물리량.
    pub const ALL: [QuantityKind; 4] = [
        QuantityKind::Length,
        QuantityKind::Time,
        QuantityKind::Speed,
        QuantityKind::Temperature,
    ];

    pub fn scale_kind(self) -> ScaleKind {
        match self {
            QuantityKind::Temperature => ScaleKind::Affine,
            _ => ScaleKind::Linear,
        }
    }

    /// 설정 파일과 CLI에서 쓰는 소문자 키.
    pub fn key(self) -> &'static str {
        match self {
            QuantityKind::Length => "length",
            QuantityKind::Time => "time",
            QuantityKind::Speed => "speed",
            QuantityKind::Temperature => "temperature",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            QuantityKind::Length => "Length",
            QuantityKind::Time => "Time",
            QuantityKind::Speed => "Speed",
            QuantityKind::Temperature => "Temperature",
        }
    }
}

impl fmt::Display for QuantityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// 물리량 이름을 해석하지 못했을 때의 오류.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("지원하지 않는 물리량: {0} (length, time, speed, temperature 중 하나)")]
pub struct ParseQuantityError(pub String);

impl FromStr for QuantityKind {
    type Err = ParseQuantityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "length" | "len" | "distance" => Ok(QuantityKind::Length),
            "time" | "duration" => Ok(QuantityKind::Time),
            "speed" | "velocity" => Ok(QuantityKind::Speed),
            "temperature" | "temp" => Ok(QuantityKind::Temperature),
            _ => Err(ParseQuantityError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_aliases_case_insensitively() {
        assert_eq!("Temp".parse::<QuantityKind>(), Ok(QuantityKind::Temperature));
        assert_eq!(" velocity ".parse::<QuantityKind>(), Ok(QuantityKind::Speed));
        assert!("mass".parse::<QuantityKind>().is_err());
    }

    #[test]
    fn only_temperature_is_affine() {
        for kind in QuantityKind::ALL {
            let expected = if kind == QuantityKind::Temperature {
                ScaleKind::Affine
            } else {
                ScaleKind::Linear
            };
            assert_eq!(kind.scale_kind(), expected, "{kind}");
        }
    }
}
