use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::quantity::QuantityKind;

/// 기본 설정 파일 경로 (작업 디렉터리 기준).
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// 변환기 화면에서 처음 선택되어 있는 단위 쌍.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitPair {
    pub from: String,
    pub to: String,
}

impl UnitPair {
    pub fn new(from: &str, to: &str) -> Self {
        Self {
            from: from.to_string(),
            to: to.to_string(),
        }
    }
}

/// 각 물리량별 기본 단위 설정을 담는다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultUnits {
    pub length: UnitPair,
    pub time: UnitPair,
    pub speed: UnitPair,
    pub temperature: UnitPair,
}

impl Default for DefaultUnits {
    fn default() -> Self {
        Self {
            length: UnitPair::new("Centimetres", "Metres"),
            time: UnitPair::new("Hours", "Minutes"),
            speed: UnitPair::new("Kilometres per hour", "Metres per second"),
            temperature: UnitPair::new("celsius", "fahrenheit"),
        }
    }
}

impl DefaultUnits {
    pub fn get(&self, kind: QuantityKind) -> &UnitPair {
        match kind {
            QuantityKind::Length => &self.length,
            QuantityKind::Time => &self.time,
            QuantityKind::Speed => &self.speed,
            QuantityKind::Temperature => &self.temperature,
        }
    }

    pub fn get_mut(&mut self, kind: QuantityKind) -> &mut UnitPair {
        match kind {
            QuantityKind::Length => &mut self.length,
            QuantityKind::Time => &mut self.time,
            QuantityKind::Speed => &mut self.speed,
            QuantityKind::Temperature => &mut self.temperature,
        }
    }
}

/// 결과 표시 방식.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayOptions {
    /// 소수점 자리수. 없으면 반올림하지 않는다.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub precision: Option<usize>,
    /// 결과 문구에 단위 이름 대신 기호를 쓴다.
    pub show_symbols: bool,
}

/// 애플리케이션 설정을 표현한다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub default_quantity: QuantityKind,
    /// tracing 필터 레벨 (`error`, `warn`, `info`, `debug`, `trace`)
    pub log_level: String,
    /// 기본 단위표를 덮어쓸 TOML 파일
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_table: Option<PathBuf>,
    pub display: DisplayOptions,
    pub default_units: DefaultUnits,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_quantity: QuantityKind::Length,
            log_level: "warn".to_string(),
            unit_table: None,
            display: DisplayOptions::default(),
            default_units: DefaultUnits::default(),
        }
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// 파일 입출력 오류
    #[error("파일 입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    /// TOML 역직렬화 오류
    #[error("설정 파싱 오류: {0}")]
    Parse(#[from] toml::de::Error),
    /// TOML 직렬화 오류
    #[error("설정 직렬화 오류: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// 지정한 경로의 설정을 로드한다. 파일이 없으면 기본값으로 만들어 저장한다.
///
/// 두 번째 값은 파일을 새로 만들었는지 여부이다. 로깅은 설정의 `log_level`을 읽은 뒤에야
/// 켜지므로 생성 사실은 호출자가 기록한다.
pub fn load_or_create(path: &Path) -> Result<(Config, bool), ConfigError> {
    if path.exists() {
        let content = fs::read_to_string(path)?;
        let cfg: Config = toml::from_str(&content)?;
        Ok((cfg, false))
    } else {
        let cfg = Config::default();
        cfg.save_to(path)?;
        Ok((cfg, true))
    }
}

impl Config {
    /// 설정을 config.toml에 저장한다.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(Path::new(DEFAULT_CONFIG_PATH))
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}
