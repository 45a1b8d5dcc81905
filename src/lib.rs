//! 단위 변환 핵심 로직을 라이브러리로 분리하여 CLI와 GUI가 같은 엔진을 공유한다.

pub mod app;
pub mod catalog;
pub mod config;
pub mod conversion;
pub mod input;
pub mod logging;
pub mod quantity;
pub mod registry;
pub mod table_file;
pub mod ui_cli;
pub mod units;
pub mod widgets;
