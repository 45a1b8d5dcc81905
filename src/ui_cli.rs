use std::io::{self, BufRead, Write};

use crate::app::{self, AppError};
use crate::catalog::Catalog;
use crate::config::Config;
use crate::conversion::{format_number, ConversionEngine};
use crate::input::parse_value;
use crate::quantity::QuantityKind;

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Convert(QuantityKind),
    TemperatureTable,
    ListUnits,
    Settings,
    Exit,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu() -> Result<MenuChoice, AppError> {
    println!("\n=== Unit Conversion Toolbox ===");
    println!("1) 길이 변환");
    println!("2) 시간 변환");
    println!("3) 속도 변환");
    println!("4) 온도 변환");
    println!("5) 온도 눈금 전체 보기");
    println!("6) 단위 목록");
    println!("7) 설정");
    println!("0) 종료");
    loop {
        let sel = match read_line("메뉴 선택: ") {
            Ok(sel) => sel,
            // 입력이 닫히면 정상 종료로 처리한다.
            Err(AppError::Io(e)) if e.kind() == io::ErrorKind::UnexpectedEof => {
                return Ok(MenuChoice::Exit)
            }
            Err(e) => return Err(e),
        };
        match map_menu(sel.trim()) {
            Some(choice) => return Ok(choice),
            None => println!("잘못된 입력입니다. 다시 선택하세요."),
        }
    }
}

fn map_menu(sel: &str) -> Option<MenuChoice> {
    match sel {
        "1" => Some(MenuChoice::Convert(QuantityKind::Length)),
        "2" => Some(MenuChoice::Convert(QuantityKind::Time)),
        "3" => Some(MenuChoice::Convert(QuantityKind::Speed)),
        "4" => Some(MenuChoice::Convert(QuantityKind::Temperature)),
        "5" => Some(MenuChoice::TemperatureTable),
        "6" => Some(MenuChoice::ListUnits),
        "7" => Some(MenuChoice::Settings),
        "0" => Some(MenuChoice::Exit),
        _ => None,
    }
}

/// 단위 변환 메뉴를 처리한다. 빈 단위 입력은 설정의 기본 단위를 쓴다.
pub fn handle_conversion(cfg: &Config, catalog: &Catalog, kind: QuantityKind) -> Result<(), AppError> {
    println!("\n-- {} 변환 --", kind.label());
    let (default_from, default_to) = catalog.default_pair(kind, cfg);
    let value = read_f64("값 입력: ")?;
    let from = read_line(&format!("입력 단위 [{default_from}]: "))?;
    let to = read_line(&format!("변환 단위 [{default_to}]: "))?;
    let from = or_default(&from, &default_from);
    let to = or_default(&to, &default_to);
    match app::convert_command(catalog, kind, value, from, to, cfg) {
        Ok(report) => {
            let text = if cfg.display.show_symbols {
                report.short_text()
            } else {
                report.long_text()
            };
            println!("변환 결과: {text}");
        }
        // 잘못된 단위는 메뉴를 끝내지 않고 안내만 한다.
        Err(AppError::Conversion(err)) => println!("{err}. `6) 단위 목록`에서 이름을 확인하세요."),
        Err(err) => return Err(err),
    }
    Ok(())
}

fn or_default<'a>(input: &'a str, default: &'a str) -> &'a str {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        default
    } else {
        trimmed
    }
}

/// 한 온도 값을 모든 눈금으로 보여 준다.
pub fn handle_temperature_table(cfg: &Config, catalog: &Catalog) -> Result<(), AppError> {
    println!("\n-- 온도 눈금 --");
    let kind = QuantityKind::Temperature;
    let (default_from, _) = catalog.default_pair(kind, cfg);
    let value = read_f64("온도 값: ")?;
    let from = read_line(&format!("눈금 [{default_from}]: "))?;
    let from = or_default(&from, &default_from);
    match app::table_command(catalog, kind, value, from) {
        Ok(rows) => {
            for (label, v) in rows {
                println!("{:>24}  {label}", format_number(v, cfg.display.precision));
            }
        }
        Err(AppError::Conversion(err)) => println!("{err}"),
        Err(err) => return Err(err),
    }
    Ok(())
}

/// 모든 물리량의 단위 목록을 출력한다.
pub fn handle_list_units(catalog: &Catalog) -> Result<(), AppError> {
    for kind in QuantityKind::ALL {
        print_units(catalog.engine(kind));
    }
    Ok(())
}

/// 한 물리량의 단위를 분류별로 출력한다. 기준 단위에는 `*`를 붙인다.
pub fn print_units(engine: &ConversionEngine) {
    let base = engine.base_unit().id.as_str();
    println!("\n[{}]", engine.quantity().label());
    for (group, metas) in engine.groups() {
        if let Some(group) = group {
            println!("  {group}");
        }
        for meta in metas {
            let marker = if meta.id == base { "*" } else { " " };
            println!("   {marker} {}", meta.label());
        }
    }
}

/// 설정 메뉴를 처리한다.
pub fn handle_settings(cfg: &mut Config) -> Result<(), AppError> {
    println!("\n-- 설정 --");
    match cfg.display.precision {
        Some(p) => println!("현재 표시 자리수: {p}"),
        None => println!("현재 표시 자리수: 제한 없음"),
    }
    println!("현재 결과 표기: {}", if cfg.display.show_symbols { "기호" } else { "이름" });
    println!("1) 표시 자리수 변경  2) 결과 표기 전환");
    let sel = read_line("변경할 번호(취소하려면 엔터): ")?;
    match sel.trim() {
        "" => {}
        "1" => {
            let input = read_line("자리수 (0~15, 비우면 제한 없음): ")?;
            match parse_precision(&input) {
                Some(p) => cfg.display.precision = p,
                None => println!("잘못된 입력이므로 변경하지 않습니다."),
            }
        }
        "2" => cfg.display.show_symbols = !cfg.display.show_symbols,
        _ => println!("잘못된 입력이므로 변경하지 않습니다."),
    }
    Ok(())
}

/// 빈 입력은 `Some(None)`(제한 없음), 잘못된 입력은 `None`.
fn parse_precision(input: &str) -> Option<Option<usize>> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Some(None);
    }
    match trimmed.parse::<usize>() {
        Ok(p) if p <= 15 => Some(Some(p)),
        _ => None,
    }
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush()?;
    read_line_from(&mut io::stdin().lock())
}

/// 한 줄을 읽는다. 입력이 끝났으면 `UnexpectedEof`.
fn read_line_from(reader: &mut impl BufRead) -> Result<String, AppError> {
    let mut buf = String::new();
    if reader.read_line(&mut buf)? == 0 {
        return Err(io::Error::from(io::ErrorKind::UnexpectedEof).into());
    }
    Ok(buf)
}

fn read_f64(prompt: &str) -> Result<f64, AppError> {
    loop {
        let s = read_line(prompt)?;
        match parse_value(&s) {
            Ok(v) => return Ok(v),
            Err(e) => println!("{e}. 숫자를 입력하세요."),
        }
    }
}
