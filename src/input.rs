//! 사용자가 입력한 숫자 문자열 해석. 변환 엔진에는 유한한 f64만 넘긴다.

/// 숫자 입력 오류.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    #[error("값이 비어 있음")]
    Empty,
    #[error("숫자가 아님: {0}")]
    NotANumber(String),
    #[error("유한한 숫자가 아님: {0}")]
    NotFinite(String),
}

/// 앞뒤 공백을 무시하고 숫자를 읽는다. `NaN`, `inf` 는 거부한다.
pub fn parse_value(text: &str) -> Result<f64, InputError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(InputError::Empty);
    }
    let value: f64 = trimmed
        .parse()
        .map_err(|_| InputError::NotANumber(trimmed.to_string()))?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(InputError::NotFinite(trimmed.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_and_scientific_numbers() {
        assert_eq!(parse_value(" 42 "), Ok(42.0));
        assert_eq!(parse_value("-40"), Ok(-40.0));
        assert_eq!(parse_value("1e3"), Ok(1000.0));
    }

    #[test]
    fn rejects_empty_garbage_and_non_finite() {
        assert_eq!(parse_value("   "), Err(InputError::Empty));
        assert!(matches!(parse_value("12abc"), Err(InputError::NotANumber(_))));
        assert!(matches!(parse_value("NaN"), Err(InputError::NotFinite(_))));
        assert!(matches!(parse_value("inf"), Err(InputError::NotFinite(_))));
    }
}
