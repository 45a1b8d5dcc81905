use std::io;

use tracing_subscriber::EnvFilter;

/// 전역 tracing 구독자를 설정한다. `RUST_LOG`가 있으면 그 값을 우선한다.
///
/// 로그는 stderr로 보내 CLI 결과 출력과 섞이지 않게 한다. 이미 설정되어 있으면 아무것도 하지 않는다.
pub fn init(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!("warn,unit_conversion_toolbox={level}"))
    });
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .try_init();
}
