//! CLI 바이너리를 직접 실행하는 회귀 테스트.
use std::path::PathBuf;
use std::process::{Command, Stdio};
use std::time::{Duration, Instant};

const CLI: &str = env!("CARGO_BIN_EXE_unit_conversion_toolbox_cli");

fn temp_config(name: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!(
        "unit_conversion_toolbox-cli-{}-{name}.toml",
        std::process::id()
    ));
    let _ = std::fs::remove_file(&path);
    path
}

#[test]
fn interactive_mode_exits_when_stdin_is_closed() {
    let config = temp_config("eof");
    let mut child = Command::new(CLI)
        .arg("--config")
        .arg(&config)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .expect("spawn cli");

    let deadline = Instant::now() + Duration::from_secs(10);
    let status = loop {
        if let Some(status) = child.try_wait().expect("wait cli") {
            break status;
        }
        if Instant::now() > deadline {
            let _ = child.kill();
            let _ = child.wait();
            panic!("CLI did not exit after stdin was closed");
        }
        std::thread::sleep(Duration::from_millis(50));
    };
    assert!(status.success(), "{status}");
    let _ = std::fs::remove_file(&config);
}

#[test]
fn global_flags_are_accepted_after_the_subcommand() {
    let config = temp_config("global");
    let output = Command::new(CLI)
        .args(["convert", "length", "100", "cm", "m", "-v", "--config"])
        .arg(&config)
        .stdin(Stdio::null())
        .output()
        .expect("run cli");
    assert!(
        output.status.success(),
        "{}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert_eq!(
        String::from_utf8_lossy(&output.stdout).trim(),
        "100 Centimetres (cm) = 1 Metres (m)"
    );
    assert!(config.exists());
    let _ = std::fs::remove_file(&config);
}
