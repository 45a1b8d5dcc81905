use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::info;
use unit_conversion_toolbox::{
    app::{self, AppError},
    config,
    conversion::format_number,
    input,
    logging,
    quantity::QuantityKind,
    ui_cli,
};

#[derive(Parser)]
#[command(
    name = "unit_conversion_toolbox_cli",
    version,
    about = "길이·시간·속도·온도 단위 변환기",
    long_about = "단위 이름, 기호, \"Name (sym)\" 라벨로 단위를 지정할 수 있습니다. 하위 명령이 없으면 대화형 메뉴를 실행합니다."
)]
struct Cli {
    /// 설정 파일 경로
    #[arg(long, global = true, default_value = config::DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// 기본 단위표를 덮어쓸 TOML 단위표
    #[arg(long, global = true)]
    units: Option<PathBuf>,

    /// 디버그 로그 출력
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// 값을 한 단위에서 다른 단위로 변환
    Convert {
        /// length, time, speed, temperature
        quantity: QuantityKind,
        #[arg(value_parser = input::parse_value, allow_negative_numbers = true)]
        value: f64,
        from: String,
        to: String,
        /// 단위 이름 대신 기호로 출력
        #[arg(long)]
        short: bool,
    },
    /// 값을 모든 단위로 변환
    Table {
        quantity: QuantityKind,
        #[arg(value_parser = input::parse_value, allow_negative_numbers = true)]
        value: f64,
        from: String,
    },
    /// 단위 목록 출력
    List {
        /// 생략하면 모든 물리량
        quantity: Option<QuantityKind>,
    },
    /// 대화형 메뉴
    Interactive,
}

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 요청된 명령을 실행한다.
fn main() -> ExitCode {
    let cli = Cli::parse();
    match try_run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("오류: {err}");
            ExitCode::FAILURE
        }
    }
}

fn try_run(cli: Cli) -> Result<(), AppError> {
    let (mut cfg, created) = config::load_or_create(&cli.config)?;
    let level = if cli.verbose { "debug" } else { cfg.log_level.as_str() };
    logging::init(level);
    if created {
        info!(path = %cli.config.display(), "기본 설정 파일 생성");
    }
    let catalog = app::bootstrap(&cfg, cli.units.as_deref())?;

    match cli.command.unwrap_or(Command::Interactive) {
        Command::Convert {
            quantity,
            value,
            from,
            to,
            short,
        } => {
            let report = app::convert_command(&catalog, quantity, value, &from, &to, &cfg)?;
            if short || cfg.display.show_symbols {
                println!("{}", report.short_text());
            } else {
                println!("{}", report.long_text());
            }
        }
        Command::Table {
            quantity,
            value,
            from,
        } => {
            for (label, v) in app::table_command(&catalog, quantity, value, &from)? {
                println!("{:>24}  {label}", format_number(v, cfg.display.precision));
            }
        }
        Command::List { quantity } => match quantity {
            Some(kind) => ui_cli::print_units(catalog.engine(kind)),
            None => ui_cli::handle_list_units(&catalog)?,
        },
        Command::Interactive => app::run(&mut cfg, &catalog, &cli.config)?,
    }
    Ok(())
}
