use clap::Parser;
use colored::Colorize;
use rubix_compose_core::{GenerateError, Generator, parse_worker_count};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "rubix-compose", version)]
#[command(
    about = "RubiX 結合テスト用の docker-compose.yml を生成",
    long_about = "master 1台と worker N台を network-rubix-build 上の固定アドレスに配置した\n<OUTPUT_DIR>/docker/docker-compose.yml を生成します（既存ファイルは上書き）。"
)]
struct Cli {
    /// ワーカー数（0以上の整数）
    #[arg(allow_negative_numbers = true)]
    worker_count: String,
    /// 出力先ディレクトリ（docker/ サブディレクトリが存在すること）
    output_dir: PathBuf,
}

fn run(cli: &Cli) -> Result<PathBuf, GenerateError> {
    // ファイルに触れる前に引数を検証
    let worker_count = parse_worker_count(&cli.worker_count)?;
    tracing::debug!(
        "worker_count={} output_dir={}",
        worker_count,
        cli.output_dir.display()
    );

    Generator::default().generate(worker_count, &cli.output_dir)
}

fn main() {
    let cli = Cli::parse();

    // ログはstderrへ（RUST_LOG未指定時はwarn）
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    match run(&cli) {
        Ok(path) => {
            println!("{} {}", "✓".green(), path.display());
        }
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e);
            std::process::exit(e.exit_code());
        }
    }
}
