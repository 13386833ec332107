use clap::Parser;
use payflow_kit::utils::logger;
use payflow_kit::{check_env_file, CheckEnvCli};

fn main() {
    let config = CheckEnvCli::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);
    tracing::debug!("CLI config: {:?}", config);

    let report = match check_env_file(&config.file) {
        Ok(report) => report,
        Err(e) => {
            tracing::debug!("Env check failed: {}", e);
            tracing::debug!("💡 Suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(e.exit_code());
        }
    };

    // 空檔案只警告，不影響退出碼
    let written = if report.is_empty() {
        tracing::debug!("{} has no entries", report.file_name());
        report.render(&mut std::io::stderr().lock())
    } else {
        report.render(&mut std::io::stdout().lock())
    };

    if let Err(e) = written {
        eprintln!("❌ Failed to write report: {}", e);
        std::process::exit(1);
    }

    let placeholders = report.placeholders().count();
    if placeholders > 0 {
        tracing::debug!("{} placeholder value(s) found", placeholders);
    }
}
