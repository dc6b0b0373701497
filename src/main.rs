use clap::Parser;
use salary_stats::config::load_env_file;
use salary_stats::utils::{logger, validation::Validate};
use salary_stats::{app, CliConfig, Settings, StatsError};

#[tokio::main]
async fn main() {
    // .env 需在解析命令列前載入，TOKEN_SJ 才能由 clap 讀取
    let env_file = load_env_file();
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    match env_file {
        Ok(Some(path)) => tracing::debug!("Loaded environment from {}", path.display()),
        Ok(None) => {}
        Err(e) => tracing::warn!("⚠️ Ignoring unreadable .env file: {}", e),
    }

    tracing::info!("Starting salary-stats");

    let settings = match load_settings(config) {
        Ok(settings) => settings,
        Err(e) => exit_with(e),
    };
    tracing::debug!(
        "Languages: {:?}, HeadHunter area {}, SuperJob town {}",
        settings.languages,
        settings.headhunter.area,
        settings.superjob.town
    );

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if let Err(e) = app::run(&settings, &mut out).await {
        exit_with(e);
    }

    tracing::info!("✅ Both reports completed");
}

fn load_settings(config: CliConfig) -> Result<Settings, StatsError> {
    let settings = config.into_settings()?;
    settings.validate()?;
    Ok(settings)
}

fn exit_with(e: StatsError) -> ! {
    tracing::error!("❌ {}", e);
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());

    std::process::exit(e.exit_code());
}
