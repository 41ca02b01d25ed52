use bring_sensor::utils::{logger, validation::Validate};
use bring_sensor::{BringClient, BringSensor, CliConfig, LocalStorage, SensorEngine, TomlConfig};
use clap::Parser;
use std::time::Duration;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.log_json {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("🚀 Starting bring-sensor");
    tracing::info!("📁 Loading configuration from: {}", cli.config);

    let mut config = match TomlConfig::from_file(&cli.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load config file '{}': {}", cli.config, e);
            eprintln!("💡 Make sure the file exists and is valid TOML format");
            std::process::exit(1);
        }
    };

    // 應用命令列覆蓋設定
    if let Some(interval) = cli.interval {
        config.scan_interval_seconds = Some(interval);
        tracing::info!("🔧 Scan interval overridden to: {}s", interval);
    }
    if let Some(output_path) = &cli.output_path {
        config.output_path = Some(output_path.clone());
        tracing::info!("🔧 Output path overridden to: {}", output_path);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let lists = config.resolved_lists();
    for list in &lists {
        tracing::info!("🛒 List {} as '{}' (locale {})", list.id, list.name, list.locale);
    }

    let sensors = lists.into_iter().map(BringSensor::new).collect();
    let client = BringClient::from_config(&config);
    let mut engine = SensorEngine::new(client, sensors);
    if let Some(output_path) = &config.output_path {
        engine = engine.with_storage(LocalStorage::new(output_path.clone()));
    }

    if cli.once {
        let report = engine.update_all().await;
        if !report.all_succeeded() {
            eprintln!("❌ Update failed for: {}", report.failed.join(", "));
            std::process::exit(2);
        }
        return Ok(());
    }

    let scan_interval: Duration = config.scan_interval();
    tokio::select! {
        _ = engine.run(scan_interval) => {}
        signal = tokio::signal::ctrl_c() => {
            signal?;
            tracing::info!("👋 Shutting down");
        }
    }

    Ok(())
}
