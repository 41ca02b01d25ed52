use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "bring-sensor")]
#[command(about = "Polls Bring! shopping lists and publishes them as sensor state")]
pub struct CliConfig {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "bring.toml")]
    pub config: String,

    /// Run a single update cycle and exit
    #[arg(long)]
    pub once: bool,

    /// Override scan_interval_seconds from config
    #[arg(long)]
    pub interval: Option<u64>,

    /// Override output_path from config
    #[arg(long)]
    pub output_path: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Emit logs as JSON
    #[arg(long)]
    pub log_json: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = CliConfig::parse_from(["bring-sensor"]);
        assert_eq!(cli.config, "bring.toml");
        assert!(!cli.once);
        assert_eq!(cli.interval, None);
    }

    #[test]
    fn test_cli_overrides() {
        let cli = CliConfig::parse_from([
            "bring-sensor",
            "--config",
            "lists.toml",
            "--once",
            "--interval",
            "120",
            "--output-path",
            "./state",
            "--log-json",
        ]);
        assert_eq!(cli.config, "lists.toml");
        assert!(cli.once);
        assert_eq!(cli.interval, Some(120));
        assert_eq!(cli.output_path.as_deref(), Some("./state"));
        assert!(cli.log_json);
    }
}
