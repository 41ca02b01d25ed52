#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::CliConfig;
pub use toml_config::TomlConfig;

/// 套用預設值後的單一清單設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListConfig {
    pub id: String,
    pub name: String,
    pub locale: String,
}
