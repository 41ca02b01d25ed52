use crate::config::ListConfig;
use crate::utils::error::{BringError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;

pub const DEFAULT_LOCALE: &str = "en-US";
pub const DEFAULT_API_BASE: &str = "https://api.getbring.com/rest";
pub const DEFAULT_WEB_BASE: &str = "https://web.getbring.com";
pub const DEFAULT_SCAN_INTERVAL_SECONDS: u64 = 30;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    /// 未指定 locale 的清單使用這個值
    pub locale: Option<String>,
    pub scan_interval_seconds: Option<u64>,
    pub output_path: Option<String>,
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub lists: Vec<ListEntryConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SourceConfig {
    pub api_base: Option<String>,
    pub web_base: Option<String>,
    pub timeout_seconds: Option<u64>,
    pub headers: Option<HashMap<String, String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListEntryConfig {
    pub id: String,
    pub name: Option<String>,
    pub locale: Option<String>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(BringError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content)
            .map_err(|e| BringError::config(format!("TOML parsing error: {}", e)))
    }

    /// 替換環境變數 (例如 ${BRING_LIST_ID})；找不到的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}")
            .map_err(|e| BringError::config(format!("invalid substitution pattern: {}", e)))?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn default_locale(&self) -> &str {
        self.locale.as_deref().unwrap_or(DEFAULT_LOCALE)
    }

    pub fn api_base(&self) -> &str {
        self.source.api_base.as_deref().unwrap_or(DEFAULT_API_BASE)
    }

    pub fn web_base(&self) -> &str {
        self.source.web_base.as_deref().unwrap_or(DEFAULT_WEB_BASE)
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.source.timeout_seconds.map(Duration::from_secs)
    }

    pub fn headers(&self) -> HashMap<String, String> {
        self.source.headers.clone().unwrap_or_default()
    }

    pub fn scan_interval(&self) -> Duration {
        Duration::from_secs(
            self.scan_interval_seconds
                .unwrap_or(DEFAULT_SCAN_INTERVAL_SECONDS),
        )
    }

    /// 套用預設值：name 預設為 id，locale 預設為全域 locale
    pub fn resolved_lists(&self) -> Vec<ListConfig> {
        self.lists
            .iter()
            .map(|list| ListConfig {
                id: list.id.clone(),
                name: list
                    .name
                    .as_deref()
                    .filter(|n| !n.is_empty())
                    .unwrap_or(&list.id)
                    .to_string(),
                locale: list
                    .locale
                    .as_deref()
                    .unwrap_or(self.default_locale())
                    .to_string(),
            })
            .collect()
    }

    /// 驗證配置的合理性
    pub fn validate_config(&self) -> Result<()> {
        if self.lists.is_empty() {
            return Err(BringError::MissingConfigError {
                field: "lists".to_string(),
            });
        }

        validation::validate_non_empty_string("locale", self.default_locale())?;

        for (index, list) in self.lists.iter().enumerate() {
            validation::validate_list_id(&format!("lists[{}].id", index), &list.id)?;
            if let Some(locale) = &list.locale {
                validation::validate_non_empty_string(&format!("lists[{}].locale", index), locale)?;
            }
        }

        // 名稱會成為輸出檔名
        for (index, list) in self.resolved_lists().iter().enumerate() {
            validation::validate_file_name_component(&format!("lists[{}].name", index), &list.name)?;
        }

        validation::validate_url("source.api_base", self.api_base())?;
        validation::validate_url("source.web_base", self.web_base())?;

        if let Some(timeout) = self.source.timeout_seconds {
            validation::validate_range("source.timeout_seconds", timeout, 1, 300)?;
        }

        if let Some(interval) = self.scan_interval_seconds {
            validation::validate_range("scan_interval_seconds", interval, 5, 86_400)?;
        }

        if let Some(path) = &self.output_path {
            validation::validate_path("output_path", path)?;
        }

        Ok(())
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
