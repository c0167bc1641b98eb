use crate::adapters::identifier::{parse_identifier, FixedIdProvider, SystemIdProvider};
use crate::adapters::time::{parse_instant, FixedTimeProvider, SystemTimeProvider};
use crate::domain::ports::{IdProvider, TimeProvider};
use crate::utils::error::{Result, ToolboxError};
use crate::utils::logger;
use crate::utils::validation::{
    validate_absent_field, validate_non_empty_string, validate_required_field, Validate,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// 選擇主機應用程式要注入哪一種時間與識別碼提供者。
///
/// ```toml
/// [time]
/// mode = "fixed"
/// instant = "2025-01-01T12:00:00Z"
///
/// [identifiers]
/// mode = "fixed"
/// sequence = ["11111111-1111-1111-1111-111111111111"]
///
/// [logging]
/// verbose = true
/// format = "json"
/// ```
///
/// 缺少的區段一律使用系統提供者。
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ToolboxConfig {
    #[serde(default)]
    pub time: TimeConfig,
    #[serde(default)]
    pub identifiers: IdentifierConfig,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderMode {
    #[default]
    System,
    Fixed,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TimeConfig {
    #[serde(default)]
    pub mode: ProviderMode,
    /// RFC 3339 instant, only for `mode = "fixed"`.
    pub instant: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IdentifierConfig {
    #[serde(default)]
    pub mode: ProviderMode,
    /// Canonical identifiers, only for `mode = "fixed"`.
    pub sequence: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub verbose: bool,
    #[serde(default)]
    pub format: LogFormat,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

impl ToolboxConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(ToolboxError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        // 處理環境變數替換
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| ToolboxError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${FIXED_INSTANT})，未定義的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| ToolboxError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// 驗證 [time] 區段
    fn validate_time(&self) -> Result<()> {
        match self.time.mode {
            ProviderMode::System => validate_absent_field(
                "time.instant",
                &self.time.instant,
                "instant is only allowed when mode = \"fixed\"",
            ),
            ProviderMode::Fixed => {
                let instant = validate_required_field("time.instant", &self.time.instant)?;
                validate_non_empty_string("time.instant", instant)?;
                parse_instant(instant).map(|_| ())
            }
        }
    }

    /// 驗證 [identifiers] 區段
    fn validate_identifiers(&self) -> Result<()> {
        match self.identifiers.mode {
            ProviderMode::System => validate_absent_field(
                "identifiers.sequence",
                &self.identifiers.sequence,
                "sequence is only allowed when mode = \"fixed\"",
            ),
            ProviderMode::Fixed => {
                let sequence =
                    validate_required_field("identifiers.sequence", &self.identifiers.sequence)?;
                for id in sequence {
                    validate_non_empty_string("identifiers.sequence", id)?;
                    parse_identifier(id)?;
                }
                Ok(())
            }
        }
    }

    /// 依 [time] 區段建立時間提供者
    pub fn time_provider(&self) -> Result<Box<dyn TimeProvider>> {
        self.validate_time()?;

        match (self.time.mode, self.time.instant.as_deref()) {
            (ProviderMode::Fixed, Some(instant)) => {
                let provider = FixedTimeProvider::parse(instant)?;
                tracing::info!("⏱️ Using fixed time provider at {}", instant.trim());
                Ok(Box::new(provider))
            }
            _ => {
                tracing::info!("⏱️ Using system time provider");
                Ok(Box::new(SystemTimeProvider::new()))
            }
        }
    }

    /// 依 [identifiers] 區段建立識別碼提供者
    pub fn id_provider(&self) -> Result<Box<dyn IdProvider>> {
        self.validate_identifiers()?;

        match (self.identifiers.mode, self.identifiers.sequence.as_ref()) {
            (ProviderMode::Fixed, Some(sequence)) => {
                let provider = FixedIdProvider::parse(sequence.iter().map(String::as_str))?;
                tracing::info!(
                    "🆔 Using fixed id provider with {} seeded identifiers",
                    sequence.len()
                );
                Ok(Box::new(provider))
            }
            _ => {
                tracing::info!("🆔 Using system id provider");
                Ok(Box::new(SystemIdProvider::new()))
            }
        }
    }

    /// 依 [logging] 區段初始化日誌；未設定時不做任何事
    pub fn init_logging(&self) -> Result<()> {
        match &self.logging {
            Some(logging) => match logging.format {
                LogFormat::Compact => logger::init_compact_logger(logging.verbose),
                LogFormat::Json => logger::init_json_logger(logging.verbose),
            },
            None => Ok(()),
        }
    }
}

impl Validate for ToolboxConfig {
    fn validate(&self) -> Result<()> {
        self.validate_time()?;
        self.validate_identifiers()
    }
}
