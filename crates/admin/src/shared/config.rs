use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub api: ApiConfig,
    #[serde(default)]
    pub log: LogConfig,
    /// Откуда прочитан файл конфигурации
    #[serde(skip)]
    pub source: ConfigSource,
    /// Переменные окружения, заменившие значения из файла
    #[serde(skip)]
    pub env_overrides: Vec<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ConfigSource {
    #[default]
    Embedded,
    File(PathBuf),
}

impl Config {
    /// Записать в лог источники конфигурации
    ///
    /// Вызывается после `system::tracing::initialize`: конфигурация читается раньше,
    /// чем появляется подписчик.
    pub fn log_sources(&self) {
        match &self.source {
            ConfigSource::File(path) => tracing::info!("Config loaded from: {}", path.display()),
            ConfigSource::Embedded => tracing::info!("Using default embedded configuration"),
        }
        for var in &self.env_overrides {
            match *var {
                ENV_API_URL => tracing::info!("API base URL overridden by {}", var),
                _ => tracing::info!("API token provided by {}", var),
            }
        }
        tracing::info!("API base URL: {}", self.api.base_url);
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ApiConfig {
    pub base_url: String,
    #[serde(default)]
    pub token: Option<String>,
    /// Таймаут запроса в секундах; отсутствие значения = без таймаута
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct LogConfig {
    pub dir: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            dir: "logs".to_string(),
        }
    }
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[api]
base_url = "http://localhost:8000"
timeout_secs = 30

[log]
dir = "logs"
"#;

pub const ENV_API_URL: &str = "ADMIN_API_URL";
pub const ENV_API_TOKEN: &str = "ADMIN_API_TOKEN";

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable (for production)
/// 2. Falls back to embedded default config
///
/// `ADMIN_API_URL` / `ADMIN_API_TOKEN` override the file values.
pub fn load_config() -> anyhow::Result<Config> {
    let mut config = load_file_or_default()?;
    apply_env_overrides(
        &mut config,
        std::env::var(ENV_API_URL).ok(),
        std::env::var(ENV_API_TOKEN).ok(),
    );
    Ok(config)
}

fn load_file_or_default() -> anyhow::Result<Config> {
    // Try to find config.toml next to the executable
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");

            if config_path.exists() {
                let mut config = parse_config_file(&config_path)?;
                config.source = ConfigSource::File(config_path);
                return Ok(config);
            }
        }
    }

    // Fall back to default config
    let config: Config = toml::from_str(DEFAULT_CONFIG)?;
    Ok(config)
}

fn parse_config_file(path: &Path) -> anyhow::Result<Config> {
    use anyhow::Context;

    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Cannot read {}", path.display()))?;
    let config: Config =
        toml::from_str(&contents).with_context(|| format!("Invalid config {}", path.display()))?;
    Ok(config)
}

fn apply_env_overrides(config: &mut Config, api_url: Option<String>, token: Option<String>) {
    if let Some(url) = api_url.filter(|u| !u.trim().is_empty()) {
        config.api.base_url = url;
        config.env_overrides.push(ENV_API_URL);
    }
    if let Some(token) = token.filter(|t| !t.trim().is_empty()) {
        config.api.token = Some(token);
        config.env_overrides.push(ENV_API_TOKEN);
    }
}

/// Get the log directory from configuration
/// Resolves relative paths relative to the executable directory
pub fn get_log_dir(config: &Config) -> PathBuf {
    let dir = Path::new(&config.log.dir);

    if dir.is_absolute() {
        return dir.to_path_buf();
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            return exe_dir.join(dir);
        }
    }

    // Fallback: use relative to current directory
    PathBuf::from(&config.log.dir)
}
