use std::time::Duration;

use serde::Deserialize;

/// 程序配置
///
/// 默认值对应本地开发环境（网关监听 8080，所有接口带 /api 前缀）。
/// 可通过 TOML 配置文件调整，环境变量优先级最高。
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// API 基础地址，所有接口路径都拼接在它后面
    pub api_base_url: String,
    /// 常规请求超时（毫秒）
    pub request_timeout_ms: u64,
    /// 文件上传请求超时（毫秒），解析大文件较慢，放宽到一分钟
    pub upload_timeout_ms: u64,
    /// 是否显示详细日志
    pub verbose_logging: bool,
    /// 输出日志文件
    pub output_log_file: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:8080/api".to_string(),
            request_timeout_ms: 30_000,
            upload_timeout_ms: 60_000,
            verbose_logging: false,
            output_log_file: "output.txt".to_string(),
        }
    }
}

impl Config {
    /// 从环境变量加载配置，未设置的项使用默认值
    pub fn from_env() -> Self {
        Self::default().apply_env()
    }

    /// 从 TOML 文件加载配置并叠加环境变量覆盖
    ///
    /// 文件不存在时静默回退到默认值，解析失败时告警后回退，
    /// 配置问题不应该阻止程序启动。
    pub fn load(path: &str) -> Self {
        Self::from_toml_file(path).apply_env()
    }

    fn from_toml_file(path: &str) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str::<Config>(&content) {
                Ok(config) => {
                    tracing::info!("✓ 已加载配置文件: {}", path);
                    config
                }
                Err(e) => {
                    tracing::warn!("⚠️ 配置文件 {} 解析失败，使用默认配置: {}", path, e);
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        }
    }

    fn apply_env(self) -> Self {
        Self {
            api_base_url: std::env::var("EASYTIWU_API_BASE_URL").unwrap_or(self.api_base_url),
            request_timeout_ms: std::env::var("EASYTIWU_REQUEST_TIMEOUT_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(self.request_timeout_ms),
            upload_timeout_ms: std::env::var("EASYTIWU_UPLOAD_TIMEOUT_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(self.upload_timeout_ms),
            verbose_logging: std::env::var("EASYTIWU_VERBOSE_LOGGING")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(self.verbose_logging),
            output_log_file: std::env::var("EASYTIWU_OUTPUT_LOG_FILE")
                .unwrap_or(self.output_log_file),
        }
    }

    /// 常规请求超时
    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }

    /// 文件上传请求超时
    pub fn upload_timeout(&self) -> Duration {
        Duration::from_millis(self.upload_timeout_ms)
    }
}
