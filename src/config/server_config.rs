// ==========================================
// 照护机构排班系统 - 服务配置
// ==========================================
// 职责: 配置加载、覆写、校验
// 优先级: 内置默认值 < JSON 配置文件 < 环境变量
// ==========================================

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::net::SocketAddr;
use std::path::Path;
use std::sync::OnceLock;
use thiserror::Error;

use crate::domain::types::UnknownPatternPolicy;
use crate::i18n;

/// 环境变量键
pub mod env_keys {
    /// JSON 配置文件路径
    pub const CONFIG_PATH: &str = "SHIFT_ROSTER_CONFIG";
    pub const BIND_ADDR: &str = "SHIFT_ROSTER_BIND_ADDR";
    pub const FUNCTION_PATH: &str = "SHIFT_ROSTER_FUNCTION_PATH";
    pub const LOG_FORMAT: &str = "SHIFT_ROSTER_LOG_FORMAT";
    pub const LOCALE: &str = "SHIFT_ROSTER_LOCALE";
    pub const UNKNOWN_PATTERN: &str = "SHIFT_ROSTER_UNKNOWN_PATTERN";
    pub const MAX_BODY_BYTES: &str = "SHIFT_ROSTER_MAX_BODY_BYTES";
}

/// 内置路由（排班函数路由不得占用）
pub const RESERVED_PATHS: [&str; 2] = ["/jornadas", "/health"];

fn route_path_shape() -> &'static Regex {
    static ROUTE_PATH_SHAPE: OnceLock<Regex> = OnceLock::new();
    ROUTE_PATH_SHAPE.get_or_init(|| {
        // 字面量模式，编译不会失败
        Regex::new(r"^(/|(/[A-Za-z0-9_.-]+)+)$").expect("route path regex")
    })
}

/// 配置错误类型
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("配置文件读取失败 ({path}): {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("配置文件解析失败 ({path}): {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("配置值格式错误 (key: {key}, value: {value}): {message}")]
    InvalidValue {
        key: String,
        value: String,
        message: String,
    },
}

impl ConfigError {
    fn invalid(key: &str, value: &str, message: &str) -> Self {
        ConfigError::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
            message: message.to_string(),
        }
    }
}

// ==========================================
// 日志格式
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogFormat::Pretty => write!(f, "pretty"),
            LogFormat::Json => write!(f, "json"),
        }
    }
}

fn normalize(v: &str) -> String {
    v.trim().to_lowercase().replace('-', "_")
}

fn parse_log_format(v: &str) -> Result<LogFormat, ConfigError> {
    match normalize(v).as_str() {
        "pretty" | "text" => Ok(LogFormat::Pretty),
        "json" => Ok(LogFormat::Json),
        _ => Err(ConfigError::invalid(
            "log_format",
            v,
            "应为 pretty 或 json",
        )),
    }
}

fn parse_unknown_policy(v: &str) -> Result<UnknownPatternPolicy, ConfigError> {
    match normalize(v).as_str() {
        "rest_fallback" | "rest" | "folga" => Ok(UnknownPatternPolicy::RestFallback),
        "reject" | "strict" => Ok(UnknownPatternPolicy::Reject),
        _ => Err(ConfigError::invalid(
            "unknown_pattern_policy",
            v,
            "应为 rest_fallback 或 reject",
        )),
    }
}

// ==========================================
// ServerConfig - 服务配置
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// 监听地址
    pub bind_addr: String,
    /// 排班函数路由
    pub function_path: String,
    pub log_format: LogFormat,
    /// 错误消息语言
    pub locale: String,
    pub unknown_pattern_policy: UnknownPatternPolicy,
    /// 请求体上限（字节）
    pub max_body_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:8080".to_string(),
            function_path: "/gerar-escala".to_string(),
            log_format: LogFormat::Pretty,
            locale: i18n::DEFAULT_LOCALE.to_string(),
            unknown_pattern_policy: UnknownPatternPolicy::RestFallback,
            max_body_bytes: 64 * 1024,
        }
    }
}

impl ServerConfig {
    /// 从进程环境加载配置
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::load_with(|key| std::env::var(key).ok())
    }

    /// 以自定义变量来源加载配置（测试注入）
    pub fn load_with<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = match lookup(env_keys::CONFIG_PATH) {
            Some(path) if !path.trim().is_empty() => Self::from_file(path.trim())?,
            _ => Self::default(),
        };

        config.apply_overrides(lookup)?;
        config.validate()?;
        Ok(config)
    }

    /// 读取 JSON 配置文件（缺省字段取默认值）
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let display = path.display().to_string();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: display.clone(),
            source,
        })?;

        serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: display,
            source,
        })
    }

    /// 应用环境变量覆写
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = lookup(env_keys::BIND_ADDR) {
            self.bind_addr = v.trim().to_string();
        }
        if let Some(v) = lookup(env_keys::FUNCTION_PATH) {
            self.function_path = v.trim().to_string();
        }
        if let Some(v) = lookup(env_keys::LOG_FORMAT) {
            self.log_format = parse_log_format(&v)?;
        }
        if let Some(v) = lookup(env_keys::LOCALE) {
            self.locale = v.trim().to_string();
        }
        if let Some(v) = lookup(env_keys::UNKNOWN_PATTERN) {
            self.unknown_pattern_policy = parse_unknown_policy(&v)?;
        }
        if let Some(v) = lookup(env_keys::MAX_BODY_BYTES) {
            self.max_body_bytes = v.trim().parse::<usize>().map_err(|e| {
                ConfigError::invalid("max_body_bytes", &v, &e.to_string())
            })?;
        }
        Ok(())
    }

    /// 校验配置
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.socket_addr()?;

        // 路由语法字符（: * { }）会被 axum 解释为捕获或通配
        if !route_path_shape().is_match(&self.function_path) {
            return Err(ConfigError::invalid(
                "function_path",
                &self.function_path,
                "必须以 / 开头，段非空，且仅含 [A-Za-z0-9_.-]",
            ));
        }
        if RESERVED_PATHS.contains(&self.function_path.as_str()) {
            return Err(ConfigError::invalid(
                "function_path",
                &self.function_path,
                "与内置路由冲突",
            ));
        }
        if !i18n::is_supported(&self.locale) {
            return Err(ConfigError::invalid(
                "locale",
                &self.locale,
                "仅支持 pt-BR / en",
            ));
        }
        if self.max_body_bytes == 0 {
            return Err(ConfigError::invalid("max_body_bytes", "0", "必须大于 0"));
        }
        Ok(())
    }

    /// 解析监听地址
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        self.bind_addr
            .parse()
            .map_err(|_| ConfigError::invalid("bind_addr", &self.bind_addr, "无法解析为 IP:端口"))
    }

    /// 汇总路由
    pub fn summary_path(&self) -> String {
        if self.function_path == "/" {
            "/resumo".to_string()
        } else {
            format!("{}/resumo", self.function_path)
        }
    }
}
