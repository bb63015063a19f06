use crate::core::RewriteResult;
use crate::query::rewrite::GuardMatching;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    pub log: LogConfig,
    pub rewrite: RewriteConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct LogConfig {
    pub level: String,
    /// 重写规则模块单独的日志级别，设为 `debug` 可记录每个被消除的空值守卫
    pub rewrite_level: Option<String>,
    pub dir: String,
    pub file: String,
    pub max_file_size: u64,
    pub max_files: usize,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            rewrite_level: None,
            dir: "logs".to_string(),
            file: "odata_rewrite".to_string(),
            max_file_size: 10 * 1024 * 1024, // 10MB
            max_files: 5,
        }
    }
}

/// 重写规则开关
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct RewriteConfig {
    /// 是否启用组件空值检查消除
    pub component_null_check: bool,
    pub guard_matching: GuardMatching,
}

impl Default for RewriteConfig {
    fn default() -> Self {
        Self {
            component_null_check: true,
            guard_matching: GuardMatching::Loose,
        }
    }
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> RewriteResult<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> RewriteResult<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> RewriteResult<()> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}
