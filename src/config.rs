//! 配置管理模块
//!
//! 提供TOML配置文件的读取、写入和自动发现功能。

use crate::error::Result;
use crate::types::TranslationConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// 配置文件的查找顺序
const DEFAULT_LOCATIONS: [&str; 3] = [
    "translation-config.toml",
    "config.toml",
    ".translation-config.toml",
];

/// 翻译库配置结构
///
/// 包含所有翻译相关的配置选项，支持从TOML文件加载和保存。
///
/// # 示例
///
/// ```rust,no_run
/// use html_translator::TranslationLibConfig;
///
/// // 从默认位置加载配置
/// let config = TranslationLibConfig::load_from_default_locations();
///
/// // 从指定文件加载配置
/// let config = TranslationLibConfig::from_file("config.toml").unwrap();
///
/// // 保存配置到文件
/// config.save_to_file("output.toml").unwrap();
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TranslationLibConfig {
    /// 翻译配置
    #[serde(default)]
    pub translation: TranslationConfig,
}

impl TranslationLibConfig {
    /// Load configuration from TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: TranslationLibConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to TOML file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Load configuration from the first existing default location
    pub fn load_from_default_locations() -> Self {
        Self::load_from_locations(Path::new("."))
    }

    fn load_from_locations(base: &Path) -> Self {
        for name in DEFAULT_LOCATIONS {
            let path = base.join(name);
            if !path.exists() {
                continue;
            }

            match Self::from_file(&path) {
                Ok(config) => {
                    tracing::info!("Loaded configuration from: {}", path.display());
                    return config;
                }
                Err(e) => {
                    tracing::warn!("Failed to load config from {}: {}", path.display(), e);
                }
            }
        }

        tracing::info!("No configuration file found, using defaults");
        Self::default()
    }

    /// Generate example configuration file
    pub fn generate_example_config<P: AsRef<Path>>(path: P) -> Result<()> {
        Self::default().save_to_file(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TranslationError;
    use crate::types::ProxyConfig;

    #[test]
    fn parses_full_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("translation-config.toml");
        fs::write(
            &path,
            r#"
[translation]
source_lang = "de"
target_lang = "es"
max_concurrency = 4

[translation.proxy]
host = "127.0.0.1"
port = 8080

[translation.proxy.auth]
username = "u"
password = "p"
"#,
        )
        .unwrap();

        let config = TranslationLibConfig::from_file(&path).unwrap().translation;
        assert_eq!(config.source_lang, "de");
        assert_eq!(config.target_lang, "es");
        assert_eq!(config.max_concurrency, Some(4));
        assert_eq!(config.max_text_length, 5000);
        assert_eq!(
            config.proxy,
            Some(ProxyConfig::new("127.0.0.1", 8080).with_credentials("u", "p"))
        );
    }

    #[test]
    fn missing_section_uses_defaults() {
        let config: TranslationLibConfig = toml::from_str("").unwrap();
        assert_eq!(config, TranslationLibConfig::default());
    }

    #[test]
    fn save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.toml");

        let mut config = TranslationLibConfig::default();
        config.translation.target_lang = "fr".to_string();
        config.translation.proxy = Some(ProxyConfig::new("proxy.local", 3128));
        config.save_to_file(&path).unwrap();

        assert_eq!(TranslationLibConfig::from_file(&path).unwrap(), config);
    }

    #[test]
    fn invalid_file_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        fs::write(&path, "[translation\nsource_lang = ").unwrap();

        assert!(matches!(
            TranslationLibConfig::from_file(&path),
            Err(TranslationError::ConfigParse(_))
        ));
    }

    #[test]
    fn discovery_skips_broken_files() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("translation-config.toml"), "not = [valid").unwrap();
        fs::write(
            dir.path().join("config.toml"),
            "[translation]\ntarget_lang = \"ja\"\n",
        )
        .unwrap();

        let config = TranslationLibConfig::load_from_locations(dir.path());
        assert_eq!(config.translation.target_lang, "ja");
    }

    #[test]
    fn discovery_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = TranslationLibConfig::load_from_locations(dir.path());
        assert_eq!(config, TranslationLibConfig::default());
    }
}
