//! 类型定义模块
//!
//! 定义翻译客户端使用的配置结构和代理类型。

use serde::{Deserialize, Serialize};
use std::fmt;

/// 默认翻译页面地址（Google 翻译移动版）
pub const DEFAULT_ENDPOINT: &str = "https://translate.google.com/m";
/// 单次翻译允许的最大长度（UTF-16 码元）
pub const MAX_TEXT_LENGTH: usize = 5000;
/// 结果所在元素的标签
pub const RESULT_TAG: &str = "div";
/// 结果元素的主 class
pub const PRIMARY_SELECTOR: &str = "t0";
/// 主 class 不存在时使用的备用 class
pub const FALLBACK_SELECTOR: &str = "result-container";

/// 翻译配置
///
/// # 字段说明
///
/// * `source_lang` - 源语言代码，"auto"表示交给远端自动检测
/// * `target_lang` - 目标语言代码
/// * `endpoint` - 翻译页面地址
/// * `max_text_length` - 单次翻译的最大文本长度（UTF-16 码元）
/// * `max_concurrency` - 批量翻译的最大并发数，`None` 表示不限制
/// * `timeout_secs` - 请求超时秒数，`None` 表示使用 HTTP 客户端默认行为
/// * `proxy` - 可选的 HTTP 代理
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TranslationConfig {
    pub source_lang: String,
    pub target_lang: String,
    pub endpoint: String,
    pub max_text_length: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_concurrency: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proxy: Option<ProxyConfig>,
}

impl Default for TranslationConfig {
    fn default() -> Self {
        Self {
            source_lang: "auto".to_string(),
            target_lang: "en".to_string(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            max_text_length: MAX_TEXT_LENGTH,
            max_concurrency: None,
            timeout_secs: None,
            proxy: None,
        }
    }
}

/// 代理认证信息
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProxyCredentials {
    pub username: String,
    pub password: String,
}

impl fmt::Debug for ProxyCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProxyCredentials")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

/// HTTP 代理配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProxyConfig {
    pub host: String,
    pub port: u16,
    #[serde(default, alias = "auth", skip_serializing_if = "Option::is_none")]
    pub credentials: Option<ProxyCredentials>,
}

impl ProxyConfig {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            credentials: None,
        }
    }

    pub fn with_credentials(
        mut self,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        self.credentials = Some(ProxyCredentials {
            username: username.into(),
            password: password.into(),
        });
        self
    }

    /// Build the proxy connection URL.
    ///
    /// Credentials are embedded verbatim, without percent-encoding.
    pub fn url(&self) -> String {
        match &self.credentials {
            Some(ProxyCredentials { username, password }) => {
                format!("http://{}:{}@{}:{}", username, password, self.host, self.port)
            }
            None => format!("http://{}:{}", self.host, self.port),
        }
    }
}

/// 代理设置
///
/// 在构建 HTTP 客户端时进行模式匹配：`NoProxy` 直连，`Via` 经由指定代理转发所有请求。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ProxySetting {
    #[default]
    NoProxy,
    Via(ProxyConfig),
}

impl ProxySetting {
    /// 代理连接 URL，直连时为 `None`
    pub fn url(&self) -> Option<String> {
        match self {
            ProxySetting::NoProxy => None,
            ProxySetting::Via(proxy) => Some(proxy.url()),
        }
    }
}

impl From<Option<ProxyConfig>> for ProxySetting {
    fn from(proxy: Option<ProxyConfig>) -> Self {
        proxy.map_or(ProxySetting::NoProxy, ProxySetting::Via)
    }
}

impl From<ProxyConfig> for ProxySetting {
    fn from(proxy: ProxyConfig) -> Self {
        ProxySetting::Via(proxy)
    }
}
