//! 错误处理模块
//!
//! 定义翻译客户端中使用的错误类型。所有错误都直接返回给调用方，
//! 库内部不做重试，也不吞掉任何错误。

use thiserror::Error;

/// 翻译错误类型
///
/// # 变体说明
///
/// * `InvalidInput` - 输入文本为空或超过最大长度，在任何网络请求之前返回
/// * `RateLimited` - 远端返回 429
/// * `TranslationNotFound` - 响应中没有匹配的结果元素
/// * `Network` - 传输层错误（连接、DNS、TLS、超时），原样返回
/// * `NotImplemented` - 占位接口
/// * `Config` - HTTP客户端或选择器构建失败
#[derive(Debug, Error)]
pub enum TranslationError {
    /// 输入验证错误
    #[error("Invalid input text: length {length} is outside 1..={max}")]
    InvalidInput {
        /// 输入长度（UTF-16 码元数）
        length: usize,
        /// 允许的最大长度
        max: usize,
    },

    /// 速率限制错误
    #[error("Too Many Requests")]
    RateLimited,

    #[error("Translation Not Found")]
    TranslationNotFound,

    /// HTTP请求错误
    #[error("HTTP error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Not Implemented: {0}")]
    NotImplemented(&'static str),

    /// 配置错误
    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),
}

impl TranslationError {
    /// 调用方是否值得重试
    ///
    /// 库本身从不重试，这里只给调用方一个判断依据。
    pub fn is_retryable(&self) -> bool {
        matches!(self, TranslationError::RateLimited | TranslationError::Network(_))
    }
}

/// 翻译结果类型别名
///
/// # 示例
///
/// ```rust
/// use html_translator::{Result, TranslationError};
///
/// fn check(text: &str) -> Result<&str> {
///     if text.is_empty() {
///         return Err(TranslationError::InvalidInput { length: 0, max: 5000 });
///     }
///     Ok(text)
/// }
///
/// assert!(check("").is_err());
/// ```
pub type Result<T> = std::result::Result<T, TranslationError>;
