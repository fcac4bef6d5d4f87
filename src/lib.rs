//! # HTML Translator
//!
//! 一个轻量的Rust翻译客户端：请求 Google 翻译移动版页面，从返回的HTML中提取译文。
//!
//! ## 主要特性
//!
//! - **HTML提取**: 按 `div.t0` 查找译文，找不到时回退到 `div.result-container`
//! - **代理支持**: 可选的HTTP代理，支持用户名/密码认证
//! - **批量翻译**: 并发发出所有请求，结果顺序与输入一致
//! - **配置灵活**: 支持TOML配置文件和程序化配置
//!
//! 库本身不做重试：限流（429）、找不到译文和网络错误都直接返回给调用方。
//!
//! ## 快速开始
//!
//! ```rust,no_run
//! use html_translator::{ProxyConfig, TranslationClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let proxy = ProxyConfig::new("127.0.0.1", 8080).with_credentials("user", "secret");
//!     let translator = TranslationClient::new("auto", "es", proxy.into())?;
//!
//!     let result = translator.translate("Hello, world!").await?;
//!     println!("Translation: {}", result);
//!
//!     let batch = translator.translate_batch(&["Hi", "Bye"]).await?;
//!     println!("Batch: {:?}", batch);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## 配置文件支持
//!
//! ```toml
//! [translation]
//! source_lang = "auto"
//! target_lang = "es"
//! endpoint = "https://translate.google.com/m"
//! max_text_length = 5000
//! max_concurrency = 4
//!
//! [translation.proxy]
//! host = "127.0.0.1"
//! port = 8080
//!
//! [translation.proxy.credentials]
//! username = "user"
//! password = "secret"
//! ```

pub mod config;
pub mod error;
pub mod extractor;
pub mod types;
pub mod translator;

pub use config::TranslationLibConfig;
pub use error::{Result, TranslationError};
pub use extractor::ResultExtractor;
pub use types::{
    ProxyConfig, ProxyCredentials, ProxySetting, TranslationConfig, DEFAULT_ENDPOINT,
    FALLBACK_SELECTOR, MAX_TEXT_LENGTH, PRIMARY_SELECTOR, RESULT_TAG,
};
pub use translator::TranslationClient;
