//! 翻译客户端核心模块
//!
//! 请求翻译页面、解析返回的HTML并提取译文，支持HTTP代理和并发批量翻译。

use crate::error::{Result, TranslationError};
use crate::extractor::ResultExtractor;
use crate::types::{ProxySetting, TranslationConfig};
use futures::future::try_join_all;
use reqwest::{Client, StatusCode};
use std::path::Path;
use std::time::Duration;
use tokio::sync::Semaphore;

const USER_AGENT: &str =
    "Mozilla/5.0 (Linux; Android 10; K) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0 Mobile Safari/537.36";

/// 翻译客户端
///
/// 每个实例对应一组语言对和代理设置，构建后不再改变。
///
/// # 示例
///
/// ```rust,no_run
/// use html_translator::{ProxySetting, TranslationClient};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = TranslationClient::new("auto", "es", ProxySetting::NoProxy)?;
///
///     let result = client.translate("Hi").await?;
///     println!("Translation: {}", result);
///
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct TranslationClient {
    /// HTTP客户端，代理在构建时配置
    client: Client,
    extractor: ResultExtractor,
    proxy: ProxySetting,
    config: TranslationConfig,
}

impl TranslationClient {
    /// 创建新的翻译客户端
    ///
    /// 语言代码不做校验，无效的代码只会在远端处理请求时暴露。
    ///
    /// # 参数
    ///
    /// * `source_lang` - 源语言代码，"auto"表示自动检测
    /// * `target_lang` - 目标语言代码
    /// * `proxy` - 代理设置
    pub fn new(
        source_lang: impl Into<String>,
        target_lang: impl Into<String>,
        proxy: ProxySetting,
    ) -> Result<Self> {
        let config = TranslationConfig {
            source_lang: source_lang.into(),
            target_lang: target_lang.into(),
            ..TranslationConfig::default()
        };
        Self::build(config, proxy)
    }

    /// `auto` → `en`，不使用代理
    pub fn with_defaults() -> Result<Self> {
        Self::new("auto", "en", ProxySetting::NoProxy)
    }

    /// 从配置创建客户端
    pub fn from_config(mut config: TranslationConfig) -> Result<Self> {
        let proxy = ProxySetting::from(config.proxy.take());
        Self::build(config, proxy)
    }

    fn build(config: TranslationConfig, proxy: ProxySetting) -> Result<Self> {
        let mut builder = Client::builder()
            .pool_idle_timeout(Duration::from_secs(30))
            .pool_max_idle_per_host(5)
            .tcp_keepalive(Duration::from_secs(60))
            .user_agent(USER_AGENT);

        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        builder = match &proxy {
            ProxySetting::NoProxy => builder.no_proxy(),
            ProxySetting::Via(proxy_config) => {
                let url = proxy_config.url();
                let tunnel = reqwest::Proxy::all(&url).map_err(|e| {
                    TranslationError::Config(format!(
                        "invalid proxy {}:{}: {}",
                        proxy_config.host, proxy_config.port, e
                    ))
                })?;
                builder.proxy(tunnel)
            }
        };

        let client = builder
            .build()
            .map_err(|e| TranslationError::Config(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            extractor: ResultExtractor::google()?,
            proxy,
            config,
        })
    }

    pub fn source_lang(&self) -> &str {
        &self.config.source_lang
    }

    pub fn target_lang(&self) -> &str {
        &self.config.target_lang
    }

    pub fn endpoint(&self) -> &str {
        &self.config.endpoint
    }

    /// 覆盖翻译页面地址
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.config.endpoint = endpoint.into();
        self
    }

    pub fn proxy(&self) -> &ProxySetting {
        &self.proxy
    }

    /// 请求使用的代理连接 URL，直连时为 `None`
    pub fn proxy_url(&self) -> Option<String> {
        self.proxy.url()
    }

    /// 翻译文本
    ///
    /// # 参数
    ///
    /// * `text` - 要翻译的文本，长度必须在 1 到 `max_text_length` 之间。
    ///   长度按 UTF-16 码元计算：BMP 以外的字符（如 emoji）算作 2。
    ///
    /// # 返回
    ///
    /// * `Ok(String)` - 去掉首尾空白后的译文
    /// * `Err(TranslationError)` - 输入无效、被限流、找不到译文或网络错误
    pub async fn translate(&self, text: &str) -> Result<String> {
        self.validate_input(text)?;

        let params = [
            ("sl", self.config.source_lang.as_str()),
            ("tl", self.config.target_lang.as_str()),
            ("q", text.trim()),
        ];

        tracing::debug!(
            endpoint = %self.config.endpoint,
            sl = %self.config.source_lang,
            tl = %self.config.target_lang,
            length = text.encode_utf16().count(),
            proxied = matches!(self.proxy, ProxySetting::Via(_)),
            "sending translation request"
        );

        let response = self
            .client
            .get(&self.config.endpoint)
            .query(&params)
            .send()
            .await?;

        let status = response.status();
        tracing::debug!(%status, "translation response received");

        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(TranslationError::RateLimited);
        }

        let body = response.text().await?;
        self.extractor.extract(&body)
    }

    /// 翻译文件内容
    ///
    /// 尚未实现，总是返回 `NotImplemented`，不读取文件。
    pub async fn translate_file<P: AsRef<Path>>(&self, _path: P) -> Result<String> {
        Err(TranslationError::NotImplemented("translate_file"))
    }

    /// 批量翻译
    ///
    /// 所有请求并发发出，结果顺序与输入一致。任意一条失败则整个批次失败，
    /// 不返回部分结果。配置了 `max_concurrency` 时用信号量限制同时进行的请求数。
    pub async fn translate_batch<S>(&self, texts: &[S]) -> Result<Vec<String>>
    where
        S: AsRef<str> + Sync,
    {
        let limiter = self
            .config
            .max_concurrency
            .map(|n| Semaphore::new(n.clamp(1, Semaphore::MAX_PERMITS)));
        let limiter = limiter.as_ref();

        tracing::debug!(
            count = texts.len(),
            max_concurrency = ?self.config.max_concurrency,
            "starting batch translation"
        );

        let tasks = texts.iter().map(|text| async move {
            // 信号量不会被关闭，acquire 只会成功
            let _permit = match limiter {
                Some(semaphore) => semaphore.acquire().await.ok(),
                None => None,
            };
            self.translate(text.as_ref()).await
        });

        try_join_all(tasks).await
    }

    fn validate_input(&self, text: &str) -> Result<()> {
        let length = text.encode_utf16().count();
        let max = self.config.max_text_length;

        if length == 0 || length > max {
            return Err(TranslationError::InvalidInput { length, max });
        }
        Ok(())
    }
}
