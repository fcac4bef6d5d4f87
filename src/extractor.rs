//! HTML 结果提取模块
//!
//! 按标签和 class 在翻译页面中定位结果元素。这依赖远端页面的结构，
//! 页面改版后选择器可能失效。

use crate::error::{Result, TranslationError};
use crate::types::{FALLBACK_SELECTOR, PRIMARY_SELECTOR, RESULT_TAG};
use scraper::{Html, Selector};

/// 翻译结果提取器
///
/// 先查找带主 class 的元素，找不到时再查找带备用 class 的元素。
#[derive(Debug, Clone)]
pub struct ResultExtractor {
    primary: Selector,
    fallback: Selector,
}

impl ResultExtractor {
    /// 创建提取器
    ///
    /// # 参数
    ///
    /// * `tag` - 元素标签，例如 `div`
    /// * `primary_class` - 主 class
    /// * `fallback_class` - 备用 class
    pub fn new(tag: &str, primary_class: &str, fallback_class: &str) -> Result<Self> {
        Ok(Self {
            primary: parse_selector(tag, primary_class)?,
            fallback: parse_selector(tag, fallback_class)?,
        })
    }

    /// 使用 `div.t0` / `div.result-container` 的提取器
    pub fn google() -> Result<Self> {
        Self::new(RESULT_TAG, PRIMARY_SELECTOR, FALLBACK_SELECTOR)
    }

    /// Extract the trimmed text of the first matching element.
    pub fn extract(&self, html: &str) -> Result<String> {
        let document = Html::parse_document(html);

        let element = document
            .select(&self.primary)
            .next()
            .or_else(|| document.select(&self.fallback).next())
            .ok_or(TranslationError::TranslationNotFound)?;

        Ok(element.text().collect::<String>().trim().to_string())
    }
}

fn parse_selector(tag: &str, class: &str) -> Result<Selector> {
    let css = format!("{}.{}", tag, class);
    Selector::parse(&css)
        .map_err(|e| TranslationError::Config(format!("invalid selector `{}`: {:?}", css, e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extractor() -> ResultExtractor {
        ResultExtractor::google().unwrap()
    }

    #[test]
    fn primary_selector_wins() {
        let html = r#"<html><body>
            <div class="result-container">Salut</div>
            <div class="t0">  Hola  </div>
        </body></html>"#;
        assert_eq!(extractor().extract(html).unwrap(), "Hola");
    }

    #[test]
    fn falls_back_to_result_container() {
        let html = r#"<div class="result-container">Bonjour</div>"#;
        assert_eq!(extractor().extract(html).unwrap(), "Bonjour");
    }

    #[test]
    fn matches_class_among_several() {
        let html = r#"<div class="wrapper t0 big">Hallo <b>Welt</b></div>"#;
        assert_eq!(extractor().extract(html).unwrap(), "Hallo Welt");
    }

    #[test]
    fn takes_first_match_only() {
        let html = r#"<div class="t0">eins</div><div class="t0">zwei</div>"#;
        assert_eq!(extractor().extract(html).unwrap(), "eins");
    }

    #[test]
    fn ignores_other_tags() {
        let html = r#"<span class="t0">nope</span>"#;
        assert!(matches!(
            extractor().extract(html),
            Err(TranslationError::TranslationNotFound)
        ));
    }

    #[test]
    fn not_found() {
        let html = "<html><body><p>nothing here</p></body></html>";
        assert!(matches!(
            extractor().extract(html),
            Err(TranslationError::TranslationNotFound)
        ));
    }

    #[test]
    fn invalid_selector_is_config_error() {
        assert!(matches!(
            ResultExtractor::new("div", "[[", "ok"),
            Err(TranslationError::Config(_))
        ));
    }
}
