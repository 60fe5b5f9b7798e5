use std::collections::BTreeMap;

use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
/// Locale code to text mapping (`{"en": "...", "ru": "..."}`).
///
/// The last value written for a locale wins. Keys serialize in sorted order.
pub struct LocalizedContent(BTreeMap<String, String>);

impl LocalizedContent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, locale: impl Into<String>, text: impl Into<String>) -> &mut Self {
        self.0.insert(locale.into(), text.into());
        self
    }

    pub fn get(&self, locale: &str) -> Option<&str> {
        self.0.get(locale).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Message body and title for one locale.
pub struct Content {
    pub locale: String,
    pub message: String,
    pub title: String,
}

impl Content {
    pub fn new(
        locale: impl Into<String>,
        message: impl Into<String>,
        title: impl Into<String>,
    ) -> Self {
        Self {
            locale: locale.into(),
            message: message.into(),
            title: title.into(),
        }
    }

    pub fn english(message: impl Into<String>, title: impl Into<String>) -> Self {
        Self::new("en", message, title)
    }

    pub fn russian(message: impl Into<String>, title: impl Into<String>) -> Self {
        Self::new("ru", message, title)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
/// Ordered list of device identifiers. Duplicates are kept.
pub struct DeviceIds(Vec<String>);

impl DeviceIds {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_device(&mut self, id: impl Into<String>) -> &mut Self {
        self.0.push(id.into());
        self
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn localized_content_last_write_wins() {
        let mut content = LocalizedContent::new();
        content.add("en", "first").add("de", "zweite").add("en", "second");

        assert_eq!(content.len(), 2);
        assert_eq!(content.get("en"), Some("second"));
        assert_eq!(
            serde_json::to_string(&content).unwrap(),
            r#"{"de":"zweite","en":"second"}"#
        );
    }

    #[test]
    fn device_ids_keep_insertion_order_and_duplicates() {
        let mut ids = DeviceIds::new();
        ids.add_device("b").add_device("a").add_device("b");
        assert_eq!(serde_json::to_string(&ids).unwrap(), r#"["b","a","b"]"#);
    }

    #[test]
    fn locale_helpers_use_matching_codes() {
        assert_eq!(Content::english("hi", "t").locale, "en");
        assert_eq!(Content::russian("привет", "т").locale, "ru");
    }
}
