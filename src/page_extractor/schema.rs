use serde::{Deserialize, Serialize};

/// Metadata read from the original rendered document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMetadata {
    pub title: String,
    pub published_time: Option<String>,
}

/// Result of converting one page, serialized as the JSON response body
///
/// `publishedTime` is always present and serializes as `null` when unknown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractionResult {
    pub title: String,
    pub url_source: String,
    pub published_time: Option<String>,
    pub markdown_content: String,
}

impl ExtractionResult {
    #[must_use]
    pub fn new(metadata: PageMetadata, url_source: impl Into<String>, markdown_content: String) -> Self {
        Self {
            title: metadata.title,
            url_source: url_source.into(),
            published_time: metadata.published_time,
            markdown_content,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_field_names() -> anyhow::Result<()> {
        let result = ExtractionResult::new(
            PageMetadata {
                title: "T".to_string(),
                published_time: None,
            },
            "https://example.com",
            "body".to_string(),
        );
        let value = serde_json::to_value(&result)?;
        assert_eq!(
            value,
            serde_json::json!({
                "title": "T",
                "urlSource": "https://example.com",
                "publishedTime": null,
                "markdownContent": "body"
            })
        );
        Ok(())
    }
}
