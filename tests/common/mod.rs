//! Shared fixtures for the pagemark integration tests

#![allow(dead_code)]

use async_trait::async_trait;
use pagemark::{NavigationOptions, PageSnapshot, RenderError, RenderingProvider};
use std::sync::Mutex;

/// Serves one canned snapshot and records every URL and navigation options it saw.
pub struct FakeProvider {
    html: String,
    status: Option<u16>,
    pub seen: Mutex<Vec<(String, NavigationOptions)>>,
}

impl FakeProvider {
    pub fn new(html: &str, status: Option<u16>) -> Self {
        Self {
            html: html.to_string(),
            status,
            seen: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl RenderingProvider for FakeProvider {
    async fn fetch(&self, url: &str, options: &NavigationOptions) -> Result<PageSnapshot, RenderError> {
        self.seen
            .lock()
            .unwrap()
            .push((url.to_string(), *options));
        Ok(PageSnapshot {
            html: self.html.clone(),
            status: self.status,
        })
    }
}

/// Always fails the way a missing browser would.
pub struct BrokenProvider;

#[async_trait]
impl RenderingProvider for BrokenProvider {
    async fn fetch(&self, _url: &str, _options: &NavigationOptions) -> Result<PageSnapshot, RenderError> {
        Err(RenderError::Launch("no browser in test environment".to_string()))
    }
}

/// Creates a test HTML document with specified title and body
pub fn create_test_html(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>{}</title>
</head>
<body>
    {}
</body>
</html>"#,
        html_escape::encode_text(title),
        body
    )
}
