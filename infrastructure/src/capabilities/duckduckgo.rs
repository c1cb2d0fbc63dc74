//! Web search adapter backed by the DuckDuckGo Instant Answer API.
//!
//! The [Instant Answer API](https://api.duckduckgo.com/):
//! - Requires **no API key** (no configuration burden)
//! - Returns instant answers, abstracts, definitions, and related topics
//! - Does not return full web search result listings
//!
//! # Output Format
//!
//! Results are formatted as markdown with sections:
//! - **Summary**: abstract text with source attribution
//! - **Instant Answer**: direct factual answers
//! - **Definition**: dictionary-style definitions
//! - **Related Topics**: up to `max_related_topics` related links
//! - **Redirect**: for !bang-style queries
//!
//! When none of these sections is populated the adapter returns an empty
//! string, which the orchestrator reports as "no results".

use super::http::{build_client, transport_fault};
use crate::config::FileSearchConfig;
use async_trait::async_trait;
use router_application::{CapabilityFault, WebSearch};
use serde_json::Value;
use std::time::{Duration, Instant};
use tracing::debug;

/// Web search adapter for the DuckDuckGo Instant Answer API
pub struct DuckDuckGoSearch {
    client: reqwest::Client,
    endpoint: String,
    max_related_topics: usize,
}

impl DuckDuckGoSearch {
    pub fn new(client: reqwest::Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
            max_related_topics: 10,
        }
    }

    pub fn with_max_related_topics(mut self, max: usize) -> Self {
        self.max_related_topics = max;
        self
    }

    /// Build the adapter (and its HTTP client) from the `[search]` section
    pub fn from_config(config: &FileSearchConfig) -> Result<Self, reqwest::Error> {
        let client = build_client(Duration::from_secs(config.timeout_seconds))?;
        Ok(Self::new(client, &config.endpoint).with_max_related_topics(config.max_related_topics))
    }
}

#[async_trait]
impl WebSearch for DuckDuckGoSearch {
    async fn search(&self, query: &str) -> Result<Value, CapabilityFault> {
        let start = Instant::now();

        let response = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("q", query),
                ("format", "json"),
                ("no_html", "1"),
                ("skip_disambig", "1"),
            ])
            .send()
            .await
            .map_err(transport_fault)?;

        if !response.status().is_success() {
            return Err(CapabilityFault::RequestFailed(format!(
                "Search API returned error: {}",
                response.status()
            )));
        }

        let body: Value = response.json().await.map_err(|e| {
            CapabilityFault::InvalidResponse(format!("Failed to parse search results: {}", e))
        })?;

        let output = format_search_results(query, &body, self.max_related_topics);
        debug!(
            "DuckDuckGo answered in {}ms ({} bytes)",
            start.elapsed().as_millis(),
            output.len()
        );
        Ok(Value::String(output))
    }
}

/// Format a DuckDuckGo API response into a readable markdown document.
///
/// Returns an empty string when the response carries no usable section.
fn format_search_results(query: &str, data: &Value, max_related_topics: usize) -> String {
    let mut sections: Vec<String> = Vec::new();

    // Abstract (main answer)
    if let Some(abstract_text) = non_empty_str(&data["AbstractText"]) {
        let source = data["AbstractSource"].as_str().unwrap_or("Unknown");
        let url = data["AbstractURL"].as_str().unwrap_or("");
        sections.push(format!(
            "### Summary ({})\n{}\nSource: {}",
            source, abstract_text, url
        ));
    }

    if let Some(answer) = non_empty_str(&data["Answer"]) {
        sections.push(format!("### Instant Answer\n{}", answer));
    }

    if let Some(definition) = non_empty_str(&data["Definition"]) {
        let source = data["DefinitionSource"].as_str().unwrap_or("Unknown");
        sections.push(format!("### Definition ({})\n{}", source, definition));
    }

    let topics = related_topics(&data["RelatedTopics"], max_related_topics);
    if !topics.is_empty() {
        sections.push(format!("### Related Topics\n{}", topics.join("\n")));
    }

    if let Some(redirect) = non_empty_str(&data["Redirect"]) {
        sections.push(format!("### Redirect\n{}", redirect));
    }

    if sections.is_empty() {
        return String::new();
    }

    sections.insert(0, format!("## Search Results for: {}", query));
    sections.join("\n\n")
}

/// Flatten related topics, descending into named topic groups
fn related_topics(value: &Value, max: usize) -> Vec<String> {
    let Some(topics) = value.as_array() else {
        return Vec::new();
    };

    topics
        .iter()
        .flat_map(|topic| match topic["Topics"].as_array() {
            Some(group) => group.iter().collect::<Vec<_>>(),
            None => vec![topic],
        })
        .filter_map(|topic| {
            let text = non_empty_str(&topic["Text"])?;
            let url = topic["FirstURL"].as_str().unwrap_or("");
            Some(format!("- {} ({})", text, url))
        })
        .take(max)
        .collect()
}

fn non_empty_str(value: &Value) -> Option<&str> {
    value.as_str().filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_search_results_with_abstract() {
        let data = serde_json::json!({
            "AbstractText": "Rust is a systems programming language.",
            "AbstractSource": "Wikipedia",
            "AbstractURL": "https://en.wikipedia.org/wiki/Rust_(programming_language)",
            "Answer": "",
            "Definition": "",
            "RelatedTopics": [],
            "Redirect": ""
        });

        let output = format_search_results("Rust programming", &data, 10);
        assert!(output.starts_with("## Search Results for: Rust programming"));
        assert!(output.contains("systems programming language"));
        assert!(output.contains("Wikipedia"));
    }

    #[test]
    fn test_format_search_results_empty() {
        let data = serde_json::json!({
            "AbstractText": "",
            "Answer": "",
            "Definition": "",
            "RelatedTopics": [],
            "Redirect": ""
        });

        assert_eq!(format_search_results("obscure query", &data, 10), "");
    }

    #[test]
    fn test_format_search_results_with_related_topics() {
        let data = serde_json::json!({
            "RelatedTopics": [
                {
                    "Text": "Topic 1 description",
                    "FirstURL": "https://example.com/1"
                },
                {
                    "Name": "Group",
                    "Topics": [
                        {
                            "Text": "Nested topic",
                            "FirstURL": "https://example.com/n"
                        }
                    ]
                },
                {
                    "Text": "Topic 2 description",
                    "FirstURL": "https://example.com/2"
                }
            ]
        });

        let output = format_search_results("test", &data, 10);
        assert!(output.contains("Related Topics"));
        assert!(output.contains("- Topic 1 description (https://example.com/1)"));
        assert!(output.contains("Nested topic"));
        assert!(output.contains("Topic 2 description"));
    }

    #[test]
    fn test_related_topics_are_capped() {
        let topics: Vec<Value> = (0..20)
            .map(|i| serde_json::json!({"Text": format!("topic {i}"), "FirstURL": ""}))
            .collect();
        let data = serde_json::json!({ "RelatedTopics": topics });

        let output = format_search_results("many", &data, 3);
        assert!(output.contains("topic 2"));
        assert!(!output.contains("topic 3"));
    }

    #[test]
    fn test_answer_and_redirect_sections() {
        let data = serde_json::json!({
            "Answer": "42",
            "Redirect": "https://example.com"
        });

        let output = format_search_results("answer", &data, 10);
        assert!(output.contains("### Instant Answer\n42"));
        assert!(output.contains("### Redirect\nhttps://example.com"));
    }
}
