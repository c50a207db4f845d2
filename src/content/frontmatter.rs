//! Front-matter parsing for content record files

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::record::{ContentKind, ContentStatus, RecordId};

/// Front-matter parsing errors
#[derive(Error, Debug)]
pub enum FrontMatterError {
    #[error("Invalid YAML front-matter: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid JSON front-matter: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unterminated front-matter block")]
    Unterminated,
}

/// Front-matter of a content record file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FrontMatter {
    pub id: Option<RecordId>,
    #[serde(rename = "type")]
    pub kind: Option<ContentKind>,
    pub status: Option<ContentStatus>,
    pub title: Option<String>,
    pub slug: Option<String>,
}

impl FrontMatter {
    /// Parse front-matter from content string
    /// Returns (front_matter, remaining_content)
    pub fn parse(content: &str) -> Result<(Self, &str), FrontMatterError> {
        let content = content.trim_start();

        if content.starts_with("---") {
            return Self::parse_yaml(content);
        }

        if content.starts_with(";;;") {
            return Self::parse_json(content);
        }

        Ok((FrontMatter::default(), content))
    }

    fn parse_yaml(content: &str) -> Result<(Self, &str), FrontMatterError> {
        let rest = &content[3..];
        let rest = rest.trim_start_matches(['\n', '\r']);

        // An empty block closes immediately with "---"
        let (yaml_content, remaining) = if let Some(after) = rest.strip_prefix("---") {
            ("", after)
        } else {
            let end_pos = rest.find("\n---").ok_or(FrontMatterError::Unterminated)?;
            (&rest[..end_pos], &rest[end_pos + 4..])
        };
        let remaining = remaining.trim_start_matches(['\n', '\r']);

        if yaml_content.trim().is_empty() {
            return Ok((FrontMatter::default(), remaining));
        }

        let fm: FrontMatter = serde_yaml::from_str(yaml_content)?;
        Ok((fm, remaining))
    }

    fn parse_json(content: &str) -> Result<(Self, &str), FrontMatterError> {
        let rest = &content[3..];
        let end_pos = rest.find(";;;").ok_or(FrontMatterError::Unterminated)?;
        let json_content = rest[..end_pos].trim();
        let remaining = rest[end_pos + 3..].trim_start_matches(['\n', '\r']);

        // The braces around a JSON block are optional
        let fm: FrontMatter = if json_content.starts_with('{') {
            serde_json::from_str(json_content)?
        } else {
            serde_json::from_str(&format!("{{{}}}", json_content))?
        };

        Ok((fm, remaining))
    }

    /// Render this front-matter as a YAML block, ready to prepend to a body
    pub fn to_yaml_block(&self) -> Result<String, FrontMatterError> {
        let yaml = serde_yaml::to_string(self)?;
        Ok(format!("---\n{}---\n", yaml))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_yaml_frontmatter() {
        let content = r#"---
id: 5
type: page
status: live
title: Our Services
slug: services
---

We build things.
"#;

        let (fm, remaining) = FrontMatter::parse(content).unwrap();
        assert_eq!(fm.id, Some(RecordId::from(5u64)));
        assert_eq!(fm.kind, Some(ContentKind::Page));
        assert_eq!(fm.status, Some(ContentStatus::Live));
        assert_eq!(fm.title.as_deref(), Some("Our Services"));
        assert_eq!(fm.slug.as_deref(), Some("services"));
        assert!(remaining.starts_with("We build things."));
    }

    #[test]
    fn test_parse_json_frontmatter() {
        let content = r#";;;
"id": "17", "type": "page-collection", "title": "Featured"
;;;
Body text.
"#;

        let (fm, remaining) = FrontMatter::parse(content).unwrap();
        assert_eq!(fm.id, Some(RecordId::new("17")));
        assert_eq!(fm.kind, Some(ContentKind::PageCollection));
        assert_eq!(fm.status, None);
        assert!(remaining.contains("Body text."));
    }

    #[test]
    fn test_no_frontmatter() {
        let (fm, remaining) = FrontMatter::parse("Just words here.").unwrap();
        assert_eq!(fm, FrontMatter::default());
        assert_eq!(remaining, "Just words here.");
    }

    #[test]
    fn test_empty_block() {
        let (fm, remaining) = FrontMatter::parse("---\n---\nBody").unwrap();
        assert_eq!(fm, FrontMatter::default());
        assert_eq!(remaining, "Body");
    }

    #[test]
    fn test_unterminated_block() {
        let err = FrontMatter::parse("---\ntitle: Oops\nno closing").unwrap_err();
        assert!(matches!(err, FrontMatterError::Unterminated));
    }

    #[test]
    fn test_yaml_block_roundtrip() {
        let fm = FrontMatter {
            id: Some(RecordId::from(3u64)),
            kind: Some(ContentKind::PageCollection),
            status: Some(ContentStatus::Draft),
            title: Some("Team".to_string()),
            slug: Some("team".to_string()),
        };
        let block = fm.to_yaml_block().unwrap();
        assert!(block.starts_with("---\n"));
        assert!(block.contains("type: page-collection"));

        let (parsed, _) = FrontMatter::parse(&block).unwrap();
        assert_eq!(parsed, fm);
    }
}
