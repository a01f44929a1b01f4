use crate::core::faq::{KnowledgeError, KnowledgeSource, RawEntry};
use async_trait::async_trait;
use std::fmt;
use std::path::PathBuf;

/// Dataset compiled into the binary, used when no file is configured.
const BUNDLED_KNOWLEDGE_BASE: &str = include_str!("../../../data/knowledge_base.json");

enum Origin {
    File(PathBuf),
    Bundled,
}

/// Knowledge source reading a JSON array of entries:
/// `[{ "keywords": [...], "question": "...", "answer": "...", "category": "..." }]`
pub struct JsonKnowledgeSource {
    origin: Origin,
}

impl JsonKnowledgeSource {
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        Self {
            origin: Origin::File(path.into()),
        }
    }

    pub fn bundled() -> Self {
        Self {
            origin: Origin::Bundled,
        }
    }

    fn parse(json: &str) -> Result<Vec<RawEntry>, KnowledgeError> {
        Ok(serde_json::from_str(json)?)
    }
}

impl fmt::Display for JsonKnowledgeSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.origin {
            Origin::File(path) => write!(f, "{}", path.display()),
            Origin::Bundled => write!(f, "bundled knowledge base"),
        }
    }
}

#[async_trait]
impl KnowledgeSource for JsonKnowledgeSource {
    async fn load_entries(&self) -> Result<Vec<RawEntry>, KnowledgeError> {
        match &self.origin {
            Origin::File(path) => {
                let json = tokio::fs::read_to_string(path).await?;
                Self::parse(&json)
            }
            Origin::Bundled => Self::parse(BUNDLED_KNOWLEDGE_BASE),
        }
    }
}
