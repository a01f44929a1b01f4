// Core FAQ module - knowledge store, matcher and the service on top.

pub mod faq_models;
pub mod faq_service;
pub mod knowledge_store;
pub mod matcher;

pub use faq_models::{FaqConfig, FaqReply, RawEntry};
pub use faq_service::FaqService;
pub use knowledge_store::{KnowledgeError, KnowledgeSource, KnowledgeStore};
