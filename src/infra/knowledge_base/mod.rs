// Knowledge base infrastructure - JSON dataset loading

mod json_source;

pub use json_source::JsonKnowledgeSource;
