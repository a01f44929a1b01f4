// The core module contains all business logic.
// Each feature gets its own submodule.

#[path = "faq/mod.rs"]
pub mod faq;
