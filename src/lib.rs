//! Support chat mediator library.
//!
//! Sits between a user's free-text message and a generative language model:
//! crisis-keyword safety gate, bounded conversation-context windowing,
//! prompt construction, response sanitization, and coping-strategy lookup.
//! The binary (`main.rs`) and integration tests (`tests/`) both import from
//! this crate root.

pub mod config;
pub mod coping;
pub mod error;
pub mod history;
pub mod lexicon;
pub mod llm_api;
pub mod oracle;
pub mod pipeline;
pub mod prompt;
pub mod safety;
pub mod sanitize;
pub mod store;
pub mod types;
