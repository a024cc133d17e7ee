//! Helpers for reading mapping documents from disk.
//!
//! Documents are decoded into [`serde_json::Value`] so every supported
//! format feeds the same merge engine. The decoder is chosen from the file
//! extension; see [`DocumentFormat`].

mod error;
mod loader;
mod parser;

pub use loader::load_document;
pub use parser::{DocumentFormat, parse_document};

#[cfg(test)]
mod tests;
