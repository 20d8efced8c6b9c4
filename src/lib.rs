//! # namebind: name-binding extraction for method invocations
//!
//! Collects method-invocation name occurrences from a syntax tree and, for
//! each occurrence, a bag of feature labels describing its context. Each
//! occurrence is its own binding: same-named calls are never merged, since
//! syntax alone cannot say which declaration a call dispatches to.
//!
//! ## Library usage
//!
//! ```
//! use namebind::bindings::{MethodInvocationBindings, NameBindingsExtractor};
//! use namebind::tree::java::JavaFrontend;
//!
//! let mut frontend = JavaFrontend::new().unwrap();
//! let tree = frontend.parse("class A { void run() { go(1); } }").unwrap();
//! let records = MethodInvocationBindings::new().extract(&tree, tree.root()).unwrap();
//! assert!(records[0].features.contains("nArgs:1"));
//! assert!(records[0].features.contains("inName:run"));
//! ```

pub mod bindings;
pub mod corpus;
pub mod error;
pub mod tree;

pub use error::{BindingError, Result};

// ─── File helpers ────────────────────────────────────────────────────

/// Strip the `\\?\` extended-length path prefix that Windows canonicalize adds.
#[must_use]
pub fn clean_path(p: &str) -> String {
    p.strip_prefix(r"\\?\").unwrap_or(p).to_string()
}

/// Read a file as a String, using lossy UTF-8 conversion for non-UTF8 files.
/// Returns `(content, was_lossy)` where `was_lossy` is true if replacement characters
/// were inserted.
pub fn read_file_lossy(path: &std::path::Path) -> std::io::Result<(String, bool)> {
    let raw = std::fs::read(path)?;
    match String::from_utf8(raw) {
        Ok(s) => Ok((s, false)),
        Err(e) => Ok((String::from_utf8_lossy(e.as_bytes()).into_owned(), true)),
    }
}

// ─── Identifier tokenizer ────────────────────────────────────────────

/// Split an identifier into lowercase word parts.
///
/// Splits on `_`, then at camel-case boundaries: before an uppercase letter
/// that follows a non-uppercase character, and before an uppercase letter
/// followed by a lowercase one (so acronym runs stay together but are split
/// from a following word). Only ASCII letters count as upper/lowercase.
///
/// # Examples
///
/// ```
/// use namebind::tokenize_identifier;
///
/// assert_eq!(tokenize_identifier("getHTTPResponseCode"), ["get", "http", "response", "code"]);
/// assert_eq!(tokenize_identifier("parse_XML_Input"), ["parse", "xml", "input"]);
/// assert!(tokenize_identifier("").is_empty());
/// ```
#[must_use]
pub fn tokenize_identifier(name: &str) -> Vec<String> {
    let mut parts = Vec::new();
    for segment in name.split('_') {
        let chars: Vec<char> = segment.chars().collect();
        let mut start = 0;
        for i in 1..chars.len() {
            if !chars[i].is_ascii_uppercase() {
                continue;
            }
            let after_lower = !chars[i - 1].is_ascii_uppercase();
            let before_lower = chars.get(i + 1).is_some_and(|c| c.is_ascii_lowercase());
            if after_lower || before_lower {
                parts.push(chars[start..i].iter().collect::<String>().to_lowercase());
                start = i;
            }
        }
        if start < chars.len() {
            parts.push(chars[start..].iter().collect::<String>().to_lowercase());
        }
    }
    parts
}


// ─── Property-based tests (proptest) ─────────────────────────────────
