//! Core data types for the binding corpus.

use clap::Parser;
use serde::{Deserialize, Serialize};

use crate::bindings::{BindingRecord, FeatureSet};

// ─── Corpus ──────────────────────────────────────────────────────────

/// Bindings extracted from one source file.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct FileBindings {
    pub path: String,
    pub bindings: Vec<BindingRecord>,
}

#[derive(Serialize, Deserialize, Debug, Default)]
pub struct Corpus {
    pub root: String,
    /// Sorted by path
    pub files: Vec<FileBindings>,
    /// Files that could not be read or parsed.
    pub read_errors: usize,
    /// Files that contained non-UTF8 bytes and were read with lossy conversion.
    pub lossy_files: Vec<String>,
}

impl Corpus {
    pub fn binding_count(&self) -> usize {
        self.files.iter().map(|f| f.bindings.len()).sum()
    }
}

/// One JSON Lines row of the corpus output.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CorpusRow {
    pub file: String,
    pub name: String,
    pub line: u32,
    pub column: u32,
    pub features: FeatureSet,
}

// ─── CLI args ────────────────────────────────────────────────────────

#[derive(Parser, Debug, Clone)]
pub struct CorpusArgs {
    /// Directory to recursively scan for source files
    #[arg(short, long, default_value = ".")]
    pub dir: String,

    /// File extensions to parse, comma-separated. Every file is parsed
    /// with the tree-sitter-java grammar.
    #[arg(short, long, default_value = "java")]
    pub ext: String,

    /// Number of parallel parsing threads. Each thread gets its own
    /// tree-sitter parser instance. 0 = auto-detect CPU cores.
    #[arg(short, long, default_value = "0")]
    pub threads: usize,
}
