//! Binding corpus: walks a source tree, extracts method-invocation bindings
//! from every matching file and serializes them as JSON Lines.

mod types;

pub use types::*;

use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Instant;

use ignore::WalkBuilder;
use tracing::{info, warn};

use crate::bindings::{MethodInvocationBindings, NameBindingsExtractor};
use crate::error::{BindingError, Result};
use crate::tree::java::JavaFrontend;
use crate::{clean_path, read_file_lossy};

// ─── Corpus build ────────────────────────────────────────────────────

/// Per-thread result: (extracted files, read/parse errors, lossy paths).
type ChunkResult = (Vec<FileBindings>, usize, Vec<String>);

pub fn build_corpus(args: &CorpusArgs) -> Result<Corpus> {
    let dir = Path::new(&args.dir);
    if !dir.is_dir() {
        return Err(BindingError::DirNotFound(args.dir.clone()));
    }
    let dir = std::fs::canonicalize(dir).unwrap_or_else(|_| PathBuf::from(&args.dir));
    let dir_str = clean_path(&dir.to_string_lossy());

    let extensions: Vec<String> = args.ext.split(',')
        .map(|s| s.trim().trim_start_matches('.').to_lowercase())
        .filter(|s| !s.is_empty())
        .collect();
    if extensions.is_empty() {
        return Err(BindingError::InvalidArgs(format!("No file extensions in '{}'", args.ext)));
    }

    let start = Instant::now();
    let files = collect_files(&dir, &extensions, args.threads);
    let total_files = files.len();
    info!(dir = %dir_str, files = total_files, "Found files to extract");

    // ─── Parallel extraction ──────────────────────────────────
    let num_threads = if args.threads > 0 {
        args.threads
    } else {
        std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(4)
    };
    let chunk_size = total_files.div_ceil(num_threads).max(1);
    let chunks: Vec<Vec<String>> = files.chunks(chunk_size).map(|c| c.to_vec()).collect();

    let thread_results: Vec<Result<ChunkResult>> = std::thread::scope(|s| {
        let handles: Vec<_> = chunks
            .into_iter()
            .map(|chunk| {
                let len = chunk.len();
                (len, s.spawn(move || extract_chunk(&chunk)))
            })
            .collect();

        handles.into_iter().map(|(len, h)| chunk_outcome(h.join(), len)).collect()
    });

    // ─── Merge results ────────────────────────────────────────
    let mut corpus = Corpus { root: dir_str, ..Corpus::default() };
    for result in thread_results {
        let (chunk_files, errors, lossy) = result?;
        corpus.files.extend(chunk_files);
        corpus.read_errors += errors;
        corpus.lossy_files.extend(lossy);
    }
    corpus.files.sort_by(|a, b| a.path.cmp(&b.path));
    corpus.lossy_files.sort();

    info!(
        files = total_files,
        bindings = corpus.binding_count(),
        read_errors = corpus.read_errors,
        lossy_utf8 = corpus.lossy_files.len(),
        threads = num_threads,
        elapsed_ms = format_args!("{:.1}", start.elapsed().as_secs_f64() * 1000.0),
        "Corpus extracted"
    );
    Ok(corpus)
}

fn collect_files(dir: &Path, extensions: &[String], threads: usize) -> Vec<String> {
    let mut walker = WalkBuilder::new(dir);
    walker.hidden(false).git_ignore(true);
    if threads > 0 {
        walker.threads(threads);
    }

    let all_files: Mutex<Vec<String>> = Mutex::new(Vec::new());
    walker.build_parallel().run(|| {
        Box::new(|entry| {
            let entry = match entry {
                Ok(e) => e,
                Err(_) => return ignore::WalkState::Continue,
            };
            if !entry.file_type().is_some_and(|ft| ft.is_file()) {
                return ignore::WalkState::Continue;
            }
            let path = entry.path();
            let ext_match = path.extension()
                .and_then(|e| e.to_str())
                .is_some_and(|e| extensions.iter().any(|x| x.eq_ignore_ascii_case(e)));
            if ext_match {
                let clean = clean_path(&path.to_string_lossy());
                all_files.lock().unwrap_or_else(|e| e.into_inner()).push(clean);
            }
            ignore::WalkState::Continue
        })
    });

    let mut files = all_files.into_inner().unwrap_or_else(|e| e.into_inner());
    files.sort();
    files
}

/// A panicked worker loses its whole chunk; every file in it counts as a read error.
fn chunk_outcome(joined: std::thread::Result<Result<ChunkResult>>, chunk_len: usize) -> Result<ChunkResult> {
    joined.unwrap_or_else(|_| {
        warn!(files = chunk_len, "Worker thread panicked during corpus extraction");
        Ok((Vec::new(), chunk_len, Vec::new()))
    })
}

/// Extract one chunk of files with a thread-local parser. A contract
/// violation is an extractor bug and fails the whole build; unreadable or
/// unparseable files are only counted.
fn extract_chunk(chunk: &[String]) -> Result<ChunkResult> {
    let mut frontend = JavaFrontend::new()?;
    let extractor = MethodInvocationBindings::new();
    let mut files = Vec::new();
    let mut errors = 0usize;
    let mut lossy_files = Vec::new();

    for file_path in chunk {
        let (content, was_lossy) = match read_file_lossy(Path::new(file_path)) {
            Ok(r) => r,
            Err(e) => {
                warn!(path = %file_path, error = %e, "Failed to read file");
                errors += 1;
                continue;
            }
        };
        if was_lossy {
            warn!(path = %file_path, "File contains non-UTF8 bytes (lossy conversion applied)");
            lossy_files.push(file_path.clone());
        }
        let tree = match frontend.parse_named(&content, file_path) {
            Ok(t) => t,
            Err(e) => {
                warn!(path = %file_path, error = %e, "Failed to parse file");
                errors += 1;
                continue;
            }
        };
        let bindings = extractor.extract(&tree, tree.root())?;
        files.push(FileBindings { path: file_path.clone(), bindings });
    }
    Ok((files, errors, lossy_files))
}

// ─── Output ──────────────────────────────────────────────────────────

/// Write one JSON object per binding, one per line.
pub fn write_jsonl<W: Write>(corpus: &Corpus, mut writer: W) -> Result<usize> {
    let mut rows = 0usize;
    for file in &corpus.files {
        for binding in &file.bindings {
            let row = CorpusRow {
                file: file.path.clone(),
                name: binding.name.clone(),
                line: binding.span.line,
                column: binding.span.column,
                features: binding.features.clone(),
            };
            serde_json::to_writer(&mut writer, &row)?;
            writer.write_all(b"\n")?;
            rows += 1;
        }
    }
    writer.flush()?;
    Ok(rows)
}

// ─── Tests ──────────────────────────────────────────────────────────

#[cfg(test)]
#[path = "corpus_tests.rs"]
mod tests;
