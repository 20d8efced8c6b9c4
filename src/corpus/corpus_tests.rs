use super::*;

fn write_file(dir: &Path, name: &str, content: &str) {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(path, content).unwrap();
}

fn args_for(dir: &Path, threads: usize) -> CorpusArgs {
    CorpusArgs {
        dir: dir.to_string_lossy().to_string(),
        ext: "java".to_string(),
        threads,
    }
}

#[test]
fn test_build_corpus_counts_every_call() {
    let tmp = tempfile::tempdir().unwrap();
    write_file(tmp.path(), "a/Alpha.java", "class Alpha { void run() { foo(); foo(1); } }");
    write_file(tmp.path(), "b/Beta.java", "class Beta { void stop() { bar(); } }");
    write_file(tmp.path(), "notes.txt", "foo(); bar();");

    let corpus = build_corpus(&args_for(tmp.path(), 2)).unwrap();
    assert_eq!(corpus.files.len(), 2);
    assert_eq!(corpus.binding_count(), 3);
    assert_eq!(corpus.read_errors, 0);
    assert!(corpus.files[0].path.ends_with("Alpha.java"));
    assert!(corpus.files[1].path.ends_with("Beta.java"));
}

#[test]
fn test_build_corpus_single_thread_matches_parallel() {
    let tmp = tempfile::tempdir().unwrap();
    for i in 0..6 {
        write_file(
            tmp.path(),
            &format!("F{}.java", i),
            &format!("class F{i} {{ void m{i}() {{ call{i}(); other(); }} }}"),
        );
    }
    let sequential = build_corpus(&args_for(tmp.path(), 1)).unwrap();
    let parallel = build_corpus(&args_for(tmp.path(), 4)).unwrap();
    assert_eq!(sequential.binding_count(), 12);
    assert_eq!(sequential.binding_count(), parallel.binding_count());
    let seq_paths: Vec<_> = sequential.files.iter().map(|f| f.path.clone()).collect();
    let par_paths: Vec<_> = parallel.files.iter().map(|f| f.path.clone()).collect();
    assert_eq!(seq_paths, par_paths);
}

#[test]
fn test_build_corpus_lossy_file() {
    let tmp = tempfile::tempdir().unwrap();
    std::fs::write(
        tmp.path().join("Latin.java"),
        b"class Latin { void f() { /* caf\xe9 */ g(); } }",
    ).unwrap();
    let corpus = build_corpus(&args_for(tmp.path(), 1)).unwrap();
    assert_eq!(corpus.lossy_files.len(), 1);
    assert_eq!(corpus.binding_count(), 1);
}

#[test]
fn test_build_corpus_missing_dir() {
    let args = CorpusArgs {
        dir: "/definitely/not/a/real/dir".to_string(),
        ext: "java".to_string(),
        threads: 1,
    };
    let err = build_corpus(&args).unwrap_err();
    assert!(matches!(err, BindingError::DirNotFound(_)));
}

#[test]
fn test_build_corpus_rejects_empty_extension_list() {
    let tmp = tempfile::tempdir().unwrap();
    let args = CorpusArgs {
        dir: tmp.path().to_string_lossy().to_string(),
        ext: " , ".to_string(),
        threads: 1,
    };
    assert!(matches!(build_corpus(&args).unwrap_err(), BindingError::InvalidArgs(_)));
}

#[test]
fn test_write_jsonl_rows() {
    let tmp = tempfile::tempdir().unwrap();
    write_file(tmp.path(), "Svc.java", "class Svc {\n  void computeTotalValue() {\n    add(1, 2);\n  }\n}\n");
    let corpus = build_corpus(&args_for(tmp.path(), 1)).unwrap();

    let mut out = Vec::new();
    let rows = write_jsonl(&corpus, &mut out).unwrap();
    assert_eq!(rows, 1);

    let text = String::from_utf8(out).unwrap();
    let lines: Vec<_> = text.lines().collect();
    assert_eq!(lines.len(), 1);
    let row: CorpusRow = serde_json::from_str(lines[0]).unwrap();
    assert!(row.file.ends_with("Svc.java"));
    assert_eq!(row.name, "add");
    assert_eq!(row.line, 3);
    assert!(row.features.contains("nArgs:2"));
    assert!(row.features.contains("inName:compute"));
    assert!(row.features.contains("inName:total"));
    assert!(row.features.contains("inName:value"));
}

#[test]
fn test_write_jsonl_empty_corpus() {
    let mut out = Vec::new();
    assert_eq!(write_jsonl(&Corpus::default(), &mut out).unwrap(), 0);
    assert!(out.is_empty());
}

#[test]
fn test_panicked_chunk_counts_as_read_errors() {
    let panicked: std::thread::Result<Result<ChunkResult>> = Err(Box::new("worker died") as Box<dyn std::any::Any + Send>);
    let (files, errors, lossy) = chunk_outcome(panicked, 7).unwrap();
    assert!(files.is_empty());
    assert_eq!(errors, 7);
    assert!(lossy.is_empty());
}

#[test]
fn test_finished_chunk_passes_through() {
    let finished: std::thread::Result<Result<ChunkResult>> = Ok(Ok((Vec::new(), 2, vec!["X.java".to_string()])));
    let (_, errors, lossy) = chunk_outcome(finished, 5).unwrap();
    assert_eq!(errors, 2);
    assert_eq!(lossy, vec!["X.java".to_string()]);
}
