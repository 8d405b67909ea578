use lexis_core::Strategy;
use lexis_shell::{build_from_dir, Session};
use std::fs;
use std::io::Cursor;
use std::path::Path;
use tempfile::tempdir;

fn write_corpus(dir: &Path, files: &[(&str, &str)]) {
    for (name, body) in files {
        let path = dir.join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, body).unwrap();
    }
}

fn run(session: &mut Session, input: &str) -> String {
    let mut out = Vec::new();
    session.run(Cursor::new(input.to_string()), &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn indexes_a_directory_and_answers_both_strategies() {
    let dir = tempdir().unwrap();
    write_corpus(
        dir.path(),
        &[
            ("alt.atheism/1", "Atheism and religion are debated here."),
            ("sci.space/2", "Space science: orbits, rockets, science!"),
            ("talk.politics/3", "Politics, terrorism and religion."),
        ],
    );
    let index = build_from_dir(dir.path()).unwrap();
    assert_eq!(index.len(), 3);
    let label = |id: u32| index.source_label(id).unwrap().to_string();
    assert!(label(0).ends_with("1") && label(1).ends_with("2") && label(2).ends_with("3"));

    let mut session = Session::new(index, dir.path().to_path_buf(), Strategy::Boolean, 10);
    let out = run(
        &mut session,
        "religion AND politics\n/set_strategy tfidf\nscience\n/show_options\n",
    );
    let lines: Vec<&str> = out.lines().collect();
    assert!(lines[0].ends_with("talk.politics/3"), "got {:?}", lines);
    assert!(lines[1].contains("(query took "));
    assert!(lines[2].ends_with("sci.space/2"));
    assert!(lines[3].contains("(query took "));
    assert!(lines[4].ends_with("strategy: tfidf, max_results: 10"));
}

#[test]
fn reindex_swaps_to_a_disjoint_corpus() {
    let first = tempdir().unwrap();
    let second = tempdir().unwrap();
    write_corpus(first.path(), &[("a.txt", "apple banana"), ("b.txt", "banana cherry")]);
    write_corpus(second.path(), &[("x.txt", "xylophone")]);

    let mut session = Session::new(build_from_dir(first.path()).unwrap(), first.path().to_path_buf(), Strategy::Boolean, 10);
    let shared = session.shared_index();
    let before = shared.snapshot();

    let cmd = format!("/reindex {}\n", second.path().display());
    let out = run(&mut session, &cmd);
    assert!(out.contains("Dataset / Inverted index size: 1 / 1"), "got {out}");

    let after = shared.snapshot();
    assert_eq!(after.len(), 1);
    assert!(after.postings("banana").is_none());
    assert_eq!(after.query("xylophone", Strategy::Boolean, 10).unwrap(), vec![0]);
    // a snapshot taken before the swap still answers from the first corpus
    assert_eq!(before.query("banana", Strategy::Boolean, 10).unwrap(), vec![0, 1]);

    // without an argument the current corpus root is rebuilt
    fs::write(second.path().join("y.txt"), "yak").unwrap();
    let out = run(&mut session, "/reindex\n");
    assert!(out.contains("Dataset / Inverted index size: 2 / 2"), "got {out}");
}

#[test]
fn reindex_accepts_directories_with_spaces() {
    let root = tempdir().unwrap();
    write_corpus(root.path(), &[("first/a.txt", "apple")]);
    let spaced = root.path().join("my  docs dir");
    write_corpus(&spaced, &[("x.txt", "xylophone"), ("y.txt", "yak")]);

    let first = root.path().join("first");
    let mut session = Session::new(build_from_dir(&first).unwrap(), first, Strategy::Boolean, 10);
    let out = run(&mut session, &format!("/reindex {}\n", spaced.display()));
    assert!(out.contains("Dataset / Inverted index size: 2 / 2"), "got {out}");
    assert!(session.shared_index().snapshot().postings("yak").is_some());
}

#[test]
fn failed_reindex_keeps_the_current_index() {
    let dir = tempdir().unwrap();
    write_corpus(dir.path(), &[("a.txt", "apple")]);
    let mut session = Session::new(build_from_dir(dir.path()).unwrap(), dir.path().to_path_buf(), Strategy::Boolean, 10);

    let missing = dir.path().join("missing");
    let out = run(&mut session, &format!("/reindex {}\napple\n", missing.display()));
    assert!(out.contains("error: "), "got {out}");
    assert!(out.contains("a.txt"));
    assert_eq!(session.shared_index().snapshot().len(), 1);
}

#[test]
fn quit_stops_reading_input() {
    let dir = tempdir().unwrap();
    write_corpus(dir.path(), &[("a.txt", "apple")]);
    let mut session = Session::new(build_from_dir(dir.path()).unwrap(), dir.path().to_path_buf(), Strategy::Boolean, 10);
    let out = run(&mut session, "/quit\napple\n");
    assert!(!out.contains("a.txt"));
}
