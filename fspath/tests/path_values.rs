//! Path values used as plain text, without touching the filesystem.

use std::collections::{BTreeSet, HashMap};

use fspath::Path;

#[test]
fn test_composition_equals_joining() {
    let fragments = ["usr", "local", "share", "fspath"];
    let composed = fragments
        .iter()
        .skip(1)
        .fold(Path::new(fragments[0]), |acc, f| acc / f);
    assert_eq!(composed, Path::join_all(fragments));
    assert_eq!(Path::new("usr").call(["local", "share", "fspath"]), composed);
}

#[cfg(unix)]
#[test]
fn test_split_and_recompose() {
    let path = Path::new("/var/log/syslog");
    let parts = path.split();
    assert_eq!(parts, ["var", "log", "syslog"]);
    assert_eq!(Path::new("/") / Path::join_all(&parts), path);
}

#[test]
fn test_string_ops_stay_paths() {
    let path = Path::new("  Src/Main.RS  ");
    let trimmed: Path = path.trim();
    assert_eq!(trimmed, "Src/Main.RS");
    assert_eq!(trimmed.to_lowercase(), "src/main.rs");
    assert_eq!(trimmed.replace("Main", "lib"), "Src/lib.RS");
    assert_eq!(trimmed.strip_suffix(".RS").unwrap(), "Src/Main");
}

#[test]
fn test_behaves_as_text_in_collections() {
    let mut sizes = HashMap::new();
    sizes.insert(Path::new("b"), 2);
    sizes.insert(Path::new("a"), 1);
    assert_eq!(sizes.get("a"), Some(&1));

    let ordered: BTreeSet<Path> = ["c", "a", "b"].into_iter().map(Path::from).collect();
    let ordered: Vec<&str> = ordered.iter().map(Path::as_str).collect();
    assert_eq!(ordered, ["a", "b", "c"]);
}

#[test]
fn test_serializes_as_string() {
    let paths = vec![Path::new("/etc"), Path::new("rel/file")];
    let json = serde_json::to_string(&paths).unwrap();
    assert_eq!(json, r#"["/etc","rel/file"]"#);
    let back: Vec<Path> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, paths);
}

#[cfg(unix)]
#[test]
fn test_lexical_forms() {
    let path = Path::new("/srv/app/../data/./file.txt");
    assert_eq!(path.absolute().unwrap(), "/srv/data/file.txt");
    assert_eq!(path.basename(), "file.txt");
    assert_eq!(
        Path::new("/srv/data/file.txt").relative_to("/srv/app").unwrap(),
        "../data/file.txt"
    );
    assert_eq!(Path::new("/srv/data/file.txt").dir(), "/srv/data");
}
