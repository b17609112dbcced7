// crates/find_todo_files/tests/integration_walk.rs

#[cfg(test)]
mod integration_walk {
    use find_todo_files::{default_extensions, normalize_extensions, walk_source_files};
    use std::fs;
    use std::path::PathBuf;
    use tempfile::tempdir;

    /// Files in nested directories are found, others are filtered by extension.
    #[test]
    fn test_walk_recurses_and_filters() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("pkg").join("sub");
        fs::create_dir_all(&nested).unwrap();
        fs::write(dir.path().join("main.py"), "print('hi')\n").unwrap();
        fs::write(nested.join("util.cpp"), "int main() {}\n").unwrap();
        fs::write(nested.join("README.md"), "# TODO: not scanned\n").unwrap();

        let files: Vec<PathBuf> = walk_source_files(dir.path(), &default_extensions())
            .expect("root exists")
            .collect();

        assert_eq!(files.len(), 2);
        assert!(files.contains(&dir.path().join("main.py")));
        assert!(files.contains(&nested.join("util.cpp")));
    }

    /// Traversal order is stable: siblings sorted by name, directories descended in place.
    #[test]
    fn test_walk_order_is_deterministic() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("b")).unwrap();
        fs::write(dir.path().join("c.py"), "").unwrap();
        fs::write(dir.path().join("a.py"), "").unwrap();
        fs::write(dir.path().join("b").join("inner.py"), "").unwrap();

        let files: Vec<PathBuf> = walk_source_files(dir.path(), &default_extensions())
            .unwrap()
            .collect();

        assert_eq!(
            files,
            vec![
                dir.path().join("a.py"),
                dir.path().join("b").join("inner.py"),
                dir.path().join("c.py"),
            ]
        );
    }

    /// The walker can be invoked again and yields the same result.
    #[test]
    fn test_walk_is_restartable() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("one.java"), "class One {}\n").unwrap();
        let exts = default_extensions();

        let first: Vec<PathBuf> = walk_source_files(dir.path(), &exts).unwrap().collect();
        let second: Vec<PathBuf> = walk_source_files(dir.path(), &exts).unwrap().collect();
        assert_eq!(first, second);
        assert_eq!(first.len(), 1);
    }

    /// A custom allow-list replaces the defaults.
    #[test]
    fn test_custom_extensions() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("lib.rs"), "fn main() {}\n").unwrap();
        fs::write(dir.path().join("main.py"), "pass\n").unwrap();

        let exts = normalize_extensions([".rs"]);
        let files: Vec<PathBuf> = walk_source_files(dir.path(), &exts).unwrap().collect();
        assert_eq!(files, vec![dir.path().join("lib.rs")]);
    }

    /// An empty directory produces an empty sequence, not an error.
    #[test]
    fn test_empty_root() {
        let dir = tempdir().unwrap();
        let count = walk_source_files(dir.path(), &default_extensions())
            .unwrap()
            .count();
        assert_eq!(count, 0);
    }
}

#[cfg(all(test, unix))]
mod integration_walk_links {
    use find_todo_files::{default_extensions, walk_source_files};
    use std::fs;
    use std::os::unix::fs::symlink;
    use std::path::PathBuf;
    use tempfile::tempdir;

    /// A symlink to a source file is scanned like the file itself.
    #[test]
    fn test_symlinked_file_is_listed() {
        let outside = tempdir().unwrap();
        let target = outside.path().join("real.py");
        fs::write(&target, "# TODO: linked\n").unwrap();

        let dir = tempdir().unwrap();
        let link = dir.path().join("link.py");
        symlink(&target, &link).unwrap();

        let files: Vec<PathBuf> = walk_source_files(dir.path(), &default_extensions())
            .unwrap()
            .collect();
        assert_eq!(files, vec![link]);
    }

    /// A dangling link is not a file and is skipped.
    #[test]
    fn test_dangling_link_is_skipped() {
        let dir = tempdir().unwrap();
        symlink(dir.path().join("gone.py"), dir.path().join("dangling.py")).unwrap();

        let count = walk_source_files(dir.path(), &default_extensions())
            .unwrap()
            .count();
        assert_eq!(count, 0);
    }
}
