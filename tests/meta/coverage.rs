//! Structural checks on the test tree
//!
//! Every source file has a unit test file at the same relative path under
//! `tests/unit`, every unit test file is compiled into the `unit` target
//! through its parent `mod.rs`, and every test file defines tests.

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use std::fs;
    use std::path::{Path, PathBuf};
    use walkdir::WalkDir;

    const SOURCE_ROOT: &str = "src";
    const UNIT_ROOT: &str = "tests/unit";
    const TEST_ROOT: &str = "tests";

    /// Rust files below `root`, relative to it
    fn rust_files(root: &str) -> BTreeSet<PathBuf> {
        WalkDir::new(root)
            .into_iter()
            .map(|entry| entry.unwrap())
            .filter(|entry| entry.file_type().is_file())
            .filter(|entry| entry.path().extension().is_some_and(|ext| ext == "rs"))
            .map(|entry| entry.path().strip_prefix(root).unwrap().to_path_buf())
            .collect()
    }

    fn is_module_file(path: &Path) -> bool {
        path.file_name().is_some_and(|name| name == "mod.rs")
    }

    fn listing(paths: &[&PathBuf], prefix: &str) -> String {
        paths
            .iter()
            .map(|path| format!("  - {prefix}/{}", path.display()))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Module names declared by `mod name;` or `pub mod name;` lines
    fn declared_modules(module_file: &Path) -> BTreeSet<String> {
        fs::read_to_string(module_file)
            .unwrap()
            .lines()
            .filter_map(|line| {
                let line = line.trim();
                let line = line.strip_prefix("pub ").unwrap_or(line);
                line.strip_prefix("mod ")?.strip_suffix(';')
            })
            .map(str::to_owned)
            .collect()
    }

    // Tests every source file has a unit test file at the mirrored path
    // Verified by deleting tests/unit/layout/grid.rs
    #[test]
    fn test_every_source_file_has_unit_tests() {
        let units = rust_files(UNIT_ROOT);
        let sources = rust_files(SOURCE_ROOT);
        let missing: Vec<&PathBuf> = sources
            .iter()
            .filter(|path| !is_module_file(path))
            .filter(|path| *path != Path::new("lib.rs") && *path != Path::new("main.rs"))
            .filter(|path| !units.contains(*path))
            .collect();

        assert!(
            missing.is_empty(),
            "Source files without unit tests:\n{}",
            listing(&missing, SOURCE_ROOT)
        );
    }

    // Tests every unit test file still has a source file
    // Verified by adding tests/unit/layout/spiral.rs
    #[test]
    fn test_every_unit_test_has_a_source_file() {
        let sources = rust_files(SOURCE_ROOT);
        let orphaned: Vec<PathBuf> = rust_files(UNIT_ROOT)
            .into_iter()
            .filter(|path| !is_module_file(path) && !sources.contains(path))
            .collect();
        let orphaned: Vec<&PathBuf> = orphaned.iter().collect();

        assert!(
            orphaned.is_empty(),
            "Unit test files without a source file:\n{}",
            listing(&orphaned, UNIT_ROOT)
        );
    }

    // Tests each unit test file and directory is declared in its parent mod.rs
    // Verified by removing `pub mod svg;` from tests/unit/io/mod.rs
    #[test]
    fn test_every_unit_file_is_declared() {
        let root = Path::new(UNIT_ROOT);
        let mut undeclared = Vec::new();

        for entry in WalkDir::new(root).min_depth(1) {
            let entry = entry.unwrap();
            let path = entry.path();
            let name = match path.file_stem().and_then(|stem| stem.to_str()) {
                Some(name) if name != "mod" => name,
                _ => continue,
            };
            let is_module = if entry.file_type().is_dir() {
                assert!(
                    path.join("mod.rs").is_file(),
                    "{} has no mod.rs",
                    path.display()
                );
                true
            } else {
                path.extension().is_some_and(|ext| ext == "rs")
            };
            if !is_module {
                continue;
            }

            let parent = path.parent().unwrap_or(root);
            if !declared_modules(&parent.join("mod.rs")).contains(name) {
                undeclared.push(path.strip_prefix(root).unwrap().to_path_buf());
            }
        }
        let undeclared: Vec<&PathBuf> = undeclared.iter().collect();

        assert!(
            undeclared.is_empty(),
            "Unit test modules missing from their parent mod.rs:\n{}",
            listing(&undeclared, UNIT_ROOT)
        );
    }

    // Tests every test file defines at least one test
    // Verified by emptying tests/unit/io/progress.rs
    #[test]
    fn test_every_test_file_defines_tests() {
        let empty: Vec<PathBuf> = rust_files(TEST_ROOT)
            .into_iter()
            .filter(|path| !is_module_file(path))
            .filter(|path| {
                let content = fs::read_to_string(Path::new(TEST_ROOT).join(path)).unwrap();
                !content.contains("#[test]")
            })
            .collect();
        let empty: Vec<&PathBuf> = empty.iter().collect();

        assert!(
            empty.is_empty(),
            "Test files without #[test] functions:\n{}",
            listing(&empty, TEST_ROOT)
        );
    }
}
