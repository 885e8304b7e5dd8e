//! Enforces the one-to-one mirror between src modules and unit test files

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::fs;
    use std::io;
    use std::path::Path;

    const SRC_DIR: &str = "src";
    const UNIT_DIR: &str = "tests/unit";

    // Entry points and module organization files carry no testable logic
    fn is_structural(relative: &str) -> bool {
        relative == "main.rs" || relative == "lib.rs" || relative.ends_with("mod.rs")
    }

    fn rust_paths_under(base: &Path) -> Result<HashSet<String>, io::Error> {
        fn walk(dir: &Path, base: &Path, paths: &mut HashSet<String>) -> Result<(), io::Error> {
            for entry in fs::read_dir(dir)? {
                let path = entry?.path();
                let relative = path
                    .strip_prefix(base)
                    .map_err(|_| io::Error::other("path escaped its base directory"))?
                    .to_string_lossy()
                    .to_string();

                if path.is_dir() {
                    paths.insert(relative);
                    walk(&path, base, paths)?;
                } else if path.extension().and_then(|ext| ext.to_str()) == Some("rs") {
                    paths.insert(relative);
                }
            }
            Ok(())
        }

        let mut paths = HashSet::new();
        if base.is_dir() {
            walk(base, base, &mut paths)?;
        }
        Ok(paths)
    }

    #[test]
    fn test_every_src_file_has_a_unit_test_mirror() {
        let Ok(src_paths) = rust_paths_under(Path::new(SRC_DIR)) else {
            unreachable!("src directory must be readable");
        };
        let Ok(test_paths) = rust_paths_under(Path::new(UNIT_DIR)) else {
            unreachable!("tests/unit directory must be readable");
        };

        let missing: Vec<&String> = src_paths
            .iter()
            .filter(|path| !is_structural(path) && !test_paths.contains(*path))
            .collect();

        assert!(
            missing.is_empty(),
            "src files without unit test counterparts:\n{}",
            missing
                .iter()
                .map(|path| format!("  - src/{path} -> tests/unit/{path}"))
                .collect::<Vec<_>>()
                .join("\n")
        );
    }

    #[test]
    fn test_every_unit_test_mirrors_a_src_file() {
        let Ok(src_paths) = rust_paths_under(Path::new(SRC_DIR)) else {
            unreachable!("src directory must be readable");
        };
        let Ok(test_paths) = rust_paths_under(Path::new(UNIT_DIR)) else {
            unreachable!("tests/unit directory must be readable");
        };

        let orphaned: Vec<&String> = test_paths
            .iter()
            .filter(|path| !is_structural(path) && !src_paths.contains(*path))
            .collect();

        assert!(
            orphaned.is_empty(),
            "unit test files without src counterparts:\n{}",
            orphaned
                .iter()
                .map(|path| format!("  - tests/unit/{path} -> src/{path} (missing)"))
                .collect::<Vec<_>>()
                .join("\n")
        );
    }

    #[test]
    fn test_every_test_file_contains_tests() {
        let Ok(test_paths) = rust_paths_under(Path::new("tests")) else {
            unreachable!("tests directory must be readable");
        };

        let mut empty = Vec::new();
        for relative in &test_paths {
            if is_structural(relative)
                || relative.ends_with("main.rs")
                || !relative.ends_with(".rs")
            {
                continue;
            }

            let Ok(content) = fs::read_to_string(Path::new("tests").join(relative)) else {
                continue;
            };
            if !content.contains("#[test]") {
                empty.push(format!("  - tests/{relative}"));
            }
        }

        assert!(
            empty.is_empty(),
            "test files without any #[test] functions:\n{}",
            empty.join("\n")
        );
    }
}
