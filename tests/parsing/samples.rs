#[cfg(test)]
mod samples {
    use std::fs;
    use std::path::{Path, PathBuf};

    use proofstep::parsing;

    fn scripts_in(dir: &Path) -> Vec<PathBuf> {
        assert!(dir.exists(), "{:?} directory missing", dir);

        let entries = fs::read_dir(dir).expect("Failed to read directory");

        let mut files = Vec::new();
        for entry in entries {
            let entry = entry.expect("Failed to read directory entry");
            let path = entry.path();

            if path
                .extension()
                .and_then(|s| s.to_str())
                == Some("ec")
            {
                files.push(path);
            }
        }

        assert!(!files.is_empty(), "No .ec files found in {:?}", dir);
        files
    }

    /// Whatever follows the last complete statement.
    fn remainder(content: &str) -> &str {
        let end = parsing::get_all_statements(content)
            .last()
            .map(|statement| statement.end_offset)
            .unwrap_or(0);
        &content[end..]
    }

    #[test]
    fn ensure_samples_segment() {
        let mut failures = Vec::new();

        for file in &scripts_in(Path::new("tests/samples/")) {
            let content = parsing::load(&file)
                .unwrap_or_else(|e| panic!("Failed to load file {:?}: {:?}", file, e));

            let statements = parsing::get_all_statements(&content);

            let mut previous = 0;
            let mut clean = !statements.is_empty();
            for statement in &statements {
                let gap = &content[previous..statement.start_offset];
                if !gap
                    .trim()
                    .is_empty()
                    || !statement
                        .text
                        .ends_with('.')
                {
                    clean = false;
                }
                previous = statement.end_offset;
            }

            if !remainder(&content)
                .trim()
                .is_empty()
            {
                clean = false;
            }

            if !clean {
                println!("File {:?} did not segment cleanly", file);
                failures.push(file.clone());
            }
        }

        if !failures.is_empty() {
            panic!(
                "Sample files should segment cleanly, but {} files failed",
                failures.len()
            );
        }
    }

    #[test]
    fn ensure_broken_incomplete() {
        let mut unexpected_successes = Vec::new();

        for file in &scripts_in(Path::new("tests/broken/")) {
            let content = parsing::load(&file)
                .unwrap_or_else(|e| panic!("Failed to load file {:?}: {:?}", file, e));

            if remainder(&content)
                .trim()
                .is_empty()
            {
                println!("File {:?} unexpectedly segmented completely", file);
                unexpected_successes.push(file.clone());
            }
        }

        if !unexpected_successes.is_empty() {
            panic!(
                "Broken files should end with an incomplete statement, but {} files did not",
                unexpected_successes.len()
            );
        }
    }
}
