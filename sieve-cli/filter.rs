use std::{io::Write, path::PathBuf};

use anyhow::Result;
use owo_colors::OwoColorize as _;
use sieve_query::{CompileOptions, Compiler, Document, Matcher};

/// Print every file under `paths` that the compiled pattern matches, and
/// return how many there were. Unreadable or non-UTF-8 files are skipped.
pub fn filter(
    out: &mut dyn Write,
    options: &CompileOptions,
    pattern: &str,
    paths: &[PathBuf],
    hidden: bool,
) -> Result<usize> {
    let query = Compiler::new(*options).compile(pattern)?;
    let matcher = Matcher::new(&query)?;

    let Some((first, rest)) = paths.split_first() else {
        return Ok(0);
    };
    let mut walk = ignore::WalkBuilder::new(first);
    for path in rest {
        walk.add(path);
    }
    // `OwoColorize::hidden` shadows the builder method under autoref.
    ignore::WalkBuilder::hidden(&mut walk, !hidden);

    let mut count = 0;
    for entry in walk.build() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                tracing::warn!("{err}");
                continue;
            }
        };
        if !entry.file_type().is_some_and(|ty| ty.is_file()) {
            continue;
        }

        let path = entry.path();
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) => {
                tracing::debug!("skipping {}: {err}", path.display());
                continue;
            }
        };

        let path_str = path.to_string_lossy();
        if matcher.is_match(&Document::new(&content).with_path(&path_str)) {
            writeln!(out, "{}", path.display().green())?;
            count += 1;
        }
    }

    tracing::debug!(count, "filter finished");
    Ok(count)
}
