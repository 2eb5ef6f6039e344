use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use anyhow::Context;

/// Keep record lines, dropping blanks and `#` comments.
pub fn record_lines<R: BufRead>(reader: R) -> io::Result<Vec<String>> {
    let mut out = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        out.push(trimmed.to_string());
    }
    Ok(out)
}

/// Records come from `--input` (`-` is stdin), then positional arguments,
/// then stdin.
pub fn collect_records(
    input: Option<&Path>,
    positional: Vec<String>,
) -> anyhow::Result<Vec<String>> {
    match input {
        Some(path) if path == Path::new("-") => Ok(record_lines(io::stdin().lock())?),
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("failed to open {}", path.display()))?;
            record_lines(BufReader::new(file))
                .with_context(|| format!("failed to read {}", path.display()))
        }
        None if !positional.is_empty() => Ok(positional),
        None => Ok(record_lines(io::stdin().lock())?),
    }
}
