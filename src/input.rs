use std::fs::File;
use std::io::Read;
use std::path::Path;

pub fn read_file(path: &Path) -> anyhow::Result<String> {
    let mut buf = Vec::new();
    File::open(path)?.read_to_end(&mut buf)?;
    Ok(String::from_utf8(buf)?)
}

/// The descriptors in a file: one per line, skipping blanks and `#` comments.
pub fn read_descriptors(path: &Path) -> anyhow::Result<Vec<String>> {
    Ok(read_file(path)?
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(String::from)
        .collect())
}
