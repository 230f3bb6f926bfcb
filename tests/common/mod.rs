use std::io::{Error, Write};
use tempfile::NamedTempFile;

/// Writes a request CSV with the given `(provider, action)` rows.
pub fn requests_csv(rows: &[(&str, &str)]) -> Result<NamedTempFile, Error> {
    let mut file = NamedTempFile::new()?;
    writeln!(file, "provider, action")?;
    for (provider, action) in rows {
        writeln!(file, "{provider}, {action}")?;
    }
    file.flush()?;
    Ok(file)
}
