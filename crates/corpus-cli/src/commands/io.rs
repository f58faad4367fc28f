//! JSON-lines record files.
//!
//! One JSON object per line. The path `-` reads stdin or writes stdout.

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use corpus_core::{Record, RecordCollection};
use tracing::debug;

/// Read a collection from a JSON-lines file. Blank lines are skipped.
pub fn read_records(path: &Path) -> Result<RecordCollection> {
    let reader: Box<dyn BufRead> = if path == Path::new("-") {
        Box::new(BufReader::new(io::stdin()))
    } else {
        let file = File::open(path)
            .with_context(|| format!("failed to open {}", path.display()))?;
        Box::new(BufReader::new(file))
    };

    let mut records = RecordCollection::new();
    for (n, line) in reader.lines().enumerate() {
        let line = line.with_context(|| format!("failed to read {}", path.display()))?;
        if line.trim().is_empty() {
            continue;
        }
        let record: Record = serde_json::from_str(&line)
            .with_context(|| format!("{}:{}: invalid record", path.display(), n + 1))?;
        records.push(record);
    }

    debug!(path = %path.display(), rows = records.len(), "read records");
    Ok(records)
}

/// Write a collection as JSON lines.
pub fn write_records(path: &Path, records: &RecordCollection) -> Result<()> {
    let writer: Box<dyn Write> = if path == Path::new("-") {
        Box::new(io::stdout().lock())
    } else {
        let file = File::create(path)
            .with_context(|| format!("failed to create {}", path.display()))?;
        Box::new(file)
    };
    let mut writer = BufWriter::new(writer);

    for record in records {
        serde_json::to_writer(&mut writer, record)?;
        writer.write_all(b"\n")?;
    }
    writer.flush()?;

    debug!(path = %path.display(), rows = records.len(), "wrote records");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use corpus_core::Value;

    #[test]
    fn test_write_then_read() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ads.jsonl");
        let records = RecordCollection::from_records(vec![
            Record::new().with("model", "پژو ۴۰۵").with("price", 4.5e8),
            Record::new().with("model", "تیبا").with("year", Value::Null),
        ]);

        write_records(&path, &records).unwrap();
        assert_eq!(read_records(&path).unwrap(), records);
    }

    #[test]
    fn test_blank_lines_are_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ads.jsonl");
        std::fs::write(&path, "{\"model\":\"سمند\",\"year\":2011}\n\n").unwrap();

        let records = read_records(&path).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records.records()[0].get("year"), Some(&Value::Int(2011)));
    }

    #[test]
    fn test_invalid_line_reports_position() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ads.jsonl");
        std::fs::write(&path, "{\"model\":\"سمند\"}\n[1, 2]\n").unwrap();

        let err = read_records(&path).unwrap_err();
        assert!(format!("{err}").ends_with(":2: invalid record"));
    }
}
