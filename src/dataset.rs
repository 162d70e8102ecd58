use std::path::Path;

use regex::Regex;

#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Load the vocabulary from a CSV file. Every field of every record is one
/// vocabulary entry; whitespace runs are collapsed and empty fields skipped.
/// Records may have varying column counts.
pub fn load(path: &Path) -> Result<Vec<String>, DatasetError> {
    let file = std::fs::File::open(path)?;
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(file);

    let re_spaces = Regex::new(r"\s+").unwrap();

    let mut words: Vec<String> = Vec::with_capacity(200);

    for result in reader.records() {
        let record = result?;
        for field in record.iter() {
            let word = clean_string(field, &re_spaces);
            if !word.is_empty() {
                words.push(word);
            }
        }
    }

    Ok(words)
}

fn clean_string(s: &str, re_spaces: &Regex) -> String {
    re_spaces.replace_all(s.trim(), " ").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_dataset(content: &str) -> tempfile::NamedTempFile {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(content.as_bytes()).unwrap();
        f
    }

    #[test]
    fn loads_all_fields_across_records() {
        let f = write_dataset("cat,car\ndog\nfish,fowl,ferret\n");
        let words = load(f.path()).unwrap();
        assert_eq!(words, vec!["cat", "car", "dog", "fish", "fowl", "ferret"]);
    }

    #[test]
    fn trims_and_collapses_whitespace() {
        let f = write_dataset("  cat ,new\t\tyork \n");
        let words = load(f.path()).unwrap();
        assert_eq!(words, vec!["cat", "new york"]);
    }

    #[test]
    fn skips_empty_fields() {
        let f = write_dataset("cat,,dog\n,\n");
        let words = load(f.path()).unwrap();
        assert_eq!(words, vec!["cat", "dog"]);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = load(Path::new("/nonexistent/dataset.csv")).unwrap_err();
        assert!(matches!(err, DatasetError::Io(_)));
    }
}
