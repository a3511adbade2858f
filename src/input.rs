//! Collaborator-side parsing of the guest list and pair files.
//!
//! The formats are deliberately small: the guest list is one name per line,
//! and the pair files carry two comma-separated names per line. Everything
//! is parsed here, before any of it reaches the solver core.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::{PlanError, Result};

/// Reads a guest-list file: one name per line, surrounding whitespace
/// trimmed, blank lines skipped. File order is preserved; duplicate names
/// collapse when the guests are registered on a problem.
pub fn read_guest_list(path: &Path) -> Result<Vec<String>> {
    let file = open(path)?;
    parse_guest_list(BufReader::new(file), path)
}

/// Reads a pair file: `name1,name2` per line. Fields are trimmed and any
/// columns beyond the first two are ignored. A line without two non-empty
/// fields is a configuration error carrying the file and line number.
pub fn read_pairs(path: &Path) -> Result<Vec<(String, String)>> {
    let file = open(path)?;
    parse_pairs(BufReader::new(file), path)
}

fn open(path: &Path) -> Result<File> {
    File::open(path).map_err(|source| {
        PlanError::Io {
            path: path.to_path_buf(),
            source,
        }
        .into()
    })
}

fn parse_guest_list<R: BufRead>(reader: R, path: &Path) -> Result<Vec<String>> {
    let mut guests = Vec::new();
    for line in reader.lines() {
        let line = line.map_err(|source| PlanError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let name = line.trim();
        if !name.is_empty() {
            guests.push(name.to_string());
        }
    }
    Ok(guests)
}

fn parse_pairs<R: BufRead>(reader: R, path: &Path) -> Result<Vec<(String, String)>> {
    let mut pairs = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line.map_err(|source| PlanError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        if line.trim().is_empty() {
            continue;
        }
        let mut fields = line.split(',').map(str::trim);
        match (fields.next(), fields.next()) {
            (Some(first), Some(second)) if !first.is_empty() && !second.is_empty() => {
                pairs.push((first.to_string(), second.to_string()));
            }
            _ => {
                return Err(PlanError::MalformedPair {
                    path: path.to_path_buf(),
                    line: index + 1,
                }
                .into())
            }
        }
    }
    Ok(pairs)
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;
    use std::path::PathBuf;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::error::Error;

    fn fake_path() -> PathBuf {
        PathBuf::from("pairs.csv")
    }

    fn pair(a: &str, b: &str) -> (String, String) {
        (a.to_string(), b.to_string())
    }

    #[test]
    fn guest_list_trims_and_skips_blanks() {
        let input = "Alice\n  Bob \n\nCarol\n";
        let guests = parse_guest_list(Cursor::new(input), &fake_path()).unwrap();
        assert_eq!(guests, ["Alice", "Bob", "Carol"]);
    }

    #[test]
    fn pairs_are_trimmed_and_extra_columns_ignored() {
        let input = "Alice, Bob, note\nCarol,Dave\n\n";
        let pairs = parse_pairs(Cursor::new(input), &fake_path()).unwrap();
        assert_eq!(pairs, vec![pair("Alice", "Bob"), pair("Carol", "Dave")]);
    }

    #[test]
    fn one_column_line_is_rejected_with_its_line_number() {
        let input = "Alice,Bob\nlonely\n";
        let error = parse_pairs(Cursor::new(input), &fake_path()).unwrap_err();
        let Error::Inner { inner, .. } = error;
        assert!(matches!(*inner, PlanError::MalformedPair { line: 2, .. }));
    }

    #[test]
    fn empty_second_column_is_rejected() {
        let input = "Alice, \n";
        let error = parse_pairs(Cursor::new(input), &fake_path()).unwrap_err();
        let Error::Inner { inner, .. } = error;
        assert!(matches!(*inner, PlanError::MalformedPair { line: 1, .. }));
    }

    #[test]
    fn missing_file_reports_its_path() {
        let error = read_guest_list(Path::new("definitely/not/here")).unwrap_err();
        let Error::Inner { inner, .. } = error;
        assert!(matches!(*inner, PlanError::Io { .. }));
    }
}
