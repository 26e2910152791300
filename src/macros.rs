//! AASTeX journal macro table.
//!
//! Loads the two-column reference file that maps journal macros (`ApJ`,
//! `MNRAS`, ...) to full journal names. The file looks like:
//!
//! ```text
//! TeX macro   Journal
//! ---------   -------
//! \aj         Astronomical Journal
//! ApJ         Astrophysical Journal
//! ```
//!
//! The first two lines are always header and separator.

use crate::error::{Error, Result};
use log::{debug, warn};
use std::path::Path;

/// Number of header lines at the top of the reference file.
const HEADER_LINES: usize = 2;

/// One journal macro and the name it stands for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MacroEntry {
    /// Macro token as written in the reference file.
    pub abbreviation: String,
    /// Full journal name, words joined by single spaces.
    pub full_name: String,
}

impl MacroEntry {
    pub fn new(abbreviation: impl Into<String>, full_name: impl Into<String>) -> Self {
        Self {
            abbreviation: abbreviation.into(),
            full_name: full_name.into(),
        }
    }
}

/// Ordered journal macro table.
///
/// Entries keep file order and duplicates are not collapsed: a lookup returns
/// the first entry whose abbreviation matches exactly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MacroTable {
    entries: Vec<MacroEntry>,
}

impl MacroTable {
    /// Read and parse a reference file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        let table = Self::parse(&contents);
        debug!(
            "Loaded {} journal macros from {}",
            table.len(),
            path.display()
        );
        Ok(table)
    }

    /// Parse reference file contents.
    ///
    /// Blank lines are skipped. Lines with a single field are skipped with a
    /// warning.
    pub fn parse(contents: &str) -> Self {
        let mut entries = Vec::new();

        for (idx, line) in contents.lines().enumerate().skip(HEADER_LINES) {
            if line.trim().is_empty() {
                continue;
            }

            let mut fields = line.split_whitespace();
            let Some(abbreviation) = fields.next() else {
                continue;
            };
            let full_name = fields.collect::<Vec<_>>().join(" ");
            if full_name.is_empty() {
                warn!(
                    "Skipping journal macro line {}: no journal name after '{}'",
                    idx + 1,
                    abbreviation
                );
                continue;
            }

            entries.push(MacroEntry::new(abbreviation, full_name));
        }

        Self { entries }
    }

    /// Full name for an abbreviation, first match wins.
    pub fn lookup(&self, abbreviation: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.abbreviation == abbreviation)
            .map(|e| e.full_name.as_str())
    }

    pub fn entries(&self) -> &[MacroEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<MacroEntry> for MacroTable {
    fn from_iter<I: IntoIterator<Item = MacroEntry>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE: &str = "TeX macro   Journal\n\
                          ---------   -------\n\
                          AJ          Astronomical Journal\n\
                          \n\
                          ApJ         Astrophysical   Journal\n\
                          orphan\n\
                          MNRAS       Monthly Notices of the Royal Astronomical Society\n";

    #[test]
    fn test_parse_skips_header_blank_and_single_field_lines() {
        let table = MacroTable::parse(SAMPLE);
        let abbrevs: Vec<&str> = table
            .entries()
            .iter()
            .map(|e| e.abbreviation.as_str())
            .collect();
        assert_eq!(abbrevs, vec!["AJ", "ApJ", "MNRAS"]);
    }

    #[test]
    fn test_parse_single_entry() {
        let table = MacroTable::parse("a\nb\nAJ Astronomical Journal\n");
        assert_eq!(
            table.entries(),
            &[MacroEntry::new("AJ", "Astronomical Journal")]
        );
    }

    #[test]
    fn test_parse_collapses_inner_whitespace() {
        let table = MacroTable::parse(SAMPLE);
        assert_eq!(table.lookup("ApJ"), Some("Astrophysical Journal"));
    }

    #[test]
    fn test_parse_header_only() {
        let table = MacroTable::parse("TeX macro   Journal\n---------   -------\n");
        assert!(table.is_empty());
        assert!(MacroTable::parse("").is_empty());
    }

    #[test]
    fn test_header_lines_never_become_entries() {
        let table = MacroTable::parse("AJ Astronomical Journal\nApJ Astrophysical Journal\n");
        assert!(table.is_empty());
    }

    #[test]
    fn test_lookup_is_exact_and_case_sensitive() {
        let table = MacroTable::parse(SAMPLE);
        assert_eq!(table.lookup("AJ"), Some("Astronomical Journal"));
        assert_eq!(table.lookup("aj"), None);
        assert_eq!(table.lookup("A"), None);
    }

    #[test]
    fn test_lookup_first_duplicate_wins() {
        let table: MacroTable = vec![
            MacroEntry::new("PhRvD", "Physical Review D"),
            MacroEntry::new("PhRvD", "Phys. Rev. D"),
        ]
        .into_iter()
        .collect();
        assert_eq!(table.len(), 2);
        assert_eq!(table.lookup("PhRvD"), Some("Physical Review D"));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();
        let table = MacroTable::load(file.path()).unwrap();
        assert_eq!(table.len(), 3);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = MacroTable::load(dir.path().join("AAS_macros.txt")).unwrap_err();
        assert!(err.is_not_found());
    }
}
