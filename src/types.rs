//! Public types for the ADS export tool.

use serde::{Deserialize, Serialize};

/// Default page size when listing library documents.
pub const DEFAULT_ROWS: u32 = 100;

/// An ADS personal library.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Library {
    pub id: String,
    pub name: String,
    pub description: String,
    pub num_documents: u32,
    pub public: bool,
    pub owner: String,
    pub date_created: String,
    pub date_last_modified: String,
}

/// One page of a library's documents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LibraryPage {
    pub metadata: Library,
    /// Bibcodes on this page.
    pub documents: Vec<String>,
}

/// Page size and offset for library document listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub rows: u32,
    pub start: u32,
}

impl Pagination {
    pub fn new(rows: u32, start: u32) -> Self {
        Self { rows, start }
    }

    /// The page following this one.
    pub fn next(self) -> Self {
        Self {
            rows: self.rows,
            start: self.start.saturating_add(self.rows),
        }
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(DEFAULT_ROWS, 0)
    }
}

/// Citation export formats the exporter can request from ADS.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExportFormat {
    #[default]
    BibTeX,
    BibTeXAbs,
    AasTex,
    Mnras,
    Icarus,
    Soph,
    Ris,
}

impl ExportFormat {
    /// ADS API format string.
    pub fn as_api_str(&self) -> &'static str {
        match self {
            Self::BibTeX => "bibtex",
            Self::BibTeXAbs => "bibtexabs",
            Self::AasTex => "aastex",
            Self::Mnras => "mnras",
            Self::Icarus => "icarus",
            Self::Soph => "soph",
            Self::Ris => "ris",
        }
    }

    /// Parse from string (case-insensitive).
    pub fn from_str_loose(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "bibtex" => Some(Self::BibTeX),
            "bibtexabs" => Some(Self::BibTeXAbs),
            "aastex" => Some(Self::AasTex),
            "mnras" => Some(Self::Mnras),
            "icarus" => Some(Self::Icarus),
            "soph" => Some(Self::Soph),
            "ris" => Some(Self::Ris),
            _ => None,
        }
    }

    /// Extension for files written in this format.
    pub fn file_extension(&self) -> &'static str {
        match self {
            Self::BibTeX | Self::BibTeXAbs => "bib",
            Self::Ris => "ris",
            _ => "txt",
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_api_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pagination_next() {
        let page = Pagination::default();
        assert_eq!(page, Pagination::new(100, 0));
        assert_eq!(page.next(), Pagination::new(100, 100));
        assert_eq!(page.next().next().start, 200);
    }

    #[test]
    fn test_export_format_loose_parse() {
        assert_eq!(ExportFormat::from_str_loose("BibTeX"), Some(ExportFormat::BibTeX));
        assert_eq!(ExportFormat::from_str_loose("ris"), Some(ExportFormat::Ris));
        assert_eq!(ExportFormat::from_str_loose("csl"), None);
    }

    #[test]
    fn test_export_format_extension() {
        assert_eq!(ExportFormat::BibTeX.file_extension(), "bib");
        assert_eq!(ExportFormat::BibTeXAbs.file_extension(), "bib");
        assert_eq!(ExportFormat::AasTex.file_extension(), "txt");
    }
}
