//! Library-to-file export pipeline.
//!
//! For every library of the authenticated user: fetch its bibcodes, export
//! them, expand journal macros, and write `<library name>.bib`.

use crate::client::AdsClient;
use crate::error::{Error, Result};
use crate::macros::MacroTable;
use crate::resolve::resolve_with_report;
use crate::types::{ExportFormat, Library, DEFAULT_ROWS};
use log::{info, warn};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// What was written for one library.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportSummary {
    pub library: String,
    pub path: PathBuf,
    pub documents: usize,
    /// Journal fields expanded from macros.
    pub expanded: usize,
    /// Journal macros with no entry in the macro table.
    pub unresolved: Vec<String>,
}

/// Exports ADS libraries to citation files.
#[derive(Debug, Clone)]
pub struct Exporter {
    client: AdsClient,
    macros: MacroTable,
    out_dir: PathBuf,
    rows: u32,
    format: ExportFormat,
    only: Vec<String>,
}

impl Exporter {
    pub fn new(client: AdsClient, macros: MacroTable) -> Self {
        Self {
            client,
            macros,
            out_dir: PathBuf::from("."),
            rows: DEFAULT_ROWS,
            format: ExportFormat::BibTeX,
            only: Vec::new(),
        }
    }

    /// Directory the citation files are written to.
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.out_dir = dir.into();
        self
    }

    /// Page size used when listing library documents.
    pub fn with_rows(mut self, rows: u32) -> Self {
        self.rows = rows.max(1);
        self
    }

    pub fn with_format(mut self, format: ExportFormat) -> Self {
        self.format = format;
        self
    }

    /// Restrict the run to libraries with these names. Empty means all.
    pub fn with_libraries(mut self, names: Vec<String>) -> Self {
        self.only = names;
        self
    }

    /// Export every selected library, stopping at the first failure.
    pub async fn run(&self) -> Result<Vec<ExportSummary>> {
        let libraries = self.client.list_libraries().await?;
        info!("Found {} libraries", libraries.len());

        for name in &self.only {
            if !libraries.iter().any(|lib| &lib.name == name) {
                warn!("No library named '{}'", name);
            }
        }

        let mut summaries = Vec::new();
        for library in libraries
            .iter()
            .filter(|lib| self.only.is_empty() || self.only.contains(&lib.name))
        {
            summaries.push(self.export_library(library).await?);
        }
        Ok(summaries)
    }

    /// Export a single library to its citation file.
    pub async fn export_library(&self, library: &Library) -> Result<ExportSummary> {
        info!("Processing library: {}", library.name);
        let bibcodes = self.client.library_documents(&library.id, self.rows).await?;

        let resolution = if bibcodes.is_empty() {
            Default::default()
        } else {
            let text = self.client.export(&bibcodes, self.format).await?;
            resolve_with_report(&text, &self.macros)
        };

        for key in &resolution.unresolved {
            warn!("{}: no journal name for macro \\{}", library.name, key);
        }

        let path = self
            .out_dir
            .join(output_file_name(&library.name, self.format));
        write_output(&path, &resolution.text)?;
        info!(
            "Exported {} documents to {}",
            bibcodes.len(),
            path.display()
        );

        Ok(ExportSummary {
            library: library.name.clone(),
            path,
            documents: bibcodes.len(),
            expanded: resolution.expanded,
            unresolved: resolution.unresolved,
        })
    }
}

/// File name for a library's export. Path separators become `_`.
pub fn output_file_name(library_name: &str, format: ExportFormat) -> String {
    let stem: String = library_name
        .chars()
        .map(|c| if matches!(c, '/' | '\\') { '_' } else { c })
        .collect();
    let stem = match stem.trim() {
        "" | "." | ".." => "library".to_string(),
        s => s.to_string(),
    };
    format!("{}.{}", stem, format.file_extension())
}

/// Write (or overwrite) an output file.
pub fn write_output(path: &Path, text: &str) -> Result<()> {
    std::fs::write(path, text).map_err(|e| Error::io(path, e))
}
