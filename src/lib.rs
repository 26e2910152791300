//! # adsbib
//!
//! Export NASA ADS (SciX) personal libraries to BibTeX files, with AASTeX
//! journal macros (`journal = {\apj}`) expanded to full journal names.
//!
//! Provides:
//! - **Library**: async ADS client for libraries and export, the journal
//!   macro table, and the abbreviation resolver
//! - **CLI**: `adsbib` binary (`cli` feature)
//!
//! ## Quick Start
//!
//! ```no_run
//! # async fn example() -> adsbib::error::Result<()> {
//! use adsbib::{AdsClient, Exporter, MacroTable};
//!
//! let client = AdsClient::from_token_file("ADS_token.txt")?;
//! let macros = MacroTable::load("AAS_macros.txt")?;
//!
//! for summary in Exporter::new(client, macros).run().await? {
//!     println!("{} -> {}", summary.library, summary.path.display());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Offline expansion
//!
//! ```
//! use adsbib::{resolve_journals, MacroEntry, MacroTable};
//!
//! let table: MacroTable = vec![MacroEntry::new("apj", "Astrophysical Journal")]
//!     .into_iter()
//!     .collect();
//! let text = resolve_journals("journal = {\\apj},", &table);
//! assert_eq!(text, "journal = {Astrophysical Journal},");
//! ```

pub mod client;
pub mod error;
pub mod export;
pub mod exporter;
pub mod libraries;
pub mod macros;
pub mod parse;
pub mod resolve;
pub mod types;

// Re-export key types at the crate root.
pub use client::AdsClient;
pub use error::Error;
pub use exporter::{ExportSummary, Exporter};
pub use macros::{MacroEntry, MacroTable};
pub use resolve::{resolve_journals, resolve_with_report, Resolution};
pub use types::*;
