//! Journal abbreviation expansion in exported citation text.
//!
//! ADS BibTeX exports write journals as AASTeX macros, e.g.
//! `journal = {\apj}`. This module rewrites those fields using a
//! [`MacroTable`], leaving every other byte of the text alone.

use crate::macros::MacroTable;
use lazy_static::lazy_static;
use regex::{Captures, Regex};

/// Leading character marking a journal value as a macro.
pub const MACRO_MARKER: char = '\\';

lazy_static! {
    /// `journal = {<value>}` with free whitespace around `=` and inside the braces.
    static ref JOURNAL_FIELD: Regex =
        Regex::new(r"\bjournal\s*=\s*\{([^{}]*)\}").expect("journal field pattern is valid");
}

/// Outcome of resolving a block of citation text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Resolution {
    /// Text with known macros expanded.
    pub text: String,
    /// Number of journal fields rewritten.
    pub expanded: usize,
    /// Macro keys that had no entry in the table, in order of appearance.
    pub unresolved: Vec<String>,
}

/// Expand journal macros in `text`.
pub fn resolve_journals(text: &str, table: &MacroTable) -> String {
    resolve_with_report(text, table).text
}

/// Expand journal macros in `text`, reporting what was and was not expanded.
pub fn resolve_with_report(text: &str, table: &MacroTable) -> Resolution {
    let mut expanded = 0;
    let mut unresolved = Vec::new();

    let resolved = JOURNAL_FIELD.replace_all(text, |caps: &Captures<'_>| {
        let field = &caps[0];
        let Some(key) = caps[1].trim().strip_prefix(MACRO_MARKER) else {
            return field.to_string();
        };

        match table.lookup(key) {
            Some(full_name) => {
                expanded += 1;
                format!("journal = {{{}}}", full_name)
            }
            None => {
                unresolved.push(key.to_string());
                field.to_string()
            }
        }
    });

    Resolution {
        text: resolved.into_owned(),
        expanded,
        unresolved,
    }
}
