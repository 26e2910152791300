//! ADS personal library endpoints.

use crate::client::AdsClient;
use crate::error::Result;
use crate::parse::{parse_libraries_response, parse_library_page_response};
use crate::types::{Library, LibraryPage, Pagination};
use log::debug;

impl AdsClient {
    /// List all libraries for the authenticated user.
    pub async fn list_libraries(&self) -> Result<Vec<Library>> {
        let body = self.get("/biblib/libraries", &[]).await?;
        parse_libraries_response(&body)
    }

    /// Get one page of a library's bibcodes.
    pub async fn library_page(&self, id: &str, page: Pagination) -> Result<LibraryPage> {
        let rows = page.rows.to_string();
        let start = page.start.to_string();
        let body = self
            .get(
                &format!("/biblib/libraries/{}", id),
                &[("rows", rows.as_str()), ("start", start.as_str())],
            )
            .await?;
        parse_library_page_response(id, &body)
    }

    /// Get every bibcode in a library, `rows` at a time.
    ///
    /// Stops once the library's reported document count is reached or a page
    /// comes back short.
    pub async fn library_documents(&self, id: &str, rows: u32) -> Result<Vec<String>> {
        let mut page = Pagination::new(rows.max(1), 0);
        let mut documents = Vec::new();

        loop {
            let LibraryPage {
                metadata,
                documents: batch,
            } = self.library_page(id, page).await?;
            debug!(
                "Library {}: got {} documents at offset {}",
                id,
                batch.len(),
                page.start
            );

            let short_page = batch.len() < page.rows as usize;
            if batch.is_empty() {
                break;
            }
            documents.extend(batch);
            let total = metadata.num_documents as usize;
            if short_page || (total > 0 && documents.len() >= total) {
                break;
            }
            page = page.next();
        }

        Ok(documents)
    }
}
