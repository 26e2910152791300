//! ADS API response parsing.

use crate::error::{Error, Result};
use crate::types::{Library, LibraryPage};
use serde::Deserialize;

/// `GET /biblib/libraries` response body.
#[derive(Debug, Deserialize)]
struct LibrariesResponse {
    libraries: Vec<LibraryRecord>,
}

/// `GET /biblib/libraries/<id>` response body.
#[derive(Debug, Deserialize)]
struct LibraryPageResponse {
    #[serde(default)]
    metadata: Option<LibraryRecord>,
    #[serde(default)]
    documents: Vec<String>,
}

/// Library metadata as ADS sends it. Everything but the id may be missing.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct LibraryRecord {
    id: Option<String>,
    name: Option<String>,
    description: Option<String>,
    num_documents: Option<u64>,
    public: Option<bool>,
    owner: Option<String>,
    date_created: Option<String>,
    date_last_modified: Option<String>,
}

impl LibraryRecord {
    fn into_library(self, fallback_id: Option<&str>) -> Option<Library> {
        let id = self.id.or_else(|| fallback_id.map(String::from))?;
        Some(Library {
            id,
            name: self.name.unwrap_or_default(),
            description: self.description.unwrap_or_default(),
            num_documents: self
                .num_documents
                .map(|n| u32::try_from(n).unwrap_or(u32::MAX))
                .unwrap_or(0),
            public: self.public.unwrap_or(false),
            owner: self.owner.unwrap_or_default(),
            date_created: self.date_created.unwrap_or_default(),
            date_last_modified: self.date_last_modified.unwrap_or_default(),
        })
    }
}

/// ADS export response.
#[derive(Debug, Deserialize)]
struct ExportResponse {
    export: String,
}

/// Parse the library listing. Entries without an id are dropped.
pub fn parse_libraries_response(json: &str) -> Result<Vec<Library>> {
    let response: LibrariesResponse = serde_json::from_str(json)
        .map_err(|e| Error::Parse(format!("Invalid libraries response: {}", e)))?;
    Ok(response
        .libraries
        .into_iter()
        .filter_map(|lib| lib.into_library(None))
        .collect())
}

/// Parse one page of a library. `id` fills in the metadata id, which ADS omits.
pub fn parse_library_page_response(id: &str, json: &str) -> Result<LibraryPage> {
    let response: LibraryPageResponse = serde_json::from_str(json)
        .map_err(|e| Error::Parse(format!("Invalid library response: {}", e)))?;
    let metadata = response
        .metadata
        .unwrap_or_default()
        .into_library(Some(id))
        .unwrap_or_default();
    Ok(LibraryPage {
        metadata,
        documents: response.documents,
    })
}

/// Parse an ADS export response into the exported text.
pub fn parse_export_response(json: &str) -> Result<String> {
    let response: ExportResponse = serde_json::from_str(json)
        .map_err(|e| Error::Parse(format!("Invalid export response: {}", e)))?;
    Ok(response.export)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_libraries_response() {
        let json = r#"{
            "libraries": [
                {
                    "name": "Mikesell-peer-reviewed",
                    "id": "2xPvCd9BSHKpZtiqPsgexQ",
                    "description": "My ADS library",
                    "num_documents": 44,
                    "date_created": "2024-08-12T14:39:54.258195",
                    "date_last_modified": "2024-08-12T14:42:33.191957",
                    "permission": "owner",
                    "public": false,
                    "num_users": 1,
                    "owner": "dylan.mikesell"
                },
                {"name": "no id"},
                {"id": "abc"}
            ]
        }"#;
        let libs = parse_libraries_response(json).unwrap();
        assert_eq!(libs.len(), 2);
        assert_eq!(libs[0].name, "Mikesell-peer-reviewed");
        assert_eq!(libs[0].num_documents, 44);
        assert_eq!(libs[0].owner, "dylan.mikesell");
        assert!(!libs[0].public);
        assert_eq!(libs[1].id, "abc");
        assert_eq!(libs[1].name, "");
    }

    #[test]
    fn test_parse_libraries_missing_key() {
        let err = parse_libraries_response(r#"{"error": "unauthorized"}"#).unwrap_err();
        assert!(matches!(err, Error::Parse(_)));
    }

    #[test]
    fn test_parse_library_page_response() {
        let json = r#"{
            "documents": ["2019ApJ...882...40M", "2020MNRAS.491.1234S"],
            "metadata": {"name": "Papers", "num_documents": 2, "public": true},
            "solr": {},
            "updates": {}
        }"#;
        let page = parse_library_page_response("lib1", json).unwrap();
        assert_eq!(page.metadata.id, "lib1");
        assert_eq!(page.metadata.name, "Papers");
        assert_eq!(page.metadata.num_documents, 2);
        assert!(page.metadata.public);
        assert_eq!(page.documents.len(), 2);
    }

    #[test]
    fn test_parse_library_page_without_metadata() {
        let page = parse_library_page_response("lib1", r#"{"documents": []}"#).unwrap();
        assert_eq!(page.metadata.id, "lib1");
        assert!(page.documents.is_empty());
    }

    #[test]
    fn test_parse_export_response() {
        let json = r#"{"msg": "Retrieved 1 abstracts, starting with number 1.", "export": "@ARTICLE{2019ApJ...882...40M,\n  journal = {\\apj}\n}\n"}"#;
        let bibtex = parse_export_response(json).unwrap();
        assert!(bibtex.starts_with("@ARTICLE"));
        assert!(bibtex.contains("journal = {\\apj}"));
    }

    #[test]
    fn test_parse_export_response_not_json() {
        let err = parse_export_response("<html>Bad Gateway</html>").unwrap_err();
        assert!(matches!(err, Error::Parse(_)));
    }
}
