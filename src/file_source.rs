//! File-source request descriptors
//!
//! File sources are remote files a notebook pulls on a schedule. The HTTP
//! client lives outside this crate; these builders only describe the CRUD
//! requests it should send.

use serde::{Deserialize, Serialize};

const FILE_SOURCES_PATH: &str = "/api/v1/file-sources/";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Method {
    Post,
    Put,
    Delete,
}

/// Payload for creating or updating a file source
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileSourceBody {
    pub url: String,
    pub filename: String,
    /// Refresh interval such as `"never"` or `"1 day"`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub update_interval: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FileSourceRequest {
    pub method: Method,
    pub path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<serde_json::Value>,
    /// Whether the response carries a JSON body to decode
    pub expects_json: bool,
}

impl FileSourceRequest {
    pub fn create(body: &FileSourceBody) -> serde_json::Result<Self> {
        Ok(Self {
            method: Method::Post,
            path: FILE_SOURCES_PATH.to_string(),
            body: Some(serde_json::to_value(body)?),
            expects_json: true,
        })
    }

    pub fn update(id: u64, body: &FileSourceBody) -> serde_json::Result<Self> {
        Ok(Self {
            method: Method::Put,
            path: item_path(id),
            body: Some(serde_json::to_value(body)?),
            expects_json: true,
        })
    }

    pub fn delete(id: u64) -> Self {
        Self {
            method: Method::Delete,
            path: item_path(id),
            body: None,
            expects_json: false,
        }
    }
}

fn item_path(id: u64) -> String {
    format!("{}{}/", FILE_SOURCES_PATH, id)
}
