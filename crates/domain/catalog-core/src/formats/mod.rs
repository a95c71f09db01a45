//! Wire shapes of the upstream REST API.
//!
//! Only the fields the browser consumes are modelled. Unknown fields are ignored, but every
//! modelled field is required: a missing or null value fails the parse.

use serde::{Deserialize, Serialize};

/// `GET /<collection>?limit=<n>`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ListPage {
    pub count: u32,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub results: Vec<SummaryRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SummaryRecord {
    pub name: String,
    /// Detail endpoint for this record.
    pub url: String,
}

/// `GET <detail-url>`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DetailPayload {
    pub id: u32,
    pub sprites: Sprites,
    pub types: Vec<TypeSlot>,
    pub weight: u32,
    pub base_experience: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Sprites {
    pub front_default: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TypeSlot {
    #[serde(rename = "type")]
    pub kind: NamedResource,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NamedResource {
    pub name: String,
}

pub fn parse_list_page(bytes: &[u8]) -> Result<ListPage, serde_json::Error> {
    serde_json::from_slice(bytes)
}

pub fn parse_detail(bytes: &[u8]) -> Result<DetailPayload, serde_json::Error> {
    serde_json::from_slice(bytes)
}
