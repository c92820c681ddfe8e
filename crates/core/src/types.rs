//! Core types shared across ArtScope: the collection object model as the
//! API returns it, and the result-set envelope the search flow passes
//! around.

use serde::Deserialize;

// ---------------------------------------------------------------------------
// Collection objects
// ---------------------------------------------------------------------------

/// A single collection object as returned by the API's object endpoint.
///
/// Every field defaults when the API omits it — records are frequently
/// sparse, and the detail panel skips what is missing rather than fail.
#[derive(Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ObjectRecord {
    pub objectid: u64,
    pub title: Option<String>,
    pub dated: Option<String>,
    pub description: Option<String>,
    pub style: Option<String>,
    pub dimensions: Option<String>,
    pub department: Option<String>,
    pub division: Option<String>,
    pub contact: Option<String>,
    pub creditline: Option<String>,
    pub culture: Option<String>,
    pub technique: Option<String>,
    pub medium: Option<String>,
    pub people: Option<Vec<Person>>,
    pub images: Option<Vec<ImageRecord>>,
    /// Thumbnail used by the results sidebar, not the detail panel.
    pub primaryimageurl: Option<String>,
}

/// A person associated with an object (artist, sitter, donor...).
#[derive(Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Person {
    pub displayname: String,
}

/// One photo of an object.
#[derive(Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ImageRecord {
    pub imageid: u64,
    pub baseimageurl: String,
    pub alttext: String,
}

// ---------------------------------------------------------------------------
// Result sets
// ---------------------------------------------------------------------------

/// Paging metadata from the API envelope.
#[derive(Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct PageInfo {
    pub totalrecords: u64,
    pub page: u64,
    pub pages: u64,
}

/// The result set of one query: paging info plus the matching records.
#[derive(Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct SearchResults {
    pub info: PageInfo,
    pub records: Vec<ObjectRecord>,
}
