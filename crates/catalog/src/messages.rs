//! Payloads returned by the catalog's people endpoints.
//!
//! Only the fields the ingestion path reads are modelled; everything else
//! in the catalog's responses is ignored.

use serde::Deserialize;

/// `GET /people?page=&limit=` response.
#[derive(Debug, Clone, Deserialize)]
pub struct PeoplePage {
    pub results: Vec<PersonSummary>,
}

/// One entry of a people listing. `url` points at the detail record.
#[derive(Debug, Clone, Deserialize)]
pub struct PersonSummary {
    pub url: String,
}

/// `GET /people/{uid}` response.
#[derive(Debug, Clone, Deserialize)]
pub struct PersonDetail {
    pub result: PersonResult,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PersonResult {
    pub properties: PersonProperties,
}

/// Detail properties. Only `name` is stored.
#[derive(Debug, Clone, Deserialize)]
pub struct PersonProperties {
    pub name: String,
}
