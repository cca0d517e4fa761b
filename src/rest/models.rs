use serde::{Deserialize, Serialize};

use crate::types::Quote;

#[derive(Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub uptime_secs: u64,
}

#[derive(Serialize, Deserialize)]
pub struct QuotesResponse {
    pub quotes: Vec<Quote>,
}

#[derive(Serialize, Deserialize)]
pub struct NewQuoteRequest {
    pub text: String,
    pub category: String,
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewResponse {
    pub line: String,
    pub empty: bool,
}

#[derive(Serialize, Deserialize)]
pub struct CategoriesResponse {
    pub selected: String,
    pub options: Vec<String>,
}

#[derive(Serialize, Deserialize)]
pub struct FilterRequest {
    pub category: String,
}

#[derive(Serialize, Deserialize)]
pub struct ImportResponse {
    pub imported: usize,
}

#[derive(Serialize, Deserialize)]
pub struct PushResponse {
    pub pushed: bool,
}

#[derive(Serialize, Deserialize)]
pub struct ErrorResponse {
    pub message: String,
}
