//! Frontend Models
//!
//! Data structures matching the shelter API payloads.

use serde::{Deserialize, Serialize};

/// Breed data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Breed {
    pub id: u32,
    pub name: String,
}

/// Dog sex as sent by the API; anything other than "male"/"female" lands in `Other`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Male,
    Female,
    #[serde(other)]
    Other,
}

/// Dog data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dog {
    pub id: u32,
    pub name: String,
    pub breed_name: String,
    pub sex: Sex,
    pub weight: f64,
    pub size: String,
    pub age: f64,
    pub description: String,
    /// Base64-encoded photo
    #[serde(default)]
    pub image: Option<String>,
    pub color: String,
    pub vaccinated: bool,
    pub sterilized: bool,
    pub microchipped: bool,
    pub friendly_with_kids: bool,
    pub friendly_with_animals: bool,
}

/// Paginated envelope returned by listing endpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub content: Vec<T>,
    pub total_pages: usize,
}
