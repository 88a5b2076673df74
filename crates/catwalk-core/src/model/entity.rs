//! Persisted entities and their inbound wire shapes.

use serde::{Deserialize, Serialize};

/// A cat record.
///
/// `owner` is set once at creation from the calling identity and never
/// accepted from a request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cat {
    pub id: u64,
    pub name: String,
    pub color: String,
    pub birth_year: i32,
    /// Owner identity label (username, or origin label for anonymous).
    pub owner: String,
    /// Names of linked achievements (order-irrelevant set).
    #[serde(default)]
    pub achievements: Vec<String>,
}

/// Inbound body for creating a cat or fully replacing one.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CatDraft {
    pub name: String,
    pub color: String,
    pub birth_year: i32,
    #[serde(default)]
    pub achievements: Vec<String>,
}

/// Inbound body for a partial update; unset fields keep their value.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CatPatch {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub birth_year: Option<i32>,
    #[serde(default)]
    pub achievements: Option<Vec<String>>,
}

/// A named achievement tag, attachable to cats.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Achievement {
    pub id: u64,
    pub name: String,
}

/// An account that can own cats. May also be referenced by search.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    pub username: String,
}
