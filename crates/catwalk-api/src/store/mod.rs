//! Persistence collaborator.
//!
//! The core never talks to storage directly; it goes through the `Store`
//! trait. The bundled implementation is an in-process registry, enough for
//! the service to run standalone and for tests to exercise the full
//! pipeline. Per-call atomicity only; no transactions.

pub mod memory;

use async_trait::async_trait;

use catwalk_core::error::Result;
use catwalk_core::model::{Account, Achievement, Cat, CatDraft};

pub use memory::MemoryStore;

/// Queryable collection + CRUD surface the dispatcher delegates to.
#[async_trait]
pub trait Store: Send + Sync {
    async fn insert_cat(&self, owner: String, draft: CatDraft) -> Cat;
    async fn get_cat(&self, id: u64) -> Option<Cat>;
    /// Full collection snapshot in stable (insertion id) order.
    async fn list_cats(&self) -> Vec<Cat>;
    /// Replace an existing cat wholesale. Returns the stored value, or None
    /// if the id no longer resolves.
    async fn replace_cat(&self, cat: Cat) -> Option<Cat>;
    async fn remove_cat(&self, id: u64) -> bool;

    /// Look up an achievement by name, creating it if absent.
    async fn ensure_achievement(&self, name: &str) -> Achievement;
    async fn insert_achievement(&self, name: &str) -> Result<Achievement>;
    async fn get_achievement(&self, id: u64) -> Option<Achievement>;
    async fn list_achievements(&self) -> Vec<Achievement>;
    async fn rename_achievement(&self, id: u64, name: &str) -> Option<Achievement>;
    async fn remove_achievement(&self, id: u64) -> bool;

    async fn ensure_account(&self, username: &str) -> Account;
    async fn get_account(&self, username: &str) -> Option<Account>;
    async fn list_accounts(&self) -> Vec<Account>;
}
