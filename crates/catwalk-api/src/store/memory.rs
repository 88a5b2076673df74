//! In-process store backed by `DashMap`.

use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use dashmap::DashMap;

use catwalk_core::error::{CatwalkError, Result};
use catwalk_core::model::{Account, Achievement, Cat, CatDraft};

use super::Store;

/// Registry-style store:
/// - `cat id -> Cat`
/// - `achievement id -> Achievement`
/// - `username -> Account`
#[derive(Default)]
pub struct MemoryStore {
    cats: DashMap<u64, Cat>,
    achievements: DashMap<u64, Achievement>,
    accounts: DashMap<String, Account>,
    cat_seq: AtomicU64,
    achievement_seq: AtomicU64,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            cats: DashMap::new(),
            achievements: DashMap::new(),
            accounts: DashMap::new(),
            cat_seq: AtomicU64::new(1),
            achievement_seq: AtomicU64::new(1),
        }
    }

    fn find_achievement_by_name(&self, name: &str) -> Option<Achievement> {
        self.achievements
            .iter()
            .find(|e| e.value().name == name)
            .map(|e| e.value().clone())
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn insert_cat(&self, owner: String, draft: CatDraft) -> Cat {
        let id = self.cat_seq.fetch_add(1, Ordering::Relaxed);
        let cat = Cat {
            id,
            name: draft.name,
            color: draft.color,
            birth_year: draft.birth_year,
            owner,
            achievements: draft.achievements,
        };
        self.cats.insert(id, cat.clone());
        cat
    }

    async fn get_cat(&self, id: u64) -> Option<Cat> {
        self.cats.get(&id).map(|r| r.value().clone())
    }

    async fn list_cats(&self) -> Vec<Cat> {
        let mut all: Vec<Cat> = self.cats.iter().map(|r| r.value().clone()).collect();
        all.sort_by_key(|c| c.id);
        all
    }

    async fn replace_cat(&self, cat: Cat) -> Option<Cat> {
        let mut slot = self.cats.get_mut(&cat.id)?;
        *slot = cat.clone();
        Some(cat)
    }

    async fn remove_cat(&self, id: u64) -> bool {
        self.cats.remove(&id).is_some()
    }

    async fn ensure_achievement(&self, name: &str) -> Achievement {
        if let Some(found) = self.find_achievement_by_name(name) {
            return found;
        }
        let id = self.achievement_seq.fetch_add(1, Ordering::Relaxed);
        let achievement = Achievement {
            id,
            name: name.to_string(),
        };
        self.achievements.insert(id, achievement.clone());
        achievement
    }

    async fn insert_achievement(&self, name: &str) -> Result<Achievement> {
        if self.find_achievement_by_name(name).is_some() {
            return Err(CatwalkError::BadRequest(format!(
                "achievement already exists: {name}"
            )));
        }
        let id = self.achievement_seq.fetch_add(1, Ordering::Relaxed);
        let achievement = Achievement {
            id,
            name: name.to_string(),
        };
        self.achievements.insert(id, achievement.clone());
        Ok(achievement)
    }

    async fn get_achievement(&self, id: u64) -> Option<Achievement> {
        self.achievements.get(&id).map(|r| r.value().clone())
    }

    async fn list_achievements(&self) -> Vec<Achievement> {
        let mut all: Vec<Achievement> = self
            .achievements
            .iter()
            .map(|r| r.value().clone())
            .collect();
        all.sort_by_key(|a| a.id);
        all
    }

    async fn rename_achievement(&self, id: u64, name: &str) -> Option<Achievement> {
        let mut slot = self.achievements.get_mut(&id)?;
        slot.name = name.to_string();
        Some(slot.clone())
    }

    async fn remove_achievement(&self, id: u64) -> bool {
        self.achievements.remove(&id).is_some()
    }

    async fn ensure_account(&self, username: &str) -> Account {
        self.accounts
            .entry(username.to_string())
            .or_insert_with(|| Account {
                username: username.to_string(),
            })
            .clone()
    }

    async fn get_account(&self, username: &str) -> Option<Account> {
        self.accounts.get(username).map(|r| r.value().clone())
    }

    async fn list_accounts(&self) -> Vec<Account> {
        let mut all: Vec<Account> = self.accounts.iter().map(|r| r.value().clone()).collect();
        all.sort_by(|a, b| a.username.cmp(&b.username));
        all
    }
}
