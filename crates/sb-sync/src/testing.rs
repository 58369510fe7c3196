//! Shared test doubles and fixtures for the sync-layer tests.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use sb_core::{Category, Result, SessionStore, Status, Suggestion, SuggestionKind};

/// In-memory `SessionStore`, shared between "reloads" via `Arc` cloning.
#[derive(Default)]
pub struct MemorySessions(Mutex<HashMap<String, String>>);

#[async_trait]
impl SessionStore for MemorySessions {
    async fn load(&self, key: &str) -> Result<Option<String>> {
        Ok(self.0.lock().unwrap().get(key).cloned())
    }

    async fn store(&self, key: &str, value: &str) -> Result<()> {
        self.0.lock().unwrap().insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<()> {
        self.0.lock().unwrap().remove(key);
        Ok(())
    }
}

pub fn suggestion(id: &str, likes: u32) -> Suggestion {
    Suggestion {
        id: id.to_string(),
        title: format!("title {id}"),
        problem: format!("problem {id}"),
        solution: "do the thing".to_string(),
        impact: "big".to_string(),
        category: Category::Other,
        kind: SuggestionKind::Improvement,
        status: Status::Pending,
        author: "Visitor #1234".to_string(),
        created_at: 1_700_000_000_000,
        likes,
        views: 0,
        comments: vec![],
    }
}
