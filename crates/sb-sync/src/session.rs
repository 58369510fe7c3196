//! Per-device session identity and liked-post tracking.
//!
//! The visitor id is a 4-digit display tag, not a credential. The liked
//! set — not anything the remote store knows — is the source of truth
//! for whether a toggle adds or removes a like.

use std::collections::HashSet;
use std::sync::Arc;

use rand::Rng;
use sb_core::{Draft, Result, SessionStore};
use tracing::warn;

pub const VISITOR_ID_KEY: &str = "visitor_id";
pub const LIKED_IDS_KEY: &str = "liked_ids";
pub const DRAFT_KEY: &str = "draft";

/// Session state persisted across reloads: who this device displays as
/// and which suggestions it has liked. One per running client; owns its
/// liked-id set exclusively and writes every mutation straight through
/// to durable storage.
pub struct Session {
    store: Arc<dyn SessionStore>,
    visitor_id: String,
    liked_ids: HashSet<String>,
}

impl Session {
    /// Loads identity and liked state, generating and persisting a fresh
    /// 4-digit visitor id on first use. A corrupt liked-ids entry reads
    /// as "nothing liked yet", never as an error.
    pub async fn init(store: Arc<dyn SessionStore>) -> Result<Self> {
        let visitor_id = match store.load(VISITOR_ID_KEY).await? {
            Some(id) if !id.is_empty() => id,
            _ => {
                let id = generate_visitor_id();
                store.store(VISITOR_ID_KEY, &id).await?;
                id
            }
        };

        let liked_ids = match store.load(LIKED_IDS_KEY).await? {
            Some(raw) => serde_json::from_str(&raw).unwrap_or_default(),
            None => HashSet::new(),
        };

        Ok(Self {
            store,
            visitor_id,
            liked_ids,
        })
    }

    pub fn visitor_id(&self) -> &str {
        &self.visitor_id
    }

    pub fn has_liked(&self, id: &str) -> bool {
        self.liked_ids.contains(id)
    }

    pub fn liked_ids(&self) -> &HashSet<String> {
        &self.liked_ids
    }

    /// Flips membership of `id` in the liked set and persists the set
    /// before returning. Returns `true` when the id is now liked.
    ///
    /// The in-memory set is committed even if the write to durable
    /// storage fails; a reload then simply forgets the toggle.
    pub async fn toggle_liked(&mut self, id: &str) -> bool {
        let now_liked = if self.liked_ids.remove(id) {
            false
        } else {
            self.liked_ids.insert(id.to_string());
            true
        };

        match serde_json::to_string(&self.liked_ids) {
            Ok(raw) => {
                if let Err(err) = self.store.store(LIKED_IDS_KEY, &raw).await {
                    warn!(%id, %err, "failed to persist liked ids");
                }
            }
            Err(err) => warn!(%err, "failed to encode liked ids"),
        }

        now_liked
    }

    /// Persists the in-progress submission. Called on every field edit,
    /// so a reload mid-wizard picks up where the visitor left off.
    pub async fn save_draft(&self, draft: &Draft) -> Result<()> {
        let raw = serde_json::to_string(draft)
            .map_err(|e| sb_core::BoardError::Decode(e.to_string()))?;
        self.store.store(DRAFT_KEY, &raw).await
    }

    /// `None` when no draft is stored or the stored value is unreadable.
    pub async fn load_draft(&self) -> Option<Draft> {
        let raw = self.store.load(DRAFT_KEY).await.ok().flatten()?;
        serde_json::from_str(&raw).ok()
    }

    pub async fn clear_draft(&self) -> Result<()> {
        self.store.remove(DRAFT_KEY).await
    }
}

fn generate_visitor_id() -> String {
    rand::rng().random_range(1000..10000_u16).to_string()
}
