//! The canonical client-side board state and its mutation operations.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use sb_core::{
    BoardError, Category, Comment, Draft, NewSuggestion, Result, Suggestion, SuggestionKind,
    SuggestionStore,
};
use tracing::{debug, warn};

use crate::session::Session;

/// Busy flag with a drop guard, so `loading`/`syncing` cannot stay stuck
/// set when an operation bails out early.
#[derive(Clone, Default)]
struct BusyFlag(Arc<AtomicBool>);

impl BusyFlag {
    fn raise(&self) -> BusyGuard {
        self.0.store(true, Ordering::Relaxed);
        BusyGuard(Arc::clone(&self.0))
    }

    fn is_set(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

struct BusyGuard(Arc<AtomicBool>);

impl Drop for BusyGuard {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Relaxed);
    }
}

/// Display options for the board.
#[derive(Debug, Clone)]
pub struct BoardOptions {
    /// Label prefixed to the visitor id in the attribution string,
    /// e.g. "Visitor" → "Visitor #4821". Localized by the deployment.
    pub author_label: String,
}

impl Default for BoardOptions {
    fn default() -> Self {
        Self {
            author_label: "Visitor".to_string(),
        }
    }
}

/// The one canonical copy of the suggestion feed in a running client.
///
/// Owns the in-memory collection outright; consumers borrow views per
/// render and call the mutation operations here. Mutations take
/// `&mut self`, so no two of them can interleave mid-update — remote
/// calls may still overlap across operations (spawned view bumps, a slow
/// refresh racing a like), and no ordering is promised between them. A
/// refresh that resolves after an optimistic local change simply
/// overwrites it with server truth; that is accepted, not defended
/// against.
pub struct SuggestionBoard {
    store: Arc<dyn SuggestionStore>,
    session: Session,
    suggestions: Vec<Suggestion>,
    loading: BusyFlag,
    syncing: BusyFlag,
    last_error: Option<String>,
    author_label: String,
}

impl SuggestionBoard {
    pub fn new(store: Arc<dyn SuggestionStore>, session: Session) -> Self {
        Self::with_options(store, session, BoardOptions::default())
    }

    pub fn with_options(
        store: Arc<dyn SuggestionStore>,
        session: Session,
        options: BoardOptions,
    ) -> Self {
        Self {
            store,
            session,
            suggestions: Vec::new(),
            loading: BusyFlag::default(),
            syncing: BusyFlag::default(),
            last_error: None,
            author_label: options.author_label,
        }
    }

    pub fn suggestions(&self) -> &[Suggestion] {
        &self.suggestions
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn is_loading(&self) -> bool {
        self.loading.is_set()
    }

    pub fn is_syncing(&self) -> bool {
        self.syncing.is_set()
    }

    /// The last fetch failure, display-only; cleared by the next refresh.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    fn author(&self) -> String {
        format!("{} #{}", self.author_label, self.session.visitor_id())
    }

    /// Re-fetches the feed and replaces the local collection wholesale.
    /// A failed fetch leaves the collection as-is and surfaces the error
    /// through `last_error`; consumers show a retry affordance.
    pub async fn refresh(&mut self) {
        let _busy = self.loading.raise();
        self.last_error = None;

        match self.store.list().await {
            Ok(rows) => self.suggestions = rows,
            Err(err) => self.last_error = Some(err.to_string()),
        }
    }

    /// Submits a new suggestion. The local feed is only touched after the
    /// server acknowledges — a failed insert leaves no ghost entry, and
    /// the error propagates so the submission flow keeps its draft.
    #[allow(clippy::too_many_arguments)]
    pub async fn create(
        &mut self,
        title: impl Into<String>,
        problem: impl Into<String>,
        solution: impl Into<String>,
        impact: impl Into<String>,
        category: Category,
        kind: SuggestionKind,
    ) -> Result<&Suggestion> {
        let _busy = self.syncing.raise();

        let new = NewSuggestion {
            title: title.into(),
            problem: problem.into(),
            solution: solution.into(),
            impact: impact.into(),
            category,
            kind,
            author: self.author(),
        };
        let created = self.store.create(new).await?;
        self.suggestions.insert(0, created);
        Ok(&self.suggestions[0])
    }

    /// Optimistic like toggle: local state first, remote second, no
    /// rollback. The liked set decides the direction, is committed to
    /// durable storage immediately, and the local counter moves with it.
    /// The remote write's outcome — count or error — is deliberately
    /// discarded; the optimistic counter stands until the next
    /// `refresh()` brings server truth, which can make a like appear to
    /// lose count after a failed write. Rapid repeat toggles each issue
    /// their own remote call, not coalesced.
    pub async fn toggle_like(&mut self, id: &str) {
        let now_liked = self.session.toggle_liked(id).await;

        if let Some(s) = self.suggestions.iter_mut().find(|s| s.id == id) {
            s.likes = if now_liked {
                s.likes + 1
            } else {
                s.likes.saturating_sub(1)
            };
        }

        if let Err(err) = self.store.set_like_count(id, now_liked).await {
            warn!(%id, %err, "like write failed; keeping optimistic count");
        }
    }

    /// Appends a comment. Unlike likes there is no optimistic pre-append:
    /// the local sequence only grows once the server acknowledges, and a
    /// failure propagates so the input stays retryable.
    pub async fn add_comment(&mut self, suggestion_id: &str, content: &str) -> Result<Comment> {
        if content.trim().is_empty() {
            return Err(BoardError::Invalid("comment must not be empty".to_string()));
        }

        let _busy = self.syncing.raise();

        let author = self.author();
        let comment = self
            .store
            .append_comment(suggestion_id, content, &author)
            .await?;

        if let Some(s) = self.suggestions.iter_mut().find(|s| s.id == suggestion_id) {
            s.comments.push(comment.clone());
        }
        Ok(comment)
    }

    /// View counts are best-effort: bump the local counter right away,
    /// tell the server on a detached task, and never reconcile within
    /// the session.
    pub fn record_view(&mut self, id: &str) {
        if let Some(s) = self.suggestions.iter_mut().find(|s| s.id == id) {
            s.views += 1;
        }

        let store = Arc::clone(&self.store);
        let id = id.to_string();
        tokio::spawn(async move {
            if let Err(err) = store.touch_view(&id).await {
                debug!(%id, %err, "view bump dropped");
            }
        });
    }

    pub async fn save_draft(&self, draft: &Draft) -> Result<()> {
        self.session.save_draft(draft).await
    }

    pub async fn load_draft(&self) -> Option<Draft> {
        self.session.load_draft().await
    }

    /// Called by the submission flow after a successful `create`.
    pub async fn clear_draft(&self) -> Result<()> {
        self.session.clear_draft().await
    }
}
