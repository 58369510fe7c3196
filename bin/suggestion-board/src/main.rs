//! # Suggestion Board Binary
//!
//! The entry point that assembles the client based on compile-time
//! features, fetches the feed once, and dumps it. Presentation proper
//! lives elsewhere; this binary is the wiring.

use std::sync::Arc;

use anyhow::Context;
use sb_sync::{FeedQuery, Session, SuggestionBoard};
use tracing::info;
use tracing_subscriber::EnvFilter;

// Feature-gated imports: plugins are selected at compile time
#[cfg(feature = "store-rest")]
use sb_store_rest::RestSuggestionStore;

#[cfg(feature = "session-fs")]
use sb_session_fs::FsSessionStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // 1. Remote store implementation
    #[cfg(feature = "store-rest")]
    let store = Arc::new(RestSuggestionStore::new(
        std::env::var("BOARD_STORE_URL").context("BOARD_STORE_URL not set")?,
        std::env::var("BOARD_STORE_KEY").context("BOARD_STORE_KEY not set")?,
    ));

    // 2. Durable session storage implementation
    #[cfg(feature = "session-fs")]
    let sessions = Arc::new(FsSessionStore::new(
        std::env::var("BOARD_STATE_DIR").unwrap_or_else(|_| "./data/session".to_string()),
    ));

    // 3. Session identity (generates a visitor id on first run)
    let session = Session::init(sessions).await?;
    info!(visitor = session.visitor_id(), "session ready");

    // 4. The canonical board state, seeded with one refresh
    let mut board = SuggestionBoard::new(store, session);
    board.refresh().await;
    if let Some(err) = board.last_error() {
        anyhow::bail!("feed fetch failed: {err}");
    }

    for s in FeedQuery::default().apply(board.suggestions()) {
        info!(
            id = %s.id,
            likes = s.likes,
            views = s.views,
            comments = s.comments.len(),
            title = %s.title,
            "suggestion"
        );
    }
    Ok(())
}
