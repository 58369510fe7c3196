//! # sb-store-rest
//!
//! PostgREST implementation of `SuggestionStore`. Maps the five feed
//! operations onto a hosted `suggestions` table reached over the
//! service's REST endpoint, `apikey` header plus bearer token on every
//! request.

use async_trait::async_trait;
use chrono::Utc;
use reqwest::{Client, RequestBuilder, Response};
use sb_core::error::{BoardError, Result};
use sb_core::models::{Comment, NewSuggestion, Status, Suggestion};
use sb_core::traits::SuggestionStore;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{json, Value};
use uuid::Uuid;

pub struct RestSuggestionStore {
    client: Client,
    base_url: String,
    api_key: String,
}

impl RestSuggestionStore {
    /// `base_url` is the service root (e.g. `https://xyz.supabase.co`);
    /// `api_key` the publishable key — a display-tier credential, not a
    /// secret.
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        }
    }

    fn table_url(&self) -> String {
        format!("{}/rest/v1/suggestions", self.base_url)
    }

    fn authed(&self, builder: RequestBuilder) -> RequestBuilder {
        builder
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
    }

    /// GET `?id=eq.{id}&select={select}`, expecting exactly one row.
    async fn fetch_row<T: DeserializeOwned>(&self, id: &str, select: &str) -> Result<T> {
        let response = self
            .authed(self.client.get(self.table_url()))
            .query(&[("id", format!("eq.{id}")), ("select", select.to_string())])
            .send()
            .await
            .map_err(net_err)?;

        let rows: Vec<T> = check(response).await?.json().await.map_err(decode_err)?;
        rows.into_iter()
            .next()
            .ok_or_else(|| BoardError::NotFound(id.to_string()))
    }

    /// PATCH `?id=eq.{id}` with a partial-field body.
    async fn patch_row(&self, id: &str, body: Value) -> Result<()> {
        let response = self
            .authed(self.client.patch(self.table_url()))
            .query(&[("id", format!("eq.{id}"))])
            .json(&body)
            .send()
            .await
            .map_err(net_err)?;

        check(response).await?;
        Ok(())
    }
}

#[async_trait]
impl SuggestionStore for RestSuggestionStore {
    async fn list(&self) -> Result<Vec<Suggestion>> {
        let response = self
            .authed(self.client.get(self.table_url()))
            .query(&[("select", "*"), ("order", "createdAt.desc")])
            .send()
            .await
            .map_err(net_err)?;

        check(response)
            .await?
            .json::<Vec<Suggestion>>()
            .await
            .map_err(decode_err)
    }

    async fn create(&self, new: NewSuggestion) -> Result<Suggestion> {
        let payload = insert_payload(&new, Utc::now().timestamp_millis())?;
        let response = self
            .authed(self.client.post(self.table_url()))
            .header("Prefer", "return=representation")
            .json(&payload)
            .send()
            .await
            .map_err(net_err)?;

        // `return=representation` answers with a one-element array.
        let rows: Vec<Suggestion> = check(response).await?.json().await.map_err(decode_err)?;
        rows.into_iter()
            .next()
            .ok_or_else(|| BoardError::Decode("insert returned no row".to_string()))
    }

    async fn set_like_count(&self, id: &str, increment: bool) -> Result<u32> {
        let current: LikesRow = self.fetch_row(id, "likes").await?;
        let next = bumped(current.likes, increment);
        self.patch_row(id, json!({ "likes": next })).await?;
        Ok(next)
    }

    async fn append_comment(&self, id: &str, content: &str, author: &str) -> Result<Comment> {
        let comment = Comment {
            id: Uuid::new_v4().to_string(),
            content: content.to_string(),
            author: author.to_string(),
            created_at: Utc::now().timestamp_millis(),
        };

        let mut row: CommentsRow = self.fetch_row(id, "comments").await?;
        row.comments.push(comment.clone());
        self.patch_row(id, json!({ "comments": row.comments })).await?;
        Ok(comment)
    }

    async fn touch_view(&self, id: &str) -> Result<()> {
        let current: ViewsRow = self.fetch_row(id, "views").await?;
        self.patch_row(id, json!({ "views": current.views + 1 })).await
    }
}

#[derive(Deserialize)]
struct LikesRow {
    likes: u32,
}

#[derive(Deserialize)]
struct ViewsRow {
    views: u32,
}

#[derive(Deserialize)]
struct CommentsRow {
    #[serde(default)]
    comments: Vec<Comment>,
}

/// The full insert row: content fields plus the client-stamped defaults
/// (`createdAt` now, `Pending`, zeroed counters, empty comment array).
fn insert_payload(new: &NewSuggestion, created_at: i64) -> Result<Value> {
    let mut row = serde_json::to_value(new).map_err(|e| BoardError::Decode(e.to_string()))?;
    let fields = row
        .as_object_mut()
        .ok_or_else(|| BoardError::Decode("insert payload must be an object".to_string()))?;

    fields.insert("createdAt".to_string(), json!(created_at));
    fields.insert("status".to_string(), json!(Status::Pending));
    fields.insert("likes".to_string(), json!(0));
    fields.insert("views".to_string(), json!(0));
    fields.insert("comments".to_string(), json!([]));
    Ok(row)
}

/// ±1 clamped at zero. Plain read-modify-write, no compare-and-swap:
/// concurrent likes from different sessions race and the last write wins.
fn bumped(current: u32, increment: bool) -> u32 {
    if increment {
        current + 1
    } else {
        current.saturating_sub(1)
    }
}

async fn check(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(BoardError::Remote(format!("{status}: {body}")))
}

fn net_err(err: reqwest::Error) -> BoardError {
    BoardError::Network(err.to_string())
}

fn decode_err(err: reqwest::Error) -> BoardError {
    BoardError::Decode(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sb_core::models::{Category, SuggestionKind};

    #[test]
    fn bumped_clamps_at_zero() {
        assert_eq!(bumped(3, true), 4);
        assert_eq!(bumped(3, false), 2);
        assert_eq!(bumped(0, false), 0);
    }

    #[test]
    fn insert_payload_carries_the_client_stamped_defaults() {
        let new = NewSuggestion {
            title: "More plugs".to_string(),
            problem: "Not enough outlets".to_string(),
            solution: "Install more".to_string(),
            impact: "Everyone".to_string(),
            category: Category::Facilities,
            kind: SuggestionKind::Improvement,
            author: "Visitor #4821".to_string(),
        };

        let row = insert_payload(&new, 1_700_000_000_000).unwrap();
        assert_eq!(row["title"], "More plugs");
        assert_eq!(row["type"], "improvement");
        assert_eq!(row["createdAt"], 1_700_000_000_000_i64);
        assert_eq!(row["status"], "pending");
        assert_eq!(row["likes"], 0);
        assert_eq!(row["views"], 0);
        assert_eq!(row["comments"], json!([]));
        // The server assigns the id; the payload must not carry one.
        assert!(row.get("id").is_none());
    }

    #[test]
    fn base_url_trailing_slash_is_normalized() {
        let store = RestSuggestionStore::new("https://example.test/", "key");
        assert_eq!(store.table_url(), "https://example.test/rest/v1/suggestions");
    }
}
