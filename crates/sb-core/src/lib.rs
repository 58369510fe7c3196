//! suggestion-board/crates/sb-core/src/lib.rs
//!
//! The central domain models and interface definitions for the
//! suggestion board client.

pub mod models;
pub mod traits;
pub mod error;

// Re-exporting for easier access in other crates
pub use models::*;
pub use traits::*;
pub use error::*;


#[cfg(test)]
mod tests {
    use super::models::*;

    #[test]
    fn suggestion_wire_names_are_camel_case() {
        let s = Suggestion {
            id: "s1".to_string(),
            title: "More lab hours".to_string(),
            problem: "Labs close too early".to_string(),
            solution: "Evening access".to_string(),
            impact: "Everyone".to_string(),
            category: Category::Facilities,
            kind: SuggestionKind::Improvement,
            status: Status::Pending,
            author: "Visitor #1234".to_string(),
            created_at: 1_700_000_000_000,
            likes: 0,
            views: 0,
            comments: vec![],
        };
        let value = serde_json::to_value(&s).unwrap();
        assert_eq!(value["createdAt"], 1_700_000_000_000_i64);
        assert_eq!(value["type"], "improvement");
        assert_eq!(value["status"], "pending");
    }

    #[test]
    fn missing_comments_column_reads_as_empty() {
        let raw = r#"{
            "id": "s1", "title": "t", "problem": "p", "solution": "s",
            "impact": "i", "category": "other", "type": "initiative",
            "status": "pending", "author": "Visitor #1",
            "createdAt": 1, "likes": 2, "views": 3
        }"#;
        let s: Suggestion = serde_json::from_str(raw).unwrap();
        assert!(s.comments.is_empty());
        assert_eq!(s.likes, 2);
    }
}
