//! Customer comments and the derived product rating.

use crate::ids::CommentId;
use serde::{Deserialize, Serialize};

/// A customer comment embedded in a product.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    /// Comment identifier.
    #[serde(default)]
    pub id: CommentId,
    /// Star rating given by the author. Missing ratings count as zero.
    #[serde(default)]
    pub rating: f64,
    /// Comment body.
    #[serde(default, alias = "text")]
    pub content: String,
    /// Display name of the author, when the backend provides one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
}

impl Comment {
    /// Create a comment with a rating and body.
    pub fn new(id: impl Into<CommentId>, rating: f64, content: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            rating,
            content: content.into(),
            author: None,
        }
    }
}

/// Mean of the comments' ratings rounded to one decimal place, or `0.0` when
/// there are no comments.
pub fn derived_rating(comments: &[Comment]) -> f64 {
    if comments.is_empty() {
        return 0.0;
    }
    let total: f64 = comments.iter().map(|c| c.rating).sum();
    let mean = total / comments.len() as f64;
    (mean * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rated(ratings: &[f64]) -> Vec<Comment> {
        ratings
            .iter()
            .enumerate()
            .map(|(i, r)| Comment::new(format!("c{i}"), *r, "ok"))
            .collect()
    }

    #[test]
    fn test_rating_mean() {
        assert_eq!(derived_rating(&rated(&[4.0, 5.0])), 4.5);
    }

    #[test]
    fn test_rating_empty_is_zero() {
        assert_eq!(derived_rating(&[]), 0.0);
    }

    #[test]
    fn test_rating_rounds_to_one_decimal() {
        // 13 / 3 = 4.333...
        assert_eq!(derived_rating(&rated(&[4.0, 4.0, 5.0])), 4.3);
        // 14 / 3 = 4.666...
        assert_eq!(derived_rating(&rated(&[4.0, 5.0, 5.0])), 4.7);
    }

    #[test]
    fn test_missing_rating_counts_as_zero() {
        let comments: Vec<Comment> =
            serde_json::from_str(r#"[{"id":"a","rating":4},{"id":"b","content":"no stars"}]"#)
                .unwrap();
        assert_eq!(derived_rating(&comments), 2.0);
    }

    #[test]
    fn test_comment_accepts_text_alias() {
        let c: Comment = serde_json::from_str(r#"{"id":"a","rating":5,"text":"lovely"}"#).unwrap();
        assert_eq!(c.content, "lovely");
    }
}
