//! Comment: user text attached to one catalog record.

use serde::Serialize;
use utoipa::ToSchema;

use super::{Target, TargetColumns};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub id: i32,
    pub user_id: i32,
    pub target: Target,
    pub comment_text: String,
    pub is_active: bool,
}

/// External representation of a comment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct CommentResponse {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = 1)]
    pub user_id: i32,
    #[serde(flatten)]
    pub target: TargetColumns,
    #[schema(example = "nice planet")]
    pub comment_text: String,
    #[schema(example = true)]
    pub is_active: bool,
}

impl From<Comment> for CommentResponse {
    fn from(comment: Comment) -> Self {
        Self {
            id: comment.id,
            user_id: comment.user_id,
            target: comment.target.columns(),
            comment_text: comment.comment_text,
            is_active: comment.is_active,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comment_serialization() {
        let comment = Comment {
            id: 11,
            user_id: 2,
            target: Target::Character(1),
            comment_text: "great pilot".to_string(),
            is_active: true,
        };

        let json = serde_json::to_value(CommentResponse::from(comment)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": 11,
                "user_id": 2,
                "character_id": 1,
                "comment_text": "great pilot",
                "is_active": true
            })
        );
    }
}
