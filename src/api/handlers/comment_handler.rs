//! Comment handlers.

use axum::{extract::State, routing::post, Router};
use serde::Deserialize;
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use crate::api::extractors::{ValidatedJson, ValidatedPath};
use crate::api::AppState;
use crate::config::MSG_COMMENT_REQUIRED;
use crate::domain::{Target, TargetKind};
use crate::errors::{AppError, AppResult};
use crate::types::{Created, MessageResponse};

/// Comment request body. Absent, null, zero and empty values are all
/// rejected with one message.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CommentRequest {
    /// Author's user ID
    #[validate(
        required(message = "User ID and comment text are required"),
        range(min = 1, message = "User ID and comment text are required")
    )]
    #[schema(example = 1)]
    pub user_id: Option<i32>,
    /// Comment text
    #[validate(
        required(message = "User ID and comment text are required"),
        length(min = 1, message = "User ID and comment text are required"),
        custom(
            function = "comment_fits",
            message = "Comment text must be at most 250 characters"
        )
    )]
    #[schema(example = "nice planet")]
    pub comment_text: Option<String>,
}

/// Longest comment the store accepts, in characters.
const MAX_COMMENT_LENGTH: usize = 250;

fn comment_fits<T: AsRef<str>>(text: T) -> Result<(), ValidationError> {
    if text.as_ref().chars().count() > MAX_COMMENT_LENGTH {
        return Err(ValidationError::new("length"));
    }
    Ok(())
}

/// Create comment routes
pub fn comment_routes() -> Router<AppState> {
    Router::new()
        .route("/comment/planet/:planet_id", post(add_planet_comment))
        .route("/comments/people/:people_id", post(add_people_comment))
        .route("/comments/starship/:starship_id", post(add_starship_comment))
}

async fn add(
    state: &AppState,
    request: CommentRequest,
    target: Target,
) -> AppResult<Created<MessageResponse>> {
    let (Some(user_id), Some(comment_text)) = (request.user_id, request.comment_text) else {
        return Err(AppError::validation(MSG_COMMENT_REQUIRED));
    };

    state
        .comment_service
        .add(user_id, target, comment_text)
        .await?;

    Ok(Created(MessageResponse::new(
        target.kind().comment_added_message(),
    )))
}

/// Comment on a planet
#[utoipa::path(
    post,
    path = "/comment/planet/{planet_id}",
    tag = "Comments",
    params(("planet_id" = i32, Path, description = "Planet ID")),
    request_body = CommentRequest,
    responses(
        (status = 201, description = "Comment added to planet", body = MessageResponse),
        (status = 400, description = "User ID and comment text are required", body = MessageResponse),
        (status = 404, description = "User or planet not found", body = MessageResponse)
    )
)]
pub async fn add_planet_comment(
    State(state): State<AppState>,
    ValidatedPath(planet_id): ValidatedPath<i32>,
    ValidatedJson(request): ValidatedJson<CommentRequest>,
) -> AppResult<Created<MessageResponse>> {
    add(&state, request, Target::new(TargetKind::Planet, planet_id)).await
}

/// Comment on a character
#[utoipa::path(
    post,
    path = "/comments/people/{people_id}",
    tag = "Comments",
    params(("people_id" = i32, Path, description = "Character ID")),
    request_body = CommentRequest,
    responses(
        (status = 201, description = "Comment added to character", body = MessageResponse),
        (status = 400, description = "User ID and comment text are required", body = MessageResponse),
        (status = 404, description = "User or character not found", body = MessageResponse)
    )
)]
pub async fn add_people_comment(
    State(state): State<AppState>,
    ValidatedPath(people_id): ValidatedPath<i32>,
    ValidatedJson(request): ValidatedJson<CommentRequest>,
) -> AppResult<Created<MessageResponse>> {
    add(&state, request, Target::new(TargetKind::Character, people_id)).await
}

/// Comment on a starship
#[utoipa::path(
    post,
    path = "/comments/starship/{starship_id}",
    tag = "Comments",
    params(("starship_id" = i32, Path, description = "Starship ID")),
    request_body = CommentRequest,
    responses(
        (status = 201, description = "Comment added to starship", body = MessageResponse),
        (status = 400, description = "User ID and comment text are required", body = MessageResponse),
        (status = 404, description = "User or starship not found", body = MessageResponse)
    )
)]
pub async fn add_starship_comment(
    State(state): State<AppState>,
    ValidatedPath(starship_id): ValidatedPath<i32>,
    ValidatedJson(request): ValidatedJson<CommentRequest>,
) -> AppResult<Created<MessageResponse>> {
    add(&state, request, Target::new(TargetKind::Starship, starship_id)).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text_is_rejected() {
        let request = CommentRequest {
            user_id: Some(1),
            comment_text: Some(String::new()),
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_zero_user_id_is_rejected() {
        let request = CommentRequest {
            user_id: Some(0),
            comment_text: Some("nice planet".to_string()),
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_overlong_text_is_rejected() {
        let request = CommentRequest {
            user_id: Some(1),
            comment_text: Some("x".repeat(MAX_COMMENT_LENGTH + 1)),
        };
        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("comment_text"));

        let request = CommentRequest {
            user_id: Some(1),
            comment_text: Some("x".repeat(MAX_COMMENT_LENGTH)),
        };
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_complete_request_passes() {
        let request: CommentRequest = serde_json::from_value(serde_json::json!({
            "user_id": 1,
            "comment_text": "nice planet"
        }))
        .unwrap();
        assert!(request.validate().is_ok());
    }
}
