//! User handlers: registration, listing and per-user relations.

use axum::{
    extract::State,
    response::Json,
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::api::extractors::{ValidatedJson, ValidatedPath};
use crate::api::AppState;
use crate::config::MSG_CREDENTIALS_REQUIRED;
use crate::domain::{CommentResponse, CreateUser, FavoriteResponse, UserResponse};
use crate::errors::{AppError, AppResult};
use crate::types::{Created, EmptyBody};

/// User registration request.
///
/// Both fields are optional at the wire level so a missing one is reported
/// with the same message as a null one.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateUserRequest {
    /// User email address
    #[validate(
        required(message = "Email and Password are Required"),
        length(max = 120, message = "Email must be at most 120 characters")
    )]
    #[schema(example = "luke@rebellion.org")]
    pub email: Option<String>,
    /// User password
    #[validate(required(message = "Email and Password are Required"))]
    #[schema(example = "use-the-force")]
    pub password: Option<String>,
}

impl TryFrom<CreateUserRequest> for CreateUser {
    type Error = AppError;

    fn try_from(request: CreateUserRequest) -> Result<Self, Self::Error> {
        match (request.email, request.password) {
            (Some(email), Some(password)) => Ok(CreateUser { email, password }),
            _ => Err(AppError::validation(MSG_CREDENTIALS_REQUIRED)),
        }
    }
}

/// Create user routes
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/user", post(create_user))
        .route("/users", get(list_users))
        .route("/users/:user_id/favorites", get(list_user_favorites))
        .route("/users/:user_id/comments", get(list_user_comments))
}

/// Register a user
#[utoipa::path(
    post,
    path = "/user",
    tag = "Users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created", body = EmptyBody),
        (status = 400, description = "Missing field or email already registered", body = MessageResponse),
        (status = 500, description = "Server error", body = MessageResponse)
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateUserRequest>,
) -> AppResult<Created<EmptyBody>> {
    state.user_service.create_user(payload.try_into()?).await?;
    Ok(Created(EmptyBody::default()))
}

/// List all users
#[utoipa::path(
    get,
    path = "/users",
    tag = "Users",
    responses(
        (status = 200, description = "All users", body = [UserResponse]),
        (status = 404, description = "No users found", body = MessageResponse)
    )
)]
pub async fn list_users(State(state): State<AppState>) -> AppResult<Json<Vec<UserResponse>>> {
    let users = state.user_service.list_users().await?;
    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

/// Favorites of a user
#[utoipa::path(
    get,
    path = "/users/{user_id}/favorites",
    tag = "Users",
    params(("user_id" = i32, Path, description = "User ID")),
    responses(
        (status = 200, description = "User favorites", body = [FavoriteResponse]),
        (status = 400, description = "User ID is missing", body = MessageResponse),
        (status = 404, description = "User not found or has no favorites", body = MessageResponse)
    )
)]
pub async fn list_user_favorites(
    State(state): State<AppState>,
    ValidatedPath(user_id): ValidatedPath<i32>,
) -> AppResult<Json<Vec<FavoriteResponse>>> {
    let favorites = state.favorite_service.list_for_user(user_id).await?;
    Ok(Json(favorites.into_iter().map(FavoriteResponse::from).collect()))
}

/// Comments written by a user
#[utoipa::path(
    get,
    path = "/users/{user_id}/comments",
    tag = "Users",
    params(("user_id" = i32, Path, description = "User ID")),
    responses(
        (status = 200, description = "User comments", body = [CommentResponse]),
        (status = 404, description = "User not found", body = MessageResponse)
    )
)]
pub async fn list_user_comments(
    State(state): State<AppState>,
    ValidatedPath(user_id): ValidatedPath<i32>,
) -> AppResult<Json<Vec<CommentResponse>>> {
    let comments = state.comment_service.list_for_user(user_id).await?;
    Ok(Json(comments.into_iter().map(CommentResponse::from).collect()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_password_fails_validation() {
        let request: CreateUserRequest =
            serde_json::from_value(serde_json::json!({ "email": "a@b.c" })).unwrap();
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_email_longer_than_column_fails_validation() {
        let request = CreateUserRequest {
            email: Some(format!("{}@b.c", "a".repeat(117))),
            password: Some("pw".to_string()),
        };
        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("email"));

        let request = CreateUserRequest {
            email: Some(format!("{}@b.c", "a".repeat(116))),
            password: Some("pw".to_string()),
        };
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_complete_request_converts() {
        let request = CreateUserRequest {
            email: Some("a@b.c".to_string()),
            password: Some("pw".to_string()),
        };
        assert!(request.validate().is_ok());

        let input = CreateUser::try_from(request).unwrap();
        assert_eq!(input.email, "a@b.c");
    }
}
