//! Favorite handlers.
//!
//! Route shapes differ per target kind (`/favorite/planet/...` vs
//! `/favorites/people/...`) and are kept as published.

use axum::{
    extract::State,
    response::Json,
    routing::{delete, post},
    Router,
};
use serde::Deserialize;
use utoipa::IntoParams;
use validator::Validate;

use crate::api::extractors::{ValidatedPath, ValidatedQuery};
use crate::api::AppState;
use crate::domain::{Target, TargetKind};
use crate::errors::AppResult;
use crate::types::{Created, MessageResponse};

/// Owner of the favorite being removed
#[derive(Debug, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct OwnerQuery {
    /// User ID
    #[validate(range(min = 1, message = "User ID is required"))]
    pub user_id: Option<i32>,
}

/// Create favorite routes
pub fn favorite_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/favorites/user/:user_id/planet/:planet_id",
            post(add_favorite_planet),
        )
        .route(
            "/favorites/user/:user_id/people/:people_id",
            post(add_favorite_people),
        )
        .route(
            "/favorites/user/:user_id/starship/:starship_id",
            post(add_favorite_starship),
        )
        .route("/favorite/planet/:planet_id", delete(delete_favorite_planet))
        .route("/favorites/people/:people_id", delete(delete_favorite_people))
        .route(
            "/favorites/starship/:starship_id",
            delete(delete_favorite_starship),
        )
}

async fn add(state: &AppState, user_id: i32, target: Target) -> AppResult<Created<MessageResponse>> {
    state.favorite_service.add(user_id, target).await?;
    Ok(Created(MessageResponse::new(
        target.kind().favorite_added_message(),
    )))
}

async fn remove(
    state: &AppState,
    owner: OwnerQuery,
    target: Target,
) -> AppResult<Json<MessageResponse>> {
    state.favorite_service.remove(owner.user_id, target).await?;
    Ok(Json(MessageResponse::new(
        target.kind().favorite_deleted_message(),
    )))
}

/// Mark a planet as favorite
#[utoipa::path(
    post,
    path = "/favorites/user/{user_id}/planet/{planet_id}",
    tag = "Favorites",
    params(
        ("user_id" = i32, Path, description = "User ID"),
        ("planet_id" = i32, Path, description = "Planet ID")
    ),
    responses(
        (status = 201, description = "Planet added to favorites", body = MessageResponse),
        (status = 400, description = "User ID is required or already a favorite", body = MessageResponse),
        (status = 404, description = "User or planet not found", body = MessageResponse)
    )
)]
pub async fn add_favorite_planet(
    State(state): State<AppState>,
    ValidatedPath((user_id, planet_id)): ValidatedPath<(i32, i32)>,
) -> AppResult<Created<MessageResponse>> {
    add(&state, user_id, Target::new(TargetKind::Planet, planet_id)).await
}

/// Mark a character as favorite
#[utoipa::path(
    post,
    path = "/favorites/user/{user_id}/people/{people_id}",
    tag = "Favorites",
    params(
        ("user_id" = i32, Path, description = "User ID"),
        ("people_id" = i32, Path, description = "Character ID")
    ),
    responses(
        (status = 201, description = "Character added to favorites", body = MessageResponse),
        (status = 400, description = "User ID is required or already a favorite", body = MessageResponse),
        (status = 404, description = "User or character not found", body = MessageResponse)
    )
)]
pub async fn add_favorite_people(
    State(state): State<AppState>,
    ValidatedPath((user_id, people_id)): ValidatedPath<(i32, i32)>,
) -> AppResult<Created<MessageResponse>> {
    add(&state, user_id, Target::new(TargetKind::Character, people_id)).await
}

/// Mark a starship as favorite
#[utoipa::path(
    post,
    path = "/favorites/user/{user_id}/starship/{starship_id}",
    tag = "Favorites",
    params(
        ("user_id" = i32, Path, description = "User ID"),
        ("starship_id" = i32, Path, description = "Starship ID")
    ),
    responses(
        (status = 201, description = "Starship added to favorites", body = MessageResponse),
        (status = 400, description = "User ID is required or already a favorite", body = MessageResponse),
        (status = 404, description = "User or starship not found", body = MessageResponse)
    )
)]
pub async fn add_favorite_starship(
    State(state): State<AppState>,
    ValidatedPath((user_id, starship_id)): ValidatedPath<(i32, i32)>,
) -> AppResult<Created<MessageResponse>> {
    add(&state, user_id, Target::new(TargetKind::Starship, starship_id)).await
}

/// Remove a favorite planet
#[utoipa::path(
    delete,
    path = "/favorite/planet/{planet_id}",
    tag = "Favorites",
    params(("planet_id" = i32, Path, description = "Planet ID"), OwnerQuery),
    responses(
        (status = 200, description = "Favorite planet deleted successfully", body = MessageResponse),
        (status = 400, description = "User ID is required", body = MessageResponse),
        (status = 404, description = "Favorite planet not found", body = MessageResponse)
    )
)]
pub async fn delete_favorite_planet(
    State(state): State<AppState>,
    ValidatedPath(planet_id): ValidatedPath<i32>,
    ValidatedQuery(owner): ValidatedQuery<OwnerQuery>,
) -> AppResult<Json<MessageResponse>> {
    remove(&state, owner, Target::new(TargetKind::Planet, planet_id)).await
}

/// Remove a favorite character
#[utoipa::path(
    delete,
    path = "/favorites/people/{people_id}",
    tag = "Favorites",
    params(("people_id" = i32, Path, description = "Character ID"), OwnerQuery),
    responses(
        (status = 200, description = "Favorite people deleted successfully", body = MessageResponse),
        (status = 400, description = "User ID is required", body = MessageResponse),
        (status = 404, description = "Favorite people not found", body = MessageResponse)
    )
)]
pub async fn delete_favorite_people(
    State(state): State<AppState>,
    ValidatedPath(people_id): ValidatedPath<i32>,
    ValidatedQuery(owner): ValidatedQuery<OwnerQuery>,
) -> AppResult<Json<MessageResponse>> {
    remove(&state, owner, Target::new(TargetKind::Character, people_id)).await
}

/// Remove a favorite starship
#[utoipa::path(
    delete,
    path = "/favorites/starship/{starship_id}",
    tag = "Favorites",
    params(("starship_id" = i32, Path, description = "Starship ID"), OwnerQuery),
    responses(
        (status = 200, description = "Favorite starship deleted successfully", body = MessageResponse),
        (status = 400, description = "User ID is required", body = MessageResponse),
        (status = 404, description = "Favorite starship not found", body = MessageResponse)
    )
)]
pub async fn delete_favorite_starship(
    State(state): State<AppState>,
    ValidatedPath(starship_id): ValidatedPath<i32>,
    ValidatedQuery(owner): ValidatedQuery<OwnerQuery>,
) -> AppResult<Json<MessageResponse>> {
    remove(&state, owner, Target::new(TargetKind::Starship, starship_id)).await
}
