//! Catalog handlers: people, planets and starships.
//!
//! Each collection gets the same five operations; the per-collection
//! functions only pin the `TargetKind` and the request body type.

use axum::{extract::State, response::Json, routing::get, Router};

use crate::api::extractors::{ValidatedJson, ValidatedPath};
use crate::api::AppState;
use crate::domain::{CatalogDraft, CatalogEntry, CharacterDraft, PlanetDraft, StarshipDraft, TargetKind};
use crate::errors::AppResult;
use crate::types::{Created, MessageResponse};

/// Create catalog routes
pub fn catalog_routes() -> Router<AppState> {
    Router::new()
        .route("/people", get(list_people).post(create_person))
        .route(
            "/people/:id",
            get(get_person).put(update_person).delete(delete_person),
        )
        .route("/planets", get(list_planets).post(create_planet))
        .route(
            "/planets/:id",
            get(get_planet).put(update_planet).delete(delete_planet),
        )
        .route("/starships", get(list_starships).post(create_starship))
        .route(
            "/starships/:id",
            get(get_starship).put(update_starship).delete(delete_starship),
        )
}

async fn list(state: &AppState, kind: TargetKind) -> AppResult<Json<Vec<CatalogEntry>>> {
    Ok(Json(state.catalog_service.list(kind).await?))
}

async fn get_one(state: &AppState, kind: TargetKind, id: i32) -> AppResult<Json<CatalogEntry>> {
    Ok(Json(state.catalog_service.get(kind, id).await?))
}

async fn create(state: &AppState, draft: CatalogDraft) -> AppResult<Created<CatalogEntry>> {
    Ok(Created(state.catalog_service.create(draft).await?))
}

async fn update(state: &AppState, id: i32, draft: CatalogDraft) -> AppResult<Json<CatalogEntry>> {
    Ok(Json(state.catalog_service.update(id, draft).await?))
}

async fn delete(state: &AppState, kind: TargetKind, id: i32) -> AppResult<Json<MessageResponse>> {
    state.catalog_service.delete(kind, id).await?;
    Ok(Json(MessageResponse::new(kind.deleted_message())))
}

/// List all people
#[utoipa::path(
    get,
    path = "/people",
    tag = "People",
    responses(
        (status = 200, description = "All characters", body = [Character]),
        (status = 500, description = "Server error", body = MessageResponse)
    )
)]
pub async fn list_people(State(state): State<AppState>) -> AppResult<Json<Vec<CatalogEntry>>> {
    list(&state, TargetKind::Character).await
}

/// Get a person by ID
#[utoipa::path(
    get,
    path = "/people/{id}",
    tag = "People",
    params(("id" = i32, Path, description = "Character ID")),
    responses(
        (status = 200, description = "Character found", body = Character),
        (status = 404, description = "Person not found", body = MessageResponse)
    )
)]
pub async fn get_person(
    State(state): State<AppState>,
    ValidatedPath(id): ValidatedPath<i32>,
) -> AppResult<Json<CatalogEntry>> {
    get_one(&state, TargetKind::Character, id).await
}

/// Add a character to the catalog
#[utoipa::path(
    post,
    path = "/people",
    tag = "People",
    request_body = CharacterDraft,
    responses(
        (status = 201, description = "Character created", body = Character),
        (status = 400, description = "Validation error", body = MessageResponse)
    )
)]
pub async fn create_person(
    State(state): State<AppState>,
    ValidatedJson(draft): ValidatedJson<CharacterDraft>,
) -> AppResult<Created<CatalogEntry>> {
    create(&state, draft.into()).await
}

/// Replace a character's attributes
#[utoipa::path(
    put,
    path = "/people/{id}",
    tag = "People",
    params(("id" = i32, Path, description = "Character ID")),
    request_body = CharacterDraft,
    responses(
        (status = 200, description = "Character updated", body = Character),
        (status = 400, description = "Validation error", body = MessageResponse),
        (status = 404, description = "Person not found", body = MessageResponse)
    )
)]
pub async fn update_person(
    State(state): State<AppState>,
    ValidatedPath(id): ValidatedPath<i32>,
    ValidatedJson(draft): ValidatedJson<CharacterDraft>,
) -> AppResult<Json<CatalogEntry>> {
    update(&state, id, draft.into()).await
}

/// Remove a character that nothing refers to
#[utoipa::path(
    delete,
    path = "/people/{id}",
    tag = "People",
    params(("id" = i32, Path, description = "Character ID")),
    responses(
        (status = 200, description = "Character deleted", body = MessageResponse),
        (status = 400, description = "Still referenced", body = MessageResponse),
        (status = 404, description = "Person not found", body = MessageResponse)
    )
)]
pub async fn delete_person(
    State(state): State<AppState>,
    ValidatedPath(id): ValidatedPath<i32>,
) -> AppResult<Json<MessageResponse>> {
    delete(&state, TargetKind::Character, id).await
}

/// List all planets
#[utoipa::path(
    get,
    path = "/planets",
    tag = "Planets",
    responses(
        (status = 200, description = "All planets", body = [Planet]),
        (status = 500, description = "Server error", body = MessageResponse)
    )
)]
pub async fn list_planets(State(state): State<AppState>) -> AppResult<Json<Vec<CatalogEntry>>> {
    list(&state, TargetKind::Planet).await
}

/// Get a planet by ID
#[utoipa::path(
    get,
    path = "/planets/{id}",
    tag = "Planets",
    params(("id" = i32, Path, description = "Planet ID")),
    responses(
        (status = 200, description = "Planet found", body = Planet),
        (status = 404, description = "Planet not found", body = MessageResponse)
    )
)]
pub async fn get_planet(
    State(state): State<AppState>,
    ValidatedPath(id): ValidatedPath<i32>,
) -> AppResult<Json<CatalogEntry>> {
    get_one(&state, TargetKind::Planet, id).await
}

/// Add a planet to the catalog
#[utoipa::path(
    post,
    path = "/planets",
    tag = "Planets",
    request_body = PlanetDraft,
    responses(
        (status = 201, description = "Planet created", body = Planet),
        (status = 400, description = "Validation error", body = MessageResponse)
    )
)]
pub async fn create_planet(
    State(state): State<AppState>,
    ValidatedJson(draft): ValidatedJson<PlanetDraft>,
) -> AppResult<Created<CatalogEntry>> {
    create(&state, draft.into()).await
}

/// Replace a planet's attributes
#[utoipa::path(
    put,
    path = "/planets/{id}",
    tag = "Planets",
    params(("id" = i32, Path, description = "Planet ID")),
    request_body = PlanetDraft,
    responses(
        (status = 200, description = "Planet updated", body = Planet),
        (status = 400, description = "Validation error", body = MessageResponse),
        (status = 404, description = "Planet not found", body = MessageResponse)
    )
)]
pub async fn update_planet(
    State(state): State<AppState>,
    ValidatedPath(id): ValidatedPath<i32>,
    ValidatedJson(draft): ValidatedJson<PlanetDraft>,
) -> AppResult<Json<CatalogEntry>> {
    update(&state, id, draft.into()).await
}

/// Remove a planet that nothing refers to
#[utoipa::path(
    delete,
    path = "/planets/{id}",
    tag = "Planets",
    params(("id" = i32, Path, description = "Planet ID")),
    responses(
        (status = 200, description = "Planet deleted", body = MessageResponse),
        (status = 400, description = "Still referenced", body = MessageResponse),
        (status = 404, description = "Planet not found", body = MessageResponse)
    )
)]
pub async fn delete_planet(
    State(state): State<AppState>,
    ValidatedPath(id): ValidatedPath<i32>,
) -> AppResult<Json<MessageResponse>> {
    delete(&state, TargetKind::Planet, id).await
}

/// List all starships
#[utoipa::path(
    get,
    path = "/starships",
    tag = "Starships",
    responses(
        (status = 200, description = "All starships", body = [Starship]),
        (status = 500, description = "Server error", body = MessageResponse)
    )
)]
pub async fn list_starships(State(state): State<AppState>) -> AppResult<Json<Vec<CatalogEntry>>> {
    list(&state, TargetKind::Starship).await
}

/// Get a starship by ID
#[utoipa::path(
    get,
    path = "/starships/{id}",
    tag = "Starships",
    params(("id" = i32, Path, description = "Starship ID")),
    responses(
        (status = 200, description = "Starship found", body = Starship),
        (status = 404, description = "Starship not found", body = MessageResponse)
    )
)]
pub async fn get_starship(
    State(state): State<AppState>,
    ValidatedPath(id): ValidatedPath<i32>,
) -> AppResult<Json<CatalogEntry>> {
    get_one(&state, TargetKind::Starship, id).await
}

/// Add a starship to the catalog
#[utoipa::path(
    post,
    path = "/starships",
    tag = "Starships",
    request_body = StarshipDraft,
    responses(
        (status = 201, description = "Starship created", body = Starship),
        (status = 400, description = "Validation error", body = MessageResponse)
    )
)]
pub async fn create_starship(
    State(state): State<AppState>,
    ValidatedJson(draft): ValidatedJson<StarshipDraft>,
) -> AppResult<Created<CatalogEntry>> {
    create(&state, draft.into()).await
}

/// Replace a starship's attributes
#[utoipa::path(
    put,
    path = "/starships/{id}",
    tag = "Starships",
    params(("id" = i32, Path, description = "Starship ID")),
    request_body = StarshipDraft,
    responses(
        (status = 200, description = "Starship updated", body = Starship),
        (status = 400, description = "Validation error", body = MessageResponse),
        (status = 404, description = "Starship not found", body = MessageResponse)
    )
)]
pub async fn update_starship(
    State(state): State<AppState>,
    ValidatedPath(id): ValidatedPath<i32>,
    ValidatedJson(draft): ValidatedJson<StarshipDraft>,
) -> AppResult<Json<CatalogEntry>> {
    update(&state, id, draft.into()).await
}

/// Remove a starship that nothing refers to
#[utoipa::path(
    delete,
    path = "/starships/{id}",
    tag = "Starships",
    params(("id" = i32, Path, description = "Starship ID")),
    responses(
        (status = 200, description = "Starship deleted", body = MessageResponse),
        (status = 400, description = "Still referenced", body = MessageResponse),
        (status = 404, description = "Starship not found", body = MessageResponse)
    )
)]
pub async fn delete_starship(
    State(state): State<AppState>,
    ValidatedPath(id): ValidatedPath<i32>,
) -> AppResult<Json<MessageResponse>> {
    delete(&state, TargetKind::Starship, id).await
}
