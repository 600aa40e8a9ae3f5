//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::OpenApi;

use crate::api::handlers::{catalog_handler, comment_handler, favorite_handler, user_handler};
use crate::domain::{
    Character, CharacterDraft, CommentResponse, FavoriteResponse, Planet, PlanetDraft, Starship,
    StarshipDraft, TargetColumns, UserResponse,
};
use crate::types::{EmptyBody, MessageResponse};

/// OpenAPI documentation for the Star Wars Blog API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Star Wars Blog API",
        version = "0.1.0",
        description = "Characters, planets and starships with user favorites and comments",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:3000", description = "Local development server")
    ),
    paths(
        // Catalog endpoints
        catalog_handler::list_people,
        catalog_handler::get_person,
        catalog_handler::create_person,
        catalog_handler::update_person,
        catalog_handler::delete_person,
        catalog_handler::list_planets,
        catalog_handler::get_planet,
        catalog_handler::create_planet,
        catalog_handler::update_planet,
        catalog_handler::delete_planet,
        catalog_handler::list_starships,
        catalog_handler::get_starship,
        catalog_handler::create_starship,
        catalog_handler::update_starship,
        catalog_handler::delete_starship,
        // User endpoints
        user_handler::create_user,
        user_handler::list_users,
        user_handler::list_user_favorites,
        user_handler::list_user_comments,
        // Favorite endpoints
        favorite_handler::add_favorite_planet,
        favorite_handler::add_favorite_people,
        favorite_handler::add_favorite_starship,
        favorite_handler::delete_favorite_planet,
        favorite_handler::delete_favorite_people,
        favorite_handler::delete_favorite_starship,
        // Comment endpoints
        comment_handler::add_planet_comment,
        comment_handler::add_people_comment,
        comment_handler::add_starship_comment,
    ),
    components(
        schemas(
            // Domain types
            Character,
            Planet,
            Starship,
            CharacterDraft,
            PlanetDraft,
            StarshipDraft,
            UserResponse,
            FavoriteResponse,
            CommentResponse,
            TargetColumns,
            // Request/response types
            user_handler::CreateUserRequest,
            comment_handler::CommentRequest,
            MessageResponse,
            EmptyBody,
        )
    ),
    tags(
        (name = "People", description = "Characters"),
        (name = "Planets", description = "Planets"),
        (name = "Starships", description = "Starships"),
        (name = "Users", description = "User registration and per-user listings"),
        (name = "Favorites", description = "Marking catalog records as favorites"),
        (name = "Comments", description = "Commenting on catalog records")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_lists_published_paths() {
        let doc = ApiDoc::openapi();
        let paths = &doc.paths.paths;

        assert!(paths.contains_key("/people/{id}"));
        assert!(paths.contains_key("/favorite/planet/{planet_id}"));
        assert!(paths.contains_key("/comments/starship/{starship_id}"));
        assert!(paths.contains_key("/users/{user_id}/comments"));
    }
}
