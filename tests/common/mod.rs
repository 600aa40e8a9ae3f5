//! Shared harness: the real router over an in-memory SQLite database.

#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use sea_orm::{ConnectionTrait, Statement};
use serde_json::Value;
use tower::ServiceExt;

use starwars_blog_api::api::{create_router, AppState};
use starwars_blog_api::domain::{CatalogDraft, CharacterDraft, PlanetDraft, StarshipDraft};
use starwars_blog_api::infra::Database;

pub struct TestApp {
    pub router: Router,
    pub state: AppState,
    pub db: Arc<Database>,
}

impl TestApp {
    /// Fresh, migrated, empty database.
    pub async fn new() -> Self {
        let db = Arc::new(
            Database::connect("sqlite::memory:")
                .await
                .expect("in-memory database"),
        );
        let state = AppState::from_database(db.clone());
        let router = create_router(state.clone());

        Self { router, state, db }
    }

    /// Database holding two characters, two planets and one starship (ids from 1).
    pub async fn seeded() -> Self {
        let app = Self::new().await;
        app.state
            .catalog_service
            .import(sample_catalog())
            .await
            .expect("seed catalog");
        app
    }

    pub async fn request(&self, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(json) => {
                builder = builder.header("content-type", "application/json");
                Body::from(json.to_string())
            }
            None => Body::empty(),
        };

        let response = self
            .router
            .clone()
            .oneshot(builder.body(body).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };

        (status, json)
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.request("GET", uri, None).await
    }

    pub async fn post(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.request("POST", uri, Some(body)).await
    }

    pub async fn delete(&self, uri: &str) -> (StatusCode, Value) {
        self.request("DELETE", uri, None).await
    }

    /// Register a user through the API and return its id.
    pub async fn create_user(&self, email: &str) -> i32 {
        let (status, _) = self
            .post("/user", serde_json::json!({ "email": email, "password": "use-the-force" }))
            .await;
        assert_eq!(status, StatusCode::CREATED);

        let (_, users) = self.get("/users").await;
        users
            .as_array()
            .unwrap()
            .iter()
            .find(|u| u["email"] == email)
            .and_then(|u| u["id"].as_i64())
            .unwrap() as i32
    }

    /// Row count of a table.
    pub async fn count(&self, table: &str) -> i64 {
        self.query_count(&format!("SELECT COUNT(*) AS n FROM {}", table))
            .await
    }

    pub async fn query_count(&self, sql: &str) -> i64 {
        let conn = self.db.connection();
        let row = conn
            .query_one(Statement::from_string(
                conn.get_database_backend(),
                sql.to_string(),
            ))
            .await
            .unwrap()
            .unwrap();
        row.try_get::<i64>("", "n").unwrap()
    }

    pub async fn execute(&self, sql: &str) -> Result<(), sea_orm::DbErr> {
        let conn = self.db.connection();
        conn.execute(Statement::from_string(
            conn.get_database_backend(),
            sql.to_string(),
        ))
        .await
        .map(|_| ())
    }
}

pub fn sample_catalog() -> Vec<CatalogDraft> {
    vec![
        CharacterDraft {
            name: Some("Luke Skywalker".to_string()),
            age: Some(19),
            height: Some(172),
            eye_color: Some("blue".to_string()),
        }
        .into(),
        CharacterDraft {
            name: Some("Leia Organa".to_string()),
            age: Some(19),
            height: Some(150),
            eye_color: Some("brown".to_string()),
        }
        .into(),
        PlanetDraft {
            diameter: Some(10465),
            gravity: Some(1),
            population: Some(200_000),
            climate: Some("arid".to_string()),
        }
        .into(),
        PlanetDraft {
            diameter: Some(12500),
            gravity: Some(1),
            population: Some(2_000_000_000),
            climate: Some("temperate".to_string()),
        }
        .into(),
        StarshipDraft {
            model: Some("T-65 X-wing".to_string()),
            starship_class: Some("Starfighter".to_string()),
            crew: Some(1),
            passengers: Some(0),
        }
        .into(),
    ]
}
