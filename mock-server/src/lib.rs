use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;

const FIXTURE: &str = include_str!("../fixtures/users.json");

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct User {
    pub id: u64,
    pub name: String,
    pub username: String,
    pub email: String,
    pub address: Address,
    pub phone: String,
    pub website: String,
    pub company: Company,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Address {
    pub street: String,
    pub suite: String,
    pub city: String,
    pub zipcode: String,
    pub geo: Geo,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Geo {
    pub lat: String,
    pub lng: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Company {
    pub name: String,
    #[serde(rename = "catchPhrase")]
    pub catch_phrase: String,
    pub bs: String,
}

pub type Db = Arc<Vec<User>>;

/// The users bundled in `fixtures/users.json`.
pub fn fixture_users() -> Vec<User> {
    serde_json::from_str(FIXTURE).expect("bundled fixture is valid JSON")
}

/// Router serving the bundled fixture.
pub fn app() -> Router {
    app_with(fixture_users())
}

/// Router serving `users` in the given order. Read-only: the listing never
/// writes back.
pub fn app_with(users: Vec<User>) -> Router {
    let db: Db = Arc::new(users);
    Router::new()
        .route("/users", get(list_users))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

pub async fn run_with(listener: TcpListener, users: Vec<User>) -> Result<(), std::io::Error> {
    axum::serve(listener, app_with(users)).await
}

async fn list_users(State(db): State<Db>) -> Json<Vec<User>> {
    Json(db.as_ref().clone())
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn fixture_has_unique_ids() {
        let users = fixture_users();
        assert!(!users.is_empty());
        let ids: HashSet<u64> = users.iter().map(|u| u.id).collect();
        assert_eq!(ids.len(), users.len());
    }

    #[test]
    fn user_serializes_with_upstream_field_names() {
        let user = &fixture_users()[0];
        let json = serde_json::to_value(user).unwrap();
        assert_eq!(json["username"], "Bret");
        assert_eq!(json["company"]["catchPhrase"], "Multi-layered client-server neural-net");
        assert_eq!(json["address"]["geo"]["lat"], "-37.3159");
        assert!(json.get("liked").is_none());
    }

    #[test]
    fn user_rejects_missing_company() {
        let result: Result<User, _> = serde_json::from_str(
            r#"{"id":1,"name":"x","username":"x","email":"x","phone":"x","website":"x",
                "address":{"street":"s","suite":"s","city":"c","zipcode":"z","geo":{"lat":"0","lng":"0"}}}"#,
        );
        assert!(result.is_err());
    }
}
