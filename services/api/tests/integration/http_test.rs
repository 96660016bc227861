use axum::http::StatusCode;
use sea_orm::{EntityTrait, PaginatorTrait};
use serde_json::{Value, json};

use holonet_api::domain::repository::FavoriteRepository;
use holonet_api::domain::types::FavoriteTarget;
use holonet_api_schema::{favorite, people};

use crate::helpers::test_server;

fn luke_body() -> Value {
    json!({
        "name": "Luke",
        "gender": "male",
        "birth_year": "19BBY",
        "skin_color": "fair"
    })
}

fn tatooine_body() -> Value {
    json!({
        "name": "Tatooine",
        "climate": "arid",
        "terrain": "desert",
        "population": 200000
    })
}

fn user_body(email: &str) -> Value {
    json!({ "email": email, "password": "hunter2", "is_active": true })
}

// ── People ───────────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_read_back_created_people() {
    let (server, _) = test_server().await;

    let created = server.post("/people").json(&luke_body()).await;
    assert_eq!(created.status_code(), StatusCode::OK);
    let created: Value = created.json();
    assert_eq!(created["message"], "People correctly added");
    assert_eq!(created["id"], 1);

    let fetched = server.get("/people/1").await;
    assert_eq!(fetched.status_code(), StatusCode::OK);
    assert_eq!(
        fetched.json::<Value>(),
        json!({
            "id": 1,
            "name": "Luke",
            "gender": "male",
            "birth_year": "19BBY",
            "skin_color": "fair"
        })
    );

    let listed: Value = server.get("/people").await.json();
    assert_eq!(listed.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn should_answer_no_coincidence_for_unknown_people() {
    let (server, _) = test_server().await;

    let response = server.get("/people/999").await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>(), json!({ "message": "No coincidence" }));
}

#[tokio::test]
async fn should_reject_empty_bodies_before_writing() {
    let (server, state) = test_server().await;

    let missing = server.post("/people").await;
    assert_eq!(missing.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(missing.json::<Value>(), json!({ "message": "data is empty" }));

    let empty_object = server.post("/people").json(&json!({})).await;
    assert_eq!(empty_object.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(
        empty_object.json::<Value>(),
        json!({ "message": "data is empty" })
    );

    let rows = people::Entity::find().count(&state.db).await.unwrap();
    assert_eq!(rows, 0);
}

#[tokio::test]
async fn should_answer_no_coincidence_for_ids_that_cannot_exist() {
    let (server, _) = test_server().await;

    for path in ["/people/99999999999", "/people/abc", "/planet/99999999999"] {
        let response = server.get(path).await;
        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST, "{path}");
        assert_eq!(
            response.json::<Value>(),
            json!({ "message": "No coincidence" }),
            "{path}"
        );
    }
}

#[tokio::test]
async fn should_reject_json_sent_with_non_json_content_type() {
    let (server, state) = test_server().await;

    let response = server.post("/people").text(luke_body().to_string()).await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>(), json!({ "message": "data is empty" }));
    let rows = people::Entity::find().count(&state.db).await.unwrap();
    assert_eq!(rows, 0);
}

#[tokio::test]
async fn should_roll_back_and_leak_driver_error_on_missing_required_field() {
    let (server, state) = test_server().await;

    let response = server
        .post("/people")
        .json(&json!({ "name": "Luke", "gender": "male" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = response.json();
    let message = body["message"].as_array().unwrap();
    assert_eq!(message.len(), 1);
    assert!(message[0].as_str().unwrap().contains("NOT NULL"));

    let rows = people::Entity::find().count(&state.db).await.unwrap();
    assert_eq!(rows, 0);
}

#[tokio::test]
async fn should_reject_wrongly_typed_fields() {
    let (server, _) = test_server().await;

    let mut body = tatooine_body();
    body["population"] = json!("lots");
    let response = server.post("/planet").json(&body).await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json::<Value>(),
        json!({ "message": "malformed JSON body" })
    );
}

// ── Planets ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_read_back_created_planet_ignoring_unknown_fields() {
    let (server, _) = test_server().await;

    let mut body = tatooine_body();
    body["id"] = json!(42);
    body["suns"] = json!(2);
    let created = server.post("/planet").json(&body).await;
    assert_eq!(created.status_code(), StatusCode::OK);
    assert_eq!(
        created.json::<Value>(),
        json!({ "message": "Planet correctly added", "id": 1 })
    );

    let fetched = server.get("/planet/1").await;
    assert_eq!(fetched.status_code(), StatusCode::OK);
    assert_eq!(
        fetched.json::<Value>(),
        json!({
            "id": 1,
            "name": "Tatooine",
            "climate": "arid",
            "terrain": "desert",
            "population": 200000
        })
    );

    let missing = server.get("/planet/2").await;
    assert_eq!(missing.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(missing.json::<Value>(), json!({ "message": "No coincidence" }));
}

// ── Users ────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_list_users_without_password() {
    let (server, _) = test_server().await;

    server.post("/users").json(&user_body("luke@rebels.org")).await;
    server.post("/users").json(&user_body("leia@rebels.org")).await;

    let response = server.get("/users").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(
        response.json::<Value>(),
        json!([
            { "id": 1, "email": "luke@rebels.org" },
            { "id": 2, "email": "leia@rebels.org" }
        ])
    );
}

#[tokio::test]
async fn should_fail_commit_on_duplicate_email() {
    let (server, _) = test_server().await;

    let first = server.post("/users").json(&user_body("luke@rebels.org")).await;
    assert_eq!(first.status_code(), StatusCode::OK);

    let second = server.post("/users").json(&user_body("luke@rebels.org")).await;
    assert_eq!(second.status_code(), StatusCode::INTERNAL_SERVER_ERROR);

    let listed: Value = server.get("/users").await.json();
    assert_eq!(listed.as_array().unwrap().len(), 1);
}

// ── Favorites ────────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_reject_favorite_for_unknown_planet_without_writing() {
    let (server, state) = test_server().await;
    server.post("/users").json(&user_body("luke@rebels.org")).await;

    let response = server.post("/favorite/planet/999").await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json::<Value>(),
        json!({ "message": "No existe el planeta" })
    );
    let rows = favorite::Entity::find().count(&state.db).await.unwrap();
    assert_eq!(rows, 0);
}

#[tokio::test]
async fn should_reject_favorite_for_unknown_people() {
    let (server, _) = test_server().await;
    server.post("/users").json(&user_body("luke@rebels.org")).await;

    let response = server.post("/favorite/people/999").await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json::<Value>(),
        json!({ "message": "No existe el personaje" })
    );
}

#[tokio::test]
async fn should_reject_favorites_without_any_user() {
    let (server, _) = test_server().await;
    server.post("/planet").json(&tatooine_body()).await;

    let added = server.post("/favorite/planet/1").await;
    assert_eq!(added.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(added.json::<Value>(), json!({ "message": "No existe el usuario" }));

    let listed = server.get("/users/favorites").await;
    assert_eq!(listed.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn should_list_favorites_of_first_user_in_legacy_shape() {
    let (server, _) = test_server().await;
    server.post("/users").json(&user_body("luke@rebels.org")).await;
    server.post("/users").json(&user_body("leia@rebels.org")).await;
    server.post("/planet").json(&tatooine_body()).await;
    server.post("/people").json(&luke_body()).await;

    let planet_fav = server.post("/favorite/planet/1").await;
    assert_eq!(planet_fav.status_code(), StatusCode::OK);
    assert_eq!(
        planet_fav.json::<Value>(),
        json!({ "message": "Favorite correctly added", "id": 1 })
    );
    let people_fav = server.post("/favorite/people/1").await;
    assert_eq!(people_fav.status_code(), StatusCode::OK);

    let response = server.get("/users/favorites").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(
        response.json::<Value>(),
        json!([
            {
                "id": 1,
                "user_id": 1,
                "planet": {
                    "id": 1,
                    "name": "Tatooine",
                    "climate": "arid",
                    "terrain": "desert",
                    "population": 200000
                },
                "people": null
            },
            [
                {
                    "id": 2,
                    "user_id": 1,
                    "planet": null,
                    "people": {
                        "id": 1,
                        "name": "Luke",
                        "gender": "male",
                        "birth_year": "19BBY",
                        "skin_color": "fair"
                    }
                }
            ]
        ])
    );
}

#[tokio::test]
async fn should_delete_exactly_one_favorite_of_any_owner() {
    let (server, state) = test_server().await;
    server.post("/users").json(&user_body("luke@rebels.org")).await;
    server.post("/users").json(&user_body("leia@rebels.org")).await;
    server.post("/planet").json(&tatooine_body()).await;

    // Owned by the second user, which the HTTP surface never attaches to.
    let foreign = state
        .favorite_repo()
        .create(2, FavoriteTarget::Planet(1))
        .await
        .unwrap();
    server.post("/favorite/planet/1").await;

    let deleted = server.delete("/favorite/planet/1").await;
    assert_eq!(deleted.status_code(), StatusCode::OK);
    assert_eq!(
        deleted.json::<Value>(),
        json!({ "message": "Favorite correctly deleted" })
    );

    let remaining = favorite::Entity::find().all(&state.db).await.unwrap();
    assert_eq!(remaining.len(), 1);
    assert_ne!(remaining[0].id, foreign);
    assert_eq!(remaining[0].user_id, 1);
}

#[tokio::test]
async fn should_map_out_of_range_favorite_ids_to_json_errors() {
    let (server, state) = test_server().await;
    server.post("/users").json(&user_body("luke@rebels.org")).await;

    let planet = server.post("/favorite/planet/99999999999").await;
    assert_eq!(planet.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(planet.json::<Value>(), json!({ "message": "No existe el planeta" }));

    let people = server.post("/favorite/people/abc").await;
    assert_eq!(people.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(
        people.json::<Value>(),
        json!({ "message": "No existe el personaje" })
    );

    let deleted = server.delete("/favorite/planet/99999999999").await;
    assert_eq!(deleted.status_code(), StatusCode::NOT_FOUND);
    assert_eq!(
        deleted.json::<Value>(),
        json!({ "message": "No existe el favorito" })
    );

    let rows = favorite::Entity::find().count(&state.db).await.unwrap();
    assert_eq!(rows, 0);
}

#[tokio::test]
async fn should_return_not_found_when_deleting_missing_favorite() {
    let (server, _) = test_server().await;

    let response = server.delete("/favorite/people/1").await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    assert_eq!(
        response.json::<Value>(),
        json!({ "message": "No existe el favorito" })
    );
}

// ── Site ─────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_serve_sitemap_hello_and_probes() {
    let (server, _) = test_server().await;

    let sitemap = server.get("/").await;
    assert_eq!(sitemap.status_code(), StatusCode::OK);
    assert!(sitemap.text().contains("href=\"/people\""));

    let hello = server.get("/user").await;
    assert_eq!(
        hello.json::<Value>(),
        json!({ "msg": "Hello, this is your GET /user response " })
    );

    assert_eq!(server.get("/healthz").await.status_code(), StatusCode::OK);
    assert_eq!(server.get("/readyz").await.status_code(), StatusCode::OK);
}

#[tokio::test]
async fn should_tag_responses_with_request_id() {
    let (server, _) = test_server().await;

    let response = server.get("/people").await;

    assert!(response.headers().contains_key("x-request-id"));
}
