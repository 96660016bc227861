use axum::{
    Router,
    routing::{delete, get, post},
};
use tower::ServiceBuilder;

use holonet_core::health::healthz;
use holonet_core::middleware::{
    cors_layer, propagate_request_id_layer, request_id_layer, trace_layer,
};

use crate::handlers::{
    favorite::{
        add_favorite_people, add_favorite_planet, delete_favorite_people,
        delete_favorite_planet, list_favorites,
    },
    people::{create_people, get_people, list_people},
    planet::{create_planet, get_planet, list_planets},
    site::{hello, readyz, sitemap},
    user::{create_user, list_users},
};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Site
        .route("/", get(sitemap))
        .route("/user", get(hello))
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        // People
        .route("/people", get(list_people))
        .route("/people", post(create_people))
        .route("/people/{id}", get(get_people))
        // Planets
        .route("/planet", get(list_planets))
        .route("/planet", post(create_planet))
        .route("/planet/{id}", get(get_planet))
        // Users
        .route("/users", get(list_users))
        .route("/users", post(create_user))
        .route("/users/favorites", get(list_favorites))
        // Favorites
        .route("/favorite/planet/{id}", post(add_favorite_planet))
        .route("/favorite/planet/{id}", delete(delete_favorite_planet))
        .route("/favorite/people/{id}", post(add_favorite_people))
        .route("/favorite/people/{id}", delete(delete_favorite_people))
        .layer(
            ServiceBuilder::new()
                .layer(request_id_layer())
                .layer(trace_layer())
                .layer(propagate_request_id_layer())
                .layer(cors_layer()),
        )
        .with_state(state)
}
