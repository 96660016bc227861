use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};

use crate::domain::types::{NewUser, User};
use crate::error::ApiError;
use crate::handlers::CreatedResponse;
use crate::handlers::body::JsonObject;
use crate::state::AppState;
use crate::usecase::user::{CreateUserUseCase, ListUsersUseCase};

/// Public view of an account: no password, no activity flag.
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: i32,
    pub email: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
        }
    }
}

// ── GET /users ───────────────────────────────────────────────────────────────

pub async fn list_users(
    State(state): State<AppState>,
) -> Result<Json<Vec<UserResponse>>, ApiError> {
    let usecase = ListUsersUseCase {
        repo: state.user_repo(),
    };
    let users = usecase.execute().await?;
    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

// ── POST /users ──────────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct CreateUserRequest {
    pub email: Option<String>,
    pub password: Option<String>,
    pub is_active: Option<bool>,
}

pub async fn create_user(
    State(state): State<AppState>,
    JsonObject(body): JsonObject<CreateUserRequest>,
) -> Result<Json<CreatedResponse>, ApiError> {
    let usecase = CreateUserUseCase {
        repo: state.user_repo(),
    };
    let id = usecase
        .execute(NewUser {
            email: body.email,
            password: body.password,
            is_active: body.is_active,
        })
        .await?;
    Ok(Json(CreatedResponse {
        message: "User correctly added",
        id,
    }))
}
