use crate::{errors::ServiceError, models::UserIdentity, AppState};
use rocket::{post, serde::json::Json, State};
use serde::{Deserialize, Serialize};

#[derive(Deserialize)]
pub struct LoginInput {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Deserialize)]
pub struct SignupInput {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Serialize)]
pub struct AuthResponse {
    pub success: bool,
    pub user: UserIdentity,
}

#[post("/login", data = "<input>")]
pub async fn login(
    state: &State<AppState>,
    input: Json<LoginInput>,
) -> Result<Json<AuthResponse>, ServiceError> {
    let user = state.data.login(&input.email, &input.password).await?;
    Ok(Json(AuthResponse {
        success: true,
        user,
    }))
}

#[post("/signup", data = "<input>")]
pub async fn signup(
    state: &State<AppState>,
    input: Json<SignupInput>,
) -> Result<Json<AuthResponse>, ServiceError> {
    let user = state
        .data
        .signup(&input.name, &input.email, &input.password)
        .await?;
    Ok(Json(AuthResponse {
        success: true,
        user,
    }))
}
