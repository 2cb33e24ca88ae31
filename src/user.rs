use crate::{
    errors::ActionResponse,
    models::{ProfileUpdate, SettingsUpdate, UserSettings},
    AppState,
};
use rocket::{get, put, serde::json::Json, State};

#[get("/<user_id>/settings")]
pub async fn get_settings(state: &State<AppState>, user_id: &str) -> Json<UserSettings> {
    Json(state.data.get_settings(user_id).await)
}

#[put("/<user_id>/settings", data = "<input>")]
pub async fn put_settings(
    state: &State<AppState>,
    user_id: &str,
    input: Json<SettingsUpdate>,
) -> Json<ActionResponse> {
    state
        .data
        .put_settings(user_id, input.into_inner().into_settings())
        .await;
    Json(ActionResponse::ok())
}

#[put("/<user_id>/profile", data = "<input>")]
pub async fn update_profile(
    state: &State<AppState>,
    user_id: &str,
    input: Json<ProfileUpdate>,
) -> Json<ActionResponse> {
    state.data.update_profile(user_id, input.into_inner()).await;
    Json(ActionResponse::ok())
}
