use crate::{errors::ServiceError, models::Club, AppState};
use rocket::{get, serde::json::Json, State};

#[get("/")]
pub async fn list_clubs(state: &State<AppState>) -> Json<Vec<Club>> {
    Json(state.data.list_clubs().await)
}

#[get("/<id>")]
pub async fn get_club(state: &State<AppState>, id: &str) -> Result<Json<Club>, ServiceError> {
    state
        .data
        .get_club(id)
        .await
        .map(Json)
        .ok_or_else(|| ServiceError::NotFound(format!("club {id}")))
}
