use crate::{
    models::{NewPlan, Plan},
    AppState,
};
use rocket::{get, post, serde::json::Json, State};
use serde::Serialize;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanCreated {
    pub success: bool,
    pub plan_id: String,
}

#[get("/")]
pub async fn list_plans(state: &State<AppState>) -> Json<Vec<Plan>> {
    Json(state.data.list_plans().await)
}

#[post("/", data = "<input>")]
pub async fn create_plan(state: &State<AppState>, input: Json<NewPlan>) -> Json<PlanCreated> {
    let plan_id = state.data.create_plan(input.into_inner()).await;
    Json(PlanCreated {
        success: true,
        plan_id,
    })
}
