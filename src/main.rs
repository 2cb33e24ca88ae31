#[macro_use]
extern crate rocket;

use log::info;
use rocket::{Build, Rocket};

mod auth;
mod chat;
mod clubs;
mod config;
mod data_service;
mod errors;
mod models;
mod plans;
mod seed;
mod user;

use config::AppConfig;
use data_service::DataService;

#[derive(Clone)]
pub struct AppState {
    pub data: DataService,
}

pub fn build_rocket(data: DataService) -> Rocket<Build> {
    rocket::build()
        .manage(AppState { data })
        .mount("/auth", routes![auth::login, auth::signup])
        .mount("/clubs", routes![clubs::list_clubs, clubs::get_club])
        .mount("/plans", routes![plans::list_plans, plans::create_plan])
        .mount("/chats", routes![chat::list_messages, chat::send_message])
        .mount(
            "/users",
            routes![user::get_settings, user::put_settings, user::update_profile],
        )
}

#[rocket::main]
async fn main() -> Result<(), rocket::Error> {
    dotenv::dotenv().ok();
    env_logger::init();
    let config = AppConfig::from_env();
    info!("Simulated latency: {}", config.simulate_latency);

    let data = DataService::new(config.simulate_latency);
    info!("Data service seeded.");

    info!("Starting Rocket server...");
    build_rocket(data).launch().await?;

    Ok(())
}
