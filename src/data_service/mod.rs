pub mod add;
pub mod auth;
pub mod change;
pub mod get;

use crate::models::{ChatMessage, Club, Member, Plan, UserSettings};
use crate::seed;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;

// Per-operation delays the mobile client was tuned against.
pub const CLUB_LIST_DELAY: Duration = Duration::from_millis(300);
pub const CLUB_DETAIL_DELAY: Duration = Duration::from_millis(200);
pub const PLAN_DELAY: Duration = Duration::from_millis(300);
pub const CHAT_DELAY: Duration = Duration::from_millis(200);
pub const SETTINGS_DELAY: Duration = Duration::from_millis(200);
pub const AUTH_DELAY: Duration = Duration::from_millis(500);

/// In-memory store behind every endpoint. Cloning shares the same collections.
#[derive(Clone)]
pub struct DataService {
    clubs: Arc<Vec<Club>>,
    plans: Arc<RwLock<Vec<Plan>>>,
    messages: Arc<RwLock<HashMap<String, Vec<ChatMessage>>>>,
    settings: Arc<RwLock<HashMap<String, UserSettings>>>,
    profiles: Arc<RwLock<HashMap<String, Member>>>,
    simulate_latency: bool,
}

impl DataService {
    pub fn new(simulate_latency: bool) -> Self {
        DataService {
            clubs: Arc::new(seed::clubs()),
            plans: Arc::new(RwLock::new(seed::plans())),
            messages: Arc::new(RwLock::new(HashMap::new())),
            settings: Arc::new(RwLock::new(HashMap::new())),
            profiles: Arc::new(RwLock::new(HashMap::new())),
            simulate_latency,
        }
    }

    async fn delay(&self, duration: Duration) {
        if self.simulate_latency {
            tokio::time::sleep(duration).await;
        }
    }
}

pub(crate) fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

#[cfg(test)]
mod tests;
