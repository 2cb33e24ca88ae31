use super::{DataService, CHAT_DELAY, CLUB_DETAIL_DELAY, CLUB_LIST_DELAY, PLAN_DELAY, SETTINGS_DELAY};
use crate::models::{ChatMessage, Club, Member, Plan, UserSettings};
use log::debug;

impl DataService {
    pub async fn list_clubs(&self) -> Vec<Club> {
        self.delay(CLUB_LIST_DELAY).await;
        self.clubs.as_ref().clone()
    }

    pub async fn get_club(&self, club_id: &str) -> Option<Club> {
        self.delay(CLUB_DETAIL_DELAY).await;
        let club = self.clubs.iter().find(|c| c.id == club_id).cloned();
        if club.is_none() {
            debug!("club {club_id} not found");
        }
        club
    }

    /// Newest first, since creation prepends.
    pub async fn list_plans(&self) -> Vec<Plan> {
        self.delay(PLAN_DELAY).await;
        self.plans.read().await.clone()
    }

    pub async fn list_messages(&self, chat_id: &str) -> Vec<ChatMessage> {
        self.delay(CHAT_DELAY).await;
        self.messages
            .read()
            .await
            .get(chat_id)
            .cloned()
            .unwrap_or_default()
    }

    /// Never persists the default it hands out.
    pub async fn get_settings(&self, user_id: &str) -> UserSettings {
        self.delay(SETTINGS_DELAY).await;
        self.settings
            .read()
            .await
            .get(user_id)
            .cloned()
            .unwrap_or_default()
    }

    pub async fn get_profile(&self, user_id: &str) -> Option<Member> {
        self.profiles.read().await.get(user_id).cloned()
    }
}
