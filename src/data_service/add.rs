use super::{new_id, DataService, CHAT_DELAY, PLAN_DELAY};
use crate::models::{ChatMessage, Member, NewPlan, Plan, SELF_AVATAR, SELF_NAME};
use chrono::Utc;
use log::{debug, info};

const DEFAULT_CREATOR_ID: &str = "1";

impl DataService {
    pub async fn create_plan(&self, new_plan: NewPlan) -> String {
        self.delay(PLAN_DELAY).await;

        let creator_input = new_plan.creator.unwrap_or_default();
        let creator = Member {
            id: new_plan
                .creator_id
                .unwrap_or_else(|| DEFAULT_CREATOR_ID.to_string()),
            name: creator_input.name.unwrap_or_else(|| SELF_NAME.to_string()),
            avatar: creator_input
                .avatar
                .unwrap_or_else(|| SELF_AVATAR.to_string()),
        };

        let plan = Plan {
            id: new_id(),
            title: new_plan.title,
            venue: new_plan.venue,
            date: new_plan.date,
            time: new_plan.time,
            budget: new_plan.budget.unwrap_or_default(),
            description: new_plan.description,
            is_public: new_plan.is_public,
            creator,
            participants: Vec::new(),
        };
        let plan_id = plan.id.clone();

        info!("plan {} created by {} at {}", plan_id, plan.creator.id, plan.venue);
        self.plans.write().await.insert(0, plan);

        plan_id
    }

    /// Sender display fields come from the profile directory; unknown senders
    /// are shown as the local user.
    pub async fn append_message(&self, chat_id: &str, sender_id: &str, text: &str) -> String {
        self.delay(CHAT_DELAY).await;

        let (sender_name, sender_avatar) = match self.get_profile(sender_id).await {
            Some(profile) => (profile.name, profile.avatar),
            None => (SELF_NAME.to_string(), SELF_AVATAR.to_string()),
        };

        let message = ChatMessage {
            id: new_id(),
            chat_id: chat_id.to_owned(),
            message: text.to_owned(),
            sender_id: sender_id.to_owned(),
            sender_name,
            sender_avatar,
            created_at: Utc::now(),
        };
        let message_id = message.id.clone();

        let mut messages = self.messages.write().await;
        let conversation = messages.entry(chat_id.to_owned()).or_default();
        conversation.push(message);
        debug!("chat {chat_id}: message {message_id} from {sender_id} ({} total)", conversation.len());

        message_id
    }
}
