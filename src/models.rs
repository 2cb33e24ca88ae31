use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const SELF_NAME: &str = "You";
pub const SELF_AVATAR: &str = "https://i.pravatar.cc/150?img=1";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Club {
    pub id: String,
    pub name: String,
    pub image: String,
    pub rating: f64,
    #[serde(alias = "entry_price")]
    pub entry_price: u32,
    pub location: String,
    pub timings: String,
    pub phone: String,
    pub whatsapp: String,
    pub website: String,
    pub description: String,
    pub offers: Option<String>,
}

/// Someone shown on a plan card: its creator or one of the participants.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Member {
    pub id: String,
    pub name: String,
    pub avatar: String,
}

impl Member {
    pub fn new(id: &str, name: &str, avatar: &str) -> Self {
        Member {
            id: id.to_owned(),
            name: name.to_owned(),
            avatar: avatar.to_owned(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Plan {
    pub id: String,
    pub title: String,
    pub venue: String,
    pub date: String,
    pub time: String,
    pub budget: u32,
    pub description: String,
    pub is_public: bool,
    pub creator: Member,
    pub participants: Vec<Member>,
}

/// Display overrides for the creator of a new plan.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct CreatorInput {
    pub name: Option<String>,
    pub avatar: Option<String>,
}

/// Fields of a plan as submitted by the create-plan form.
///
/// Required-field checks happen in the form before submission; the store
/// accepts whatever arrives. Missing fields come out empty, and a budget the
/// form could not parse arrives as `null`.
#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase", default)]
pub struct NewPlan {
    pub title: String,
    pub venue: String,
    pub date: String,
    pub time: String,
    pub budget: Option<u32>,
    pub description: String,
    pub is_public: bool,
    #[serde(alias = "creator_id")]
    pub creator_id: Option<String>,
    pub creator: Option<CreatorInput>,
}

impl Default for NewPlan {
    fn default() -> Self {
        NewPlan {
            title: String::new(),
            venue: String::new(),
            date: String::new(),
            time: String::new(),
            budget: None,
            description: String::new(),
            is_public: true,
            creator_id: None,
            creator: None,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    pub id: String,
    pub chat_id: String,
    pub message: String,
    pub sender_id: String,
    pub sender_name: String,
    pub sender_avatar: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum PrivacyLevel {
    #[default]
    Public,
    Friends,
    Private,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserSettings {
    #[serde(alias = "dark_mode")]
    pub dark_mode: bool,
    pub language: String,
    pub notifications: bool,
    #[serde(alias = "privacy_level")]
    pub privacy_level: PrivacyLevel,
}

impl Default for UserSettings {
    fn default() -> Self {
        UserSettings {
            dark_mode: true,
            language: "en".to_string(),
            notifications: true,
            privacy_level: PrivacyLevel::Public,
        }
    }
}

/// A settings write. Fields left out fall back to the defaults, never to the
/// previously stored value: the resulting record replaces the old one.
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct SettingsUpdate {
    #[serde(alias = "dark_mode")]
    pub dark_mode: Option<bool>,
    pub language: Option<String>,
    pub notifications: Option<bool>,
    #[serde(alias = "privacy_level")]
    pub privacy_level: Option<PrivacyLevel>,
}

impl SettingsUpdate {
    pub fn into_settings(self) -> UserSettings {
        let defaults = UserSettings::default();
        UserSettings {
            dark_mode: self.dark_mode.unwrap_or(defaults.dark_mode),
            language: self.language.unwrap_or(defaults.language),
            notifications: self.notifications.unwrap_or(defaults.notifications),
            privacy_level: self.privacy_level.unwrap_or(defaults.privacy_level),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct UserIdentity {
    pub id: String,
    pub email: String,
    pub name: String,
    pub avatar: String,
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct ProfileUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
}
