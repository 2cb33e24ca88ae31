use super::{DataService, SETTINGS_DELAY};
use crate::models::{Member, ProfileUpdate, UserIdentity, UserSettings, SELF_AVATAR, SELF_NAME};
use log::{debug, info};

impl DataService {
    /// Replaces the stored record wholesale.
    pub async fn put_settings(&self, user_id: &str, settings: UserSettings) {
        self.delay(SETTINGS_DELAY).await;
        debug!("settings for {user_id}: {settings:?}");
        self.settings
            .write()
            .await
            .insert(user_id.to_owned(), settings);
    }

    pub async fn update_profile(&self, user_id: &str, update: ProfileUpdate) {
        self.delay(SETTINGS_DELAY).await;
        let mut profiles = self.profiles.write().await;
        let profile = profiles
            .entry(user_id.to_owned())
            .or_insert_with(|| Member::new(user_id, SELF_NAME, SELF_AVATAR));
        if let Some(name) = update.name {
            profile.name = name;
        }
        // Email is not part of what other people see.
        if let Some(email) = update.email {
            debug!("profile {user_id} email changed to {email}");
        }
        info!("profile {user_id} updated");
    }

    pub(crate) async fn remember_identity(&self, user: &UserIdentity) {
        self.profiles.write().await.insert(
            user.id.clone(),
            Member::new(&user.id, &user.name, &user.avatar),
        );
    }
}
