use super::{new_id, DataService, AUTH_DELAY};
use crate::errors::ServiceError;
use crate::models::{UserIdentity, SELF_AVATAR};
use log::{info, warn};
use rand::Rng;

const LOGIN_USER_ID: &str = "1";

impl DataService {
    /// Accepts any non-empty pair; there is no credential store behind it.
    pub async fn login(&self, email: &str, password: &str) -> Result<UserIdentity, ServiceError> {
        self.delay(AUTH_DELAY).await;

        if email.is_empty() || password.is_empty() {
            warn!("login rejected: missing email or password");
            return Err(ServiceError::Validation("Invalid credentials".to_string()));
        }

        let name = email.split('@').next().unwrap_or(email).to_string();
        let user = UserIdentity {
            id: LOGIN_USER_ID.to_string(),
            email: email.to_owned(),
            name,
            avatar: SELF_AVATAR.to_string(),
        };
        self.remember_identity(&user).await;
        info!("{} logged in", user.email);

        Ok(user)
    }

    pub async fn signup(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<UserIdentity, ServiceError> {
        self.delay(AUTH_DELAY).await;

        if name.is_empty() || email.is_empty() || password.is_empty() {
            warn!("signup rejected: missing name, email or password");
            return Err(ServiceError::Validation("Invalid input".to_string()));
        }

        let avatar_index: u32 = rand::thread_rng().gen_range(0..70);
        let user = UserIdentity {
            id: new_id(),
            email: email.to_owned(),
            name: name.to_owned(),
            avatar: format!("https://i.pravatar.cc/150?img={avatar_index}"),
        };
        self.remember_identity(&user).await;
        info!("new user {} signed up as {}", user.id, user.email);

        Ok(user)
    }
}
