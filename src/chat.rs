use crate::{models::ChatMessage, AppState};
use rocket::{get, post, serde::json::Json, State};
use serde::{Deserialize, Serialize};

/// Clients send the sender id either as text or as a bare number.
#[derive(Deserialize, Debug, Clone)]
#[serde(untagged)]
pub enum SenderId {
    Text(String),
    Number(i64),
}

impl SenderId {
    pub fn as_text(&self) -> String {
        match self {
            SenderId::Text(id) => id.clone(),
            SenderId::Number(id) => id.to_string(),
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageInput {
    #[serde(alias = "sender_id")]
    pub sender_id: SenderId,
    pub message: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageSent {
    pub success: bool,
    pub message_id: String,
}

#[get("/<chat_id>/messages")]
pub async fn list_messages(state: &State<AppState>, chat_id: &str) -> Json<Vec<ChatMessage>> {
    Json(state.data.list_messages(chat_id).await)
}

// Text goes in as typed; the chat screen already drops blank input.
#[post("/<chat_id>/messages", data = "<input>")]
pub async fn send_message(
    state: &State<AppState>,
    chat_id: &str,
    input: Json<MessageInput>,
) -> Json<MessageSent> {
    let message_id = state
        .data
        .append_message(chat_id, &input.sender_id.as_text(), &input.message)
        .await;
    Json(MessageSent {
        success: true,
        message_id,
    })
}
