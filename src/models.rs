use serde::{Deserialize, Deserializer, Serialize};

pub const ROLE_SYSTEM: &str = "system";
pub const ROLE_USER: &str = "user";

// Response fields below accept both a missing key and an explicit `null`,
// each decoding to the field's default value.

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ChatMessage {
    #[serde(default, deserialize_with = "null_as_default")]
    pub role: String,
    // tool-call-only replies carry `"content": null`
    #[serde(default, deserialize_with = "null_as_default")]
    pub content: String
}

impl ChatMessage {

    pub fn new(role: impl Into<String>, content: impl Into<String>) -> Self {

        ChatMessage {
            role: role.into(),
            content: content.into()
        }

    }

    pub fn system(content: impl Into<String>) -> Self {

        Self::new(ROLE_SYSTEM, content)

    }

    pub fn user(content: impl Into<String>) -> Self {

        Self::new(ROLE_USER, content)

    }

}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>
}

/// Decoded body of a successful chat-completion call.
///
/// A bare `{"choices": null}` still decodes, to a response with no choices.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ChatResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub object: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub created: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub model: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub choices: Vec<Choice>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub usage: Usage
}

impl ChatResponse {

    pub fn first_choice(&self) -> Option<&Choice> {

        self.choices.first()

    }

}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Choice {
    #[serde(default, deserialize_with = "null_as_default")]
    pub index: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub message: ChatMessage,
    // null until the choice is finished
    #[serde(default)]
    pub finish_reason: Option<String>
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Usage {
    #[serde(default, deserialize_with = "null_as_default")]
    pub prompt_tokens: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub completion_tokens: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_tokens: u64
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{

    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())

}
