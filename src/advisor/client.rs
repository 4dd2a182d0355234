//! Client for the advisory chat-completion endpoint

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::conversation::Conversation;

/// Default chat model requested from the endpoint
pub const DEFAULT_MODEL: &str = "gpt-4";

/// Errors from the advisory collaborator.
///
/// Advisory failures are recoverable and localized: callers log and continue,
/// and a computed projection is never invalidated by them.
#[derive(Debug, Error)]
pub enum AdvisorError {
    /// Request or transport failure against the chat endpoint
    #[error("advisory request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The endpoint answered without any usable completion
    #[error("advisory response contained no completion")]
    EmptyResponse,
}

/// A source of free-text advice for an answered conversation
pub trait AdvisoryClient {
    /// Request advice for the conversation so far
    fn advise(&self, conversation: &Conversation) -> Result<String, AdvisorError>;
}

/// One chat message on the wire
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

/// Chat-completion request body
#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub temperature: f64,
    pub max_tokens: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatChoice {
    pub message: ChatMessage,
}

/// Chat-completion response body
#[derive(Debug, Clone, Deserialize)]
pub struct ChatResponse {
    pub choices: Vec<ChatChoice>,
}

/// Blocking client for a chat-completions JSON endpoint
pub struct ChatEndpointClient {
    endpoint: String,
    api_key: String,
    model: String,
    temperature: f64,
    max_tokens: u32,
    http: reqwest::blocking::Client,
}

impl ChatEndpointClient {
    /// Create a client for the given endpoint URL and API key
    pub fn new(endpoint: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            temperature: 0.7,
            max_tokens: 150,
            http: reqwest::blocking::Client::new(),
        }
    }

    /// Override the requested model
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Build the request body for a conversation
    fn build_request(&self, conversation: &Conversation) -> ChatRequest {
        let mut messages = vec![ChatMessage {
            role: "system".to_string(),
            content: "You are a business management expert. Give concrete advice on the plan \
                      described by the answers below."
                .to_string(),
        }];

        let body = conversation
            .entries()
            .iter()
            .map(|e| format!("{}: {}", e.question_id, e.answer))
            .collect::<Vec<_>>()
            .join("\n");
        messages.push(ChatMessage {
            role: "user".to_string(),
            content: body,
        });

        ChatRequest {
            model: self.model.clone(),
            messages,
            temperature: self.temperature,
            max_tokens: self.max_tokens,
        }
    }
}

/// Pull the first completion out of a response
fn extract_reply(response: ChatResponse) -> Result<String, AdvisorError> {
    response
        .choices
        .into_iter()
        .next()
        .map(|choice| choice.message.content.trim().to_string())
        .ok_or(AdvisorError::EmptyResponse)
}

impl AdvisoryClient for ChatEndpointClient {
    fn advise(&self, conversation: &Conversation) -> Result<String, AdvisorError> {
        let request = self.build_request(conversation);

        let response = self
            .http
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()?
            .error_for_status()?
            .json::<ChatResponse>()?;

        extract_reply(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_conversation() -> Conversation {
        let mut conversation = Conversation::new();
        conversation.record("idea", "a subscription bakery");
        conversation.record("goal", "1000 subscribers in year one");
        conversation
    }

    #[test]
    fn test_build_request_shape() {
        let client = ChatEndpointClient::new("https://example.invalid/v1/chat", "test-key");
        let request = client.build_request(&sample_conversation());

        assert_eq!(request.model, DEFAULT_MODEL);
        assert_eq!(request.messages.len(), 2);
        assert_eq!(request.messages[0].role, "system");
        assert_eq!(request.messages[1].role, "user");
        assert_eq!(
            request.messages[1].content,
            "idea: a subscription bakery\ngoal: 1000 subscribers in year one"
        );
    }

    #[test]
    fn test_response_parsing_and_extraction() {
        let json = r#"{
            "choices": [
                {"message": {"role": "assistant", "content": "  Focus on retention first.  "}}
            ]
        }"#;
        let response: ChatResponse = serde_json::from_str(json).unwrap();
        let reply = extract_reply(response).unwrap();
        assert_eq!(reply, "Focus on retention first.");
    }

    #[test]
    fn test_empty_response_is_an_error() {
        let response: ChatResponse = serde_json::from_str(r#"{"choices": []}"#).unwrap();
        assert!(matches!(
            extract_reply(response),
            Err(AdvisorError::EmptyResponse)
        ));
    }

    #[test]
    fn test_model_override() {
        let client = ChatEndpointClient::new("https://example.invalid/v1/chat", "test-key")
            .with_model("gpt-3.5-turbo");
        let request = client.build_request(&sample_conversation());
        assert_eq!(request.model, "gpt-3.5-turbo");
    }
}
