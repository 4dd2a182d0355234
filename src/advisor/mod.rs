//! Advisory collaborator: conversation state and the chat endpoint client

mod client;
mod conversation;

pub use client::{
    AdvisorError, AdvisoryClient, ChatEndpointClient, ChatMessage, ChatRequest, ChatResponse,
    DEFAULT_MODEL,
};
pub use conversation::{Conversation, ConversationEntry, QuestionFlow, QuestionNode};
