//! Real-time session collaborators
//!
//! Interfaces to the external real-time SDK. The SDK owns transport, turn
//! detection and transcription; the practice core only drives these traits.

use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;
use std::sync::Arc;

/// Conversational phase of the tutor agent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AgentState {
    #[default]
    Unset,
    Listening,
    Thinking,
    Speaking,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageContent {
    /// Transcribed speech from the learner
    UserTranscript(String),
    /// Typed input from the learner
    UserInput(String),
    /// Transcribed speech from the tutor
    AgentTranscript(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReceivedMessage {
    pub id: String,
    pub timestamp: DateTime<Utc>,
    pub content: MessageContent,
}

/// Options sent with the token request when a session is created
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenRequestOptions {
    /// Opaque key/value pairs forwarded to the tutor agent
    pub participant_attributes: BTreeMap<String, String>,
}

/// One live conversation
#[async_trait]
pub trait RealtimeSession: Send + Sync {
    /// Connect and join the conversation
    async fn start(&self) -> Result<()>;

    /// Leave the conversation
    async fn end(&self) -> Result<()>;

    /// Replace the message history
    fn restore_message_history(&self, messages: Vec<ReceivedMessage>);

    /// Messages received so far, oldest first
    fn messages(&self) -> Vec<ReceivedMessage>;

    /// Latest reported agent state, if the agent has joined
    fn agent_state(&self) -> Option<AgentState>;

    /// Identifier of the agent's audio track, if published
    fn agent_audio_track(&self) -> Option<String>;

    fn is_connected(&self) -> bool;
}

/// Microphone control bound to a session
#[async_trait]
pub trait LocalMedia: Send + Sync {
    async fn toggle_microphone(&self) -> Result<()>;

    fn is_microphone_enabled(&self) -> bool;
}

/// Handles created for a new session
pub struct SessionHandles {
    pub session: Arc<dyn RealtimeSession>,
    pub local_media: Arc<dyn LocalMedia>,
}

/// Creates sessions, resolving credentials through its token source
pub trait SessionConnector: Send + Sync {
    fn connect(&self, options: TokenRequestOptions) -> Result<SessionHandles>;
}
