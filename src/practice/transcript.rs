//! Transcript and agent status
//!
//! Presentation models for the in-session screen: chat bubbles built from
//! the session's message history, and the tutor's visualizer status.

use crate::practice::session::{AgentState, MessageContent, ReceivedMessage, RealtimeSession};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Speaker {
    User,
    Agent,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptEntry {
    pub id: String,
    pub speaker: Speaker,
    pub text: String,
}

impl From<&ReceivedMessage> for TranscriptEntry {
    fn from(message: &ReceivedMessage) -> Self {
        let (speaker, text) = match &message.content {
            MessageContent::UserTranscript(text) | MessageContent::UserInput(text) => {
                (Speaker::User, text)
            }
            MessageContent::AgentTranscript(text) => (Speaker::Agent, text),
        };
        Self {
            id: message.id.clone(),
            speaker,
            text: text.trim().to_string(),
        }
    }
}

/// Chat bubbles in arrival order
pub fn transcript(messages: &[ReceivedMessage]) -> Vec<TranscriptEntry> {
    messages.iter().map(TranscriptEntry::from).collect()
}

/// Status line under the visualizer
pub fn state_label(state: AgentState) -> &'static str {
    match state {
        AgentState::Listening => "Listening...",
        AgentState::Thinking => "Thinking...",
        AgentState::Speaking => "Speaking...",
        AgentState::Unset => "",
    }
}

/// What the visualizer shows for the tutor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentStatus {
    /// State driving the bars. Listening without an agent audio track,
    /// otherwise the reported state (listening until one arrives).
    pub state: AgentState,
    /// Label text, absent until the agent has reported a state
    pub label: Option<&'static str>,
    /// The backdrop pulses while the tutor speaks
    pub pulsing: bool,
    pub has_audio: bool,
}

impl AgentStatus {
    pub fn new(reported: Option<AgentState>, has_audio: bool) -> Self {
        let state = if has_audio {
            reported.unwrap_or(AgentState::Listening)
        } else {
            AgentState::Listening
        };
        Self {
            state,
            label: reported.map(state_label),
            pulsing: reported == Some(AgentState::Speaking),
            has_audio,
        }
    }

    pub fn from_session(session: &dyn RealtimeSession) -> Self {
        Self::new(session.agent_state(), session.agent_audio_track().is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn message(id: &str, content: MessageContent) -> ReceivedMessage {
        ReceivedMessage {
            id: id.to_string(),
            timestamp: Utc::now(),
            content,
        }
    }

    #[test]
    fn test_transcript_roles_and_trim() {
        let messages = vec![
            message("1", MessageContent::AgentTranscript("  നമസ്കാരം! Hello!\n".to_string())),
            message("2", MessageContent::UserTranscript("namaskaaram ".to_string())),
            message("3", MessageContent::UserInput("how do I say thanks?".to_string())),
        ];

        let entries = transcript(&messages);
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].speaker, Speaker::Agent);
        assert_eq!(entries[0].text, "നമസ്കാരം! Hello!");
        assert_eq!(entries[1].speaker, Speaker::User);
        assert_eq!(entries[1].text, "namaskaaram");
        assert_eq!(entries[2].speaker, Speaker::User);
        assert_eq!(entries[2].id, "3");
    }

    #[test]
    fn test_agent_status() {
        let idle = AgentStatus::new(None, false);
        assert_eq!(idle.state, AgentState::Listening);
        assert_eq!(idle.label, None);
        assert!(!idle.pulsing);

        let speaking = AgentStatus::new(Some(AgentState::Speaking), true);
        assert_eq!(speaking.label, Some("Speaking..."));
        assert!(speaking.pulsing);
        assert!(speaking.has_audio);

        let unset = AgentStatus::new(Some(AgentState::Unset), true);
        assert_eq!(unset.state, AgentState::Unset);
        assert_eq!(unset.label, Some(""));
    }

    #[test]
    fn test_agent_status_without_audio_listens() {
        let status = AgentStatus::new(Some(AgentState::Thinking), false);
        assert_eq!(status.state, AgentState::Listening);
        assert_eq!(status.label, Some("Thinking..."));
        assert!(!status.has_audio);

        let speaking = AgentStatus::new(Some(AgentState::Speaking), false);
        assert_eq!(speaking.state, AgentState::Listening);
        assert!(speaking.pulsing);
    }
}
