//! Practice Module
//!
//! Live voice practice with the tutor agent:
//! - catalog: languages, scenarios and voices on offer
//! - session: traits for the external real-time SDK
//! - orchestrator: session lifecycle
//! - transcript: chat and visualizer models

pub mod catalog;
pub mod orchestrator;
pub mod session;
pub mod transcript;

// Re-export main types
pub use catalog::{Gender, Language, Scenario, SessionSelection, Voice, LANGUAGES, SCENARIOS, VOICES};
pub use orchestrator::{PracticeOrchestrator, SessionPhase};
pub use session::{
    AgentState, LocalMedia, MessageContent, RealtimeSession, ReceivedMessage, SessionConnector,
    SessionHandles, TokenRequestOptions,
};
pub use transcript::{AgentStatus, Speaker, TranscriptEntry};
