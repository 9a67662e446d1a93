//! Mock real-time session for testing
//!
//! Records every call so tests can verify what the orchestrator asked of
//! the external SDK. Starts can be held open with a gate and released later.

use anyhow::Result;
use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::Notify;
use tota::practice::{
    AgentState, LocalMedia, RealtimeSession, ReceivedMessage, SessionConnector, SessionHandles,
    TokenRequestOptions,
};

/// Mock session that records calls
pub struct MockSession {
    pub calls: Arc<Mutex<Vec<String>>>,
    pub messages: Mutex<Vec<ReceivedMessage>>,
    pub agent_state: Mutex<Option<AgentState>>,
    pub audio_track: Mutex<Option<String>>,
    fail_start: Option<String>,
    gate: Option<Arc<Notify>>,
    connected: AtomicBool,
}

impl MockSession {
    pub fn new(fail_start: Option<String>, gate: Option<Arc<Notify>>) -> Self {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
            messages: Mutex::new(Vec::new()),
            agent_state: Mutex::new(None),
            audio_track: Mutex::new(None),
            fail_start,
            gate,
            connected: AtomicBool::new(false),
        }
    }

    pub fn get_calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn was_called(&self, name: &str) -> bool {
        self.calls.lock().unwrap().iter().any(|c| c == name)
    }

    fn record(&self, name: &str) {
        self.calls.lock().unwrap().push(name.to_string());
    }
}

#[async_trait]
impl RealtimeSession for MockSession {
    async fn start(&self) -> Result<()> {
        self.record("start");
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
        if let Some(reason) = &self.fail_start {
            return Err(anyhow::anyhow!("{}", reason));
        }
        self.connected.store(true, Ordering::SeqCst);
        Ok(())
    }

    async fn end(&self) -> Result<()> {
        self.record("end");
        self.connected.store(false, Ordering::SeqCst);
        Ok(())
    }

    fn restore_message_history(&self, messages: Vec<ReceivedMessage>) {
        self.record("restore_history");
        *self.messages.lock().unwrap() = messages;
    }

    fn messages(&self) -> Vec<ReceivedMessage> {
        self.messages.lock().unwrap().clone()
    }

    fn agent_state(&self) -> Option<AgentState> {
        *self.agent_state.lock().unwrap()
    }

    fn agent_audio_track(&self) -> Option<String> {
        self.audio_track.lock().unwrap().clone()
    }

    fn is_connected(&self) -> bool {
        self.connected.load(Ordering::SeqCst)
    }
}

/// Mock microphone, enabled at creation
pub struct MockMedia {
    enabled: AtomicBool,
    pub toggles: AtomicUsize,
}

impl MockMedia {
    pub fn new() -> Self {
        Self {
            enabled: AtomicBool::new(true),
            toggles: AtomicUsize::new(0),
        }
    }
}

impl Default for MockMedia {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LocalMedia for MockMedia {
    async fn toggle_microphone(&self) -> Result<()> {
        self.toggles.fetch_add(1, Ordering::SeqCst);
        self.enabled.fetch_xor(true, Ordering::SeqCst);
        Ok(())
    }

    fn is_microphone_enabled(&self) -> bool {
        self.enabled.load(Ordering::SeqCst)
    }
}

/// Connector handing out mock sessions
#[derive(Default)]
pub struct MockConnector {
    pub requests: Mutex<Vec<TokenRequestOptions>>,
    pub sessions: Mutex<Vec<Arc<MockSession>>>,
    pub fail_connect: Mutex<Option<String>>,
    pub fail_start: Mutex<Option<String>>,
    gate: Option<Arc<Notify>>,
}

impl MockConnector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sessions from this connector wait in `start` until [`Self::release`]
    pub fn gated() -> Self {
        Self {
            gate: Some(Arc::new(Notify::new())),
            ..Self::default()
        }
    }

    pub fn failing_start(reason: &str) -> Self {
        let connector = Self::default();
        *connector.fail_start.lock().unwrap() = Some(reason.to_string());
        connector
    }

    /// Let one pending start complete
    pub fn release(&self) {
        if let Some(gate) = &self.gate {
            gate.notify_one();
        }
    }

    pub fn last_session(&self) -> Arc<MockSession> {
        self.sessions
            .lock()
            .unwrap()
            .last()
            .cloned()
            .expect("no session was created")
    }

    pub fn last_request(&self) -> TokenRequestOptions {
        self.requests
            .lock()
            .unwrap()
            .last()
            .cloned()
            .expect("no session was requested")
    }
}

impl SessionConnector for MockConnector {
    fn connect(&self, options: TokenRequestOptions) -> Result<SessionHandles> {
        self.requests.lock().unwrap().push(options);
        if let Some(reason) = self.fail_connect.lock().unwrap().clone() {
            return Err(anyhow::anyhow!("{}", reason));
        }

        let session = Arc::new(MockSession::new(
            self.fail_start.lock().unwrap().clone(),
            self.gate.clone(),
        ));
        self.sessions.lock().unwrap().push(Arc::clone(&session));

        Ok(SessionHandles {
            session,
            local_media: Arc::new(MockMedia::new()),
        })
    }
}
