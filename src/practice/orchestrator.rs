//! Practice Session Orchestrator
//!
//! Owns the external session for one practice conversation and drives the
//! setup → connecting → in-session lifecycle. Presentation code either polls
//! [`PracticeOrchestrator::phase`] or watches [`PracticeOrchestrator::subscribe`].

use crate::error::{TotaError, TotaResult};
use crate::practice::catalog::{self, SessionSelection};
use crate::practice::session::{LocalMedia, RealtimeSession, SessionConnector, TokenRequestOptions};
use std::fmt;
use std::sync::{Arc, Mutex};
use tokio::sync::watch;
use tracing::{debug, info, warn};

/// Lifecycle of a practice session
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SessionPhase {
    /// Choosing language, scenario and voice
    #[default]
    Setup,
    /// Waiting for the external session to start
    Connecting,
    /// Conversation in progress
    InSession,
    /// The last start attempt failed
    Failed(String),
}

impl fmt::Display for SessionPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionPhase::Setup => f.write_str("in setup"),
            SessionPhase::Connecting => f.write_str("connecting"),
            SessionPhase::InSession => f.write_str("in session"),
            SessionPhase::Failed(reason) => write!(f, "failed ({})", reason),
        }
    }
}

/// Handles held while connecting or in session
struct ActiveSession {
    /// Start attempt that created these handles
    generation: u64,
    session: Arc<dyn RealtimeSession>,
    local_media: Arc<dyn LocalMedia>,
}

struct Inner {
    selection: SessionSelection,
    active: Option<ActiveSession>,
    generation: u64,
}

pub struct PracticeOrchestrator {
    connector: Arc<dyn SessionConnector>,
    inner: Mutex<Inner>,
    phase_tx: watch::Sender<SessionPhase>,
}

/// Participant attributes the tutor agent reads to configure itself
pub fn token_options(selection: &SessionSelection) -> TokenRequestOptions {
    let mut options = TokenRequestOptions::default();
    let attributes = &mut options.participant_attributes;
    attributes.insert("language".to_string(), selection.language.id.to_string());
    attributes.insert("scenario".to_string(), selection.scenario.id.to_string());
    attributes.insert("voice".to_string(), selection.voice.id.to_string());
    options
}

impl PracticeOrchestrator {
    pub fn new(connector: Arc<dyn SessionConnector>) -> Self {
        Self::with_selection(connector, SessionSelection::default())
    }

    pub fn with_selection(connector: Arc<dyn SessionConnector>, selection: SessionSelection) -> Self {
        let (phase_tx, _) = watch::channel(SessionPhase::Setup);
        Self {
            connector,
            inner: Mutex::new(Inner {
                selection,
                active: None,
                generation: 0,
            }),
            phase_tx,
        }
    }

    /// Current phase
    pub fn phase(&self) -> SessionPhase {
        self.phase_tx.borrow().clone()
    }

    /// Receive every phase change
    pub fn subscribe(&self) -> watch::Receiver<SessionPhase> {
        self.phase_tx.subscribe()
    }

    fn set_phase(&self, phase: SessionPhase) {
        debug!("Practice phase -> {}", phase);
        self.phase_tx.send_replace(phase);
    }

    pub fn selection(&self) -> TotaResult<SessionSelection> {
        Ok(self.inner.lock()?.selection.clone())
    }

    pub fn set_selection(&self, selection: SessionSelection) -> TotaResult<()> {
        self.update_selection(|current| *current = selection)
    }

    pub fn set_language(&self, id: &str) -> TotaResult<()> {
        let language = catalog::find_language(id)?;
        self.update_selection(|selection| selection.language = language)
    }

    pub fn set_scenario(&self, id: &str) -> TotaResult<()> {
        let scenario = catalog::find_scenario(id)?;
        self.update_selection(|selection| selection.scenario = scenario)
    }

    pub fn set_voice(&self, id: &str) -> TotaResult<()> {
        let voice = catalog::find_voice(id)?;
        self.update_selection(|selection| selection.voice = voice)
    }

    /// Apply `change` unless a session is connecting or active. The phase is
    /// read under the selection guard.
    fn update_selection(&self, change: impl FnOnce(&mut SessionSelection)) -> TotaResult<()> {
        let mut inner = self.inner.lock()?;
        match self.phase() {
            SessionPhase::Setup | SessionPhase::Failed(_) => {
                change(&mut inner.selection);
                Ok(())
            }
            phase => Err(TotaError::SelectionLocked(phase.to_string())),
        }
    }

    /// Start a session with the current selection.
    ///
    /// `Connecting` is published before the first await. Resolves once the
    /// external start completes; on failure the phase becomes `Failed`.
    pub async fn start_session(&self) -> TotaResult<()> {
        let (generation, session) = {
            let mut inner = self.inner.lock()?;
            let phase = self.phase();
            if phase != SessionPhase::Setup {
                return Err(TotaError::InvalidTransition {
                    phase: phase.to_string(),
                    action: "start a session",
                });
            }

            inner.generation += 1;
            let generation = inner.generation;
            self.set_phase(SessionPhase::Connecting);

            let options = token_options(&inner.selection);
            info!(
                "📞 Starting practice: language={} scenario={} voice={}",
                inner.selection.language.id, inner.selection.scenario.id, inner.selection.voice.id
            );

            let handles = match self.connector.connect(options) {
                Ok(handles) => handles,
                Err(e) => {
                    let reason = e.to_string();
                    warn!("❌ Could not create session: {}", reason);
                    self.set_phase(SessionPhase::Failed(reason.clone()));
                    return Err(TotaError::ConnectionFailed(reason));
                }
            };

            let session = Arc::clone(&handles.session);
            inner.active = Some(ActiveSession {
                generation,
                session: handles.session,
                local_media: handles.local_media,
            });
            (generation, session)
        };

        let result = session.start().await;

        let mut inner = self.inner.lock()?;
        let still_current = inner
            .active
            .as_ref()
            .is_some_and(|active| active.generation == generation);
        if !still_current {
            debug!("Start attempt {} completed after the session was ended", generation);
            return Err(TotaError::Session(
                "session was ended before it connected".to_string(),
            ));
        }

        match result {
            Ok(()) => {
                info!("✅ Practice session connected");
                self.set_phase(SessionPhase::InSession);
                Ok(())
            }
            Err(e) => {
                let reason = e.to_string();
                warn!("❌ Practice session failed to start: {}", reason);
                inner.active = None;
                self.set_phase(SessionPhase::Failed(reason.clone()));
                Err(TotaError::ConnectionFailed(reason))
            }
        }
    }

    /// End the current session and return to setup.
    ///
    /// The external end request runs in the background; local handles are
    /// released immediately.
    pub fn end_session(&self) -> TotaResult<()> {
        let mut inner = self.inner.lock()?;

        if let Some(active) = inner.active.take() {
            info!("📴 Ending practice session");
            let session = active.session;
            match tokio::runtime::Handle::try_current() {
                Ok(handle) => {
                    handle.spawn(async move {
                        if let Err(e) = session.end().await {
                            warn!("⚠️ Session end request failed: {}", e);
                        }
                        session.restore_message_history(Vec::new());
                    });
                }
                Err(_) => {
                    warn!("⚠️ No async runtime, session end request dropped");
                    session.restore_message_history(Vec::new());
                }
            }
        }

        self.set_phase(SessionPhase::Setup);
        Ok(())
    }

    /// Leave the failed state
    pub fn dismiss_failure(&self) -> TotaResult<()> {
        let _inner = self.inner.lock()?;
        if matches!(self.phase(), SessionPhase::Failed(_)) {
            self.set_phase(SessionPhase::Setup);
        }
        Ok(())
    }

    /// Flip the microphone and return whether it is now enabled
    pub async fn toggle_microphone(&self) -> TotaResult<bool> {
        let local_media = self.local_media().ok_or(TotaError::NoActiveSession)?;
        local_media
            .toggle_microphone()
            .await
            .map_err(|e| TotaError::Session(e.to_string()))?;
        Ok(local_media.is_microphone_enabled())
    }

    pub fn is_microphone_enabled(&self) -> bool {
        self.local_media()
            .is_some_and(|media| media.is_microphone_enabled())
    }

    pub fn session(&self) -> Option<Arc<dyn RealtimeSession>> {
        let inner = self.inner.lock().ok()?;
        inner.active.as_ref().map(|a| Arc::clone(&a.session))
    }

    pub fn local_media(&self) -> Option<Arc<dyn LocalMedia>> {
        let inner = self.inner.lock().ok()?;
        inner.active.as_ref().map(|a| Arc::clone(&a.local_media))
    }
}
