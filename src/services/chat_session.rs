//! Session view-model for the chat transcript.
//!
//! Owns the ordered sequence of chat turns, the pending input, the
//! single-flight query gate, and the advisory connectivity status. The
//! rendering layer only derives from these signals; every invariant lives
//! here.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, Citation};

/// Synthetic assistant turn shown before any query is sent.
pub const GREETING: &str = "👋 Hello! I'm your AI Knowledge Base Assistant. \
    I can help you find information from your uploaded documents. Ask me anything!";

/// Number of retrieved chunks requested per query.
const QUERY_TOP_K: u32 = 5;

/// Who authored a chat turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnRole {
    User,
    Assistant,
}

/// One immutable entry in the append-only transcript.
#[derive(Clone, Debug, PartialEq)]
pub struct ChatTurn {
    pub id: usize,
    pub role: TurnRole,
    pub content: String,
    pub sources: Vec<Citation>,
    pub is_error: bool,
}

/// Backend reachability, resolved by a single probe at startup and never
/// re-checked afterwards.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ApiStatus {
    Checking,
    Ready,
    Warning,
    Error,
}

impl ApiStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ApiStatus::Checking => "Checking...",
            ApiStatus::Ready => "API Connected",
            ApiStatus::Warning => "API Key Not Set",
            ApiStatus::Error => "API Offline",
        }
    }
}

#[derive(Clone)]
pub struct ChatSessionState {
    pub turns: RwSignal<Vec<ChatTurn>>,
    pub input: RwSignal<String>,
    pub is_loading: RwSignal<bool>,
    pub api_status: RwSignal<ApiStatus>,
    pub show_connection_overlay: RwSignal<bool>,
    next_turn_id: RwSignal<usize>,
}

impl ChatSessionState {
    pub fn new() -> Self {
        Self {
            turns: RwSignal::new(vec![ChatTurn {
                id: 0,
                role: TurnRole::Assistant,
                content: GREETING.to_string(),
                sources: Vec::new(),
                is_error: false,
            }]),
            input: RwSignal::new(String::new()),
            is_loading: RwSignal::new(false),
            api_status: RwSignal::new(ApiStatus::Checking),
            show_connection_overlay: RwSignal::new(true),
            next_turn_id: RwSignal::new(1),
        }
    }

    fn push_turn(&self, role: TurnRole, content: String, sources: Vec<Citation>, is_error: bool) {
        let id = self.next_turn_id.get_untracked();
        self.next_turn_id.set(id + 1);
        self.turns.update(|turns| {
            turns.push(ChatTurn {
                id,
                role,
                content,
                sources,
                is_error,
            })
        });
    }

    /// Accepts the pending input for submission: appends the user turn,
    /// clears the input buffer, and sets the in-flight gate. Returns `None`
    /// without touching any state when the input is blank or a query is
    /// already in flight.
    pub fn begin_submit(&self) -> Option<String> {
        let input = self.input.get_untracked();
        let text = input.trim();
        if text.is_empty() || self.is_loading.get_untracked() {
            return None;
        }
        let text = text.to_string();
        self.push_turn(TurnRole::User, text.clone(), Vec::new(), false);
        self.input.set(String::new());
        self.is_loading.set(true);
        Some(text)
    }

    pub fn apply_answer(&self, answer: String, sources: Vec<Citation>) {
        self.push_turn(TurnRole::Assistant, answer, sources, false);
        self.is_loading.set(false);
    }

    /// Records a failed query as a permanent error turn in the transcript.
    pub fn apply_failure(&self, error: String) {
        self.push_turn(
            TurnRole::Assistant,
            format!(
                "Sorry, I encountered an error: {}. Please make sure the backend \
                 is running and configured correctly.",
                error
            ),
            Vec::new(),
            true,
        );
        self.is_loading.set(false);
    }

    /// The probe reached the backend; `Ready` also dismisses the startup
    /// overlay. `Warning` keeps it up until the user continues.
    pub fn apply_probe_success(&self, generation_configured: bool) {
        if generation_configured {
            self.api_status.set(ApiStatus::Ready);
            self.show_connection_overlay.set(false);
        } else {
            self.api_status.set(ApiStatus::Warning);
        }
    }

    pub fn apply_probe_failure(&self) {
        self.api_status.set(ApiStatus::Error);
    }

    pub fn dismiss_overlay(&self) {
        self.show_connection_overlay.set(false);
    }
}

impl Default for ChatSessionState {
    fn default() -> Self {
        Self::new()
    }
}

/// Sends the pending input as a query. At most one query is in flight at a
/// time; the connectivity status never gates submission.
pub fn submit(state: ChatSessionState) {
    let Some(text) = state.begin_submit() else {
        return;
    };
    spawn_local(async move {
        match api::query(&text, QUERY_TOP_K).await {
            Ok(response) => state.apply_answer(response.answer, response.sources),
            Err(e) => {
                log::warn!("Query failed: {}", e);
                state.apply_failure(e);
            }
        }
    });
}

/// Issues the one startup connectivity probe. The result is advisory.
pub fn probe_connectivity(state: ChatSessionState) {
    spawn_local(async move {
        match api::check_health().await {
            Ok(health) => state.apply_probe_success(health.generation_configured),
            Err(e) => {
                log::warn!("Health probe failed: {}", e);
                state.apply_probe_failure();
            }
        }
    });
}

pub fn provide_chat_session() {
    provide_context(ChatSessionState::new());
}

pub fn use_chat_session() -> ChatSessionState {
    expect_context::<ChatSessionState>()
}
