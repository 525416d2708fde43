// ABOUTME: Scripted in-memory assistant implementation for tests
// ABOUTME: Replays configured run states and replies while recording every call

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Mutex;

use workout_plan_server::assistant::{AssistantApi, RunState};
use workout_plan_server::errors::AppResult;

/// Assistant stub that replays a scripted sequence of run states
///
/// Status fetches consume the scripted results in order; once the script
/// is exhausted every further fetch reports `exhausted_state`. All calls
/// are recorded so tests can assert on pipeline behavior.
pub struct ScriptedAssistant {
    states: Mutex<VecDeque<AppResult<RunState>>>,
    exhausted_state: RunState,
    reply: String,
    /// User messages appended to the thread, in order
    pub appended_messages: Mutex<Vec<String>>,
    /// Instructions passed to each started run, in order
    pub run_instructions: Mutex<Vec<String>>,
    /// Number of run status fetches
    pub state_fetches: AtomicU32,
    /// Number of newest-message fetches
    pub reply_fetches: AtomicU32,
}

impl ScriptedAssistant {
    /// Assistant whose runs complete on the first status fetch
    pub fn completing_with(reply: &str) -> Self {
        Self::with_states(Vec::new(), reply)
    }

    /// Assistant that replays `states`, then completes, replying with `reply`
    pub fn with_states(states: Vec<AppResult<RunState>>, reply: &str) -> Self {
        Self {
            states: Mutex::new(states.into_iter().collect()),
            exhausted_state: RunState::Completed,
            reply: reply.to_owned(),
            appended_messages: Mutex::new(Vec::new()),
            run_instructions: Mutex::new(Vec::new()),
            state_fetches: AtomicU32::new(0),
            reply_fetches: AtomicU32::new(0),
        }
    }

    /// Assistant whose runs never leave the pending state
    pub fn pending_forever() -> Self {
        Self {
            states: Mutex::new(VecDeque::new()),
            exhausted_state: RunState::Pending,
            reply: String::new(),
            appended_messages: Mutex::new(Vec::new()),
            run_instructions: Mutex::new(Vec::new()),
            state_fetches: AtomicU32::new(0),
            reply_fetches: AtomicU32::new(0),
        }
    }

    /// Number of status fetches recorded so far
    pub fn fetch_count(&self) -> u32 {
        self.state_fetches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AssistantApi for ScriptedAssistant {
    async fn append_user_message(&self, text: &str) -> AppResult<()> {
        self.appended_messages
            .lock()
            .expect("messages lock poisoned")
            .push(text.to_owned());
        Ok(())
    }

    async fn create_run(&self, instructions: &str) -> AppResult<String> {
        let mut runs = self
            .run_instructions
            .lock()
            .expect("instructions lock poisoned");
        runs.push(instructions.to_owned());
        Ok(format!("run_{}", runs.len()))
    }

    async fn run_state(&self, _run_id: &str) -> AppResult<RunState> {
        self.state_fetches.fetch_add(1, Ordering::SeqCst);
        self.states
            .lock()
            .expect("states lock poisoned")
            .pop_front()
            .unwrap_or_else(|| Ok(self.exhausted_state.clone()))
    }

    async fn latest_message_text(&self) -> AppResult<String> {
        self.reply_fetches.fetch_add(1, Ordering::SeqCst);
        Ok(self.reply.clone())
    }
}
