//! Shared test fixtures for config, api, and session test modules.
//!
//! The session takes its model client, executor, line input, and render sink
//! as trait objects; the scripted versions here stand in for all four.

use crate::api::ModelClient;
use crate::conversation::Conversation;
use crate::error::{ApiError, ExecError};
use crate::exec::{ExecOutcome, Executor};
use crate::types::{ChatRequest, ChatResponse, Choice, Message, ResponseMessage, Role};
use crate::ui::render::RenderSink;
use crate::ui::terminal::{LineInput, ReadOutcome};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;
use std::time::{SystemTime, UNIX_EPOCH};

static TEST_DIR_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Temporary directory fixture with best-effort cleanup.
#[derive(Debug)]
pub struct TestTempDir {
    path: PathBuf,
}

impl TestTempDir {
    /// Create a unique temporary directory with a readable prefix.
    pub fn new(prefix: &str) -> Self {
        let suffix = TEST_DIR_COUNTER.fetch_add(1, Ordering::Relaxed);
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis();
        let dir = std::env::temp_dir().join(format!("chatsh-{prefix}-{millis}-{suffix}"));
        fs::create_dir_all(&dir).expect("failed to create temporary fixture directory");
        Self { path: dir }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn child(&self, relative: &str) -> PathBuf {
        self.path.join(relative)
    }

    /// Write UTF-8 text to a child path, creating parent directories as needed.
    pub fn write_text(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.child(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("failed to create parent directories for fixture");
        }
        fs::write(&path, content).expect("failed to write fixture file");
        path
    }
}

impl Drop for TestTempDir {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.path);
    }
}

/// A one-choice completion whose assistant content is `content`.
pub fn chat_response(content: &str) -> ChatResponse {
    ChatResponse {
        id: "chatcmpl-test".into(),
        choices: vec![Choice {
            index: 0,
            message: ResponseMessage {
                role: Role::Assistant,
                content: Some(content.to_string()),
            },
            finish_reason: Some("stop".into()),
        }],
        usage: None,
    }
}

/// Model client that replays queued responses and records every request.
pub struct ScriptedClient {
    responses: Mutex<VecDeque<Result<ChatResponse, ApiError>>>,
    requests: Mutex<Vec<ChatRequest>>,
}

impl ScriptedClient {
    pub fn new(responses: Vec<Result<ChatResponse, ApiError>>) -> Self {
        Self {
            responses: Mutex::new(responses.into()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<ChatRequest> {
        self.requests.lock().expect("mock lock poisoned").clone()
    }
}

#[async_trait]
impl ModelClient for ScriptedClient {
    async fn chat(&self, request: &ChatRequest) -> Result<ChatResponse, ApiError> {
        self.requests
            .lock()
            .expect("mock lock poisoned")
            .push(request.clone());
        self.responses
            .lock()
            .expect("mock lock poisoned")
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::InvalidResponse("no mock response queued".into())))
    }
}

/// Executor that records commands instead of spawning them.
pub struct ScriptedExecutor {
    results: Mutex<VecDeque<Result<ExecOutcome, ExecError>>>,
    executed: Mutex<Vec<String>>,
}

impl ScriptedExecutor {
    pub fn new(results: Vec<Result<ExecOutcome, ExecError>>) -> Self {
        Self {
            results: Mutex::new(results.into()),
            executed: Mutex::new(Vec::new()),
        }
    }

    /// Every command exits 0.
    pub fn succeeding() -> Self {
        Self::new(Vec::new())
    }

    pub fn executed(&self) -> Vec<String> {
        self.executed.lock().expect("mock lock poisoned").clone()
    }
}

#[async_trait]
impl Executor for ScriptedExecutor {
    async fn execute(&self, command: &str) -> Result<ExecOutcome, ExecError> {
        self.executed
            .lock()
            .expect("mock lock poisoned")
            .push(command.to_string());
        self.results
            .lock()
            .expect("mock lock poisoned")
            .pop_front()
            .unwrap_or(Ok(ExecOutcome {
                succeeded: true,
                exit_status: Some(0),
            }))
    }
}

/// Line input fed from a fixed script. Reports EOF once the script runs out.
#[derive(Default)]
pub struct ScriptedInput {
    lines: VecDeque<ReadOutcome>,
    prompts: Vec<(String, String)>,
}

impl ScriptedInput {
    pub fn new(lines: &[&str]) -> Self {
        Self {
            lines: lines
                .iter()
                .map(|l| ReadOutcome::Line(l.to_string()))
                .collect(),
            prompts: Vec::new(),
        }
    }

    /// `(prompt, initial)` pairs in the order they were shown.
    pub fn prompts(&self) -> &[(String, String)] {
        &self.prompts
    }
}

impl LineInput for ScriptedInput {
    fn read_line(&mut self, prompt: &str, initial: &str) -> io::Result<ReadOutcome> {
        self.prompts.push((prompt.to_string(), initial.to_string()));
        Ok(self.lines.pop_front().unwrap_or(ReadOutcome::Eof))
    }
}

/// One call observed by [`RecordingSink`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SinkEvent {
    Turn(Message),
    Command(Option<String>),
    Caution,
    /// Transcript shown, with its turn count.
    Transcript(usize),
    Warn(String),
    Error(String),
}

/// Render sink that records calls instead of writing to the terminal.
#[derive(Default)]
pub struct RecordingSink {
    events: Mutex<Vec<SinkEvent>>,
}

impl RecordingSink {
    pub fn events(&self) -> Vec<SinkEvent> {
        self.events.lock().expect("sink lock poisoned").clone()
    }

    pub fn warnings(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                SinkEvent::Warn(msg) => Some(msg),
                _ => None,
            })
            .collect()
    }

    pub fn errors(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                SinkEvent::Error(msg) => Some(msg),
                _ => None,
            })
            .collect()
    }

    fn record(&self, event: SinkEvent) {
        self.events.lock().expect("sink lock poisoned").push(event);
    }
}

impl RenderSink for RecordingSink {
    fn turn(&self, turn: &Message) {
        self.record(SinkEvent::Turn(turn.clone()));
    }

    fn command(&self, command: Option<&str>) {
        self.record(SinkEvent::Command(command.map(str::to_string)));
    }

    fn caution(&self, _text: &str) {
        self.record(SinkEvent::Caution);
    }

    fn transcript(&self, conversation: &Conversation) {
        self.record(SinkEvent::Transcript(conversation.len()));
    }

    fn warn(&self, msg: &str) {
        self.record(SinkEvent::Warn(msg.to_string()));
    }

    fn error(&self, msg: &str) {
        self.record(SinkEvent::Error(msg.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn temp_dir_fixture_writes_and_resolves_paths() {
        let fixture = TestTempDir::new("fixture");
        let file = fixture.write_text("nested/file.txt", "hello");
        assert_eq!(fs::read_to_string(file).unwrap(), "hello");
    }

    #[test]
    fn scripted_input_reports_eof_when_exhausted() {
        let mut input = ScriptedInput::new(&["r"]);
        assert_eq!(input.read_line("a", "").unwrap(), ReadOutcome::Line("r".into()));
        assert_eq!(input.read_line("b", "x").unwrap(), ReadOutcome::Eof);
        assert_eq!(input.prompts()[1], ("b".to_string(), "x".to_string()));
    }

    #[tokio::test]
    async fn scripted_client_errors_when_queue_is_empty() {
        let client = ScriptedClient::new(Vec::new());
        let request = ChatRequest {
            model: "m".into(),
            messages: Vec::new(),
            temperature: None,
        };
        assert!(matches!(
            client.chat(&request).await,
            Err(ApiError::InvalidResponse(_))
        ));
        assert_eq!(client.requests().len(), 1);
    }
}
