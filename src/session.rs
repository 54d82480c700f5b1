//! Interactive session: prompt → generated command → review loop.
//!
//! The session owns the conversation and the candidate command. It never
//! exits the process; every path ends in an [`Outcome`] or a
//! [`SessionError`] and the binary picks the exit status from that.
//!
//! ```text
//! AwaitingPrompt ──► AwaitingAction ──run──► Executing ──► Terminated
//!       │              │   ▲                                   ▲
//!       │              └───┘ explain/feedback/edit/print/retry │
//!       └──────── q ──────────────── quit ─────────────────────┘
//! ```

use crate::api::{generate, GenerationParams, ModelClient};
use crate::conversation::Conversation;
use crate::error::SessionError;
use crate::exec::Executor;
use crate::extract::{extract, Extraction};
use crate::prompt;
use crate::tui::settings;
use crate::types::{Message, Role};
use crate::ui::render::RenderSink;
use crate::ui::terminal::{LineInput, ReadOutcome};

/// One user choice at the action prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Run,
    Explain,
    Feedback,
    Edit,
    Print,
    Retry,
    Quit,
}

impl Action {
    pub const ALL: [Action; 7] = [
        Action::Run,
        Action::Explain,
        Action::Feedback,
        Action::Edit,
        Action::Print,
        Action::Retry,
        Action::Quit,
    ];

    /// Single-character key selecting this action.
    pub fn key(self) -> char {
        match self {
            Self::Run => 'r',
            Self::Explain => 'x',
            Self::Feedback => 'f',
            Self::Edit => 'e',
            Self::Print => 'p',
            Self::Retry => 't',
            Self::Quit => 'q',
        }
    }

    /// Parse a typed action; anything but exactly one known key is `None`.
    pub fn parse(input: &str) -> Option<Self> {
        let mut chars = input.trim().chars();
        let key = chars.next()?;
        if chars.next().is_some() {
            return None;
        }
        Self::ALL.into_iter().find(|a| a.key() == key)
    }
}

/// How a session ended without a fatal error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// User quit.
    Quit,
    /// Quick-explain finished.
    Explained,
    /// The command ran and exited 0.
    CommandSucceeded,
    /// The command exited non-zero or could not start.
    CommandFailed,
}

impl Outcome {
    pub fn exit_code(self) -> i32 {
        match self {
            Self::Quit | Self::Explained | Self::CommandSucceeded => 0,
            Self::CommandFailed => 1,
        }
    }
}

/// Result of handling one action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Continue,
    Finished(Outcome),
}

/// What the user asked for on the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionRequest {
    /// Natural-language request, or the text to explain in quick-explain mode.
    pub prompt: String,
    pub quick_explain: bool,
}

/// Conversation state plus the collaborators it drives.
pub struct Session<'a> {
    client: &'a dyn ModelClient,
    params: GenerationParams,
    executor: &'a dyn Executor,
    input: &'a mut dyn LineInput,
    render: &'a dyn RenderSink,
    conversation: Conversation,
    command: Option<String>,
}

impl<'a> Session<'a> {
    pub fn new(
        client: &'a dyn ModelClient,
        params: GenerationParams,
        executor: &'a dyn Executor,
        input: &'a mut dyn LineInput,
        render: &'a dyn RenderSink,
    ) -> Self {
        Self {
            client,
            params,
            executor,
            input,
            render,
            conversation: Conversation::new(),
            command: None,
        }
    }

    pub fn conversation(&self) -> &Conversation {
        &self.conversation
    }

    /// Current candidate command.
    pub fn command(&self) -> Option<&str> {
        self.command.as_deref()
    }

    /// Drive the whole session for `request`.
    pub async fn run(mut self, request: SessionRequest) -> Result<Outcome, SessionError> {
        if request.quick_explain {
            return self.quick_explain(&request.prompt).await;
        }

        let prompt = if request.prompt.trim().is_empty() {
            match self.read_prompt()? {
                Some(prompt) => prompt,
                None => return Ok(Outcome::Quit),
            }
        } else {
            request.prompt
        };

        self.start(&prompt).await?;
        self.action_loop().await
    }

    /// Explain `text` literally, without generating a command.
    pub async fn quick_explain(&mut self, text: &str) -> Result<Outcome, SessionError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(SessionError::NothingToExplain);
        }
        tracing::info!("quick explain");
        self.push(Message::user(prompt::explain_request(text)));
        self.ask().await?;
        Ok(Outcome::Explained)
    }

    /// Seed the conversation for `user_prompt` and extract the first command.
    pub async fn start(&mut self, user_prompt: &str) -> Result<(), SessionError> {
        tracing::info!("generating initial command");
        self.conversation.append(Message::system(prompt::SYSTEM_PROMPT));
        self.conversation
            .append(Message::user(prompt::generate_request(user_prompt)));
        let reply = self.ask().await?;
        self.adopt(&reply)?;
        Ok(())
    }

    /// Prompt for actions until one of them ends the session.
    pub async fn action_loop(&mut self) -> Result<Outcome, SessionError> {
        loop {
            self.render.caution(settings::CAUTION_TEXT);
            self.render.command(self.command());
            let line = match self.input.read_line(settings::PROMPT_ACTION, "")? {
                ReadOutcome::Line(line) => line,
                ReadOutcome::Eof | ReadOutcome::Cancelled => return Ok(Outcome::Quit),
            };
            let Some(action) = Action::parse(&line) else {
                continue;
            };
            if let Step::Finished(outcome) = self.step(action).await? {
                return Ok(outcome);
            }
        }
    }

    /// Handle one action.
    pub async fn step(&mut self, action: Action) -> Result<Step, SessionError> {
        tracing::debug!(?action, turns = self.conversation.len(), "dispatching action");
        match action {
            Action::Run => self.run_command().await,
            Action::Explain => self.explain().await,
            Action::Feedback => self.feedback().await,
            Action::Edit => self.edit().await,
            Action::Print => {
                self.render.transcript(&self.conversation);
                Ok(Step::Continue)
            }
            Action::Retry => self.retry().await,
            Action::Quit => Ok(Step::Finished(Outcome::Quit)),
        }
    }

    async fn run_command(&mut self) -> Result<Step, SessionError> {
        let Some(command) = self.command.clone() else {
            self.render.warn("there is no command to run yet");
            return Ok(Step::Continue);
        };
        match self.executor.execute(&command).await {
            Ok(outcome) if outcome.succeeded => Ok(Step::Finished(Outcome::CommandSucceeded)),
            Ok(outcome) => {
                self.render.error(&format!(
                    "error executing the command: `{command}` returned {outcome}"
                ));
                Ok(Step::Finished(Outcome::CommandFailed))
            }
            Err(err) => {
                self.render
                    .error(&format!("error executing the command: {err}"));
                Ok(Step::Finished(Outcome::CommandFailed))
            }
        }
    }

    async fn explain(&mut self) -> Result<Step, SessionError> {
        let Some(command) = self.command.clone() else {
            self.render.warn("there is no command to explain yet");
            return Ok(Step::Continue);
        };
        self.push(Message::user(prompt::explain_request(&command)));
        self.ask().await?;
        Ok(Step::Continue)
    }

    async fn feedback(&mut self) -> Result<Step, SessionError> {
        let text = match self.input.read_line(settings::PROMPT_FEEDBACK, "")? {
            ReadOutcome::Line(text) => text,
            ReadOutcome::Eof | ReadOutcome::Cancelled => return Ok(Step::Continue),
        };
        if text.trim().is_empty() {
            return Ok(Step::Continue);
        }
        self.push(Message::user(text));
        let reply = self.ask().await?;
        self.adopt(&reply)?;
        Ok(Step::Continue)
    }

    async fn edit(&mut self) -> Result<Step, SessionError> {
        let initial = self
            .command
            .clone()
            .or_else(|| self.conversation.last_assistant().map(|t| t.content.clone()))
            .unwrap_or_default();
        let edited = match self.input.read_line(settings::PROMPT_EDIT, &initial)? {
            ReadOutcome::Line(text) => text,
            ReadOutcome::Eof | ReadOutcome::Cancelled => return Ok(Step::Continue),
        };
        let edited = edited.trim();
        if edited == settings::QUIT_SENTINEL {
            return Ok(Step::Finished(Outcome::Quit));
        }
        if edited.is_empty() {
            return Ok(Step::Continue);
        }
        self.push(Message::user(prompt::verify_request(edited)));
        let reply = self.ask().await?;
        self.adopt(&reply)?;
        self.render.command(self.command());
        Ok(Step::Continue)
    }

    async fn retry(&mut self) -> Result<Step, SessionError> {
        if self.conversation.last().map(|t| t.role) == Some(Role::Assistant) {
            self.conversation.drop_last();
        }
        let reply = self.ask().await?;
        self.adopt(&reply)?;
        Ok(Step::Continue)
    }

    /// Read the natural-language request. `None` means the user quit.
    fn read_prompt(&mut self) -> Result<Option<String>, SessionError> {
        loop {
            match self.input.read_line(settings::PROMPT_INITIAL, "")? {
                ReadOutcome::Line(line) => {
                    let line = line.trim();
                    if line == settings::QUIT_SENTINEL {
                        return Ok(None);
                    }
                    if !line.is_empty() {
                        return Ok(Some(line.to_string()));
                    }
                }
                ReadOutcome::Eof | ReadOutcome::Cancelled => return Ok(None),
            }
        }
    }

    /// Append a turn and echo it.
    fn push(&mut self, turn: Message) {
        self.render.turn(&turn);
        self.conversation.append(turn);
    }

    /// Generate the next assistant turn from the current transcript and record it.
    async fn ask(&mut self) -> Result<Message, SessionError> {
        let reply = generate(self.client, &self.params, self.conversation.turns()).await?;
        self.push(reply.clone());
        Ok(reply)
    }

    /// Update the candidate from `reply`, asking first when it has no code markers.
    fn adopt(&mut self, reply: &Message) -> Result<(), SessionError> {
        match extract(&reply.content) {
            Extraction::FencedBlock(command) | Extraction::InlineSpan(command) => {
                self.set_command(command);
            }
            Extraction::RawReply(text) => {
                if self.confirm(settings::PROMPT_USE_RAW_REPLY)? {
                    self.set_command(text);
                } else {
                    self.render.warn("keeping the previous command");
                }
            }
            Extraction::NoCommand => {
                self.render
                    .warn("the reply contained no command; keeping the previous command");
            }
        }
        Ok(())
    }

    fn set_command(&mut self, command: String) {
        tracing::debug!(%command, "candidate command updated");
        self.command = Some(command);
    }

    fn confirm(&mut self, question: &str) -> Result<bool, SessionError> {
        let answer = match self.input.read_line(question, "")? {
            ReadOutcome::Line(answer) => answer,
            ReadOutcome::Eof | ReadOutcome::Cancelled => return Ok(false),
        };
        let answer = answer.trim().to_ascii_lowercase();
        Ok(answer == "y" || answer == "yes")
    }
}
