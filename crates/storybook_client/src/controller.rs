//! The presentation state machine.

use crate::{ExportFormat, Exporter, JournalForm, Narrator, Recorder, UiState};
use std::sync::Arc;
use std::time::Duration;
use storybook_core::EntryList;
use storybook_error::{PresentationError, PresentationErrorKind, PresentationResult};
use storybook_interface::{AlertSink, AudioClip, Download, StoryTransport, StoryView};
use tokio::time::Instant;
use tracing::{debug, info, instrument, warn};

/// How long the celebration runs after a story arrives.
pub const CELEBRATION_DURATION: Duration = Duration::from_secs(5);

/// Heading rendered above the story and used for exports.
pub const STORY_TITLE: &str = "Generated Story";

/// What became of a submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Another submission was already in flight
    Ignored,
    /// The story arrived
    Story(String),
    /// The submission failed; holds the alert text
    Failed(String),
}

/// Drives the journal page from form input to a presented story.
///
/// The primary [`UiState`] only changes through submissions. Narration,
/// recording and export act on the current story and report failures
/// through the alert sink without touching it. A failed resubmission moves
/// to `Error` but the previous story stays readable via
/// [`last_story`](Self::last_story).
pub struct PresentationController {
    transport: Arc<dyn StoryTransport>,
    alerts: Arc<dyn AlertSink>,
    form: JournalForm,
    narrator: Option<Narrator>,
    recorder: Option<Recorder>,
    exporter: Option<Exporter>,
    state: UiState,
    last_story: Option<String>,
    celebration_until: Option<Instant>,
}

impl PresentationController {
    /// Create a controller with an empty one-week form.
    pub fn new(transport: Arc<dyn StoryTransport>, alerts: Arc<dyn AlertSink>) -> Self {
        Self {
            transport,
            alerts,
            form: JournalForm::new(),
            narrator: None,
            recorder: None,
            exporter: None,
            state: UiState::Idle,
            last_story: None,
            celebration_until: None,
        }
    }

    /// Enable narration.
    pub fn with_narrator(mut self, narrator: Narrator) -> Self {
        self.narrator = Some(narrator);
        self
    }

    /// Enable voice recording.
    pub fn with_recorder(mut self, recorder: Recorder) -> Self {
        self.recorder = Some(recorder);
        self
    }

    /// Enable export.
    pub fn with_exporter(mut self, exporter: Exporter) -> Self {
        self.exporter = Some(exporter);
        self
    }

    /// Current primary state.
    pub fn state(&self) -> &UiState {
        &self.state
    }

    /// The most recent story received, kept across failed resubmissions.
    pub fn last_story(&self) -> Option<&str> {
        self.last_story.as_deref()
    }

    /// The journal form.
    pub fn form(&self) -> &JournalForm {
        &self.form
    }

    /// The journal form, for editing.
    pub fn form_mut(&mut self) -> &mut JournalForm {
        &mut self.form
    }

    /// Whether the submit control is enabled.
    pub fn can_submit(&self) -> bool {
        self.state.can_submit()
    }

    /// Whether the post-story celebration is still running.
    pub fn is_celebrating(&self) -> bool {
        self.celebration_until
            .is_some_and(|until| Instant::now() < until)
    }

    /// Whether narration is playing.
    pub fn is_narrating(&self) -> bool {
        self.narrator.as_ref().is_some_and(Narrator::is_playing)
    }

    /// Whether the microphone is held.
    pub fn is_recording(&self) -> bool {
        self.recorder.as_ref().is_some_and(Recorder::is_recording)
    }

    /// The last finished voice recording.
    pub fn recording(&self) -> Option<&AudioClip> {
        self.recorder.as_ref().and_then(Recorder::clip)
    }

    /// Enter `Submitting` and return the entries to send.
    ///
    /// Returns `None` while a submission is already in flight. Any playing
    /// narration is stopped.
    pub fn begin_submission(&mut self) -> Option<EntryList> {
        if self.state.is_submitting() {
            debug!("Submission already in flight, ignoring");
            return None;
        }
        if let Some(narrator) = &self.narrator {
            narrator.stop();
        }
        self.celebration_until = None;
        self.state = UiState::Submitting;
        Some(self.form.entries())
    }

    /// Leave `Submitting` with the transport's answer.
    ///
    /// A failure raises an alert. The form keeps its contents either way.
    pub fn complete_submission(&mut self, result: PresentationResult<String>) -> SubmitOutcome {
        if !self.state.is_submitting() {
            debug!("No submission in flight, dropping result");
            return SubmitOutcome::Ignored;
        }

        match result {
            Ok(story) => {
                info!(story_len = story.len(), "Story ready");
                self.state = UiState::Result(story.clone());
                self.last_story = Some(story.clone());
                self.celebration_until = Some(Instant::now() + CELEBRATION_DURATION);
                SubmitOutcome::Story(story)
            }
            Err(e) => {
                warn!(error = %e, "Story submission failed");
                let message = e.kind().alert_message();
                self.alerts.alert(message);
                self.state = UiState::Error(message.to_string());
                SubmitOutcome::Failed(message.to_string())
            }
        }
    }

    /// Submit the form and wait for the story.
    #[instrument(skip(self))]
    pub async fn submit(&mut self) -> SubmitOutcome {
        let Some(entries) = self.begin_submission() else {
            return SubmitOutcome::Ignored;
        };
        let result = self.transport.generate_story(&entries).await;
        self.complete_submission(result)
    }

    /// Start or stop narration of the story.
    ///
    /// Returns whether narration is now playing.
    ///
    /// # Errors
    ///
    /// `NoStory` outside the `Result` state, `Unavailable` without a
    /// narrator, or the synthesizer's own failure. Each raises an alert.
    pub fn toggle_narration(&mut self) -> PresentationResult<bool> {
        let result = self.toggle_narration_inner();
        self.report(result)
    }

    fn toggle_narration_inner(&self) -> PresentationResult<bool> {
        let story = self.require_story()?;
        let narrator = self.narrator.as_ref().ok_or_else(|| unavailable("Narration"))?;
        if narrator.is_playing() {
            narrator.stop();
            Ok(false)
        } else {
            narrator.start(story)?;
            Ok(true)
        }
    }

    /// Start or stop a voice recording.
    ///
    /// Returns whether the microphone is now held. A running recording can
    /// be stopped in any state; only starting one needs a story.
    ///
    /// # Errors
    ///
    /// `NoStory` when starting outside the `Result` state, `Unavailable`
    /// without a recorder, or `DeviceAccessFailure`. Each raises an alert.
    pub async fn toggle_recording(&mut self) -> PresentationResult<bool> {
        let result = self.toggle_recording_inner().await;
        self.report(result)
    }

    async fn toggle_recording_inner(&mut self) -> PresentationResult<bool> {
        if let Some(recorder) = self.recorder.as_mut().filter(|r| r.is_recording()) {
            recorder.stop().await?;
            return Ok(false);
        }
        self.require_story()?;
        let recorder = self.recorder.as_mut().ok_or_else(|| unavailable("Recording"))?;
        recorder.start().await?;
        Ok(true)
    }

    /// Export the story and offer the file.
    ///
    /// # Errors
    ///
    /// `NoStory` outside the `Result` state, `Unavailable` without an
    /// exporter, or `RenderFailure`. Each raises an alert.
    pub async fn export(&self, format: ExportFormat) -> PresentationResult<Download> {
        let result = self.export_inner(format).await;
        self.report(result)
    }

    async fn export_inner(&self, format: ExportFormat) -> PresentationResult<Download> {
        let story = self.require_story()?;
        let exporter = self.exporter.as_ref().ok_or_else(|| unavailable("Export"))?;
        let view = StoryView {
            title: STORY_TITLE.to_string(),
            story: story.to_string(),
        };
        exporter.export(&view, format).await
    }

    fn require_story(&self) -> PresentationResult<&str> {
        self.state
            .story()
            .ok_or_else(|| PresentationError::new(PresentationErrorKind::NoStory))
    }

    fn report<T>(&self, result: PresentationResult<T>) -> PresentationResult<T> {
        if let Err(e) = &result {
            warn!(error = %e, "Presentation action failed");
            self.alerts.alert(e.kind().alert_message());
        }
        result
    }
}

fn unavailable(feature: &str) -> PresentationError {
    PresentationError::new(PresentationErrorKind::Unavailable(feature.to_string()))
}

impl std::fmt::Debug for PresentationController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PresentationController")
            .field("state", &self.state)
            .field("last_story", &self.last_story)
            .field("form", &self.form)
            .field("narrator", &self.narrator)
            .field("recorder", &self.recorder)
            .field("exporter", &self.exporter)
            .field("celebration_until", &self.celebration_until)
            .finish()
    }
}
