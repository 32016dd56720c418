//! Voice recording alongside the story.

use std::sync::Arc;
use storybook_error::PresentationResult;
use storybook_interface::{AudioCapture, AudioClip, CaptureSession};
use tracing::{debug, instrument};

/// Holds the microphone while recording and keeps the last finished clip.
pub struct Recorder {
    capture: Arc<dyn AudioCapture>,
    session: Option<Box<dyn CaptureSession>>,
    clip: Option<AudioClip>,
}

impl Recorder {
    /// Create a recorder over the host's microphone.
    pub fn new(capture: Arc<dyn AudioCapture>) -> Self {
        Self {
            capture,
            session: None,
            clip: None,
        }
    }

    /// Whether the microphone is held.
    pub fn is_recording(&self) -> bool {
        self.session.is_some()
    }

    /// The last finished recording, playable any number of times.
    pub fn clip(&self) -> Option<&AudioClip> {
        self.clip.as_ref()
    }

    /// Acquire the microphone and start recording.
    ///
    /// Does nothing if already recording.
    ///
    /// # Errors
    ///
    /// `DeviceAccessFailure` when the microphone cannot be acquired. The
    /// recorder stays inactive.
    #[instrument(skip(self))]
    pub async fn start(&mut self) -> PresentationResult<()> {
        if self.session.is_some() {
            return Ok(());
        }
        let session = self.capture.acquire().await?;
        debug!("Recording started");
        self.session = Some(session);
        Ok(())
    }

    /// Finish recording and release the microphone.
    ///
    /// Returns `None` if nothing was recording.
    ///
    /// # Errors
    ///
    /// Whatever the capture session reports while finalizing. The device is
    /// considered released either way.
    #[instrument(skip(self))]
    pub async fn stop(&mut self) -> PresentationResult<Option<&AudioClip>> {
        let Some(session) = self.session.take() else {
            return Ok(None);
        };
        let clip = session.finish().await?;
        debug!(bytes = clip.data.len(), mime = %clip.mime, "Recording finished");
        self.clip = Some(clip);
        Ok(self.clip.as_ref())
    }
}

impl std::fmt::Debug for Recorder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Recorder")
            .field("recording", &self.is_recording())
            .field("clip", &self.clip.as_ref().map(|clip| clip.data.len()))
            .finish()
    }
}
