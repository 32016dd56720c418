//! Host-provided media, export and notification facilities.
//!
//! In a browser these are speech synthesis, `getUserMedia` recording,
//! DOM rasterization and PDF assembly. The presentation controller only
//! ever talks to them through these traits.

use crate::{AudioClip, Download, PdfPage, RasterImage, StoryView, Utterance, Voice};
use async_trait::async_trait;
use storybook_error::PresentationResult;

/// Text-to-speech playback.
pub trait SpeechSynthesizer: Send + Sync {
    /// Voices installed on the host.
    fn voices(&self) -> Vec<Voice>;

    /// Queue an utterance for playback.
    fn speak(&self, utterance: Utterance) -> PresentationResult<()>;

    /// Stop and discard every queued or playing utterance.
    fn cancel(&self);

    /// Whether an utterance is currently playing.
    fn is_speaking(&self) -> bool;
}

/// Microphone access.
#[async_trait]
pub trait AudioCapture: Send + Sync {
    /// Acquire the microphone and start capturing.
    ///
    /// # Errors
    ///
    /// `DeviceAccessFailure` when permission is denied or no device exists.
    async fn acquire(&self) -> PresentationResult<Box<dyn CaptureSession>>;
}

/// An in-progress capture holding the microphone.
#[async_trait]
pub trait CaptureSession: Send + Sync {
    /// Stop capturing, release the device and return the finished clip.
    async fn finish(self: Box<Self>) -> PresentationResult<AudioClip>;
}

/// Converts the rendered story into a raster image.
#[async_trait]
pub trait Rasterizer: Send + Sync {
    /// Rasterize the story presentation.
    async fn rasterize(&self, view: &StoryView) -> PresentationResult<RasterImage>;
}

/// Builds a one-page PDF around a raster image.
pub trait PdfAssembler: Send + Sync {
    /// Place `image` on a single page with the given geometry.
    fn assemble(&self, image: &RasterImage, page: &PdfPage) -> PresentationResult<Vec<u8>>;
}

/// Offers a file to the person for download.
pub trait DownloadSink: Send + Sync {
    /// Hand the file to the host.
    fn offer(&self, download: Download) -> PresentationResult<()>;
}

/// User-facing alerts.
pub trait AlertSink: Send + Sync {
    /// Show a message to the person using the form.
    fn alert(&self, message: &str);
}
