//! Trait definitions for the Storybook service.
//!
//! This crate provides the seams between the story flow and its external
//! collaborators: the text-generation provider, the story endpoint as seen
//! from the client, and the host's speech, microphone, rasterization, PDF,
//! download and alert facilities.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod media;
mod traits;
mod types;

pub use media::{
    AlertSink, AudioCapture, CaptureSession, DownloadSink, PdfAssembler, Rasterizer,
    SpeechSynthesizer,
};
pub use traits::{Health, StoryDriver, StoryTransport};
pub use types::{
    AudioClip, Download, HealthStatus, PageOrientation, PdfPage, RasterImage, StoryView,
    Utterance, UtteranceBuilder, Voice,
};
