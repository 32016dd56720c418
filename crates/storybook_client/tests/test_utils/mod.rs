//! Mock collaborators for presentation tests.

#![allow(dead_code)]

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{
    Arc, Mutex,
    atomic::{AtomicBool, AtomicUsize, Ordering},
};
use storybook_error::{PresentationError, PresentationErrorKind, PresentationResult};
use storybook_interface::{
    AlertSink, AudioCapture, AudioClip, CaptureSession, Download, DownloadSink, PdfAssembler,
    PdfPage, RasterImage, Rasterizer, SpeechSynthesizer, StoryTransport, StoryView, Utterance,
    Voice,
};

/// Collects every alert.
#[derive(Debug, Default)]
pub struct RecordingAlerts {
    messages: Mutex<Vec<String>>,
}

impl RecordingAlerts {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }
}

impl AlertSink for RecordingAlerts {
    fn alert(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_string());
    }
}

/// Answers submissions from a queue of results.
#[derive(Debug, Default)]
pub struct MockTransport {
    replies: Mutex<VecDeque<PresentationResult<String>>>,
    submissions: Mutex<Vec<Vec<String>>>,
}

impl MockTransport {
    pub fn new(replies: Vec<PresentationResult<String>>) -> Arc<Self> {
        Arc::new(Self {
            replies: Mutex::new(replies.into()),
            submissions: Mutex::new(Vec::new()),
        })
    }

    pub fn story(text: &str) -> Arc<Self> {
        Self::new(vec![Ok(text.to_string())])
    }

    pub fn failing() -> Arc<Self> {
        Self::new(vec![Err(PresentationError::new(
            PresentationErrorKind::ClientTransportFailure("500: Story generation failed".into()),
        ))])
    }

    pub fn submissions(&self) -> Vec<Vec<String>> {
        self.submissions.lock().unwrap().clone()
    }
}

#[async_trait]
impl StoryTransport for MockTransport {
    async fn generate_story(&self, entries: &[String]) -> PresentationResult<String> {
        self.submissions.lock().unwrap().push(entries.to_vec());
        self.replies.lock().unwrap().pop_front().unwrap_or_else(|| {
            Err(PresentationError::new(
                PresentationErrorKind::ClientTransportFailure("no reply queued".into()),
            ))
        })
    }
}

/// Calls made on the synthesizer, in order.
#[derive(Debug, Clone, PartialEq)]
pub enum SpeechEvent {
    Cancel,
    Speak(Utterance),
}

/// Speech synthesizer that plays until cancelled.
#[derive(Debug, Default)]
pub struct MockSynthesizer {
    voices: Vec<Voice>,
    speaking: AtomicBool,
    events: Mutex<Vec<SpeechEvent>>,
}

impl MockSynthesizer {
    pub fn with_voices(voices: Vec<Voice>) -> Arc<Self> {
        Arc::new(Self {
            voices,
            ..Self::default()
        })
    }

    pub fn events(&self) -> Vec<SpeechEvent> {
        self.events.lock().unwrap().clone()
    }

    pub fn spoken(&self) -> Vec<Utterance> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                SpeechEvent::Speak(utterance) => Some(utterance),
                SpeechEvent::Cancel => None,
            })
            .collect()
    }

    /// Simulate the utterance reaching its end.
    pub fn finish(&self) {
        self.speaking.store(false, Ordering::SeqCst);
    }
}

impl SpeechSynthesizer for MockSynthesizer {
    fn voices(&self) -> Vec<Voice> {
        self.voices.clone()
    }

    fn speak(&self, utterance: Utterance) -> PresentationResult<()> {
        self.events.lock().unwrap().push(SpeechEvent::Speak(utterance));
        self.speaking.store(true, Ordering::SeqCst);
        Ok(())
    }

    fn cancel(&self) {
        self.events.lock().unwrap().push(SpeechEvent::Cancel);
        self.speaking.store(false, Ordering::SeqCst);
    }

    fn is_speaking(&self) -> bool {
        self.speaking.load(Ordering::SeqCst)
    }
}

/// A single microphone that can be held by one session at a time.
#[derive(Debug, Default)]
pub struct MockMicrophone {
    denied: bool,
    held: Arc<AtomicBool>,
    acquisitions: AtomicUsize,
}

impl MockMicrophone {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn denied() -> Arc<Self> {
        Arc::new(Self {
            denied: true,
            ..Self::default()
        })
    }

    pub fn is_held(&self) -> bool {
        self.held.load(Ordering::SeqCst)
    }

    pub fn acquisitions(&self) -> usize {
        self.acquisitions.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AudioCapture for MockMicrophone {
    async fn acquire(&self) -> PresentationResult<Box<dyn CaptureSession>> {
        if self.denied {
            return Err(PresentationError::new(
                PresentationErrorKind::DeviceAccessFailure("permission denied".into()),
            ));
        }
        if self.held.swap(true, Ordering::SeqCst) {
            return Err(PresentationError::new(
                PresentationErrorKind::DeviceAccessFailure("device busy".into()),
            ));
        }
        let take = self.acquisitions.fetch_add(1, Ordering::SeqCst) + 1;
        Ok(Box::new(MockSession {
            held: self.held.clone(),
            take,
        }))
    }
}

struct MockSession {
    held: Arc<AtomicBool>,
    take: usize,
}

#[async_trait]
impl CaptureSession for MockSession {
    async fn finish(self: Box<Self>) -> PresentationResult<AudioClip> {
        self.held.store(false, Ordering::SeqCst);
        Ok(AudioClip {
            mime: "audio/webm".to_string(),
            data: format!("take {}", self.take).into_bytes(),
        })
    }
}

/// Rasterizer producing a fixed-size fake PNG.
#[derive(Debug)]
pub struct MockRasterizer {
    width: u32,
    height: u32,
    fail: bool,
    views: Mutex<Vec<StoryView>>,
}

impl MockRasterizer {
    pub fn sized(width: u32, height: u32) -> Arc<Self> {
        Arc::new(Self {
            width,
            height,
            fail: false,
            views: Mutex::new(Vec::new()),
        })
    }

    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            width: 0,
            height: 0,
            fail: true,
            views: Mutex::new(Vec::new()),
        })
    }

    pub fn views(&self) -> Vec<StoryView> {
        self.views.lock().unwrap().clone()
    }
}

#[async_trait]
impl Rasterizer for MockRasterizer {
    async fn rasterize(&self, view: &StoryView) -> PresentationResult<RasterImage> {
        self.views.lock().unwrap().push(view.clone());
        if self.fail {
            return Err(PresentationError::new(PresentationErrorKind::RenderFailure(
                "canvas tainted".into(),
            )));
        }
        Ok(RasterImage {
            width: self.width,
            height: self.height,
            png: b"\x89PNG fake".to_vec(),
        })
    }
}

/// PDF assembler that records the requested page.
#[derive(Debug, Default)]
pub struct MockPdf {
    pages: Mutex<Vec<PdfPage>>,
}

impl MockPdf {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn pages(&self) -> Vec<PdfPage> {
        self.pages.lock().unwrap().clone()
    }
}

impl PdfAssembler for MockPdf {
    fn assemble(&self, image: &RasterImage, page: &PdfPage) -> PresentationResult<Vec<u8>> {
        self.pages.lock().unwrap().push(*page);
        let mut bytes = b"%PDF-1.4 ".to_vec();
        bytes.extend_from_slice(&image.png);
        Ok(bytes)
    }
}

/// Collects offered downloads.
#[derive(Debug, Default)]
pub struct MockDownloads {
    offered: Mutex<Vec<Download>>,
}

impl MockDownloads {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn offered(&self) -> Vec<Download> {
        self.offered.lock().unwrap().clone()
    }
}

impl DownloadSink for MockDownloads {
    fn offer(&self, download: Download) -> PresentationResult<()> {
        self.offered.lock().unwrap().push(download);
        Ok(())
    }
}
