//! Value types exchanged with collaborators.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize};

/// A speech-synthesis voice offered by the host.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Voice {
    /// Display name, e.g. "Samantha"
    pub name: String,
    /// BCP 47 language tag, e.g. "en-US"
    pub lang: String,
    /// Whether the host marks this as its default voice
    pub is_default: bool,
}

impl Voice {
    /// Create a voice description.
    pub fn new(name: impl Into<String>, lang: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            lang: lang.into(),
            is_default: false,
        }
    }
}

/// A single narration request.
///
/// # Examples
///
/// ```
/// use storybook_interface::Utterance;
///
/// let utterance = Utterance::builder()
///     .text("Once upon a time")
///     .build()
///     .unwrap();
///
/// assert!(utterance.voice().is_none());
/// assert_eq!(*utterance.rate(), 1.0);
/// ```
#[derive(Debug, Clone, PartialEq, derive_getters::Getters, derive_builder::Builder)]
#[builder(setter(into))]
pub struct Utterance {
    /// Text to speak
    text: String,
    /// Voice to use; `None` lets the host choose
    #[builder(default)]
    voice: Option<Voice>,
    /// Playback rate, 1.0 is normal speed
    #[builder(default = "1.0")]
    rate: f32,
    /// Pitch, 1.0 is the voice's natural pitch
    #[builder(default = "1.0")]
    pitch: f32,
}

impl Utterance {
    /// Creates a new utterance builder.
    pub fn builder() -> UtteranceBuilder {
        UtteranceBuilder::default()
    }
}

/// A finished microphone recording.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AudioClip {
    /// MIME type of the encoded audio, e.g. "audio/webm"
    pub mime: String,
    /// Encoded audio bytes
    pub data: Vec<u8>,
}

impl AudioClip {
    /// Whether the clip holds any audio.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// `data:` URL suitable for an audio element's `src`.
    pub fn to_data_url(&self) -> String {
        data_url(&self.mime, &self.data)
    }
}

/// Content handed to the rasterizer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StoryView {
    /// Heading shown above the story
    pub title: String,
    /// The generated story paragraph
    pub story: String,
}

/// A PNG-encoded raster of the story presentation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RasterImage {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
    /// PNG bytes
    pub png: Vec<u8>,
}

impl RasterImage {
    /// `data:image/png` URL of the image.
    ///
    /// # Examples
    ///
    /// ```
    /// use storybook_interface::RasterImage;
    ///
    /// let image = RasterImage { width: 1, height: 1, png: b"png".to_vec() };
    /// assert_eq!(image.to_data_url(), "data:image/png;base64,cG5n");
    /// ```
    pub fn to_data_url(&self) -> String {
        data_url("image/png", &self.png)
    }
}

fn data_url(mime: &str, bytes: &[u8]) -> String {
    format!("data:{};base64,{}", mime, STANDARD.encode(bytes))
}

/// Page orientation of an exported PDF.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageOrientation {
    /// Taller than wide (or square)
    Portrait,
    /// Wider than tall
    Landscape,
}

/// Geometry of the single PDF page, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PdfPage {
    /// Page width in pixels
    pub width: u32,
    /// Page height in pixels
    pub height: u32,
    /// Orientation derived from the dimensions
    pub orientation: PageOrientation,
}

impl PdfPage {
    /// A page exactly the size of `image`.
    ///
    /// # Examples
    ///
    /// ```
    /// use storybook_interface::{PageOrientation, PdfPage, RasterImage};
    ///
    /// let image = RasterImage { width: 1200, height: 800, png: Vec::new() };
    /// let page = PdfPage::for_image(&image);
    /// assert_eq!((page.width, page.height), (1200, 800));
    /// assert_eq!(page.orientation, PageOrientation::Landscape);
    /// ```
    pub fn for_image(image: &RasterImage) -> Self {
        let orientation = if image.width > image.height {
            PageOrientation::Landscape
        } else {
            PageOrientation::Portrait
        };
        Self {
            width: image.width,
            height: image.height,
            orientation,
        }
    }
}

/// A file offered for download.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Download {
    /// Suggested file name
    pub filename: String,
    /// MIME type of the content
    pub mime: String,
    /// File content
    pub bytes: Vec<u8>,
}

/// Health status of a provider.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum HealthStatus {
    /// Fully operational
    Healthy,
    /// Operational with reduced performance
    Degraded {
        /// Description of the degradation
        message: String,
    },
    /// Not operational
    Unhealthy {
        /// Description of the problem
        message: String,
    },
}
