//! Story narration through the host's speech synthesizer.

use std::sync::Arc;
use storybook_error::{PresentationError, PresentationErrorKind, PresentationResult};
use storybook_interface::{SpeechSynthesizer, Utterance, Voice};
use tracing::{debug, instrument};

/// Voices tried first, in order, when present on the host.
pub const DEFAULT_PREFERRED_VOICES: &[&str] = &["Samantha", "Google US English", "Karen"];

/// Narration settings.
///
/// # Examples
///
/// ```
/// use storybook_client::NarrationConfig;
///
/// let config = NarrationConfig::builder()
///     .preferred_voices(vec!["Daniel".to_string()])
///     .rate(0.9)
///     .build()
///     .unwrap();
///
/// assert_eq!(config.preferred_voices(), &vec!["Daniel".to_string()]);
/// assert_eq!(*config.pitch(), 1.0);
/// ```
#[derive(Debug, Clone, PartialEq, derive_getters::Getters, derive_builder::Builder)]
#[builder(setter(into))]
pub struct NarrationConfig {
    /// Voice names tried in order before falling back
    #[builder(default = "default_preferred_voices()")]
    preferred_voices: Vec<String>,
    /// Playback rate
    #[builder(default = "1.0")]
    rate: f32,
    /// Playback pitch
    #[builder(default = "1.0")]
    pitch: f32,
}

fn default_preferred_voices() -> Vec<String> {
    DEFAULT_PREFERRED_VOICES
        .iter()
        .map(|name| name.to_string())
        .collect()
}

impl Default for NarrationConfig {
    fn default() -> Self {
        Self {
            preferred_voices: default_preferred_voices(),
            rate: 1.0,
            pitch: 1.0,
        }
    }
}

impl NarrationConfig {
    /// Creates a new config builder.
    pub fn builder() -> NarrationConfigBuilder {
        NarrationConfigBuilder::default()
    }
}

/// Pick the narration voice.
///
/// The first preferred name that the host offers wins. Otherwise the first
/// English voice, otherwise `None` and the host decides.
///
/// # Examples
///
/// ```
/// use storybook_client::select_voice;
/// use storybook_interface::Voice;
///
/// let voices = vec![Voice::new("Thomas", "fr-FR"), Voice::new("Alex", "en-US")];
///
/// let preferred = vec!["Thomas".to_string()];
/// assert_eq!(select_voice(&voices, &preferred).unwrap().name, "Thomas");
/// assert_eq!(select_voice(&voices, &[]).unwrap().name, "Alex");
/// assert!(select_voice(&voices[..1], &[]).is_none());
/// ```
pub fn select_voice(voices: &[Voice], preferred: &[String]) -> Option<Voice> {
    preferred
        .iter()
        .find_map(|name| voices.iter().find(|voice| &voice.name == name))
        .or_else(|| {
            voices
                .iter()
                .find(|voice| voice.lang.to_ascii_lowercase().starts_with("en"))
        })
        .cloned()
}

/// Reads the story aloud, one utterance at a time.
pub struct Narrator {
    synthesizer: Arc<dyn SpeechSynthesizer>,
    config: NarrationConfig,
}

impl Narrator {
    /// Create a narrator over the host's synthesizer.
    pub fn new(synthesizer: Arc<dyn SpeechSynthesizer>, config: NarrationConfig) -> Self {
        Self {
            synthesizer,
            config,
        }
    }

    /// Narration settings.
    pub fn config(&self) -> &NarrationConfig {
        &self.config
    }

    /// Start reading `story`, cancelling anything already playing.
    ///
    /// # Errors
    ///
    /// Whatever the synthesizer reports when it refuses the utterance.
    #[instrument(skip(self, story), fields(story_len = story.len()))]
    pub fn start(&self, story: &str) -> PresentationResult<()> {
        self.synthesizer.cancel();

        let voice = select_voice(&self.synthesizer.voices(), &self.config.preferred_voices);
        debug!(voice = ?voice.as_ref().map(|v| v.name.as_str()), "Starting narration");

        let utterance = Utterance::builder()
            .text(story)
            .voice(voice)
            .rate(self.config.rate)
            .pitch(self.config.pitch)
            .build()
            .map_err(|e| {
                PresentationError::new(PresentationErrorKind::Unavailable(format!(
                    "Narration: {}",
                    e
                )))
            })?;

        self.synthesizer.speak(utterance)
    }

    /// Stop narration.
    pub fn stop(&self) {
        debug!("Stopping narration");
        self.synthesizer.cancel();
    }

    /// Whether narration is playing.
    pub fn is_playing(&self) -> bool {
        self.synthesizer.is_speaking()
    }
}

impl std::fmt::Debug for Narrator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Narrator")
            .field("config", &self.config)
            .field("playing", &self.is_playing())
            .finish()
    }
}
