use std::env;

use url::Url;

use crate::error::AudioStoreError;

/// Resolves narration filenames against the public storage bucket.
///
/// No caching, no offline fallback: playback streams straight from the
/// resolved URL.
#[derive(Clone, Debug)]
pub struct AudioStore {
    base: Url,
}

impl AudioStore {
    pub const DEFAULT_BASE: &'static str =
        "https://mnegthmftttdlazyjbke.supabase.co/storage/v1/object/public/voiceover/";

    /// Builds a store from `SWELLCAST_AUDIO_BASE`, falling back to the
    /// default public bucket.
    #[must_use]
    pub fn from_env() -> Self {
        let base = env::var("SWELLCAST_AUDIO_BASE")
            .ok()
            .and_then(|raw| Url::parse(&raw).ok())
            .unwrap_or_else(|| {
                Url::parse(Self::DEFAULT_BASE).expect("default audio base parses")
            });
        Self { base }
    }

    #[must_use]
    pub fn new(base: Url) -> Self {
        Self { base }
    }

    /// Builds a store from a base URL string (CLI flags, tests).
    ///
    /// # Errors
    ///
    /// Returns `AudioStoreError::InvalidBase` if the string is not a URL.
    pub fn from_base_str(base: &str) -> Result<Self, AudioStoreError> {
        Url::parse(base)
            .map(Self::new)
            .map_err(|_| AudioStoreError::InvalidBase { raw: base.into() })
    }

    /// Resolves a filename to a fully-qualified streaming URL.
    ///
    /// # Errors
    ///
    /// Returns `AudioStoreError::EmptyFilename` for blank input and
    /// `AudioStoreError::Unresolvable` if the join fails.
    pub fn resolve(&self, file: &str) -> Result<Url, AudioStoreError> {
        let file = file.trim();
        if file.is_empty() {
            return Err(AudioStoreError::EmptyFilename);
        }
        self.base
            .join(file)
            .map_err(|_| AudioStoreError::Unresolvable { raw: file.into() })
    }
}
