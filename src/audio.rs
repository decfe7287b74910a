//! Looping background music
//!
//! Playback is best effort: every failure is logged and the game carries on.
//! Real output needs the `audio` feature; without it playback reports
//! [`AudioError::Disabled`].

use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

#[derive(Debug, Error)]
pub enum AudioError {
    #[error("audio support is not compiled in")]
    Disabled,
    #[error("music is muted")]
    Muted,
    #[error("failed to open track {path}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("audio backend: {0}")]
    Backend(String),
}

#[cfg(feature = "audio")]
mod backend {
    use super::AudioError;
    use rodio::{Decoder, OutputStream, Sink, Source};
    use std::fs::File;
    use std::io::BufReader;
    use std::path::Path;

    pub(super) struct Playback {
        // Dropping the stream silences the sink
        _stream: OutputStream,
        _sink: Sink,
    }

    pub(super) fn open(path: &Path) -> Result<Playback, AudioError> {
        let file = File::open(path).map_err(|source| AudioError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        let (stream, handle) =
            OutputStream::try_default().map_err(|e| AudioError::Backend(e.to_string()))?;
        let sink = Sink::try_new(&handle).map_err(|e| AudioError::Backend(e.to_string()))?;
        let source =
            Decoder::new(BufReader::new(file)).map_err(|e| AudioError::Backend(e.to_string()))?;
        sink.append(source.repeat_infinite());

        Ok(Playback {
            _stream: stream,
            _sink: sink,
        })
    }
}

#[cfg(not(feature = "audio"))]
mod backend {
    use super::AudioError;
    use std::path::Path;

    pub(super) struct Playback;

    pub(super) fn open(_path: &Path) -> Result<Playback, AudioError> {
        Err(AudioError::Disabled)
    }
}

/// Background track with a single re-arm on the first key press
pub struct BackgroundMusic {
    path: PathBuf,
    muted: bool,
    rearmed: bool,
    playback: Option<backend::Playback>,
}

impl BackgroundMusic {
    pub fn new(path: impl Into<PathBuf>, muted: bool) -> Self {
        Self {
            path: path.into(),
            muted,
            rearmed: false,
            playback: None,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_playing(&self) -> bool {
        self.playback.is_some()
    }

    /// Try to start the loop. A track that is already playing is left alone.
    pub fn play(&mut self) -> Result<(), AudioError> {
        if self.muted {
            return Err(AudioError::Muted);
        }
        if self.is_playing() {
            return Ok(());
        }

        self.playback = Some(backend::open(&self.path)?);
        Ok(())
    }

    /// Start playback, logging instead of failing
    pub fn start(&mut self) {
        match self.play() {
            Ok(()) => info!(track = %self.path.display(), "background music started"),
            Err(AudioError::Muted) => {}
            Err(err) => warn!(track = %self.path.display(), error = %err, "background music unavailable"),
        }
    }

    /// Retry once after the first user input if the initial start failed
    pub fn rearm(&mut self) {
        if self.rearmed || self.is_playing() {
            return;
        }

        self.rearmed = true;
        self.start();
    }
}
