use crate::audio::AudioType;
use crate::tracklist::format::OutputFormat;
use crate::tracklist::timestamp;
use serde::Deserialize;
use std::path::PathBuf;

/// A single track of the mixtape, as parsed from the source document.
///
/// Immutable once loaded; the CUE pass derives its track numbers from the
/// sorted position instead of writing them back into the record.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TrackRecord {
    pub title: String,

    #[serde(default)]
    pub artist: Option<String>,

    #[serde(default)]
    pub label: Option<String>,
}

impl TrackRecord {
    /// The label, if present and non-empty.
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref().filter(|label| !label.is_empty())
    }
}

/// Pairing of a raw timestamp string with its track record.
///
/// The raw string is kept verbatim for display; the numeric and frame forms
/// are derived on demand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TracklistEntry {
    pub timestamp: String,
    pub record: TrackRecord,
}

impl TracklistEntry {
    pub fn seconds(&self) -> u32 {
        timestamp::to_seconds(&self.timestamp)
    }

    pub fn frames(&self) -> String {
        timestamp::to_frames(&self.timestamp)
    }
}

/// Per-run mix metadata required by the CUE header.
#[derive(Debug, Clone)]
pub struct CueMetadata {
    pub performer: String,
    pub title: String,
    pub audio_file: PathBuf,
    pub audio_type: AudioType,
}

/// Resolved configuration for one conversion run, threaded into the
/// orchestrator and formatter instead of being consulted globally.
#[derive(Debug, Clone)]
pub struct RunConfiguration {
    pub input: PathBuf,
    pub output_dir: PathBuf,
    pub no_labels: bool,
    pub formats: Vec<OutputFormat>,
    pub cue: Option<CueMetadata>,
}
