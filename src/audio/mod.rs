use clap::ValueEnum;
use log::warn;
use std::fmt;
use std::path::Path;

/// Audio file types a CUE sheet's FILE line can reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AudioType {
    Mp3,
    Wave,
    Aiff,
}

impl fmt::Display for AudioType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AudioType::Mp3 => "MP3",
            AudioType::Wave => "WAVE",
            AudioType::Aiff => "AIFF",
        };
        f.write_str(name)
    }
}

/// Infers the audio type of a mix file from its path.
///
/// MIME sniffing first, raw extension matching second, MP3 as the default
/// when neither recognizes the path. Detection never fails; the file's
/// existence only decides whether a warning is logged.
pub fn detect_audio_type(path: &Path) -> AudioType {
    if !path.is_file() {
        warn!("Audio file not found: {path:?}");
    }

    if let Some(mime) = mime_guess::from_path(path).first() {
        match mime.subtype().as_str() {
            "mpeg" | "mp3" => return AudioType::Mp3,
            "wav" | "x-wav" | "wave" => return AudioType::Wave,
            "aiff" | "x-aiff" => return AudioType::Aiff,
            _ => {}
        }
    }

    let extension = path
        .extension()
        .and_then(|s| s.to_str())
        .map(|s| s.to_ascii_lowercase());

    match extension.as_deref() {
        Some("mp3" | "mp2") => AudioType::Mp3,
        Some("wav" | "wave") => AudioType::Wave,
        Some("aiff" | "aif") => AudioType::Aiff,
        _ => {
            warn!("Could not infer the audio type of {path:?}, defaulting to MP3");
            AudioType::Mp3
        }
    }
}
