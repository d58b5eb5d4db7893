use crate::tracklist::models::{CueMetadata, TracklistEntry, TrackRecord};
use clap::ValueEnum;
use std::fmt::Write;

/// The output renderings a run can produce.
///
/// Each variant is rendered by a pure function of the sorted tracklist and
/// the run configuration, so formats stay independently testable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Main,
    Telegram,
    Lyrics,
    Cue,
}

impl OutputFormat {
    /// Value used in the output file name.
    pub fn value(&self) -> &'static str {
        match self {
            OutputFormat::Main => "Main",
            OutputFormat::Telegram => "Telegram",
            OutputFormat::Lyrics => "Lyrics",
            OutputFormat::Cue => "CUE",
        }
    }

    pub fn output_file_name(&self) -> String {
        format!("Tracklist.{}.txt", self.value())
    }

    /// Header written before any track lines, if the format defines one.
    ///
    /// The CUE header substitutes the per-run mix metadata; the orchestrator
    /// guarantees it is present before a CUE pass starts.
    pub fn header(&self, cue: Option<&CueMetadata>) -> Option<String> {
        match self {
            OutputFormat::Main | OutputFormat::Lyrics => None,
            OutputFormat::Telegram => Some("**TRACKLIST**".to_string()),
            OutputFormat::Cue => cue.map(render_cue_header),
        }
    }
}

/// Renders the "{artist} - {title} ({label})" core shared by the text formats.
///
/// The artist prefix and label suffix are only written when present; an empty
/// label counts as absent.
pub fn render_track(record: &TrackRecord, no_labels: bool) -> String {
    let mut text = String::new();

    if let Some(artist) = &record.artist {
        text.push_str(artist);
        text.push_str(" - ");
    }

    text.push_str(&record.title);

    if !no_labels {
        if let Some(label) = record.label() {
            let _ = write!(text, " ({label})");
        }
    }

    text
}

/// Renders the output line (or CUE block) for one entry.
///
/// `track_num` is the entry's 1-based position in the sorted tracklist; only
/// the CUE variant uses it.
pub fn render_line(
    format: OutputFormat,
    entry: &TracklistEntry,
    track_num: usize,
    no_labels: bool,
) -> String {
    match format {
        OutputFormat::Main => format!(
            "[{}] {}",
            entry.timestamp,
            render_track(&entry.record, no_labels)
        ),
        OutputFormat::Telegram => format!(
            "{} {}",
            entry.timestamp,
            render_track(&entry.record, no_labels)
        ),
        OutputFormat::Lyrics => format!(
            "[{}.00]{}",
            entry.timestamp,
            render_track(&entry.record, no_labels)
        ),
        OutputFormat::Cue => render_cue_block(entry, track_num),
    }
}

// CUE requires a PERFORMER line per track, so an absent artist renders as an
// empty quoted string instead of being omitted.
fn render_cue_block(entry: &TracklistEntry, track_num: usize) -> String {
    let artist = entry.record.artist.as_deref().unwrap_or("");

    format!(
        "  TRACK {track_num:02} AUDIO\n    TITLE \"{}\"\n    PERFORMER \"{artist}\"\n    INDEX 01 {}",
        entry.record.title,
        entry.frames(),
    )
}

fn render_cue_header(cue: &CueMetadata) -> String {
    format!(
        "PERFORMER \"{}\"\nTITLE \"{}\"\nFILE \"{}\" {}",
        cue.performer,
        cue.title,
        cue.audio_file.display(),
        cue.audio_type,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::AudioType;
    use std::path::PathBuf;

    fn record(title: &str, artist: Option<&str>, label: Option<&str>) -> TrackRecord {
        TrackRecord {
            title: title.to_string(),
            artist: artist.map(str::to_string),
            label: label.map(str::to_string),
        }
    }

    fn entry(timestamp: &str, record: TrackRecord) -> TracklistEntry {
        TracklistEntry {
            timestamp: timestamp.to_string(),
            record,
        }
    }

    #[test]
    fn render_track_title_only() {
        assert_eq!(render_track(&record("Song", None, None), false), "Song");
    }

    #[test]
    fn render_track_prefixes_artist() {
        assert_eq!(
            render_track(&record("Song", Some("Artist"), None), false),
            "Artist - Song"
        );
    }

    #[test]
    fn render_track_suffixes_label() {
        assert_eq!(
            render_track(&record("Song", Some("Artist"), Some("Label")), false),
            "Artist - Song (Label)"
        );
    }

    #[test]
    fn render_track_omits_label_when_disabled() {
        assert_eq!(
            render_track(&record("Song", Some("Artist"), Some("Label")), true),
            "Artist - Song"
        );
    }

    #[test]
    fn render_track_treats_empty_label_as_absent() {
        assert_eq!(
            render_track(&record("Song", None, Some("")), false),
            "Song"
        );
    }

    #[test]
    fn main_line_brackets_the_timestamp() {
        let entry = entry("12:34", record("Song", Some("Artist"), None));
        assert_eq!(
            render_line(OutputFormat::Main, &entry, 1, false),
            "[12:34] Artist - Song"
        );
    }

    #[test]
    fn telegram_line_has_no_brackets() {
        let entry = entry("12:34", record("Song", Some("Artist"), None));
        assert_eq!(
            render_line(OutputFormat::Telegram, &entry, 1, false),
            "12:34 Artist - Song"
        );
    }

    #[test]
    fn lyrics_line_has_no_space_after_the_bracket() {
        let entry = entry("02:15", record("Track", None, None));
        assert_eq!(
            render_line(OutputFormat::Lyrics, &entry, 1, false),
            "[02:15.00]Track"
        );
    }

    #[test]
    fn cue_block_is_rendered_exactly() {
        let entry = entry("01:30", record("T", Some("A"), None));
        assert_eq!(
            render_line(OutputFormat::Cue, &entry, 3, false),
            "  TRACK 03 AUDIO\n    TITLE \"T\"\n    PERFORMER \"A\"\n    INDEX 01 01:30:00"
        );
    }

    #[test]
    fn cue_block_keeps_performer_line_for_missing_artist() {
        let entry = entry("00:00", record("T", None, None));
        assert_eq!(
            render_line(OutputFormat::Cue, &entry, 1, false),
            "  TRACK 01 AUDIO\n    TITLE \"T\"\n    PERFORMER \"\"\n    INDEX 01 00:00:00"
        );
    }

    #[test]
    fn telegram_header_is_the_tracklist_banner() {
        assert_eq!(
            OutputFormat::Telegram.header(None),
            Some("**TRACKLIST**".to_string())
        );
        assert_eq!(OutputFormat::Main.header(None), None);
        assert_eq!(OutputFormat::Lyrics.header(None), None);
    }

    #[test]
    fn cue_header_is_rendered_byte_for_byte() {
        let cue = CueMetadata {
            performer: "DJ".to_string(),
            title: "Mix".to_string(),
            audio_file: PathBuf::from("mix.wav"),
            audio_type: AudioType::Wave,
        };
        assert_eq!(
            OutputFormat::Cue.header(Some(&cue)),
            Some("PERFORMER \"DJ\"\nTITLE \"Mix\"\nFILE \"mix.wav\" WAVE".to_string())
        );
    }

    #[test]
    fn output_file_names_use_the_format_value() {
        assert_eq!(OutputFormat::Main.output_file_name(), "Tracklist.Main.txt");
        assert_eq!(
            OutputFormat::Telegram.output_file_name(),
            "Tracklist.Telegram.txt"
        );
        assert_eq!(
            OutputFormat::Lyrics.output_file_name(),
            "Tracklist.Lyrics.txt"
        );
        assert_eq!(OutputFormat::Cue.output_file_name(), "Tracklist.CUE.txt");
    }
}
