use crate::audio::AudioType;
use crate::tracklist::format::OutputFormat;
use clap::Parser;
use std::path::PathBuf;

/// Converts a tracklist document into the selected output formats
#[derive(Parser, Debug, Clone)]
#[command(
    long_about = "Converts a tracklist document into the selected output formats\n\nNote: YAML input (.yaml/.yml) is a mapping of \"timestamp\" keys to title/artist/label mappings, any other extension is read as a CSV table with timestamp,title,artist,label columns"
)]
pub struct ConvertCommand {
    /// Path of the input file to convert from
    #[arg(value_name = "FILE", long, short = 'f', default_value = "./Tracklist.yaml")]
    pub file: PathBuf,

    /// Path of the output directory in which tracklists will be written
    #[arg(value_name = "OUTPUT_DIR", long, short = 'o', default_value = ".")]
    pub output_dir: PathBuf,

    /// Do not write label info
    #[arg(value_name = "NO_LABELS", long, short = 'L', default_value_t = false)]
    pub no_labels: bool,

    /// Formats to render, repeatable; defaults to main and telegram when no
    /// format is selected
    #[arg(value_name = "FORMAT", long, short = 'F')]
    pub format: Vec<OutputFormat>,

    /// Shorthand for --format main
    #[arg(long, default_value_t = false)]
    pub main: bool,

    /// Shorthand for --format telegram
    #[arg(long, default_value_t = false)]
    pub telegram: bool,

    /// Shorthand for --format lyrics
    #[arg(long, default_value_t = false)]
    pub lyrics: bool,

    /// Shorthand for --format cue
    #[arg(long, default_value_t = false)]
    pub cue: bool,

    /// Mix audio file referenced by the CUE sheet, required when cue is selected
    #[arg(value_name = "AUDIO_FILE", long, short = 'a')]
    pub audio_file: Option<PathBuf>,

    /// Audio type written to the CUE FILE line, inferred from the audio file
    /// path when not given
    #[arg(value_name = "AUDIO_TYPE", long)]
    pub audio_type: Option<AudioType>,

    /// Mix title written to the CUE header
    #[arg(value_name = "TITLE", long, default_value = "")]
    pub cue_title: String,

    /// Mix performer written to the CUE header
    #[arg(value_name = "PERFORMER", long, default_value = "")]
    pub cue_performer: String,
}

impl ConvertCommand {
    /// The format set for this run: `--format` selections and shorthand flags
    /// de-duplicated in selection order, or the default pair when nothing was
    /// asked for.
    pub fn selected_formats(&self) -> Vec<OutputFormat> {
        let shorthands = [
            (self.main, OutputFormat::Main),
            (self.telegram, OutputFormat::Telegram),
            (self.lyrics, OutputFormat::Lyrics),
            (self.cue, OutputFormat::Cue),
        ];

        let selected = self.format.iter().copied().chain(
            shorthands
                .into_iter()
                .filter(|(flag, _)| *flag)
                .map(|(_, format)| format),
        );

        let mut formats: Vec<OutputFormat> = Vec::new();
        for format in selected {
            if !formats.contains(&format) {
                formats.push(format);
            }
        }

        if formats.is_empty() {
            formats = vec![OutputFormat::Main, OutputFormat::Telegram];
        }

        formats
    }
}
