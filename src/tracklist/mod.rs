use crate::audio::detect_audio_type;
use crate::commands::convert::ConvertCommand;
use crate::tracklist::error::{TracklistError, TracklistResult};
use crate::tracklist::format::OutputFormat;
use crate::tracklist::loader::TracklistLoader;
use crate::tracklist::models::{CueMetadata, RunConfiguration};
use crate::tracklist::writer::write_format;
use futures::future::try_join_all;
use indicatif::MultiProgress;
use log::info;
use tokio::fs;

pub mod error;
pub mod format;
pub mod loader;
pub mod models;
pub mod timestamp;
pub mod writer;

/// Converts the input tracklist document into every requested output format.
///
/// Pre-flight checks (input existence, CUE audio file) run before any
/// parsing. Format passes share only the read-only sorted tracklist and are
/// rendered concurrently; a failure in any pass fails the whole run, leaving
/// already-written files on disk.
pub async fn convert_tracklist(pb: MultiProgress, cmd: ConvertCommand) -> TracklistResult<()> {
    let input_is_file = fs::metadata(&cmd.file)
        .await
        .is_ok_and(|metadata| metadata.is_file());
    if !input_is_file {
        return Err(TracklistError::MissingInputFile(cmd.file));
    }

    let config = resolve_configuration(cmd)?;

    info!("Input tracklist file: {:?}", config.input);

    let loader = TracklistLoader::new(&config.input);
    let entries = loader.load().await?;

    info!("Tracklist loaded, {} entries found", entries.len());

    try_join_all(
        config
            .formats
            .iter()
            .map(|&format| write_format(&pb, format, &entries, &config)),
    )
    .await?;

    info!("Tracklists written");

    Ok(())
}

/// Resolves the CLI arguments into the run configuration, including the CUE
/// mix metadata when the cue format is selected.
fn resolve_configuration(cmd: ConvertCommand) -> TracklistResult<RunConfiguration> {
    let formats = cmd.selected_formats();

    let cue = if formats.contains(&OutputFormat::Cue) {
        let audio_file = cmd
            .audio_file
            .ok_or(TracklistError::MissingCueAudioFile)?;
        let audio_type = cmd
            .audio_type
            .unwrap_or_else(|| detect_audio_type(&audio_file));

        Some(CueMetadata {
            performer: cmd.cue_performer,
            title: cmd.cue_title,
            audio_file,
            audio_type,
        })
    } else {
        None
    };

    Ok(RunConfiguration {
        input: cmd.file,
        output_dir: cmd.output_dir,
        no_labels: cmd.no_labels,
        formats,
        cue,
    })
}
