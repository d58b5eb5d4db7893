use crate::tracklist::error::TracklistResult;
use crate::tracklist::format::{self, OutputFormat};
use crate::tracklist::models::{RunConfiguration, TracklistEntry};
use indicatif::{MultiProgress, ProgressBar};
use log::{debug, info};
use std::path::PathBuf;
use tokio::fs::File;
use tokio::io::{AsyncWriteExt, BufWriter};

/// Renders one format pass over the sorted entries into its own output file.
///
/// Each pass only reads the shared tracklist and owns its destination, so
/// the orchestrator can run passes for different formats concurrently. CUE
/// track numbers are taken from the sorted position, assigned fresh here and
/// never written back into the entries.
pub async fn write_format(
    pb: &MultiProgress,
    format: OutputFormat,
    entries: &[TracklistEntry],
    config: &RunConfiguration,
) -> TracklistResult<PathBuf> {
    let output_path = config.output_dir.join(format.output_file_name());
    debug!("Writing {} tracklist: {output_path:?}", format.value());

    let file = File::create(&output_path).await?;
    let mut writer = BufWriter::new(file);

    if let Some(header) = format.header(config.cue.as_ref()) {
        debug!("Writing {} header", format.value());
        writer.write_all(header.as_bytes()).await?;
        writer.write_all(b"\n").await?;
    }

    let progress = pb.add(ProgressBar::new(entries.len() as u64));
    for (index, entry) in entries.iter().enumerate() {
        let line = format::render_line(format, entry, index + 1, config.no_labels);
        writer.write_all(line.as_bytes()).await?;
        writer.write_all(b"\n").await?;
        progress.inc(1);
    }

    writer.flush().await?;
    progress.finish_and_clear();

    info!("Wrote {} tracklist to {output_path:?}", format.value());

    Ok(output_path)
}
