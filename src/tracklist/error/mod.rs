use crate::tracklist::loader::error::LoaderError;
use std::path::PathBuf;
use std::result;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TracklistError {
    #[error(transparent)]
    IoError(#[from] std::io::Error),

    #[error(transparent)]
    LoaderError(#[from] LoaderError),

    #[error("Could not find the tracklist input file: {0}")]
    MissingInputFile(PathBuf),

    #[error("The cue format needs an audio file, pass one with --audio-file")]
    MissingCueAudioFile,
}

pub type TracklistResult<T> = result::Result<T, TracklistError>;
