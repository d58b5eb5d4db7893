use crate::commands::convert::ConvertCommand;
use clap::{Parser, Subcommand};

pub mod convert;

/// CLI for generating mixtape tracklist files for different formats.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    Convert(ConvertCommand),
}
