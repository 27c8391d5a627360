use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "frame-lambda")]
#[command(about = "Download a video, extract stills and upload them to object storage")]
#[command(version)]
pub struct Cli {
    /// Serves HTTP when no subcommand is given
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand, PartialEq, Eq)]
pub enum Command {
    /// Run one job from a JSON event on stdin and print the response on stdout
    Invoke,
}
