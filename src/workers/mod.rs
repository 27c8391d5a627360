//! External collaborators driven by a frame job: downloader, transcoder, publisher.

pub mod command;
pub mod extractor;
pub mod fetcher;
pub mod publisher;

pub use extractor::{FfmpegExtractor, FrameExtractor};
pub use fetcher::{VideoFetcher, YtDlpFetcher};
pub use publisher::FramePublisher;
