//! Encoding boundary: animated GIF, MP4 via the system `ffmpeg`, and the
//! export orchestration that ties the two together.

pub mod export;
pub mod ffmpeg;
pub mod gif;
