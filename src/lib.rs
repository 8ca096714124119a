//! Serve a directory of video files over HTTP, with a catalog endpoint and
//! single byte-range seeking.

pub mod cli;
pub mod config;
pub mod http;
pub mod media;
pub mod range;
