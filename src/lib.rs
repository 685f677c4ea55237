//! Core library for the leaderboard-tools command line application.
//!
//! The library turns the hand-maintained country data files of the
//! leaderboard into paste-ready snippets. Input loading and parsing live
//! under [`leaderboard::tools::io`], records and normalization policies in
//! [`leaderboard::tools::model`], the printers in
//! [`leaderboard::tools::format`], and the per-mode orchestration under
//! [`leaderboard::tools::reformat`].

pub mod leaderboard;

pub use leaderboard::tools::{Result, ToolError, error, format, io, logging, model, reformat};
