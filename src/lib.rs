//! pugg - YouTube Study Tools
//!
//! A CLI tool and MCP server that turns YouTube videos into study material.
//!
//! The name "pugg" comes from the Norwegian "pugge", to cram for an exam.
//!
//! # Overview
//!
//! pugg allows you to:
//! - Search YouTube and inspect videos, channels, comments and trends
//! - Fetch caption transcripts without an OAuth flow
//! - Generate quizzes and flash cards from a video's transcript
//! - Summarize a video from its metadata, transcript and top comments
//! - Expose all of the above to AI assistants over MCP
//!
//! # Architecture
//!
//! The library is organized into several modules:
//!
//! - `config` - Configuration management
//! - `youtube` - YouTube Data API client and caption fetching
//! - `study` - Quiz and flash card generation
//! - `summary` - Combined video summaries
//! - `render` - Plain-text rendering of fetched and generated material
//! - `mcp` - MCP server (JSON-RPC 2.0 over stdio)
//! - `cli` - Command line interface
//!
//! # Example
//!
//! ```rust,no_run
//! use pugg::study::generate_quiz;
//! use pugg::youtube::{VideoProvider, YoutubeDataApi};
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let api = YoutubeDataApi::new("AIza...");
//!
//!     if let Some(video) = api.fetch_video("dQw4w9WgXcQ").await? {
//!         let transcript = api.fetch_transcript("dQw4w9WgXcQ").await?;
//!         let mut rng = StdRng::seed_from_u64(7);
//!         let quiz = generate_quiz(&video, transcript.as_ref(), &mut rng);
//!         println!("Generated {} questions", quiz.len());
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod mcp;
pub mod render;
pub mod study;
pub mod summary;
pub mod youtube;

pub use error::{PuggError, Result};
