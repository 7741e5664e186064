//! CLI module for pugg.

pub mod commands;
mod output;

pub use output::Output;

use crate::study::{CardCategory, CardDifficulty};
use clap::{Parser, Subcommand};

/// pugg - YouTube Study Tools
///
/// A CLI tool and MCP server that turns YouTube videos into study material:
/// quizzes, flash cards, transcripts and summaries.
#[derive(Parser, Debug)]
#[command(name = "pugg")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// YouTube Data API v3 key (overrides config)
    #[arg(long, env = "YOUTUBE_API_KEY", global = true, hide_env_values = true)]
    pub api_key: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize pugg and verify configuration
    Init,

    /// Check configuration and API key setup
    Doctor,

    /// Search YouTube for videos
    Search {
        /// Search terms
        query: String,

        /// Maximum number of results
        #[arg(short, long, default_value = "10")]
        max_results: usize,
    },

    /// Show detailed information about a video
    Video {
        /// YouTube video ID or URL
        video_id: String,
    },

    /// Show details about a channel
    Channel {
        /// YouTube channel ID
        channel_id: String,
    },

    /// Show top-level comments for a video
    Comments {
        /// YouTube video ID or URL
        video_id: String,

        /// Maximum number of comments
        #[arg(short, long, default_value = "20")]
        max_results: usize,
    },

    /// List trending videos for a region
    Trending {
        /// ISO 3166-1 alpha-2 region code (defaults to the configured region)
        #[arg(short, long)]
        region: Option<String>,

        /// Maximum number of videos
        #[arg(short, long, default_value = "10")]
        max_results: usize,
    },

    /// Find videos related to a video
    Related {
        /// YouTube video ID or URL
        video_id: String,

        /// Maximum number of videos
        #[arg(short, long, default_value = "10")]
        max_results: usize,
    },

    /// Print the caption transcript of a video
    Transcript {
        /// YouTube video ID or URL
        video_id: String,
    },

    /// Summarize a video from metadata, transcript and comments
    Summary {
        /// YouTube video ID or URL
        video_id: String,

        /// Skip fetching top comments
        #[arg(long)]
        no_comments: bool,
    },

    /// Generate a quiz from a video
    Quiz {
        /// YouTube video ID or URL
        video_id: String,

        /// Seed for reproducible question selection
        #[arg(short, long)]
        seed: Option<u64>,

        /// Print questions as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Create flash cards from a video transcript
    Flashcards {
        /// YouTube video ID or URL
        video_id: String,

        /// Maximum number of cards (defaults to the configured value)
        #[arg(short, long)]
        max_cards: Option<usize>,

        /// Keep only cards of this category (repeatable)
        #[arg(long = "category", value_name = "CATEGORY")]
        categories: Vec<CardCategory>,

        /// Keep only cards of this difficulty
        #[arg(short, long)]
        difficulty: Option<CardDifficulty>,

        /// Seed for reproducible card selection
        #[arg(long)]
        seed: Option<u64>,

        /// Print cards as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Start HTTP API server for integration with other systems
    Serve {
        /// Host to bind to
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Port to bind to
        #[arg(short, long, default_value = "3000")]
        port: u16,
    },

    /// Start MCP server for AI assistant integration (Claude, etc.)
    Mcp,

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Set a configuration value
    Set {
        /// Configuration key (e.g., "youtube.region")
        key: String,
        /// Configuration value
        value: String,
    },

    /// Open configuration file in editor
    Edit,

    /// Show configuration file path
    Path,
}
