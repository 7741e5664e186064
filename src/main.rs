//! pugg CLI entry point.

use anyhow::Result;
use clap::Parser;
use pugg::cli::{commands, Cli, Commands};
use pugg::config::Settings;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let mut settings = match &cli.config {
        Some(path) => Settings::load_from(Some(&std::path::PathBuf::from(path)))?,
        None => Settings::load()?,
    };

    // CLI flag wins over the config file
    if let Some(key) = &cli.api_key {
        settings.youtube.api_key = Some(key.clone());
    }

    // Initialize logging; -v overrides the configured level.
    // Logs go to stderr so MCP stdout stays clean JSON-RPC.
    let log_level = match cli.verbose {
        0 => settings.general.log_level.as_str(),
        1 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| format!("pugg={}", log_level)),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    // Execute command
    match &cli.command {
        Commands::Init => {
            commands::run_init(&settings)?;
        }

        Commands::Doctor => {
            commands::run_doctor(&settings)?;
        }

        Commands::Search { query, max_results } => {
            commands::run_search(query, *max_results, settings).await?;
        }

        Commands::Video { video_id } => {
            commands::run_video(video_id, settings).await?;
        }

        Commands::Channel { channel_id } => {
            commands::run_channel(channel_id, settings).await?;
        }

        Commands::Comments {
            video_id,
            max_results,
        } => {
            commands::run_comments(video_id, *max_results, settings).await?;
        }

        Commands::Trending {
            region,
            max_results,
        } => {
            commands::run_trending(region.clone(), *max_results, settings).await?;
        }

        Commands::Related {
            video_id,
            max_results,
        } => {
            commands::run_related(video_id, *max_results, settings).await?;
        }

        Commands::Transcript { video_id } => {
            commands::run_transcript(video_id, settings).await?;
        }

        Commands::Summary {
            video_id,
            no_comments,
        } => {
            commands::run_summary(video_id, *no_comments, settings).await?;
        }

        Commands::Quiz {
            video_id,
            seed,
            json,
        } => {
            commands::run_quiz(video_id, *seed, *json, settings).await?;
        }

        Commands::Flashcards {
            video_id,
            max_cards,
            categories,
            difficulty,
            seed,
            json,
        } => {
            commands::run_flashcards(
                video_id,
                *max_cards,
                categories,
                *difficulty,
                *seed,
                *json,
                settings,
            )
            .await?;
        }

        Commands::Serve { host, port } => {
            commands::run_serve(host, *port, settings).await?;
        }

        Commands::Mcp => {
            commands::run_mcp(settings).await?;
        }

        Commands::Config { action } => {
            commands::run_config(action, settings)?;
        }
    }

    Ok(())
}
