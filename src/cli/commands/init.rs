//! Init command - interactive first-run setup.

use crate::cli::Output;
use crate::config::Settings;
use console::style;
use std::io::{self, Write};

/// Run the init command for first-time setup.
pub fn run_init(settings: &Settings) -> anyhow::Result<()> {
    Output::header("pugg Setup");
    println!();
    println!("Welcome to pugg! Let's make sure everything is configured correctly.\n");

    // Step 1: Check API key
    println!("{}", style("Step 1: Checking API configuration").bold().cyan());
    println!();

    if settings.api_key().is_err() {
        Output::warning("No YouTube API key is configured.");
        println!();
        println!("  pugg needs a YouTube Data API v3 key to query videos.");
        println!(
            "  Create one at: {}",
            style("https://console.cloud.google.com/apis/credentials").underlined()
        );
        println!("  Make sure 'YouTube Data API v3' is enabled for your project.");
        println!();
        println!("  Then set it in your shell configuration (~/.bashrc, ~/.zshrc, etc.):");
        println!("  {}", style("export YOUTUBE_API_KEY='AIza...'").green());
        println!("  or store it in the config file:");
        println!("  {}", style("pugg config set youtube.api_key AIza...").green());
        println!();

        if !prompt_continue("Continue without API key?")? {
            println!();
            Output::info("Setup cancelled. Set your API key and run 'pugg init' again.");
            return Ok(());
        }
    } else {
        Output::success("YouTube API key is configured!");
    }

    println!();

    // Step 2: Create config file
    println!("{}", style("Step 2: Configuration file").bold().cyan());
    println!();

    let config_path = Settings::default_config_path();
    if config_path.exists() {
        Output::info(&format!("Config file exists: {}", config_path.display()));
    } else if prompt_continue("Create default configuration file?")? {
        settings.save_to(&config_path)?;
        Output::success(&format!("Created config file: {}", config_path.display()));
        println!();
        println!("  Edit your config with: {}", style("pugg config edit").green());
    } else {
        Output::info("Skipped config file creation. Using defaults.");
    }

    println!();

    // Summary
    println!("{}", style("Setup Complete!").bold().green());
    println!();
    println!("Next steps:");
    println!("  {} Check configuration", style("pugg doctor").cyan());
    println!("  {} Search for videos", style("pugg search \"<query>\"").cyan());
    println!("  {} Quiz yourself on one", style("pugg quiz <url>").cyan());
    println!();
    println!("For more help: {}", style("pugg --help").cyan());

    Ok(())
}

/// Prompt user for yes/no confirmation.
fn prompt_continue(message: &str) -> io::Result<bool> {
    print!("{} {} ", style("?").cyan(), message);
    print!("{} ", style("[y/N]").dim());
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;

    Ok(input.trim().to_lowercase() == "y" || input.trim().to_lowercase() == "yes")
}
