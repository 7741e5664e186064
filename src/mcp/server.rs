//! MCP server implementation.

use super::protocol::*;
use super::tools::get_tools;
use crate::config::Settings;
use crate::render;
use crate::study::{self, CardCategory, CardDifficulty};
use crate::summary::build_summary;
use crate::youtube::{extract_video_id, VideoProvider, YoutubeDataApi};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde_json::{json, Value};
use std::io::{self, BufRead, Write};
use std::sync::Arc;
use tracing::warn;

const PROTOCOL_VERSION: &str = "2024-11-05";
const SERVER_NAME: &str = "pugg";
const SERVER_VERSION: &str = env!("CARGO_PKG_VERSION");

/// MCP Server for pugg.
pub struct McpServer {
    settings: Settings,
    provider: Option<Arc<dyn VideoProvider>>,
}

impl McpServer {
    /// Create a new MCP server.
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            provider: None,
        }
    }

    #[cfg(test)]
    fn with_provider(settings: Settings, provider: Arc<dyn VideoProvider>) -> Self {
        Self {
            settings,
            provider: Some(provider),
        }
    }

    /// Run the MCP server (reads from stdin, writes to stdout).
    pub async fn run(&mut self) -> anyhow::Result<()> {
        let stdin = io::stdin();
        let mut stdout = io::stdout();

        // Log to stderr so it doesn't interfere with JSON-RPC
        eprintln!("pugg MCP server starting...");

        for line in stdin.lock().lines() {
            let line = line?;
            if line.is_empty() {
                continue;
            }

            let request: JsonRpcRequest = match serde_json::from_str(&line) {
                Ok(req) => req,
                Err(e) => {
                    eprintln!("Failed to parse request: {}", e);
                    let response = JsonRpcResponse::error(None, PARSE_ERROR, "Parse error");
                    writeln!(stdout, "{}", serde_json::to_string(&response)?)?;
                    stdout.flush()?;
                    continue;
                }
            };

            let response = self.handle_request(request).await;
            writeln!(stdout, "{}", serde_json::to_string(&response)?)?;
            stdout.flush()?;
        }

        Ok(())
    }

    /// Handle a single JSON-RPC request.
    async fn handle_request(&mut self, request: JsonRpcRequest) -> JsonRpcResponse {
        match request.method.as_str() {
            "initialize" => self.handle_initialize(request.id, request.params),
            "initialized" | "notifications/initialized" => {
                // Notification, no response needed but we'll send empty success
                JsonRpcResponse::success(request.id, json!({}))
            }
            "tools/list" => self.handle_tools_list(request.id),
            "tools/call" => self.handle_tools_call(request.id, request.params).await,
            _ => JsonRpcResponse::error(
                request.id,
                METHOD_NOT_FOUND,
                &format!("Method not found: {}", request.method),
            ),
        }
    }

    /// Handle initialize request.
    fn handle_initialize(&mut self, id: Option<Value>, _params: Option<Value>) -> JsonRpcResponse {
        // Build the YouTube client lazily so tools/list works without a key
        match self.settings.api_key() {
            Ok(key) => {
                self.provider = Some(Arc::new(YoutubeDataApi::new(key)));
                eprintln!("YouTube client initialized");
            }
            Err(e) => {
                eprintln!("Failed to initialize YouTube client: {}", e);
                return JsonRpcResponse::error(id, INIT_FAILED, &format!("Init failed: {}", e));
            }
        }

        let result = InitializeResult {
            protocol_version: PROTOCOL_VERSION.to_string(),
            capabilities: ServerCapabilities {
                tools: ToolsCapability {
                    list_changed: false,
                },
            },
            server_info: ServerInfo {
                name: SERVER_NAME.to_string(),
                version: SERVER_VERSION.to_string(),
            },
        };

        JsonRpcResponse::success(id, serde_json::to_value(result).unwrap())
    }

    /// Handle tools/list request.
    fn handle_tools_list(&self, id: Option<Value>) -> JsonRpcResponse {
        let result = ToolsListResult { tools: get_tools() };
        JsonRpcResponse::success(id, serde_json::to_value(result).unwrap())
    }

    /// Handle tools/call request.
    async fn handle_tools_call(&self, id: Option<Value>, params: Option<Value>) -> JsonRpcResponse {
        let params: ToolCallParams = match params {
            Some(p) => match serde_json::from_value(p) {
                Ok(params) => params,
                Err(e) => {
                    return JsonRpcResponse::error(
                        id,
                        INVALID_PARAMS,
                        &format!("Invalid params: {}", e),
                    )
                }
            },
            None => return JsonRpcResponse::error(id, INVALID_PARAMS, "Missing params"),
        };

        let result = match params.name.as_str() {
            "search_videos" => self.tool_search_videos(params.arguments).await,
            "get_video_info" => self.tool_get_video_info(params.arguments).await,
            "get_channel_details" => self.tool_get_channel_details(params.arguments).await,
            "get_video_comments" => self.tool_get_video_comments(params.arguments).await,
            "get_trending_videos" => self.tool_get_trending_videos(params.arguments).await,
            "get_related_videos" => self.tool_get_related_videos(params.arguments).await,
            "get_transcript" => self.tool_get_transcript(params.arguments).await,
            "summarize_video" => self.tool_summarize_video(params.arguments).await,
            "generate_quiz" => self.tool_generate_quiz(params.arguments).await,
            "create_flashcards" => self.tool_create_flashcards(params.arguments).await,
            _ => ToolCallResult::error(format!("Unknown tool: {}", params.name)),
        };

        JsonRpcResponse::success(id, serde_json::to_value(result).unwrap())
    }

    /// Search videos tool.
    async fn tool_search_videos(&self, args: Option<Value>) -> ToolCallResult {
        let args = match args {
            Some(a) => a,
            None => return ToolCallResult::error("Missing arguments".to_string()),
        };

        let query = match args.get("query").and_then(|v| v.as_str()) {
            Some(q) => q,
            None => return ToolCallResult::error("Missing 'query' argument".to_string()),
        };

        let max_results = args
            .get("max_results")
            .and_then(|v| v.as_u64())
            .unwrap_or(10) as usize;

        let provider = match &self.provider {
            Some(p) => p,
            None => return ToolCallResult::error("Server not initialized".to_string()),
        };

        match provider.search_videos(query, max_results).await {
            Ok(videos) if videos.is_empty() => {
                ToolCallResult::text("No videos found.".to_string())
            }
            Ok(videos) => ToolCallResult::text(render::format_video_list(&videos)),
            Err(e) => {
                warn!("Search failed: {}", e);
                ToolCallResult::text("No videos found.".to_string())
            }
        }
    }

    /// Video info tool.
    async fn tool_get_video_info(&self, args: Option<Value>) -> ToolCallResult {
        let video_id = match required_video_id(&args) {
            Ok(id) => id,
            Err(result) => return result,
        };

        let provider = match &self.provider {
            Some(p) => p,
            None => return ToolCallResult::error("Server not initialized".to_string()),
        };

        match provider.fetch_video(&video_id).await {
            Ok(Some(video)) => ToolCallResult::text(render::format_video(&video)),
            Ok(None) => ToolCallResult::text("No video found.".to_string()),
            Err(e) => {
                warn!("Video fetch failed: {}", e);
                ToolCallResult::text("No video found.".to_string())
            }
        }
    }

    /// Channel details tool.
    async fn tool_get_channel_details(&self, args: Option<Value>) -> ToolCallResult {
        let args = match args {
            Some(a) => a,
            None => return ToolCallResult::error("Missing arguments".to_string()),
        };

        let channel_id = match args.get("channel_id").and_then(|v| v.as_str()) {
            Some(id) => id,
            None => return ToolCallResult::error("Missing 'channel_id' argument".to_string()),
        };

        let provider = match &self.provider {
            Some(p) => p,
            None => return ToolCallResult::error("Server not initialized".to_string()),
        };

        match provider.fetch_channel(channel_id).await {
            Ok(Some(channel)) => ToolCallResult::text(render::format_channel(&channel)),
            Ok(None) => ToolCallResult::text("No channel found.".to_string()),
            Err(e) => {
                warn!("Channel fetch failed: {}", e);
                ToolCallResult::text("No channel found.".to_string())
            }
        }
    }

    /// Video comments tool.
    async fn tool_get_video_comments(&self, args: Option<Value>) -> ToolCallResult {
        let video_id = match required_video_id(&args) {
            Ok(id) => id,
            Err(result) => return result,
        };

        let max_results = args
            .as_ref()
            .and_then(|a| a.get("max_results"))
            .and_then(|v| v.as_u64())
            .unwrap_or(100) as usize;

        let provider = match &self.provider {
            Some(p) => p,
            None => return ToolCallResult::error("Server not initialized".to_string()),
        };

        match provider.fetch_comments(&video_id, max_results).await {
            Ok(comments) if comments.is_empty() => {
                ToolCallResult::text("No comments found or comments are disabled.".to_string())
            }
            Ok(comments) => ToolCallResult::text(render::format_comment_list(&comments)),
            Err(e) => {
                warn!("Comment fetch failed: {}", e);
                ToolCallResult::text("No comments found or comments are disabled.".to_string())
            }
        }
    }

    /// Trending videos tool.
    async fn tool_get_trending_videos(&self, args: Option<Value>) -> ToolCallResult {
        let args = args.unwrap_or_else(|| json!({}));

        let region = args
            .get("region")
            .and_then(|v| v.as_str())
            .unwrap_or("US")
            .to_string();
        let max_results = args
            .get("max_results")
            .and_then(|v| v.as_u64())
            .unwrap_or(50) as usize;

        let provider = match &self.provider {
            Some(p) => p,
            None => return ToolCallResult::error("Server not initialized".to_string()),
        };

        match provider.fetch_trending(&region, max_results).await {
            Ok(videos) if videos.is_empty() => {
                ToolCallResult::text("No trending videos found.".to_string())
            }
            Ok(videos) => ToolCallResult::text(render::format_video_list(&videos)),
            Err(e) => {
                warn!("Trending fetch failed: {}", e);
                ToolCallResult::text("No trending videos found.".to_string())
            }
        }
    }

    /// Related videos tool.
    async fn tool_get_related_videos(&self, args: Option<Value>) -> ToolCallResult {
        let video_id = match required_video_id(&args) {
            Ok(id) => id,
            Err(result) => return result,
        };

        let max_results = args
            .as_ref()
            .and_then(|a| a.get("max_results"))
            .and_then(|v| v.as_u64())
            .unwrap_or(25) as usize;

        let provider = match &self.provider {
            Some(p) => p,
            None => return ToolCallResult::error("Server not initialized".to_string()),
        };

        match provider.fetch_related(&video_id, max_results).await {
            Ok(videos) if videos.is_empty() => {
                ToolCallResult::text("No related videos found.".to_string())
            }
            Ok(videos) => ToolCallResult::text(render::format_video_list(&videos)),
            Err(e) => {
                warn!("Related fetch failed: {}", e);
                ToolCallResult::text("No related videos found.".to_string())
            }
        }
    }

    /// Transcript tool.
    async fn tool_get_transcript(&self, args: Option<Value>) -> ToolCallResult {
        let video_id = match required_video_id(&args) {
            Ok(id) => id,
            Err(result) => return result,
        };

        let provider = match &self.provider {
            Some(p) => p,
            None => return ToolCallResult::error("Server not initialized".to_string()),
        };

        match provider.fetch_transcript(&video_id).await {
            Ok(Some(transcript)) => ToolCallResult::text(render::format_transcript(&transcript)),
            Ok(None) => {
                ToolCallResult::text("No transcript available for this video.".to_string())
            }
            Err(e) => {
                warn!("Transcript fetch failed: {}", e);
                ToolCallResult::text("No transcript available for this video.".to_string())
            }
        }
    }

    /// Video summary tool.
    async fn tool_summarize_video(&self, args: Option<Value>) -> ToolCallResult {
        let video_id = match required_video_id(&args) {
            Ok(id) => id,
            Err(result) => return result,
        };

        let include_comments = args
            .as_ref()
            .and_then(|a| a.get("include_comments"))
            .and_then(|v| v.as_bool())
            .unwrap_or(true);

        let provider = match &self.provider {
            Some(p) => p,
            None => return ToolCallResult::error("Server not initialized".to_string()),
        };

        match build_summary(provider.as_ref(), &video_id, include_comments).await {
            Ok(Some(summary)) => ToolCallResult::text(summary),
            Ok(None) => ToolCallResult::text("No video found.".to_string()),
            Err(e) => {
                warn!("Summary failed: {}", e);
                ToolCallResult::text("No video found.".to_string())
            }
        }
    }

    /// Quiz generation tool.
    async fn tool_generate_quiz(&self, args: Option<Value>) -> ToolCallResult {
        let video_id = match required_video_id(&args) {
            Ok(id) => id,
            Err(result) => return result,
        };

        let seed = args.as_ref().and_then(|a| a.get("seed")).and_then(|v| v.as_u64());

        let provider = match &self.provider {
            Some(p) => p,
            None => return ToolCallResult::error("Server not initialized".to_string()),
        };

        let video = match provider.fetch_video(&video_id).await {
            Ok(Some(video)) => video,
            Ok(None) => return ToolCallResult::text("No video found.".to_string()),
            Err(e) => {
                warn!("Video fetch failed: {}", e);
                return ToolCallResult::text("No video found.".to_string());
            }
        };

        // Quiz quality degrades gracefully without a transcript
        let transcript = match provider.fetch_transcript(&video_id).await {
            Ok(transcript) => transcript,
            Err(e) => {
                warn!("Transcript fetch failed: {}", e);
                None
            }
        };

        let mut rng = rng_from_seed(seed);
        let questions = study::generate_quiz(&video, transcript.as_ref(), &mut rng);
        ToolCallResult::text(render::format_quiz(&video.title, &questions))
    }

    /// Flash card creation tool.
    async fn tool_create_flashcards(&self, args: Option<Value>) -> ToolCallResult {
        let video_id = match required_video_id(&args) {
            Ok(id) => id,
            Err(result) => return result,
        };

        let max_cards = args
            .as_ref()
            .and_then(|a| a.get("max_cards"))
            .and_then(|v| v.as_u64())
            .map(|v| v as usize)
            .unwrap_or(self.settings.study.default_max_cards);
        let seed = args.as_ref().and_then(|a| a.get("seed")).and_then(|v| v.as_u64());

        let categories = match parse_categories(args.as_ref()) {
            Ok(categories) => categories,
            Err(message) => return ToolCallResult::error(message),
        };
        let difficulty = match args
            .as_ref()
            .and_then(|a| a.get("difficulty"))
            .and_then(|v| v.as_str())
        {
            Some(raw) => match raw.parse::<CardDifficulty>() {
                Ok(difficulty) => Some(difficulty),
                Err(message) => return ToolCallResult::error(message),
            },
            None => None,
        };

        let provider = match &self.provider {
            Some(p) => p,
            None => return ToolCallResult::error("Server not initialized".to_string()),
        };

        let transcript = match provider.fetch_transcript(&video_id).await {
            Ok(Some(transcript)) => transcript,
            Ok(None) => {
                return ToolCallResult::text("No transcript available for this video.".to_string())
            }
            Err(e) => {
                warn!("Transcript fetch failed: {}", e);
                return ToolCallResult::text(
                    "No transcript available for this video.".to_string(),
                );
            }
        };

        let mut rng = rng_from_seed(seed);
        let cards = match study::generate_flashcards(&transcript, max_cards, &mut rng) {
            Ok(cards) => cards,
            Err(e) => return ToolCallResult::text(e.to_string()),
        };
        let cards = study::filter_flashcards(cards, categories.as_deref(), difficulty);
        ToolCallResult::text(render::format_flashcards(&cards))
    }
}

/// Extract and normalize the required `video_id` argument.
fn required_video_id(args: &Option<Value>) -> Result<String, ToolCallResult> {
    let args = match args {
        Some(a) => a,
        None => return Err(ToolCallResult::error("Missing arguments".to_string())),
    };

    let raw = match args.get("video_id").and_then(|v| v.as_str()) {
        Some(id) => id,
        None => return Err(ToolCallResult::error("Missing 'video_id' argument".to_string())),
    };

    extract_video_id(raw)
        .ok_or_else(|| ToolCallResult::error(format!("Invalid video ID or URL: {}", raw)))
}

/// Parse the optional `categories` argument (array of category names).
fn parse_categories(args: Option<&Value>) -> Result<Option<Vec<CardCategory>>, String> {
    let raw = match args.and_then(|a| a.get("categories")) {
        Some(raw) => raw,
        None => return Ok(None),
    };

    let items = raw
        .as_array()
        .ok_or_else(|| "'categories' must be an array of strings".to_string())?;

    let mut categories = Vec::with_capacity(items.len());
    for item in items {
        let name = item
            .as_str()
            .ok_or_else(|| "'categories' must be an array of strings".to_string())?;
        categories.push(name.parse::<CardCategory>()?);
    }
    Ok(Some(categories))
}

/// Seeded RNG when a seed was supplied, entropy otherwise.
fn rng_from_seed(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}
