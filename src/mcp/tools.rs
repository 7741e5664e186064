//! MCP tool definitions for pugg.

use super::protocol::Tool;
use serde_json::json;

/// Get all available tools.
pub fn get_tools() -> Vec<Tool> {
    vec![
        Tool {
            name: "search_videos".to_string(),
            description: "Search YouTube for videos matching a query. \
                Returns title, channel, description and URL for each hit."
                .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "query": {
                        "type": "string",
                        "description": "Search terms"
                    },
                    "max_results": {
                        "type": "integer",
                        "description": "Maximum number of videos to return",
                        "default": 10
                    }
                },
                "required": ["query"]
            }),
        },
        Tool {
            name: "get_video_info".to_string(),
            description: "Get detailed information about a video: title, channel, duration, \
                description, view/like/comment counts and tags."
                .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "video_id": {
                        "type": "string",
                        "description": "YouTube video ID or URL"
                    }
                },
                "required": ["video_id"]
            }),
        },
        Tool {
            name: "get_channel_details".to_string(),
            description: "Get details about a YouTube channel: name, subscriber count, \
                video count, total views and description."
                .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "channel_id": {
                        "type": "string",
                        "description": "YouTube channel ID"
                    }
                },
                "required": ["channel_id"]
            }),
        },
        Tool {
            name: "get_video_comments".to_string(),
            description: "Fetch top-level comments for a video in the order YouTube returns them."
                .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "video_id": {
                        "type": "string",
                        "description": "YouTube video ID or URL"
                    },
                    "max_results": {
                        "type": "integer",
                        "description": "Maximum number of comments to return",
                        "default": 100
                    }
                },
                "required": ["video_id"]
            }),
        },
        Tool {
            name: "get_trending_videos".to_string(),
            description: "List videos currently trending in a region.".to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "region": {
                        "type": "string",
                        "description": "ISO 3166-1 alpha-2 region code",
                        "default": "US"
                    },
                    "max_results": {
                        "type": "integer",
                        "description": "Maximum number of videos to return (capped at 50)",
                        "default": 50
                    }
                },
                "required": []
            }),
        },
        Tool {
            name: "get_related_videos".to_string(),
            description: "Find videos related to a given video.".to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "video_id": {
                        "type": "string",
                        "description": "YouTube video ID or URL"
                    },
                    "max_results": {
                        "type": "integer",
                        "description": "Maximum number of videos to return (capped at 25)",
                        "default": 25
                    }
                },
                "required": ["video_id"]
            }),
        },
        Tool {
            name: "get_transcript".to_string(),
            description: "Fetch the caption transcript of a video as timestamped lines."
                .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "video_id": {
                        "type": "string",
                        "description": "YouTube video ID or URL"
                    }
                },
                "required": ["video_id"]
            }),
        },
        Tool {
            name: "summarize_video".to_string(),
            description: "Build a combined summary of a video from its metadata, \
                a transcript preview and top comments."
                .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "video_id": {
                        "type": "string",
                        "description": "YouTube video ID or URL"
                    },
                    "include_comments": {
                        "type": "boolean",
                        "description": "Include top comments in the summary",
                        "default": true
                    }
                },
                "required": ["video_id"]
            }),
        },
        Tool {
            name: "generate_quiz".to_string(),
            description: "Generate a 10-question quiz (multiple choice, true/false and \
                fill-in-the-blank) from a video's metadata and transcript."
                .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "video_id": {
                        "type": "string",
                        "description": "YouTube video ID or URL"
                    },
                    "seed": {
                        "type": "integer",
                        "description": "Seed for reproducible question selection"
                    }
                },
                "required": ["video_id"]
            }),
        },
        Tool {
            name: "create_flashcards".to_string(),
            description: "Create study flash cards from a video transcript, tagged with \
                category, difficulty and timestamp."
                .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "video_id": {
                        "type": "string",
                        "description": "YouTube video ID or URL"
                    },
                    "max_cards": {
                        "type": "integer",
                        "description": "Maximum number of cards to create",
                        "default": 10
                    },
                    "categories": {
                        "type": "array",
                        "items": { "type": "string" },
                        "description": "Keep only these categories (fill-in-the-blank, qa, definition)"
                    },
                    "difficulty": {
                        "type": "string",
                        "description": "Keep only cards of this difficulty (easy, medium, hard)"
                    },
                    "seed": {
                        "type": "integer",
                        "description": "Seed for reproducible card selection"
                    }
                },
                "required": ["video_id"]
            }),
        },
    ]
}
