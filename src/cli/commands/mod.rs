//! CLI command implementations.

mod channel;
mod comments;
mod config;
mod doctor;
mod flashcards;
mod init;
mod mcp;
mod quiz;
mod related;
mod search;
mod serve;
mod summary;
mod transcript;
mod trending;
mod video;

pub use channel::run_channel;
pub use comments::run_comments;
pub use config::run_config;
pub use doctor::run_doctor;
pub use flashcards::run_flashcards;
pub use init::run_init;
pub use mcp::run_mcp;
pub use quiz::run_quiz;
pub use related::run_related;
pub use search::run_search;
pub use serve::run_serve;
pub use summary::run_summary;
pub use transcript::run_transcript;
pub use trending::run_trending;
pub use video::run_video;
