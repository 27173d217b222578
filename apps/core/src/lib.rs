//! Kindred core.
//!
//! Classifies free-text messages into support intents, detects emotion and
//! crisis language, and produces canned supportive replies.
//!
//! ```rust,ignore
//! use kindred_core::ConversationSession;
//!
//! let mut session = ConversationSession::new();
//! let reply = session.process_message("I feel sad today", Some("Sam"));
//! println!("{}", reply.content);
//! ```

pub mod brain;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod session;

pub use brain::{Emotion, EmotionAnalysis, IntentCatalog, IntentDefinition};
pub use config::EngineConfig;
pub use error::AppError;
pub use models::{ConversationInsights, ConversationMessage, EmotionalContext, Sender, SupportType};
pub use session::ConversationSession;

#[cfg(test)]
mod tests;
