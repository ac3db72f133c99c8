//! # chat-memory
//!
//! Conversation context-memory management for LLM chat.
//!
//! This crate provides:
//! - Context window selection under a message-count and a token budget
//! - Heuristic token estimation for mixed Chinese and English text
//! - Keyword extraction and keyword-based relevance search over history
//! - Template digests of a conversation
//!
//! Everything works on in-memory message lists; storing messages and talking
//! to the model is left to the caller.
//!
//! ## Quick Start
//!
//! ```rust
//! use chat_memory::{ChatMessage, MemoryConfig, MemoryManager};
//!
//! let manager = MemoryManager::with_config(MemoryConfig::default().with_max_messages(10));
//!
//! let history = vec![
//!     ChatMessage::user("How do I use useState?"),
//!     ChatMessage::assistant("Call it with an initial value."),
//!     ChatMessage::user("And useEffect?"),
//! ];
//!
//! // The {role, content} pairs to send with the next request
//! let context = manager.build_context_history(&history);
//! assert_eq!(context.len(), 3);
//!
//! // Earlier messages related to the new question
//! let related = manager.find_related(&history, "useState hook", 3);
//! assert_eq!(related.len(), 1);
//! ```

pub mod config;
pub mod error;
pub mod keywords;
pub mod manager;
pub mod message;
pub mod optimizer;
pub mod search;
pub mod summary;
pub mod tokens;

pub use config::{MemoryConfig, MemoryConfigUpdate};
pub use error::{ContextError, Result};
pub use keywords::{DEFAULT_KEYWORD_LIMIT, extract_keywords};
pub use manager::{MemoryManager, MemoryStats};
pub use message::{ChatMessage, HistoryEntry, MessageRole, RawMessage};
pub use optimizer::ContextWindow;
pub use search::{find_related, search_relevant_memories};
pub use summary::generate_summary;
pub use tokens::{HeuristicEstimator, TokenEstimator, estimate_tokens};
