mod error;
mod message;
mod model;
mod tokenizer;
mod transcript;

pub use error::PrecisError;
pub use message::{Message, MessageRole};
pub use model::{ChatModel, ChatRequest, ChatResponse, TokenUsage, ToolChoice};
pub use tokenizer::{HeuristicTokenizer, Tokenizer};
pub use transcript::Transcript;
