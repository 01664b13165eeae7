use crate::PrecisError;

/// Trait for counting tokens in text.
///
/// Implementations must be deterministic for identical input and flags and
/// must not mutate the input.
pub trait Tokenizer: Send + Sync {
    /// Count the tokens in `text`.
    ///
    /// The flags ask the backend to account for its pre-tokenization and
    /// normalization passes; backends without those passes may ignore them.
    fn count_tokens(
        &self,
        text: &str,
        consider_pre_tokenization: bool,
        consider_normalization: bool,
    ) -> Result<usize, PrecisError>;
}

/// Heuristic tokenizer that estimates ~4 characters per token.
pub struct HeuristicTokenizer;

impl Tokenizer for HeuristicTokenizer {
    fn count_tokens(
        &self,
        text: &str,
        _consider_pre_tokenization: bool,
        _consider_normalization: bool,
    ) -> Result<usize, PrecisError> {
        // ~4 chars per token, minimum 1 token for non-empty text
        if text.is_empty() {
            Ok(0)
        } else {
            Ok((text.len() / 4).max(1))
        }
    }
}
