use precis_core::PrecisError;

/// Immutable configuration for [`SummarizingReducer`](crate::SummarizingReducer).
///
/// Constructed once at setup and shared read-only across invocations.
#[derive(Debug, Clone)]
pub struct ReducerConfig {
    max_context_tokens: usize,
    buffer_tokens: usize,
    collapse_turn_count: usize,
}

impl ReducerConfig {
    /// Create a validated configuration.
    ///
    /// * `max_context_tokens` — upper bound on the total token budget.
    /// * `buffer_tokens` — safety margin subtracted from the max before the
    ///   threshold comparison.
    /// * `collapse_turn_count` — how many of the oldest messages to fold
    ///   into a summary on each reduction. Must be at least 1.
    ///
    /// A `buffer_tokens` larger than `max_context_tokens` is accepted but
    /// yields a permanently-negative threshold, so every non-empty
    /// transcript will be reduced; this is logged as a warning.
    pub fn new(
        max_context_tokens: usize,
        buffer_tokens: usize,
        collapse_turn_count: usize,
    ) -> Result<Self, PrecisError> {
        if collapse_turn_count == 0 {
            return Err(PrecisError::Config(
                "collapse_turn_count must be at least 1".into(),
            ));
        }
        if buffer_tokens > max_context_tokens {
            tracing::warn!(
                "buffer_tokens {buffer_tokens} exceeds max_context_tokens {max_context_tokens}; \
                 every non-empty transcript will trigger reduction"
            );
        }
        Ok(Self {
            max_context_tokens,
            buffer_tokens,
            collapse_turn_count,
        })
    }

    pub fn max_context_tokens(&self) -> usize {
        self.max_context_tokens
    }

    pub fn buffer_tokens(&self) -> usize {
        self.buffer_tokens
    }

    pub fn collapse_turn_count(&self) -> usize {
        self.collapse_turn_count
    }

    /// The token total above which reduction triggers.
    ///
    /// Negative when `buffer_tokens` exceeds `max_context_tokens`.
    pub fn effective_threshold(&self) -> i64 {
        self.max_context_tokens as i64 - self.buffer_tokens as i64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_collapse_count_rejected() {
        let result = ReducerConfig::new(100, 10, 0);
        assert!(matches!(result, Err(PrecisError::Config(_))));
    }

    #[test]
    fn threshold_subtracts_buffer() {
        let config = ReducerConfig::new(50, 10, 3).unwrap();
        assert_eq!(config.effective_threshold(), 40);
    }

    #[test]
    fn oversized_buffer_accepted_with_negative_threshold() {
        let config = ReducerConfig::new(10, 100, 1).unwrap();
        assert_eq!(config.effective_threshold(), -90);
    }
}
