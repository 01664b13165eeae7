mod config;
mod noop;
mod pipeline;
mod rolling;
mod summarizing;

pub use config::ReducerConfig;
pub use noop::NoOpReducer;
pub use pipeline::PipelineReducer;
pub use rolling::RollingReducer;
pub use summarizing::{
    build_summarization_prompt, format_summary_message, select_turns, SummarizingReducer,
};

use async_trait::async_trait;
use precis_core::{PrecisError, Transcript};
use tokio_util::sync::CancellationToken;

/// Trait for reducing a transcript that has grown past its budget.
#[async_trait]
pub trait MessageReducer: Send + Sync {
    /// Reduce `transcript` in place if it is over budget.
    ///
    /// Returns `Ok(true)` when the transcript was mutated and `Ok(false)`
    /// when it was already within budget. On error or cancellation the
    /// transcript is left untouched. Callers with no cancellation concern
    /// pass a fresh [`CancellationToken`].
    async fn reduce(
        &self,
        transcript: &mut Transcript,
        cancel: &CancellationToken,
    ) -> Result<bool, PrecisError>;
}
