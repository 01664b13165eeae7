use std::sync::Arc;

use async_trait::async_trait;
use precis_core::{PrecisError, Transcript};
use tokio_util::sync::CancellationToken;

use crate::MessageReducer;

/// Applies a sequence of reducers in order.
///
/// Returns `Ok(true)` if any stage reduced. A failing stage stops the
/// pipeline; reductions already applied by earlier stages remain.
pub struct PipelineReducer(pub Vec<Arc<dyn MessageReducer>>);

impl PipelineReducer {
    pub fn new(reducers: Vec<Arc<dyn MessageReducer>>) -> Self {
        Self(reducers)
    }
}

#[async_trait]
impl MessageReducer for PipelineReducer {
    async fn reduce(
        &self,
        transcript: &mut Transcript,
        cancel: &CancellationToken,
    ) -> Result<bool, PrecisError> {
        let mut reduced = false;
        for reducer in &self.0 {
            reduced |= reducer.reduce(transcript, cancel).await?;
        }
        Ok(reduced)
    }
}
