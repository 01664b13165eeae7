use async_trait::async_trait;
use precis_core::{PrecisError, Transcript};
use tokio_util::sync::CancellationToken;

use crate::MessageReducer;

/// A reducer that never reduces.
pub struct NoOpReducer;

#[async_trait]
impl MessageReducer for NoOpReducer {
    async fn reduce(
        &self,
        _transcript: &mut Transcript,
        _cancel: &CancellationToken,
    ) -> Result<bool, PrecisError> {
        Ok(false)
    }
}
