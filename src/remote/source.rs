use async_trait::async_trait;

use crate::types::{Quote, QuoteError};

/// Remote quote service. Implementations map whatever the service speaks into
/// quotes; the merge logic only ever sees `Quote` values.
#[async_trait]
pub trait QuoteSource: Send + Sync {
    async fn fetch(&self) -> Result<Vec<Quote>, QuoteError>;
    async fn push(&self, quotes: &[Quote]) -> Result<(), QuoteError>;
}
