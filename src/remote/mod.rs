mod http;
mod source;
mod sync;

pub use http::{map_remote_posts, HttpQuoteSource, RemotePost};
pub use source::QuoteSource;
pub use sync::{RemoteSync, SyncOutcome};
