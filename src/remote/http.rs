use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use url::Url;

use super::QuoteSource;
use crate::types::{Quote, QuoteError};

/// One element of the remote read payload. Only `title` is used.
#[derive(Debug, Clone, Deserialize)]
pub struct RemotePost {
    pub title: String,
}

pub fn map_remote_posts(posts: Vec<RemotePost>) -> Vec<Quote> {
    posts
        .into_iter()
        .map(|post| Quote::from_server(post.title))
        .collect()
}

/// JSON-over-HTTP source: GET for reads, POST of the full array for writes.
pub struct HttpQuoteSource {
    client: Client,
    fetch_url: Url,
    push_url: Url,
}

impl HttpQuoteSource {
    pub fn new(fetch_url: Url, push_url: Url, timeout: Duration) -> Result<Self, QuoteError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            fetch_url,
            push_url,
        })
    }
}

#[async_trait]
impl QuoteSource for HttpQuoteSource {
    async fn fetch(&self) -> Result<Vec<Quote>, QuoteError> {
        let response = self.client.get(self.fetch_url.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(QuoteError::Transport(format!(
                "GET {} returned {}",
                self.fetch_url, status
            )));
        }

        let posts: Vec<RemotePost> = response.json().await.map_err(|err| {
            QuoteError::Transport(format!("malformed response from {}: {}", self.fetch_url, err))
        })?;
        log::debug!("fetched {} posts from {}", posts.len(), self.fetch_url);
        Ok(map_remote_posts(posts))
    }

    async fn push(&self, quotes: &[Quote]) -> Result<(), QuoteError> {
        let response = self
            .client
            .post(self.push_url.clone())
            .json(quotes)
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            return Err(QuoteError::Transport(format!(
                "POST {} returned {}",
                self.push_url, status
            )));
        }
        Ok(())
    }
}
