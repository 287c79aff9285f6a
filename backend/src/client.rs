//! HTTP client side of the round-supply contract, used by the `report`
//! subcommand to pull a full history out of a running service.

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("requesting {url}: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("service reported status {status:?}")]
    Unhealthy { status: String },
}

pub struct StatsClient {
    base_url: String,
    http: reqwest::Client,
}

impl StatsClient {
    pub fn new<S>(base_url: S) -> Self
    where
        S: Into<String>,
    {
        Self {
            base_url: base_url.into(),
            http: reqwest::Client::new(),
        }
    }

    pub async fn health(&self) -> Result<common::HealthResponse, ClientError> {
        let url = format!("{}/api/health", self.base_url);
        let response: common::HealthResponse = self
            .http
            .get(&url)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|source| ClientError::Request { url: url.clone(), source })?
            .json()
            .await
            .map_err(|source| ClientError::Request { url, source })?;

        if response.status != "ok" {
            return Err(ClientError::Unhealthy {
                status: response.status,
            });
        }
        Ok(response)
    }

    /// One page of rounds, newest first. An empty vec means the history is
    /// exhausted at this offset.
    pub async fn fetch_rounds(
        &self,
        limit: usize,
        offset: usize,
    ) -> Result<Vec<common::Round>, ClientError> {
        let url = format!(
            "{}/api/stats?limit={}&offset={}",
            self.base_url, limit, offset
        );

        self.http
            .get(&url)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|source| ClientError::Request { url: url.clone(), source })?
            .json()
            .await
            .map_err(|source| ClientError::Request { url, source })
    }

    /// Pages through the whole history. Stops on the first page shorter than
    /// `page_size`; duplicate ids across pages (a round collected mid-pull
    /// shifts the offsets) are dropped.
    pub async fn fetch_all(&self, page_size: usize) -> Result<Vec<common::Round>, ClientError> {
        let mut all = Vec::new();
        let mut offset = 0;

        loop {
            let page = self.fetch_rounds(page_size, offset).await?;
            let last_page = page.len() < page_size;

            offset += page.len();
            merge_page(&mut all, page);

            if last_page {
                break;
            }
        }

        tracing::debug!("Fetched {} rounds from {}", all.len(), self.base_url);
        Ok(all)
    }
}

fn merge_page(all: &mut Vec<common::Round>, page: Vec<common::Round>) {
    let known: std::collections::HashSet<String> = all.iter().map(|r| r.id.clone()).collect();
    all.extend(page.into_iter().filter(|r| !known.contains(&r.id)));
}
