use std::time::Duration;

use futures_util::StreamExt;
use newsroom_logging::{news_debug, news_info, news_warn};
use serde::de::DeserializeOwned;
use url::Url;

use crate::{ArticleRecord, FailureKind, FetchError, RecommendationRecord};

#[derive(Debug, Clone)]
pub struct FetchSettings {
    /// Backend root; endpoint paths are appended to it.
    pub base_url: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    pub max_bytes: u64,
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8000".to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
            max_bytes: 2 * 1024 * 1024,
        }
    }
}

/// The two read endpoints of the news backend.
#[async_trait::async_trait]
pub trait NewsApi: Send + Sync {
    async fn featured(&self, count: usize) -> Result<Vec<ArticleRecord>, FetchError>;

    async fn recommendations(
        &self,
        article_id: u64,
        count: usize,
    ) -> Result<Vec<RecommendationRecord>, FetchError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestNewsApi {
    settings: FetchSettings,
    /// An unusable base url fails every request instead of the constructor.
    base: Result<Url, FetchError>,
    client: reqwest::Client,
}

impl ReqwestNewsApi {
    pub fn new(settings: FetchSettings) -> Result<Self, FetchError> {
        let base = parse_base(&settings.base_url);
        if let Err(err) = &base {
            news_warn!("backend url {:?} rejected: {}", settings.base_url, err);
        }

        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| FetchError::new(FailureKind::Network, err.to_string()))?;

        Ok(Self {
            settings,
            base,
            client,
        })
    }

    /// `GET {base}/featured?num_articles={count}`
    pub fn featured_url(&self, count: usize) -> Result<Url, FetchError> {
        self.endpoint(&["featured"], ("num_articles", count))
    }

    /// `GET {base}/recommend/{article_id}?num_recs={count}`
    pub fn recommendations_url(
        &self,
        article_id: u64,
        count: usize,
    ) -> Result<Url, FetchError> {
        let id = article_id.to_string();
        self.endpoint(&["recommend", id.as_str()], ("num_recs", count))
    }

    fn endpoint(
        &self,
        segments: &[&str],
        (key, value): (&str, usize),
    ) -> Result<Url, FetchError> {
        let mut url = self.base.clone()?;
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url.query_pairs_mut().append_pair(key, &value.to_string());
        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, FetchError> {
        news_info!("GET {}", url);
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::new(
                FailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }

        if let Some(content_len) = response.content_length() {
            if content_len > self.settings.max_bytes {
                return Err(self.too_large(Some(content_len)));
            }
        }

        let mut bytes = Vec::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(map_reqwest_error)?;
            let next_len = bytes.len() as u64 + chunk.len() as u64;
            if next_len > self.settings.max_bytes {
                return Err(self.too_large(Some(next_len)));
            }
            bytes.extend_from_slice(&chunk);
        }
        news_debug!("{} answered with {} bytes", url, bytes.len());

        serde_json::from_slice(&bytes)
            .map_err(|err| FetchError::new(FailureKind::Decode, err.to_string()))
    }

    fn too_large(&self, actual: Option<u64>) -> FetchError {
        FetchError::new(
            FailureKind::TooLarge {
                max_bytes: self.settings.max_bytes,
                actual,
            },
            "response too large",
        )
    }
}

#[async_trait::async_trait]
impl NewsApi for ReqwestNewsApi {
    async fn featured(&self, count: usize) -> Result<Vec<ArticleRecord>, FetchError> {
        self.get_json(self.featured_url(count)?).await
    }

    async fn recommendations(
        &self,
        article_id: u64,
        count: usize,
    ) -> Result<Vec<RecommendationRecord>, FetchError> {
        self.get_json(self.recommendations_url(article_id, count)?)
            .await
    }
}

fn parse_base(raw: &str) -> Result<Url, FetchError> {
    let base =
        Url::parse(raw).map_err(|err| FetchError::new(FailureKind::InvalidUrl, err.to_string()))?;
    if base.cannot_be_a_base() {
        return Err(FetchError::new(
            FailureKind::InvalidUrl,
            format!("{base} cannot be used as a base url"),
        ));
    }
    Ok(base)
}

fn map_reqwest_error(err: reqwest::Error) -> FetchError {
    if err.is_timeout() {
        return FetchError::new(FailureKind::Timeout, err.to_string());
    }
    if err.is_decode() {
        return FetchError::new(FailureKind::Decode, err.to_string());
    }
    FetchError::new(FailureKind::Network, err.to_string())
}
