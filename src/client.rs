//! HTTP verse source backed by the alquran.cloud editions endpoint.
//!
//! One blocking GET per request: the Arabic edition and the translation
//! edition are fetched together, sliced server-side with `offset`/`limit`.
//! Failures are reported as-is; there is no retry.

use crate::source::{decode_editions, Chapter, ChapterRequest, VerseSource, ARABIC_EDITION};
use crate::{CardConfig, Error, Result};
use reqwest::blocking::Client;
use std::time::Duration;
use url::Url;

/// Build the shared blocking client used by the verse source and the counter.
pub(crate) fn build_http_client(config: &CardConfig) -> Result<Client> {
    Client::builder()
        .timeout(Duration::from_millis(config.timeout_ms))
        .user_agent(config.user_agent.clone())
        .build()
        .map_err(|e| Error::ConfigError(format!("Failed to build HTTP client: {}", e)))
}

pub struct AlQuranClient {
    client: Client,
    base_url: Url,
}

impl AlQuranClient {
    pub fn new(config: &CardConfig) -> Result<Self> {
        let base_url = Url::parse(&config.api_base_url)
            .map_err(|e| Error::ConfigError(format!("bad API base URL {}: {}", config.api_base_url, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(Error::ConfigError(format!("bad API base URL {}", config.api_base_url)));
        }
        Ok(Self {
            client: build_http_client(config)?,
            base_url,
        })
    }

    /// `{base}/surah/{n}/editions/quran-uthmani,{translation}?offset=..&limit=..`
    pub fn editions_url(&self, request: &ChapterRequest) -> Url {
        let mut url = self.base_url.clone();
        let surah = request.surah.to_string();
        let editions = format!("{},{}", ARABIC_EDITION, request.language.edition());
        if let Ok(mut segments) = url.path_segments_mut() {
            segments
                .pop_if_empty()
                .extend(["surah", surah.as_str(), "editions", editions.as_str()]);
        }
        url.query_pairs_mut()
            .append_pair("offset", &request.range.offset().to_string())
            .append_pair("limit", &request.range.len().to_string());
        url
    }
}

impl VerseSource for AlQuranClient {
    fn fetch_chapter(&self, request: &ChapterRequest) -> Result<Chapter> {
        let url = self.editions_url(request);
        log::info!("fetching surah {} verses {} ({})", request.surah, request.range, request.language.edition());

        let res = self
            .client
            .get(url.as_str())
            .send()
            .map_err(|e| Error::NetworkError(format!("HTTP GET failed: {}", e)))?;

        let status = res.status();
        let body = res
            .text()
            .map_err(|e| Error::NetworkError(format!("Failed to read response body: {}", e)))?;
        if !status.is_success() {
            return Err(Error::NetworkError(format!("{} returned {}", url, status)));
        }

        let chapter = decode_editions(&body, request.language)?;
        // Validates the start bound against the real surah length.
        let range = request.range.clamp_to(chapter.total_ayahs)?;
        if chapter.verses.is_empty() {
            return Err(Error::MalformedResponse(format!("no verses returned for {}", range)));
        }
        log::debug!("received {} verses of {}", chapter.verses.len(), chapter.display_name());
        Ok(chapter)
    }
}
