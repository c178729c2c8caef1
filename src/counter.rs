//! Remote download counter.
//!
//! Every exported card bumps a public hit counter. The counter is purely
//! informational: callers log failures and carry on.

use crate::client::build_http_client;
use crate::{CardConfig, Error, Result};
use reqwest::blocking::Client;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct CounterResponse {
    count: Option<u64>,
    value: Option<u64>,
}

pub struct DownloadCounter {
    client: Option<Client>,
    url: Option<String>,
}

impl DownloadCounter {
    pub fn new(config: &CardConfig) -> Result<Self> {
        match &config.counter_url {
            Some(url) => Ok(Self {
                client: Some(build_http_client(config)?),
                url: Some(url.clone()),
            }),
            None => Ok(Self::disabled()),
        }
    }

    /// A counter that never makes a request.
    pub fn disabled() -> Self {
        Self { client: None, url: None }
    }

    pub fn is_enabled(&self) -> bool {
        self.url.is_some()
    }

    /// Register one download; returns the new total when the service reports it.
    pub fn hit(&self) -> Result<Option<u64>> {
        let (client, url) = match (&self.client, &self.url) {
            (Some(c), Some(u)) => (c, u),
            _ => return Ok(None),
        };

        let res = client.get(url).send()?;
        let status = res.status();
        if !status.is_success() {
            return Err(Error::NetworkError(format!("counter returned {}", status)));
        }
        let body = res.text()?;
        let parsed: CounterResponse = serde_json::from_str(&body)?;
        let total = parsed.count.or(parsed.value);
        log::debug!("download counter now at {:?}", total);
        Ok(total)
    }
}
