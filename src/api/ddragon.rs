use crate::error::{AppError, Result};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, instrument};

use super::client::build_agent;
use super::endpoints;
use super::models::{DataDragonChampions, DataDragonItems};
use super::ReferenceSource;

/// Client for the public Data Dragon CDN. No key, no throttling.
pub struct DataDragonClient {
    agent: ureq::Agent,
}

impl DataDragonClient {
    pub fn new(timeout: Duration) -> Self {
        DataDragonClient {
            agent: build_agent(timeout),
        }
    }

    fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        fetch_json(&self.agent, url)
    }
}

/// Unauthenticated GET with the body parsed as JSON.
pub(super) fn fetch_json<T: DeserializeOwned>(agent: &ureq::Agent, url: &str) -> Result<T> {
    debug!(url, "GET");
    let body = agent
        .get(url)
        .call()
        .map_err(|e| match e {
            ureq::Error::Status(status, _) => AppError::Status {
                url: url.to_string(),
                status,
            },
            other => AppError::Http {
                url: url.to_string(),
                message: other.to_string(),
            },
        })?
        .into_string()
        .map_err(|e| AppError::Http {
            url: url.to_string(),
            message: e.to_string(),
        })?;

    serde_json::from_str(&body).map_err(|e| AppError::Json(format!("{}: {}", url, e)))
}

impl ReferenceSource for DataDragonClient {
    #[instrument(skip(self), level = "debug")]
    fn latest_version(&self) -> Result<String> {
        let versions: Vec<String> = self.get_json(&endpoints::versions_url())?;
        versions
            .into_iter()
            .next()
            .ok_or_else(|| AppError::Json("Data Dragon returned an empty version list".to_string()))
    }

    #[instrument(skip(self), level = "debug")]
    fn champions(&self, version: &str) -> Result<DataDragonChampions> {
        self.get_json(&endpoints::champions_url(version))
    }

    #[instrument(skip(self), level = "debug")]
    fn items(&self, version: &str) -> Result<DataDragonItems> {
        self.get_json(&endpoints::items_url(version))
    }
}
