//! HTTP league source with an on-disk response cache
//!
//! Every response body is stored as `<cache_dir>/<name>.cache` and reused on
//! later runs, so a season is downloaded once and replayed from disk after.

use crate::config::SourceSettings;
use crate::error::{RatingError, Result};
use crate::source::provider::LeagueSource;
use crate::source::schema::{MatchDetail, ScheduleResponse, StageData};
use crate::types::MatchId;
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// League source backed by the public schedule API
#[derive(Debug, Clone)]
pub struct CachedHttpSource {
    client: Client,
    schedule_url: String,
    match_url: String,
    cache_dir: PathBuf,
    offline: bool,
}

impl CachedHttpSource {
    pub fn new(settings: &SourceSettings) -> Result<Self> {
        let client = Client::builder()
            .timeout(settings.request_timeout())
            .build()
            .map_err(|e| fetch_error("client", format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            schedule_url: settings.schedule_url.clone(),
            match_url: settings.match_url.clone(),
            cache_dir: settings.cache_dir.clone(),
            offline: settings.offline,
        })
    }

    fn cache_path(&self, name: &str) -> PathBuf {
        self.cache_dir.join(format!("{}.cache", name))
    }

    /// Body of `url`, from the cache when present
    async fn get_text(&self, name: &str, url: &str) -> Result<String> {
        let cache = self.cache_path(name);

        if tokio::fs::try_exists(&cache).await.unwrap_or(false) {
            debug!("Reading {} from {}", name, cache.display());
            return tokio::fs::read_to_string(&cache)
                .await
                .map_err(|e| fetch_error(name, format!("Failed to read {}: {}", cache.display(), e)));
        }

        if self.offline {
            return Err(fetch_error(
                name,
                format!("{} is not cached and offline mode is enabled", cache.display()),
            ));
        }

        info!("Fetching {} from {}", name, url);
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| fetch_error(name, format!("Network error: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            return Err(fetch_error(name, format!("HTTP {}: {}", status, text)));
        }

        let body = response
            .text()
            .await
            .map_err(|e| fetch_error(name, format!("Failed to read body: {}", e)))?;

        if let Err(e) = self.write_cache(&cache, &body).await {
            warn!("Failed to cache {} at {}: {}", name, cache.display(), e);
        }

        Ok(body)
    }

    async fn write_cache(&self, cache: &Path, body: &str) -> std::io::Result<()> {
        tokio::fs::create_dir_all(&self.cache_dir).await?;
        tokio::fs::write(cache, body).await
    }

    async fn get_json<T: DeserializeOwned>(&self, name: &str, url: &str) -> Result<T> {
        let body = self.get_text(name, url).await?;
        serde_json::from_str(&body).map_err(|e| fetch_error(name, format!("Parse error: {}", e)))
    }
}

fn fetch_error(resource: &str, message: String) -> anyhow::Error {
    RatingError::UpstreamFetchFailed {
        resource: resource.to_string(),
        message,
    }
    .into()
}

#[async_trait]
impl LeagueSource for CachedHttpSource {
    async fn fetch_schedule(&self) -> Result<Vec<StageData>> {
        let schedule: ScheduleResponse = self.get_json("schedule", &self.schedule_url).await?;
        Ok(schedule.data.stages)
    }

    async fn fetch_match_detail(&self, match_id: MatchId) -> Result<MatchDetail> {
        let url = self.match_url.replace("{id}", &match_id.to_string());
        self.get_json(&format!("match.{}", match_id), &url).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn offline_source(dir: &Path) -> CachedHttpSource {
        let settings = SourceSettings {
            cache_dir: dir.to_path_buf(),
            offline: true,
            ..SourceSettings::default()
        };
        CachedHttpSource::new(&settings).unwrap()
    }

    #[tokio::test]
    async fn test_reads_cached_schedule() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("schedule.cache"),
            r#"{"data": {"stages": [{"id": 1, "name": "Preseason", "matches": []}]}}"#,
        )
        .unwrap();

        let source = offline_source(dir.path());
        let stages = source.fetch_schedule().await.unwrap();
        assert_eq!(stages.len(), 1);
        assert_eq!(stages[0].name, "Preseason");
    }

    #[tokio::test]
    async fn test_reads_cached_match_detail() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("match.42.cache"),
            r#"{"games": [{"id": 7, "number": 1, "points": [0, 2], "state": "CONCLUDED"}]}"#,
        )
        .unwrap();

        let source = offline_source(dir.path());
        let detail = source.fetch_match_detail(42).await.unwrap();
        assert_eq!(detail.games[0].points, vec![0, 2]);
    }

    #[tokio::test]
    async fn test_offline_cache_miss_fails() {
        let dir = tempfile::tempdir().unwrap();
        let source = offline_source(dir.path());

        let err = source.fetch_match_detail(42).await.unwrap_err();
        match err.downcast_ref::<RatingError>() {
            Some(RatingError::UpstreamFetchFailed { resource, .. }) => {
                assert_eq!(resource, "match.42")
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_corrupt_cache_is_a_fetch_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("schedule.cache"), "<html>").unwrap();

        let source = offline_source(dir.path());
        let err = source.fetch_schedule().await.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<RatingError>(),
            Some(RatingError::UpstreamFetchFailed { .. })
        ));
    }
}
