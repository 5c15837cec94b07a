//! Streaming asset downloads.

use async_trait::async_trait;
use futures::StreamExt;
use reqwest::Client;
use setup_terragrunt_core::tools::Downloader;
use setup_terragrunt_core::{Error, Result};
use std::path::{Path, PathBuf};
use tokio::io::AsyncWriteExt;
use tracing::debug;
use uuid::Uuid;

use crate::build_client;

/// Downloads assets into uniquely named files under a temporary directory.
pub struct HttpDownloader {
    client: Client,
    temp_dir: PathBuf,
}

impl HttpDownloader {
    /// Create a downloader writing into `temp_dir`.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the HTTP client cannot be initialized.
    pub fn new(temp_dir: PathBuf) -> Result<Self> {
        let client = build_client()?;
        Ok(Self { client, temp_dir })
    }

    /// Directory downloads are written to.
    #[must_use]
    pub fn temp_dir(&self) -> &Path {
        &self.temp_dir
    }

    async fn stream_to(&self, url: &str, dest: &Path) -> Result<()> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| Error::download_failed(url, e.to_string()))?;

        if !response.status().is_success() {
            return Err(Error::download_failed(
                url,
                format!("HTTP {}", response.status()),
            ));
        }

        let mut file = tokio::fs::File::create(dest)
            .await
            .map_err(|e| Error::download_failed(url, format!("failed to create file: {e}")))?;

        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(|e| Error::download_failed(url, e.to_string()))?;
            file.write_all(&chunk)
                .await
                .map_err(|e| Error::download_failed(url, format!("failed to write file: {e}")))?;
        }

        file.flush()
            .await
            .map_err(|e| Error::download_failed(url, format!("failed to flush file: {e}")))?;
        Ok(())
    }
}

#[async_trait]
impl Downloader for HttpDownloader {
    async fn download(&self, url: &str) -> Result<PathBuf> {
        tokio::fs::create_dir_all(&self.temp_dir)
            .await
            .map_err(|e| Error::filesystem_at("create", &self.temp_dir, e))?;

        let dest = self.temp_dir.join(Uuid::new_v4().to_string());
        debug!(%url, ?dest, "Downloading asset");

        if let Err(e) = self.stream_to(url, &dest).await {
            tokio::fs::remove_file(&dest).await.ok();
            return Err(e);
        }

        debug!(?dest, "Downloaded asset");
        Ok(dest)
    }
}
