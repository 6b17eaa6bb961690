//! Reading the dataset document from disk or over HTTP.

use std::fmt;
use std::path::PathBuf;

use super::schema::{parse_dataset, DatasetReport};
use super::{DatasetError, DatasetResult};

/// Where the dataset document lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatasetSource {
    /// Local file, relative paths resolve against the working directory.
    File(PathBuf),
    /// `http://` or `https://` URL.
    Url(String),
}

impl DatasetSource {
    /// Interpret a configured location.
    pub fn from_setting(location: &str) -> Self {
        let trimmed = location.trim();
        if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
            DatasetSource::Url(trimmed.to_string())
        } else {
            DatasetSource::File(PathBuf::from(trimmed))
        }
    }
}

impl fmt::Display for DatasetSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DatasetSource::File(path) => write!(f, "{}", path.display()),
            DatasetSource::Url(url) => write!(f, "{}", url),
        }
    }
}

/// Load and validate the dataset.
pub async fn load_dataset(
    source: &DatasetSource,
    public_prefix: &str,
) -> DatasetResult<DatasetReport> {
    tracing::info!("Loading dataset from {}", source);

    let content = match source {
        DatasetSource::File(path) => {
            tokio::fs::read_to_string(path)
                .await
                .map_err(|source| DatasetError::Read {
                    path: path.clone(),
                    source,
                })?
        }
        DatasetSource::Url(url) => fetch(url).await?,
    };

    let report = parse_dataset(&content, public_prefix)?;
    tracing::info!("{} from {}", report.summary(), source);
    Ok(report)
}

async fn fetch(url: &str) -> DatasetResult<String> {
    let fetch_err = |source: reqwest::Error| DatasetError::Fetch {
        url: url.to_string(),
        source,
    };

    let response = reqwest::get(url).await.map_err(fetch_err)?;
    let status = response.status();
    if !status.is_success() {
        return Err(DatasetError::Status {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }
    response.text().await.map_err(fetch_err)
}
