//! Where the map's static documents come from.
//!
//! Both the role dataset and the background shapes are read-only documents
//! fetched once. A source is either a path on disk or an HTTP(S) URL.

use std::path::PathBuf;

use crate::error::{CareerMapError, CareerMapResult};

/// Default location of the role dataset, relative to the working directory
pub const DEFAULT_ROLES_PATH: &str = "assets/data/roles.json";

/// Default location of the background shape document
pub const DEFAULT_WORLD_PATH: &str = "assets/data/career-world.geojson";

/// A static document to read
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatasetSource {
    File(PathBuf),
    Http(String),
}

impl DatasetSource {
    /// `http://` and `https://` strings are URLs; everything else is a path.
    pub fn parse(source: &str) -> Self {
        let trimmed = source.trim();
        if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
            DatasetSource::Http(trimmed.to_string())
        } else {
            DatasetSource::File(PathBuf::from(trimmed))
        }
    }

    /// Like [`DatasetSource::parse`] but rejects blank input
    pub fn try_parse(source: &str) -> CareerMapResult<Self> {
        if source.trim().is_empty() {
            return Err(CareerMapError::InvalidSource("empty source".to_string()));
        }
        Ok(Self::parse(source))
    }

    /// Read the whole document as text
    pub async fn read_to_string(&self) -> CareerMapResult<String> {
        match self {
            DatasetSource::File(path) => Ok(tokio::fs::read_to_string(path).await?),
            DatasetSource::Http(url) => {
                let response = reqwest::get(url).await?;
                let status = response.status();
                if !status.is_success() {
                    return Err(CareerMapError::Status {
                        status: status.as_u16(),
                        url: url.clone(),
                    });
                }
                Ok(response.text().await?)
            }
        }
    }
}

impl std::fmt::Display for DatasetSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DatasetSource::File(path) => write!(f, "{}", path.display()),
            DatasetSource::Http(url) => f.write_str(url),
        }
    }
}

impl std::str::FromStr for DatasetSource {
    type Err = CareerMapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_parse(s)
    }
}

/// Resolved application configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CareerMapConfig {
    /// Role dataset
    pub roles: DatasetSource,
    /// Background shape document
    pub world: DatasetSource,
}

impl Default for CareerMapConfig {
    fn default() -> Self {
        Self {
            roles: DatasetSource::parse(DEFAULT_ROLES_PATH),
            world: DatasetSource::parse(DEFAULT_WORLD_PATH),
        }
    }
}
