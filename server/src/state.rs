use std::sync::Arc;

use color_eyre::eyre::Context;
use recipes::Catalog;
use tracing::instrument;
use url::Url;

use crate::Result;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub base_url: Url,
}

impl AppConfig {
    #[instrument(name = "AppConfig::from_env")]
    pub fn from_env() -> Result<Self> {
        let base_url =
            std::env::var("APP_BASE_URL").unwrap_or_else(|_| "http://localhost:3000/".to_string());
        let base_url = Url::parse(&base_url).wrap_err("Invalid APP_BASE_URL not parsable")?;

        Ok(Self { base_url })
    }

    pub fn app_url(&self, path: &str) -> String {
        let mut url = self.base_url.clone();

        url.set_path(path);

        url.into()
    }
}

#[derive(Debug, Clone)]
pub struct VersionInfo {
    pub pkg_version: &'static str,
}

impl VersionInfo {
    pub(crate) fn from_build() -> Self {
        Self {
            pkg_version: env!("CARGO_PKG_VERSION"),
        }
    }
}

#[derive(Debug, Clone)]
pub(crate) struct AppState {
    pub app: AppConfig,
    pub versions: VersionInfo,
    pub catalog: Arc<Catalog>,
}

impl AppState {
    #[instrument(name = "AppState::from_env", err)]
    pub fn from_env() -> Result<Self> {
        let catalog = Catalog::from_embedded()?;
        let catalog = Arc::new(catalog);

        Ok(AppState {
            app: AppConfig::from_env()?,
            versions: VersionInfo::from_build(),
            catalog,
        })
    }
}
