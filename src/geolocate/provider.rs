use crate::app_config::AppConfig;
use crate::domain::Coordinates;
use async_trait::async_trait;
use reqwest::Client;
use std::fmt::Debug;
use thiserror::Error;

/// The device-location seam. The production implementation asks an
/// IP-geolocation service; tests substitute their own.
#[async_trait]
pub trait LocationProvider: Debug + Send + Sync {
    async fn current_position(&self) -> Result<Coordinates, LocateError>;
}

#[derive(Error, Debug)]
pub enum LocateError {
    #[error("request error: {0}")]
    Request(#[from] reqwest::Error),
}

#[derive(Debug)]
pub struct IpLocationProvider {
    client: Client,
    url: String,
}

impl IpLocationProvider {
    pub fn new(config: &AppConfig) -> Result<Self, LocateError> {
        let client = Client::builder().timeout(config.locate().timeout()).build()?;

        Ok(IpLocationProvider {
            client,
            url: config.locate().url().to_string(),
        })
    }
}

#[async_trait]
impl LocationProvider for IpLocationProvider {
    async fn current_position(&self) -> Result<Coordinates, LocateError> {
        let response = self.client.get(&self.url).send().await?.error_for_status()?;
        let coordinates = response.json::<Coordinates>().await?;

        Ok(coordinates)
    }
}
