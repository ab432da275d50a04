use crate::app_config::AppConfig;
use reqwest::Client;
use thiserror::Error;

// Nominatim's usage policy requires an identifying User-Agent.
const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

pub fn new_client(config: &AppConfig) -> Result<Client, NominatimError> {
    let client = Client::builder()
        .user_agent(USER_AGENT)
        .timeout(config.nominatim().timeout())
        .build()?;

    Ok(client)
}

#[derive(Error, Debug)]
pub enum NominatimError {
    #[error("request error: {0}")]
    Request(#[from] reqwest::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app_config::AppConfigBuilder;

    #[tokio::test]
    async fn new_client_sets_the_user_agent_header() -> Result<(), NominatimError> {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/")
            .with_status(200)
            .match_header("user-agent", USER_AGENT)
            .create_async()
            .await;

        let config = AppConfigBuilder::new().nominatim_url(server.url()).build();
        let client = new_client(&config)?;

        client.get(format!("{}/", server.url())).send().await?;

        // Verify that the call came in and that the header is set
        mock.assert_async().await;
        Ok(())
    }
}
