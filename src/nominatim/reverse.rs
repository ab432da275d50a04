use crate::app_config::AppConfig;
use crate::domain::Coordinates;
use crate::nominatim::NominatimError;
use reqwest::Client;
use serde::Deserialize;
use tracing::{info, instrument};

#[derive(Debug, Deserialize)]
struct ReverseResponse {
    #[serde(default)]
    display_name: String,
}

/// Reverse lookup: a human-readable address for the given coordinates.
#[instrument(skip(client, config))]
pub async fn reverse(client: &Client, config: &AppConfig, coordinates: Coordinates) -> Result<String, NominatimError> {
    let lat = coordinates.latitude.to_string();
    let lon = coordinates.longitude.to_string();

    info!("Resolving address for {},{}...", lat, lon);
    let response = client
        .get(format!("{}/reverse", config.nominatim().url()))
        .query(&[("lat", lat.as_str()), ("lon", lon.as_str()), ("format", "json")])
        .send()
        .await?
        .error_for_status()?;

    let reverse_response = response.json::<ReverseResponse>().await?;
    info!("Resolving address for {},{}... OK", lat, lon);

    Ok(reverse_response.display_name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app_config::AppConfigBuilder;
    use crate::nominatim::new_client;
    use mockito::Matcher;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn reverse_resolves_a_display_address() -> Result<(), NominatimError> {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/reverse")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("lat".into(), "52.37".into()),
                Matcher::UrlEncoded("lon".into(), "4.89".into()),
                Matcher::UrlEncoded("format".into(), "json".into()),
            ]))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(include_str!("../../tests/resources/reverse_response.json"))
            .create_async()
            .await;

        let config = AppConfigBuilder::new().nominatim_url(server.url()).build();
        let client = new_client(&config)?;

        let address = reverse(
            &client,
            &config,
            Coordinates {
                latitude: 52.37,
                longitude: 4.89,
            },
        )
        .await?;

        mock.assert_async().await;
        assert_eq!(address, "Dam, Centrum, Amsterdam, Noord-Holland, Netherlands");
        Ok(())
    }

    #[tokio::test]
    async fn reverse_returns_an_empty_address_when_the_field_is_missing() -> Result<(), NominatimError> {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/reverse")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{ "error": "Unable to geocode" }"#)
            .create_async()
            .await;

        let config = AppConfigBuilder::new().nominatim_url(server.url()).build();
        let client = new_client(&config)?;

        let address = reverse(&client, &config, Coordinates::default()).await?;

        assert_eq!(address, "");
        Ok(())
    }
}
