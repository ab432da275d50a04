use crate::app_config::AppConfig;
use crate::domain::{Category, Coordinates, Place};
use crate::nominatim::NominatimError;
use reqwest::Client;
use tracing::{info, instrument};

/// Forward search: nearby places for a category around the given
/// coordinates. The result cap is enforced server-side through `limit`.
#[instrument(skip(client, config))]
pub async fn search(client: &Client, config: &AppConfig, category: Category, coordinates: Coordinates) -> Result<Vec<Place>, NominatimError> {
    let query = format!("{} near {},{}", category.keyword(), coordinates.latitude, coordinates.longitude);
    let limit = config.nominatim().limit().to_string();

    info!("Searching for '{}'...", query);
    let response = client
        .get(format!("{}/search", config.nominatim().url()))
        .query(&[
            ("q", query.as_str()),
            ("format", "jsonv2"),
            ("addressdetails", "1"),
            ("limit", limit.as_str()),
        ])
        .send()
        .await?
        .error_for_status()?;

    let places = response.json::<Vec<Place>>().await?;
    info!("Searching for '{}'... OK, {} found", query, places.len());

    Ok(places)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app_config::AppConfigBuilder;
    use crate::nominatim::new_client;
    use mockito::Matcher;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn search_queries_the_category_keyword_near_the_coordinates() -> Result<(), NominatimError> {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/search")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("q".into(), "toilets near 52.37,4.89".into()),
                Matcher::UrlEncoded("format".into(), "jsonv2".into()),
                Matcher::UrlEncoded("addressdetails".into(), "1".into()),
                Matcher::UrlEncoded("limit".into(), "20".into()),
            ]))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(include_str!("../../tests/resources/search_response.json"))
            .create_async()
            .await;

        let config = AppConfigBuilder::new().nominatim_url(server.url()).build();
        let client = new_client(&config)?;

        let places = search(
            &client,
            &config,
            Category::Toilets,
            Coordinates {
                latitude: 52.37,
                longitude: 4.89,
            },
        )
        .await?;

        mock.assert_async().await;
        assert_eq!(places.len(), 2);
        assert_eq!(places[0].display_name, "Toilets, Dam, Centrum, Amsterdam, Noord-Holland, Netherlands");
        assert_eq!(places[0].kind.as_deref(), Some("toilets"));
        Ok(())
    }

    #[tokio::test]
    async fn search_uses_the_drinking_water_keyword() -> Result<(), NominatimError> {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/search")
            .match_query(Matcher::UrlEncoded("q".into(), "drinking_water near 52.37,4.89".into()))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body("[]")
            .create_async()
            .await;

        let config = AppConfigBuilder::new().nominatim_url(server.url()).build();
        let client = new_client(&config)?;

        let places = search(
            &client,
            &config,
            Category::DrinkingWater,
            Coordinates {
                latitude: 52.37,
                longitude: 4.89,
            },
        )
        .await?;

        mock.assert_async().await;
        assert!(places.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn search_fails_on_a_server_error() -> Result<(), NominatimError> {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/search")
            .match_query(Matcher::Any)
            .with_status(500)
            .create_async()
            .await;

        let config = AppConfigBuilder::new().nominatim_url(server.url()).build();
        let client = new_client(&config)?;

        let result = search(&client, &config, Category::Toilets, Coordinates::default()).await;

        assert!(result.is_err());
        Ok(())
    }
}
