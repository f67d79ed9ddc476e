use std::sync::Arc;
use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use lazy_static::lazy_static;
use log::info;
use regex::Regex;
use reqwest::Client;
use scraper::{Html, Selector};

use super::ListingSource;
use crate::config::Config;
use crate::matcher::normalize;
use crate::models::listing::Listing;

const DEFAULT_BASE_URL: &str = "https://www.olx.pl";

lazy_static! {
    static ref PRICE_RE: Regex = Regex::new(r"(\d[\d\s\u{a0}]*)").unwrap();
    static ref ROOMS_RE: Regex = Regex::new(r"(?i)(\d+)[\s-]*pok").unwrap();
}

/// Scrapes the OLX rental search results for one city.
pub struct OlxScraper {
    client: Client,
    base_url: String,
}

impl OlxScraper {
    pub fn new(config: &Arc<Config>) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.scrape_timeout_seconds.into()))
            .user_agent("Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36")
            .build()
            .context("Failed to create OLX HTTP client")?;

        let base_url = config
            .olx_base_url
            .clone()
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        Ok(OlxScraper { client, base_url })
    }

    fn search_url(&self, city: &str) -> String {
        // OLX city slugs are the diacritic-free lowercase name.
        let slug = normalize(city).replace(' ', "-");
        format!(
            "{}/nieruchomosci/mieszkania/wynajem/{}/",
            self.base_url.trim_end_matches('/'),
            slug
        )
    }

    fn parse_listings(&self, html: &str, city: &str) -> Result<Vec<Listing>> {
        let document = Html::parse_document(html);

        let card_selector = Selector::parse(r#"div[data-cy="l-card"]"#)
            .map_err(|e| anyhow!("bad card selector: {e}"))?;
        let title_selector =
            Selector::parse("h6").map_err(|e| anyhow!("bad title selector: {e}"))?;
        let price_selector = Selector::parse(r#"p[data-testid="ad-price"]"#)
            .map_err(|e| anyhow!("bad price selector: {e}"))?;
        let link_selector = Selector::parse("a").map_err(|e| anyhow!("bad link selector: {e}"))?;

        let mut listings = Vec::new();

        for card in document.select(&card_selector) {
            let title = match card.select(&title_selector).next() {
                Some(node) => node.text().collect::<String>().trim().to_string(),
                None => continue,
            };

            let href = match card
                .select(&link_selector)
                .find_map(|a| a.value().attr("href"))
            {
                Some(href) => href,
                None => continue,
            };
            let link = if href.starts_with("http") {
                href.to_string()
            } else {
                format!("{}{}", self.base_url.trim_end_matches('/'), href)
            };

            let price_text = card
                .select(&price_selector)
                .next()
                .map(|node| node.text().collect::<String>())
                .unwrap_or_default();

            let price = match parse_price(&price_text) {
                Some(price) => price,
                None => continue,
            };

            let rooms = parse_rooms(&title).unwrap_or(1);

            listings.push(Listing {
                title,
                price,
                rooms,
                city: city.to_string(),
                link,
            });
        }

        Ok(listings)
    }
}

#[async_trait]
impl ListingSource for OlxScraper {
    async fn fetch(&self, city: &str) -> Result<Vec<Listing>> {
        let url = self.search_url(city);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .with_context(|| format!("Failed to reach OLX for city {city}"))?;

        if !response.status().is_success() {
            return Err(anyhow!(
                "OLX responded with status {} for {}",
                response.status(),
                url
            ));
        }

        let body = response.text().await.context("Failed to read OLX response body")?;
        let listings = self.parse_listings(&body, city)?;

        info!("Scraped {} listings from OLX for city {}", listings.len(), city);
        Ok(listings)
    }

    fn source_name(&self) -> &'static str {
        "olx"
    }
}

fn parse_price(text: &str) -> Option<i32> {
    let captured = PRICE_RE.captures(text)?.get(1)?.as_str();
    let digits: String = captured.chars().filter(|c| c.is_ascii_digit()).collect();
    digits.parse().ok()
}

/// Room count is not a structured field on OLX result cards; pull it out
/// of titles like "3 pokoje" / "2-pokojowe".
fn parse_rooms(title: &str) -> Option<i32> {
    ROOMS_RE
        .captures(title)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_price_with_spaces() {
        assert_eq!(parse_price("2 500 zł"), Some(2500));
        assert_eq!(parse_price("do negocjacji"), None);
    }

    #[test]
    fn parses_rooms_from_title() {
        assert_eq!(parse_rooms("Mieszkanie 3 pokoje, centrum"), Some(3));
        assert_eq!(parse_rooms("Kawalerka 2-pokojowe"), Some(2));
        assert_eq!(parse_rooms("Kawalerka na Mokotowie"), None);
    }
}
