use crate::Error;
use log::info;
use reqwest::blocking::Client;
use std::time::Duration;

/// Downloads a CSV document over HTTP and returns its body as a string.
///
/// Non-success status codes are reported as errors rather than returning the
/// error page body.
pub fn fetch_csv_document(url: &str) -> Result<String, Error> {
    info!("Fetching CSV document from {}...", url);

    let client = Client::builder().timeout(Duration::from_secs(30)).build()?;

    let response = client.get(url).send()?.error_for_status()?;
    let csv_document = response.text()?;

    info!("Fetched {} bytes", csv_document.len());

    Ok(csv_document)
}
