//! Blocking image download for built URLs.

use log::{debug, info, warn};
use once_cell::sync::Lazy;
use reqwest::blocking::Client;

use crate::{Error, Result};

/// Shared blocking HTTP client with a custom User-Agent. Building the
/// client once avoids the cost of TLS and connection pool setup for every
/// fetch.
pub(crate) static HTTP_CLIENT: Lazy<Client> = Lazy::new(|| {
    Client::builder()
        .user_agent("staticmap-url/0.1 (+https://github.com/example/staticmap-url)")
        .build()
        .expect("failed to build reqwest blocking client")
});

/// Raw image bytes plus the sniffed format.
#[derive(Debug, Clone)]
pub struct FetchedImage {
    pub bytes: Vec<u8>,
    pub format: image::ImageFormat,
}

impl FetchedImage {
    /// File extension matching the sniffed format.
    pub fn extension(&self) -> &'static str {
        self.format.extensions_str().first().copied().unwrap_or("bin")
    }
}

/// Fetch the image a built URL points at.
///
/// Transport failures and non-success statuses surface verbatim; nothing is
/// retried here. Content that is not a recognized image type is rejected
/// before any bytes reach the caller.
pub fn fetch_image(url: &str) -> Result<FetchedImage> {
    debug!("fetching {url}");
    let resp = HTTP_CLIENT.get(url).send()?;
    let status = resp.status();
    if !status.is_success() {
        warn!("image fetch failed: HTTP {status}");
        return Err(Error::UpstreamStatus(status));
    }
    let bytes = resp.bytes()?.to_vec();
    let format = sniff_format(&bytes)?;
    info!("fetched {} bytes ({format:?})", bytes.len());
    Ok(FetchedImage { bytes, format })
}

fn sniff_format(bytes: &[u8]) -> Result<image::ImageFormat> {
    image::guess_format(bytes).map_err(|_| {
        Error::InvalidImage(format!("{} bytes with no recognizable image magic", bytes.len()))
    })
}
