// src/core/net.rs
// One blocking HTTPS GET.
//
// - Certificate validation is off; the source site's chain has been broken before.
// - No status gate: an error page is still handed to the parser, which then
//   finds no rows. The status is logged so that case is visible.
// - No retries, no explicit timeout (reqwest's client default applies).

use reqwest::blocking::Client;

use crate::config::consts::USER_AGENT;
use crate::error::{Error, Result};

pub fn http_get(url: &str) -> Result<Vec<u8>> {
    let client = Client::builder()
        .danger_accept_invalid_certs(true)
        .user_agent(USER_AGENT)
        .build()
        .map_err(|e| Error::http(url, e))?;

    logd!("GET {url}");
    let resp = client.get(url).send().map_err(|e| Error::http(url, e))?;

    let status = resp.status();
    if !status.is_success() {
        logw!("GET {url} returned {status}; parsing the body anyway");
    }

    let body = resp.bytes().map_err(|e| Error::http(url, e))?;
    logf!("Fetched {} bytes from {url} ({status})", body.len());
    Ok(body.to_vec())
}
