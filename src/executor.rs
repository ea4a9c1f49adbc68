//! Executes one HTTP call per candidate on a fault-tolerant transport.

use std::time::Duration;

use http::Method;
use log::debug;
use reqwest::{Client, Url};

use crate::probe::{ProbeRequest, SENTINEL_STATUS};

// A realistic browser identity keeps trivially fingerprinting WAFs from
// rejecting every candidate outright.
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/112.0.0.0 Safari/537.36";

// Without a per-request deadline a single hanging connection would stall
// its batch forever; there is no other cancellation path.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Builds the client shared by every candidate. Certificate validation is
/// disabled on purpose: scheme swaps and raw-IP targets routinely present
/// self-signed or mismatched certificates, and this tool assumes an
/// authorized-testing context.
pub fn build_client() -> Result<Client, reqwest::Error> {
    Client::builder()
        .danger_accept_invalid_certs(true)
        .danger_accept_invalid_hostnames(true)
        .user_agent(USER_AGENT)
        .timeout(REQUEST_TIMEOUT)
        .build()
}

/// Performs exactly one HTTP call for one candidate and returns the
/// resolved status code. Every way a candidate can fail — unsupported
/// verb, unparseable URL, rejected header, transport error — comes back
/// as [`SENTINEL_STATUS`]; one broken candidate must never take the
/// batch down with it.
pub async fn execute(client: &Client, probe: &ProbeRequest) -> i32 {
    let method = match Method::from_bytes(probe.verb.as_bytes()) {
        Ok(method) => method,
        Err(err) => {
            debug!("invalid verb {:?}: {}", probe.verb, err);
            return SENTINEL_STATUS;
        }
    };

    let url = match Url::parse(&probe.url) {
        Ok(url) => url,
        Err(err) => {
            debug!("unparseable candidate url {:?}: {}", probe.url, err);
            return SENTINEL_STATUS;
        }
    };

    let mut request = client.request(method, url);
    for header in &probe.headers {
        // reqwest appends rather than replaces, so duplicate keys survive
        request = request.header(header.key.as_str(), header.value.as_str());
    }

    match request.send().await {
        Ok(response) => i32::from(response.status().as_u16()),
        Err(err) => {
            debug!("no response for {}: {}", probe.url, err);
            SENTINEL_STATUS
        }
    }
}

/// Inclusive status band the prescreen treats as "currently blocked, worth
/// probing". Anything else (the sentinel included) skips the URL.
pub fn prescreen_band(status: i32) -> bool {
    (400..=440).contains(&status)
}
