use std::time::Duration;

use reqwest::Client;

const APP_USER_AGENT: &str = "lodestone-core/0.1.0";

/// Every request through this client is bounded; a mirror that never
/// answers surfaces as an ordinary transport error.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

pub fn build_http_client() -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(APP_USER_AGENT)
        .timeout(REQUEST_TIMEOUT)
        .build()
}
