use std::{sync::OnceLock, time::Duration};

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE};

use crate::constant::*;

const CLIENT_TIMEOUT: Duration = Duration::from_secs(30);

pub fn get_http_client() -> &'static reqwest::Client {
    static INSTANCE: OnceLock<reqwest::Client> = OnceLock::new();
    INSTANCE.get_or_init(|| {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(ACCEPT_HEADER));
        headers.insert(
            ACCEPT_LANGUAGE,
            HeaderValue::from_static(ACCEPT_LANGUAGE_HEADER),
        );

        reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .timeout(CLIENT_TIMEOUT)
            .build()
            .expect("Failed to build HTTP client")
    })
}
