// src/core/net.rs
//
// HTTP seam. One attempt per call: no retries, no timeout.

use std::{sync::Arc, time::Duration};

use reqwest::blocking::Client;

use crate::config::consts::USER_AGENT;
use super::error::FetchError;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        is_success(self.status)
    }
}

/// Any 2xx.
#[inline]
pub fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

/// What the page needs from the network. Tests swap in a scripted fake.
pub trait Transport: Send + Sync {
    /// GET `url`, returning status and body text.
    fn get(&self, url: &str) -> Result<HttpResponse, FetchError>;

    /// POST an empty body to `url`, returning only the status; the body is ignored.
    fn post(&self, url: &str) -> Result<u16, FetchError>;
}

impl<T: Transport + ?Sized> Transport for Arc<T> {
    fn get(&self, url: &str) -> Result<HttpResponse, FetchError> {
        (**self).get(url)
    }

    fn post(&self, url: &str) -> Result<u16, FetchError> {
        (**self).post(url)
    }
}

/// A transport the GUI can clone into rebuilt clients and hand to worker threads.
pub trait SharedTransport: Transport + Clone + 'static {}

impl<T: Transport + Clone + 'static> SharedTransport for T {}

/// Blocking reqwest client. Cheap to clone (shared connection pool).
#[derive(Clone, Debug)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new() -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(None::<Duration>)
            .build()?;
        Ok(Self { client })
    }
}

impl Transport for HttpTransport {
    fn get(&self, url: &str) -> Result<HttpResponse, FetchError> {
        let resp = self
            .client
            .get(url)
            .send()
            .map_err(|e| FetchError::transport(url, e))?;

        let status = resp.status().as_u16();
        let body = resp.text().map_err(|e| FetchError::transport(url, e))?;
        logd!("Net: GET {} → {} ({} bytes)", url, status, body.len());

        Ok(HttpResponse { status, body })
    }

    fn post(&self, url: &str) -> Result<u16, FetchError> {
        let resp = self
            .client
            .post(url)
            .body(Vec::new())
            .send()
            .map_err(|e| FetchError::transport(url, e))?;

        let status = resp.status().as_u16();
        logd!("Net: POST {} → {}", url, status);

        Ok(status)
    }
}
