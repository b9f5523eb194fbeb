// src/api.rs
//
// Client for the scraping service:
//   GET  {base}/data    → JSON array of rows
//   POST {base}/scrape  → any 2xx means the job started

use crate::{
    config::consts::{DATA_PATH, SCRAPE_PATH},
    core::{FetchError, HttpTransport, Transport},
    data::{self, Row},
};

pub struct ApiClient<T = HttpTransport> {
    base: String,
    transport: T,
}

impl<T: Transport> ApiClient<T> {
    /// `base` may be empty or carry a trailing `/`; paths are joined as-is after trimming it.
    pub fn new(base: impl Into<String>, transport: T) -> Self {
        let mut base = base.into();
        while base.ends_with('/') {
            base.pop();
        }
        Self { base, transport }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn data_url(&self) -> String {
        join!(self.base.as_str(), DATA_PATH)
    }

    pub fn scrape_url(&self) -> String {
        join!(self.base.as_str(), SCRAPE_PATH)
    }

    /// One GET; non-2xx, transport and decode failures are all errors.
    pub fn fetch_rows(&self) -> Result<Vec<Row>, FetchError> {
        let url = self.data_url();
        let resp = self.transport.get(&url)?;
        if !resp.is_success() {
            return Err(FetchError::Status { url, status: resp.status });
        }
        Ok(data::decode_rows(&resp.body)?)
    }

    /// One POST with an empty body.
    pub fn start_scrape(&self) -> Result<(), FetchError> {
        let url = self.scrape_url();
        let status = self.transport.post(&url)?;
        if !crate::core::net::is_success(status) {
            return Err(FetchError::Status { url, status });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::HttpResponse;

    struct Unreachable;
    impl Transport for Unreachable {
        fn get(&self, url: &str) -> Result<HttpResponse, FetchError> {
            Err(FetchError::transport(url, "unreachable"))
        }
        fn post(&self, url: &str) -> Result<u16, FetchError> {
            Err(FetchError::transport(url, "unreachable"))
        }
    }

    #[test]
    fn urls_join_without_double_slash() {
        let api = ApiClient::new("http://host:8000/", Unreachable);
        assert_eq!(api.base(), "http://host:8000");
        assert_eq!(api.data_url(), "http://host:8000/data");
        assert_eq!(api.scrape_url(), "http://host:8000/scrape");
    }

    #[test]
    fn empty_base_gives_bare_paths() {
        let api = ApiClient::new("", Unreachable);
        assert_eq!(api.data_url(), "/data");
        assert_eq!(api.scrape_url(), "/scrape");
    }

    #[test]
    fn transport_error_carries_url() {
        let api = ApiClient::new("http://h", Unreachable);
        let err = api.fetch_rows().unwrap_err();
        assert!(err.to_string().contains("http://h/data"), "{err}");
    }
}
