//! reqwest (blocking) による HttpClient 実装

use crate::error::Error;
use crate::ports::outbound::HttpClient;
use std::time::Duration;

const DEFAULT_USER_AGENT: &str = concat!("dex/", env!("CARGO_PKG_VERSION"));

/// reqwest::blocking::Client を委譲する HttpClient 実装
///
/// Client は生成時に 1 度だけ作り、リクエスト間で接続を使い回す。
pub struct ReqwestHttpClient {
    client: reqwest::blocking::Client,
}

impl ReqwestHttpClient {
    /// 新しいクライアントを作成
    ///
    /// * `timeout` - None のとき reqwest の既定値に任せる
    /// * `user_agent` - None のとき "dex/<version>"
    pub fn new(timeout: Option<Duration>, user_agent: Option<&str>) -> Result<Self, Error> {
        let mut builder = reqwest::blocking::Client::builder()
            .user_agent(user_agent.unwrap_or(DEFAULT_USER_AGENT));
        if let Some(t) = timeout {
            builder = builder.timeout(t);
        }
        let client = builder
            .build()
            .map_err(|e| Error::http(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self { client })
    }
}

impl HttpClient for ReqwestHttpClient {
    fn get(&self, url: &str) -> Result<String, Error> {
        let response = self
            .client
            .get(url)
            .header("Accept", "application/json")
            .send()
            .map_err(|e| Error::http(format!("HTTP request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::status(status.as_u16(), url));
        }

        response
            .text()
            .map_err(|e| Error::http(format!("Failed to read response: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_with_defaults() {
        assert!(ReqwestHttpClient::new(None, None).is_ok());
    }

    #[test]
    fn test_new_with_timeout_and_agent() {
        let client = ReqwestHttpClient::new(Some(Duration::from_secs(5)), Some("dex-test/0"));
        assert!(client.is_ok());
    }

    #[test]
    fn test_invalid_url_is_http_error() {
        let client = ReqwestHttpClient::new(Some(Duration::from_millis(500)), None).unwrap();
        // URL として解釈できないので通信前に失敗する
        let err = client.get("not a url/pokemon/1").unwrap_err();
        assert!(matches!(err, Error::Http(_)));
    }
}
