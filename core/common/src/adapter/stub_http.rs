//! テスト用: URL ごとに固定レスポンスを返す HttpClient 実装
//!
//! 呼び出し回数を記録するので、キャッシュヒット時に通信しないことを検証できる。

use crate::error::Error;
use crate::ports::outbound::HttpClient;
use std::collections::HashMap;
use std::sync::Mutex;

enum StubResponse {
    Body(String),
    Status(u16),
    Transport(String),
}

/// URL -> レスポンスの表を持つ HttpClient（テスト用）
///
/// 未登録の URL は 404 を返す。
#[derive(Default)]
pub struct StubHttpClient {
    routes: HashMap<String, StubResponse>,
    requests: Mutex<Vec<String>>,
}

impl StubHttpClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// 200 で本文を返す
    pub fn with_body(mut self, url: impl Into<String>, body: impl Into<String>) -> Self {
        self.routes.insert(url.into(), StubResponse::Body(body.into()));
        self
    }

    /// 指定ステータスを返す
    pub fn with_status(mut self, url: impl Into<String>, status: u16) -> Self {
        self.routes.insert(url.into(), StubResponse::Status(status));
        self
    }

    /// 通信失敗を返す
    pub fn with_transport_error(mut self, url: impl Into<String>, msg: impl Into<String>) -> Self {
        self.routes
            .insert(url.into(), StubResponse::Transport(msg.into()));
        self
    }

    /// これまでに GET された URL（呼び出し順）
    pub fn requests(&self) -> Vec<String> {
        self.requests
            .lock()
            .map(|r| r.clone())
            .unwrap_or_default()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().map(|r| r.len()).unwrap_or(0)
    }
}

impl HttpClient for StubHttpClient {
    fn get(&self, url: &str) -> Result<String, Error> {
        if let Ok(mut r) = self.requests.lock() {
            r.push(url.to_string());
        }
        match self.routes.get(url) {
            Some(StubResponse::Body(b)) => Ok(b.clone()),
            Some(StubResponse::Status(s)) => Err(Error::status(*s, url)),
            Some(StubResponse::Transport(m)) => Err(Error::http(m.clone())),
            None => Err(Error::status(404, url)),
        }
    }
}
