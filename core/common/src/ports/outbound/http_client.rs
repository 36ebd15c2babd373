//! HTTP 取得 Outbound ポート
//!
//! usecase はこの trait 経由でのみリモート API にアクセスする。

use crate::error::Error;

/// HTTP GET 抽象（Outbound ポート）
///
/// 実装は `common::adapter::ReqwestHttpClient` やテスト用の `StubHttpClient` など。
pub trait HttpClient: Send + Sync {
    /// URL を GET し、レスポンス本文を返す
    ///
    /// # Returns
    /// * `Ok(String)` - 2xx のときの本文
    /// * `Err(Error::Status)` - 2xx 以外
    /// * `Err(Error::Http)` - 通信失敗・本文読み取り失敗
    fn get(&self, url: &str) -> Result<String, Error>;
}
