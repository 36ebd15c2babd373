//! エラーハンドリング
//!
//! 全レイヤー共通のエラー型。終了コードは sysexits に合わせる。

/// エラー型
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// 通信失敗（接続不可・本文読み取り失敗など）
    #[error("HTTP error: {0}")]
    Http(String),
    /// 2xx 以外のステータス
    #[error("HTTP status {status} from {url}")]
    Status { status: u16, url: String },
    /// JSON のパース失敗・必須フィールド欠落
    #[error("JSON error: {0}")]
    Json(String),
    #[error("I/O error: {0}")]
    Io(String),
    #[error("config error: {0}")]
    Config(String),
    #[error("environment error: {0}")]
    Env(String),
    /// 引数不正（usage を表示する）
    #[error("{0}")]
    InvalidArgument(String),
    /// 対象が見つからない
    #[error("{0}")]
    NotFound(String),
}

impl Error {
    pub fn http(msg: impl Into<String>) -> Self {
        Self::Http(msg.into())
    }

    pub fn status(status: u16, url: impl Into<String>) -> Self {
        Self::Status {
            status,
            url: url.into(),
        }
    }

    pub fn json(msg: impl Into<String>) -> Self {
        Self::Json(msg.into())
    }

    pub fn io_msg(msg: impl Into<String>) -> Self {
        Self::Io(msg.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn env(msg: impl Into<String>) -> Self {
        Self::Env(msg.into())
    }

    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    /// 終了コード（sysexits.h 準拠、NotFound のみ 1）
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::NotFound(_) => 1,
            Self::InvalidArgument(_) => 64,
            Self::Json(_) => 65,
            Self::Env(_) | Self::Config(_) => 78,
            Self::Http(_) | Self::Status { .. } | Self::Io(_) => 74,
        }
    }

    /// usage を表示すべきエラーか
    pub fn is_usage(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e.to_string())
    }
}
