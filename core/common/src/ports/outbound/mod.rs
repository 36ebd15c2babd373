//! Outbound ポート: アプリが外界（HTTP・FS・環境変数・ログ）を使うための trait

pub mod env_resolver;
pub mod fs;
pub mod http_client;
pub mod log;

pub use env_resolver::EnvResolver;
pub use fs::FileSystem;
pub use http_client::HttpClient;
pub use log::{now_iso8601, Log, LogLevel, LogRecord};
