//! アダプター（外界の I/O を trait で抽象化した Outbound ポートの実装）
//!
//! usecase はポートの trait 経由でのみ HTTP・ファイル・環境変数に触れる。
//! 実装は標準実装（Std* / Reqwest*）やテスト用のスタブを注入する。

pub mod file_json_log;
#[cfg(any(test, feature = "test-util"))]
pub mod memory_log;
pub mod reqwest_http;
pub mod stderr_log;
pub mod std_env_resolver;
pub mod std_fs;
#[cfg(any(test, feature = "test-util"))]
pub mod stub_http;

pub use crate::ports::outbound::{EnvResolver, FileSystem, HttpClient, Log};
pub use file_json_log::{FileJsonLog, NoopLog};
#[cfg(any(test, feature = "test-util"))]
pub use memory_log::MemoryLog;
pub use reqwest_http::ReqwestHttpClient;
pub use stderr_log::{StderrLog, TeeLog};
pub use std_env_resolver::StdEnvResolver;
pub use std_fs::StdFileSystem;
#[cfg(any(test, feature = "test-util"))]
pub use stub_http::StubHttpClient;
