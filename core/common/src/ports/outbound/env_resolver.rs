//! 環境変数解決 Outbound ポート
//!
//! 設定・ログのディレクトリを環境変数から解決する。
//! usecase はこの trait 経由でのみ環境変数にアクセスする。

use crate::domain::Dirs;
use crate::error::Error;

/// 環境変数解決抽象（Outbound ポート）
///
/// 実装は `common::adapter::StdEnvResolver` やテスト用のモックなど。
pub trait EnvResolver: Send + Sync {
    /// config / state ディレクトリを解決する
    ///
    /// 優先順位:
    /// 1. DEX_HOME（設定されていれば $DEX_HOME/config, $DEX_HOME/state）
    /// 2. $XDG_CONFIG_HOME/dex, $XDG_STATE_HOME/dex
    /// 3. $HOME/.config/dex, $HOME/.local/state/dex
    fn resolve_dirs(&self) -> Result<Dirs, Error>;

    /// API ベース URL の上書き（DEX_BASE_URL）
    fn base_url_override(&self) -> Option<String>;
}
