//! Inbound ポート: ドライバ（CLI）がアプリを呼び出すインターフェース

use crate::domain::DexCommand;
use common::error::Error;
use std::io::Write;

/// コマンドを実行する Inbound ポート
///
/// main はこの trait を実装した型（Runner）の run を呼び出す。出力先は呼び出し側が渡す。
pub trait UseCaseRunner {
    fn run(&self, cmd: DexCommand, out: &mut dyn Write) -> Result<i32, Error>;
}
