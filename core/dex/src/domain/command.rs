//! dex コマンドの enum（Command Pattern）
//!
//! 図鑑表示・2 体比較・タイプ集計の分岐を enum で明示する。

use common::domain::StatKind;

/// 引数なしの lookup で表示する図鑑番号
pub const DEFAULT_IDENTIFIER: &str = "1";

/// dex の実行モード
#[derive(Debug, Clone, PartialEq)]
pub enum DexCommand {
    /// ヘルプ表示
    Help,
    /// 1 体の図鑑カード
    Lookup { identifier: String },
    /// 2 体のステータス比較
    Compare { left: String, right: String },
    /// 第 1 タイプの集計（limit 未指定なら設定値）
    Types {
        stat: StatKind,
        limit: Option<usize>,
    },
}

impl DexCommand {
    /// ログ用のコマンド名
    pub fn name(&self) -> &'static str {
        match self {
            Self::Help => "help",
            Self::Lookup { .. } => "lookup",
            Self::Compare { .. } => "compare",
            Self::Types { .. } => "types",
        }
    }
}
