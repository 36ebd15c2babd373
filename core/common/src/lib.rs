//! dex 共通ライブラリ
//!
//! PokeAPI からの取得・正規化・メモ化と、集計用データセットの組み立てを提供します。
//! 表示は持たない（`dex` コマンドなどの呼び出し側が担当）。

/// エラーハンドリング
pub mod error;

/// ドメイン型
pub mod domain;

/// Ports & Adapters
pub mod ports;
pub mod adapter;

/// PokeAPI のワイヤ形式と正規化
pub mod pokeapi;

/// プロセス存続期間のメモ化
pub mod cache;

/// 設定（config.json）
pub mod config;

/// Entity Fetcher / Population Loader
pub mod usecase;

/// データセットの集計
pub mod analysis;
