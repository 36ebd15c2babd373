//! dex のユースケース（図鑑カード・2 体比較・タイプ集計）

pub mod app;

pub use app::{Comparison, DexUseCase, TypeAnalysis};
