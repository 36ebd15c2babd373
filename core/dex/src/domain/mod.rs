//! dex 固有のドメイン型

pub mod command;

pub use command::DexCommand;
