//! モデル定義
//!
//! 生成する docker-compose.yml の構造をそのまま型で表現します。
//! シリアライズ専用で、既存ファイルの読み込みは行いません。

mod compose;
mod network;
mod service;
mod volume;

// Re-exports
pub use compose::*;
pub use network::*;
pub use service::*;
pub use volume::*;
