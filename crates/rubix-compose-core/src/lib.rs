//! RubiX 結合テスト用 docker-compose.yml ジェネレーター
//!
//! master 1台と worker N台を外部ネットワーク上の固定IPv4アドレスに
//! 配置する compose ディスクリプタを生成します。

pub mod address;
pub mod config;
pub mod error;
pub mod generator;
pub mod model;
pub mod writer;

pub use address::AddressAllocator;
pub use config::GeneratorConfig;
pub use error::{GenerateError, Result};
pub use generator::{
    Generator, build_descriptor, compose_file_path, generate, parse_worker_count, render,
};
pub use model::*;
