//! 生成設定
//!
//! デフォルト値は RubiX の結合テスト用クラスタ構成に合わせている。

use crate::model::VolumeMount;
use std::net::Ipv4Addr;
use std::path::PathBuf;

pub const DEFAULT_COMPOSE_VERSION: &str = "3.7";
pub const DEFAULT_NETWORK_NAME: &str = "network-rubix-build";
pub const DEFAULT_BASE_ADDRESS: Ipv4Addr = Ipv4Addr::new(172, 18, 8, 0);
pub const DEFAULT_COORDINATOR_NAME: &str = "rubix-master";
pub const DEFAULT_WORKER_PREFIX: &str = "rubix-worker";
pub const DEFAULT_ROLE_ARG: &str = "is_master";

/// 出力先ディレクトリ配下の compose ファイルの相対位置
pub const COMPOSE_DIR: &str = "docker";
pub const COMPOSE_FILE: &str = "docker-compose.yml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    pub compose_version: String,
    /// 接続先の外部ネットワーク名（事前に作成済みであること）
    pub network_name: String,
    /// コーディネーターのアドレス。ワーカーはこの次から順に割り当てる
    pub base_address: Ipv4Addr,
    pub coordinator_name: String,
    pub worker_prefix: String,
    pub build_context: PathBuf,
    /// 役割を渡すビルド引数名
    pub role_arg: String,
    pub volumes: Vec<VolumeMount>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            compose_version: DEFAULT_COMPOSE_VERSION.to_string(),
            network_name: DEFAULT_NETWORK_NAME.to_string(),
            base_address: DEFAULT_BASE_ADDRESS,
            coordinator_name: DEFAULT_COORDINATOR_NAME.to_string(),
            worker_prefix: DEFAULT_WORKER_PREFIX.to_string(),
            build_context: PathBuf::from("."),
            role_arg: DEFAULT_ROLE_ARG.to_string(),
            volumes: vec![
                VolumeMount::new("/tmp/rubix/tests", "/tmp/rubix/tests"),
                VolumeMount::new("/tmp/rubix/jars", "/usr/lib/rubix/lib"),
            ],
        }
    }
}

impl GeneratorConfig {
    pub fn with_network_name(mut self, name: impl Into<String>) -> Self {
        self.network_name = name.into();
        self
    }

    pub fn with_base_address(mut self, address: Ipv4Addr) -> Self {
        self.base_address = address;
        self
    }

    pub fn with_volumes(mut self, volumes: Vec<VolumeMount>) -> Self {
        self.volumes = volumes;
        self
    }

    /// ワーカーのサービス名（1始まり）
    pub fn worker_name(&self, index: usize) -> String {
        format!("{}-{}", self.worker_prefix, index)
    }
}
