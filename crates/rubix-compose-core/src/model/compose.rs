//! compose ファイル全体

use super::network::{DEFAULT_NETWORK_KEY, NetworkDefinition};
use super::service::ServiceDefinition;
use indexmap::IndexMap;
use serde::Serialize;

/// docker-compose.yml のルート
///
/// サービスは挿入順（コーディネーター、ワーカー1..N）で出力される。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComposeFile {
    pub version: String,
    pub networks: IndexMap<String, NetworkDefinition>,
    pub services: IndexMap<String, ServiceDefinition>,
}

impl ComposeFile {
    /// 外部ネットワークのみを持つ空のファイルを作成
    pub fn new(version: impl Into<String>, network_name: impl Into<String>) -> Self {
        let mut networks = IndexMap::new();
        networks.insert(
            DEFAULT_NETWORK_KEY.to_string(),
            NetworkDefinition::external(network_name),
        );
        Self {
            version: version.into(),
            networks,
            services: IndexMap::new(),
        }
    }

    /// サービスを追加する。同名のサービスが既にあれば置き換えて古い定義を返す
    pub fn add_service(
        &mut self,
        name: impl Into<String>,
        service: ServiceDefinition,
    ) -> Option<ServiceDefinition> {
        self.services.insert(name.into(), service)
    }

    pub fn service_count(&self) -> usize {
        self.services.len()
    }

    /// 接続先の外部ネットワーク名
    pub fn network_name(&self) -> Option<&str> {
        self.networks
            .get(DEFAULT_NETWORK_KEY)
            .map(|network| network.external.name.as_str())
    }
}
