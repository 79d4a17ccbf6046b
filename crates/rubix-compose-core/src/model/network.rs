//! ネットワーク定義

use serde::Serialize;
use std::net::Ipv4Addr;

/// サービスが接続するネットワークのキー（compose の `default`）
pub const DEFAULT_NETWORK_KEY: &str = "default";

/// 外部ネットワーク定義
///
/// ```yaml
/// default:
///   external:
///     name: network-rubix-build
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NetworkDefinition {
    pub external: ExternalNetwork,
}

/// 既存ネットワークへの参照（このツールでは作成しない）
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExternalNetwork {
    pub name: String,
}

impl NetworkDefinition {
    pub fn external(name: impl Into<String>) -> Self {
        Self {
            external: ExternalNetwork { name: name.into() },
        }
    }
}

/// サービスのネットワーク接続（固定IPv4アドレス）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NetworkAttachment {
    pub ipv4_address: Ipv4Addr,
}
