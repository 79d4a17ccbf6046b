//! サービス定義

use super::network::{DEFAULT_NETWORK_KEY, NetworkAttachment};
use super::volume::VolumeMount;
use indexmap::IndexMap;
use serde::Serialize;
use std::net::Ipv4Addr;
use std::path::PathBuf;

/// サービスの役割
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceRole {
    /// コーディネーター（RubiX master）
    Coordinator,
    /// ワーカー（1始まりのインデックス）
    Worker(usize),
}

impl ServiceRole {
    /// アドレス割り当てに使うインデックス（コーディネーターは0）
    pub fn index(&self) -> usize {
        match self {
            Self::Coordinator => 0,
            Self::Worker(index) => *index,
        }
    }

    pub fn is_coordinator(&self) -> bool {
        matches!(self, Self::Coordinator)
    }

    /// ビルド引数に渡す値（"true" / "false"）
    pub fn as_build_arg(&self) -> &'static str {
        if self.is_coordinator() { "true" } else { "false" }
    }
}

/// ビルド設定
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BuildConfig {
    /// ビルドコンテキストのパス
    pub context: PathBuf,
    /// ビルド引数
    pub args: IndexMap<String, String>,
}

/// サービス定義
///
/// ```yaml
/// rubix-worker-1:
///   build:
///     context: .
///     args:
///       is_master: 'false'
///   volumes:
///     - /tmp/rubix/tests:/tmp/rubix/tests
///   networks:
///     default:
///       ipv4_address: 172.18.8.1
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServiceDefinition {
    pub build: BuildConfig,
    pub volumes: Vec<VolumeMount>,
    pub networks: IndexMap<String, NetworkAttachment>,
}

impl ServiceDefinition {
    pub fn new(build: BuildConfig, volumes: Vec<VolumeMount>, address: Ipv4Addr) -> Self {
        let mut networks = IndexMap::new();
        networks.insert(
            DEFAULT_NETWORK_KEY.to_string(),
            NetworkAttachment {
                ipv4_address: address,
            },
        );
        Self {
            build,
            volumes,
            networks,
        }
    }

    /// `default` ネットワーク上のアドレス
    pub fn address(&self) -> Option<Ipv4Addr> {
        self.networks
            .get(DEFAULT_NETWORK_KEY)
            .map(|attachment| attachment.ipv4_address)
    }
}
