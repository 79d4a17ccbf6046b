//! compose ディスクリプタの生成
//!
//! コーディネーター1台とワーカーN台の定義をモデルとして組み立て、
//! YAMLにシリアライズして `<output_dir>/docker/docker-compose.yml` に書き出す。

use crate::address::AddressAllocator;
use crate::config::{COMPOSE_DIR, COMPOSE_FILE, GeneratorConfig};
use crate::error::{GenerateError, Result};
use crate::model::{BuildConfig, ComposeFile, ServiceDefinition, ServiceRole};
use crate::writer::write_descriptor;
use indexmap::IndexMap;
use std::path::{Path, PathBuf};

/// 出力先ディレクトリから compose ファイルのパスを求める
pub fn compose_file_path(output_dir: &Path) -> PathBuf {
    output_dir.join(COMPOSE_DIR).join(COMPOSE_FILE)
}

/// ワーカー数の文字列をパース（0以上の10進整数のみ）
pub fn parse_worker_count(input: &str) -> Result<usize> {
    let trimmed = input.trim();
    let invalid = |reason: &str| GenerateError::InvalidWorkerCount {
        input: input.to_string(),
        reason: reason.to_string(),
    };

    if trimmed.is_empty() {
        return Err(invalid("値が空です"));
    }
    if trimmed.starts_with('-') {
        return Err(invalid("負の値は指定できません"));
    }
    if !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid("0以上の整数を指定してください"));
    }
    trimmed
        .parse::<usize>()
        .map_err(|e| invalid(&e.to_string()))
}

#[derive(Debug, Clone, Default)]
pub struct Generator {
    config: GeneratorConfig,
}

impl Generator {
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// モデルを組み立てる（I/Oなし）
    pub fn build_descriptor(&self, worker_count: usize) -> Result<ComposeFile> {
        let allocator = AddressAllocator::new(self.config.base_address);
        allocator.ensure_capacity(worker_count)?;

        let mut compose =
            ComposeFile::new(&self.config.compose_version, &self.config.network_name);

        let roles = std::iter::once(ServiceRole::Coordinator)
            .chain((1..=worker_count).map(ServiceRole::Worker));
        for role in roles {
            let name = self.service_name(role);
            let address = allocator.address_for(role.index())?;
            tracing::debug!("Allocated {} for {}", address, name);

            compose.add_service(
                name,
                ServiceDefinition::new(
                    self.build_config(role),
                    self.config.volumes.clone(),
                    address,
                ),
            );
        }

        Ok(compose)
    }

    /// YAML文字列を生成
    pub fn render(&self, worker_count: usize) -> Result<String> {
        let compose = self.build_descriptor(worker_count)?;
        Ok(serde_yaml::to_string(&compose)?)
    }

    /// `<output_dir>/docker/docker-compose.yml` を生成し、そのパスを返す
    ///
    /// 既存ファイルは上書きする。モデル構築とシリアライズが成功するまで
    /// ファイルには触れない。
    pub fn generate(&self, worker_count: usize, output_dir: &Path) -> Result<PathBuf> {
        let contents = self.render(worker_count)?;
        let path = compose_file_path(output_dir);
        write_descriptor(&path, &contents)?;

        tracing::info!(
            "Generated {} services ({} workers) into {}",
            worker_count + 1,
            worker_count,
            path.display()
        );
        Ok(path)
    }

    fn service_name(&self, role: ServiceRole) -> String {
        match role {
            ServiceRole::Coordinator => self.config.coordinator_name.clone(),
            ServiceRole::Worker(index) => self.config.worker_name(index),
        }
    }

    fn build_config(&self, role: ServiceRole) -> BuildConfig {
        let mut args = IndexMap::new();
        args.insert(
            self.config.role_arg.clone(),
            role.as_build_arg().to_string(),
        );
        BuildConfig {
            context: self.config.build_context.clone(),
            args,
        }
    }
}

/// デフォルト設定でモデルを組み立てる
pub fn build_descriptor(worker_count: usize) -> Result<ComposeFile> {
    Generator::default().build_descriptor(worker_count)
}

/// デフォルト設定でYAMLを生成
pub fn render(worker_count: usize) -> Result<String> {
    Generator::default().render(worker_count)
}

/// デフォルト設定で compose ファイルを書き出す
pub fn generate(worker_count: usize, output_dir: &Path) -> Result<PathBuf> {
    Generator::default().generate(worker_count, output_dir)
}
