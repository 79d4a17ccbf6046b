use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("ワーカー数が不正です: '{input}'\n理由: {reason}")]
    InvalidWorkerCount { input: String, reason: String },

    #[error(
        "ワーカー数 {requested} はアドレス空間を超えています（最大 {capacity}）\n\nヒント:\n  • ベースアドレスの最終オクテットを小さくしてください\n  • ワーカー数を減らしてください"
    )]
    AddressSpaceExhausted { requested: usize, capacity: usize },

    #[error(
        "ファイル書き込みエラー: {path}\n理由: {source}\n\nヒント:\n  • 出力先に docker/ ディレクトリが存在するか確認してください"
    )]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("YAML生成エラー: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl GenerateError {
    /// プロセス終了コードに変換
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Io { .. } => 1,
            Self::InvalidWorkerCount { .. } => 2,
            Self::AddressSpaceExhausted { .. } => 3,
            Self::Yaml(_) => 4,
        }
    }
}

pub type Result<T> = std::result::Result<T, GenerateError>;
