use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

pub struct TestProject {
    pub root: TempDir,
}

impl TestProject {
    /// docker/ サブディレクトリ付きの出力先
    pub fn new() -> Self {
        let project = Self::without_docker_dir();
        fs::create_dir(project.root.path().join("docker")).unwrap();
        project
    }

    pub fn without_docker_dir() -> Self {
        let root = tempfile::tempdir().unwrap();
        Self { root }
    }

    pub fn path(&self) -> PathBuf {
        self.root.path().to_path_buf()
    }

    pub fn compose_path(&self) -> PathBuf {
        self.root.path().join("docker").join("docker-compose.yml")
    }

    pub fn read_compose(&self) -> String {
        fs::read_to_string(self.compose_path()).unwrap()
    }

    #[allow(dead_code)]
    pub fn compose_yaml(&self) -> serde_yaml::Value {
        serde_yaml::from_str(&self.read_compose()).unwrap()
    }

    #[allow(dead_code)]
    pub fn write_compose(&self, content: &str) {
        fs::write(self.compose_path(), content).unwrap();
    }
}
