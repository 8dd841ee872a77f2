//! esbuild Build Repository
//!
//! BuildRepositoryの実装（esbuild コマンドを起動する）

use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use log::{debug, info};
use std::path::{Path, PathBuf};
use tokio::process::Command;

use crate::domain::repositories::build_repository::{BuildRepository, BuildRequest};

/// 成果物のファイル名
pub const BUNDLE_FILE_NAME: &str = "bundle.js";

/// esbuild を使うビルドリポジトリ
pub struct EsbuildRepository {
    program: String,
    output_dir: PathBuf,
}

impl EsbuildRepository {
    pub fn new(program: impl Into<String>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            output_dir: output_dir.into(),
        }
    }

    /// 成果物のパス
    pub fn output_path(&self) -> PathBuf {
        self.output_dir.join(BUNDLE_FILE_NAME)
    }

    /// esbuild に渡す引数
    fn args(entrypoint: &Path, outfile: &Path, minify: bool) -> Vec<String> {
        let mut args = vec![
            entrypoint.display().to_string(),
            "--bundle".to_string(),
            format!("--outfile={}", outfile.display()),
        ];
        if minify {
            args.push("--minify".to_string());
        }
        args
    }
}

#[async_trait]
impl BuildRepository for EsbuildRepository {
    async fn build(&self, request: &BuildRequest) -> Result<PathBuf> {
        let outfile = self.output_path();
        let args = Self::args(&request.entrypoint, &outfile, request.minify);
        debug!("Running {} {}", self.program, args.join(" "));

        let output = Command::new(&self.program)
            .args(&args)
            .output()
            .await
            .with_context(|| format!("Failed to run {}", self.program))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            bail!("{} exited with {}: {}", self.program, output.status, stderr.trim());
        }

        info!("Built {} -> {}", request.entrypoint.display(), outfile.display());

        Ok(outfile)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_with_minify() {
        let args = EsbuildRepository::args(
            Path::new("src/index.ts"),
            Path::new("dist/bundle.js"),
            true,
        );
        assert_eq!(
            args,
            vec![
                "src/index.ts",
                "--bundle",
                "--outfile=dist/bundle.js",
                "--minify"
            ]
        );
    }

    #[test]
    fn test_args_without_minify() {
        let args = EsbuildRepository::args(
            Path::new("src/index.ts"),
            Path::new("dist/bundle.js"),
            false,
        );
        assert!(!args.contains(&"--minify".to_string()));
    }

    #[test]
    fn test_output_path() {
        let repository = EsbuildRepository::new("esbuild", "dist");
        assert_eq!(repository.output_path(), PathBuf::from("dist/bundle.js"));
    }

    #[tokio::test]
    async fn test_missing_program_is_error() {
        let repository = EsbuildRepository::new("yare-sync-no-such-esbuild", "dist");
        let request = BuildRequest {
            entrypoint: PathBuf::from("src/index.ts"),
            minify: true,
        };

        let err = repository.build(&request).await.unwrap_err();
        assert!(err.to_string().contains("Failed to run"));
    }
}
