//! # Build Repository Trait
//!
//! バンドラー呼び出しを抽象化

use anyhow::Result;
use async_trait::async_trait;
use std::path::PathBuf;

#[cfg(test)]
use mockall::automock;

/// ビルド要求
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildRequest {
    /// エントリポイントのファイル
    pub entrypoint: PathBuf,
    /// 出力を最小化するかどうか
    pub minify: bool,
}

/// ビルドリポジトリ
#[cfg_attr(test, automock)]
#[async_trait]
pub trait BuildRepository: Send + Sync {
    /// エントリポイントをビルドする
    ///
    /// # Returns
    ///
    /// 生成された成果物のパス
    ///
    /// # Errors
    ///
    /// バンドラーが失敗した場合にエラーを返す
    async fn build(&self, request: &BuildRequest) -> Result<PathBuf>;
}
