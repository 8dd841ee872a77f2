//! # Prompter Port
//!
//! 対話入力を抽象化

use anyhow::Result;
use async_trait::async_trait;

#[cfg(test)]
use mockall::automock;

/// 対話入力
#[cfg_attr(test, automock)]
#[async_trait]
pub trait Prompter: Send + Sync {
    /// 1行入力
    async fn input(&self, prompt: &str) -> Result<String>;

    /// 伏せ字入力
    async fn password(&self, prompt: &str) -> Result<String>;

    /// はい/いいえ
    async fn confirm(&self, prompt: &str, default: bool) -> Result<bool>;
}
