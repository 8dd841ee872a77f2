//! Dialoguer Prompter
//!
//! Prompterの実装（dialoguer）

use anyhow::{Context, Result};
use async_trait::async_trait;
use dialoguer::{Confirm, Input, Password};

use crate::application::ports::Prompter;

/// 端末で対話入力を行う
///
/// dialoguer はブロッキングなので spawn_blocking で実行する
pub struct DialoguerPrompter;

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DialoguerPrompter {
    fn default() -> Self {
        Self::new()
    }
}

async fn blocking<T, F>(f: F) -> Result<T>
where
    T: Send + 'static,
    F: FnOnce() -> dialoguer::Result<T> + Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to spawn blocking task: {}", e))?
        .context("Failed to read input")
}

#[cfg_attr(coverage_nightly, coverage(off))]
#[async_trait]
impl Prompter for DialoguerPrompter {
    async fn input(&self, prompt: &str) -> Result<String> {
        let prompt = prompt.to_string();
        blocking(move || Input::<String>::new().with_prompt(prompt).interact_text()).await
    }

    async fn password(&self, prompt: &str) -> Result<String> {
        let prompt = prompt.to_string();
        blocking(move || Password::new().with_prompt(prompt).interact()).await
    }

    async fn confirm(&self, prompt: &str, default: bool) -> Result<bool> {
        let prompt = prompt.to_string();
        blocking(move || {
            Confirm::new()
                .with_prompt(prompt)
                .default(default)
                .interact()
        })
        .await
    }
}
