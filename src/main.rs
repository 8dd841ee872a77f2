//! Yare Sync - build and push yare.io bots
//!
//! コードをビルドして yare.io のゲームへアップロード

// coverage_nightly cfg が設定されている場合のみ coverage_attribute を有効化
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

use clap::Parser;

use yare_sync::adapter::config::Config;
use yare_sync::application::error::{exit_code_for, SyncError};
use yare_sync::driver::{Args, SyncWorkflow};

#[cfg_attr(coverage_nightly, coverage(off))]
#[tokio::main]
async fn main() {
    env_logger::init();

    let args = Args::parse();

    if let Err(e) = run(args).await {
        // SyncError は表示済み
        if e.downcast_ref::<SyncError>().is_none() {
            eprintln!("Error: {:#}", e);
        }
        log::debug!("Exiting after error: {:?}", e);
        std::process::exit(exit_code_for(&e));
    }
}

#[cfg_attr(coverage_nightly, coverage(off))]
async fn run(args: Args) -> anyhow::Result<()> {
    // Load configuration
    let config = Config::load_or_default(&args.config)?;

    // Create workflow with injected dependencies
    let workflow = SyncWorkflow::new(config)?;

    workflow.execute(args).await
}
