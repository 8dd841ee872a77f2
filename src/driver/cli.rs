//! CLI Argument Parsing
//!
//! CLIの引数解析

use clap::{Parser, Subcommand};

use crate::adapter::config::expand_path;
use crate::application::dto::sync_options::SyncOptions;

/// コードをビルドして yare.io のゲームへ送るCLI
#[derive(Parser, Debug, Clone)]
#[command(name = "yare-sync")]
#[command(about = "Build your yare.io bot and push it to your active games", long_about = None)]
pub struct Args {
    /// Config file path
    #[arg(short, long, global = true, default_value = "./yare-sync.json")]
    pub config: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Build and upload code to all active games
    Sync(SyncArgs),
    /// Delete the saved session
    Logout,
}

#[derive(clap::Args, Debug, Clone, PartialEq, Eq)]
pub struct SyncArgs {
    /// Re-sync whenever a file in the watch directory changes
    #[arg(short, long)]
    pub watch: bool,

    /// Do not minify the bundle
    #[arg(long)]
    pub no_minify: bool,

    /// Env file with YARE_LOGIN / YARE_PASSWORD
    #[arg(short, long, default_value = ".env")]
    pub env: String,

    /// Entrypoint file
    #[arg(short, long, default_value = "src/index.ts")]
    pub file: String,

    /// Directory to watch in watch mode
    #[arg(long, default_value = "src")]
    pub watch_dir: String,
}

impl SyncArgs {
    /// `~` を展開して [`SyncOptions`] に変換
    pub fn to_options(&self) -> SyncOptions {
        SyncOptions {
            watch: self.watch,
            watch_dir: expand_path(&self.watch_dir),
            no_minify: self.no_minify,
            file: expand_path(&self.file),
            env: expand_path(&self.env),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn sync_args(args: &Args) -> &SyncArgs {
        match &args.command {
            Command::Sync(sync) => sync,
            other => panic!("expected sync, got {:?}", other),
        }
    }

    #[test]
    fn test_sync_defaults() {
        let args = Args::parse_from(["yare-sync", "sync"]);
        assert_eq!(args.config, "./yare-sync.json");

        let sync = sync_args(&args);
        assert!(!sync.watch);
        assert!(!sync.no_minify);
        assert_eq!(sync.env, ".env");
        assert_eq!(sync.file, "src/index.ts");
        assert_eq!(sync.watch_dir, "src");
    }

    #[test]
    fn test_sync_all_options() {
        let args = Args::parse_from([
            "yare-sync",
            "sync",
            "--watch",
            "--no-minify",
            "--env",
            "prod.env",
            "--file",
            "bot/main.js",
            "--watch-dir",
            "bot",
        ]);
        let options = sync_args(&args).to_options();

        assert!(options.watch);
        assert!(options.no_minify);
        assert_eq!(options.env, PathBuf::from("prod.env"));
        assert_eq!(options.file, PathBuf::from("bot/main.js"));
        assert_eq!(options.watch_dir, PathBuf::from("bot"));
    }

    #[test]
    fn test_short_flags() {
        let args = Args::parse_from(["yare-sync", "sync", "-w", "-f", "a.ts", "-e", "x.env"]);
        let sync = sync_args(&args);
        assert!(sync.watch);
        assert_eq!(sync.file, "a.ts");
        assert_eq!(sync.env, "x.env");
    }

    #[test]
    fn test_logout() {
        let args = Args::parse_from(["yare-sync", "logout"]);
        assert_eq!(args.command, Command::Logout);
    }

    #[test]
    fn test_global_config_after_subcommand() {
        let args = Args::parse_from(["yare-sync", "logout", "-c", "/custom/config.json"]);
        assert_eq!(args.config, "/custom/config.json");
    }

    #[test]
    fn test_missing_subcommand_is_error() {
        assert!(Args::try_parse_from(["yare-sync"]).is_err());
    }
}
