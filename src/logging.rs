//! ログ初期化
//!
//! `RUST_LOG` があればそれに従い、なければ warn（`-v` で debug）。

use env_logger::{Builder, Env};

pub const LOG_ENV: &str = "RUST_LOG";

pub fn default_filter(verbose: bool) -> &'static str {
    if verbose {
        "debug"
    } else {
        "warn"
    }
}

/// `var` を読むロガービルダー（環境変数が既定値より優先）
pub fn builder_from_env(var: &str, verbose: bool) -> Builder {
    Builder::from_env(Env::default().filter_or(var, default_filter(verbose)))
}

pub fn init(verbose: bool) {
    builder_from_env(LOG_ENV, verbose).init();
}
