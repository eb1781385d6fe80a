//! XTM Filter Template Guide
//!
//! カタログ読み込み・設定・描画・エクスポートを担うCLI側のモジュール。
//! 検索・ウィザード・集計のコアは xtm-template-common にある。

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod view;
pub mod chart;
pub mod diagram;
pub mod wizard;
pub mod check;
pub mod export;
