use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "xtm-guide")]
#[command(about = "XTM フィルタテンプレート選択ガイド", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// テンプレートJSONファイル（設定・環境変数より優先）
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// テンプレートを検索して一覧表示
    List {
        /// 検索語（名前・説明の部分一致、大文字小文字を区別しない）
        #[arg(short, long, default_value = "")]
        search: String,

        /// カテゴリ（完全一致、"All" で全カテゴリ）
        #[arg(short, long, default_value = "All")]
        category: String,
    },

    /// カテゴリ一覧を表示
    Categories,

    /// カテゴリ別件数をグラフ表示
    Chart,

    /// カテゴリ→テンプレートのフロー図を生成
    Diagram {
        /// 出力形式 (dot/mermaid/json)
        #[arg(short, long, default_value = "dot")]
        format: DiagramFormat,

        /// 出力ファイル（省略時は標準出力）
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// ファイル種別と質問から推奨テンプレートを案内
    Wizard {
        /// ファイル種別（省略時は選択肢を表示）
        #[arg(long)]
        file_type: Option<String>,

        /// 質問への回答（--file-type と併用、省略時は選択肢を表示）
        #[arg(long, requires = "file_type")]
        answer: Option<String>,
    },

    /// 検索結果をCSV/Excelに出力
    Export {
        /// 検索語
        #[arg(short, long, default_value = "")]
        search: String,

        /// カテゴリ
        #[arg(short, long, default_value = "All")]
        category: String,

        /// 出力形式 (csv/excel/both)
        #[arg(short, long, default_value = "both")]
        format: ExportFormat,

        /// 出力ファイル/ディレクトリ
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// ルール表とカタログの整合性チェック
    Check,

    /// 設定を表示/編集
    Config {
        /// テンプレートJSONのパスを設定
        #[arg(long)]
        set_catalog: Option<PathBuf>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Excel,
    #[default]
    Both,
}

impl std::str::FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "excel" | "xlsx" => Ok(ExportFormat::Excel),
            "both" => Ok(ExportFormat::Both),
            _ => Err(format!("Unknown format: {}. Use csv, excel, or both", s)),
        }
    }
}

/// フロー図の出力形式
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DiagramFormat {
    /// Graphviz DOT
    #[default]
    Dot,
    /// Mermaid flowchart
    Mermaid,
    /// ノード・エッジのJSON
    Json,
}

impl std::str::FromStr for DiagramFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "dot" | "graphviz" => Ok(DiagramFormat::Dot),
            "mermaid" | "mmd" => Ok(DiagramFormat::Mermaid),
            "json" => Ok(DiagramFormat::Json),
            _ => Err(format!("Unknown diagram format: {}. Use dot, mermaid, or json", s)),
        }
    }
}

impl std::fmt::Display for DiagramFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DiagramFormat::Dot => write!(f, "dot"),
            DiagramFormat::Mermaid => write!(f, "mermaid"),
            DiagramFormat::Json => write!(f, "json"),
        }
    }
}
