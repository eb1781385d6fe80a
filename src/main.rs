use clap::Parser;
use std::path::PathBuf;
use xtm_template_common::{aggregate, filter, Catalog, FilterQuery, FlowGraph, RuleTable};
use xtm_template_guide::{chart, check, cli, config, diagram, error, export, logging, view, wizard};
use cli::{Cli, Commands};
use config::Config;
use error::Result;

fn load_catalog(cli: &Cli, config: &Config) -> Result<Catalog> {
    let path = config.catalog_path(cli.catalog.as_deref());
    Ok(Catalog::load(&path)?)
}

fn run(cli: Cli) -> Result<()> {
    let config = Config::load()?;
    let rules = RuleTable::builtin();

    match &cli.command {
        Commands::List { search, category } => {
            let catalog = load_catalog(&cli, &config)?;
            let query = FilterQuery::new(search.as_str(), category.as_str());
            let filtered = filter(&catalog, &query);
            print!("{}", view::render_listing(&filtered));
        }

        Commands::Categories => {
            let catalog = load_catalog(&cli, &config)?;
            print!("{}", view::render_categories(&catalog.categories()));
        }

        Commands::Chart => {
            let catalog = load_catalog(&cli, &config)?;
            print!("{}", chart::render_chart(&aggregate(&catalog)));
        }

        Commands::Diagram { format, output } => {
            let catalog = load_catalog(&cli, &config)?;
            let graph = FlowGraph::from_aggregate(&aggregate(&catalog));
            let rendered = diagram::render(&graph, *format)?;

            match output {
                Some(path) => {
                    std::fs::write(path, rendered)?;
                    println!("✔ フロー図を出力 ({}): {}", format, path.display());
                }
                None => print!("{}", rendered),
            }
        }

        Commands::Wizard { file_type, answer } => {
            let catalog = load_catalog(&cli, &config)?;
            wizard::run_wizard(&catalog, &rules, file_type.as_deref(), answer.as_deref())?;
        }

        Commands::Export { search, category, format, output } => {
            println!("📥 xtm-guide - エクスポート\n");

            let catalog = load_catalog(&cli, &config)?;
            let query = FilterQuery::new(search.as_str(), category.as_str());
            let filtered = filter(&catalog, &query);
            println!("✔ {}件のテンプレートが対象\n", filtered.len());

            let output_dir = output.clone().unwrap_or_else(|| PathBuf::from("."));
            export::export_templates(&filtered, format, &output_dir, &config.export_stem)?;

            println!("\n✅ エクスポート完了");
        }

        Commands::Check => {
            let catalog = load_catalog(&cli, &config)?;
            let report = check::run_check(&catalog, &rules);
            print!("{}", report.render());
            report.ensure_clean()?;
        }

        Commands::Config { set_catalog, show } => {
            let mut config = config;

            if let Some(path) = set_catalog {
                config.set_catalog_path(path.clone())?;
                println!("✔ テンプレートJSONを設定しました: {}", path.display());
            }

            if *show {
                println!("設定:");
                println!("  設定ファイル: {}", Config::config_path()?.display());
                println!("  テンプレートJSON: {}", config.catalog_path(cli.catalog.as_deref()).display());
                println!("  エクスポート名: {}", config.export_stem);
            }
        }
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("✖ {}", e);
        std::process::exit(1);
    }
}
