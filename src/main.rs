use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use std::path::PathBuf;

use docfix::document::default_output_path;
use docfix::rules::builtin;
use docfix::{ReportFormat, RevisionOptions, RuleSet, Settings, revise_file};

/// Rule-driven correction and citation tool for .docx articles
#[derive(Parser)]
#[command(
    name = "docfix",
    version,
    about = "Apply correction rules and Vancouver citations to a .docx article",
    long_about = "docfix rewrites a Word document paragraph by paragraph.\n\n\
                  Paragraphs matching a rule are replaced (with bold/size/alignment \
                  formatting and superscript citation markers); everything else, \
                  tables included, is copied through with its formatting."
)]
struct Cli {
    /// Input .docx file
    #[arg(required_unless_present_any = ["dump_rules", "init_config"])]
    input: Option<PathBuf>,

    /// Output file path (default: <input>_EDITED.docx)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Rules file (TOML); defaults to the configured rules, then the built-in sepsis set
    #[arg(short, long)]
    rules: Option<PathBuf>,

    /// Settings file (default: <config dir>/docfix/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Change log format
    #[arg(long, value_enum, default_value = "text")]
    report: ReportFormat,

    /// Apply the rules and print the change log without writing a document
    #[arg(long)]
    dry_run: bool,

    /// Print the active rule set as TOML and exit
    #[arg(long)]
    dump_rules: bool,

    /// Write a default settings file and exit
    #[arg(long)]
    init_config: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(format!("docfix={level}")),
    )
    .init();

    if cli.init_config {
        let written = match &cli.config {
            Some(path) => Settings::default().save_to(path).map(|()| Some(path.clone())),
            None => Settings::init_default(),
        }
        .context("Failed to write default settings")?;

        match written {
            Some(path) => println!("Settings written to {}", path.display()),
            None => println!("No configuration directory available on this system"),
        }
        return Ok(());
    }

    let settings = match &cli.config {
        Some(path) => Settings::load_from(path),
        None => Settings::load(),
    }
    .context("Failed to load settings")?;

    let rules = load_rules(&cli, &settings)?;

    if cli.dump_rules {
        print!("{}", rules.to_toml().context("Failed to render rules")?);
        return Ok(());
    }

    let Some(input) = cli.input.as_deref() else {
        anyhow::bail!("No input document given");
    };

    let output = if cli.dry_run {
        None
    } else {
        Some(cli.output.clone().unwrap_or_else(|| default_output_path(input)))
    };

    let options = RevisionOptions {
        output: output.clone(),
        settings,
    };
    let log = revise_file(input, &rules, &options)
        .with_context(|| format!("Failed to revise {}", input.display()))?;

    print!("{}", log.render(cli.report)?);
    if let Some(output) = output {
        if cli.report == ReportFormat::Text {
            println!("\nFinal document: {}", output.display());
        }
    }

    Ok(())
}

fn load_rules(cli: &Cli, settings: &Settings) -> Result<RuleSet> {
    if let Some(path) = cli.rules.as_ref().or(settings.rules.as_ref()) {
        info!("Using rules from {}", path.display());
        return RuleSet::load(path).with_context(|| format!("Failed to load rules {}", path.display()));
    }

    info!("Using built-in sepsis rules");
    builtin::sepsis().context("Built-in rules are invalid")
}
