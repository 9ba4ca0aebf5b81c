use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "rimefall", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate every catalog image as PNG.
    Generate(GenerateArgs),
    /// Print the built-in catalog and style constants as JSON.
    Catalog,
}

#[derive(Parser, Debug)]
struct GenerateArgs {
    /// Asset root; images land in `backgrounds/` and `textures/` below it.
    #[arg(long, default_value = "assets")]
    out: PathBuf,

    /// Run seed.
    #[arg(long, default_value_t = rimefall::DEFAULT_SEED)]
    seed: u64,

    /// Synthesize catalog entries in parallel.
    #[arg(long, default_value_t = false)]
    parallel: bool,

    /// Override rayon worker threads (parallel mode only).
    #[arg(long)]
    threads: Option<usize>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Generate(args) => cmd_generate(args),
        Command::Catalog => cmd_catalog(),
    }
}

fn cmd_generate(args: GenerateArgs) -> anyhow::Result<()> {
    let catalog = rimefall::CatalogDef::builtin();
    let style = rimefall::StyleConfig::default();
    let opts = rimefall::GenerateOpts {
        seed: args.seed,
        parallel: args.parallel,
        threads: args.threads,
    };
    let mut sink = rimefall::PngDirSink::new(&args.out);
    let report = rimefall::generate_catalog(&catalog, &style, &mut sink, &opts)
        .with_context(|| format!("generate assets into '{}'", args.out.display()))?;

    eprintln!(
        "wrote {} images under {}",
        report.written.len(),
        args.out.display()
    );
    if !report.is_clean() {
        for skipped in &report.skipped {
            eprintln!("skipped {}: {}", skipped.key, skipped.reason);
        }
        anyhow::bail!("{} catalog entries were skipped", report.skipped.len());
    }
    Ok(())
}

fn cmd_catalog() -> anyhow::Result<()> {
    let doc = serde_json::json!({
        "catalog": rimefall::CatalogDef::builtin(),
        "style": rimefall::StyleConfig::default(),
    });
    let text = serde_json::to_string_pretty(&doc).context("serialize catalog")?;
    println!("{text}");
    Ok(())
}
