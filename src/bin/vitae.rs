use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "vitae", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a content document to a standalone HTML page.
    Render(RenderArgs),
    /// Re-export the parsed content document as pretty-printed JSON.
    Export(ExportArgs),
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Input content document JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output HTML path.
    #[arg(long)]
    out: PathBuf,

    /// Language override (must be offered by the document).
    #[arg(long)]
    lang: Option<String>,

    /// Render reference cards beyond the display limit.
    #[arg(long, default_value_t = false)]
    expand_references: bool,
}

#[derive(Parser, Debug)]
struct ExportArgs {
    /// Input content document JSON.
    #[arg(long = "in")]
    in_path: PathBuf,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Export(args) => cmd_export(args),
    }
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let blob = std::fs::read_to_string(&args.in_path)
        .with_context(|| format!("read '{}'", args.in_path.display()))?;

    // A malformed document is not a CLI failure: the page degrades to its
    // static shell, matching the in-browser behavior.
    let html = match vitae::PageController::from_json(&blob) {
        Ok(mut controller) => {
            if let Some(lang) = &args.lang
                && !controller.set_language(lang)
            {
                eprintln!("language '{lang}' not offered by document, keeping default");
            }
            if args.expand_references {
                controller.toggle_references();
            }
            controller.render_page().to_html()
        }
        Err(err) => {
            eprintln!("content document rejected ({err}), writing static shell");
            vitae::static_shell()
        }
    };

    if let Some(parent) = args.out.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    std::fs::write(&args.out, html)
        .with_context(|| format!("write html '{}'", args.out.display()))?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_export(args: ExportArgs) -> anyhow::Result<()> {
    let blob = std::fs::read_to_string(&args.in_path)
        .with_context(|| format!("read '{}'", args.in_path.display()))?;
    let doc = vitae::ContentDocument::from_json(&blob)?;
    println!("{}", doc.to_json_pretty()?);
    Ok(())
}
