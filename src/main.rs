use clap::{Parser, Subcommand};
use folio::{config, generate, output};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "folio")]
#[command(about = "Static renderer for single-page developer portfolios")]
#[command(long_about = "\
Static renderer for single-page developer portfolios

One JSON document describes the whole page. Every section is optional and
anything left out falls back to a default, so an empty object still builds.

Site structure:

  site/
  ├── config.toml          # Theme, asset URLs, paths (optional)
  ├── index.html           # Custom shell with id=\"app\" (optional)
  └── data/
      ├── content.json     # Page content
      └── schema.json      # Enables required-field warnings (optional)

Sections, in page order:
  navbar, hero, about, experience, projects, skills, education, contact, footer
Any section with \"enabled\": false is left out.

Run 'folio gen-config' to generate a documented config.toml.")]
#[command(version)]
struct Cli {
    /// Site directory
    #[arg(long, default_value = ".", global = true)]
    source: PathBuf,

    /// Output directory
    #[arg(long, default_value = "dist", global = true)]
    output: PathBuf,

    /// Log progress to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render the portfolio to <output>/index.html
    Build,
    /// Load and validate config and content without writing anything
    Check,
    /// Print the rendered page fragment (without the document shell) to stdout
    Render,
    /// Print a stock config.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Command::Build => {
            println!("==> Building {}", cli.source.display());
            let options = generate::RenderOptions::current();
            let report = generate::generate(&cli.source, &cli.output, &options)?;
            output::print_generate_output(&report);
            println!("==> Build complete: {}", cli.output.display());
        }
        Command::Check => {
            println!("==> Checking {}", cli.source.display());
            let report = generate::check(&cli.source)?;
            output::print_check_output(&report);
            println!("==> Content is valid");
        }
        Command::Render => {
            let options = generate::RenderOptions::current();
            print!("{}", generate::render_fragment(&cli.source, &options)?);
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

/// `RUST_LOG` wins; otherwise warnings only, or info with `--verbose`.
fn init_logging(verbose: bool) {
    let level = if verbose { "info" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}
