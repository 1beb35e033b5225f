use arena_embed_common::EmbedConfig;
use arena_embed_common::telemetry::{self, TelemetryConfig};
use arena_embed_renderer::{BlockEmbed, EMBED_CSS, EmbedError, EmbedState, parse_block_id};
use miette::{IntoDiagnostic, Result};
use std::io::Read;
use std::path::PathBuf;
use url::Url;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(version, about = "Render Are.na blocks as self-contained HTML embeds", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Path to a TOML config file (api_base, site_base)
    #[arg(long, env = "ARENA_EMBED_CONFIG", global = true)]
    config: Option<PathBuf>,

    /// Override the content-metadata API base, e.g. https://api.are.na/v2
    #[arg(long, global = true)]
    api_base: Option<Url>,

    /// Override the site that block and profile links point at
    #[arg(long, global = true)]
    site_base: Option<Url>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Fetch a block and print the <arena-embed> element with its shadow root
    Render {
        /// Embed text containing a /block/<id> link (read from stdin if omitted)
        text: Option<String>,

        /// Print only the shadow root contents (stylesheet + card, or the message)
        #[arg(long)]
        fragment: bool,
    },
    /// Print the block id found in the text
    Parse {
        /// Embed text (read from stdin if omitted)
        text: Option<String>,
    },
    /// Print the embed stylesheet
    Stylesheet,
}

#[tokio::main]
async fn main() -> Result<()> {
    init_miette();
    telemetry::init(TelemetryConfig::from_env("arena-embed"));

    let cli = Cli::parse();
    let config = load_config(&cli)?;

    match cli.command {
        Commands::Render { text, fragment } => {
            let text = text_or_stdin(text)?;
            render(&config, &text, fragment).await;
        }
        Commands::Parse { text } => {
            let text = text_or_stdin(text)?;
            let id = parse_block_id(&text).ok_or_else(|| EmbedError::InvalidUrl {
                input: text.trim().to_string(),
            })?;
            println!("{id}");
        }
        Commands::Stylesheet => {
            print!("{}", EMBED_CSS.as_str());
        }
    }

    Ok(())
}

async fn render(config: &EmbedConfig, text: &str, fragment: bool) {
    let embed = BlockEmbed::from_config(config);
    let state = embed.load(text).await;
    match &state {
        EmbedState::Failed(kind) => tracing::debug!(%kind, "embed failed"),
        _ => tracing::debug!("embed rendered"),
    }

    if fragment {
        println!("{}", state.boundary_html());
    } else {
        println!("{}", state.host_html(text));
    }
}

fn load_config(cli: &Cli) -> Result<EmbedConfig> {
    let mut config = match &cli.config {
        Some(path) => EmbedConfig::load(path)?,
        None => EmbedConfig::default(),
    };
    if let Some(api_base) = &cli.api_base {
        config.api_base = api_base.clone();
    }
    if let Some(site_base) = &cli.site_base {
        config.site_base = site_base.clone();
    }
    config.validate()?;
    tracing::debug!(api_base = %config.api_base, site_base = %config.site_base, "config loaded");
    Ok(config)
}

fn text_or_stdin(text: Option<String>) -> Result<String> {
    match text {
        Some(text) => Ok(text),
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf).into_diagnostic()?;
            Ok(buf)
        }
    }
}

fn init_miette() {
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .with_cause_chain()
                .color(true)
                .context_lines(5)
                .tab_width(2)
                .break_words(true)
                .build(),
        )
    }))
    .expect("couldn't set the miette hook");
    miette::set_panic_hook();
}
