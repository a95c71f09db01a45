use catalog_cli::{commands, SourceArgs};
use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(flatten)]
    source: SourceArgs,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print every loaded entry
    List {
        #[arg(long)]
        json: bool,
    },
    /// Print entries whose name contains TERM (case-insensitive)
    Search {
        term: String,
        #[arg(long)]
        json: bool,
    },
    /// Print the detail card of one entry, by id or name
    Show {
        query: String,
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::WARN
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("default subscriber");

    let mut out = std::io::stdout().lock();
    match cli.command {
        Commands::List { json } => commands::cmd_list(&cli.source, json, &mut out).await?,
        Commands::Search { term, json } => {
            commands::cmd_search(&cli.source, &term, json, &mut out).await?
        }
        Commands::Show { query, json } => {
            commands::cmd_show(&cli.source, &query, json, &mut out).await?
        }
    }

    Ok(())
}
