use clap::{Parser, Subcommand, ValueEnum};

mod commands;

#[derive(Parser)]
#[command(
    name = "balance",
    about = "Assign customers to customer success reps and report the busiest rep",
    version,
    propagate_version = true,
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a balancing round from a scenario file.
    ///
    /// Prints the id of the rep serving the most customers, or 0 when the
    /// top two reps are tied or no rep is available.
    Run {
        /// Scenario file (.toml or .json)
        #[arg(short, long)]
        path: String,
        /// Extra away rep ids, added to the scenario's own list
        #[arg(short, long, value_delimiter = ',')]
        away: Vec<u32>,
        /// Output format
        #[arg(short, long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },
    /// Write a sample scenario file
    Init {
        #[arg(short, long, default_value = "scenario.toml")]
        path: String,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// Winner id only
    Text,
    /// Full allocation report
    Json,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("balance=info".parse()?)
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run { path, away, format } => {
            let output = commands::run::run(&path, &away, format)?;
            println!("{output}");
            Ok(())
        }
        Commands::Init { path } => commands::init::init(&path),
    }
}
