mod build_info;
mod logging;
mod version;

use clap::Parser;
use clap::Subcommand;

/// Diagnostic command-line front end for supervisor.
#[derive(Parser, Debug)]
#[command(name = "supervisor", version = build_info::VERSION)]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: CliCommand,
}

#[derive(Subcommand, Debug)]
enum CliCommand {
    /// show the version of supervisor
    #[command(long_about = "display the supervisor version")]
    Version {
        /// Extra positional arguments, accepted and ignored.
        #[arg(hide = true)]
        args: Vec<String>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose)?;

    match cli.command {
        CliCommand::Version { args: _ } => {
            tracing::debug!("dispatching version subcommand");
            version::run()
        }
    }
}
