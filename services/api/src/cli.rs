use crate::commands::{run_profile_score, run_roles, ProfileScoreArgs, RolesCommand};
use crate::server;
use clap::{Args, Parser, Subcommand};
use ekklesia::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Ekklesia",
    about = "Serve and inspect the church role hierarchy and member profiles",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Inspect the role hierarchy
    Roles {
        #[command(subcommand)]
        command: RolesCommand,
    },
    /// Work with member profiles
    Profile {
        #[command(subcommand)]
        command: ProfileCommand,
    },
}

#[derive(Subcommand, Debug)]
enum ProfileCommand {
    /// Score a profile stored as a JSON object
    Score(ProfileScoreArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Roles { command } => run_roles(command),
        Command::Profile {
            command: ProfileCommand::Score(args),
        } => run_profile_score(args),
    }
}
