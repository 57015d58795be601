use derive_new::new;
use strum::Display;

use crate::routes::root::RouterConfig;

#[derive(clap::Parser)]
pub struct Cli {
    #[command(subcommand)]
    pub subcommand: CliSubcommands,
}

#[derive(clap::Subcommand, Debug, Clone)]
pub enum CliSubcommands {
    Serve(#[command(flatten)] ServeCommand),
}

#[derive(clap::Args, Debug, Clone)]
pub struct ServeCommand {
    #[command(flatten)]
    pub args: ServeArgs,
}

#[derive(clap::Args, Clone, Debug, new)]
pub struct ServeArgs {
    #[clap(
        long,
        short,
        default_value = "0.0.0.0:5000",
        env = "TENAUTH_SERVICE_LISTEN",
        help = "The address to listen on"
    )]
    pub listen: String,

    #[arg(
        long,
        short,
        env = "TENAUTH_SERVICE_CONFIG",
        help = "Tenant directory and security configuration, as a file path or inline JSON"
    )]
    pub config: Option<String>,

    #[arg(
        long,
        default_value = "file",
        value_enum,
        help = "How to interpret the --config value"
    )]
    pub config_type: ConfigType,

    #[arg(
        long,
        env = "JWT_SECRET",
        help = "Token signing secret, overrides the configuration value"
    )]
    pub jwt_secret: Option<String>,

    #[command(flatten)]
    pub routes: Option<RouterConfig>,
}

#[derive(
    clap::ValueEnum,
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Display,
)]
pub enum ConfigType {
    #[strum(serialize = "file")]
    File,
    #[strum(serialize = "inline")]
    Inline,
}
