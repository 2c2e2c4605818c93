use clap::Parser;

/// HTTP service guarded by `Authorization: ApiKey <token>`
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Configuration file path
    #[arg(short, long)]
    pub config: Option<String>,

    /// Listen host, overrides the config file
    #[arg(long)]
    pub host: Option<String>,

    /// Listen port, overrides the config file
    #[arg(short, long)]
    pub port: Option<u16>,
}
