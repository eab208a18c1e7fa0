use std::net::SocketAddr;

use clap::Parser;

/// Month day-count service exposing `/help` and `/ping`.
#[derive(Parser)]
#[command(name = "months-server", version, about = "Serves the help page and accepts pings")]
pub struct Cli {
    /// Address to listen on.
    #[arg(long, env = "MONTHS_BIND", default_value = "127.0.0.1:3000")]
    pub bind: SocketAddr,

    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
