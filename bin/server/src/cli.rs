use std::net::SocketAddr;

use clap::Parser;

/// Command-line options for the tag-manager service.
#[derive(Parser, Debug)]
#[command(about = "Web service for configuring and registering NTAG 424 DNA tags")]
pub struct Cli {
    /// Address to bind the HTTP server
    #[arg(short, long, value_name = "ADDR", default_value = "127.0.0.1:3000")]
    pub listen_addr: SocketAddr,

    /// Keep registered tags in process memory instead of the configured
    /// database (development only)
    #[arg(long)]
    pub memory_store: bool,

    /// Debug level output
    #[arg(short, long)]
    pub verbose: bool,
}
