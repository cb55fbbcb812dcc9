use clap::Args;
use std::net::SocketAddr;
use std::path::PathBuf;

/// Serve a directory of static files, with a greeting at the root
#[derive(Args, Debug)]
pub struct Options {
    #[arg(
        help = "Socket address to listen on (--help for more)",
        long_help = r"Socket address to listen on:
    - defaults to 0.0.0.0:$PORT, or 0.0.0.0:10000 when PORT is unset
Examples:
    - 127.0.0.1:3000
    - 0.0.0.0:80
    - [2001:db8::1]:8080"
    )]
    pub listen: Option<SocketAddr>,

    /// Directory to serve files from
    #[arg(short, long, default_value = "public")]
    pub dir: PathBuf,
}
