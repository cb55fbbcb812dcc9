use clap::Args;
use std::net::SocketAddr;
use std::path::PathBuf;

/// Serve identifier-keyed text files with a default fallback
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

    /// Directory holding <id>.txt files and the file.txt fallback
    #[arg(short, long, default_value = "files")]
    pub dir: PathBuf,
}
