use crate::config;
use crate::err::Error;
use crate::http::run_simple_server;
use crate::texts::routes::{respond_to_request, State};

mod id;
mod lookup;
pub mod opt;
pub mod routes;

pub async fn main(options: opt::Options) -> Result<(), Error> {
    let opt::Options { listen, dir } = options;

    let addr = config::listen_addr(listen);
    log::info!("Serving text lookups from {} on {}", dir.display(), addr);

    run_simple_server(addr, State { dir }, respond_to_request).await?;

    Ok(())
}
