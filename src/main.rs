use fileserve::{assets, err, opt, texts};

#[tokio::main]
async fn main() -> Result<(), err::DisplayError> {
    let opt::Options { verbose, command } = clap::Parser::parse();

    env_logger::Builder::new()
        .filter_level(match verbose {
            0 => log::LevelFilter::Info,
            1 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        })
        .init();

    match command {
        opt::Command::Assets(options) => assets::main(options).await?,
        opt::Command::Texts(options) => texts::main(options).await?,
    }

    Ok(())
}
