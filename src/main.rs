use std::path::PathBuf;

use clap::{Parser, crate_name, crate_version};

mod clipboard;
mod config;
mod error;
mod input;
mod shorten;
mod unicode;

use config::Config;
use error::FirelinkError;
use shorten::{ShortenRequest, SocialMetaTagInfo};

#[derive(Parser)]
#[command(
    name = crate_name!(),
    version = crate_version!(),
)]
/// Create short links with Firebase Dynamic Links
struct Cli {
    /// Config file (default is $HOME/.firelink.yaml)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Web API key for the link service
    #[arg(short, long, value_name = "KEY")]
    key: Option<String>,

    /// Domain URI prefix assigned to your short links
    #[arg(short, long, value_name = "PREFIX")]
    prefix: Option<String>,

    /// Long link to shorten; read from the clipboard when omitted
    #[arg(short, long, value_name = "URL")]
    link: Option<String>,

    /// Social preview title
    #[arg(short, long, value_name = "TEXT")]
    title: Option<String>,

    /// Social preview description
    #[arg(short, long, value_name = "TEXT")]
    description: Option<String>,

    /// Social preview image link
    #[arg(short = 'i', long = "imageLink", value_name = "URL")]
    image_link: Option<String>,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(short_link) => {
            println!("{}", short_link);
            std::process::exit(0);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

// The whole pipeline: resolve config, resolve and validate the long link,
// build and send the request, then render the short link's host in
// Unicode.  Every failure propagates here; main makes the one exit
// decision.
async fn run(cli: Cli) -> Result<String, FirelinkError> {
    let config = Config::load(cli.config.as_deref(), cli.key, cli.prefix)?;
    let long_link = input::long_link(cli.link.as_deref())?;

    let social = SocialMetaTagInfo::new(cli.title, cli.description, cli.image_link);
    let request = ShortenRequest::new(&config.domain_uri_prefix, &long_link, social);

    let short_link = shorten::shorten(&config, &request).await?;
    unicode::host_to_unicode(&short_link)
}
