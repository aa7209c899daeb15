use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "page-audit")]
#[command(about = "Audits a web page for broken links, keyword density, page speed and a rendered preview")]
#[command(version)]
pub struct Args {
    /// Path to a JSON configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Port to listen on (overrides the configuration file)
    #[arg(short, long)]
    pub port: Option<u16>,

    /// WebDriver server URL used for page previews
    #[arg(long)]
    pub webdriver_url: Option<String>,
}
