use std::path::PathBuf;

use clap::Parser;

use crate::app::{AppConfig, LogoSource};
use crate::encode::VersionPolicy;

#[derive(Parser, Debug)]
#[command(name = "qrcomposer", version)]
#[command(about = "Encode a link into a QR code with a logo and a caption, saved as <label>.png")]
pub struct Cli {
    /// Link to encode (prompted when omitted)
    #[arg(short, long)]
    pub url: Option<String>,

    /// Caption drawn under the code, also the output file name (prompted when omitted)
    #[arg(short, long)]
    pub label: Option<String>,

    /// Logo to place in the center (default: logo.png next to the program)
    #[arg(long, conflicts_with = "no_logo")]
    pub logo: Option<PathBuf>,

    /// Generate without a logo
    #[arg(long)]
    pub no_logo: bool,

    /// Save into this folder instead of asking
    #[arg(short, long)]
    pub out_dir: Option<PathBuf>,

    /// Grow past version 4 when the link does not fit
    #[arg(long)]
    pub fit: bool,

    /// Use the platform's folder picker and message boxes
    #[cfg(feature = "native-dialogs")]
    #[arg(long)]
    pub native: bool,

    /// Print debug logs
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn app_config(&self) -> AppConfig {
        let mut config = AppConfig::default();
        config.logo = match (&self.logo, self.no_logo) {
            (_, true) => LogoSource::Disabled,
            (Some(p), false) => LogoSource::Path(p.clone()),
            (None, false) => LogoSource::Bundled,
        };
        if self.fit {
            config.settings.policy = VersionPolicy::Fit;
        }
        config
    }
}
