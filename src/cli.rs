use std::path::PathBuf;

use clap::Parser;

use crate::request::params::{CryptoProvider, KeyLength};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Primary dns name the certificate is requested for. Read
    /// interactively when omitted.
    pub common_name: Option<String>,
    /// Rsa key length in bits.
    #[arg(long, short, value_enum)]
    pub key_length: Option<KeyLength>,
    /// Mark the private key as exportable.
    #[arg(long)]
    pub exportable: bool,
    /// Cryptographic service provider that generates the key.
    #[arg(long, short, value_enum)]
    pub provider: Option<CryptoProvider>,
    /// Comma separated list of additional dns names.
    #[arg(long, short)]
    pub aliases: Option<String>,
    /// Directory the finished request file is written to.
    #[arg(long, short)]
    pub out: PathBuf,
    /// the config file.
    #[arg(long, short)]
    pub config: Option<PathBuf>,
    #[arg(long)]
    pub non_interactive: bool,
}
