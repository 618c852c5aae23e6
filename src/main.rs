use std::{io::Write, path::PathBuf};

use anyhow::Context;
use clap::{Parser, ValueEnum};
use directories::ProjectDirs;
use rustyline::DefaultEditor;
use tempfile::NamedTempFile;

use crate::{
    cli::Cli,
    config::{read_config, Config},
    request::{
        inf::{self, PLATFORM_LINE_ENDING},
        params::{CryptoProvider, KeyLength},
        RequestDescriptor,
    },
    signer::{CertReq, Signer},
    utils::{exit_with_msg, read_common_name},
};

mod cli;
mod config;
mod request;
mod signer;
mod utils;

/// Resolved invocation parameters, after config defaults and interactive
/// entry have been applied.
pub struct RequestPlan {
    pub common_name: String,
    pub key_length: KeyLength,
    pub exportable: bool,
    pub provider: CryptoProvider,
    pub aliases: Option<String>,
    pub output_dir: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let app = ProjectDirs::from("com", "csrgen", "csrgen").unwrap();
    let cli = Cli::parse();

    let config = read_config(&app, &cli)?;
    let plan = create_plan(cli, &config)?;

    let descriptor = match RequestDescriptor::from_plan(&plan) {
        Ok(descriptor) => descriptor,
        Err(err) => exit_with_msg(&err.to_string()),
    };

    let signer = CertReq::new(config.signing.program.clone());
    let output_file = submit_request(&descriptor, &signer)?;
    println!(
        "certificate signing request written to {}",
        output_file.display()
    );

    Ok(())
}

fn create_plan(cli: Cli, config: &Config) -> anyhow::Result<RequestPlan> {
    let common_name = match cli.common_name {
        Some(name) => name,
        None if !cli.non_interactive => {
            let mut rl = DefaultEditor::new()?;
            read_common_name(&mut rl)?
        }
        None => exit_with_msg("no common name given and user input disabled"),
    };
    let key_length = match cli.key_length {
        Some(length) => length,
        None => KeyLength::from_bits(config.request.default_key_length)
            .with_context(|| {
                format!(
                    "{} is not a supported key length",
                    config.request.default_key_length
                )
            })?,
    };
    let provider = match cli.provider {
        Some(provider) => provider,
        None => CryptoProvider::from_str(&config.request.default_provider, true)
            .map_err(|_| {
                anyhow::anyhow!(
                    "{} is not a known provider",
                    config.request.default_provider
                )
            })?,
    };

    Ok(RequestPlan {
        common_name,
        key_length,
        exportable: cli.exportable,
        provider,
        aliases: cli.aliases,
        output_dir: cli.out,
    })
}

/// Renders the request document to a scratch file and hands it, together
/// with the final output path, to the signing utility. The scratch file is
/// removed when the handle drops.
fn submit_request(
    descriptor: &RequestDescriptor,
    signer: &impl Signer,
) -> anyhow::Result<PathBuf> {
    let document = inf::render(descriptor, PLATFORM_LINE_ENDING);
    let mut scratch = NamedTempFile::new()
        .context("can't create scratch file for the request document")?;
    scratch
        .write_all(document.as_bytes())
        .context("can't write the request document")?;
    scratch
        .flush()
        .context("can't flush the request document")?;

    signer
        .sign(scratch.path(), descriptor.output_file())
        .with_context(|| {
            format!("can't sign request for {}", descriptor.common_name())
        })?;

    Ok(descriptor.output_file().to_path_buf())
}
