use std::{env, io};

use clap::{CommandFactory, ValueEnum};
use clap_complete::{generate_to, Shell};

// The cli module pulls its value enums from crate::request::params, so
// mirror that path here before pasting it in.
mod request {
    pub mod params {
        include!("src/request/params.rs");
    }
}

include!("src/cli.rs");

fn main() -> Result<(), io::Error> {
    let out_dir = match env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(out_dir) => out_dir,
    };
    let mut cli_cmd = Cli::command();
    for &shell in Shell::value_variants() {
        generate_to(shell, &mut cli_cmd, "csrgen", &out_dir)?;
    }

    Ok(())
}
