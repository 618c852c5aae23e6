use std::process::exit;

use rustyline::DefaultEditor;

pub fn read_common_name(rl: &mut DefaultEditor) -> anyhow::Result<String> {
    Ok(rl.readline("Common Name > ")?)
}

pub fn exit_with_msg(message: &str) -> ! {
    eprintln!("{message}");
    exit(1)
}
