use fileman::error::ShellError;
use fileman::flags::Flags;
use fileman::shell::Shell;
use fileman::{logging, system};
use std::env;
use std::process::ExitCode;

fn main() -> ExitCode {
    match start() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("fileman: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn start() -> Result<(), ShellError> {
    let mut flags = Flags::new();
    let args: Vec<String> = env::args().skip(1).collect();
    flags.parse(&args)?;

    logging::init(flags.is_set("debug"));

    if flags.is_set("help") {
        flags.print_help();
        return Ok(());
    }

    if flags.is_set("version") {
        println!("fileman {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let mut shell = Shell::from_flags(&flags)?;
    system::signal::install_interrupt_handler(shell.farewell_message())?;
    shell.run();
    Ok(())
}
