use crate::error::ShellError;

/// Makes an interrupt that lands while a command is running end the
/// process the same way `.exit` would. At the prompt, the line editor sees
/// Ctrl-C itself and the session loop handles it.
pub fn install_interrupt_handler(farewell: String) -> Result<(), ShellError> {
    ctrlc::set_handler(move || {
        println!();
        println!("{}", farewell);
        std::process::exit(0);
    })?;
    Ok(())
}
