use gridpad::error::{GridError, Result};
use std::io::{self, Write};

/// Print a prompt and read one line from stdin, with the trailing newline
/// stripped. Leading/trailing whitespace is preserved — values in particular
/// are taken verbatim. End of input is an I/O error; prompt loops propagate
/// it instead of spinning.
pub fn read_line(prompt: &str) -> Result<String> {
    print!("{}", prompt);
    io::stdout().flush().map_err(GridError::Io)?;

    let mut input = String::new();
    let bytes = io::stdin().read_line(&mut input).map_err(GridError::Io)?;
    if bytes == 0 {
        return Err(GridError::Io(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "end of input",
        )));
    }

    if input.ends_with('\n') {
        input.pop();
        if input.ends_with('\r') {
            input.pop();
        }
    }
    Ok(input)
}

pub fn read_trimmed(prompt: &str) -> Result<String> {
    Ok(read_line(prompt)?.trim().to_string())
}
