use crate::domain::error::{SerialPickError, SerialPickResult};
use std::fmt::Display;
use std::io::{ErrorKind, Read, Write};
use std::num::IntErrorKind;
use tracing::debug;

/// Baud rates offered to the user, in menu order
pub static BAUD_RATES: [u32; 5] = [9600, 19200, 38400, 57600, 115200];

/// Print `items` as a numbered list starting at 1
pub fn render_menu<W: Write, T: Display>(output: &mut W, items: &[T]) -> SerialPickResult<()> {
    for (i, item) in items.iter().enumerate() {
        writeln!(output, "{}) {}", i + 1, item)?;
    }
    Ok(())
}

/// Map a 1-based menu answer to a 0-based index into a list of `len` items
pub fn parse_selection(input: &str, len: usize) -> SerialPickResult<usize> {
    let answer = input.trim();
    if len == 0 {
        return Err(SerialPickError::InvalidSelection("nothing to select from".to_string()));
    }

    let out_of_range =
        || SerialPickError::InvalidSelection(format!("{} is out of range 1-{}", answer, len));

    let choice: usize = answer.parse().map_err(|e: std::num::ParseIntError| match e.kind() {
        IntErrorKind::PosOverflow => out_of_range(),
        _ => SerialPickError::InvalidSelection(format!("'{}' is not a number", answer)),
    })?;

    if choice == 0 || choice > len {
        return Err(out_of_range());
    }

    Ok(choice - 1)
}

/// Show the menu, ask once, and return the chosen item
pub fn prompt_selection<'a, R, W, T>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
    items: &'a [T],
) -> SerialPickResult<&'a T>
where
    R: Read,
    W: Write,
    T: Display,
{
    render_menu(output, items)?;
    write!(output, "{}", prompt)?;
    output.flush()?;

    let line = read_answer(input)?
        .ok_or_else(|| SerialPickError::InvalidSelection("no input".to_string()))?;

    let index = parse_selection(&line, items.len())?;
    debug!("Selected item {} of {}", index + 1, items.len());
    Ok(&items[index])
}

/// Read one line a byte at a time.
///
/// Nothing past the newline is consumed, so input typed ahead stays in the
/// stream for the terminal program. Returns `None` at end of input.
fn read_answer<R: Read>(input: &mut R) -> SerialPickResult<Option<String>> {
    let mut line = Vec::new();
    let mut byte = [0u8; 1];
    let mut read_any = false;

    loop {
        match input.read(&mut byte) {
            Ok(0) => break,
            Ok(_) => {
                read_any = true;
                if byte[0] == b'\n' {
                    break;
                }
                line.push(byte[0]);
            }
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        }
    }

    if !read_any {
        return Ok(None);
    }
    Ok(Some(String::from_utf8_lossy(&line).into_owned()))
}
