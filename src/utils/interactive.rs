use std::io::{self, BufRead, Write};

use crate::utils::error::AppResult;
use crate::utils::output::OutputStyle;

pub fn prompt_input(prompt: &str) -> AppResult<Option<String>> {
    read_line_from(&mut io::stdin().lock(), &mut io::stdout(), prompt)
}

/// Ask a yes/no question. An empty answer takes `default`, end of input is "no".
pub fn prompt_yes_no(prompt: &str, default: bool) -> AppResult<bool> {
    let hint = if default { "[Y/n]" } else { "[y/N]" };
    loop {
        let Some(input) = prompt_input(&format!("{} {}: ", prompt, hint))? else {
            return Ok(false);
        };
        match input.to_lowercase().as_str() {
            "y" | "yes" => return Ok(true),
            "n" | "no" => return Ok(false),
            "" => return Ok(default),
            _ => println!("{}", OutputStyle::muted("Please enter 'y' or 'n'")),
        }
    }
}

/// Returns `None` once the reader is exhausted.
pub fn read_line_from(
    reader: &mut impl BufRead,
    writer: &mut impl Write,
    prompt: &str,
) -> AppResult<Option<String>> {
    write!(writer, "{}", prompt)?;
    writer.flush()?;

    let mut input = String::new();
    if reader.read_line(&mut input)? == 0 {
        return Ok(None);
    }

    Ok(Some(input.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_line_trims_and_echoes_prompt() {
        let mut reader = io::Cursor::new("  175 \n");
        let mut out = Vec::new();

        let line = read_line_from(&mut reader, &mut out, "Height (cm): ").unwrap();

        assert_eq!(line.as_deref(), Some("175"));
        assert_eq!(String::from_utf8(out).unwrap(), "Height (cm): ");
    }

    #[test]
    fn test_read_line_end_of_input() {
        let mut reader = io::Cursor::new("");
        let mut out = Vec::new();
        assert_eq!(read_line_from(&mut reader, &mut out, "> ").unwrap(), None);
    }
}
