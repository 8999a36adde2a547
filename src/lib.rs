#![allow(clippy::module_inception)]

use std::{fs, path::Path};

use crate::errors::errors::{Error, ErrorTip};

pub mod errors;
pub mod lexer;
pub mod macros;

/// Fetches a single line of a source file by its 1-based number.
pub fn get_line_at(file: &Path, line: u32) -> Option<String> {
    let content = fs::read_to_string(file).ok()?;

    content
        .lines()
        .nth(line.checked_sub(1)? as usize)
        .map(String::from)
}

pub fn display_error(error: &Error, file: &Path) {
    /*
        Error: MalformedRealConstant (Real constants may contain a single decimal point)
        -> final.lang
          |
        3 | x = 1.7.2;
    */

    if let ErrorTip::None = error.get_tip() {
        println!("Error: {}", error.get_error_name());
    } else {
        println!("Error: {} ({})", error.get_error_name(), error.get_tip());
    }
    println!("-> {}", file.display());

    let line = error.get_line();
    if let Some(line_text) = get_line_at(file, line) {
        let line_string = line.to_string();
        let padding = line_string.len() + 2;

        println!("{:>padding$}", "|");
        println!("{} | {}", line_string, line_text.trim());
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    #[test]
    fn test_get_line_at() {
        let line = super::get_line_at(Path::new("tests/sample.lang"), 1);
        assert_eq!(line, Some(String::from("program {")));

        let line = super::get_line_at(Path::new("tests/sample.lang"), 4);
        assert_eq!(line, Some(String::from("    float y = 3.14;")));

        assert_eq!(super::get_line_at(Path::new("tests/sample.lang"), 99), None);
        assert_eq!(super::get_line_at(Path::new("tests/sample.lang"), 0), None);
    }
}
