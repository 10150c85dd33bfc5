//! Reading command input from a file or stdin.

use std::io::Read;
use std::path::Path;

use crate::error::Result;

/// Read `path` to a string; `-` reads standard input.
pub fn read_input(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut content = String::new();
        std::io::stdin().read_to_string(&mut content)?;
        return Ok(content);
    }

    Ok(std::fs::read_to_string(path)?)
}
