pub mod config;
pub mod conflict;
pub mod label;
pub mod range;
pub mod time;
pub mod timeline;

use std::io::Read;
use std::path::Path;

/// Read command input from a file, or from stdin when no file is given.
pub fn read_input(file: Option<&Path>) -> Result<String, Box<dyn std::error::Error>> {
    match file {
        Some(path) => Ok(std::fs::read_to_string(path)?),
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}
