use std::io::{self, IsTerminal};
use std::path::Path;

const FALLBACK_WIDTH: usize = 80;

/// `Ok(None)` when there is no file at `path`.
pub fn read_optional_file(path: &Path) -> io::Result<Option<String>> {
    match std::fs::read_to_string(path) {
        Ok(contents) => Ok(Some(contents)),
        Err(error) if error.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(error) => Err(error),
    }
}

pub fn terminal_width(columns_override: Option<usize>) -> usize {
    if let Some(columns) = columns_override {
        return columns;
    }
    if !io::stdout().is_terminal() {
        return FALLBACK_WIDTH;
    }
    match crossterm::terminal::size() {
        Ok((columns, _rows)) => columns as usize,
        Err(error) => {
            log::debug!("couldn't query the terminal size: {error}");
            FALLBACK_WIDTH
        }
    }
}
