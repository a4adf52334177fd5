//! Reply scripts: one or more reply tokens per line, `#` starts a comment.

use std::path::Path;

use guesswork::ScriptedOracle;

use crate::error::CliResult;

/// Path that selects standard input instead of a file.
pub const STDIN_PATH: &str = "-";

/// Split script text into raw reply tokens.
///
/// Tokens are not validated here; an unknown token is reported by the
/// search at the step that consumes it.
pub fn parse_script(text: &str) -> Vec<String> {
    text.lines()
        .map(|line| line.split('#').next().unwrap_or(""))
        .flat_map(str::split_whitespace)
        .map(str::to_string)
        .collect()
}

/// Read a script from `path` (or stdin for `-`) into an oracle.
pub fn load_script(path: &Path) -> CliResult<ScriptedOracle> {
    let text = if path.as_os_str() == STDIN_PATH {
        std::io::read_to_string(std::io::stdin())?
    } else {
        std::fs::read_to_string(path)?
    };
    let tokens = parse_script(&text);
    tracing::info!("Loaded {} replies from {}", tokens.len(), path.display());
    Ok(ScriptedOracle::new(tokens))
}
