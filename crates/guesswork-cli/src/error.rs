//! Error types and process exit codes for the command-line front end.

use guesswork::SearchError;

/// Process exit codes.
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const INTERNAL_ERROR: i32 = 1;
    pub const USAGE_ERROR: i32 = 2;
    pub const INVALID_REPLY: i32 = 3;
    pub const CONTRADICTION: i32 = 4;
    pub const SCRIPT_EXHAUSTED: i32 = 5;
    /// Same as a shell interrupted by SIGINT.
    pub const ABANDONED: i32 = 130;
}

/// All errors that can occur in the CLI.
#[derive(thiserror::Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Search(#[from] SearchError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Readline error: {0}")]
    Readline(#[from] rustyline::error::ReadlineError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    pub fn exit_code(&self) -> i32 {
        use exit_codes::*;
        match self {
            CliError::Search(e) => search_exit_code(e),
            CliError::Config(_) => USAGE_ERROR,
            CliError::Readline(_) | CliError::Io(_) | CliError::Json(_) => INTERNAL_ERROR,
        }
    }
}

fn search_exit_code(err: &SearchError) -> i32 {
    use exit_codes::*;
    match err {
        SearchError::InvalidReply { .. } => INVALID_REPLY,
        SearchError::EmptyRange { .. } => CONTRADICTION,
        SearchError::ScriptExhausted { .. } => SCRIPT_EXHAUSTED,
        SearchError::Abandoned { .. } => ABANDONED,
        SearchError::EmptyInput
        | SearchError::Unsorted { .. }
        | SearchError::InvalidBounds { .. }
        | SearchError::RangeTooLarge { .. } => USAGE_ERROR,
        SearchError::Io(_) => INTERNAL_ERROR,
    }
}

/// Exit code for an error reaching `main`, found by walking its cause chain.
pub fn exit_code_of(err: &anyhow::Error) -> i32 {
    for cause in err.chain() {
        if let Some(e) = cause.downcast_ref::<CliError>() {
            return e.exit_code();
        }
        if let Some(e) = cause.downcast_ref::<SearchError>() {
            return search_exit_code(e);
        }
    }
    exit_codes::INTERNAL_ERROR
}

pub type CliResult<T> = Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_by_kind() {
        let invalid = CliError::from(SearchError::InvalidReply {
            token: "?".to_string(),
        });
        assert_eq!(invalid.exit_code(), exit_codes::INVALID_REPLY);

        let empty = CliError::from(SearchError::EmptyRange { step: 2 });
        assert_eq!(empty.exit_code(), exit_codes::CONTRADICTION);

        let bounds = CliError::from(SearchError::InvalidBounds { low: 3, high: 1 });
        assert_eq!(bounds.exit_code(), exit_codes::USAGE_ERROR);

        let abandoned = CliError::from(SearchError::Abandoned { step: 1 });
        assert_eq!(abandoned.exit_code(), exit_codes::ABANDONED);
    }

    #[test]
    fn test_exit_code_of_walks_context() {
        use anyhow::Context;

        let err = Err::<(), _>(CliError::Config("bad".to_string()))
            .context("resolving range")
            .unwrap_err();
        assert_eq!(exit_code_of(&err), exit_codes::USAGE_ERROR);

        let err = anyhow::Error::from(SearchError::Abandoned { step: 3 });
        assert_eq!(exit_code_of(&err), exit_codes::ABANDONED);

        let err = anyhow::Error::from(SearchError::RangeTooLarge {
            low: i64::MIN,
            high: i64::MAX,
        });
        assert_eq!(exit_code_of(&err), exit_codes::USAGE_ERROR);

        let err = anyhow::anyhow!("something else");
        assert_eq!(exit_code_of(&err), exit_codes::INTERNAL_ERROR);
    }

    #[test]
    fn test_search_error_message_passes_through() {
        let err = CliError::from(SearchError::EmptyRange { step: 7 });
        assert_eq!(
            err.to_string(),
            "Replies contradict each other: no candidates left after step 7"
        );
    }
}
