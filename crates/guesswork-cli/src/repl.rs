//! Interactive prompt that lets a human answer each guess.
//!
//! Launch with `guesswork play`. Replies are `yes`, `>` or `<`; slash
//! commands are listed by `/help`. Tab completes both.

use std::path::PathBuf;

use rustyline::completion::{Completer, Pair};
use rustyline::config::CompletionType;
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::history::DefaultHistory;
use rustyline::validate::Validator;
use rustyline::{
    Cmd, ConditionalEventHandler, Config, Editor, Event, EventContext, EventHandler, Helper,
    KeyEvent, RepeatCount,
};

use guesswork::{search, Guess, Oracle, Reply, SearchError, SearchOutcome, SearchRange, SearchResult};

use crate::config::resolve_history_path;
use crate::error::CliResult;
use crate::report::guess_line;

const PROMPT: &str = "Enter reply: ";

/// Available slash commands.
const COMMANDS: &[(&str, &str)] = &[
    ("/help", "Show replies and commands"),
    ("/range", "Show the values still in play"),
    ("/quit", "Abandon the search"),
];

/// Replies offered by completion, with descriptions.
const REPLIES: &[(&str, &str)] = &[
    ("yes", "The guess is the number"),
    (">", "The number is higher than the guess"),
    ("<", "The number is lower than the guess"),
];

/// One line of prompt input, interpreted.
#[derive(Debug, PartialEq, Eq)]
pub enum PromptInput {
    Reply(Reply),
    Help,
    Range,
    Quit,
    Blank,
    UnknownCommand(String),
    /// Text that is neither a reply nor a command.
    NotUnderstood(String),
}

/// Interpret a raw prompt line.
pub fn interpret(line: &str) -> PromptInput {
    let line = line.trim();
    if line.is_empty() {
        return PromptInput::Blank;
    }

    if let Some(cmd) = line.strip_prefix('/') {
        return match cmd.split_whitespace().next().unwrap_or("") {
            "help" | "h" | "?" | "" => PromptInput::Help,
            "range" => PromptInput::Range,
            "quit" | "exit" | "q" => PromptInput::Quit,
            other => PromptInput::UnknownCommand(other.to_string()),
        };
    }

    match line.parse::<Reply>() {
        Ok(reply) => PromptInput::Reply(reply),
        Err(_) => PromptInput::NotUnderstood(line.to_string()),
    }
}

/// Helper for tab completion and inline hints.
#[derive(Default)]
struct ReplyHelper;

impl Completer for ReplyHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &rustyline::Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let input = &line[..pos];
        let matches = COMMANDS
            .iter()
            .chain(REPLIES)
            .filter(|(word, _)| word.starts_with(input))
            .map(|(word, desc)| Pair {
                display: format!("{word:<8} {desc}"),
                replacement: (*word).to_string(),
            })
            .collect();
        Ok((0, matches))
    }
}

impl Hinter for ReplyHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &rustyline::Context<'_>) -> Option<String> {
        if pos < line.len() || !line.starts_with('/') {
            return None;
        }
        COMMANDS
            .iter()
            .find(|(cmd, _)| cmd.starts_with(line) && *cmd != line)
            .map(|(cmd, _)| cmd[line.len()..].to_string())
    }
}

impl Highlighter for ReplyHelper {}
impl Validator for ReplyHelper {}
impl Helper for ReplyHelper {}

struct TabCompleteOrAcceptHint;

impl ConditionalEventHandler for TabCompleteOrAcceptHint {
    fn handle(
        &self,
        _evt: &Event,
        _n: RepeatCount,
        _positive: bool,
        ctx: &EventContext<'_>,
    ) -> Option<Cmd> {
        if ctx.has_hint() {
            Some(Cmd::CompleteHint)
        } else {
            Some(Cmd::Complete)
        }
    }
}

/// Oracle backed by a line editor on the terminal.
pub struct PromptOracle {
    editor: Editor<ReplyHelper, DefaultHistory>,
    history_path: PathBuf,
}

impl PromptOracle {
    pub fn new() -> CliResult<Self> {
        let config = Config::builder()
            .history_ignore_space(true)
            .auto_add_history(true)
            .completion_type(CompletionType::List)
            .build();

        let mut editor: Editor<ReplyHelper, DefaultHistory> = Editor::with_config(config)?;
        editor.set_helper(Some(ReplyHelper));
        editor.bind_sequence(
            KeyEvent::from('\t'),
            EventHandler::Conditional(Box::new(TabCompleteOrAcceptHint)),
        );

        let history_path = resolve_history_path();
        if history_path.exists() {
            if let Err(e) = editor.load_history(&history_path) {
                tracing::debug!("Could not load history {}: {e}", history_path.display());
            }
        }

        Ok(Self {
            editor,
            history_path,
        })
    }

    pub fn save_history(&mut self) {
        if let Err(e) = self.editor.save_history(&self.history_path) {
            tracing::debug!("Could not save history {}: {e}", self.history_path.display());
        }
    }
}

impl Oracle for PromptOracle {
    fn classify(&mut self, guess: &Guess) -> SearchResult<Reply> {
        println!("{}", guess_line(guess));

        loop {
            match self.editor.readline(PROMPT) {
                Ok(line) => match interpret(&line) {
                    PromptInput::Reply(reply) => return Ok(reply),
                    PromptInput::Blank => {}
                    PromptInput::Help => cmd_help(),
                    PromptInput::Range => cmd_range(guess),
                    PromptInput::Quit => return Err(SearchError::Abandoned { step: guess.step }),
                    PromptInput::UnknownCommand(cmd) => {
                        eprintln!("  Unknown command '/{cmd}'. Type /help for commands.");
                    }
                    PromptInput::NotUnderstood(token) => {
                        tracing::debug!(step = guess.step, token = %token, "Reply rejected");
                        eprintln!("  Reply {token:?} not understood. Answer yes, > or <.");
                    }
                },
                Err(ReadlineError::Interrupted) => {
                    eprintln!("  \x1b[90m(Ctrl+C)\x1b[0m Type \x1b[1m/quit\x1b[0m to give up.");
                }
                Err(ReadlineError::Eof) => {
                    return Err(SearchError::Abandoned { step: guess.step });
                }
                Err(ReadlineError::Io(e)) => return Err(SearchError::Io(e)),
                Err(err) => return Err(SearchError::Io(std::io::Error::other(err.to_string()))),
            }
        }
    }
}

/// Run an interactive search over `range`.
pub fn run(range: &SearchRange) -> CliResult<SearchOutcome> {
    eprintln!();
    eprintln!(
        "  \x1b[32m\u{25c9}\x1b[0m \x1b[1mguesswork v{}\x1b[0m \x1b[90m\u{2014} think of a number from {} to {}\x1b[0m",
        env!("CARGO_PKG_VERSION"),
        range.first(),
        range.last()
    );
    eprintln!();
    eprintln!(
        "    Answer \x1b[36myes\x1b[0m, \x1b[36m>\x1b[0m or \x1b[36m<\x1b[0m. \x1b[90m/help\x1b[0m for commands."
    );
    eprintln!();

    let mut oracle = PromptOracle::new()?;
    let outcome = search(range, &mut oracle);
    oracle.save_history();
    Ok(outcome?)
}

fn cmd_help() {
    eprintln!();
    eprintln!("  Replies:");
    for (reply, desc) in REPLIES {
        eprintln!("    {reply:<10} {desc}");
    }
    eprintln!();
    eprintln!("  Commands:");
    for (cmd, desc) in COMMANDS {
        eprintln!("    {cmd:<10} {desc}");
    }
    eprintln!();
}

fn cmd_range(guess: &Guess) {
    eprintln!(
        "  Still in play: {} to {} (step {})",
        guess.low, guess.high, guess.step
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interpret_replies() {
        assert_eq!(interpret("yes"), PromptInput::Reply(Reply::Match));
        assert_eq!(interpret(" > "), PromptInput::Reply(Reply::TargetAbove));
        assert_eq!(interpret("<"), PromptInput::Reply(Reply::TargetBelow));
    }

    #[test]
    fn test_interpret_commands() {
        assert_eq!(interpret("/help"), PromptInput::Help);
        assert_eq!(interpret("/"), PromptInput::Help);
        assert_eq!(interpret("/range"), PromptInput::Range);
        assert_eq!(interpret("/quit"), PromptInput::Quit);
        assert_eq!(
            interpret("/launch"),
            PromptInput::UnknownCommand("launch".to_string())
        );
    }

    #[test]
    fn test_interpret_rejects_garbage() {
        assert_eq!(interpret("   "), PromptInput::Blank);
        assert_eq!(
            interpret("no idea"),
            PromptInput::NotUnderstood("no idea".to_string())
        );
    }

    #[test]
    fn test_hint_completes_command() {
        let helper = ReplyHelper;
        let history = DefaultHistory::new();
        let ctx = rustyline::Context::new(&history);
        assert_eq!(helper.hint("/ra", 3, &ctx), Some("nge".to_string()));
        assert_eq!(helper.hint(">", 1, &ctx), None);
    }

    #[test]
    fn test_complete_offers_replies() {
        let helper = ReplyHelper;
        let history = DefaultHistory::new();
        let ctx = rustyline::Context::new(&history);
        let (start, pairs) = helper.complete("y", 1, &ctx).unwrap();
        assert_eq!(start, 0);
        assert_eq!(pairs.len(), 1);
        assert_eq!(pairs[0].replacement, "yes");
    }
}
