//! Terminal input: parsing typed commands and reading lines.

use anyhow::{Context, Result};
use derive_more::{Display, Error};
use std::io::Write;
use std::str::FromStr;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader, Lines};
use window_tictactoe::Position;

/// Something a seat wants the orchestrator to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Place the current player's mark. Coordinates are passed through
    /// unchecked so the engine can reject them.
    Place {
        /// Row (0-2).
        row: usize,
        /// Column (0-2).
        col: usize,
    },
    /// Let the heuristic move for its mark.
    ComputerMove,
    /// Start a new game under a fresh id.
    NewGame,
    /// Replay the current session from an empty board.
    Reset,
    /// Show the scoreboard.
    Score,
    /// Show the command list.
    Help,
    /// Leave.
    Quit,
}

/// Error returned for input that is not a command or a square.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Unrecognized input {:?}", input)]
pub struct ParseActionError {
    /// The rejected text.
    pub input: String,
}

impl FromStr for Action {
    type Err = ParseActionError;

    /// Accepts `row col`, `row,col`, a keypad digit `1`-`9`, a square label
    /// such as `center`, or one of the command words.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim().to_lowercase();
        let action = match text.as_str() {
            "new" | "n" => Some(Action::NewGame),
            "reset" | "r" => Some(Action::Reset),
            "score" | "s" => Some(Action::Score),
            "help" | "h" | "?" => Some(Action::Help),
            "quit" | "q" | "exit" => Some(Action::Quit),
            "cpu" | "computer" => Some(Action::ComputerMove),
            _ => parse_square(&text),
        };
        action.ok_or_else(|| ParseActionError {
            input: s.trim().to_string(),
        })
    }
}

fn parse_square(text: &str) -> Option<Action> {
    let parts: Vec<&str> = text
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|p| !p.is_empty())
        .collect();

    if let [row, col] = parts.as_slice()
        && let (Ok(row), Ok(col)) = (row.parse::<usize>(), col.parse::<usize>())
    {
        return Some(Action::Place { row, col });
    }

    if let [single] = parts.as_slice()
        && let Ok(key) = single.parse::<usize>()
    {
        // Keypad numbering, 1 = top-left.
        let pos = Position::from_index(key.checked_sub(1)?)?;
        return Some(place(pos));
    }

    Position::from_label(text).map(place)
}

fn place(pos: Position) -> Action {
    Action::Place {
        row: pos.row(),
        col: pos.col(),
    }
}

/// Line-oriented terminal I/O shared by every seat.
pub struct Console {
    lines: Lines<Box<dyn AsyncBufRead + Unpin + Send>>,
    out: Box<dyn Write + Send>,
}

impl Console {
    /// Creates a console over arbitrary input and output.
    pub fn new(
        input: impl AsyncBufRead + Unpin + Send + 'static,
        out: impl Write + Send + 'static,
    ) -> Self {
        let input: Box<dyn AsyncBufRead + Unpin + Send> = Box::new(input);
        Self {
            lines: input.lines(),
            out: Box::new(out),
        }
    }

    /// Console over stdin/stdout.
    pub fn stdio() -> Self {
        Self::new(BufReader::new(tokio::io::stdin()), std::io::stdout())
    }

    /// Reads the next line, `None` at end of input.
    pub async fn read_line(&mut self) -> Result<Option<String>> {
        self.lines.next_line().await.context("Failed to read input")
    }

    /// Writes a line of output.
    pub fn say(&mut self, text: impl AsRef<str>) -> Result<()> {
        writeln!(self.out, "{}", text.as_ref()).context("Failed to write output")
    }

    /// Writes a prompt without a trailing newline.
    pub fn prompt(&mut self, text: impl AsRef<str>) -> Result<()> {
        write!(self.out, "{}", text.as_ref()).context("Failed to write output")?;
        self.out.flush().context("Failed to flush output")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_col_forms() {
        assert_eq!("1 2".parse(), Ok(Action::Place { row: 1, col: 2 }));
        assert_eq!("1,2".parse(), Ok(Action::Place { row: 1, col: 2 }));
        assert_eq!(" 0 , 0 ".parse(), Ok(Action::Place { row: 0, col: 0 }));
    }

    #[test]
    fn test_out_of_range_coordinates_pass_through() {
        assert_eq!("3 0".parse(), Ok(Action::Place { row: 3, col: 0 }));
    }

    #[test]
    fn test_keypad_digits() {
        assert_eq!("1".parse(), Ok(Action::Place { row: 0, col: 0 }));
        assert_eq!("5".parse(), Ok(Action::Place { row: 1, col: 1 }));
        assert_eq!("9".parse(), Ok(Action::Place { row: 2, col: 2 }));
        assert!("0".parse::<Action>().is_err());
        assert!("10".parse::<Action>().is_err());
    }

    #[test]
    fn test_labels() {
        assert_eq!("center".parse(), Ok(Action::Place { row: 1, col: 1 }));
        assert_eq!("Top Right".parse(), Ok(Action::Place { row: 0, col: 2 }));
    }

    #[test]
    fn test_command_words() {
        assert_eq!("NEW".parse(), Ok(Action::NewGame));
        assert_eq!("q".parse(), Ok(Action::Quit));
        assert_eq!("cpu".parse(), Ok(Action::ComputerMove));
    }

    #[test]
    fn test_garbage() {
        let err = "banana".parse::<Action>().unwrap_err();
        assert_eq!(err.input, "banana");
    }

    #[tokio::test]
    async fn test_console_reads_lines_until_eof() {
        let mut console = Console::new(&b"1 1\nquit\n"[..], std::io::sink());
        assert_eq!(console.read_line().await.unwrap().as_deref(), Some("1 1"));
        assert_eq!(console.read_line().await.unwrap().as_deref(), Some("quit"));
        assert_eq!(console.read_line().await.unwrap(), None);
    }
}
