//! Game orchestration between seats.
//!
//! Owns everything the engine deliberately does not: the game mode, which
//! seat is human, the scoreboard, and when the heuristic should move.

use crate::config::SessionConfig;
use crate::input::{Action, Console};
use crate::mode::GameMode;
use crate::players::{ComputerPlayer, HumanPlayer, Player};
use crate::render;
use crate::scoreboard::Scoreboard;
use anyhow::Result;
use tracing::{debug, info, instrument, warn};
use window_tictactoe::{GameEngine, GameSnapshot, MoveError, Player as Mark};

/// Runs interactive games over a console.
pub struct Orchestrator {
    engine: GameEngine,
    player_x: Box<dyn Player>,
    player_o: Box<dyn Player>,
    mode: GameMode,
    show_ages: bool,
    scoreboard: Scoreboard,
    console: Console,
}

impl Orchestrator {
    /// Creates an orchestrator with seats filled according to the config.
    #[instrument(skip(console))]
    pub fn new(config: &SessionConfig, console: Console) -> Self {
        let computer = *config.computer();
        let seat = |mark: Mark| -> Box<dyn Player> {
            if config.mode().has_computer() && mark == computer {
                Box::new(ComputerPlayer::new("Computer", config.thinking_delay()))
            } else if config.mode().has_computer() {
                Box::new(HumanPlayer::new("You"))
            } else {
                Box::new(HumanPlayer::new(format!("Player {}", mark)))
            }
        };

        Self {
            engine: GameEngine::with_computer(computer),
            player_x: seat(Mark::X),
            player_o: seat(Mark::O),
            mode: *config.mode(),
            show_ages: *config.show_ages(),
            scoreboard: Scoreboard::new(),
            console,
        }
    }

    /// Runs the game loop until a seat quits or input ends.
    #[instrument(skip(self), fields(mode = self.mode.name()))]
    pub async fn run(&mut self) -> Result<Scoreboard> {
        info!("Starting game orchestration");
        self.console.say(format!("Sliding-window tic-tac-toe - {}", self.mode.name()))?;
        self.console.say(render::HELP)?;

        let mut snapshot = self.engine.new_game();
        self.show(&snapshot)?;

        loop {
            // Once the game is over only a human can start the next one.
            let mark = if snapshot.is_game_over() {
                self.human_mark()
            } else {
                snapshot.current_player()
            };
            let seat = match mark {
                Mark::X => &mut self.player_x,
                Mark::O => &mut self.player_o,
            };
            debug!(player = seat.name(), "Waiting for action");
            let action = seat.next_action(&snapshot, &mut self.console).await?;

            match action {
                Action::Quit => break,
                Action::Help => self.console.say(render::HELP)?,
                Action::Score => self.console.say(self.scoreboard.to_string())?,
                Action::NewGame => {
                    snapshot = self.engine.new_game();
                    self.show(&snapshot)?;
                }
                Action::Reset => {
                    snapshot = self.engine.reset_game();
                    self.show(&snapshot)?;
                }
                Action::Place { row, col } => match self.engine.make_move(row, col) {
                    Ok(next) => snapshot = self.after_move(next)?,
                    Err(e) => self.console.say(format!("Invalid move: {}. Try again.", e))?,
                },
                Action::ComputerMove => match self.engine.make_computer_move() {
                    Ok(next) => snapshot = self.after_move(next)?,
                    Err(e @ (MoveError::NotYourTurn(_) | MoveError::GameAlreadyOver)) => {
                        self.console.say(format!("Computer can't move: {}.", e))?
                    }
                    Err(e) => {
                        warn!(error = %e, "Computer move failed, starting a new game");
                        self.console
                            .say(format!("Computer move failed ({}). Starting a new game.", e))?;
                        snapshot = self.engine.new_game();
                        self.show(&snapshot)?;
                    }
                },
            }
        }

        info!(games = self.scoreboard.games(), "Session finished");
        self.console.say(self.scoreboard.to_string())?;
        Ok(self.scoreboard)
    }

    fn human_mark(&self) -> Mark {
        if self.player_x.is_human() {
            Mark::X
        } else {
            Mark::O
        }
    }

    fn after_move(&mut self, snapshot: GameSnapshot) -> Result<GameSnapshot> {
        if let Some(winner) = snapshot.winner() {
            self.scoreboard.record_win(winner);
        }
        self.show(&snapshot)?;
        Ok(snapshot)
    }

    fn show(&mut self, snapshot: &GameSnapshot) -> Result<()> {
        self.console.say("")?;
        self.console.say(render::board(snapshot, self.show_ages))?;
        self.console
            .say(render::status(snapshot, self.mode, self.engine.computer()))?;
        if snapshot.is_game_over() {
            self.console.say(self.scoreboard.to_string())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct SharedBuf(Arc<Mutex<Vec<u8>>>);

    impl Write for SharedBuf {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl SharedBuf {
        fn text(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    fn orchestrator(config: SessionConfig, script: &'static str) -> (Orchestrator, SharedBuf) {
        let out = SharedBuf::default();
        let console = Console::new(script.as_bytes(), out.clone());
        (Orchestrator::new(&config, console), out)
    }

    #[tokio::test]
    async fn test_human_vs_human_win_is_scored() {
        let config = SessionConfig::default().with_mode(GameMode::HumanVsHuman);
        let (mut orch, out) = orchestrator(config, "0 0\n1 1\n0 1\n2 0\n0 2\nscore\nquit\n");

        let scores = orch.run().await.unwrap();
        assert_eq!(scores.wins(Mark::X), 1);
        assert_eq!(scores.wins(Mark::O), 0);
        assert!(out.text().contains("GAME OVER - Player X wins!"));
    }

    #[tokio::test]
    async fn test_computer_answers_human_move() {
        let config = SessionConfig::default().with_thinking_delay_ms(0);
        let (mut orch, out) = orchestrator(config, "0 0\nquit\n");

        orch.run().await.unwrap();
        let text = out.text();
        assert!(text.contains("Computer is thinking..."));
        // The heuristic takes the free center.
        assert!(text.contains(" O new "));
        assert_eq!(orch.engine.current_player(), Mark::X);
    }

    #[tokio::test]
    async fn test_invalid_input_reprompts() {
        let config = SessionConfig::default().with_mode(GameMode::HumanVsHuman);
        let (mut orch, out) = orchestrator(config, "banana\n5 5\n1 1\n1 1\nquit\n");

        orch.run().await.unwrap();
        let text = out.text();
        assert!(text.contains("Unrecognized input \"banana\""));
        assert!(text.contains("Invalid move: Position (5, 5) is off the board"));
        assert!(text.contains("Invalid move: Square Center is already occupied"));
    }

    #[tokio::test]
    async fn test_end_of_input_quits() {
        let config = SessionConfig::default().with_mode(GameMode::HumanVsHuman);
        let (mut orch, _out) = orchestrator(config, "1 1\n");

        let scores = orch.run().await.unwrap();
        assert_eq!(scores.games(), 0);
    }

    #[tokio::test]
    async fn test_reset_after_win_keeps_score() {
        let config = SessionConfig::default().with_mode(GameMode::HumanVsHuman);
        let (mut orch, _out) =
            orchestrator(config, "0 0\n1 1\n0 1\n2 0\n0 2\n2 2\nreset\n1 1\nquit\n");

        let scores = orch.run().await.unwrap();
        assert_eq!(scores.wins(Mark::X), 1);
        assert!(!orch.engine.is_over());
        assert_eq!(orch.engine.current_player(), Mark::O);
    }
}
