//! Line-oriented terminal play.

use anyhow::Result;
use crossmark_engine::{Difficulty, GameMode, Match, Position, Turn};
use std::io::{BufRead, Write};
use std::str::FromStr;
use tracing::{debug, instrument};

const HELP: &str = "\
Enter a cell as its number (1-9), as `row col` (0-2 each), or by name (`center`).
Commands: new, difficulty <easy|medium|hard>, score, help, quit";

/// One line of user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Play a cell.
    Play(Position),
    /// Start a new game.
    New,
    /// Change AI difficulty.
    Difficulty(Difficulty),
    /// Show the tally.
    Score,
    /// Show usage.
    Help,
    /// Leave.
    Quit,
}

impl Command {
    /// Parses a line of input. Returns `None` for anything unrecognised.
    #[instrument]
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim();
        let mut words = line.split_whitespace();
        match words.next()?.to_lowercase().as_str() {
            "new" | "restart" => Some(Self::New),
            "score" => Some(Self::Score),
            "help" | "?" => Some(Self::Help),
            "quit" | "exit" | "q" => Some(Self::Quit),
            "difficulty" => words
                .next()
                .and_then(|d| Difficulty::from_str(d).ok())
                .map(Self::Difficulty),
            _ => Position::from_label_or_number(line).map(Self::Play),
        }
    }
}

/// Drives a [`Match`] from text input.
pub struct Console<R, W> {
    game: Match,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Creates a console over the given streams.
    pub fn new(game: Match, input: R, output: W) -> Self {
        Self {
            game,
            input,
            output,
        }
    }

    /// The match being played.
    pub fn game(&self) -> &Match {
        &self.game
    }

    /// Reads commands until `quit` or end of input.
    #[instrument(skip(self))]
    pub fn run(&mut self) -> Result<()> {
        writeln!(self.output, "{}\n", HELP)?;
        self.show_board()?;

        let mut line = String::new();
        loop {
            self.prompt()?;
            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                debug!("End of input");
                break;
            }
            if line.trim().is_empty() {
                continue;
            }

            match Command::parse(&line) {
                Some(Command::Quit) => break,
                Some(command) => self.handle(command)?,
                None => writeln!(self.output, "Unrecognised input. Type `help`.")?,
            }
        }

        writeln!(self.output, "Final score: {}", self.game.scoreboard())?;
        Ok(())
    }

    fn handle(&mut self, command: Command) -> Result<()> {
        match command {
            Command::Play(pos) => match self.game.play(pos) {
                Ok(turn) => self.narrate(turn)?,
                Err(e) => writeln!(self.output, "{}", e)?,
            },
            Command::New => {
                self.game.restart();
                writeln!(self.output, "New game.")?;
                self.show_board()?;
            }
            Command::Difficulty(difficulty) => {
                self.game.set_difficulty(difficulty);
                writeln!(self.output, "Difficulty set to {}.", difficulty)?;
            }
            Command::Score => writeln!(self.output, "{}", self.game.scoreboard())?,
            Command::Help => writeln!(self.output, "{}", HELP)?,
            Command::Quit => {}
        }
        Ok(())
    }

    fn narrate(&mut self, turn: Turn) -> Result<()> {
        if let Some(reply) = turn.reply() {
            writeln!(self.output, "Computer plays {}.", reply)?;
        }
        self.show_board()?;
        if let Some(outcome) = self.game.state().outcome() {
            writeln!(self.output, "{}! Type `new` to play again.", outcome)?;
        }
        Ok(())
    }

    fn show_board(&mut self) -> Result<()> {
        writeln!(self.output, "\n{}\n", self.game.state().board().display())?;
        Ok(())
    }

    fn prompt(&mut self) -> Result<()> {
        let state = self.game.state();
        if state.is_terminal() {
            write!(self.output, "> ")?;
        } else {
            let who = match self.game.settings().mode {
                GameMode::VersusAi => "Your move",
                GameMode::TwoPlayer => "Move",
            };
            write!(self.output, "{} ({})> ", who, state.current_player())?;
        }
        self.output.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_commands() {
        assert_eq!(Command::parse("new"), Some(Command::New));
        assert_eq!(Command::parse(" Quit "), Some(Command::Quit));
        assert_eq!(
            Command::parse("difficulty EASY"),
            Some(Command::Difficulty(Difficulty::Easy))
        );
        assert_eq!(Command::parse("difficulty"), None);
        assert_eq!(Command::parse("5"), Some(Command::Play(Position::Center)));
        assert_eq!(Command::parse("0 2"), Some(Command::Play(Position::TopRight)));
        assert_eq!(Command::parse("banana"), None);
    }
}
