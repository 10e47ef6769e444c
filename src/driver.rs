//! Line-oriented command driver
//!
//! Stands in for a pointer/keyboard front end: each input line is one
//! discrete action, and feedback is written back as text.

use std::io::{self, BufRead, Write};
use std::ops::ControlFlow;

use glam::Vec2;
use thiserror::Error;

use crate::game::{Action, GameEvent, GameState, apply};

const HELP: &str = "\
commands:
  <enter> | next        begin the next player's turn
  d | roll              roll the die
  w | wedge             collect the wedge under the active token
  move X Y              move the active token to the space nearest (X, Y)
  click R THETA         same, with a polar point (radius, radians)
  state                 print the game state as JSON
  board                 list every space
  legend                list the categories and their colors
  help                  show this text
  q | quit              leave the game";

/// A parsed input line
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    Advance,
    Roll,
    Collect,
    Move(Vec2),
    Click { radius: f32, angle: f32 },
    State,
    Board,
    Legend,
    Help,
    Quit,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("Unknown command '{0}' (try 'help')")]
    Unknown(String),
    #[error("Usage: {0}")]
    Usage(&'static str),
}

impl Command {
    pub fn parse(line: &str) -> Result<Self, CommandError> {
        let mut words = line.split_whitespace();
        let Some(head) = words.next() else {
            return Ok(Command::Advance);
        };
        let args: Vec<&str> = words.collect();

        let command = match head.to_lowercase().as_str() {
            "next" | "space" => Command::Advance,
            "d" | "roll" => Command::Roll,
            "w" | "wedge" => Command::Collect,
            "state" => Command::State,
            "board" => Command::Board,
            "legend" => Command::Legend,
            "help" | "?" => Command::Help,
            "q" | "quit" | "exit" => Command::Quit,
            "move" => {
                let (x, y) = two_floats(&args).ok_or(CommandError::Usage("move X Y"))?;
                Command::Move(Vec2::new(x, y))
            }
            "click" => {
                let (radius, angle) =
                    two_floats(&args).ok_or(CommandError::Usage("click R THETA"))?;
                Command::Click { radius, angle }
            }
            other => return Err(CommandError::Unknown(other.to_string())),
        };
        Ok(command)
    }

    /// Game action this command maps to, if any
    pub fn action(self) -> Option<Action> {
        match self {
            Command::Advance => Some(Action::AdvanceTurn),
            Command::Roll => Some(Action::RollDie),
            Command::Collect => Some(Action::CollectWedge),
            Command::Move(point) => Some(Action::MoveToken(point)),
            Command::Click { radius, angle } => {
                Some(Action::MoveToken(crate::polar_to_cartesian(radius, angle)))
            }
            Command::State
            | Command::Board
            | Command::Legend
            | Command::Help
            | Command::Quit => None,
        }
    }
}

fn two_floats(args: &[&str]) -> Option<(f32, f32)> {
    match args {
        [a, b] => {
            let a: f32 = a.parse().ok()?;
            let b: f32 = b.parse().ok()?;
            (a.is_finite() && b.is_finite()).then_some((a, b))
        }
        _ => None,
    }
}

/// Describe an event the way the console reports it
pub fn describe(state: &GameState, event: &GameEvent) -> String {
    let board = state.board();
    match event {
        GameEvent::TurnStarted { name, token, .. } => {
            format!("Team {name} to move (on {token} {})", board.class_label(*token))
        }
        GameEvent::Rolled(roll) => format!("Rolled a {roll}"),
        GameEvent::TokenMoved { player, space } => {
            let name = state
                .players()
                .get(*player)
                .map(|p| p.name.as_str())
                .unwrap_or("?");
            format!("{name} moved to {space} {}", board.class_label(*space))
        }
        GameEvent::WedgeCollected { category, .. } => {
            format!("Collected {} wedge", board.scheme().name(*category))
        }
    }
}

/// Run one command, writing its feedback to `out`
pub fn execute<W: Write>(
    state: &mut GameState,
    command: Command,
    out: &mut W,
) -> io::Result<ControlFlow<()>> {
    if let Some(action) = command.action() {
        match apply(state, action) {
            Ok(Some(event)) => writeln!(out, "{}", describe(state, &event))?,
            Ok(None) => {}
            Err(e) => {
                log::warn!("Rejected {action:?}: {e}");
                writeln!(out, "{e}")?;
            }
        }
        return Ok(ControlFlow::Continue(()));
    }

    match command {
        Command::State => {
            serde_json::to_writer_pretty(&mut *out, &state.snapshot()).map_err(io::Error::other)?;
            writeln!(out)?;
        }
        Command::Board => {
            let board = state.board();
            for space in board.spaces() {
                writeln!(
                    out,
                    "{:>4} {:<9} r={:.2} θ={:.3} {}",
                    space.id.to_string(),
                    format!("{:?}", space.kind()),
                    space.radius,
                    space.angle,
                    board.class_label(space.id)
                )?;
            }
        }
        Command::Legend => {
            for (_, info) in state.board().scheme().iter() {
                writeln!(out, "{} ({})", info.name, info.color)?;
            }
        }
        Command::Help => writeln!(out, "{HELP}")?,
        Command::Quit => return Ok(ControlFlow::Break(())),
        _ => {}
    }
    Ok(ControlFlow::Continue(()))
}

/// Read commands from `input` until it ends or the user quits
pub fn run<R: BufRead, W: Write>(state: &mut GameState, input: R, out: &mut W) -> io::Result<()> {
    if let Some(first) = state.players().first() {
        writeln!(out, "Press ENTER to begin {}'s turn", first.name)?;
    }

    for line in input.lines() {
        let line = match line {
            Ok(line) => line,
            // The bad line was consumed; keep reading
            Err(e) if e.kind() == io::ErrorKind::InvalidData => {
                log::warn!("Skipping unreadable input line: {e}");
                writeln!(out, "Input is not valid UTF-8; line ignored")?;
                continue;
            }
            Err(e) => return Err(e),
        };
        let command = match Command::parse(&line) {
            Ok(command) => command,
            Err(e) => {
                log::warn!("Bad command {line:?}: {e}");
                writeln!(out, "{e}")?;
                continue;
            }
        };
        if execute(state, command, out)?.is_break() {
            break;
        }
    }
    out.flush()
}
