//! Text rendering of a game, read through the engine's public accessors.

use super::engine::GameEngine;
use super::types::BOARD_SIZE;
use std::fmt;

const SEPARATOR: &str = "+---+---+---+";

/// Borrowed view that renders a game's board.
///
/// ```text
/// +---+---+---+
/// + X + O +   +
/// +---+---+---+
/// ```
#[derive(Debug, Clone, Copy)]
pub struct BoardView<'a> {
    engine: &'a GameEngine,
}

impl<'a> BoardView<'a> {
    /// Creates a view over `engine`.
    pub fn new(engine: &'a GameEngine) -> Self {
        Self { engine }
    }

    /// Grid of `row,column` labels for every cell.
    pub fn coordinate_map() -> String {
        let mut lines = vec![SEPARATOR.to_string()];
        for row in 0..BOARD_SIZE {
            let cells: Vec<String> = (0..BOARD_SIZE)
                .map(|column| format!("{row},{column}"))
                .collect();
            lines.push(format!("+{}+", cells.join("+")));
            lines.push(SEPARATOR.to_string());
        }
        lines.join("\n")
    }
}

impl fmt::Display for BoardView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{SEPARATOR}")?;
        for row in 0..BOARD_SIZE {
            for column in 0..BOARD_SIZE {
                match self.engine.current_cell(row, column) {
                    Some(mark) => write!(f, "+ {mark} ")?,
                    None => write!(f, "+   ")?,
                }
            }
            writeln!(f, "+")?;
            if row + 1 < BOARD_SIZE {
                writeln!(f, "{SEPARATOR}")?;
            } else {
                write!(f, "{SEPARATOR}")?;
            }
        }
        Ok(())
    }
}
