//! Directory of boards shown on the home screen.

use crate::board::{
    domain::{BoardError, BoardId, Notification},
    ports::IdGenerator,
};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Accent color of a board tile.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoardColor {
    /// Blue.
    #[default]
    Blue,
    /// Green.
    Green,
    /// Red.
    Red,
    /// Purple.
    Purple,
    /// Orange.
    Orange,
    /// Teal.
    Teal,
}

impl BoardColor {
    /// Every color in picker order.
    pub const ALL: [Self; 6] = [
        Self::Blue,
        Self::Green,
        Self::Red,
        Self::Purple,
        Self::Orange,
        Self::Teal,
    ];

    /// Returns the presentation color token.
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            Self::Blue => "bg-blue-500",
            Self::Green => "bg-green-500",
            Self::Red => "bg-red-500",
            Self::Purple => "bg-purple-500",
            Self::Orange => "bg-orange-500",
            Self::Teal => "bg-teal-500",
        }
    }
}

/// Directory entry for one board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSummary {
    id: BoardId,
    title: String,
    color: BoardColor,
}

impl BoardSummary {
    /// Returns the board identifier.
    #[must_use]
    pub const fn id(&self) -> BoardId {
        self.id
    }

    /// Returns the board title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the tile color.
    #[must_use]
    pub const fn color(&self) -> BoardColor {
        self.color
    }
}

/// Ordered directory of boards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Workspace {
    boards: Vec<BoardSummary>,
}

impl Workspace {
    /// Creates an empty workspace.
    #[must_use]
    pub const fn new() -> Self {
        Self { boards: Vec::new() }
    }

    /// Creates the starter workspace with three example boards.
    #[must_use]
    pub fn sample(ids: &impl IdGenerator) -> Self {
        let boards = [
            ("Web Development Project", BoardColor::Blue),
            ("Marketing Campaign", BoardColor::Green),
            ("Product Launch", BoardColor::Purple),
        ]
        .into_iter()
        .map(|(title, color)| BoardSummary {
            id: ids.next_board_id(),
            title: title.to_owned(),
            color,
        })
        .collect();
        Self { boards }
    }

    /// Returns the boards in display order.
    #[must_use]
    pub fn boards(&self) -> &[BoardSummary] {
        &self.boards
    }

    /// Appends a new board entry.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::EmptyBoardTitle`] when `title` is blank; the
    /// workspace is unchanged.
    pub fn add_board(
        &mut self,
        title: &str,
        color: BoardColor,
        ids: &impl IdGenerator,
        clock: &impl Clock,
    ) -> Result<Notification, BoardError> {
        let trimmed = title.trim();
        if trimmed.is_empty() {
            warn!("rejected board with empty name");
            return Err(BoardError::EmptyBoardTitle);
        }
        let summary = BoardSummary {
            id: ids.next_board_id(),
            title: trimmed.to_owned(),
            color,
        };
        debug!(board_id = %summary.id, "board created");
        self.boards.push(summary);
        Ok(Notification::success("New board created!", clock))
    }
}
