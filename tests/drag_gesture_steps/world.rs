//! Shared world state for drag gesture BDD scenarios.

use std::sync::Arc;

use rstest::fixture;
use trellis::{
    board::{
        adapters::SequentialIdGenerator,
        domain::{Board, CardId, ListId},
        services::{BoardController, IntentResponse},
    },
    config::TrellisConfig,
};
use mockable::DefaultClock;

/// Controller type used by the BDD world.
pub type TestController = BoardController<SequentialIdGenerator, DefaultClock>;

/// Scenario world for drag gesture behaviour tests.
pub struct DragWorld {
    pub controller: TestController,
    pub board_at_pickup: Option<Arc<Board>>,
    pub last_response: Option<IntentResponse>,
}

impl DragWorld {
    /// Creates a world around an empty board.
    ///
    /// # Panics
    ///
    /// Panics if the default configuration cannot build a controller.
    #[must_use]
    pub fn new() -> Self {
        let controller = BoardController::from_config(
            TrellisConfig::default(),
            Arc::new(SequentialIdGenerator::new()),
            Arc::new(DefaultClock),
        )
        .expect("default configuration should build a controller");

        Self {
            controller,
            board_at_pickup: None,
            last_response: None,
        }
    }

    /// Finds a list by title.
    pub fn list_id(&self, title: &str) -> Result<ListId, eyre::Report> {
        self.controller
            .snapshot()
            .lists()
            .iter()
            .find(|list| list.title().as_str() == title)
            .map(trellis::board::domain::List::id)
            .ok_or_else(|| eyre::eyre!("no list titled {title:?}"))
    }

    /// Finds a card by title anywhere on the board.
    pub fn card_id(&self, title: &str) -> Result<CardId, eyre::Report> {
        self.controller
            .snapshot()
            .lists()
            .iter()
            .flat_map(|list| list.cards())
            .find(|card| card.title().as_str() == title)
            .map(trellis::board::domain::Card::id)
            .ok_or_else(|| eyre::eyre!("no card titled {title:?}"))
    }

    /// Returns the card titles of a list in display order.
    pub fn card_titles(&self, list_title: &str) -> Result<Vec<String>, eyre::Report> {
        let list_id = self.list_id(list_title)?;
        let board = self.controller.snapshot();
        let list = board
            .list(list_id)
            .ok_or_else(|| eyre::eyre!("list {list_title:?} disappeared"))?;
        Ok(list
            .cards()
            .iter()
            .map(|card| card.title().as_str().to_owned())
            .collect())
    }
}

impl Default for DragWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> DragWorld {
    DragWorld::default()
}
