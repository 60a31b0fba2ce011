//! Given steps for drag gesture BDD scenarios.

use super::world::DragWorld;
use rstest_bdd_macros::given;
use trellis::board::{domain::CardDraft, services::Intent};

#[given(r#"a board with lists "{first}" and "{second}""#)]
fn board_with_lists(
    world: &mut DragWorld,
    first: String,
    second: String,
) -> Result<(), eyre::Report> {
    for title in [first, second] {
        let response = world.controller.handle(Intent::AddList { title });
        let succeeded = response
            .notification
            .as_ref()
            .is_some_and(trellis::board::domain::Notification::is_success);
        eyre::ensure!(succeeded, "list creation failed: {response:?}");
    }
    Ok(())
}

#[given(r#"the list "{list}" holds cards "{first}" and "{second}""#)]
fn list_holds_cards(
    world: &mut DragWorld,
    list: String,
    first: String,
    second: String,
) -> Result<(), eyre::Report> {
    let list_id = world.list_id(&list)?;
    for title in [first, second] {
        let response = world.controller.handle(Intent::AddCard {
            list_id,
            draft: CardDraft::new(title),
        });
        let succeeded = response
            .notification
            .as_ref()
            .is_some_and(trellis::board::domain::Notification::is_success);
        eyre::ensure!(succeeded, "card creation failed: {response:?}");
    }
    Ok(())
}
