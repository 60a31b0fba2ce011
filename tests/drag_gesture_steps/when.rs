//! When steps for drag gesture BDD scenarios.

use super::world::DragWorld;
use rstest_bdd_macros::when;
use trellis::board::services::Intent;

#[when(r#"the card "{card}" is picked up from "{list}""#)]
fn card_picked_up(world: &mut DragWorld, card: String, list: String) -> Result<(), eyre::Report> {
    let card_id = world.card_id(&card)?;
    let source_list_id = world.list_id(&list)?;
    world.board_at_pickup = Some(world.controller.snapshot());

    let response = world.controller.handle(Intent::BeginDrag {
        card_id,
        source_list_id,
    });
    eyre::ensure!(
        world.controller.drag_session().is_dragged(card_id),
        "pick-up was not accepted: {response:?}"
    );
    Ok(())
}

#[when(r#"the pointer hovers over "{list}""#)]
fn pointer_hovers(world: &mut DragWorld, list: String) -> Result<(), eyre::Report> {
    let list_id = world.list_id(&list)?;
    world.last_response = Some(world.controller.handle(Intent::HoverList { list_id }));
    Ok(())
}

#[when(r#"the card is dropped on "{list}""#)]
fn card_dropped(world: &mut DragWorld, list: String) -> Result<(), eyre::Report> {
    let target_list_id = world.list_id(&list)?;
    world.last_response = Some(world.controller.handle(Intent::Drop {
        target_list_id: Some(target_list_id),
    }));
    Ok(())
}

#[when("the card is released outside any list")]
fn card_released_outside(world: &mut DragWorld) {
    world.last_response = Some(world.controller.handle(Intent::Drop {
        target_list_id: None,
    }));
}

#[when("the drag is cancelled")]
fn drag_cancelled(world: &mut DragWorld) {
    world.last_response = Some(world.controller.handle(Intent::CancelDrag));
}
