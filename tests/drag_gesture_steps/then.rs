//! Then steps for drag gesture BDD scenarios.

use super::world::DragWorld;
use rstest_bdd_macros::then;

#[then("the board has not changed since pick-up")]
fn board_unchanged(world: &DragWorld) -> Result<(), eyre::Report> {
    let before = world
        .board_at_pickup
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing pick-up snapshot"))?;
    let now = world.controller.snapshot();
    eyre::ensure!(**before == *now, "board changed during the gesture");
    Ok(())
}

#[then(r#"the list "{list}" is highlighted"#)]
fn list_highlighted(world: &DragWorld, list: String) -> Result<(), eyre::Report> {
    let list_id = world.list_id(&list)?;
    eyre::ensure!(
        world.controller.drag_session().is_hovered(list_id),
        "list {list:?} is not the hovered list"
    );
    Ok(())
}

#[then(r#"the list "{list}" holds only "{card}""#)]
fn list_holds_only(world: &DragWorld, list: String, card: String) -> Result<(), eyre::Report> {
    let titles = world.card_titles(&list)?;
    eyre::ensure!(
        titles == [card.clone()],
        "expected {list:?} to hold only {card:?}, found {titles:?}"
    );
    Ok(())
}

#[then(r#"the notification reads "{message}""#)]
fn notification_reads(world: &DragWorld, message: String) -> Result<(), eyre::Report> {
    let actual = world
        .last_response
        .as_ref()
        .and_then(|response| response.notification.as_ref())
        .map(trellis::board::domain::Notification::message)
        .ok_or_else(|| eyre::eyre!("no notification was produced"))?;
    eyre::ensure!(actual == message, "expected {message:?}, found {actual:?}");
    Ok(())
}

#[then("no notification is shown")]
fn no_notification(world: &DragWorld) -> Result<(), eyre::Report> {
    let notification = world
        .last_response
        .as_ref()
        .and_then(|response| response.notification.as_ref());
    eyre::ensure!(
        notification.is_none(),
        "unexpected notification {notification:?}"
    );
    Ok(())
}

#[then("no drag is in progress")]
fn no_drag(world: &DragWorld) -> Result<(), eyre::Report> {
    eyre::ensure!(
        !world.controller.drag_session().is_dragging(),
        "drag session is still active"
    );
    Ok(())
}
