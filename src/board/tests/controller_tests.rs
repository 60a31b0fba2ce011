//! Unit tests for intent dispatch.

use std::sync::Arc;

use crate::board::{
    adapters::SequentialIdGenerator,
    domain::{CardDraft, ErrorKind, ListId},
    services::{BoardController, ConfirmedListDeletion, Intent},
};
use crate::config::TrellisConfig;
use mockable::DefaultClock;
use rstest::{fixture, rstest};

type TestController = BoardController<SequentialIdGenerator, DefaultClock>;

#[fixture]
fn controller() -> TestController {
    BoardController::from_config(
        TrellisConfig::default(),
        Arc::new(SequentialIdGenerator::new()),
        Arc::new(DefaultClock),
    )
    .expect("controller should build")
}

fn list_id_at(controller: &TestController, position: usize) -> ListId {
    controller
        .snapshot()
        .lists()
        .get(position)
        .map(crate::board::domain::List::id)
        .expect("list should exist")
}

fn message(response: &crate::board::services::IntentResponse) -> Option<&str> {
    response.notification.as_ref().map(|note| note.message())
}

#[rstest]
fn add_list_intent_returns_snapshot_and_success(mut controller: TestController) {
    let response = controller.handle(Intent::AddList {
        title: "To Do".to_owned(),
    });

    assert_eq!(response.board.lists().len(), 1);
    assert_eq!(message(&response), Some("New list added!"));
    assert!(Arc::ptr_eq(&response.board, &controller.snapshot()));
}

#[rstest]
fn rejected_intent_reports_failure_and_keeps_board(mut controller: TestController) {
    let before = controller.snapshot();

    let response = controller.handle(Intent::AddList {
        title: "   ".to_owned(),
    });

    let notification = response.notification.expect("failure notification");
    assert_eq!(notification.failure_kind(), Some(ErrorKind::Validation));
    assert_eq!(notification.message(), "List title cannot be empty");
    assert!(Arc::ptr_eq(&response.board, &before));
}

#[rstest]
fn missing_list_reports_not_found(mut controller: TestController) {
    let response = controller.handle(Intent::AddCard {
        list_id: ListId::new(),
        draft: CardDraft::new("Orphan"),
    });

    assert_eq!(
        response
            .notification
            .and_then(|note| note.failure_kind()),
        Some(ErrorKind::NotFound)
    );
}

#[rstest]
fn drag_flow_moves_card_once(mut controller: TestController) {
    controller.handle(Intent::AddList {
        title: "To Do".to_owned(),
    });
    controller.handle(Intent::AddList {
        title: "Done".to_owned(),
    });
    let todo = list_id_at(&controller, 0);
    let done = list_id_at(&controller, 1);
    controller.handle(Intent::AddCard {
        list_id: todo,
        draft: CardDraft::new("Ship it"),
    });
    let card_id = controller
        .snapshot()
        .list(todo)
        .and_then(|list| list.card_ids().next())
        .expect("card should exist");

    controller.handle(Intent::BeginDrag {
        card_id,
        source_list_id: todo,
    });
    let before_drop = controller.snapshot();
    for list_id in [done, todo, done] {
        let hover = controller.handle(Intent::HoverList { list_id });
        assert!(hover.notification.is_none());
        assert!(Arc::ptr_eq(&hover.board, &before_drop));
    }
    assert!(controller.drag_session().is_hovered(done));

    let dropped = controller.handle(Intent::Drop {
        target_list_id: Some(done),
    });

    assert_eq!(message(&dropped), Some("Moved 'Ship it' to Done"));
    assert_eq!(dropped.board.list(done).map(|list| list.len()), Some(1));
    assert_eq!(dropped.board.list(todo).map(|list| list.len()), Some(0));
    assert!(!controller.drag_session().is_dragging());
}

#[rstest]
fn begin_drag_on_unknown_card_fails(mut controller: TestController) {
    controller.handle(Intent::AddList {
        title: "To Do".to_owned(),
    });
    let todo = list_id_at(&controller, 0);

    let response = controller.handle(Intent::BeginDrag {
        card_id: crate::board::domain::CardId::new(),
        source_list_id: todo,
    });

    assert_eq!(
        response
            .notification
            .and_then(|note| note.failure_kind()),
        Some(ErrorKind::NotFound)
    );
    assert!(!controller.drag_session().is_dragging());
}

#[rstest]
fn stray_gesture_events_are_ignored(mut controller: TestController) {
    let before = controller.snapshot();

    let hover = controller.handle(Intent::HoverList {
        list_id: ListId::new(),
    });
    let dropped = controller.handle(Intent::Drop {
        target_list_id: None,
    });
    let cancelled = controller.handle(Intent::CancelDrag);

    for response in [hover, dropped, cancelled] {
        assert!(response.notification.is_none());
        assert!(Arc::ptr_eq(&response.board, &before));
    }
}

#[rstest]
fn confirmed_delete_removes_list(mut controller: TestController) {
    controller.handle(Intent::AddList {
        title: "Scratch".to_owned(),
    });
    let scratch = list_id_at(&controller, 0);

    let response = controller.handle(Intent::DeleteList(ConfirmedListDeletion::confirmed(
        scratch,
    )));

    assert!(response.board.lists().is_empty());
    assert_eq!(message(&response), Some("List deleted!"));
}

#[rstest]
fn label_colors_fall_back_to_default(controller: TestController) {
    assert_eq!(controller.label_color("Design"), "bg-purple-500");
    assert_eq!(controller.label_color("Customer"), "bg-blue-500");
    assert_eq!(controller.label_catalog().options().len(), 6);
}
