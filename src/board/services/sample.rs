//! Starter board shown to new users.

use crate::board::{
    domain::{Board, BoardError, Card, CardDraft, List, ListTitle},
    ports::IdGenerator,
};
use chrono::NaiveDate;

struct SampleCard {
    title: &'static str,
    description: &'static str,
    labels: &'static [&'static str],
    due: (u32, u32),
}

const SAMPLE_LISTS: [(&str, &[SampleCard]); 3] = [
    (
        "To Do",
        &[
            SampleCard {
                title: "Research API integration",
                description: "Look into REST API options for the project",
                labels: &["Development", "Research"],
                due: (4, 12),
            },
            SampleCard {
                title: "Create wireframes",
                description: "Design wireframes for the dashboard UI",
                labels: &["Design"],
                due: (4, 10),
            },
        ],
    ),
    (
        "In Progress",
        &[
            SampleCard {
                title: "Implement authentication",
                description: "Build login and signup flows",
                labels: &["Development", "High Priority"],
                due: (4, 15),
            },
            SampleCard {
                title: "User testing prep",
                description: "Prepare test scripts for user acceptance testing",
                labels: &["Research"],
                due: (4, 18),
            },
        ],
    ),
    (
        "Done",
        &[SampleCard {
            title: "Initial project setup",
            description: "Setup repository and project structure",
            labels: &["Development"],
            due: (4, 5),
        }],
    ),
];

const SAMPLE_YEAR: i32 = 2023;

/// Builds the three-list starter board with its five example cards.
///
/// # Errors
///
/// Returns [`BoardError`] if the built-in titles fail validation or `ids`
/// repeats an identifier.
pub fn sample_board(ids: &(impl IdGenerator + ?Sized)) -> Result<Board, BoardError> {
    let mut lists = Vec::with_capacity(SAMPLE_LISTS.len());
    for (list_title, cards) in SAMPLE_LISTS {
        let mut list = List::new(ids.next_list_id(), ListTitle::new(list_title)?);
        for sample in cards {
            let mut draft = CardDraft::new(sample.title)
                .with_description(sample.description)
                .with_labels(sample.labels.iter().copied());
            let (month, day) = sample.due;
            if let Some(due_date) = NaiveDate::from_ymd_opt(SAMPLE_YEAR, month, day) {
                draft = draft.with_due_date(due_date);
            }
            list.push_card(Card::from_draft(ids.next_card_id(), draft)?);
        }
        lists.push(list);
    }
    Board::from_lists(lists)
}
