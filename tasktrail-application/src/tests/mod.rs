use std::cell::RefCell;

use tasktrail_core::{
    gateways::notify::NotificationGateway,
    repositories::*,
    usecases::{ActivityQuery, NewActivity},
};

use super::{error::*, prelude as flows, *};

#[derive(Default)]
struct RecordingNotifyGw {
    messages: RefCell<Vec<String>>,
}

impl NotificationGateway for RecordingNotifyGw {
    fn activity_recorded(&self, _event: &ActivityEvent, message: &str) {
        self.messages.borrow_mut().push(message.to_string());
    }
}

struct BackendFixture {
    db_connections: sqlite::Connections,
    notify: RecordingNotifyGw,
}

impl BackendFixture {
    fn new() -> Self {
        let db_connections = sqlite::Connections::init(":memory:", 1).unwrap();
        tasktrail_db_sqlite::run_embedded_database_migrations(db_connections.exclusive().unwrap());
        let fixture = Self {
            db_connections,
            notify: RecordingNotifyGw::default(),
        };
        fixture.seed();
        fixture
    }

    // A board with two columns, one task and two users.
    fn seed(&self) {
        let db = self.db_connections.exclusive().unwrap();
        db.create_user(&User {
            id: "alice".into(),
            name: "Alice".into(),
        })
        .unwrap();
        db.create_user(&User {
            id: "bob".into(),
            name: "Bob".into(),
        })
        .unwrap();
        db.create_board(&Board {
            id: "board".into(),
            name: "Sprint 12".into(),
        })
        .unwrap();
        db.create_column(&Column {
            id: "col-todo".into(),
            board_id: "board".into(),
            name: "To Do".into(),
        })
        .unwrap();
        db.create_column(&Column {
            id: "col-done".into(),
            board_id: "board".into(),
            name: "Done".into(),
        })
        .unwrap();
        db.create_task(&Task {
            id: "task".into(),
            board_id: "board".into(),
            column_id: Some("col-todo".into()),
            title: "Fix login".into(),
        })
        .unwrap();
    }

    fn count_activities(&self) -> usize {
        self.db_connections
            .shared()
            .unwrap()
            .count_activities()
            .unwrap()
    }

    fn board_feed(&self) -> Vec<flows::FeedEntry> {
        flows::activity_feed(
            &self.db_connections,
            ActivityQuery {
                board_id: Some("board".into()),
                ..Default::default()
            },
        )
        .unwrap()
    }
}

fn new_comment(by: &str, content: &str) -> NewActivity {
    NewActivity {
        by: by.into(),
        board_id: "board".into(),
        payload: ActivityPayload::CommentAdded {
            task_id: "task".into(),
            content: content.into(),
        },
    }
}

#[test]
fn record_and_render_task_moved() {
    let fixture = BackendFixture::new();
    flows::record_activity(
        &fixture.db_connections,
        NewActivity {
            by: "alice".into(),
            board_id: "board".into(),
            payload: ActivityPayload::TaskMoved {
                task_id: "task".into(),
                old_column_id: "col-todo".into(),
                new_column_id: "col-done".into(),
            },
        },
    )
    .unwrap();

    let feed = fixture.board_feed();
    assert_eq!(1, feed.len());
    let message = &feed[0].message;
    assert!(message.contains("Alice"));
    assert!(message.contains("To Do"));
    assert!(message.contains("Done"));
}

#[test]
fn record_and_render_comment() {
    let fixture = BackendFixture::new();
    let event = flows::record_activity(
        &fixture.db_connections,
        new_comment("alice", "Looks good"),
    )
    .unwrap();

    let feed = fixture.board_feed();
    assert_eq!(1, feed.len());
    assert_eq!(event.id, feed[0].event.id);
    assert!(feed[0].message.contains("Alice"));
    assert!(feed[0].message.contains("commented"));
}

#[test]
fn reject_whitespace_only_comment() {
    let fixture = BackendFixture::new();
    let err = flows::record_activity(&fixture.db_connections, new_comment("alice", "   "))
        .err()
        .unwrap();
    assert!(matches!(
        err,
        AppError::Business(BError::Parameter(usecases::Error::EmptyComment))
    ));
    assert_eq!("Empty comment", user_facing_message(&err));
    assert_eq!(0, fixture.count_activities());
}

#[test]
fn best_effort_recording_never_fails() {
    let fixture = BackendFixture::new();
    // An unknown board makes the write fail inside the store.
    let new = NewActivity {
        by: "alice".into(),
        board_id: "no-such-board".into(),
        payload: ActivityPayload::TaskCreated {
            task_id: "task".into(),
        },
    };
    let recorded =
        flows::record_activity_best_effort(&fixture.db_connections, &fixture.notify, new);
    assert!(recorded.is_none());
    assert!(fixture.notify.messages.borrow().is_empty());
    assert_eq!(0, fixture.count_activities());
}

#[test]
fn best_effort_recording_notifies_with_rendered_message() {
    let fixture = BackendFixture::new();
    let recorded = flows::record_activity_best_effort(
        &fixture.db_connections,
        &fixture.notify,
        new_comment("alice", "Looks good"),
    );
    assert!(recorded.is_some());
    let messages = fixture.notify.messages.borrow();
    assert_eq!(1, messages.len());
    assert!(messages[0].contains("Alice"));
}

#[test]
fn owner_edits_comment() {
    let fixture = BackendFixture::new();
    let event =
        flows::record_activity(&fixture.db_connections, new_comment("alice", "Looks god"))
            .unwrap();
    flows::edit_comment(
        &fixture.db_connections,
        "alice",
        event.id.as_str(),
        "Looks good",
    )
    .unwrap();

    let feed = fixture.board_feed();
    let stored = &feed[0].event;
    assert_eq!(event.id, stored.id);
    assert_eq!(event.by, stored.by);
    assert_eq!(event.at, stored.at);
    let ActivityPayload::CommentAdded { ref content, .. } = stored.payload else {
        panic!("expected a comment payload");
    };
    assert_eq!("Looks good", content);
}

#[test]
fn non_owner_cannot_edit_comment() {
    let fixture = BackendFixture::new();
    let event =
        flows::record_activity(&fixture.db_connections, new_comment("alice", "Looks good"))
            .unwrap();
    let err = flows::edit_comment(&fixture.db_connections, "bob", event.id.as_str(), "Hijacked")
        .err()
        .unwrap();
    assert!(matches!(
        err,
        AppError::Business(BError::Parameter(usecases::Error::CommentNotFound))
    ));

    let feed = fixture.board_feed();
    let ActivityPayload::CommentAdded { ref content, .. } = feed[0].event.payload else {
        panic!("expected a comment payload");
    };
    assert_eq!("Looks good", content);
}

#[test]
fn owner_deletes_comment() {
    let fixture = BackendFixture::new();
    let event =
        flows::record_activity(&fixture.db_connections, new_comment("alice", "Looks good"))
            .unwrap();
    flows::delete_comment(&fixture.db_connections, "alice", event.id.as_str()).unwrap();
    assert_eq!(0, fixture.count_activities());
}

#[test]
fn render_with_deleted_referents() {
    let fixture = BackendFixture::new();
    flows::record_activity(
        &fixture.db_connections,
        NewActivity {
            by: "alice".into(),
            board_id: "board".into(),
            payload: ActivityPayload::TaskMoved {
                task_id: "task".into(),
                old_column_id: "col-todo".into(),
                new_column_id: "col-done".into(),
            },
        },
    )
    .unwrap();
    {
        let db = fixture.db_connections.exclusive().unwrap();
        db.delete_column("col-todo").unwrap();
        db.delete_user("alice").unwrap();
    }

    let feed = fixture.board_feed();
    assert_eq!(1, feed.len());
    let message = &feed[0].message;
    assert!(message.contains("A removed user"));
    assert!(message.contains("a removed column"));
    assert!(message.contains("Done"));
}

#[test]
fn deleting_a_task_cascades_to_its_activities() {
    let fixture = BackendFixture::new();
    flows::record_activity(&fixture.db_connections, new_comment("alice", "Looks good")).unwrap();
    flows::record_activity(
        &fixture.db_connections,
        NewActivity {
            by: "alice".into(),
            board_id: "board".into(),
            payload: ActivityPayload::TaskCreated {
                task_id: "task".into(),
            },
        },
    )
    .unwrap();
    assert_eq!(2, fixture.count_activities());

    fixture
        .db_connections
        .exclusive()
        .unwrap()
        .delete_task("task")
        .unwrap();
    assert_eq!(0, fixture.count_activities());
}

#[test]
fn feed_is_paginated_newest_first() {
    let fixture = BackendFixture::new();
    for i in 0..5 {
        flows::record_activity(
            &fixture.db_connections,
            new_comment("alice", &format!("Comment {i}")),
        )
        .unwrap();
    }
    let page = flows::activity_feed(
        &fixture.db_connections,
        ActivityQuery {
            board_id: Some("board".into()),
            offset: Some(1),
            limit: Some(2),
            ..Default::default()
        },
    )
    .unwrap();
    assert_eq!(2, page.len());
    assert!(page[0].event.at >= page[1].event.at);
    assert!(page[0].message.contains("Comment 3"));
    assert!(page[1].message.contains("Comment 2"));
}

#[test]
fn purge_board_trail() {
    let fixture = BackendFixture::new();
    flows::record_activity(&fixture.db_connections, new_comment("alice", "Looks good")).unwrap();
    let purged = flows::purge_activities_of_board(&fixture.db_connections, "board").unwrap();
    assert_eq!(1, purged);
    assert_eq!(0, fixture.count_activities());
}
