use super::prelude::*;
use crate::util::validate::{AutoCorrect as _, Validate as _};

#[derive(Debug, Clone)]
pub struct NewActivity {
    pub by: Id,
    pub board_id: Id,
    pub payload: ActivityPayload,
}

/// Validates and appends one event.
///
/// Each recording is an independent insert: no event is ever derived from
/// another one, so concurrent recordings need no coordination beyond the
/// store's per-row write atomicity.
pub fn record_activity<R: ActivityRepo>(repo: &R, new: NewActivity) -> Result<ActivityEvent> {
    let NewActivity {
        by,
        board_id,
        payload,
    } = new;
    let event = ActivityEvent::now(by, board_id, payload.auto_correct());
    event.validate()?;
    log::debug!(
        "Recording {:?} activity on board {}",
        event.kind(),
        event.board_id
    );
    repo.create_activity(event.clone())?;
    Ok(event)
}

#[cfg(test)]
mod tests {
    use super::{super::tests::MockDb, *};
    use crate::util::validate::NEW_COMMENT_MAX_CHARS;

    fn new_comment(content: &str) -> NewActivity {
        NewActivity {
            by: "alice".into(),
            board_id: "board".into(),
            payload: ActivityPayload::CommentAdded {
                task_id: "task".into(),
                content: content.into(),
            },
        }
    }

    #[test]
    fn record_one_event() {
        let db = MockDb::default();
        let event = record_activity(&db, new_comment("Looks good")).unwrap();
        let stored = db.activities.borrow();
        assert_eq!(1, stored.len());
        assert_eq!(event, stored[0]);
        assert_eq!(Id::from("alice"), stored[0].by);
        assert_eq!(Id::from("board"), stored[0].board_id);
        assert_eq!(ActivityKind::CommentAdded, stored[0].kind());
    }

    #[test]
    fn comment_content_is_stored_trimmed() {
        let db = MockDb::default();
        record_activity(&db, new_comment("  Looks good \n")).unwrap();
        let stored = db.activities.borrow();
        let ActivityPayload::CommentAdded { ref content, .. } = stored[0].payload else {
            panic!("expected a comment payload");
        };
        assert_eq!("Looks good", content);
    }

    #[test]
    fn reject_whitespace_only_comment() {
        let db = MockDb::default();
        match record_activity(&db, new_comment("   ")).err().unwrap() {
            Error::EmptyComment => (),
            err => panic!("unexpected error: {err:?}"),
        }
        assert!(db.activities.borrow().is_empty());
    }

    #[test]
    fn reject_overlong_comment() {
        let db = MockDb::default();
        let content = "x".repeat(NEW_COMMENT_MAX_CHARS + 1);
        match record_activity(&db, new_comment(&content)).err().unwrap() {
            Error::CommentTooLong => (),
            err => panic!("unexpected error: {err:?}"),
        }
        assert!(db.activities.borrow().is_empty());
    }

    #[test]
    fn reject_missing_actor() {
        let db = MockDb::default();
        let new = NewActivity {
            by: "".into(),
            board_id: "board".into(),
            payload: ActivityPayload::TaskCreated {
                task_id: "task".into(),
            },
        };
        match record_activity(&db, new).err().unwrap() {
            Error::Actor => (),
            err => panic!("unexpected error: {err:?}"),
        }
        assert!(db.activities.borrow().is_empty());
    }

    #[test]
    fn reject_missing_board() {
        let db = MockDb::default();
        let new = NewActivity {
            by: "alice".into(),
            board_id: "".into(),
            payload: ActivityPayload::TaskCreated {
                task_id: "task".into(),
            },
        };
        match record_activity(&db, new).err().unwrap() {
            Error::Board => (),
            err => panic!("unexpected error: {err:?}"),
        }
        assert!(db.activities.borrow().is_empty());
    }
}
