use super::prelude::*;

const DEFAULT_FEED_LIMIT: u64 = 100;

/// Scope and bounds of one feed page. Exactly one of the scope ids has to
/// be set; the most specific one wins if several are given.
#[derive(Debug, Clone, Default)]
pub struct ActivityQuery {
    pub board_id: Option<Id>,
    pub task_id: Option<Id>,
    pub user_id: Option<Id>,

    pub since: Option<TimestampMs>,
    pub until: Option<TimestampMs>,

    pub offset: Option<u64>,
    pub limit: Option<u64>,
}

/// Loads one page of events, newest first. Ordering and pagination are the
/// store's job; this merely picks the scope.
pub fn query_activities<R: ActivityRepo>(
    repo: &R,
    query: ActivityQuery,
) -> Result<Vec<ActivityEvent>> {
    let ActivityQuery {
        board_id,
        task_id,
        user_id,
        since,
        until,
        offset,
        limit,
    } = query;
    let limit = limit.unwrap_or_else(|| {
        log::info!("No limit requested - using the default limit {DEFAULT_FEED_LIMIT} for the activity feed");
        DEFAULT_FEED_LIMIT
    });
    let pagination = Pagination {
        offset,
        limit: Some(limit),
    };
    let range = ActivityTimeRange { since, until };
    if let Some(task_id) = task_id {
        return Ok(repo.activities_of_task(task_id.as_str(), &range, &pagination)?);
    }
    if let Some(board_id) = board_id {
        return Ok(repo.activities_of_board(board_id.as_str(), &range, &pagination)?);
    }
    if let Some(user_id) = user_id {
        return Ok(repo.activities_of_user(user_id.as_str(), &range, &pagination)?);
    }
    Err(Error::MissingScope)
}

#[cfg(test)]
mod tests {
    use super::{
        super::{record_activity, tests::MockDb, NewActivity},
        *,
    };

    fn record_created(db: &MockDb, by: &str, board_id: &str, task_id: &str) -> ActivityEvent {
        record_activity(
            db,
            NewActivity {
                by: by.into(),
                board_id: board_id.into(),
                payload: ActivityPayload::TaskCreated {
                    task_id: task_id.into(),
                },
            },
        )
        .unwrap()
    }

    #[test]
    fn scope_filters_apply() {
        let db = MockDb::default();
        record_created(&db, "alice", "b1", "t1");
        record_created(&db, "alice", "b1", "t2");
        record_created(&db, "bob", "b2", "t3");

        let by_board = query_activities(
            &db,
            ActivityQuery {
                board_id: Some("b1".into()),
                ..Default::default()
            },
        )
        .unwrap();
        assert_eq!(2, by_board.len());

        let by_task = query_activities(
            &db,
            ActivityQuery {
                task_id: Some("t3".into()),
                ..Default::default()
            },
        )
        .unwrap();
        assert_eq!(1, by_task.len());

        let by_user = query_activities(
            &db,
            ActivityQuery {
                user_id: Some("alice".into()),
                ..Default::default()
            },
        )
        .unwrap();
        assert_eq!(2, by_user.len());
    }

    #[test]
    fn newest_first_with_pagination() {
        let db = MockDb::default();
        for i in 0..5 {
            let mut event = record_created(&db, "alice", "b1", &format!("t{i}"));
            // Rewrite the timestamps to get a deterministic order.
            event.at = TimestampMs::from_millis(i);
            db.activities.borrow_mut()[i as usize] = event;
        }
        let page = query_activities(
            &db,
            ActivityQuery {
                board_id: Some("b1".into()),
                offset: Some(1),
                limit: Some(2),
                ..Default::default()
            },
        )
        .unwrap();
        assert_eq!(2, page.len());
        assert!(page[0].at > page[1].at);
        assert_eq!(TimestampMs::from_millis(3), page[0].at);
    }

    #[test]
    fn time_range_is_inclusive() {
        let db = MockDb::default();
        for i in 0..3 {
            let mut event = record_created(&db, "alice", "b1", &format!("t{i}"));
            event.at = TimestampMs::from_millis(i * 10);
            db.activities.borrow_mut()[i as usize] = event;
        }
        let page = query_activities(
            &db,
            ActivityQuery {
                board_id: Some("b1".into()),
                since: Some(TimestampMs::from_millis(0)),
                until: Some(TimestampMs::from_millis(10)),
                ..Default::default()
            },
        )
        .unwrap();
        assert_eq!(2, page.len());
    }

    #[test]
    fn missing_scope_is_an_error() {
        let db = MockDb::default();
        assert!(matches!(
            query_activities(&db, ActivityQuery::default()),
            Err(Error::MissingScope)
        ));
    }
}
