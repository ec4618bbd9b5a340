use tasktrail_core::{feed, repositories::ActivityRepo as _, usecases};

use crate::{sqlite, ActivityEvent, Result};

#[derive(Debug, Clone)]
pub struct FeedEntry {
    pub event: ActivityEvent,
    pub message: String,
}

/// Loads one page of events for a scope and renders each of them.
pub fn activity_feed(
    connections: &sqlite::Connections,
    query: usecases::ActivityQuery,
) -> Result<Vec<FeedEntry>> {
    let connection = connections.shared()?;
    let events = usecases::query_activities(&connection, query)?;
    let mut entries = Vec::with_capacity(events.len());
    for event in events {
        let names = usecases::resolve_activity_names(&connection, &event)?;
        let message = feed::activity_message(&event, &names);
        entries.push(FeedEntry { event, message });
    }
    Ok(entries)
}

// Backs external task deletion. The database cascades on its own; this
// exists for retention jobs that clear the trail without touching the task.
pub fn purge_activities_of_task(
    connections: &sqlite::Connections,
    task_id: &str,
) -> Result<usize> {
    let mut connection = connections.exclusive()?;
    let purged = connection.transaction(|conn| conn.delete_activities_of_task(task_id))?;
    if purged > 0 {
        info!("Purged {purged} activities of task {task_id}");
    }
    Ok(purged)
}

pub fn purge_activities_of_board(
    connections: &sqlite::Connections,
    board_id: &str,
) -> Result<usize> {
    let mut connection = connections.exclusive()?;
    let purged = connection.transaction(|conn| conn.delete_activities_of_board(board_id))?;
    if purged > 0 {
        info!("Purged {purged} activities of board {board_id}");
    }
    Ok(purged)
}
