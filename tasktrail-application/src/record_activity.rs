use tasktrail_core::{feed, gateways::notify::NotificationGateway, usecases};

use crate::{error::AppError, sqlite, ActivityEvent, Result};

pub fn record_activity(
    connections: &sqlite::Connections,
    new: usecases::NewActivity,
) -> Result<ActivityEvent> {
    let mut connection = connections.exclusive()?;
    let event = connection.transaction(|conn| usecases::record_activity(conn, new))?;
    Ok(event)
}

/// Records an activity on behalf of a mutation that has already succeeded.
///
/// The trail is advisory: a failed recording is logged and reported through
/// the return value, but must never fail the mutation it describes. That is
/// why this returns an `Option` instead of a `Result` - the error channel
/// ends here.
pub fn record_activity_best_effort(
    connections: &sqlite::Connections,
    notify: &dyn NotificationGateway,
    new: usecases::NewActivity,
) -> Option<ActivityEvent> {
    match record_activity(connections, new) {
        Ok(event) => {
            notify_activity_recorded(connections, notify, &event);
            Some(event)
        }
        Err(err) => {
            warn!("Failed to record activity: {err}");
            None
        }
    }
}

fn notify_activity_recorded(
    connections: &sqlite::Connections,
    notify: &dyn NotificationGateway,
    event: &ActivityEvent,
) {
    let names = connections
        .shared()
        .map_err(AppError::from)
        .and_then(|conn| Ok(usecases::resolve_activity_names(&conn, event)?))
        .unwrap_or_else(|err| {
            warn!(
                "Failed to resolve names for activity {}: {err}",
                event.id
            );
            Default::default()
        });
    let message = feed::activity_message(event, &names);
    notify.activity_recorded(event, &message);
}
