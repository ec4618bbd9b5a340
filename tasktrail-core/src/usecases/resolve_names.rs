use super::prelude::*;
use crate::feed::ActivityNames;

/// Looks up the display names of everything the event references.
///
/// Referents that have been deleted in the meantime resolve to `None`;
/// rendering substitutes placeholders for them. A lookup error is still an
/// error - only a clean miss counts as "deleted".
pub fn resolve_activity_names<R>(repo: &R, event: &ActivityEvent) -> Result<ActivityNames>
where
    R: UserRepo + TaskRepo + ColumnRepo,
{
    let mut names = ActivityNames {
        actor: repo.try_get_user(event.by.as_str())?.map(|u| u.name),
        ..Default::default()
    };
    if let Some(task_id) = event.payload.task_id() {
        names.task = repo.try_get_task(task_id.as_str())?.map(|t| t.title);
    }
    use ActivityPayload as P;
    match &event.payload {
        P::TaskMoved {
            old_column_id,
            new_column_id,
            ..
        } => {
            names.old_column = repo.try_get_column(old_column_id.as_str())?.map(|c| c.name);
            names.new_column = repo.try_get_column(new_column_id.as_str())?.map(|c| c.name);
        }
        P::TaskRestored {
            original_column_id,
            ..
        } => {
            names.original_column = repo
                .try_get_column(original_column_id.as_str())?
                .map(|c| c.name);
        }
        P::TaskAssigned {
            assignee_id: target,
            ..
        }
        | P::TaskUnassigned {
            assignee_id: target,
            ..
        }
        | P::WatcherAdded {
            watcher_id: target, ..
        }
        | P::WatcherRemoved {
            watcher_id: target, ..
        } => {
            names.target_user = repo.try_get_user(target.as_str())?.map(|u| u.name);
        }
        P::DependencyAdded {
            depends_on_task_id, ..
        }
        | P::DependencyRemoved {
            depends_on_task_id, ..
        } => {
            names.depends_on_task = repo
                .try_get_task(depends_on_task_id.as_str())?
                .map(|t| t.title);
        }
        P::CommentAdded { .. }
        | P::TaskCreated { .. }
        | P::DueDateChanged { .. }
        | P::LabelAttached { .. }
        | P::LabelDetached { .. } => (),
    }
    Ok(names)
}
