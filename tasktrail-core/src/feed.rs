//! Turns stored activity events into human-readable feed lines.

use crate::entities::*;

/// Display names for everything an event may reference, resolved by the
/// caller before rendering. A name is `None` if the referent has been
/// deleted since the event was recorded; rendering falls back to a generic
/// placeholder in that case instead of failing, so that the trail stays
/// readable no matter what happened to the referents afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActivityNames {
    pub actor: Option<String>,
    pub task: Option<String>,
    pub target_user: Option<String>,
    pub old_column: Option<String>,
    pub new_column: Option<String>,
    pub original_column: Option<String>,
    pub depends_on_task: Option<String>,
}

const COMMENT_PREVIEW_MAX_CHARS: usize = 80;

fn quoted_or(name: Option<&str>, fallback: &str) -> String {
    match name {
        Some(name) => format!("\"{name}\""),
        None => fallback.to_string(),
    }
}

fn comment_preview(content: &str) -> String {
    let mut preview: String = content.chars().take(COMMENT_PREVIEW_MAX_CHARS).collect();
    if content.chars().nth(COMMENT_PREVIEW_MAX_CHARS).is_some() {
        preview.push('…');
    }
    preview
}

/// Derives the single feed line for one event.
///
/// This is a pure function of the event and the resolved names: no clock,
/// no locale, no I/O. Timestamps are deliberately not part of the message;
/// formatting them is left to the surrounding presentation layer.
pub fn activity_message(event: &ActivityEvent, names: &ActivityNames) -> String {
    let actor = names.actor.as_deref().unwrap_or("A removed user");
    let task = quoted_or(names.task.as_deref(), "a deleted task");
    let target = quoted_or(names.target_user.as_deref(), "a removed user");

    use ActivityPayload as P;
    match &event.payload {
        P::CommentAdded { content, .. } => {
            format!(
                "{actor} commented on {task}: \"{}\"",
                comment_preview(content)
            )
        }
        P::TaskCreated { .. } => format!("{actor} created {task}"),
        P::TaskMoved { .. } => {
            let old = quoted_or(names.old_column.as_deref(), "a removed column");
            let new = quoted_or(names.new_column.as_deref(), "a removed column");
            format!("{actor} moved {task} from {old} to {new}")
        }
        P::TaskRestored { .. } => {
            let original = quoted_or(names.original_column.as_deref(), "a removed column");
            format!("{actor} restored {task} to {original}")
        }
        P::TaskAssigned { .. } => format!("{actor} assigned {task} to {target}"),
        P::TaskUnassigned { .. } => format!("{actor} unassigned {target} from {task}"),
        P::DueDateChanged { due_at: Some(_), .. } => {
            format!("{actor} changed the due date of {task}")
        }
        P::DueDateChanged { due_at: None, .. } => {
            format!("{actor} removed the due date from {task}")
        }
        P::LabelAttached { label, .. } => {
            format!("{actor} added the label \"{label}\" to {task}")
        }
        P::LabelDetached { label, .. } => {
            format!("{actor} removed the label \"{label}\" from {task}")
        }
        P::WatcherAdded { .. } => format!("{actor} added {target} as a watcher of {task}"),
        P::WatcherRemoved { .. } => {
            format!("{actor} removed {target} as a watcher of {task}")
        }
        P::DependencyAdded { .. } => {
            let blocker = quoted_or(names.depends_on_task.as_deref(), "a deleted task");
            format!("{actor} marked {task} as blocked by {blocker}")
        }
        P::DependencyRemoved { .. } => {
            let blocker = quoted_or(names.depends_on_task.as_deref(), "a deleted task");
            format!("{actor} unmarked {task} as blocked by {blocker}")
        }
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator as _;

    use super::*;

    fn sample_payload(kind: ActivityKind) -> ActivityPayload {
        let task_id = Id::from("task");
        use ActivityKind as K;
        use ActivityPayload as P;
        match kind {
            K::CommentAdded => P::CommentAdded {
                task_id,
                content: "Looks good".into(),
            },
            K::TaskCreated => P::TaskCreated { task_id },
            K::TaskMoved => P::TaskMoved {
                task_id,
                old_column_id: "col-todo".into(),
                new_column_id: "col-done".into(),
            },
            K::TaskRestored => P::TaskRestored {
                task_id,
                original_column_id: "col-todo".into(),
            },
            K::TaskAssigned => P::TaskAssigned {
                task_id,
                assignee_id: "bob".into(),
            },
            K::TaskUnassigned => P::TaskUnassigned {
                task_id,
                assignee_id: "bob".into(),
            },
            K::DueDateChanged => P::DueDateChanged {
                task_id,
                due_at: Some(TimestampMs::from_millis(0)),
            },
            K::LabelAttached => P::LabelAttached {
                task_id,
                label: "urgent".into(),
            },
            K::LabelDetached => P::LabelDetached {
                task_id,
                label: "urgent".into(),
            },
            K::WatcherAdded => P::WatcherAdded {
                task_id,
                watcher_id: "bob".into(),
            },
            K::WatcherRemoved => P::WatcherRemoved {
                task_id,
                watcher_id: "bob".into(),
            },
            K::DependencyAdded => P::DependencyAdded {
                task_id,
                depends_on_task_id: "other".into(),
            },
            K::DependencyRemoved => P::DependencyRemoved {
                task_id,
                depends_on_task_id: "other".into(),
            },
        }
    }

    fn sample_event(kind: ActivityKind) -> ActivityEvent {
        ActivityEvent::now("alice".into(), "board".into(), sample_payload(kind))
    }

    fn resolved_names() -> ActivityNames {
        ActivityNames {
            actor: Some("Alice".into()),
            task: Some("Fix login".into()),
            target_user: Some("Bob".into()),
            old_column: Some("To Do".into()),
            new_column: Some("Done".into()),
            original_column: Some("To Do".into()),
            depends_on_task: Some("Deploy".into()),
        }
    }

    #[test]
    fn every_kind_renders_a_message() {
        for kind in ActivityKind::iter() {
            let message = activity_message(&sample_event(kind), &resolved_names());
            assert!(!message.is_empty());
            assert!(message.contains("Alice"), "{kind:?}: {message}");
        }
    }

    #[test]
    fn every_kind_renders_with_all_referents_deleted() {
        for kind in ActivityKind::iter() {
            let message = activity_message(&sample_event(kind), &ActivityNames::default());
            assert!(!message.is_empty());
            assert!(
                message.contains("removed") || message.contains("deleted"),
                "{kind:?}: {message}"
            );
        }
    }

    #[test]
    fn rendering_is_deterministic() {
        for kind in ActivityKind::iter() {
            let event = sample_event(kind);
            let names = resolved_names();
            assert_eq!(
                activity_message(&event, &names),
                activity_message(&event, &names)
            );
        }
    }

    #[test]
    fn task_moved_message() {
        let message = activity_message(&sample_event(ActivityKind::TaskMoved), &resolved_names());
        assert_eq!("Alice moved \"Fix login\" from \"To Do\" to \"Done\"", message);
    }

    #[test]
    fn comment_added_message() {
        let message =
            activity_message(&sample_event(ActivityKind::CommentAdded), &resolved_names());
        assert_eq!("Alice commented on \"Fix login\": \"Looks good\"", message);
    }

    #[test]
    fn long_comments_are_previewed() {
        let event = ActivityEvent::now(
            "alice".into(),
            "board".into(),
            ActivityPayload::CommentAdded {
                task_id: "task".into(),
                content: "x".repeat(200),
            },
        );
        let message = activity_message(&event, &resolved_names());
        assert!(message.contains('…'));
        assert!(!message.contains(&"x".repeat(81)));
    }

    #[test]
    fn deleted_task_fallback() {
        let names = ActivityNames {
            task: None,
            ..resolved_names()
        };
        let message = activity_message(&sample_event(ActivityKind::TaskCreated), &names);
        assert_eq!("Alice created a deleted task", message);
    }

    #[test]
    fn removed_actor_fallback() {
        let names = ActivityNames {
            actor: None,
            ..resolved_names()
        };
        let message = activity_message(&sample_event(ActivityKind::TaskAssigned), &names);
        assert_eq!("A removed user assigned \"Fix login\" to \"Bob\"", message);
    }
}
