use num_derive::{FromPrimitive, ToPrimitive};
use strum::EnumIter;

use crate::{id::*, time::*};

/// One record of a user action on a board.
///
/// Events are immutable once recorded; the only exception is the content of
/// a [`ActivityPayload::CommentAdded`] payload, which the owning user may
/// rewrite or delete later on. Everything else, including the actor and the
/// timestamp, is permanent fact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityEvent {
    pub id: Id,
    pub at: TimestampMs,
    /// The user who performed the action.
    pub by: Id,
    /// The board the event belongs to, used for scoping and authorization.
    pub board_id: Id,
    pub payload: ActivityPayload,
}

impl ActivityEvent {
    pub fn now(by: Id, board_id: Id, payload: ActivityPayload) -> Self {
        Self {
            id: Id::new(),
            at: TimestampMs::now(),
            by,
            board_id,
            payload,
        }
    }

    pub fn kind(&self) -> ActivityKind {
        self.payload.kind()
    }

    pub fn is_comment(&self) -> bool {
        matches!(self.payload, ActivityPayload::CommentAdded { .. })
    }
}

/// What happened, together with exactly the references that are meaningful
/// for that kind of event. A reference that would be meaningless for some
/// kind cannot even be represented.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActivityPayload {
    CommentAdded {
        task_id: Id,
        content: String,
    },
    TaskCreated {
        task_id: Id,
    },
    TaskMoved {
        task_id: Id,
        old_column_id: Id,
        new_column_id: Id,
    },
    TaskRestored {
        task_id: Id,
        original_column_id: Id,
    },
    TaskAssigned {
        task_id: Id,
        assignee_id: Id,
    },
    TaskUnassigned {
        task_id: Id,
        assignee_id: Id,
    },
    /// `due_at` is the new due date, `None` if it has been cleared.
    DueDateChanged {
        task_id: Id,
        due_at: Option<TimestampMs>,
    },
    LabelAttached {
        task_id: Id,
        label: String,
    },
    LabelDetached {
        task_id: Id,
        label: String,
    },
    WatcherAdded {
        task_id: Id,
        watcher_id: Id,
    },
    WatcherRemoved {
        task_id: Id,
        watcher_id: Id,
    },
    DependencyAdded {
        task_id: Id,
        depends_on_task_id: Id,
    },
    DependencyRemoved {
        task_id: Id,
        depends_on_task_id: Id,
    },
}

impl ActivityPayload {
    pub fn kind(&self) -> ActivityKind {
        use ActivityPayload as P;
        match self {
            P::CommentAdded { .. } => ActivityKind::CommentAdded,
            P::TaskCreated { .. } => ActivityKind::TaskCreated,
            P::TaskMoved { .. } => ActivityKind::TaskMoved,
            P::TaskRestored { .. } => ActivityKind::TaskRestored,
            P::TaskAssigned { .. } => ActivityKind::TaskAssigned,
            P::TaskUnassigned { .. } => ActivityKind::TaskUnassigned,
            P::DueDateChanged { .. } => ActivityKind::DueDateChanged,
            P::LabelAttached { .. } => ActivityKind::LabelAttached,
            P::LabelDetached { .. } => ActivityKind::LabelDetached,
            P::WatcherAdded { .. } => ActivityKind::WatcherAdded,
            P::WatcherRemoved { .. } => ActivityKind::WatcherRemoved,
            P::DependencyAdded { .. } => ActivityKind::DependencyAdded,
            P::DependencyRemoved { .. } => ActivityKind::DependencyRemoved,
        }
    }

    /// The task the event refers to, if it is task-scoped.
    pub fn task_id(&self) -> Option<&Id> {
        use ActivityPayload as P;
        match self {
            P::CommentAdded { task_id, .. }
            | P::TaskCreated { task_id }
            | P::TaskMoved { task_id, .. }
            | P::TaskRestored { task_id, .. }
            | P::TaskAssigned { task_id, .. }
            | P::TaskUnassigned { task_id, .. }
            | P::DueDateChanged { task_id, .. }
            | P::LabelAttached { task_id, .. }
            | P::LabelDetached { task_id, .. }
            | P::WatcherAdded { task_id, .. }
            | P::WatcherRemoved { task_id, .. }
            | P::DependencyAdded { task_id, .. }
            | P::DependencyRemoved { task_id, .. } => Some(task_id),
        }
    }
}

/// Flat discriminant of [`ActivityPayload`], used wherever the kind of an
/// event has to be stored or compared without its payload.
#[rustfmt::skip]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, FromPrimitive, ToPrimitive, EnumIter)]
pub enum ActivityKind {
    CommentAdded      = 0,
    TaskCreated       = 1,
    TaskMoved         = 2,
    TaskRestored      = 3,
    TaskAssigned      = 4,
    TaskUnassigned    = 5,
    DueDateChanged    = 6,
    LabelAttached     = 7,
    LabelDetached     = 8,
    WatcherAdded      = 9,
    WatcherRemoved    = 10,
    DependencyAdded   = 11,
    DependencyRemoved = 12,
}
