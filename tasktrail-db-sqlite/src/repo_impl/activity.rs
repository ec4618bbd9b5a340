use anyhow::anyhow;
use num_traits::FromPrimitive as _;

use super::*;

impl<'a> ActivityRepo for DbReadWrite<'a> {
    fn create_activity(&self, event: ActivityEvent) -> Result<()> {
        create_activity(&mut self.conn.borrow_mut(), event)
    }
    fn load_activity(&self, id: &str) -> Result<ActivityEvent> {
        load_activity(&mut self.conn.borrow_mut(), id)
    }
    fn activities_of_board(
        &self,
        board_id: &str,
        range: &ActivityTimeRange,
        pagination: &Pagination,
    ) -> Result<Vec<ActivityEvent>> {
        load_activities(
            &mut self.conn.borrow_mut(),
            Scope::Board(board_id),
            range,
            pagination,
        )
    }
    fn activities_of_task(
        &self,
        task_id: &str,
        range: &ActivityTimeRange,
        pagination: &Pagination,
    ) -> Result<Vec<ActivityEvent>> {
        load_activities(
            &mut self.conn.borrow_mut(),
            Scope::Task(task_id),
            range,
            pagination,
        )
    }
    fn activities_of_user(
        &self,
        user_id: &str,
        range: &ActivityTimeRange,
        pagination: &Pagination,
    ) -> Result<Vec<ActivityEvent>> {
        load_activities(
            &mut self.conn.borrow_mut(),
            Scope::User(user_id),
            range,
            pagination,
        )
    }
    fn count_activities(&self) -> Result<usize> {
        count_activities(&mut self.conn.borrow_mut())
    }
    fn update_comment_content(&self, id: &str, owner_id: &str, content: &str) -> Result<usize> {
        update_comment_content(&mut self.conn.borrow_mut(), id, owner_id, content)
    }
    fn delete_comment_of_owner(&self, id: &str, owner_id: &str) -> Result<usize> {
        delete_comment_of_owner(&mut self.conn.borrow_mut(), id, owner_id)
    }
    fn delete_activities_of_task(&self, task_id: &str) -> Result<usize> {
        delete_activities_of_task(&mut self.conn.borrow_mut(), task_id)
    }
    fn delete_activities_of_board(&self, board_id: &str) -> Result<usize> {
        delete_activities_of_board(&mut self.conn.borrow_mut(), board_id)
    }
}

impl<'a> ActivityRepo for DbConnection<'a> {
    fn create_activity(&self, event: ActivityEvent) -> Result<()> {
        create_activity(&mut self.conn.borrow_mut(), event)
    }
    fn load_activity(&self, id: &str) -> Result<ActivityEvent> {
        load_activity(&mut self.conn.borrow_mut(), id)
    }
    fn activities_of_board(
        &self,
        board_id: &str,
        range: &ActivityTimeRange,
        pagination: &Pagination,
    ) -> Result<Vec<ActivityEvent>> {
        load_activities(
            &mut self.conn.borrow_mut(),
            Scope::Board(board_id),
            range,
            pagination,
        )
    }
    fn activities_of_task(
        &self,
        task_id: &str,
        range: &ActivityTimeRange,
        pagination: &Pagination,
    ) -> Result<Vec<ActivityEvent>> {
        load_activities(
            &mut self.conn.borrow_mut(),
            Scope::Task(task_id),
            range,
            pagination,
        )
    }
    fn activities_of_user(
        &self,
        user_id: &str,
        range: &ActivityTimeRange,
        pagination: &Pagination,
    ) -> Result<Vec<ActivityEvent>> {
        load_activities(
            &mut self.conn.borrow_mut(),
            Scope::User(user_id),
            range,
            pagination,
        )
    }
    fn count_activities(&self) -> Result<usize> {
        count_activities(&mut self.conn.borrow_mut())
    }
    fn update_comment_content(&self, id: &str, owner_id: &str, content: &str) -> Result<usize> {
        update_comment_content(&mut self.conn.borrow_mut(), id, owner_id, content)
    }
    fn delete_comment_of_owner(&self, id: &str, owner_id: &str) -> Result<usize> {
        delete_comment_of_owner(&mut self.conn.borrow_mut(), id, owner_id)
    }
    fn delete_activities_of_task(&self, task_id: &str) -> Result<usize> {
        delete_activities_of_task(&mut self.conn.borrow_mut(), task_id)
    }
    fn delete_activities_of_board(&self, board_id: &str) -> Result<usize> {
        delete_activities_of_board(&mut self.conn.borrow_mut(), board_id)
    }
}

impl<'a> ActivityRepo for DbReadOnly<'a> {
    fn create_activity(&self, _event: ActivityEvent) -> Result<()> {
        unreachable!();
    }
    fn load_activity(&self, id: &str) -> Result<ActivityEvent> {
        load_activity(&mut self.conn.borrow_mut(), id)
    }
    fn activities_of_board(
        &self,
        board_id: &str,
        range: &ActivityTimeRange,
        pagination: &Pagination,
    ) -> Result<Vec<ActivityEvent>> {
        load_activities(
            &mut self.conn.borrow_mut(),
            Scope::Board(board_id),
            range,
            pagination,
        )
    }
    fn activities_of_task(
        &self,
        task_id: &str,
        range: &ActivityTimeRange,
        pagination: &Pagination,
    ) -> Result<Vec<ActivityEvent>> {
        load_activities(
            &mut self.conn.borrow_mut(),
            Scope::Task(task_id),
            range,
            pagination,
        )
    }
    fn activities_of_user(
        &self,
        user_id: &str,
        range: &ActivityTimeRange,
        pagination: &Pagination,
    ) -> Result<Vec<ActivityEvent>> {
        load_activities(
            &mut self.conn.borrow_mut(),
            Scope::User(user_id),
            range,
            pagination,
        )
    }
    fn count_activities(&self) -> Result<usize> {
        count_activities(&mut self.conn.borrow_mut())
    }
    fn update_comment_content(&self, _id: &str, _owner_id: &str, _content: &str) -> Result<usize> {
        unreachable!();
    }
    fn delete_comment_of_owner(&self, _id: &str, _owner_id: &str) -> Result<usize> {
        unreachable!();
    }
    fn delete_activities_of_task(&self, _task_id: &str) -> Result<usize> {
        unreachable!();
    }
    fn delete_activities_of_board(&self, _board_id: &str) -> Result<usize> {
        unreachable!();
    }
}

enum Scope<'a> {
    Board(&'a str),
    Task(&'a str),
    User(&'a str),
}

fn create_activity(conn: &mut SqliteConnection, event: ActivityEvent) -> Result<()> {
    let ActivityEvent {
        id,
        at,
        by,
        board_id,
        payload,
    } = &event;
    let board_rowid = resolve_board_rowid(conn, board_id.as_str())?;
    let task_rowid = match payload.task_id() {
        Some(task_id) => Some(resolve_task_rowid(conn, task_id.as_str())?),
        None => None,
    };
    let mut new_row = models::NewActivityRow {
        id: id.as_str(),
        created_at: at.as_millis(),
        created_by: by.as_str(),
        board_rowid,
        task_rowid,
        kind: payload.kind() as i16,
        old_column_id: None,
        new_column_id: None,
        original_column_id: None,
        target_user_id: None,
        depends_on_task_id: None,
        label: None,
        due_at: None,
        content: None,
    };
    use ActivityPayload as P;
    match payload {
        P::CommentAdded { content, .. } => {
            new_row.content = Some(content.as_str());
        }
        P::TaskCreated { .. } => (),
        P::TaskMoved {
            old_column_id,
            new_column_id,
            ..
        } => {
            new_row.old_column_id = Some(old_column_id.as_str());
            new_row.new_column_id = Some(new_column_id.as_str());
        }
        P::TaskRestored {
            original_column_id, ..
        } => {
            new_row.original_column_id = Some(original_column_id.as_str());
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
            new_row.target_user_id = Some(target.as_str());
        }
        P::DueDateChanged { due_at, .. } => {
            new_row.due_at = due_at.map(TimestampMs::as_millis);
        }
        P::LabelAttached { label, .. } | P::LabelDetached { label, .. } => {
            new_row.label = Some(label.as_str());
        }
        P::DependencyAdded {
            depends_on_task_id, ..
        }
        | P::DependencyRemoved {
            depends_on_task_id, ..
        } => {
            new_row.depends_on_task_id = Some(depends_on_task_id.as_str());
        }
    }
    let _count = diesel::insert_into(schema::activities::table)
        .values(&new_row)
        .execute(conn)
        .map_err(from_diesel_err)?;
    debug_assert_eq!(1, _count);
    Ok(())
}

fn require<T>(field: Option<T>, id: &str, name: &str) -> Result<T> {
    field.ok_or_else(|| {
        log::error!("Stored activity {id} is missing its {name} reference");
        repo::Error::Other(anyhow!("stored activity {id} is missing its {name} reference"))
    })
}

fn event_from_row(row: models::JoinedActivityRow) -> Result<ActivityEvent> {
    let models::JoinedActivityRow {
        id,
        created_at,
        created_by,
        kind,
        old_column_id,
        new_column_id,
        original_column_id,
        target_user_id,
        depends_on_task_id,
        label,
        due_at,
        content,
        board_id,
        task_id,
    } = row;
    let kind = ActivityKind::from_i16(kind).ok_or_else(|| {
        log::error!("Stored activity {id} has the unknown kind {kind}");
        repo::Error::Other(anyhow!("stored activity {id} has the unknown kind {kind}"))
    })?;
    let task_id = task_id.map(Id::from);
    use ActivityKind as K;
    use ActivityPayload as P;
    let payload = match kind {
        K::CommentAdded => P::CommentAdded {
            task_id: require(task_id, &id, "task")?,
            content: require(content, &id, "content")?,
        },
        K::TaskCreated => P::TaskCreated {
            task_id: require(task_id, &id, "task")?,
        },
        K::TaskMoved => P::TaskMoved {
            task_id: require(task_id, &id, "task")?,
            old_column_id: require(old_column_id.map(Id::from), &id, "old column")?,
            new_column_id: require(new_column_id.map(Id::from), &id, "new column")?,
        },
        K::TaskRestored => P::TaskRestored {
            task_id: require(task_id, &id, "task")?,
            original_column_id: require(original_column_id.map(Id::from), &id, "original column")?,
        },
        K::TaskAssigned => P::TaskAssigned {
            task_id: require(task_id, &id, "task")?,
            assignee_id: require(target_user_id.map(Id::from), &id, "target user")?,
        },
        K::TaskUnassigned => P::TaskUnassigned {
            task_id: require(task_id, &id, "task")?,
            assignee_id: require(target_user_id.map(Id::from), &id, "target user")?,
        },
        K::DueDateChanged => P::DueDateChanged {
            task_id: require(task_id, &id, "task")?,
            due_at: due_at.map(TimestampMs::from_millis),
        },
        K::LabelAttached => P::LabelAttached {
            task_id: require(task_id, &id, "task")?,
            label: require(label, &id, "label")?,
        },
        K::LabelDetached => P::LabelDetached {
            task_id: require(task_id, &id, "task")?,
            label: require(label, &id, "label")?,
        },
        K::WatcherAdded => P::WatcherAdded {
            task_id: require(task_id, &id, "task")?,
            watcher_id: require(target_user_id.map(Id::from), &id, "target user")?,
        },
        K::WatcherRemoved => P::WatcherRemoved {
            task_id: require(task_id, &id, "task")?,
            watcher_id: require(target_user_id.map(Id::from), &id, "target user")?,
        },
        K::DependencyAdded => P::DependencyAdded {
            task_id: require(task_id, &id, "task")?,
            depends_on_task_id: require(depends_on_task_id.map(Id::from), &id, "dependency")?,
        },
        K::DependencyRemoved => P::DependencyRemoved {
            task_id: require(task_id, &id, "task")?,
            depends_on_task_id: require(depends_on_task_id.map(Id::from), &id, "dependency")?,
        },
    };
    Ok(ActivityEvent {
        id: id.into(),
        at: TimestampMs::from_millis(created_at),
        by: created_by.into(),
        board_id: board_id.into(),
        payload,
    })
}

fn load_activity(conn: &mut SqliteConnection, id: &str) -> Result<ActivityEvent> {
    use schema::{activities::dsl, boards::dsl as board_dsl, tasks::dsl as task_dsl};
    let row = schema::activities::table
        .inner_join(schema::boards::table)
        .left_join(schema::tasks::table)
        .select((
            dsl::id,
            dsl::created_at,
            dsl::created_by,
            dsl::kind,
            dsl::old_column_id,
            dsl::new_column_id,
            dsl::original_column_id,
            dsl::target_user_id,
            dsl::depends_on_task_id,
            dsl::label,
            dsl::due_at,
            dsl::content,
            board_dsl::id,
            task_dsl::id.nullable(),
        ))
        .filter(dsl::id.eq(id))
        .first::<models::JoinedActivityRow>(conn)
        .map_err(from_diesel_err)?;
    event_from_row(row)
}

fn load_activities(
    conn: &mut SqliteConnection,
    scope: Scope,
    range: &ActivityTimeRange,
    pagination: &Pagination,
) -> Result<Vec<ActivityEvent>> {
    use schema::{activities::dsl, boards::dsl as board_dsl, tasks::dsl as task_dsl};
    let mut query = schema::activities::table
        .inner_join(schema::boards::table)
        .left_join(schema::tasks::table)
        .select((
            dsl::id,
            dsl::created_at,
            dsl::created_by,
            dsl::kind,
            dsl::old_column_id,
            dsl::new_column_id,
            dsl::original_column_id,
            dsl::target_user_id,
            dsl::depends_on_task_id,
            dsl::label,
            dsl::due_at,
            dsl::content,
            board_dsl::id,
            task_dsl::id.nullable(),
        ))
        .order_by(dsl::created_at.desc())
        .then_order_by(dsl::rowid.desc())
        .into_boxed();
    match scope {
        Scope::Board(board_id) => {
            query = query.filter(board_dsl::id.eq(board_id));
        }
        Scope::Task(task_id) => {
            query = query.filter(task_dsl::id.eq(task_id));
        }
        Scope::User(user_id) => {
            query = query.filter(dsl::created_by.eq(user_id));
        }
    }
    if let Some(since) = range.since {
        query = query.filter(dsl::created_at.ge(since.as_millis()));
    }
    if let Some(until) = range.until {
        query = query.filter(dsl::created_at.le(until.as_millis()));
    }
    if let Some(offset) = pagination.offset {
        query = query.offset(offset as i64);
    }
    if let Some(limit) = pagination.limit {
        query = query.limit(limit as i64);
    }
    query
        .load::<models::JoinedActivityRow>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(event_from_row)
        .collect()
}

fn count_activities(conn: &mut SqliteConnection) -> Result<usize> {
    Ok(schema::activities::table
        .count()
        .get_result::<i64>(conn)
        .map_err(from_diesel_err)? as usize)
}

fn update_comment_content(
    conn: &mut SqliteConnection,
    id: &str,
    owner_id: &str,
    content: &str,
) -> Result<usize> {
    use schema::activities::dsl;
    diesel::update(
        schema::activities::table
            .filter(dsl::id.eq(id))
            .filter(dsl::created_by.eq(owner_id))
            .filter(dsl::kind.eq(ActivityKind::CommentAdded as i16)),
    )
    .set(dsl::content.eq(content))
    .execute(conn)
    .map_err(from_diesel_err)
}

fn delete_comment_of_owner(conn: &mut SqliteConnection, id: &str, owner_id: &str) -> Result<usize> {
    use schema::activities::dsl;
    diesel::delete(
        schema::activities::table
            .filter(dsl::id.eq(id))
            .filter(dsl::created_by.eq(owner_id))
            .filter(dsl::kind.eq(ActivityKind::CommentAdded as i16)),
    )
    .execute(conn)
    .map_err(from_diesel_err)
}

fn delete_activities_of_task(conn: &mut SqliteConnection, task_id: &str) -> Result<usize> {
    use schema::{activities::dsl, tasks::dsl as task_dsl};
    diesel::delete(
        schema::activities::table.filter(
            dsl::task_rowid.eq_any(
                schema::tasks::table
                    .select(task_dsl::rowid.nullable())
                    .filter(task_dsl::id.eq(task_id)),
            ),
        ),
    )
    .execute(conn)
    .map_err(from_diesel_err)
}

fn delete_activities_of_board(conn: &mut SqliteConnection, board_id: &str) -> Result<usize> {
    use schema::{activities::dsl, boards::dsl as board_dsl};
    diesel::delete(
        schema::activities::table.filter(
            dsl::board_rowid.eq_any(
                schema::boards::table
                    .select(board_dsl::rowid)
                    .filter(board_dsl::id.eq(board_id)),
            ),
        ),
    )
    .execute(conn)
    .map_err(from_diesel_err)
}
