use super::*;

impl<'a> TaskRepo for DbReadWrite<'a> {
    fn create_task(&self, task: &Task) -> Result<()> {
        create_task(&mut self.conn.borrow_mut(), task)
    }
    fn get_task(&self, id: &str) -> Result<Task> {
        get_task(&mut self.conn.borrow_mut(), id)
    }
    fn try_get_task(&self, id: &str) -> Result<Option<Task>> {
        try_get_task(&mut self.conn.borrow_mut(), id)
    }
    fn delete_task(&self, id: &str) -> Result<()> {
        delete_task(&mut self.conn.borrow_mut(), id)
    }
}

impl<'a> TaskRepo for DbConnection<'a> {
    fn create_task(&self, task: &Task) -> Result<()> {
        create_task(&mut self.conn.borrow_mut(), task)
    }
    fn get_task(&self, id: &str) -> Result<Task> {
        get_task(&mut self.conn.borrow_mut(), id)
    }
    fn try_get_task(&self, id: &str) -> Result<Option<Task>> {
        try_get_task(&mut self.conn.borrow_mut(), id)
    }
    fn delete_task(&self, id: &str) -> Result<()> {
        delete_task(&mut self.conn.borrow_mut(), id)
    }
}

impl<'a> TaskRepo for DbReadOnly<'a> {
    fn create_task(&self, _task: &Task) -> Result<()> {
        unreachable!();
    }
    fn get_task(&self, id: &str) -> Result<Task> {
        get_task(&mut self.conn.borrow_mut(), id)
    }
    fn try_get_task(&self, id: &str) -> Result<Option<Task>> {
        try_get_task(&mut self.conn.borrow_mut(), id)
    }
    fn delete_task(&self, _id: &str) -> Result<()> {
        unreachable!();
    }
}

fn create_task(conn: &mut SqliteConnection, task: &Task) -> Result<()> {
    let board_rowid = resolve_board_rowid(conn, task.board_id.as_str())?;
    let new_task = models::NewTask {
        id: task.id.as_str(),
        board_rowid,
        column_id: task.column_id.as_ref().map(Id::as_str),
        title: &task.title,
    };
    let _count = diesel::insert_into(schema::tasks::table)
        .values(&new_task)
        .execute(conn)
        .map_err(from_diesel_err)?;
    debug_assert_eq!(1, _count);
    Ok(())
}

type TaskColumns = (String, String, Option<String>, String);

fn task_from_columns((id, board_id, column_id, title): TaskColumns) -> Task {
    Task {
        id: id.into(),
        board_id: board_id.into(),
        column_id: column_id.map(Into::into),
        title,
    }
}

fn get_task(conn: &mut SqliteConnection, id: &str) -> Result<Task> {
    use schema::{boards::dsl as board_dsl, tasks::dsl};
    schema::tasks::table
        .inner_join(schema::boards::table)
        .select((dsl::id, board_dsl::id, dsl::column_id, dsl::title))
        .filter(dsl::id.eq(id))
        .first::<TaskColumns>(conn)
        .map_err(from_diesel_err)
        .map(task_from_columns)
}

fn try_get_task(conn: &mut SqliteConnection, id: &str) -> Result<Option<Task>> {
    use schema::{boards::dsl as board_dsl, tasks::dsl};
    Ok(schema::tasks::table
        .inner_join(schema::boards::table)
        .select((dsl::id, board_dsl::id, dsl::column_id, dsl::title))
        .filter(dsl::id.eq(id))
        .first::<TaskColumns>(conn)
        .optional()
        .map_err(from_diesel_err)?
        .map(task_from_columns))
}

// The schema cascades: deleting a task takes its activities with it.
fn delete_task(conn: &mut SqliteConnection, id: &str) -> Result<()> {
    use schema::tasks::dsl;
    let count = diesel::delete(schema::tasks::table.filter(dsl::id.eq(id)))
        .execute(conn)
        .map_err(from_diesel_err)?;
    if count == 0 {
        return Err(repo::Error::NotFound);
    }
    Ok(())
}
