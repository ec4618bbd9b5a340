use super::*;

impl<'a> ColumnRepo for DbReadWrite<'a> {
    fn create_column(&self, column: &Column) -> Result<()> {
        create_column(&mut self.conn.borrow_mut(), column)
    }
    fn try_get_column(&self, id: &str) -> Result<Option<Column>> {
        try_get_column(&mut self.conn.borrow_mut(), id)
    }
    fn delete_column(&self, id: &str) -> Result<()> {
        delete_column(&mut self.conn.borrow_mut(), id)
    }
}

impl<'a> ColumnRepo for DbConnection<'a> {
    fn create_column(&self, column: &Column) -> Result<()> {
        create_column(&mut self.conn.borrow_mut(), column)
    }
    fn try_get_column(&self, id: &str) -> Result<Option<Column>> {
        try_get_column(&mut self.conn.borrow_mut(), id)
    }
    fn delete_column(&self, id: &str) -> Result<()> {
        delete_column(&mut self.conn.borrow_mut(), id)
    }
}

impl<'a> ColumnRepo for DbReadOnly<'a> {
    fn create_column(&self, _column: &Column) -> Result<()> {
        unreachable!();
    }
    fn try_get_column(&self, id: &str) -> Result<Option<Column>> {
        try_get_column(&mut self.conn.borrow_mut(), id)
    }
    fn delete_column(&self, _id: &str) -> Result<()> {
        unreachable!();
    }
}

fn create_column(conn: &mut SqliteConnection, column: &Column) -> Result<()> {
    let board_rowid = resolve_board_rowid(conn, column.board_id.as_str())?;
    let new_column = models::NewBoardColumn {
        id: column.id.as_str(),
        board_rowid,
        name: &column.name,
    };
    let _count = diesel::insert_into(schema::board_columns::table)
        .values(&new_column)
        .execute(conn)
        .map_err(from_diesel_err)?;
    debug_assert_eq!(1, _count);
    Ok(())
}

fn try_get_column(conn: &mut SqliteConnection, id: &str) -> Result<Option<Column>> {
    use schema::{board_columns::dsl, boards::dsl as board_dsl};
    Ok(schema::board_columns::table
        .inner_join(schema::boards::table)
        .select((dsl::id, board_dsl::id, dsl::name))
        .filter(dsl::id.eq(id))
        .first::<(String, String, String)>(conn)
        .optional()
        .map_err(from_diesel_err)?
        .map(|(id, board_id, name)| Column {
            id: id.into(),
            board_id: board_id.into(),
            name,
        }))
}

fn delete_column(conn: &mut SqliteConnection, id: &str) -> Result<()> {
    use schema::board_columns::dsl;
    let count = diesel::delete(schema::board_columns::table.filter(dsl::id.eq(id)))
        .execute(conn)
        .map_err(from_diesel_err)?;
    if count == 0 {
        return Err(repo::Error::NotFound);
    }
    Ok(())
}
