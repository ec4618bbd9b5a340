use super::*;

impl<'a> BoardRepo for DbReadWrite<'a> {
    fn create_board(&self, board: &Board) -> Result<()> {
        create_board(&mut self.conn.borrow_mut(), board)
    }
    fn get_board(&self, id: &str) -> Result<Board> {
        get_board(&mut self.conn.borrow_mut(), id)
    }
    fn delete_board(&self, id: &str) -> Result<()> {
        delete_board(&mut self.conn.borrow_mut(), id)
    }
}

impl<'a> BoardRepo for DbConnection<'a> {
    fn create_board(&self, board: &Board) -> Result<()> {
        create_board(&mut self.conn.borrow_mut(), board)
    }
    fn get_board(&self, id: &str) -> Result<Board> {
        get_board(&mut self.conn.borrow_mut(), id)
    }
    fn delete_board(&self, id: &str) -> Result<()> {
        delete_board(&mut self.conn.borrow_mut(), id)
    }
}

impl<'a> BoardRepo for DbReadOnly<'a> {
    fn create_board(&self, _board: &Board) -> Result<()> {
        unreachable!();
    }
    fn get_board(&self, id: &str) -> Result<Board> {
        get_board(&mut self.conn.borrow_mut(), id)
    }
    fn delete_board(&self, _id: &str) -> Result<()> {
        unreachable!();
    }
}

fn create_board(conn: &mut SqliteConnection, board: &Board) -> Result<()> {
    let new_board = models::NewBoard {
        id: board.id.as_str(),
        name: &board.name,
    };
    let _count = diesel::insert_into(schema::boards::table)
        .values(&new_board)
        .execute(conn)
        .map_err(from_diesel_err)?;
    debug_assert_eq!(1, _count);
    Ok(())
}

fn get_board(conn: &mut SqliteConnection, id: &str) -> Result<Board> {
    use schema::boards::dsl;
    schema::boards::table
        .filter(dsl::id.eq(id))
        .first::<models::BoardRow>(conn)
        .map_err(from_diesel_err)
        .map(Into::into)
}

// The schema cascades: deleting a board takes its columns, tasks and
// activities with it.
fn delete_board(conn: &mut SqliteConnection, id: &str) -> Result<()> {
    use schema::boards::dsl;
    let count = diesel::delete(schema::boards::table.filter(dsl::id.eq(id)))
        .execute(conn)
        .map_err(from_diesel_err)?;
    if count == 0 {
        return Err(repo::Error::NotFound);
    }
    Ok(())
}
