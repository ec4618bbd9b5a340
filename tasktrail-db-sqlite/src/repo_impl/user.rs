use super::*;

impl<'a> UserRepo for DbReadWrite<'a> {
    fn create_user(&self, user: &User) -> Result<()> {
        create_user(&mut self.conn.borrow_mut(), user)
    }
    fn get_user(&self, id: &str) -> Result<User> {
        get_user(&mut self.conn.borrow_mut(), id)
    }
    fn try_get_user(&self, id: &str) -> Result<Option<User>> {
        try_get_user(&mut self.conn.borrow_mut(), id)
    }
    fn delete_user(&self, id: &str) -> Result<()> {
        delete_user(&mut self.conn.borrow_mut(), id)
    }
}

impl<'a> UserRepo for DbConnection<'a> {
    fn create_user(&self, user: &User) -> Result<()> {
        create_user(&mut self.conn.borrow_mut(), user)
    }
    fn get_user(&self, id: &str) -> Result<User> {
        get_user(&mut self.conn.borrow_mut(), id)
    }
    fn try_get_user(&self, id: &str) -> Result<Option<User>> {
        try_get_user(&mut self.conn.borrow_mut(), id)
    }
    fn delete_user(&self, id: &str) -> Result<()> {
        delete_user(&mut self.conn.borrow_mut(), id)
    }
}

impl<'a> UserRepo for DbReadOnly<'a> {
    fn create_user(&self, _user: &User) -> Result<()> {
        unreachable!();
    }
    fn get_user(&self, id: &str) -> Result<User> {
        get_user(&mut self.conn.borrow_mut(), id)
    }
    fn try_get_user(&self, id: &str) -> Result<Option<User>> {
        try_get_user(&mut self.conn.borrow_mut(), id)
    }
    fn delete_user(&self, _id: &str) -> Result<()> {
        unreachable!();
    }
}

fn create_user(conn: &mut SqliteConnection, user: &User) -> Result<()> {
    let new_user = models::NewUser {
        id: user.id.as_str(),
        name: &user.name,
    };
    let _count = diesel::insert_into(schema::users::table)
        .values(&new_user)
        .execute(conn)
        .map_err(from_diesel_err)?;
    debug_assert_eq!(1, _count);
    Ok(())
}

fn get_user(conn: &mut SqliteConnection, id: &str) -> Result<User> {
    use schema::users::dsl;
    schema::users::table
        .filter(dsl::id.eq(id))
        .first::<models::UserRow>(conn)
        .map_err(from_diesel_err)
        .map(Into::into)
}

fn try_get_user(conn: &mut SqliteConnection, id: &str) -> Result<Option<User>> {
    use schema::users::dsl;
    Ok(schema::users::table
        .filter(dsl::id.eq(id))
        .first::<models::UserRow>(conn)
        .optional()
        .map_err(from_diesel_err)?
        .map(Into::into))
}

fn delete_user(conn: &mut SqliteConnection, id: &str) -> Result<()> {
    use schema::users::dsl;
    let count = diesel::delete(schema::users::table.filter(dsl::id.eq(id)))
        .execute(conn)
        .map_err(from_diesel_err)?;
    if count == 0 {
        return Err(repo::Error::NotFound);
    }
    Ok(())
}
