use crate::{sqlite, usecases, Result};

pub fn edit_comment(
    connections: &sqlite::Connections,
    user_id: &str,
    activity_id: &str,
    content: &str,
) -> Result<()> {
    let mut connection = connections.exclusive()?;
    connection.transaction(|conn| usecases::edit_comment(conn, user_id, activity_id, content))?;
    Ok(())
}

pub fn delete_comment(
    connections: &sqlite::Connections,
    user_id: &str,
    activity_id: &str,
) -> Result<()> {
    let mut connection = connections.exclusive()?;
    connection.transaction(|conn| usecases::delete_comment(conn, user_id, activity_id))?;
    Ok(())
}
