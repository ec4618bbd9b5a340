use super::prelude::*;

/// Deletes a comment event owned by the given user.
///
/// Comments are the only events a user may remove; everything else in the
/// trail is permanent until the owning task or board goes away.
pub fn delete_comment<R: ActivityRepo>(repo: &R, user_id: &str, activity_id: &str) -> Result<()> {
    let deleted = repo.delete_comment_of_owner(activity_id, user_id)?;
    if deleted == 0 {
        return Err(Error::CommentNotFound);
    }
    debug_assert_eq!(1, deleted);
    Ok(())
}
