use super::prelude::*;
use crate::util::validate::{self, EDITED_COMMENT_MAX_CHARS};

/// Rewrites the content of a comment event owned by the given user.
///
/// Only the content changes; kind, actor and timestamp stay untouched.
pub fn edit_comment<R: ActivityRepo>(
    repo: &R,
    user_id: &str,
    activity_id: &str,
    content: &str,
) -> Result<()> {
    let content = validate::comment_content(content, EDITED_COMMENT_MAX_CHARS)?;
    let updated = repo.update_comment_content(activity_id, user_id, content)?;
    if updated == 0 {
        return Err(Error::CommentNotFound);
    }
    debug_assert_eq!(1, updated);
    Ok(())
}
