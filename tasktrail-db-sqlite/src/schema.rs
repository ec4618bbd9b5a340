///////////////////////////////////////////////////////////////////////
// Users
///////////////////////////////////////////////////////////////////////

table! {
    users (rowid) {
        rowid -> BigInt,
        id -> Text,
        name -> Text,
    }
}

///////////////////////////////////////////////////////////////////////
// Boards
///////////////////////////////////////////////////////////////////////

table! {
    boards (rowid) {
        rowid -> BigInt,
        id -> Text,
        name -> Text,
    }
}

table! {
    board_columns (rowid) {
        rowid -> BigInt,
        id -> Text,
        board_rowid -> BigInt,
        name -> Text,
    }
}

joinable!(board_columns -> boards (board_rowid));

///////////////////////////////////////////////////////////////////////
// Tasks
///////////////////////////////////////////////////////////////////////

table! {
    tasks (rowid) {
        rowid -> BigInt,
        id -> Text,
        board_rowid -> BigInt,
        // Public id, no foreign key: a task may outlive its column.
        column_id -> Nullable<Text>,
        title -> Text,
    }
}

joinable!(tasks -> boards (board_rowid));

///////////////////////////////////////////////////////////////////////
// Activities
///////////////////////////////////////////////////////////////////////

table! {
    activities (rowid) {
        rowid -> BigInt,
        id -> Text,
        created_at -> BigInt,
        // Public user id, no foreign key: the trail outlives its actors.
        created_by -> Text,
        board_rowid -> BigInt,
        task_rowid -> Nullable<BigInt>,
        kind -> SmallInt,
        // Secondary references, meaningful depending on the kind. All of
        // them are public ids without foreign keys so that deleting the
        // referent never touches recorded history.
        old_column_id -> Nullable<Text>,
        new_column_id -> Nullable<Text>,
        original_column_id -> Nullable<Text>,
        target_user_id -> Nullable<Text>,
        depends_on_task_id -> Nullable<Text>,
        label -> Nullable<Text>,
        due_at -> Nullable<BigInt>,
        content -> Nullable<Text>,
    }
}

joinable!(activities -> boards (board_rowid));
joinable!(activities -> tasks (task_rowid));

allow_tables_to_appear_in_same_query!(activities, boards, tasks, board_columns, users);
