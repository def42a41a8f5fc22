//! Diesel schema for Workboard persistence.

diesel::table! {
    /// Users mirrored from the identity provider.
    users (id) {
        /// User identifier.
        id -> Uuid,
        /// Login name.
        #[max_length = 150]
        username -> Varchar,
        /// Email address.
        #[max_length = 254]
        email -> Varchar,
    }
}

diesel::table! {
    /// Work boards.
    boards (id) {
        /// Board identifier.
        id -> Uuid,
        /// Board title.
        #[max_length = 200]
        title -> Varchar,
        /// Board description.
        description -> Text,
        /// Owning user.
        owner_id -> Uuid,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Last update timestamp.
        updated_at -> Timestamptz,
    }
}

diesel::table! {
    /// Tasks on work boards.
    tasks (id) {
        /// Task identifier.
        id -> Uuid,
        /// Owning board.
        board_id -> Uuid,
        /// Task title.
        #[max_length = 200]
        title -> Varchar,
        /// Task description.
        description -> Text,
        /// Task status.
        #[max_length = 20]
        status -> Varchar,
        /// Optional assignee.
        assigned_to -> Nullable<Uuid>,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Last update timestamp.
        updated_at -> Timestamptz,
    }
}

diesel::joinable!(tasks -> boards (board_id));

diesel::allow_tables_to_appear_in_same_query!(users, boards, tasks);
