//! Diesel schema for task persistence.

diesel::table! {
    /// Task records, one row per task.
    tasks (id) {
        /// Task identifier.
        id -> Uuid,
        /// Owning user identifier.
        owner_id -> Uuid,
        /// Optional title.
        #[max_length = 200]
        title -> Nullable<Varchar>,
        /// Optional description.
        #[max_length = 2000]
        description -> Nullable<Varchar>,
        /// Task status name.
        #[max_length = 20]
        status -> Varchar,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// First completion timestamp.
        completed_at -> Nullable<Timestamptz>,
    }
}
