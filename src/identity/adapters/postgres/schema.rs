//! Diesel schema for user lookup.

diesel::table! {
    /// User records maintained by the identity provider.
    users (id) {
        /// User identifier.
        id -> Uuid,
        /// Normalized login email address.
        #[max_length = 320]
        email -> Varchar,
        /// Account creation timestamp.
        created_at -> Timestamptz,
    }
}
