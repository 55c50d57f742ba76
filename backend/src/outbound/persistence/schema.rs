//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match `backend/migrations` exactly. Regenerate with
//! `diesel print-schema` after changing a migration.

diesel::table! {
    /// Application users and their role claims.
    users (id) {
        id -> Int8,
        name -> Varchar,
        /// Unique login identifier.
        email -> Varchar,
        /// Raw role claim; interpreted by the domain.
        role -> Varchar,
        profile_message -> Nullable<Text>,
    }
}

diesel::table! {
    /// Tracked consignments.
    shipments (id) {
        id -> Int8,
        tracking_number -> Varchar,
        sender -> Varchar,
        receiver -> Varchar,
        status -> Varchar,
    }
}

diesel::allow_tables_to_appear_in_same_query!(users, shipments);
