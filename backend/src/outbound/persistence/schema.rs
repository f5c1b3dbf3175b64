//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match `backend/migrations` exactly. The four
//! tables are independent: there are no foreign keys between them.

diesel::table! {
    /// Showcased projects, read in `id` order.
    projects (id) {
        /// Primary key assigned by the `SERIAL` sequence.
        id -> Int4,
        title -> Text,
        description -> Text,
        image_url -> Text,
        /// Ordered technology tags.
        tech_stack -> Array<Text>,
        github_url -> Nullable<Text>,
        live_demo_url -> Nullable<Text>,
        featured -> Bool,
    }
}

diesel::table! {
    /// Work experience entries.
    experiences (id) {
        id -> Int4,
        company -> Text,
        role -> Text,
        /// Free-text period label.
        period -> Text,
        description -> Text,
    }
}

diesel::table! {
    /// Achievements and certifications.
    achievements (id) {
        id -> Int4,
        title -> Text,
        description -> Text,
        /// Free-text date label.
        year -> Text,
        link -> Nullable<Text>,
    }
}

diesel::table! {
    /// Contact form submissions. Append-only.
    messages (id) {
        id -> Int4,
        name -> Text,
        email -> Text,
        message -> Text,
        created_at -> Timestamptz,
    }
}

diesel::allow_tables_to_appear_in_same_query!(projects, experiences, achievements, messages);
