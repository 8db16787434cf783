//! Diesel schema for todo persistence.

diesel::table! {
    /// Todo records, one row per item.
    todos (id) {
        /// Item identifier, assigned by the domain.
        id -> Text,
        /// Item title.
        title -> Text,
        /// Category storage tag, one of `task`, `event`, `goal`.
        category -> Text,
        /// Calendar date, `YYYY-MM-DD`.
        date -> Text,
        /// Time of day, full RFC 3339 datetime.
        time -> Text,
        /// Free-form notes, NULL when absent.
        notes -> Nullable<Text>,
        /// Completion flag, 0 or 1.
        is_completed -> Integer,
        /// Store-assigned creation timestamp, used only for ordering.
        created_at -> Text,
    }
}
