diesel::table! {
    todo (id) {
        id -> Int4,
        title -> Text,
        completed -> Bool,
        created_at -> Timestamptz,
    }
}
