diesel::table! {
    todos (id) {
        id -> Integer,
        title -> Text,
        description -> Text,
        completed -> Bool,
    }
}
