diesel::table! {
    use diesel::sql_types::*;

    users (id) {
        id -> Uuid,
        username -> Text,
        password_hash -> Text,
        current_summary_text -> Nullable<Text>,
        current_pdf_name -> Nullable<Text>,
        created_at -> Timestamptz,
    }
}

diesel::table! {
    use diesel::sql_types::*;

    chat_messages (id) {
        id -> Uuid,
        user_id -> Uuid,
        sender -> Text,
        message -> Text,
        source -> Nullable<Text>,
        created_at -> Timestamptz,
    }
}

diesel::table! {
    use diesel::sql_types::*;

    precedents (id) {
        id -> Uuid,
        user_id -> Uuid,
        document_name -> Nullable<Text>,
        case_name -> Text,
        court -> Nullable<Text>,
        year -> Nullable<Text>,
        url -> Nullable<Text>,
        confidence -> Float4,
        ai_summary -> Nullable<Text>,
        raw_json -> Nullable<Jsonb>,
        created_at -> Timestamptz,
    }
}

diesel::table! {
    use diesel::sql_types::*;

    fact_checks (id) {
        id -> Uuid,
        user_id -> Uuid,
        statement -> Text,
        supported -> Bool,
        confidence -> Float4,
        evidence -> Nullable<Text>,
        created_at -> Timestamptz,
    }
}

diesel::table! {
    use diesel::sql_types::*;
    use pgvector::sql_types::*;

    document_chunks (id) {
        id -> Uuid,
        user_id -> Uuid,
        document_name -> Text,
        chunk_text -> Text,
        chunk_index -> Int4,
        model_name -> Text,
        embedding -> Nullable<Vector>,
        created_at -> Timestamptz,
    }
}

diesel::joinable!(chat_messages -> users (user_id));
diesel::joinable!(precedents -> users (user_id));
diesel::joinable!(fact_checks -> users (user_id));
diesel::joinable!(document_chunks -> users (user_id));

diesel::allow_tables_to_appear_in_same_query!(
    users,
    chat_messages,
    precedents,
    fact_checks,
    document_chunks,
);
