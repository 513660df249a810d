pub mod chat;
pub mod find_lawyers;
pub mod find_precedents;
pub mod get_fact_history;
pub mod get_precedents;
pub mod login;
pub mod signup;
pub mod upload_document;

pub use chat::ChatUseCase;
pub use find_lawyers::FindLawyersUseCase;
pub use find_precedents::FindPrecedentsUseCase;
pub use get_fact_history::GetFactHistoryUseCase;
pub use get_precedents::GetPrecedentsUseCase;
pub use login::LoginUseCase;
pub use signup::SignupUseCase;
pub use upload_document::UploadDocumentUseCase;
