pub mod chat_message_model;
pub mod chunk_model;
pub mod fact_check_model;
pub mod precedent_model;
pub mod user_model;

pub use chat_message_model::{ChatMessageModel, NewChatMessageModel};
pub use chunk_model::{DocumentChunkModel, NewDocumentChunkModel};
pub use fact_check_model::{FactCheckModel, NewFactCheckModel};
pub use precedent_model::{NewPrecedentModel, PrecedentModel};
pub use user_model::{NewUserModel, UserModel};
