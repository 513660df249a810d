pub mod chat_message;
pub mod document_chunk;
pub mod fact_check;
pub mod precedent;
pub mod user;

pub use chat_message::{ChatMessage, Sender};
pub use document_chunk::DocumentChunk;
pub use fact_check::FactCheckRecord;
pub use precedent::{CaseHit, Precedent};
pub use user::User;
