pub mod chat_session;
pub mod document_library;
pub mod notification;
