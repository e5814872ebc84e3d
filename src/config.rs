//! Message template configuration

pub mod messages;

pub use messages::MessageTemplates;
