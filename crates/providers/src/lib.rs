//! Generation client implementations for Tessera.

pub mod echo;
pub mod factory;
pub mod openai_compat;

pub use echo::EchoClient;
pub use factory::build_from_config;
pub use openai_compat::OpenAiCompatClient;
