pub mod handler;
pub mod resources;
pub mod tools;
pub mod uri;

pub use handler::McpHandler;
