pub mod fs;
pub mod mcp;
