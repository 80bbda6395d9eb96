pub mod extract;
pub mod handlers;
pub mod infer;
pub mod prompts;
