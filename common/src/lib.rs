//! Receipt AI Common Library
//!
//! CLIとWeb(WASM)で共有される型とユーティリティ

pub mod types;
pub mod error;
pub mod schema;
pub mod prompts;
pub mod request;
pub mod parser;
pub mod validate;

pub use types::{Item, Receipt};
pub use error::{Error, Result};
pub use schema::response_format;
pub use prompts::{build_retry_prompt, EXTRACTION_PROMPT};
pub use request::{
    ChatRequest, ChatResponse, DEFAULT_MODEL, MAX_TOKENS, OPENAI_API_URL, VALIDATION_RETRIES,
};
pub use parser::{extract_json, parse_receipt_response};
