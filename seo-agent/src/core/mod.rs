//! Pure report logic: prompt construction and report shaping

pub mod prompt;
pub mod report;

pub use prompt::{build_prompt, truncate_chars, PromptContext, SYSTEM_PROMPT};
pub use report::{interpret_analysis, SeoReport};
