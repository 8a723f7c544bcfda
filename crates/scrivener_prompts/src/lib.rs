//! Prompt table lookup and template rendering.
//!
//! Prompts live in a TOML document of nested tables. The leaf table of a
//! prompt maps variant names to template strings, and `DEFAULT` is the
//! variant used unless another is requested.
//!
//! ```
//! use scrivener_prompts::{PromptManager, PromptVars, render};
//!
//! let prompts = PromptManager::from_toml_str(r#"
//! [AUTHOR.IDEATE]
//! DEFAULT = "Pitch a {{genre}} story."
//! "#).unwrap();
//!
//! let template = prompts.get_prompt("AUTHOR.IDEATE", None).unwrap();
//! let vars = PromptVars::new().with("genre", "heist");
//! assert_eq!(render(template, &vars).unwrap(), "Pitch a heist story.");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod manager;
mod path;
mod template;

pub use manager::{DEFAULT_VARIANT, PromptManager};
pub use path::PromptPath;
pub use template::{PromptVars, render};
