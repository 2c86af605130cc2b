//! Payload assembly for the micro:bit MicroPython coach.
//!
//! `coach-payload` builds the single JSON document the coaching bot is
//! configured from. It combines three project files:
//!
//! - `prompts/system_prompt.md`, copied verbatim into `system`
//! - `prompts/tutor_guidelines.md`, reduced to its policy section in
//!   `policy_excerpt` (see [`excerpt`])
//! - `tools/docs_index.json`, whose `allowed_docs` list becomes `allowed_docs`
//!
//! # Library usage
//!
//! ```no_run
//! use std::path::Path;
//! use coach_payload::{Payload, PayloadSources};
//!
//! let payload = Payload::assemble(Path::new("."), &PayloadSources::default())?;
//! println!("{}", payload.render()?);
//! # Ok::<(), String>(())
//! ```
//!
//! # Binary
//!
//! ```sh
//! # Locate the project root automatically
//! assemble-payload
//!
//! # Explicit root, with progress logged to stderr
//! assemble-payload --root /path/to/coach -v
//! ```

pub mod docs_index;
pub mod excerpt;
pub mod payload;
pub mod root;
pub mod sources;

pub use docs_index::DocsIndex;
pub use excerpt::policy_excerpt;
pub use payload::Payload;
pub use root::resolve_root;
pub use sources::PayloadSources;
