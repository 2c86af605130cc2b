//! Input file locations with project-relative defaults.
//!
//! [`PayloadSources`] names the three files the payload is built from and
//! resolves them against a project root via [`resolve`](PayloadSources::resolve).

use std::path::{Path, PathBuf};

/// Relative locations of the payload inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PayloadSources {
    /// System prompt text. Default: `"prompts/system_prompt.md"`.
    pub system_prompt: PathBuf,
    /// Tutor guidelines with `#`/`##` headings. Default: `"prompts/tutor_guidelines.md"`.
    pub guidelines: PathBuf,
    /// Allowed-docs index. Default: `"tools/docs_index.json"`.
    pub docs_index: PathBuf,
}

impl Default for PayloadSources {
    fn default() -> Self {
        Self {
            system_prompt: PathBuf::from("prompts/system_prompt.md"),
            guidelines: PathBuf::from("prompts/tutor_guidelines.md"),
            docs_index: PathBuf::from("tools/docs_index.json"),
        }
    }
}

impl PayloadSources {
    /// Join every source path onto `root`.
    pub fn resolve(&self, root: &Path) -> Self {
        Self {
            system_prompt: root.join(&self.system_prompt),
            guidelines: root.join(&self.guidelines),
            docs_index: root.join(&self.docs_index),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_project_layout() {
        let sources = PayloadSources::default();
        assert_eq!(sources.system_prompt, Path::new("prompts/system_prompt.md"));
        assert_eq!(sources.guidelines, Path::new("prompts/tutor_guidelines.md"));
        assert_eq!(sources.docs_index, Path::new("tools/docs_index.json"));
    }

    #[test]
    fn resolve_joins_root() {
        let sources = PayloadSources::default().resolve(Path::new("/srv/coach"));
        assert_eq!(
            sources.system_prompt,
            Path::new("/srv/coach/prompts/system_prompt.md")
        );
        assert_eq!(sources.docs_index, Path::new("/srv/coach/tools/docs_index.json"));
    }
}
