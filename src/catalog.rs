//! Conventional commit type catalog.

/// Width the `keyword:` prefix of a type label is padded to.
const LABEL_KEYWORD_WIDTH: usize = 10;

/// A commit type keyword and its human-readable description.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommitType {
    /// Keyword written at the start of the commit head, e.g. `feat`.
    pub keyword: &'static str,
    /// What a change of this type means.
    pub description: &'static str,
}

/// The conventional commit types, in presentation order.
pub const COMMIT_TYPES: &[CommitType] = &[
    CommitType {
        keyword: "feat",
        description: "A new feature",
    },
    CommitType {
        keyword: "fix",
        description: "A bug fix",
    },
    CommitType {
        keyword: "docs",
        description: "Documentation only changes",
    },
    CommitType {
        keyword: "style",
        description: "Changes that do not affect the meaning of the code (white-space, formatting, missing semi-colons, etc)",
    },
    CommitType {
        keyword: "refactor",
        description: "A code change that neither fixes a bug nor adds a feature",
    },
    CommitType {
        keyword: "perf",
        description: "A code change that improves performance",
    },
    CommitType {
        keyword: "test",
        description: "Adding missing tests or correcting existing tests",
    },
    CommitType {
        keyword: "build",
        description: "Changes that affect the build system or external dependencies (example scopes: gulp, broccoli, npm)",
    },
    CommitType {
        keyword: "ci",
        description: "Changes to our CI configuration files and scripts (example scopes: Travis, Circle, BrowserStack, SauceLabs)",
    },
    CommitType {
        keyword: "chore",
        description: "Other changes that don't modify src or test files",
    },
    CommitType {
        keyword: "revert",
        description: "Reverts a previous commit",
    },
];

/// A selectable commit type: the keyword stored in the answer and the label shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeChoice {
    /// Keyword recorded when this choice is picked.
    pub value: &'static str,
    /// Padded `keyword: description` label.
    pub label: String,
}

impl CommitType {
    /// Returns the display label, e.g. `feat:      A new feature`.
    pub fn label(&self) -> String {
        let keyword = format!("{}:", self.keyword);
        format!(
            "{keyword:<width$} {}",
            self.description,
            width = LABEL_KEYWORD_WIDTH
        )
    }
}

/// Lists every commit type as a prompt choice, in catalog order.
pub fn list_types() -> Vec<TypeChoice> {
    COMMIT_TYPES
        .iter()
        .map(|commit_type| TypeChoice {
            value: commit_type.keyword,
            label: commit_type.label(),
        })
        .collect()
}

/// Returns the catalog keywords in order.
pub fn keywords() -> impl Iterator<Item = &'static str> {
    COMMIT_TYPES.iter().map(|commit_type| commit_type.keyword)
}

/// Looks up a commit type by keyword.
pub fn find(keyword: &str) -> Option<&'static CommitType> {
    COMMIT_TYPES
        .iter()
        .find(|commit_type| commit_type.keyword == keyword)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_types_keeps_catalog_order() {
        let values: Vec<&str> = list_types().iter().map(|c| c.value).collect();
        assert_eq!(
            values,
            vec![
                "feat", "fix", "docs", "style", "refactor", "perf", "test", "build", "ci",
                "chore", "revert"
            ]
        );
    }

    #[test]
    fn label_pads_keyword_and_colon() {
        let feat = find("feat").unwrap();
        assert_eq!(feat.label(), "feat:      A new feature");

        let refactor = find("refactor").unwrap();
        assert_eq!(
            refactor.label(),
            "refactor:  A code change that neither fixes a bug nor adds a feature"
        );
    }

    #[test]
    fn labels_align_descriptions() {
        for choice in list_types() {
            assert_eq!(&choice.label[LABEL_KEYWORD_WIDTH..=LABEL_KEYWORD_WIDTH], " ");
            assert!(choice.label.starts_with(&format!("{}:", choice.value)));
        }
    }

    #[test]
    fn find_unknown_keyword() {
        assert!(find("feature").is_none());
        assert!(find("").is_none());
    }
}
