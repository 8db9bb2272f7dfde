// ueprune-core/src/domain/class.rs

use serde::Serialize;
use std::fmt;

pub const HEADER_EXTENSION: &str = "h";
pub const SOURCE_EXTENSION: &str = "cpp";

/// The name of a C++ class as typed by the user.
///
/// Kept verbatim: no trimming, no character-set check. An empty name is
/// legal and targets files literally named `.h` and `.cpp`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ClassName(String);

impl ClassName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// `<name>.h`
    pub fn header_file(&self) -> String {
        format!("{}.{}", self.0, HEADER_EXTENSION)
    }

    /// `<name>.cpp`
    pub fn source_file(&self) -> String {
        format!("{}.{}", self.0, SOURCE_EXTENSION)
    }

    pub fn target_files(&self) -> [String; 2] {
        [self.header_file(), self.source_file()]
    }

    /// Exact, case-sensitive comparison against both target file names.
    pub fn matches_file_name(&self, file_name: &str) -> bool {
        file_name == self.header_file() || file_name == self.source_file()
    }
}

impl fmt::Display for ClassName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ClassName {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_files() {
        let class = ClassName::new("PlayerCharacter");
        assert_eq!(class.header_file(), "PlayerCharacter.h");
        assert_eq!(class.source_file(), "PlayerCharacter.cpp");
        assert_eq!(
            class.target_files(),
            ["PlayerCharacter.h".to_string(), "PlayerCharacter.cpp".to_string()]
        );
    }

    #[test]
    fn test_empty_name_targets_bare_extensions() {
        let class = ClassName::new("");
        assert!(class.is_empty());
        assert_eq!(class.target_files(), [".h".to_string(), ".cpp".to_string()]);
    }

    #[test]
    fn test_matching_is_exact() {
        let class = ClassName::new("Foo");
        assert!(class.matches_file_name("Foo.h"));
        assert!(class.matches_file_name("Foo.cpp"));
        assert!(!class.matches_file_name("foo.h"));
        assert!(!class.matches_file_name("Foo.hpp"));
        assert!(!class.matches_file_name("FooBar.cpp"));
        assert!(!class.matches_file_name("Foo.h.bak"));
    }

    #[test]
    fn test_name_is_not_trimmed() {
        let class = ClassName::new(" Foo ");
        assert_eq!(class.header_file(), " Foo .h");
    }
}
