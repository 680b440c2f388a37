use crate::config::{ClassificationConfig, MatchMode};
use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FileClass {
    SwiftSource,
    Storyboard,
    Xib,
}

impl FileClass {
    pub const ALL: [FileClass; 3] = [FileClass::SwiftSource, FileClass::Storyboard, FileClass::Xib];
}

impl fmt::Display for FileClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FileClass::SwiftSource => "swift sources",
            FileClass::Storyboard => "storyboards",
            FileClass::Xib => "xibs",
        };
        f.write_str(name)
    }
}

/// The one place the path-vs-token policy is decided.
///
/// `Contains` is a loose substring test on the whole path, directories
/// included: `foo.swift.bak` and `Pkg.swiftpm/Info.plist` both match `.swift`.
pub fn path_matches(path: &str, token: &str, mode: MatchMode) -> bool {
    match mode {
        MatchMode::Contains => path.contains(token),
        MatchMode::Suffix => path.ends_with(token),
    }
}

pub struct FileClassifier {
    match_mode: MatchMode,
    source_token: String,
    storyboard_token: String,
    xib_token: String,
}

impl FileClassifier {
    pub fn new(config: &ClassificationConfig) -> Self {
        Self {
            match_mode: config.match_mode,
            source_token: config.source_token.clone(),
            storyboard_token: config.storyboard_token.clone(),
            xib_token: config.xib_token.clone(),
        }
    }

    pub fn token(&self, class: FileClass) -> &str {
        match class {
            FileClass::SwiftSource => &self.source_token,
            FileClass::Storyboard => &self.storyboard_token,
            FileClass::Xib => &self.xib_token,
        }
    }

    pub fn is_class(&self, path: &Path, class: FileClass) -> bool {
        path_matches(&path.to_string_lossy(), self.token(class), self.match_mode)
    }

    /// Paths of one class, in the order they were listed.
    pub fn filter(&self, paths: &[PathBuf], class: FileClass) -> Vec<PathBuf> {
        paths
            .iter()
            .filter(|path| self.is_class(path, class))
            .cloned()
            .collect()
    }

    pub fn classify(&self, paths: &[PathBuf]) -> ClassifiedFiles {
        ClassifiedFiles {
            swift_sources: self.filter(paths, FileClass::SwiftSource),
            storyboards: self.filter(paths, FileClass::Storyboard),
            xibs: self.filter(paths, FileClass::Xib),
        }
    }

    pub fn match_mode(&self) -> MatchMode {
        self.match_mode
    }
}

impl Default for FileClassifier {
    fn default() -> Self {
        Self::new(&ClassificationConfig::default())
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClassifiedFiles {
    pub swift_sources: Vec<PathBuf>,
    pub storyboards: Vec<PathBuf>,
    pub xibs: Vec<PathBuf>,
}

impl ClassifiedFiles {
    pub fn files(&self, class: FileClass) -> &[PathBuf] {
        match class {
            FileClass::SwiftSource => &self.swift_sources,
            FileClass::Storyboard => &self.storyboards,
            FileClass::Xib => &self.xibs,
        }
    }

    pub fn total(&self) -> usize {
        self.swift_sources.len() + self.storyboards.len() + self.xibs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paths(names: &[&str]) -> Vec<PathBuf> {
        names.iter().map(PathBuf::from).collect()
    }

    #[test]
    fn test_contains_matching_is_loose() {
        assert!(path_matches("App/View.swift", ".swift", MatchMode::Contains));
        assert!(path_matches("readme.swift.txt", ".swift", MatchMode::Contains));
        assert!(path_matches("foo.swift.bak", ".swift", MatchMode::Contains));
        assert!(!path_matches("View.m", ".swift", MatchMode::Contains));
    }

    #[test]
    fn test_suffix_matching_is_strict() {
        assert!(path_matches("App/View.swift", ".swift", MatchMode::Suffix));
        assert!(!path_matches("readme.swift.txt", ".swift", MatchMode::Suffix));
    }

    #[test]
    fn test_classify_keeps_listing_order() {
        let classifier = FileClassifier::default();
        let listed = paths(&[
            "root/b.swift",
            "root/Main.storyboard",
            "root/a.swift",
            "root/Cell.xib",
            "root/notes.txt",
        ]);

        let classified = classifier.classify(&listed);

        assert_eq!(
            classified.swift_sources,
            paths(&["root/b.swift", "root/a.swift"])
        );
        assert_eq!(classified.storyboards, paths(&["root/Main.storyboard"]));
        assert_eq!(classified.xibs, paths(&["root/Cell.xib"]));
        assert_eq!(classified.total(), 4);
    }

    #[test]
    fn test_path_can_land_in_several_classes() {
        let classifier = FileClassifier::default();
        let listed = paths(&["weird.swift.xib"]);

        let classified = classifier.classify(&listed);

        assert_eq!(classified.swift_sources.len(), 1);
        assert_eq!(classified.xibs.len(), 1);
        assert!(classified.storyboards.is_empty());
    }

    #[test]
    fn test_directory_names_count_for_contains() {
        let classifier = FileClassifier::default();
        assert!(classifier.is_class(Path::new("Pkg.swiftpm/Info.plist"), FileClass::SwiftSource));
    }

    #[test]
    fn test_suffix_mode_from_config() {
        let config = ClassificationConfig {
            match_mode: MatchMode::Suffix,
            ..ClassificationConfig::default()
        };
        let classifier = FileClassifier::new(&config);
        let listed = paths(&["readme.swift.txt", "A.swift"]);

        assert_eq!(
            classifier.filter(&listed, FileClass::SwiftSource),
            paths(&["A.swift"])
        );
        assert_eq!(classifier.match_mode(), MatchMode::Suffix);
    }

    #[test]
    fn test_empty_classification() {
        let classified = FileClassifier::default().classify(&paths(&["a.txt"]));
        assert!(classified.is_empty());
        for class in FileClass::ALL {
            assert!(classified.files(class).is_empty());
        }
    }
}
