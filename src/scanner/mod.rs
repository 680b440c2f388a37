pub mod classifier;
pub mod file_walker;

pub use classifier::{path_matches, ClassifiedFiles, FileClass, FileClassifier};
pub use file_walker::FileWalker;
