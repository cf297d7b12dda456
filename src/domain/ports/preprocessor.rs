//! Preprocessor port - the external definition-expansion pass

use crate::domain::entities::QuestEntry;
use crate::domain::value_objects::PreprocessResult;

/// External preprocessing capability.
///
/// Implementations inspect the entry for definition statements and, when
/// found, write a substituted copy into the preprocessed-output directory
/// under the same relative path. The original file must never be modified.
pub trait Preprocessor: Send + Sync {
    /// Name used in logs
    fn name(&self) -> &'static str;

    /// Preprocess one entry
    fn preprocess(&self, entry: &QuestEntry) -> PreprocessResult;
}

impl<P: Preprocessor + ?Sized> Preprocessor for Box<P> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn preprocess(&self, entry: &QuestEntry) -> PreprocessResult {
        (**self).preprocess(entry)
    }
}
