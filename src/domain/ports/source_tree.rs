//! SourceTree port - file queries and upkeep under the quest root

use std::io;
use std::path::Path;

/// File queries relative to the quest root.
pub trait SourceTree: Send + Sync {
    /// True if `relative` names an existing regular file
    fn is_file(&self, relative: &Path) -> bool;

    /// True if `relative` exists and can be opened for reading
    fn is_readable(&self, relative: &Path) -> bool;

    /// Create a directory (and parents) under the quest root
    fn ensure_dir(&self, relative: &Path) -> io::Result<()>;

    /// Delete a file under the quest root. A file that is already gone is not an error.
    fn remove_file(&self, relative: &Path) -> io::Result<()>;
}
