use std::path::Path;
use thiserror::Error;
use walkdir::{DirEntry, WalkDir};

/// The mail transport stores a header file and a data file per message.
const FILES_PER_MESSAGE: u64 = 2;

#[derive(Debug, Error)]
pub enum MailQueueError {
    #[error("queue walk failed: {0}")]
    Walk(#[from] walkdir::Error),
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry.file_name().to_str().is_some_and(|name| name.starts_with('.'))
}

/// Recursively counts regular files under `root` and derives the approximate
/// number of queued messages by halving the raw count (integer truncation,
/// to absorb the occasional stray file).
///
/// Hidden entries are skipped and hidden directories are pruned. Symlinks are
/// not followed, there is no depth limit.
///
/// # Errors
/// Returns an error if `root` is missing or any directory in the walk is
/// unreadable.
pub fn count_queued_messages(root: &Path) -> Result<u64, MailQueueError> {
    let mut files: u64 = 0;
    let walker = WalkDir::new(root)
        .follow_links(false)
        .into_iter()
        .filter_entry(|entry| entry.depth() == 0 || !is_hidden(entry));

    for entry in walker {
        let entry = entry?;
        if entry.file_type().is_file() {
            files += 1;
        }
    }

    Ok(files / FILES_PER_MESSAGE)
}
