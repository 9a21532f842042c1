use std::fs;
use std::path::Path;
use tracing::{debug, warn};

use crate::book::AddressBook;
use crate::error::AbookResult;

/// Loads the address book from a JSON file.
///
/// A missing file yields an empty book. Anything else that goes wrong is an
/// error for the caller to handle.
pub fn try_load(path: &Path) -> AbookResult<AddressBook> {
    if !path.exists() {
        debug!(path = %path.display(), "no data file, starting empty");
        return Ok(AddressBook::new());
    }
    let contents = fs::read_to_string(path)?;
    let book: AddressBook = serde_json::from_str(&contents)?;
    debug!(path = %path.display(), contacts = book.len(), "loaded address book");
    Ok(book)
}

/// Like `try_load`, but fails closed: unreadable or malformed state is
/// logged and replaced with an empty book instead of corrupting the session.
pub fn load(path: &Path) -> AddressBook {
    match try_load(path) {
        Ok(book) => book,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "could not load data file, starting empty");
            AddressBook::new()
        }
    }
}

/// Writes the address book as pretty-printed JSON, creating the parent
/// directory when needed.
pub fn save(book: &AddressBook, path: &Path) -> AbookResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }
    let contents = serde_json::to_string_pretty(book)?;
    fs::write(path, contents)?;
    debug!(path = %path.display(), contacts = book.len(), "saved address book");
    Ok(())
}
