use crate::core::errors::{Error, Result};
use crate::models::file_entry::{EntryDescriptor, EntryKind};
use std::ffi::OsStr;
use std::fs;
use std::path::MAIN_SEPARATOR;
use tokio::task;

/// Lists `path` on the blocking pool so directory IO never stalls the runtime.
pub async fn list_dir_async(path: &str) -> Result<Vec<EntryDescriptor>> {
    let path = path.to_string();

    task::spawn_blocking(move || list_dir(&path))
        .await
        .map_err(|e| Error::Other(format!("listing task failed: {e}")))?
}

/// Reads one directory level, in whatever order the filesystem yields it.
///
/// Only the top-level read can fail. An entry whose metadata cannot be
/// fetched is skipped so one broken entry does not blank out the listing.
pub fn list_dir(path: &str) -> Result<Vec<EntryDescriptor>> {
    let read_dir = fs::read_dir(path).map_err(|e| Error::directory_read(path, e))?;

    let mut entries = Vec::new();
    for entry in read_dir {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                tracing::debug!(dir = path, error = %e, "skipping unreadable entry");
                continue;
            }
        };

        // DirEntry::metadata does not follow symlinks.
        let md = match entry.metadata() {
            Ok(md) => md,
            Err(e) => {
                tracing::debug!(dir = path, entry = ?entry.file_name(), error = %e, "skipping entry without metadata");
                continue;
            }
        };

        let name = os_str_to_string(entry.file_name());
        entries.push(EntryDescriptor {
            path: join_path(path, &name),
            kind: EntryKind::from_is_dir(md.is_dir()),
            size: md.len(),
            extension: extension(&name).to_string(),
            name,
        });
    }

    Ok(entries)
}

/// Suffix of `name` starting at the last `.`, or `""` when there is none.
pub fn extension(name: &str) -> &str {
    name.rfind('.').map(|i| &name[i..]).unwrap_or("")
}

/// Plain concatenation. The parent is kept verbatim, trailing separators included.
pub fn join_path(parent: &str, name: &str) -> String {
    format!("{parent}{MAIN_SEPARATOR}{name}")
}

/// Two-space indented JSON array of the descriptors.
pub fn to_json(entries: &[EntryDescriptor]) -> Result<String> {
    Ok(serde_json::to_string_pretty(entries)?)
}

fn os_str_to_string(s: impl AsRef<OsStr>) -> String {
    s.as_ref().to_string_lossy().into_owned()
}
