//! Canonical-path resolution for the file-set matcher.
//!
//! Expansion is purely lexical: a relative path is absolutized against a base
//! directory and `.`/`..` components are resolved without consulting the
//! filesystem. Nonexistent paths therefore normalize the same way existing
//! ones do, and symlinks are not resolved.

use std::env;
use std::path::{Component, Path, PathBuf};

/// Expands `path` to an absolute, normalized form against the process
/// working directory.
///
/// When the working directory is unavailable the path is normalized in
/// place, so evaluation stays total.
pub fn expand(path: &Path) -> PathBuf {
    match env::current_dir() {
        Ok(base) => expand_from(&base, path),
        Err(_) => normalize(path),
    }
}

/// Expands `path` against `base`, which is expected to be absolute.
pub fn expand_from(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        normalize(path)
    } else {
        normalize(&base.join(path))
    }
}

fn normalize(path: &Path) -> PathBuf {
    let mut stack: Vec<Component> = Vec::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match stack.last() {
                Some(Component::Normal(_)) => {
                    stack.pop();
                }
                // ".." at the root stays at the root; a leading ".." on a
                // relative path is preserved.
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => stack.push(component),
            },
            other => stack.push(other),
        }
    }
    stack.into_iter().collect()
}
