use crate::error::{CueConvertoError, CueConvertoResult};
use async_recursion::async_recursion;
use std::path::{Path, PathBuf};
use tokio::fs;

#[async_recursion]
pub async fn get_all_files(dir_path: &Path, recursive: bool) -> CueConvertoResult<Vec<PathBuf>> {
    let mut dir = fs::read_dir(dir_path).await?;
    let mut files = Vec::new();

    while let Some(entry) = dir.next_entry().await? {
        let path = entry.path();

        if path.is_dir() {
            if recursive {
                files.append(&mut get_all_files(&path, recursive).await?);
            }
        } else {
            files.push(path);
        }
    }

    Ok(files)
}

pub async fn find_cue_files(dir_path: &Path, recursive: bool) -> CueConvertoResult<Vec<PathBuf>> {
    let mut cue_files: Vec<_> = get_all_files(dir_path, recursive)
        .await?
        .into_iter()
        .filter(|file| {
            file.extension()
                .and_then(|s| s.to_str())
                .is_some_and(|ext| ext.eq_ignore_ascii_case("cue"))
        })
        .collect();

    cue_files.sort();

    Ok(cue_files)
}

/// Expands directories in `paths` to the cue sheets inside them, files are kept as given.
pub async fn resolve_cue_paths(
    paths: &[PathBuf],
    recursive: bool,
) -> CueConvertoResult<Vec<PathBuf>> {
    let mut resolved = Vec::new();

    for path in paths {
        let is_dir = fs::metadata(path)
            .await
            .map(|meta| meta.is_dir())
            .unwrap_or(false);

        if !is_dir {
            resolved.push(path.clone());
            continue;
        }

        let cue_files = find_cue_files(path, recursive).await?;
        if cue_files.is_empty() {
            return Err(CueConvertoError::NoCueFileFound(path.clone()));
        }

        resolved.extend(cue_files);
    }

    Ok(resolved)
}
