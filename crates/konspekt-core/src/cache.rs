use std::{
    hash::{DefaultHasher, Hash, Hasher},
    path::{Path, PathBuf},
};

use crate::provider::Provider;

/// Get the cache directory for a given transcript source
pub fn get_cache_dir(source: &str) -> PathBuf {
    let mut hasher = DefaultHasher::new();
    source.hash(&mut hasher);
    let source_hash = hasher.finish();

    get_root_cache_dir().join(source_hash.to_string())
}

pub fn get_root_cache_dir() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(|| PathBuf::from("/tmp"))
        .join("konspekt")
}

/// Get the path for the cached cleaned transcript
pub fn get_cleaned_path(cache_dir: &Path) -> PathBuf {
    cache_dir.join("transcript_cleaned.txt")
}

/// Get the path for a cached notes package (provider aware)
pub fn get_notes_path(cache_dir: &Path, provider: &Provider) -> PathBuf {
    cache_dir.join(format!("notes_{}.json", provider.slug()))
}

/// Get the path for cached flashcards (provider aware)
pub fn get_flashcards_path(cache_dir: &Path, provider: &Provider) -> PathBuf {
    cache_dir.join(format!("flashcards_{}.json", provider.slug()))
}

/// Get the path for a cached quiz (provider aware)
pub fn get_quiz_path(cache_dir: &Path, provider: &Provider) -> PathBuf {
    cache_dir.join(format!("quiz_{}.json", provider.slug()))
}
