use serde::{Deserialize, Serialize};
use thiserror::Error;
use wasm_bindgen::JsCast;
use web_sys::{window, DomException, Storage};

use crate::config;

pub const VIDEO_LIST_VERSION: u32 = 1;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum StorageError {
    #[error("browser storage is not available")]
    Unavailable,
    #[error("storage quota exceeded")]
    QuotaExceeded,
    #[error("storage rejected the write: {0}")]
    Rejected(String),
    #[error("could not serialize stored value: {0}")]
    Serialize(String),
}

/// A single-slot-per-key string store. Browser `localStorage` and
/// `sessionStorage` both fit behind this.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// A missing store reads as empty and refuses writes.
impl<S: KeyValueStore> KeyValueStore for Option<S> {
    fn get(&self, key: &str) -> Option<String> {
        self.as_ref().and_then(|store| store.get(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        match self {
            Some(store) => store.set(key, value),
            None => Err(StorageError::Unavailable),
        }
    }
}

#[derive(Clone)]
pub struct BrowserStore {
    storage: Storage,
}

impl BrowserStore {
    pub fn local() -> Option<Self> {
        window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
            .map(|storage| Self { storage })
    }

    pub fn session() -> Option<Self> {
        window()
            .and_then(|w| w.session_storage().ok())
            .flatten()
            .map(|storage| Self { storage })
    }
}

impl KeyValueStore for BrowserStore {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        // setItem either stores the whole string or throws, nothing in between
        self.storage.set_item(key, value).map_err(|err| {
            match err.dyn_ref::<DomException>() {
                Some(exception) if exception.name() == "QuotaExceededError" => {
                    StorageError::QuotaExceeded
                }
                Some(exception) => StorageError::Rejected(exception.message()),
                None => StorageError::Rejected(format!("{:?}", err)),
            }
        })
    }
}

pub fn puzzle_solved(store: &impl KeyValueStore) -> bool {
    store.get(config::PUZZLE_SOLVED_KEY).as_deref() == Some("true")
}

pub fn mark_puzzle_solved(store: &impl KeyValueStore) -> Result<(), StorageError> {
    store.set(config::PUZZLE_SOLVED_KEY, "true")
}

#[derive(Serialize)]
struct VideoListOut<'a> {
    version: u32,
    videos: &'a [String],
}

#[derive(Deserialize)]
struct VideoListIn {
    version: u32,
    videos: Vec<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StoredVideos {
    Versioned(VideoListIn),
    // Plain JSON array written by earlier versions of the page
    Legacy(Vec<String>),
}

/// Reads the persisted video list. Absent, corrupt or unknown-version data
/// all load as an empty list.
pub fn load_videos(store: &impl KeyValueStore) -> Vec<String> {
    let Some(raw) = store.get(config::VIDEOS_KEY) else {
        return Vec::new();
    };
    match serde_json::from_str::<StoredVideos>(&raw) {
        Ok(StoredVideos::Versioned(list)) if list.version == VIDEO_LIST_VERSION => list.videos,
        Ok(StoredVideos::Versioned(list)) => {
            log::warn!("Ignoring stored videos with unknown version {}", list.version);
            Vec::new()
        }
        Ok(StoredVideos::Legacy(videos)) => videos,
        Err(err) => {
            log::warn!("Stored videos are unreadable, starting empty: {}", err);
            Vec::new()
        }
    }
}

/// Always writes the versioned envelope, also over a legacy array. Earlier
/// versions of the page cannot append to the result.
pub fn save_videos(store: &impl KeyValueStore, videos: &[String]) -> Result<(), StorageError> {
    let body = serde_json::to_string(&VideoListOut {
        version: VIDEO_LIST_VERSION,
        videos,
    })
    .map_err(|err| StorageError::Serialize(err.to_string()))?;
    store.set(config::VIDEOS_KEY, &body)
}
