use thiserror::Error;
use wasm_bindgen_futures::JsFuture;
use web_sys::js_sys::Promise;
use web_sys::{File, FileReader};

use crate::dialogs::Dialogs;
use crate::storage::{self, KeyValueStore, StorageError};

pub const INVALID_FILE_MESSAGE: &str = "Please select a valid video file.";
pub const QUOTA_MESSAGE: &str = "Storage limit exceeded! Local storage only supports small video files. For larger videos, please clear old ones first.";
pub const SAVE_FAILED_MESSAGE: &str = "Could not save the video on this device. Please try again.";
pub const DELETE_PROMPT: &str = "Are you sure you want to remove this video?";

pub fn is_video_mime(mime: &str) -> bool {
    mime.starts_with("video/")
}

/// Gatekeeper run before any encoding. Alerts once and returns false for a
/// missing file or one that is not a video.
pub fn accepts_file(mime: Option<&str>, dialogs: &impl Dialogs) -> bool {
    match mime {
        Some(mime) if is_video_mime(mime) => true,
        _ => {
            dialogs.alert(INVALID_FILE_MESSAGE);
            false
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    Stored,
    RolledBack,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeleteOutcome {
    Removed,
    Cancelled,
    OutOfRange,
    Failed,
}

/// The uploaded videos, kept in memory and mirrored to a store after every
/// change. Positions are what gets persisted; `ids` run beside them for the
/// lifetime of the page so views can tell equal URLs apart.
pub struct VideoGallery<S> {
    store: S,
    videos: Vec<String>,
    ids: Vec<u64>,
    next_id: u64,
}

impl<S: KeyValueStore> VideoGallery<S> {
    pub fn load(store: S) -> Self {
        let videos = storage::load_videos(&store);
        log::debug!("Loaded {} stored videos", videos.len());
        let ids: Vec<u64> = (0..videos.len() as u64).collect();
        Self {
            store,
            next_id: ids.len() as u64,
            videos,
            ids,
        }
    }

    pub fn videos(&self) -> &[String] {
        &self.videos
    }

    /// `(id, data_url)` in list order.
    pub fn items(&self) -> impl Iterator<Item = (u64, &str)> + '_ {
        self.ids
            .iter()
            .copied()
            .zip(self.videos.iter().map(String::as_str))
    }

    pub fn len(&self) -> usize {
        self.videos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.videos.is_empty()
    }

    /// Appends an encoded video and persists the whole list. When the store
    /// refuses the write the list goes back to what it was before the call.
    pub fn push_encoded(&mut self, data_url: String, dialogs: &impl Dialogs) -> SubmitOutcome {
        let before = self.videos.len();
        self.videos.push(data_url);

        match storage::save_videos(&self.store, &self.videos) {
            Ok(()) => {
                self.ids.push(self.next_id);
                self.next_id += 1;
                log::info!("Stored video #{}", self.videos.len());
                SubmitOutcome::Stored
            }
            Err(err) => {
                log::error!("Failed to persist videos: {}", err);
                self.videos.truncate(before);
                let message = match err {
                    StorageError::QuotaExceeded => QUOTA_MESSAGE,
                    _ => SAVE_FAILED_MESSAGE,
                };
                dialogs.alert(message);
                SubmitOutcome::RolledBack
            }
        }
    }

    pub fn delete(&mut self, index: usize, dialogs: &impl Dialogs) -> DeleteOutcome {
        if index >= self.videos.len() {
            return DeleteOutcome::OutOfRange;
        }
        if !dialogs.confirm(DELETE_PROMPT) {
            return DeleteOutcome::Cancelled;
        }

        let removed = self.videos.remove(index);
        match storage::save_videos(&self.store, &self.videos) {
            Ok(()) => {
                self.ids.remove(index);
                DeleteOutcome::Removed
            }
            Err(err) => {
                log::error!("Failed to persist videos after delete: {}", err);
                self.videos.insert(index, removed);
                DeleteOutcome::Failed
            }
        }
    }
}

#[derive(Debug, Error)]
pub enum EncodeError {
    #[error("file reader is not available")]
    Unavailable,
    #[error("failed to read file: {0}")]
    Read(String),
    #[error("file reader produced no data url")]
    Empty,
}

/// Reads a file into a `data:` URL.
pub async fn read_as_data_url(file: &File) -> Result<String, EncodeError> {
    let reader = FileReader::new().map_err(|_| EncodeError::Unavailable)?;
    let done = Promise::new(&mut |resolve, reject| {
        reader.set_onload(Some(&resolve));
        reader.set_onerror(Some(&reject));
    });
    reader
        .read_as_data_url(file)
        .map_err(|err| EncodeError::Read(format!("{:?}", err)))?;
    JsFuture::from(done)
        .await
        .map_err(|err| EncodeError::Read(format!("{:?}", err)))?;

    reader
        .result()
        .ok()
        .and_then(|value| value.as_string())
        .ok_or(EncodeError::Empty)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config;
    use crate::dialogs::testing::ScriptedDialogs;
    use crate::storage::testing::MemoryStore;

    fn gallery_with(store: &MemoryStore, count: usize) -> VideoGallery<&MemoryStore> {
        let mut gallery = VideoGallery::load(store);
        let dialogs = ScriptedDialogs::answering(true);
        for i in 0..count {
            gallery.push_encoded(format!("data:video/mp4;base64,{}", i), &dialogs);
        }
        gallery
    }

    #[test]
    fn mime_check_only_looks_at_prefix() {
        assert!(is_video_mime("video/mp4"));
        assert!(is_video_mime("video/quicktime"));
        assert!(!is_video_mime("image/png"));
        assert!(!is_video_mime(""));
        assert!(!is_video_mime("application/video/mp4"));
    }

    #[test]
    fn non_video_is_rejected_with_one_alert() {
        let store = MemoryStore::default();
        let gallery = gallery_with(&store, 2);
        let dialogs = ScriptedDialogs::answering(true);

        assert!(!accepts_file(Some("image/jpeg"), &dialogs));
        assert_eq!(dialogs.alert_count(), 1);
        assert_eq!(dialogs.alerts.borrow()[0], INVALID_FILE_MESSAGE);
        assert_eq!(gallery.len(), 2);
    }

    #[test]
    fn missing_file_is_rejected() {
        let dialogs = ScriptedDialogs::answering(true);
        assert!(!accepts_file(None, &dialogs));
        assert_eq!(dialogs.alert_count(), 1);
    }

    #[test]
    fn video_is_accepted_silently() {
        let dialogs = ScriptedDialogs::answering(true);
        assert!(accepts_file(Some("video/webm"), &dialogs));
        assert_eq!(dialogs.alert_count(), 0);
    }

    #[test]
    fn stored_video_grows_list_and_persists() {
        let store = MemoryStore::default();
        let mut gallery = gallery_with(&store, 1);
        let dialogs = ScriptedDialogs::answering(true);

        let outcome = gallery.push_encoded("data:video/mp4;base64,new".to_string(), &dialogs);

        assert_eq!(outcome, SubmitOutcome::Stored);
        assert_eq!(gallery.len(), 2);
        assert_eq!(storage::load_videos(&store).len(), 2);
        assert_eq!(dialogs.alert_count(), 0);
    }

    #[test]
    fn quota_failure_rolls_back_and_alerts() {
        let store = MemoryStore::default();
        let mut gallery = gallery_with(&store, 2);
        let persisted_before = store.raw(config::VIDEOS_KEY);
        store.set_full(true);
        let dialogs = ScriptedDialogs::answering(true);

        let outcome = gallery.push_encoded("data:video/mp4;base64,huge".to_string(), &dialogs);

        assert_eq!(outcome, SubmitOutcome::RolledBack);
        assert_eq!(gallery.len(), 2);
        assert_eq!(dialogs.alerts.borrow().as_slice(), [QUOTA_MESSAGE]);
        assert_eq!(store.raw(config::VIDEOS_KEY), persisted_before);
        assert_eq!(storage::load_videos(&store), gallery.videos());
    }

    #[test]
    fn unavailable_store_rolls_back_with_generic_alert() {
        let mut gallery = VideoGallery::load(None::<MemoryStore>);
        let dialogs = ScriptedDialogs::answering(true);

        let outcome = gallery.push_encoded("data:video/mp4;base64,x".to_string(), &dialogs);

        assert_eq!(outcome, SubmitOutcome::RolledBack);
        assert!(gallery.is_empty());
        assert_eq!(gallery.items().count(), 0);
        assert_eq!(dialogs.alerts.borrow().as_slice(), [SAVE_FAILED_MESSAGE]);
    }

    #[test]
    fn delete_keeps_survivor_ids_and_urls_together() {
        let store = MemoryStore::default();
        let mut gallery = VideoGallery::load(&store);
        let dialogs = ScriptedDialogs::answering(true);
        for url in ["data:a", "data:b", "data:a"] {
            gallery.push_encoded(url.to_string(), &dialogs);
        }
        let before: Vec<(u64, String)> =
            gallery.items().map(|(id, url)| (id, url.to_string())).collect();
        assert_ne!(before[0].0, before[2].0);

        assert_eq!(gallery.delete(0, &dialogs), DeleteOutcome::Removed);

        let after: Vec<(u64, String)> =
            gallery.items().map(|(id, url)| (id, url.to_string())).collect();
        assert_eq!(after, before[1..].to_vec());

        gallery.push_encoded("data:c".to_string(), &dialogs);
        let ids: Vec<u64> = gallery.items().map(|(id, _)| id).collect();
        assert_eq!(ids.len(), 3);
        assert!(!before.iter().any(|(id, _)| *id == ids[2]));
    }

    #[test]
    fn rolled_back_push_adds_no_id() {
        let store = MemoryStore::default();
        let mut gallery = gallery_with(&store, 1);
        store.set_full(true);
        let dialogs = ScriptedDialogs::answering(true);

        gallery.push_encoded("data:video/mp4;base64,huge".to_string(), &dialogs);

        assert_eq!(gallery.items().count(), 1);
    }

    #[test]
    fn delete_without_confirmation_keeps_list() {
        let store = MemoryStore::default();
        let mut gallery = gallery_with(&store, 3);
        let before = gallery.videos().to_vec();
        let dialogs = ScriptedDialogs::answering(false);

        assert_eq!(gallery.delete(1, &dialogs), DeleteOutcome::Cancelled);
        assert_eq!(gallery.videos(), before.as_slice());
        assert_eq!(dialogs.confirms.borrow().as_slice(), [DELETE_PROMPT]);
    }

    #[test]
    fn confirmed_delete_shifts_later_items_down() {
        let store = MemoryStore::default();
        let mut gallery = gallery_with(&store, 4);
        let before = gallery.videos().to_vec();
        let dialogs = ScriptedDialogs::answering(true);

        assert_eq!(gallery.delete(1, &dialogs), DeleteOutcome::Removed);

        assert_eq!(gallery.len(), 3);
        assert_eq!(gallery.videos()[0], before[0]);
        assert_eq!(gallery.videos()[1], before[2]);
        assert_eq!(gallery.videos()[2], before[3]);
        assert_eq!(storage::load_videos(&store), gallery.videos());
    }

    #[test]
    fn delete_out_of_range_does_not_prompt() {
        let store = MemoryStore::default();
        let mut gallery = gallery_with(&store, 1);
        let dialogs = ScriptedDialogs::answering(true);

        assert_eq!(gallery.delete(5, &dialogs), DeleteOutcome::OutOfRange);
        assert!(dialogs.confirms.borrow().is_empty());
        assert_eq!(gallery.len(), 1);
    }

    #[test]
    fn failed_delete_restores_item_in_place() {
        let store = MemoryStore::default();
        let mut gallery = gallery_with(&store, 3);
        let before = gallery.videos().to_vec();
        store.set_full(true);
        let dialogs = ScriptedDialogs::answering(true);

        assert_eq!(gallery.delete(0, &dialogs), DeleteOutcome::Failed);
        assert_eq!(gallery.videos(), before.as_slice());
    }

    #[test]
    fn load_picks_up_previous_session() {
        let store = MemoryStore::default();
        drop(gallery_with(&store, 2));
        let reloaded = VideoGallery::load(&store);
        assert_eq!(reloaded.len(), 2);
        assert_eq!(reloaded.videos()[1], "data:video/mp4;base64,1");
    }
}
