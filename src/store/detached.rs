//! Fire-and-forget store operations
//!
//! The express-session contract makes the completion callback optional for
//! mutations; callers that omit it don't want to wait for the write. These
//! helpers give that choice an explicit shape: the operation runs on a
//! spawned task and the returned handle can be dropped. Failures are not
//! discarded silently — they are logged through `tracing`.

use tokio::task::JoinHandle;

use super::SessionStore;
use crate::record::SessionRecord;

/// Detached variants of the mutation operations
///
/// Available on any cloneable [`SessionStore`]. Each method spawns the
/// operation onto the current tokio runtime and returns immediately;
/// dropping the returned [`JoinHandle`] detaches the task without
/// cancelling it. Await the handle to re-attach.
pub trait SessionStoreExt: SessionStore + Clone {
    /// Save a session without waiting for the write to complete
    fn set_detached(&self, sid: &str, record: SessionRecord) -> JoinHandle<()> {
        let store = self.clone();
        let sid = sid.to_string();
        tokio::spawn(async move {
            if let Err(e) = store.set(&sid, &record).await {
                tracing::warn!("Detached session save failed for {}: {}", sid, e);
            }
        })
    }

    /// Destroy a session without waiting for the deletion to complete
    fn destroy_detached(&self, sid: &str) -> JoinHandle<()> {
        let store = self.clone();
        let sid = sid.to_string();
        tokio::spawn(async move {
            if let Err(e) = store.destroy(&sid).await {
                tracing::warn!("Detached session destroy failed for {}: {}", sid, e);
            }
        })
    }

    /// Refresh a session's expiration without waiting for completion
    fn touch_detached(&self, sid: &str) -> JoinHandle<()> {
        let store = self.clone();
        let sid = sid.to_string();
        tokio::spawn(async move {
            if let Err(e) = store.touch(&sid).await {
                tracing::warn!("Detached session touch failed for {}: {}", sid, e);
            }
        })
    }
}

impl<S: SessionStore + Clone> SessionStoreExt for S {}
