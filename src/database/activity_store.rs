use std::sync::Arc;

use tokio::sync::RwLock;

use crate::models::{Activity, ActivityMap};

/// Shared in-memory activity mapping. Cloning shares the same underlying map.
#[derive(Clone)]
pub struct ActivityStore {
    inner: Arc<RwLock<ActivityMap>>,
}

impl ActivityStore {
    pub fn new(activities: ActivityMap) -> Self {
        Self {
            inner: Arc::new(RwLock::new(activities)),
        }
    }

    /// Point-in-time copy of every activity.
    pub async fn snapshot(&self) -> ActivityMap {
        self.inner.read().await.clone()
    }

    /// Runs `f` against the named activity while holding the write lock.
    /// Returns `None` if the activity does not exist.
    pub async fn update<R>(&self, name: &str, f: impl FnOnce(&mut Activity) -> R) -> Option<R> {
        let mut guard = self.inner.write().await;
        guard.get_mut(name).map(f)
    }
}
