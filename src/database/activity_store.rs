use std::sync::Arc;

use serde::{Serialize, Serializer};
use tokio::sync::RwLock;

use crate::models::Activity;

/// Insertion-ordered mapping from activity name to [`Activity`].
///
/// Activity sets are small, so lookups are linear scans; ordering is what
/// the listing contract cares about.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActivityDirectory {
    entries: Vec<(String, Activity)>,
}

impl ActivityDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces. A replaced entry keeps its original position.
    pub fn insert(&mut self, name: impl Into<String>, activity: Activity) {
        let name = name.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some((_, existing)) => *existing = activity,
            None => self.entries.push((name, activity)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&Activity> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, a)| a)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Activity> {
        self.entries
            .iter_mut()
            .find(|(n, _)| n == name)
            .map(|(_, a)| a)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(n, _)| n.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Activity)> {
        self.entries.iter().map(|(n, a)| (n.as_str(), a))
    }
}

impl Serialize for ActivityDirectory {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.entries.iter().map(|(n, a)| (n, a)))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignupOutcome {
    Added,
    UnknownActivity,
    AlreadyEnrolled,
    Full,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemovalOutcome {
    Removed,
    UnknownActivity,
    NotEnrolled,
}

/// Shared handle to the process' activity directory.
///
/// Cloning is cheap and every clone sees the same data. Each operation holds
/// the lock for its whole check-then-mutate step.
#[derive(Debug, Clone, Default)]
pub struct ActivityStore {
    inner: Arc<RwLock<ActivityDirectory>>,
}

impl ActivityStore {
    pub fn new(directory: ActivityDirectory) -> Self {
        Self {
            inner: Arc::new(RwLock::new(directory)),
        }
    }

    /// Copy of the directory at this instant.
    pub async fn snapshot(&self) -> ActivityDirectory {
        self.inner.read().await.clone()
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }

    pub async fn contains(&self, name: &str) -> bool {
        self.inner.read().await.get(name).is_some()
    }

    pub async fn add_participant(&self, name: &str, email: &str) -> SignupOutcome {
        let mut directory = self.inner.write().await;
        let Some(activity) = directory.get_mut(name) else {
            return SignupOutcome::UnknownActivity;
        };
        if activity.is_enrolled(email) {
            return SignupOutcome::AlreadyEnrolled;
        }
        if activity.is_full() {
            return SignupOutcome::Full;
        }
        activity.participants.push(email.to_string());
        SignupOutcome::Added
    }

    pub async fn remove_participant(&self, name: &str, email: &str) -> RemovalOutcome {
        let mut directory = self.inner.write().await;
        let Some(activity) = directory.get_mut(name) else {
            return RemovalOutcome::UnknownActivity;
        };
        let Some(pos) = activity.participants.iter().position(|p| p == email) else {
            return RemovalOutcome::NotEnrolled;
        };
        activity.participants.remove(pos);
        RemovalOutcome::Removed
    }
}
