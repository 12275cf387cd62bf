//! # Thought Store
//!
//! Async storage adapter for thoughts. The reducer never touches the store
//! directly: it emits a [`StoreRequest`], the event loop runs it through
//! [`execute`] on a tokio task, and the [`StoreReply`] comes back as an
//! action.
//!
//! [`JsonThoughtStore`] keeps every record in memory and mirrors it to
//! `<data_dir>/thoughts.json`. All writes use atomic rename (write `.tmp`,
//! then `rename()`), and memory is only updated after the file write
//! succeeded, so a failed write leaves both unchanged.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use crate::core::error::StoreError;
use crate::core::thought::{NewThought, Thought, ThoughtId};

pub const STORE_FILE: &str = "thoughts.json";

#[async_trait]
pub trait ThoughtStore: Send + Sync {
    /// Insert a new record and return the id assigned to it.
    async fn create(&self, thought: NewThought) -> Result<ThoughtId, StoreError>;

    /// `Ok(None)` when no record has this id.
    async fn get(&self, id: ThoughtId) -> Result<Option<Thought>, StoreError>;

    /// Replace the whole record stored under `thought.id`.
    async fn update(&self, thought: &Thought) -> Result<(), StoreError>;

    /// Remove a record. Removing an id that does not exist is not an error.
    async fn delete(&self, id: ThoughtId) -> Result<(), StoreError>;

    /// Every record, ascending by id.
    async fn list_all(&self) -> Result<Vec<Thought>, StoreError>;
}

/// A storage call requested by the reducer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreRequest {
    Create(NewThought),
    Get(ThoughtId),
    Update(Thought),
    Delete(ThoughtId),
    List,
}

/// Successful result of a [`StoreRequest`], one variant per request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreReply {
    Created(ThoughtId),
    Fetched(Option<Thought>),
    Updated,
    Deleted,
    Listed(Vec<Thought>),
}

/// Run one request. `store` is `None` while the store is still opening.
pub async fn execute(
    store: Option<&dyn ThoughtStore>,
    request: StoreRequest,
) -> Result<StoreReply, StoreError> {
    let Some(store) = store else {
        warn!("Store request before store was ready: {:?}", request);
        return Err(StoreError::NotReady);
    };
    match request {
        StoreRequest::Create(thought) => store.create(thought).await.map(StoreReply::Created),
        StoreRequest::Get(id) => store.get(id).await.map(StoreReply::Fetched),
        StoreRequest::Update(thought) => store.update(&thought).await.map(|_| StoreReply::Updated),
        StoreRequest::Delete(id) => store.delete(id).await.map(|_| StoreReply::Deleted),
        StoreRequest::List => store.list_all().await.map(StoreReply::Listed),
    }
}

fn first_id() -> u64 {
    1
}

/// On-disk layout of `thoughts.json`.
#[derive(Serialize, Deserialize, Debug)]
struct StoreFile {
    #[serde(default = "first_id")]
    next_id: u64,
    #[serde(default)]
    thoughts: Vec<Thought>,
}

#[derive(Clone, Debug)]
struct StoreState {
    next_id: u64,
    thoughts: BTreeMap<ThoughtId, Thought>,
}

impl Default for StoreState {
    fn default() -> Self {
        Self {
            next_id: first_id(),
            thoughts: BTreeMap::new(),
        }
    }
}

impl From<StoreFile> for StoreState {
    fn from(file: StoreFile) -> Self {
        let thoughts: BTreeMap<ThoughtId, Thought> =
            file.thoughts.into_iter().map(|t| (t.id, t)).collect();
        // A hand-edited file may carry a stale counter; ids must stay fresh.
        let past_max = thoughts.keys().next_back().map_or(first_id(), |id| id.0 + 1);
        Self {
            next_id: file.next_id.max(past_max),
            thoughts,
        }
    }
}

impl StoreState {
    fn to_file(&self) -> StoreFile {
        StoreFile {
            next_id: self.next_id,
            thoughts: self.thoughts.values().cloned().collect(),
        }
    }
}

pub struct JsonThoughtStore {
    path: PathBuf,
    state: Mutex<StoreState>,
}

impl JsonThoughtStore {
    /// Open (or create) the store in `data_dir`.
    pub async fn open(data_dir: &Path) -> Result<Arc<Self>, StoreError> {
        tokio::fs::create_dir_all(data_dir).await?;
        let path = data_dir.join(STORE_FILE);

        let state = match tokio::fs::read_to_string(&path).await {
            Ok(json) => {
                let file: StoreFile = serde_json::from_str(&json)?;
                StoreState::from(file)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                info!("No store at {}, starting empty", path.display());
                StoreState::default()
            }
            Err(e) => return Err(e.into()),
        };

        info!(
            "Opened thought store at {} ({} records, next id {})",
            path.display(),
            state.thoughts.len(),
            state.next_id
        );
        Ok(Arc::new(Self {
            path,
            state: Mutex::new(state),
        }))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn persist(&self, state: &StoreState) -> Result<(), StoreError> {
        let tmp_path = self.path.with_extension("tmp");
        let json = serde_json::to_string_pretty(&state.to_file())
            .map_err(|e| StoreError::Io(e.to_string()))?;
        tokio::fs::write(&tmp_path, json).await?;
        tokio::fs::rename(&tmp_path, &self.path).await?;
        Ok(())
    }
}

#[async_trait]
impl ThoughtStore for JsonThoughtStore {
    async fn create(&self, thought: NewThought) -> Result<ThoughtId, StoreError> {
        let mut state = self.state.lock().await;
        let mut next = state.clone();
        let id = ThoughtId(next.next_id);
        next.next_id += 1;
        next.thoughts.insert(id, thought.with_id(id));
        self.persist(&next).await?;
        *state = next;
        debug!("Created thought {}", id);
        Ok(id)
    }

    async fn get(&self, id: ThoughtId) -> Result<Option<Thought>, StoreError> {
        let state = self.state.lock().await;
        Ok(state.thoughts.get(&id).cloned())
    }

    async fn update(&self, thought: &Thought) -> Result<(), StoreError> {
        let mut state = self.state.lock().await;
        let mut next = state.clone();
        next.thoughts.insert(thought.id, thought.clone());
        next.next_id = next.next_id.max(thought.id.0 + 1);
        self.persist(&next).await?;
        *state = next;
        debug!("Updated thought {}", thought.id);
        Ok(())
    }

    async fn delete(&self, id: ThoughtId) -> Result<(), StoreError> {
        let mut state = self.state.lock().await;
        if !state.thoughts.contains_key(&id) {
            debug!("Delete of absent thought {} is a no-op", id);
            return Ok(());
        }
        let mut next = state.clone();
        next.thoughts.remove(&id);
        self.persist(&next).await?;
        *state = next;
        debug!("Deleted thought {}", id);
        Ok(())
    }

    async fn list_all(&self) -> Result<Vec<Thought>, StoreError> {
        let state = self.state.lock().await;
        Ok(state.thoughts.values().cloned().collect())
    }
}
