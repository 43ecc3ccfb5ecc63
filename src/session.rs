// SPDX-License-Identifier: GPL-3.0-only

//! Settings session lifecycle
//!
//! One [`SettingsSession`] backs one open settings screen. The session owns
//! the preference bridge for the lifetime of the screen and runs settings
//! transfers as background tasks tied to that lifetime: starting a new
//! transfer replaces any still-running one, and tearing the session down
//! cancels whatever is left in flight.

use crate::bridge::PreferenceBridge;
use crate::errors::{SettingsError, SettingsResult};
use crate::storage::SettingsStore;
use crate::transfer::{ExportPlan, ImportSummary, SettingsTransfer};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use tokio::task::JoinHandle;
use tracing::debug;

/// Read-only view of the paired host registry
///
/// The registry itself lives outside the settings core; the settings screen
/// only displays how many remote hosts are currently registered.
pub trait HostRegistry: Send + Sync {
    /// Number of remote hosts registered with this client
    fn registered_host_count(&self) -> usize;
}

enum TransferTask {
    Export {
        handle: JoinHandle<SettingsResult<PathBuf>>,
        stage: PathBuf,
    },
    Import {
        handle: JoinHandle<SettingsResult<ImportSummary>>,
    },
}

/// Owner of the settings record for one settings-screen session
///
/// At most one session owns a given record at a time; the bridge behind the
/// session's mutex makes every get/put one atomic step, so a reader never
/// observes a half-applied field.
pub struct SettingsSession<S: SettingsStore + Send + 'static> {
    bridge: Arc<Mutex<PreferenceBridge<S>>>,
    hosts: Option<Arc<dyn HostRegistry>>,
    transfer: Option<TransferTask>,
}

impl<S: SettingsStore + Send + 'static> SettingsSession<S> {
    /// Open a session, constructing the record from the backing store
    pub fn open(store: S) -> Self {
        Self {
            bridge: Arc::new(Mutex::new(PreferenceBridge::load(store))),
            hosts: None,
            transfer: None,
        }
    }

    /// Attach the external host registry
    pub fn with_host_registry(mut self, hosts: Arc<dyn HostRegistry>) -> Self {
        self.hosts = Some(hosts);
        self
    }

    /// Registered host count for display, when a registry is attached
    pub fn registered_host_count(&self) -> Option<usize> {
        self.hosts.as_ref().map(|hosts| hosts.registered_host_count())
    }

    /// Run one atomic operation against the preference bridge
    pub fn with_bridge<R>(&self, op: impl FnOnce(&mut PreferenceBridge<S>) -> R) -> R {
        let mut bridge = self.bridge.lock().expect("settings lock poisoned");
        op(&mut bridge)
    }

    /// Start exporting the current settings into `dir`
    ///
    /// Any transfer still in flight from this session is cancelled first;
    /// at most one transfer runs per session. The export itself runs off
    /// this call path; await [`finish_export`](Self::finish_export) for the
    /// published path.
    pub async fn start_export(&mut self, dir: PathBuf) {
        self.cancel_transfer().await;

        let plan = ExportPlan::new(&dir);
        let stage = plan.stage.clone();
        // Export is a pure read; snapshot the record and release the lock
        // before any I/O happens
        let config = self.with_bridge(|bridge| bridge.config().clone());

        let handle = tokio::spawn(async move { SettingsTransfer::export(config, &plan).await });
        self.transfer = Some(TransferTask::Export { handle, stage });
    }

    /// Wait for the running export and return its published path
    ///
    /// `None` when no export is in flight. A cancelled export reports
    /// [`SettingsError::Cancelled`].
    pub async fn finish_export(&mut self) -> Option<SettingsResult<PathBuf>> {
        match self.transfer.take() {
            Some(TransferTask::Export { handle, .. }) => Some(match handle.await {
                Ok(result) => result,
                Err(_) => Err(SettingsError::Cancelled),
            }),
            other => {
                self.transfer = other;
                None
            }
        }
    }

    /// Start importing the document at `path`
    ///
    /// Cancels any transfer still in flight first. The document is read and
    /// parsed in full before the record is touched; field application then
    /// happens as one locked pass over the bridge.
    pub async fn start_import(&mut self, path: PathBuf) {
        self.cancel_transfer().await;

        let bridge = Arc::clone(&self.bridge);
        let handle = tokio::spawn(async move {
            let document = SettingsTransfer::read_document(&path).await?;
            let mut bridge = bridge.lock().expect("settings lock poisoned");
            Ok(SettingsTransfer::apply_document(&document, &mut bridge))
        });
        self.transfer = Some(TransferTask::Import { handle });
    }

    /// Wait for the running import and return its advisory summary
    ///
    /// `None` when no import is in flight.
    pub async fn finish_import(&mut self) -> Option<SettingsResult<ImportSummary>> {
        match self.transfer.take() {
            Some(TransferTask::Import { handle }) => Some(match handle.await {
                Ok(result) => result,
                Err(_) => Err(SettingsError::Cancelled),
            }),
            other => {
                self.transfer = other;
                None
            }
        }
    }

    /// Cancel whatever transfer is still in flight
    ///
    /// A cancelled export never publishes: its staging file is removed and
    /// the final name never appears. A cancelled import keeps the fields it
    /// already committed; unprocessed fields keep their prior value.
    pub async fn cancel_transfer(&mut self) {
        let Some(task) = self.transfer.take() else {
            return;
        };
        match task {
            TransferTask::Export { handle, stage } => {
                handle.abort();
                let _ = handle.await;
                let _ = tokio::fs::remove_file(&stage).await;
                debug!("Export cancelled");
            }
            TransferTask::Import { handle } => {
                handle.abort();
                let _ = handle.await;
                debug!("Import cancelled");
            }
        }
    }

    /// Tear the session down, cancelling all outstanding work
    pub async fn shutdown(&mut self) {
        self.cancel_transfer().await;
    }
}

impl<S: SettingsStore + Send + 'static> Drop for SettingsSession<S> {
    fn drop(&mut self) {
        // Synchronous drop can only abort; shutdown() additionally removes
        // staged export files
        if let Some(task) = self.transfer.take() {
            match task {
                TransferTask::Export { handle, .. } => handle.abort(),
                TransferTask::Import { handle } => handle.abort(),
            }
        }
    }
}
