//! In-process plugin host for the `--plugin` shell
//!
//! Owns the pass-through processor and stands in for the DAW's project
//! storage: the parameter blob is restored from the session file at startup
//! and written back whenever it changes.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use xypad_core::plugin::{PassThroughProcessor, PluginParams};

const SAMPLE_RATE: f64 = 48_000.0;
const MAX_BLOCK_SIZE: usize = 512;

/// Processor plus its persisted session
#[derive(Debug)]
pub struct PluginHost {
    processor: PassThroughProcessor,
    session_path: PathBuf,
    /// Blob as last written to (or read from) disk
    saved: Vec<u8>,
}

impl PluginHost {
    /// Create the processor and restore the session, if any
    ///
    /// A missing or unreadable session leaves the parameters at their defaults.
    pub fn open(session_path: PathBuf) -> Self {
        let mut processor = PassThroughProcessor::new();
        processor.prepare(SAMPLE_RATE, MAX_BLOCK_SIZE);
        log::info!(
            "host: {} prepared at {} Hz, {} samples per block",
            processor.name(),
            processor.sample_rate(),
            processor.max_block_size()
        );

        let saved = match restore(&processor, &session_path) {
            Ok(Some(blob)) => {
                log::info!("host: Restored session from {:?}", session_path);
                blob
            }
            Ok(None) => {
                log::info!("host: No session at {:?}, using defaults", session_path);
                Vec::new()
            }
            Err(e) => {
                log::warn!("host: {:#}", e);
                Vec::new()
            }
        };

        Self {
            processor,
            session_path,
            saved,
        }
    }

    pub fn params(&self) -> Arc<PluginParams> {
        self.processor.params()
    }

    /// Write the parameter blob if it changed since the last write
    ///
    /// Returns true when the file was written.
    pub fn persist(&mut self) -> Result<bool> {
        let blob = self.processor.state();
        if blob == self.saved {
            return Ok(false);
        }

        if let Some(parent) = self.session_path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create session directory: {:?}", parent))?;
        }
        std::fs::write(&self.session_path, &blob)
            .with_context(|| format!("Failed to write session: {:?}", self.session_path))?;

        log::debug!("host: Session saved to {:?}", self.session_path);
        self.saved = blob;
        Ok(true)
    }
}

fn restore(processor: &PassThroughProcessor, path: &Path) -> Result<Option<Vec<u8>>> {
    if !path.exists() {
        return Ok(None);
    }
    let blob = std::fs::read(path).with_context(|| format!("Failed to read session: {:?}", path))?;
    processor
        .set_state(&blob)
        .with_context(|| format!("Ignoring session {:?}", path))?;
    Ok(Some(processor.state()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use xypad_core::plugin::ParamSnapshot;
    use xypad_core::Preset;

    #[test]
    fn test_persist_then_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("session.bin");

        let mut host = PluginHost::open(path.clone());
        assert!(!path.exists());

        host.params().apply(ParamSnapshot {
            x: 0.2,
            y: 0.9,
            preset: Preset::Black,
        });
        assert!(host.persist().unwrap());
        assert!(!host.persist().unwrap(), "unchanged state is not rewritten");

        let reopened = PluginHost::open(path);
        let snapshot = reopened.params().snapshot();
        assert!((snapshot.x - 0.2).abs() < 1e-6);
        assert!((snapshot.y - 0.9).abs() < 1e-6);
        assert_eq!(snapshot.preset, Preset::Black);
    }

    #[test]
    fn test_corrupt_session_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.bin");
        std::fs::write(&path, [1u8, 2, 3]).unwrap();

        let host = PluginHost::open(path);
        let snapshot = host.params().snapshot();
        assert_eq!(snapshot.x, 0.5);
        assert_eq!(snapshot.preset, Preset::Blue);
    }
}
