use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use serde::{de::DeserializeOwned, Serialize};

use crate::domain::{Budget, Transaction};

use super::{Result, StorageBackend};

const SLOT_EXTENSION: &str = "json";
const TMP_SUFFIX: &str = "tmp";
const TRANSACTIONS_SLOT: &str = "transactions";
const BUDGETS_SLOT: &str = "budgets";

/// Filesystem-backed JSON persistence with one file per slot.
#[derive(Debug, Clone)]
pub struct JsonStorage {
    root: PathBuf,
}

impl JsonStorage {
    /// Opens storage rooted at `root`, or at the platform data directory
    /// when no root is given.
    pub fn new(root: Option<PathBuf>) -> Result<Self> {
        let root = root.unwrap_or_else(default_root);
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    pub fn slot_path(&self, slot: &str) -> PathBuf {
        self.root.join(format!("{}.{}", slot, SLOT_EXTENSION))
    }

    pub fn base_dir(&self) -> &Path {
        &self.root
    }

    fn load_slot<T: DeserializeOwned>(&self, slot: &str) -> Vec<T> {
        let path = self.slot_path(slot);
        if !path.exists() {
            return Vec::new();
        }
        let data = match fs::read_to_string(&path) {
            Ok(data) => data,
            Err(err) => {
                tracing::warn!("failed to read slot `{}`, starting empty: {}", slot, err);
                return Vec::new();
            }
        };
        match serde_json::from_str(&data) {
            Ok(records) => records,
            Err(err) => {
                tracing::warn!("slot `{}` holds malformed JSON, starting empty: {}", slot, err);
                Vec::new()
            }
        }
    }

    fn save_slot<T: Serialize>(&self, slot: &str, records: &[T]) -> Result<()> {
        let path = self.slot_path(slot);
        let json = serde_json::to_string_pretty(records)?;
        let tmp = tmp_path(&path);
        write_atomic(&tmp, &json)?;
        fs::rename(&tmp, &path)?;
        Ok(())
    }
}

impl StorageBackend for JsonStorage {
    fn load_transactions(&self) -> Vec<Transaction> {
        self.load_slot(TRANSACTIONS_SLOT)
    }

    fn save_transactions(&self, transactions: &[Transaction]) -> Result<()> {
        self.save_slot(TRANSACTIONS_SLOT, transactions)
    }

    fn load_budgets(&self) -> Vec<Budget> {
        self.load_slot(BUDGETS_SLOT)
    }

    fn save_budgets(&self, budgets: &[Budget]) -> Result<()> {
        self.save_slot(BUDGETS_SLOT, budgets)
    }
}

fn default_root() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("fintrack")
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_atomic(path: &Path, data: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}
