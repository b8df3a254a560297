//! JSON-backed budget store
//!
//! Budgets are a flat mapping of category name to spending limit, persisted
//! as a single pretty-printed JSON object.

use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::{BufReader, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard};

use tempfile::NamedTempFile;
use tracing::{debug, info};

use crate::error::{Error, Result};

/// Clone-able handle to the budget data
#[derive(Clone)]
pub struct BudgetStore {
    inner: Arc<Mutex<StoreInner>>,
}

struct StoreInner {
    path: PathBuf,
    budgets: BTreeMap<String, f64>,
}

impl BudgetStore {
    /// Open the store at `path`. A missing file means no budgets are
    /// configured; an empty object file is created so the data directory
    /// is complete after the first open.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let budgets = if path.exists() {
            read_file(&path)?
        } else {
            let empty = BTreeMap::new();
            write_file(&path, &empty)?;
            info!("Created budget file: {}", path.display());
            empty
        };

        debug!(
            "Opened budget store: {} ({} budgets)",
            path.display(),
            budgets.len()
        );

        Ok(Self {
            inner: Arc::new(Mutex::new(StoreInner { path, budgets })),
        })
    }

    fn lock(&self) -> MutexGuard<'_, StoreInner> {
        self.inner.lock().unwrap()
    }

    /// The full category-to-limit mapping.
    pub fn all(&self) -> BTreeMap<String, f64> {
        self.lock().budgets.clone()
    }

    /// The configured limit for one category, if any.
    pub fn get(&self, category: &str) -> Option<f64> {
        self.lock().budgets.get(category).copied()
    }

    /// Number of budgeted categories.
    pub fn count(&self) -> usize {
        self.lock().budgets.len()
    }

    /// Merge `entries` into the mapping: new categories are added, existing
    /// ones overwritten, absent ones untouched. Every limit is validated
    /// before anything is applied; on failure the mapping is unchanged.
    /// Returns the full updated mapping.
    pub fn set_many(&self, entries: BTreeMap<String, f64>) -> Result<BTreeMap<String, f64>> {
        for (category, &limit) in &entries {
            validate_limit(category, limit)?;
        }

        let mut inner = self.lock();
        let mut budgets = inner.budgets.clone();
        budgets.extend(entries);
        write_file(&inner.path, &budgets)?;
        inner.budgets = budgets;

        debug!("Updated budgets ({} total)", inner.budgets.len());
        Ok(inner.budgets.clone())
    }

    /// Set a single category limit.
    pub fn set(&self, category: impl Into<String>, limit: f64) -> Result<BTreeMap<String, f64>> {
        let mut entries = BTreeMap::new();
        entries.insert(category.into(), limit);
        self.set_many(entries)
    }
}

fn validate_limit(category: &str, limit: f64) -> Result<()> {
    if !limit.is_finite() {
        return Err(Error::Validation(format!(
            "Budget limit for '{}' must be a finite number",
            category
        )));
    }
    if limit < 0.0 {
        return Err(Error::Validation(format!(
            "Budget limit for '{}' must be non-negative",
            category
        )));
    }
    Ok(())
}

fn read_file(path: &Path) -> Result<BTreeMap<String, f64>> {
    let file = File::open(path)?;
    let budgets = serde_json::from_reader(BufReader::new(file))?;
    Ok(budgets)
}

fn write_file(path: &Path, budgets: &BTreeMap<String, f64>) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut temp = NamedTempFile::new_in(dir)?;
    serde_json::to_writer_pretty(&temp, budgets)?;
    temp.write_all(b"\n")?;
    temp.persist(path).map_err(|e| Error::Io(e.error))?;
    Ok(())
}
