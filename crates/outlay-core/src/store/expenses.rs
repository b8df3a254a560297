//! CSV-backed expense store

use std::collections::HashSet;
use std::fs::{self, File};
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard};

use chrono::NaiveDate;
use csv::{ReaderBuilder, WriterBuilder};
use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::models::{Expense, ExpenseFilter, ExpensePatch, NewExpense};

/// Separator for the tags cell. Tags containing it are rejected on write
/// because the cell could not round-trip through the file.
const TAG_SEPARATOR: &str = "|";

/// Column order of the expense CSV file.
const CSV_HEADER: [&str; 6] = ["id", "amount", "category", "date", "description", "tags"];

/// One row of the expense CSV. Tags are flattened into a single
/// `|`-joined cell so the file stays a plain six-column table.
#[derive(Debug, Serialize, Deserialize)]
struct ExpenseRow {
    id: i64,
    amount: f64,
    category: String,
    date: NaiveDate,
    description: String,
    tags: String,
}

impl From<&Expense> for ExpenseRow {
    fn from(expense: &Expense) -> Self {
        Self {
            id: expense.id,
            amount: expense.amount,
            category: expense.category.clone(),
            date: expense.date,
            description: expense.description.clone(),
            tags: expense.tags.join(TAG_SEPARATOR),
        }
    }
}

impl From<ExpenseRow> for Expense {
    fn from(row: ExpenseRow) -> Self {
        let tags = row
            .tags
            .split(TAG_SEPARATOR)
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .collect();
        Self {
            id: row.id,
            amount: row.amount,
            category: row.category,
            date: row.date,
            description: row.description,
            tags,
        }
    }
}

/// Clone-able handle to the expense data
///
/// The in-memory sequence is authoritative; the backing file is a
/// write-through copy updated before every mutating call returns.
#[derive(Clone)]
pub struct ExpenseStore {
    inner: Arc<Mutex<StoreInner>>,
}

struct StoreInner {
    path: PathBuf,
    expenses: Vec<Expense>,
}

impl ExpenseStore {
    /// Open the store at `path`, creating parent directories and an empty
    /// (header-only) file when nothing exists yet.
    ///
    /// A file that exists but does not parse is an error; no repair is
    /// attempted.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        ensure_parent_dir(&path)?;

        let expenses = if path.exists() {
            let expenses = read_file(&path)?;
            check_ids(&expenses, &path)?;
            expenses
        } else {
            write_file(&path, &[])?;
            info!("Created expense file: {}", path.display());
            Vec::new()
        };

        debug!(
            "Opened expense store: {} ({} expenses)",
            path.display(),
            expenses.len()
        );

        Ok(Self {
            inner: Arc::new(Mutex::new(StoreInner { path, expenses })),
        })
    }

    fn lock(&self) -> MutexGuard<'_, StoreInner> {
        self.inner.lock().unwrap()
    }

    /// All expenses in storage order.
    pub fn list(&self) -> Vec<Expense> {
        self.lock().expenses.clone()
    }

    /// Number of stored expenses.
    pub fn count(&self) -> usize {
        self.lock().expenses.len()
    }

    /// Look up a single expense.
    pub fn get(&self, id: i64) -> Result<Expense> {
        self.lock()
            .expenses
            .iter()
            .find(|e| e.id == id)
            .cloned()
            .ok_or_else(|| Error::expense_not_found(id))
    }

    /// Expenses matching every provided criterion.
    pub fn filter(&self, filter: &ExpenseFilter) -> Vec<Expense> {
        self.lock()
            .expenses
            .iter()
            .filter(|e| filter.matches(e))
            .cloned()
            .collect()
    }

    /// Validate and store a new expense, assigning the next id (one more
    /// than the current maximum, or 1 for an empty store).
    pub fn create(&self, new: NewExpense) -> Result<Expense> {
        validate_amount(new.amount)?;
        validate_category(&new.category)?;
        let tags = normalize_tags(new.tags)?;

        let mut inner = self.lock();
        let expense = Expense {
            id: next_id(&inner.expenses),
            amount: new.amount,
            category: new.category,
            date: new.date,
            description: new.description,
            tags,
        };

        let mut expenses = inner.expenses.clone();
        expenses.push(expense.clone());
        write_file(&inner.path, &expenses)?;
        inner.expenses = expenses;

        debug!("Created expense {} in {}", expense.id, expense.category);
        Ok(expense)
    }

    /// Apply a partial update. Replacement fields are validated first; on
    /// any failure the stored record is left untouched.
    pub fn update(&self, id: i64, patch: ExpensePatch) -> Result<Expense> {
        if let Some(amount) = patch.amount {
            validate_amount(amount)?;
        }
        if let Some(ref category) = patch.category {
            validate_category(category)?;
        }
        let tags = patch.tags.map(normalize_tags).transpose()?;

        let mut inner = self.lock();
        let mut expenses = inner.expenses.clone();
        let expense = expenses
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| Error::expense_not_found(id))?;

        if let Some(amount) = patch.amount {
            expense.amount = amount;
        }
        if let Some(category) = patch.category {
            expense.category = category;
        }
        if let Some(date) = patch.date {
            expense.date = date;
        }
        if let Some(description) = patch.description {
            expense.description = description;
        }
        if let Some(tags) = tags {
            expense.tags = tags;
        }
        let updated = expense.clone();

        write_file(&inner.path, &expenses)?;
        inner.expenses = expenses;

        debug!("Updated expense {}", id);
        Ok(updated)
    }

    /// Remove an expense.
    pub fn delete(&self, id: i64) -> Result<()> {
        let mut inner = self.lock();
        let index = inner
            .expenses
            .iter()
            .position(|e| e.id == id)
            .ok_or_else(|| Error::expense_not_found(id))?;

        let mut expenses = inner.expenses.clone();
        expenses.remove(index);
        write_file(&inner.path, &expenses)?;
        inner.expenses = expenses;

        debug!("Deleted expense {}", id);
        Ok(())
    }
}

fn next_id(expenses: &[Expense]) -> i64 {
    expenses.iter().map(|e| e.id).max().unwrap_or(0) + 1
}

fn validate_amount(amount: f64) -> Result<()> {
    if !amount.is_finite() {
        return Err(Error::validation("Amount must be a finite number"));
    }
    if amount < 0.0 {
        return Err(Error::validation("Amount must be non-negative"));
    }
    Ok(())
}

fn validate_category(category: &str) -> Result<()> {
    if category.trim().is_empty() {
        return Err(Error::validation("Category must not be empty"));
    }
    Ok(())
}

/// Trim tags, drop empties and duplicates (first occurrence wins), and
/// reject tags that contain the cell separator.
fn normalize_tags(tags: Vec<String>) -> Result<Vec<String>> {
    let mut cleaned: Vec<String> = Vec::new();
    for tag in tags {
        let tag = tag.trim().to_string();
        if tag.is_empty() {
            continue;
        }
        if tag.contains(TAG_SEPARATOR) {
            return Err(Error::validation(format!(
                "Tag must not contain '{}': {}",
                TAG_SEPARATOR, tag
            )));
        }
        if !cleaned.contains(&tag) {
            cleaned.push(tag);
        }
    }
    Ok(cleaned)
}

fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
            info!("Created data directory: {}", parent.display());
        }
    }
    Ok(())
}

fn check_ids(expenses: &[Expense], path: &Path) -> Result<()> {
    let mut seen = HashSet::new();
    for expense in expenses {
        if expense.id <= 0 {
            return Err(Error::Validation(format!(
                "Invalid expense id {} in {}",
                expense.id,
                path.display()
            )));
        }
        if !seen.insert(expense.id) {
            return Err(Error::Validation(format!(
                "Duplicate expense id {} in {}",
                expense.id,
                path.display()
            )));
        }
    }
    Ok(())
}

fn read_file(path: &Path) -> Result<Vec<Expense>> {
    let file = File::open(path)?;
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(BufReader::new(file));

    let mut expenses = Vec::new();
    for row in reader.deserialize::<ExpenseRow>() {
        expenses.push(row?.into());
    }
    Ok(expenses)
}

/// Rewrite the whole file: header first, then one row per expense, into a
/// temp file in the same directory that is renamed over the target.
fn write_file(path: &Path, expenses: &[Expense]) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let temp = NamedTempFile::new_in(dir)?;

    let mut writer = WriterBuilder::new().has_headers(false).from_writer(&temp);
    writer.write_record(CSV_HEADER)?;
    for expense in expenses {
        writer.serialize(ExpenseRow::from(expense))?;
    }
    writer.flush()?;
    drop(writer);

    temp.persist(path).map_err(|e| Error::Io(e.error))?;
    Ok(())
}
