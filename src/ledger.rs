//! The in-memory list of expenses and the file that backs it.

use std::fs::{self, File};
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Error, Result};
use log::{debug, error};
use rust_decimal::Decimal;
use tempfile::NamedTempFile;

use crate::record::Record;
use crate::store::{self, LoadMode};

/// Backing file used when none is given.
pub const DEFAULT_FILENAME: &str = "expenses.csv";

/// Ordered expenses, in insertion order. After every change the whole
/// backing file is rewritten from this list.
#[derive(Debug)]
pub struct Ledger {
    path: PathBuf,
    records: Vec<Record>,
}

impl Ledger {
    /// Opens the ledger backed by `path`, loading any existing records.
    ///
    /// In `LoadMode::Lenient` this never fails: problems reading the file
    /// are logged and the ledger keeps whatever records were read before
    /// the problem.
    pub fn open<P: Into<PathBuf>>(path: P, mode: LoadMode) -> Result<Self> {
        let mut ledger = Ledger {
            path: path.into(),
            records: Vec::new(),
        };
        ledger.load(mode)?;
        Ok(ledger)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Replaces the in-memory records with the contents of the backing file.
    /// A missing file is an empty ledger.
    pub fn load(&mut self, mode: LoadMode) -> Result<()> {
        self.records.clear();

        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("{:?} does not exist, starting empty", self.path);
                return Ok(());
            }
            Err(e) => {
                let err = Error::new(e).context(format!("opening {:?} for reading", self.path));
                return self.load_failed(mode, err);
            }
        };

        match store::read_records(BufReader::new(file), mode, &mut self.records) {
            Ok(()) => {
                debug!("loaded {} records from {:?}", self.records.len(), self.path);
                Ok(())
            }
            Err(e) => {
                let err = e.context(format!("reading {:?}", self.path));
                self.load_failed(mode, err)
            }
        }
    }

    fn load_failed(&self, mode: LoadMode, err: Error) -> Result<()> {
        match mode {
            LoadMode::Strict => Err(err),
            LoadMode::Lenient => {
                error!(
                    "error loading expenses, continuing with {} records: {:#}",
                    self.records.len(),
                    err
                );
                Ok(())
            }
        }
    }

    /// Appends `record` and rewrites the backing file. The record is not
    /// validated.
    pub fn add(&mut self, record: Record) -> Result<()> {
        self.records.push(record);
        self.save()
    }

    /// Removes the record at `index` and rewrites the backing file, returning
    /// the removed record. Later records move down one position. An index past
    /// the end does nothing and returns `None`.
    ///
    /// Positions are only meaningful for the listing they were read from;
    /// callers must take `index` from a listing fetched after the last change.
    pub fn remove(&mut self, index: usize) -> Result<Option<Record>> {
        if index >= self.records.len() {
            debug!(
                "ignoring removal of index {} from {} records",
                index,
                self.records.len()
            );
            return Ok(None);
        }
        let removed = self.records.remove(index);
        self.save()?;
        Ok(Some(removed))
    }

    /// Sum of all amounts; zero when empty. Fails if the sum does not fit in
    /// a `Decimal`.
    pub fn total(&self) -> Result<Decimal> {
        self.records
            .iter()
            .try_fold(Decimal::ZERO, |sum, record| sum.checked_add(record.amount()))
            .ok_or_else(|| {
                anyhow!(
                    "total of {} expenses in {:?} is too large",
                    self.records.len(),
                    self.path
                )
            })
    }

    /// Rewrites the whole backing file from the in-memory records.
    ///
    /// The contents go to a temporary file next to the backing file which
    /// then replaces it, so a failed write leaves the old file in place. If
    /// the backing file is a symlink, its target is replaced and the link is
    /// kept. An existing file's permissions carry over to the new file.
    pub fn save(&self) -> Result<()> {
        let target = self.resolve_target()?;
        let dir = match target.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        };
        let mut tmp = NamedTempFile::new_in(dir)
            .with_context(|| format!("creating temporary file in {:?}", dir))?;
        store::write_records(&mut tmp, &self.records)
            .with_context(|| format!("writing {:?}", tmp.path()))?;
        match fs::metadata(&target) {
            Ok(meta) => tmp
                .as_file()
                .set_permissions(meta.permissions())
                .with_context(|| format!("copying permissions of {:?}", target))?,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => {
                return Err(Error::new(e).context(format!("reading metadata of {:?}", target)))
            }
        }
        tmp.persist(&target)
            .with_context(|| format!("replacing {:?}", target))?;
        debug!("saved {} records to {:?}", self.records.len(), target);
        Ok(())
    }

    /// The file that `save` replaces: the backing path with symlinks followed.
    fn resolve_target(&self) -> Result<PathBuf> {
        match fs::canonicalize(&self.path) {
            Ok(target) => Ok(target),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(self.path.clone()),
            Err(e) => Err(Error::new(e).context(format!("resolving {:?}", self.path))),
        }
    }
}
