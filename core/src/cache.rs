/// Per-run file cache with read-your-writes
use crate::formats::tsv::TsvTable;
use crate::host::{Host, HostError};
use serde_json::Value;
use std::collections::HashMap;
use std::path::Path;

/// Wraps a [`Host`] so each path is read at most once per run and later
/// reads see the last value written, even before the host flushes it.
#[derive(Debug)]
pub struct FileCache<H> {
    inner: H,
    tsv: HashMap<String, TsvTable>,
    json: HashMap<String, Value>,
    reads: usize,
}

impl<H: Host> FileCache<H> {
    pub fn new(inner: H) -> Self {
        Self {
            inner,
            tsv: HashMap::new(),
            json: HashMap::new(),
            reads: 0,
        }
    }

    /// Reads that actually reached the wrapped host.
    pub fn host_reads(&self) -> usize {
        self.reads
    }
}

impl<H: Host> Host for FileCache<H> {
    fn version(&self) -> Option<[u32; 3]> {
        self.inner.version()
    }

    fn read_tsv(&mut self, path: &str) -> Result<TsvTable, HostError> {
        if let Some(table) = self.tsv.get(path) {
            return Ok(table.clone());
        }
        let table = self.inner.read_tsv(path)?;
        self.reads += 1;
        self.tsv.insert(path.to_string(), table.clone());
        Ok(table)
    }

    fn write_tsv(&mut self, path: &str, table: &TsvTable) -> Result<(), HostError> {
        self.inner.write_tsv(path, table)?;
        self.tsv.insert(path.to_string(), table.clone());
        Ok(())
    }

    fn read_json(&mut self, path: &str) -> Result<Value, HostError> {
        if let Some(value) = self.json.get(path) {
            return Ok(value.clone());
        }
        let value = self.inner.read_json(path)?;
        self.reads += 1;
        self.json.insert(path.to_string(), value.clone());
        Ok(value)
    }

    fn write_json(&mut self, path: &str, value: &Value) -> Result<(), HostError> {
        self.inner.write_json(path, value)?;
        self.json.insert(path.to_string(), value.clone());
        Ok(())
    }

    fn copy_file(&mut self, src: &Path, dest: &str, overwrite: bool) -> Result<(), HostError> {
        self.tsv.remove(dest);
        self.json.remove(dest);
        self.inner.copy_file(src, dest, overwrite)
    }
}
