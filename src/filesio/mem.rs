//! In-memory `ReadWriter` backing tests.

use std::{
    collections::HashMap,
    io::{Cursor, Write},
    path::{Path, PathBuf},
    sync::{Arc, Mutex},
};

use anyhow::{Result, anyhow};

use super::{BoxRead, BoxWrite, FileWrite, ReadWriter, Reader, check_fully_relative};

type FileMap = HashMap<PathBuf, Vec<u8>>;

/// Shared handle onto the in-memory file map, for inspecting what a
/// `MemReadWriter` wrote.
#[derive(Clone, Default)]
pub struct MemFilesHandle {
    file_map: Arc<Mutex<FileMap>>,
}

impl MemFilesHandle {
    pub fn paths(&self) -> Vec<PathBuf> {
        let mut paths: Vec<PathBuf> = self
            .file_map
            .lock()
            .expect("poisoned file map")
            .keys()
            .cloned()
            .collect();
        paths.sort();
        paths
    }
}

pub struct MemReadWriter {
    files: MemFilesHandle,
}

impl MemReadWriter {
    pub fn new(files: MemFilesHandle) -> Self {
        Self { files }
    }
}

impl Reader for MemReadWriter {
    fn open_read(&self, path: &Path) -> Result<BoxRead> {
        check_fully_relative(path)?;
        let files = self.files.file_map.lock().expect("poisoned file map");
        match files.get(path) {
            None => Err(anyhow!("file {:?} not found", path)),
            Some(buf) => Ok(Box::new(Cursor::new(buf.clone()))),
        }
    }

    fn exists(&self, path: &Path) -> bool {
        let files = self.files.file_map.lock().expect("poisoned file map");
        files.contains_key(path)
    }
}

impl ReadWriter for MemReadWriter {
    fn open_write(&self, path: &Path) -> Result<BoxWrite> {
        check_fully_relative(path)?;
        Ok(Box::new(MemFileWrite {
            files: self.files.clone(),
            path: path.to_owned(),
            buf: Vec::new(),
        }))
    }
}

struct MemFileWrite {
    files: MemFilesHandle,
    path: PathBuf,
    buf: Vec<u8>,
}

impl std::fmt::Debug for MemFileWrite {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemFileWrite")
            .field("path", &self.path)
            .finish()
    }
}

impl Write for MemFileWrite {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.buf.write(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl FileWrite for MemFileWrite {
    fn commit(self: Box<Self>) -> Result<()> {
        let mut files = self.files.file_map.lock().expect("poisoned file map");
        files.insert(self.path, self.buf);
        Ok(())
    }
}
