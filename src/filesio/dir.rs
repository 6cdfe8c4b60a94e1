use std::{
    fs::File,
    io::Write,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};

use super::{BoxRead, BoxWrite, FileWrite, ReadWriter, Reader, check_fully_relative};

/// Reads and writes files within a directory, creating it on demand.
#[derive(Debug)]
pub struct DirReadWriter {
    dir_path: PathBuf,
}

impl DirReadWriter {
    pub fn new<P>(dir_path: P) -> Self
    where
        P: Into<PathBuf>,
    {
        Self {
            dir_path: dir_path.into(),
        }
    }
}

impl Reader for DirReadWriter {
    fn open_read(&self, path: &Path) -> Result<BoxRead> {
        check_fully_relative(path)?;
        let full_path = self.dir_path.join(path);
        let f = File::open(&full_path).with_context(|| format!("opening {:?}", full_path))?;
        Ok(Box::new(f))
    }

    fn exists(&self, path: &Path) -> bool {
        self.dir_path.join(path).exists()
    }
}

impl ReadWriter for DirReadWriter {
    fn open_write(&self, path: &Path) -> Result<BoxWrite> {
        check_fully_relative(path)?;
        let full_path = self.dir_path.join(path);

        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating output directory {:?}", parent))?;
        }

        let f = File::create(&full_path).with_context(|| format!("creating {:?}", full_path))?;
        Ok(Box::new(DirFileWrite { file: f }))
    }
}

#[derive(Debug)]
struct DirFileWrite {
    file: File,
}

impl Write for DirFileWrite {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.file.write(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.file.flush()
    }
}

impl FileWrite for DirFileWrite {
    fn commit(self: Box<Self>) -> Result<()> {
        let mut file = self.file;
        file.flush()?;
        Ok(())
    }
}
