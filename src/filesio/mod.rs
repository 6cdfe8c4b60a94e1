//! Abstraction over the collection of output files.

mod dir;
#[cfg(test)]
pub mod mem;

use std::{
    fmt::Debug,
    io::{Read, Write},
    path::Path,
};

use anyhow::{Result, bail};

pub use dir::DirReadWriter;

pub type BoxRead = Box<dyn Read>;

/// An open output file. Written data only counts once `commit` succeeds.
pub trait FileWrite: Debug + Write {
    fn commit(self: Box<Self>) -> Result<()>;
}

pub type BoxWrite = Box<dyn FileWrite>;

/// Protocol for reading files from the collection.
pub trait Reader {
    /// Opens a file for reading. `path` is relative to the collection.
    fn open_read(&self, path: &Path) -> Result<BoxRead>;

    /// Returns `true` if the file exists.
    fn exists(&self, path: &Path) -> bool;
}

/// Protocol for reading and writing files in the collection.
pub trait ReadWriter: Reader {
    /// Opens a file for writing, replacing any existing file at `path`.
    fn open_write(&self, path: &Path) -> Result<BoxWrite>;
}

/// Returns an error if `path` is not strictly relative. That is satisfying both:
/// * Has no prefix component.
/// * Has no root component.
fn check_fully_relative(path: &Path) -> Result<()> {
    use std::path::Component::{Prefix, RootDir};
    match path.components().next() {
        Some(Prefix(p)) => bail!("{:?} has a prefix {:?}", path, p),
        Some(RootDir) => bail!("{:?} is absolute", path),
        _ => Ok(()),
    }
}
