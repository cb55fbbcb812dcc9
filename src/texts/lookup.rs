use crate::texts::id::Identifier;
use std::io;
use std::path::{Path, PathBuf};
use tokio::fs;

/// Name of the fallback file, and also the fixed tail of the route.
pub const DEFAULT_FILE_NAME: &str = "file.txt";

pub enum Lookup {
    Found { path: PathBuf, contents: Vec<u8> },
    Fallback { path: PathBuf, contents: Vec<u8> },
    Absent,
}

/// Attempt the reads directly and classify the results, instead of probing
/// for existence first. There is no window for the file to disappear between
/// a check and a read, and any failure other than absence surfaces as `Err`.
pub async fn resolve(dir: &Path, id: &Identifier<'_>) -> Result<Lookup, io::Error> {
    let path = dir.join(format!("{}.txt", id.as_str()));
    match fs::read(&path).await {
        Ok(contents) => return Ok(Lookup::Found { path, contents }),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {}
        Err(e) => return Err(e),
    }

    let path = dir.join(DEFAULT_FILE_NAME);
    match fs::read(&path).await {
        Ok(contents) => Ok(Lookup::Fallback { path, contents }),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Lookup::Absent),
        Err(e) => Err(e),
    }
}
