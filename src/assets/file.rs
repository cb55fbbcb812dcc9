use std::io;
use std::path::{Path, PathBuf};
use tokio::fs::File;

pub const INDEX_FILE: &str = "index.html";

pub struct Found {
    pub path: PathBuf,
    pub file: File,
    pub len: u64,
}

/// Open the asset at `dir/rel`, serving a directory's `index.html` in place
/// of the directory itself. `Ok(None)` means nothing servable exists there;
/// `Err` is a genuine I/O fault.
pub async fn open(dir: &Path, rel: &Path) -> Result<Option<Found>, io::Error> {
    let path = dir.join(rel);
    let file = match File::open(&path).await {
        Ok(file) => file,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e),
    };
    let meta = file.metadata().await?;
    if !meta.is_dir() {
        return Ok(Some(Found {
            path,
            file,
            len: meta.len(),
        }));
    }

    // One level of index lookup; an index that is itself a directory is not
    // servable.
    let index = path.join(INDEX_FILE);
    let file = match File::open(&index).await {
        Ok(file) => file,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e),
    };
    let meta = file.metadata().await?;
    if meta.is_dir() {
        return Ok(None);
    }
    Ok(Some(Found {
        path: index,
        file,
        len: meta.len(),
    }))
}
