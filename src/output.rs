use std::{
    fs::{self, OpenOptions},
    io::{self, Write},
    path::Path,
};

use log::Level;

use crate::logger::Logger;

///
/// Writes `contents` to a file that must not exist yet.
///
/// If the data cannot be written completely the new file is removed again, so the path either
/// does not exist or holds the full contents.
///
pub(crate) fn write_new(path: &Path, contents: &[u8], logger: &Logger) -> io::Result<()> {
    let mut file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)?;

    if let Err(e) = file.write_all(contents).and_then(|_| file.sync_all()) {
        drop(file);
        if let Err(rm) = fs::remove_file(path) {
            emit!(logger, Level::Warn, "unable to remove incomplete file {}: {}", path.display(), rm);
        }
        return Err(e);
    }

    Ok(())
}
