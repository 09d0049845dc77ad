use std::{
    fs::File,
    io::{self, BufReader, BufWriter, Read, Write},
    path::Path,
};

use mathgrid_game::Session;

use crate::error::CliError;

/// Loads a session saved by [`save`].
///
/// A missing file is not an error and yields `None`.
pub fn load(path: &Path) -> Result<Option<Session>, CliError> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(err) => return Err(err.into()),
    };
    let session = read(BufReader::new(file))?;
    log::debug!("loaded session from {}", path.display());
    Ok(Some(session))
}

/// Saves a session as JSON, replacing the file.
pub fn save(path: &Path, session: &Session) -> Result<(), CliError> {
    let mut writer = BufWriter::new(File::create(path)?);
    write(&mut writer, session)?;
    writer.flush()?;
    log::debug!("saved session to {}", path.display());
    Ok(())
}

fn read<R: Read>(reader: R) -> Result<Session, CliError> {
    Ok(serde_json::from_reader(reader)?)
}

fn write<W: Write>(mut writer: W, session: &Session) -> Result<(), CliError> {
    serde_json::to_writer_pretty(&mut writer, session)?;
    writeln!(writer)?;
    Ok(())
}
