//! Interactive configuration command (`--init`).

use crate::{
    libs::{config::Config, error::ReportError, messages::Message},
    msg_success,
};

/// Runs the setup wizard and saves the result to the configuration file.
pub fn cmd() -> Result<(), ReportError> {
    Config::init().and_then(|config| config.save()).map_err(ReportError::Config)?;

    msg_success!(Message::ConfigSaved);
    Ok(())
}
