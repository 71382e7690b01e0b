use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Maze error; {0}")]
    Maze(#[from] mazecore::Error),
    #[error("IO error; {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid settings file; {0}")]
    SettingsParse(#[from] ron::error::SpannedError),
    #[error("Cannot serialize settings; {0}")]
    SettingsWrite(#[from] ron::Error),
    #[error("Logger error; {0}")]
    Logger(#[from] log::SetLoggerError),
    #[error("No preference directory on this platform")]
    NoConfigDir,
}
