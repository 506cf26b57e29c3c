mod loader;
mod model;

pub use loader::{ConfigLoader, FileConfigLoader, FileSystem, RealFileSystem};
pub use model::{CONFIG_FILE_NAME, Config, DEFAULT_BASE_REF, DEFAULT_LIMIT};

/// Load the configuration the way the command line asks for it.
///
/// # Errors
/// Returns an error if an explicit path is missing or any file is invalid.
pub fn load_config<L: ConfigLoader>(
    loader: &L,
    path: Option<&std::path::Path>,
    no_config: bool,
) -> crate::Result<Config> {
    if no_config {
        return Ok(Config::default());
    }
    match path {
        Some(path) => loader.load_from_path(path),
        None => loader.load(),
    }
}
