use crate::error::Result;
use crate::tac;
use std::ffi::OsStr;
use std::path::Path;

mod listing;
mod yaml;

pub use self::listing::{parse_listing, ListingLoader};
pub use self::yaml::YamlLoader;

pub trait Loader {
    /// Loads the TAC program.
    fn load_program(&self) -> Result<tac::Program>;
}

/// Creates the loader matching the extension of `file_path`.
///
/// `.yaml` and `.yml` files are read as YAML, everything else as a TAC listing.
pub fn loader_for(file_path: &Path) -> Box<dyn Loader> {
    match file_path.extension().and_then(OsStr::to_str) {
        Some("yaml") | Some("yml") => Box::new(YamlLoader::new(file_path)),
        _ => Box::new(ListingLoader::new(file_path)),
    }
}

pub fn load_program(file_path: &Path) -> Result<tac::Program> {
    loader_for(file_path).load_program()
}
