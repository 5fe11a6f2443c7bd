use crate::error::Result;
use crate::loader::Loader;
use crate::tac;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

/// Loads programs stored as a YAML list of `{ op, arg1, arg2, result }` maps.
pub struct YamlLoader {
    file_path: PathBuf,
}

impl YamlLoader {
    pub fn new(file_path: &Path) -> Self {
        Self {
            file_path: file_path.to_owned(),
        }
    }
}

impl Loader for YamlLoader {
    fn load_program(&self) -> Result<tac::Program> {
        let file = File::open(&self.file_path).map_err(|_| {
            format!(
                "Program file '{}' could not be loaded",
                self.file_path.display()
            )
        })?;
        let reader = BufReader::new(file);
        Ok(serde_yaml::from_reader(reader)?)
    }
}
