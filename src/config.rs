use std::path::PathBuf;

pub const INPUT_FILE: &str = "input.json";
pub const OUTPUT_FILE: &str = "output.json";

/// Locations read and written by a batch run.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(INPUT_FILE),
            output_path: PathBuf::from(OUTPUT_FILE),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_working_directory_files() {
        let config = Config::default();
        assert_eq!(config.input_path, PathBuf::from("input.json"));
        assert_eq!(config.output_path, PathBuf::from("output.json"));
    }
}
