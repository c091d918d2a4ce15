//! Reading class descriptions and writing rendered output.

use std::fs;
use std::io::Write;
use std::path::Path;

use serde::Deserialize;
use tracing::info;

use crate::core::ParsedClass;
use crate::error::PropmapError;

#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    Many(Vec<ParsedClass>),
    One(ParsedClass),
}

/// Read a class-description file: a JSON array of parsed classes, or a
/// single class object.
pub fn read_classes(path: &Path) -> Result<Vec<ParsedClass>, PropmapError> {
    let data = fs::read_to_string(path).map_err(|source| PropmapError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let parsed: OneOrMany =
        serde_json::from_str(&data).map_err(|source| PropmapError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    let classes = match parsed {
        OneOrMany::Many(classes) => classes,
        OneOrMany::One(class) => vec![class],
    };

    info!(path = %path.display(), classes = classes.len(), "read class description");
    Ok(classes)
}

/// Write rendered output to a file, creating parent directories as needed,
/// or to stdout when no path is given.
pub fn write_output(path: Option<&Path>, content: &str) -> Result<(), PropmapError> {
    match path {
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    fs::create_dir_all(parent).map_err(|source| PropmapError::Write {
                        path: path.to_path_buf(),
                        source,
                    })?;
                }
            }
            let mut file = fs::File::create(path).map_err(|source| PropmapError::Write {
                path: path.to_path_buf(),
                source,
            })?;
            file.write_all(content.as_bytes())
                .map_err(|source| PropmapError::Write {
                    path: path.to_path_buf(),
                    source,
                })?;
        }
        None => {
            println!("{content}");
        }
    }
    Ok(())
}
