use std::{
    borrow::Cow,
    io,
    path::{Path, PathBuf},
};

use serde::de::DeserializeOwned;
use thiserror::Error;

/// Resources compiled into the binary, looked up by file name.
const BUNDLED: &[(&str, &str)] = &[
    ("clique-genesis-template.json", include_str!("../resources/clique-genesis-template.json")),
];

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("resource `{0}` not found")]
    NotFound(String),
    #[error("unable to read resource `{name}`: {source}")]
    Read {
        name: String,
        #[source]
        source: io::Error,
    },
    #[error("resource `{name}` does not have the expected shape: {source}")]
    Parse {
        name: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

///
/// Turns a named resource into a typed value.
///
/// The text format lives entirely behind this trait, callers only name the resource and the
/// shape they want back.
///
pub trait ResourceLoader {
    fn load<T: DeserializeOwned>(&self, name: &str) -> Result<T, LoadError>;
}

///
/// [ResourceLoader] for JSON documents.
///
/// Names are resolved against the bundled resources first and then against the file system,
/// relative to `root` when one is set.
///
#[derive(Clone, Debug, Default)]
pub struct JsonLoader {
    root: Option<PathBuf>,
}

impl JsonLoader {
    pub fn new() -> Self {
        Self { root: None }
    }

    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self {
            root: Some(root.into()),
        }
    }

    pub fn bundled(name: &str) -> Option<&'static str> {
        BUNDLED
            .iter()
            .find(|(bundled, _)| *bundled == name)
            .map(|(_, text)| *text)
    }

    ///
    /// Loads a file, bypassing the bundled resources.
    ///
    /// Meant for user supplied documents such as the init file, which must never resolve to a
    /// bundled template of the same name.
    ///
    pub fn load_file<T: DeserializeOwned>(&self, path: &Path) -> Result<T, LoadError> {
        let text = self.read(path)?;
        parse(&path.display().to_string(), &text)
    }

    fn source(&self, name: &str) -> Result<Cow<'static, str>, LoadError> {
        if let Some(text) = Self::bundled(name) {
            return Ok(Cow::Borrowed(text));
        }

        self.read(Path::new(name)).map(Cow::Owned)
    }

    fn read(&self, path: &Path) -> Result<String, LoadError> {
        let name = path.display().to_string();
        let path = match self.root {
            Some(ref root) => root.join(path),
            None => path.to_path_buf(),
        };

        match std::fs::read_to_string(&path) {
            Ok(text) => Ok(text),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Err(LoadError::NotFound(name)),
            Err(e) => Err(LoadError::Read { name, source: e }),
        }
    }
}

fn parse<T: DeserializeOwned>(name: &str, text: &str) -> Result<T, LoadError> {
    serde_json::from_str(text).map_err(|e| LoadError::Parse {
        name: name.into(),
        source: Box::new(e),
    })
}

impl ResourceLoader for JsonLoader {
    fn load<T: DeserializeOwned>(&self, name: &str) -> Result<T, LoadError> {
        let text = self.source(name)?;
        parse(name, &text)
    }
}
