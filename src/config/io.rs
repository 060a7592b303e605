//! Project document I/O: JSON or YAML in, formatted JSON out.

use crate::config::document::{self, Document};
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Document I/O errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON write error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("syntax error in '{label}': {source}")]
    Syntax {
        label: String,
        source: serde_yaml::Error,
    },
    #[error("there was an error in the data file '{label}'")]
    DataFile {
        label: String,
        source: Box<ConfigError>,
    },
}

impl ConfigError {
    /// The underlying failure with any `DataFile` context peeled off.
    ///
    /// `load` wraps errors to name the file they came from; callers that
    /// need to classify the original failure start here.
    pub fn root(&self) -> &ConfigError {
        match self {
            ConfigError::DataFile { source, .. } => source.root(),
            other => other,
        }
    }
}

/// Serialization options passed through to the JSON writer.
#[derive(Debug, Clone)]
pub struct DumpOptions {
    /// Spaces per indentation level.
    pub indent: usize,
}

impl Default for DumpOptions {
    fn default() -> Self {
        Self { indent: 4 }
    }
}

/// The file-opening primitive used by [`load_with`].
///
/// Injectable so tests can substitute an in-memory source for the real
/// filesystem.
pub trait FileOpener {
    /// Reader produced by [`open`](FileOpener::open).
    type Reader: Read;

    /// Open the file at `path` for reading.
    fn open(&self, path: &Path) -> std::io::Result<Self::Reader>;
}

/// The real filesystem opener.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsOpener;

impl FileOpener for FsOpener {
    type Reader = File;

    fn open(&self, path: &Path) -> std::io::Result<File> {
        File::open(path)
    }
}

/// Serialize a document to a formatted JSON string.
///
/// Output is deterministic: 4-space indentation and keys sorted
/// lexicographically, so equal documents dump byte-identically.
pub fn dumps(data: &Document) -> String {
    dumps_with(data, &DumpOptions::default())
}

/// [`dumps`] with explicit serialization options.
pub fn dumps_with(data: &Document, options: &DumpOptions) -> String {
    let mut buf = Vec::new();
    write_json(data, &mut buf, options).expect("in-memory JSON write cannot fail");
    String::from_utf8(buf).expect("JSON output is UTF-8")
}

/// Parse a JSON or YAML document from raw text.
///
/// YAML is a superset of JSON, so both formats are accepted uniformly.
/// `label` names the input in syntax-error messages (a filename, or empty
/// when the source has no name).
///
/// # Panics
///
/// Panics if the parsed document violates the scalar type contract; see
/// [`crate::config::normalize`].
pub fn loads(text: &str, label: &str) -> Result<Document, ConfigError> {
    let parsed: serde_yaml::Value =
        serde_yaml::from_str(text).map_err(|source| ConfigError::Syntax {
            label: label.to_string(),
            source,
        })?;
    Ok(document::normalize(parsed))
}

/// Load a document from an already-open reader.
///
/// The reader is consumed to the end. The caller keeps ownership of the
/// reader and is responsible for closing it.
pub fn load_from_reader<R: Read>(reader: R, label: &str) -> Result<Document, ConfigError> {
    read_and_parse(reader, label).map_err(|source| ConfigError::DataFile {
        label: label.to_string(),
        source: Box::new(source),
    })
}

/// Load a document from a file path.
///
/// Accepts JSON or YAML content. The path is the diagnostic label: any
/// failure is wrapped with that context, with the original error kind still
/// reachable through [`ConfigError::root`]. The file is closed on every
/// exit path, success and failure alike.
pub fn load(path: impl AsRef<Path>) -> Result<Document, ConfigError> {
    load_with(&FsOpener, path)
}

/// [`load`] with an explicit file-opening primitive.
pub fn load_with<O: FileOpener>(
    opener: &O,
    path: impl AsRef<Path>,
) -> Result<Document, ConfigError> {
    let path = path.as_ref();
    let label = path.display().to_string();
    open_and_parse(opener, path, &label).map_err(|source| ConfigError::DataFile {
        label,
        source: Box::new(source),
    })
}

/// Write a document as formatted JSON to a file path.
///
/// For an absolute path whose parent directory does not exist, the parent
/// (and any missing ancestors) is created first; relative paths never
/// trigger directory creation. Existing content is truncated and the file
/// is closed on every exit path.
pub fn dump(data: &Document, path: impl AsRef<Path>) -> Result<(), ConfigError> {
    dump_with(data, path, &DumpOptions::default())
}

/// [`dump`] with explicit serialization options.
pub fn dump_with(
    data: &Document,
    path: impl AsRef<Path>,
    options: &DumpOptions,
) -> Result<(), ConfigError> {
    let path = path.as_ref();
    if path.is_absolute()
        && let Some(parent) = path.parent()
        && !parent.exists()
    {
        fs::create_dir_all(parent)?;
    }
    let file = File::create(path)?;
    dump_to_writer(data, file, options)
}

/// Write a document as formatted JSON to an already-open writer.
///
/// The caller keeps the writer.
pub fn dump_to_writer<W: Write>(
    data: &Document,
    writer: W,
    options: &DumpOptions,
) -> Result<(), ConfigError> {
    write_json(data, writer, options)
}

/// Get the list of default project file locations.
/// Search order:
/// 1. ./project.json
/// 2. ./project.yml
/// 3. ~/.config/ledproj/project.json
pub fn default_project_paths() -> Vec<Option<PathBuf>> {
    let cwd = std::env::current_dir().ok();
    vec![
        cwd.as_ref().map(|p| p.join("project.json")),
        cwd.as_ref().map(|p| p.join("project.yml")),
        dirs::config_dir().map(|p| p.join("ledproj").join("project.json")),
    ]
}

/// Load the first project file found in the default locations.
///
/// Returns `Ok(None)` when none of the locations exist.
pub fn load_default() -> Result<Option<Document>, ConfigError> {
    for path in default_project_paths().into_iter().flatten() {
        if path.exists() {
            return load(path).map(Some);
        }
    }
    Ok(None)
}

/// Generate blank example project content.
pub fn example_project() -> &'static str {
    r#"{
    "driver": {
        "typename": "simpixel",
        "num": 64
    },
    "shape": [8, 8],
    "animation": {
        "typename": "sequence",
        "length": 10
    },
    "run": {
        "fps": 30
    }
}
"#
}

fn open_and_parse<O: FileOpener>(
    opener: &O,
    path: &Path,
    label: &str,
) -> Result<Document, ConfigError> {
    let file = opener.open(path)?;
    read_and_parse(file, label)
}

fn read_and_parse<R: Read>(mut reader: R, label: &str) -> Result<Document, ConfigError> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    loads(&text, label)
}

fn write_json<W: Write>(
    data: &Document,
    writer: W,
    options: &DumpOptions,
) -> Result<(), ConfigError> {
    let indent = " ".repeat(options.indent);
    let formatter = PrettyFormatter::with_indent(indent.as_bytes());
    let mut ser = Serializer::with_formatter(writer, formatter);
    data.serialize(&mut ser)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::HashMap;
    use std::io::Cursor;

    /// In-memory opener so load tests never touch the filesystem.
    struct MemOpener(HashMap<PathBuf, String>);

    impl FileOpener for MemOpener {
        type Reader = Cursor<Vec<u8>>;

        fn open(&self, path: &Path) -> std::io::Result<Self::Reader> {
            self.0
                .get(path)
                .map(|text| Cursor::new(text.clone().into_bytes()))
                .ok_or_else(|| std::io::Error::new(std::io::ErrorKind::NotFound, "no such entry"))
        }
    }

    #[test]
    fn test_dumps_formatting() {
        let doc = json!({"b": 1, "a": {"y": true, "x": "s"}});
        let expected = "{\n    \"a\": {\n        \"x\": \"s\",\n        \"y\": true\n    },\n    \"b\": 1\n}";
        assert_eq!(dumps(&doc), expected);
    }

    #[test]
    fn test_dumps_deterministic() {
        let mut first = serde_json::Map::new();
        first.insert("zeta".into(), json!(1));
        first.insert("alpha".into(), json!(2));

        let mut second = serde_json::Map::new();
        second.insert("alpha".into(), json!(2));
        second.insert("zeta".into(), json!(1));

        assert_eq!(
            dumps(&Document::Object(first)),
            dumps(&Document::Object(second))
        );
    }

    #[test]
    fn test_dumps_with_indent() {
        let doc = json!({"a": 1});
        let options = DumpOptions { indent: 2 };
        assert_eq!(dumps_with(&doc, &options), "{\n  \"a\": 1\n}");
    }

    #[test]
    fn test_loads_json() {
        let doc = loads("{\"num\": 64, \"on\": true}", "").unwrap();
        assert_eq!(doc, json!({"num": 64, "on": true}));
    }

    #[test]
    fn test_loads_yaml() {
        let doc = loads("driver:\n  num: 64\nshape:\n  - 8\n  - 8\n", "").unwrap();
        assert_eq!(doc, json!({"driver": {"num": 64}, "shape": [8, 8]}));
    }

    #[test]
    fn test_loads_syntax_error_carries_label() {
        let err = loads("driver: [8, 8", "project.yml").unwrap_err();
        assert!(matches!(err, ConfigError::Syntax { .. }));
        assert!(err.to_string().contains("project.yml"));
    }

    #[test]
    fn test_round_trip() {
        let doc = json!({
            "animation": {"typename": "sequence", "length": 10},
            "brightness": 0.5,
            "on": false,
            "shape": [8, 8]
        });
        assert_eq!(loads(&dumps(&doc), "").unwrap(), doc);
    }

    #[test]
    fn test_round_trip_stringifies_keys() {
        let doc = loads("8: eight\n", "").unwrap();
        assert_eq!(loads(&dumps(&doc), "").unwrap(), json!({"8": "eight"}));
    }

    #[test]
    fn test_load_with_memory_opener() {
        let path = PathBuf::from("mem/project.yml");
        let opener = MemOpener(HashMap::from([(path.clone(), "num: 12\n".to_string())]));
        let doc = load_with(&opener, &path).unwrap();
        assert_eq!(doc, json!({"num": 12}));
    }

    #[test]
    fn test_load_missing_file() {
        let err = load("/no/such/dir/project.json").unwrap_err();
        assert!(
            err.to_string()
                .starts_with("there was an error in the data file")
        );
        assert!(err.to_string().contains("/no/such/dir/project.json"));
        assert!(matches!(err.root(), ConfigError::Io(_)));
    }

    #[test]
    fn test_load_parse_failure_keeps_original_kind() {
        let path = PathBuf::from("mem/broken.yml");
        let opener = MemOpener(HashMap::from([(path.clone(), "a: [1,".to_string())]));
        let err = load_with(&opener, &path).unwrap_err();
        assert!(
            err.to_string()
                .starts_with("there was an error in the data file")
        );
        assert!(matches!(err.root(), ConfigError::Syntax { .. }));
    }

    #[test]
    fn test_load_from_reader_wraps_with_label() {
        let err = load_from_reader(Cursor::new("a: [1,"), "stream").unwrap_err();
        assert!(err.to_string().contains("stream"));
        assert!(matches!(err.root(), ConfigError::Syntax { .. }));
    }

    #[test]
    fn test_dump_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("deeper").join("out.json");
        let doc = json!({"num": 64});

        dump(&doc, &path).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), dumps(&doc));
    }

    #[test]
    fn test_dump_truncates_existing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.json");
        std::fs::write(&path, "x".repeat(1024)).unwrap();

        let doc = json!({"num": 64});
        dump(&doc, &path).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), dumps(&doc));
    }

    #[test]
    fn test_dump_to_writer() {
        let doc = json!({"num": 64});
        let mut buf = Vec::new();
        dump_to_writer(&doc, &mut buf, &DumpOptions::default()).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), dumps(&doc));
    }

    #[test]
    fn test_example_project_parses() {
        let doc = loads(example_project(), "").unwrap();
        assert!(doc.get("driver").is_some());
        assert!(doc.get("animation").is_some());
    }
}
