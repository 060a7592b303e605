//! Configuration document loading and management.

mod document;
mod io;

pub use document::{Document, normalize};
pub use io::{
    ConfigError, DumpOptions, FileOpener, FsOpener, default_project_paths, dump, dump_to_writer,
    dump_with, dumps, dumps_with, example_project, load, load_default, load_from_reader, load_with,
    loads,
};
