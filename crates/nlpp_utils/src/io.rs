//! Helpers for opening the files the preprocessor reads and writes
//!
//! A path of `-` stands for standard input or standard output, so the
//! preprocessor can be used inside a pipeline.

use std::{
    ffi::OsString,
    fs,
    io::{self, Read, Write},
    path::{Path, PathBuf},
};

/// Whether `path` is the `-` placeholder for a standard stream
#[must_use]
pub fn is_std_stream(path: &Path) -> bool {
    path.as_os_str() == "-"
}

/// Opens the input file and returns its display name and a reader
///
/// If the path is "-", it reads from standard input and the display name is
/// `<stdin>`. Otherwise the display name is the path as given.
///
/// # Errors
///
/// If the file cannot be opened, an error is returned.
pub fn open_input(path: &Path) -> Result<(String, Box<dyn Read>), io::Error> {
    if is_std_stream(path) {
        Ok(("<stdin>".to_string(), Box::new(io::stdin())))
    } else {
        let file = fs::File::open(path)?;
        Ok((path.display().to_string(), Box::new(file)))
    }
}

/// Opens the output file and returns a writer
///
/// If the path is "-", it writes to standard output. Otherwise the file is
/// created, or truncated if it already exists.
///
/// # Errors
///
/// If the file cannot be opened or created, an error is returned.
pub fn open_output(path: &Path) -> Result<Box<dyn Write>, io::Error> {
    Ok(if is_std_stream(path) {
        Box::new(io::stdout())
    } else {
        Box::new(
            fs::OpenOptions::new()
                .write(true)
                .truncate(true)
                .create(true)
                .open(path)?,
        )
    })
}

/// Derive the output path used when none is given: `<stem>.post<.ext>`
///
/// The result sits next to the input, so `model/ants.nlogo` becomes
/// `model/ants.post.nlogo`. An input without an extension gets a bare `.post`
/// suffix. Standard input maps to standard output.
#[must_use]
pub fn default_output_path(input: &Path) -> PathBuf {
    if is_std_stream(input) {
        return input.to_path_buf();
    }

    let mut file_name = input.file_stem().map(OsString::from).unwrap_or_default();
    file_name.push(".post");
    if let Some(extension) = input.extension() {
        file_name.push(".");
        file_name.push(extension);
    }

    input.with_file_name(file_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_input_reads_from_stdin_for_dash() {
        let (name, _reader) = open_input(Path::new("-")).expect("should succeed");
        assert_eq!(name, "<stdin>");
    }

    #[test]
    fn open_input_reads_from_file() {
        let dir = tempfile::tempdir().expect("should create temp dir");
        let path = dir.path().join("input.nlogo");
        fs::write(&path, "to setup\nend\n").expect("should write test file");

        let (name, mut reader) = open_input(&path).expect("should succeed");
        assert!(name.ends_with("input.nlogo"));

        let mut content = String::new();
        reader.read_to_string(&mut content).expect("should read");
        assert_eq!(content, "to setup\nend\n");
    }

    #[test]
    fn open_input_fails_for_missing_file() {
        let dir = tempfile::tempdir().expect("should create temp dir");
        assert!(open_input(&dir.path().join("missing.nlogo")).is_err());
    }

    #[test]
    fn open_output_truncates_existing_file() {
        let dir = tempfile::tempdir().expect("should create temp dir");
        let path = dir.path().join("output.nlogo");
        fs::write(&path, "old content that is longer").expect("should write");

        let mut writer = open_output(&path).expect("should succeed");
        writer.write_all(b"new").expect("should write");
        drop(writer);

        assert_eq!(fs::read_to_string(&path).expect("should read"), "new");
    }

    #[test]
    fn default_output_path_inserts_post_before_extension() {
        assert_eq!(
            default_output_path(Path::new("models/ants.nlogo")),
            PathBuf::from("models/ants.post.nlogo")
        );
    }

    #[test]
    fn default_output_path_without_extension() {
        assert_eq!(
            default_output_path(Path::new("Makefile")),
            PathBuf::from("Makefile.post")
        );
    }

    #[test]
    fn default_output_path_uses_last_extension_only() {
        assert_eq!(
            default_output_path(Path::new("a.tar.gz")),
            PathBuf::from("a.tar.post.gz")
        );
    }

    #[test]
    fn default_output_path_keeps_stdin_on_stdout() {
        assert_eq!(default_output_path(Path::new("-")), PathBuf::from("-"));
    }
}
