use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Resolves a series directory under the manifest root
///
/// File Location values in the study metadata table are relative paths
/// with a `./` (or Windows-manifest `.\`) prefix and either separator
/// style; the prefix is stripped and the remaining components are joined
/// under the root.
pub fn resolve_series_dir(manifest_root: &Path, file_location: &str) -> PathBuf {
    let trimmed = file_location
        .strip_prefix("./")
        .or_else(|| file_location.strip_prefix(".\\"))
        .unwrap_or(file_location);

    let mut dir = manifest_root.to_path_buf();
    for part in trimmed.split(['/', '\\']) {
        if !part.is_empty() && part != "." {
            dir.push(part);
        }
    }
    dir
}

/// Selects the source DICOM file for a series directory
///
/// The rule is deliberate rather than directory-order dependent: entries
/// are sorted by name and the first regular file recognized as DICOM
/// (by extension or header) wins. Returns `Ok(None)` if the directory
/// holds no recognizable DICOM file.
///
/// # Errors
///
/// Propagates the error if the directory cannot be listed.
pub fn select_series_file(dir: &Path) -> io::Result<Option<PathBuf>> {
    let mut entries = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() {
            entries.push(path);
        }
    }
    entries.sort();

    Ok(entries.into_iter().find(|path| is_dicom_file(path)))
}

/// Checks whether a file looks like DICOM
///
/// Accepts `.dcm`/`.dicom` extensions (case-insensitive); files without
/// an extension are probed for the standard 128-byte preamble followed
/// by the "DICM" magic string.
fn is_dicom_file(path: &Path) -> bool {
    if let Some(ext) = path.extension() {
        return ext.eq_ignore_ascii_case("dcm") || ext.eq_ignore_ascii_case("dicom");
    }

    use std::io::Read;

    let mut file = match fs::File::open(path) {
        Ok(file) => file,
        Err(_) => return false,
    };

    let mut buffer = [0u8; 132];
    match file.read(&mut buffer) {
        Ok(n) if n >= 132 => &buffer[128..132] == b"DICM",
        _ => false,
    }
}
