use std::fs;
use std::io::{self, Read};
use std::path::Path;

/// Read a description from inline text, a file, or stdin (`-`).
///
/// Inline text wins over a path when both are given.
pub fn load_description(
    description_path: Option<&Path>,
    description_text: Option<&str>,
) -> Result<Vec<u8>, String> {
    if let Some(text) = description_text {
        return Ok(text.as_bytes().to_vec());
    }

    if let Some(path) = description_path {
        if is_stdin(path) {
            return load_stdin();
        }
        return load_file(path);
    }

    Err("description is required: use positional argument or -d/--description".to_string())
}

pub fn is_stdin(path: &Path) -> bool {
    path.as_os_str() == "-"
}

fn load_stdin() -> Result<Vec<u8>, String> {
    let mut buf = Vec::new();
    io::stdin()
        .read_to_end(&mut buf)
        .map_err(|e| format!("failed to read stdin: {}", e))?;
    Ok(buf)
}

fn load_file(path: &Path) -> Result<Vec<u8>, String> {
    fs::read(path).map_err(|e| format!("failed to read '{}': {}", path.display(), e))
}
