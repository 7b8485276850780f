use std::fs;
use std::io;
use std::path::Path;

/// Checks if a file exists at the given path
pub fn file_exists(path: impl AsRef<Path>) -> bool {
    path.as_ref().is_file()
}

/// Reads the whole file as UTF-8 text
pub fn read_file(path: &Path) -> io::Result<String> {
    fs::read_to_string(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file() {
        let path = Path::new("definitely/not/here.json");
        assert!(!file_exists(path));
        assert_eq!(
            read_file(path).unwrap_err().kind(),
            io::ErrorKind::NotFound
        );
    }
}
