use std::path::{Path, PathBuf};

/// Name of the natality file shipped alongside the program.
pub const DATA_FILE_NAME: &str = "Provisional_Natality_2025_CDC.csv";

pub const APP_TITLE: &str = "Provisional Natality Data Dashboard";
pub const APP_SUBTITLE: &str = "Birth Analysis by State and Gender";

pub const WINDOW_SIZE: [f32; 2] = [1280.0, 860.0];
pub const WINDOW_MIN_SIZE: [f32; 2] = [720.0, 480.0];

/// Height of the bar chart; the detail table takes the rest.
pub const CHART_HEIGHT: f32 = 360.0;

/// Locate the data file: working directory first, then next to the executable.
///
/// Falls back to the working-directory path so a missing file is reported
/// under the name the user is most likely to check.
pub fn data_file_path() -> PathBuf {
    let exe_dir = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf));
    resolve_data_file(Path::new("."), exe_dir.as_deref())
}

fn resolve_data_file(cwd: &Path, exe_dir: Option<&Path>) -> PathBuf {
    let in_cwd = cwd.join(DATA_FILE_NAME);
    if in_cwd.is_file() {
        return in_cwd;
    }
    if let Some(dir) = exe_dir {
        let beside_exe = dir.join(DATA_FILE_NAME);
        if beside_exe.is_file() {
            return beside_exe;
        }
    }
    in_cwd
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefers_working_directory() {
        let cwd = tempfile::tempdir().unwrap();
        let exe = tempfile::tempdir().unwrap();
        std::fs::write(cwd.path().join(DATA_FILE_NAME), "").unwrap();
        std::fs::write(exe.path().join(DATA_FILE_NAME), "").unwrap();

        let path = resolve_data_file(cwd.path(), Some(exe.path()));
        assert_eq!(path, cwd.path().join(DATA_FILE_NAME));
    }

    #[test]
    fn falls_back_to_executable_directory() {
        let cwd = tempfile::tempdir().unwrap();
        let exe = tempfile::tempdir().unwrap();
        std::fs::write(exe.path().join(DATA_FILE_NAME), "").unwrap();

        let path = resolve_data_file(cwd.path(), Some(exe.path()));
        assert_eq!(path, exe.path().join(DATA_FILE_NAME));
    }

    #[test]
    fn missing_everywhere_names_the_working_directory_path() {
        let cwd = tempfile::tempdir().unwrap();
        let path = resolve_data_file(cwd.path(), None);
        assert_eq!(path, cwd.path().join(DATA_FILE_NAME));
    }
}
