use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// A path that could not be searched.
#[derive(Debug, Error)]
pub enum PathError {
    #[error("{}: Is a directory", .0.display())]
    IsADirectory(PathBuf),

    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Files found under the command-line paths, plus the paths that were
/// skipped and why.
#[derive(Debug, Default)]
pub struct Walk {
    pub files: Vec<PathBuf>,
    pub errors: Vec<PathError>,
}

/// Expands command-line paths into the files to search. Directories are
/// only entered when `recursive` is set, and their files come back sorted.
/// Anything else is passed through as is; missing files are reported when
/// they fail to open.
pub fn collect_files(roots: &[PathBuf], recursive: bool) -> Walk {
    let mut walk = Walk::default();
    for root in roots {
        if !root.is_dir() {
            walk.files.push(root.clone());
        } else if recursive {
            let first = walk.files.len();
            walk.descend(root);
            walk.files[first..].sort();
        } else {
            walk.errors.push(PathError::IsADirectory(root.clone()));
        }
    }
    walk
}

impl Walk {
    fn descend(&mut self, dir: &Path) {
        let entries = match fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(source) => {
                self.errors.push(PathError::Io {
                    path: dir.to_path_buf(),
                    source,
                });
                return;
            }
        };
        for entry in entries {
            let path = match entry {
                Ok(entry) => entry.path(),
                Err(source) => {
                    self.errors.push(PathError::Io {
                        path: dir.to_path_buf(),
                        source,
                    });
                    continue;
                }
            };
            if path.is_dir() {
                self.descend(&path);
            } else if path.is_file() {
                self.files.push(path);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;

    use super::{PathError, collect_files};

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "thompson-grep-{}-{name}",
            std::process::id()
        ));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(dir.join("nested")).unwrap();
        fs::write(dir.join("b.txt"), "b\n").unwrap();
        fs::write(dir.join("a.txt"), "a\n").unwrap();
        fs::write(dir.join("nested").join("c.txt"), "c\n").unwrap();
        dir
    }

    #[test]
    fn walks_directories_only_when_recursive() {
        let dir = scratch_dir("walk");

        let walk = collect_files(&[dir.clone()], true);
        assert!(walk.errors.is_empty());
        assert_eq!(
            walk.files,
            vec![
                dir.join("a.txt"),
                dir.join("b.txt"),
                dir.join("nested").join("c.txt"),
            ]
        );

        let walk = collect_files(&[dir.join("a.txt")], false);
        assert_eq!(walk.files, vec![dir.join("a.txt")]);
        assert!(walk.errors.is_empty());

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn reports_directory_without_recursion() {
        let dir = scratch_dir("no-recursion");

        let walk = collect_files(&[dir.clone(), dir.join("a.txt")], false);
        assert_eq!(walk.files, vec![dir.join("a.txt")]);
        assert_eq!(walk.errors.len(), 1);
        assert!(matches!(&walk.errors[0], PathError::IsADirectory(p) if *p == dir));
        assert_eq!(
            walk.errors[0].to_string(),
            format!("{}: Is a directory", dir.display())
        );

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn keeps_command_line_order_across_roots() {
        let dir = scratch_dir("order");

        let walk = collect_files(&[dir.join("nested"), dir.join("b.txt"), dir.join("a.txt")], true);
        assert_eq!(
            walk.files,
            vec![
                dir.join("nested").join("c.txt"),
                dir.join("b.txt"),
                dir.join("a.txt"),
            ]
        );

        fs::remove_dir_all(&dir).unwrap();
    }
}
