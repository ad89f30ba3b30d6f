//! Implementation of `tq init`.

use std::{
    fs::OpenOptions,
    io::{self, Write},
    path::{Path, PathBuf},
    process::ExitCode,
};

use tq_config::{CONFIG_FILENAME, global_config_path, template};
use tq_highlight::Highlighter;

use crate::cli::{
    args::InitCommand,
    context::CommandContext,
    output::{header, success},
};

/// Writes the commented example `.tq.toml`.
pub fn run(ctx: &CommandContext, cmd: InitCommand) -> ExitCode {
    let Some(path) = target_path(&ctx.cwd, cmd.global, global_config_path()) else {
        eprintln!("error: could not determine home directory");
        return ExitCode::FAILURE;
    };

    let contents = template();
    match write_config(&path, &contents, cmd.force) {
        Ok(()) => {}
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
            eprintln!("error: configuration file already exists: {}", path.display());
            eprintln!("use --force to overwrite");
            return ExitCode::FAILURE;
        }
        Err(e) => {
            eprintln!("error: failed to write {}: {e}", path.display());
            return ExitCode::FAILURE;
        }
    }

    println!("{}", success(&format!("Created {}", path.display())));
    println!();
    println!("{}", header("Configuration written:"));
    print!("{}", Highlighter::new().highlight_toml(&contents));
    ExitCode::SUCCESS
}

/// Picks where the new config goes.
///
/// Running in the home directory writes the global file even without
/// `--global`. `None` means the global file was wanted but there is no home.
fn target_path(cwd: &Path, global: bool, global_path: Option<PathBuf>) -> Option<PathBuf> {
    let in_home = global_path
        .as_deref()
        .and_then(Path::parent)
        .is_some_and(|home| home == cwd);

    if global || in_home {
        global_path
    } else {
        Some(cwd.join(CONFIG_FILENAME))
    }
}

/// Writes `contents` to `path`, refusing to clobber unless `force` is set.
fn write_config(path: &Path, contents: &str, force: bool) -> io::Result<()> {
    let mut options = OpenOptions::new();
    options.write(true);
    if force {
        options.create(true).truncate(true);
    } else {
        options.create_new(true);
    }
    options.open(path)?.write_all(contents.as_bytes())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    #[test]
    fn local_target_is_in_cwd() {
        let home = Some(PathBuf::from("/home/ann/.tq.toml"));
        let target = target_path(Path::new("/work/notes"), false, home);
        assert_eq!(target, Some(PathBuf::from("/work/notes/.tq.toml")));
    }

    #[test]
    fn global_flag_targets_home() {
        let home = Some(PathBuf::from("/home/ann/.tq.toml"));
        let target = target_path(Path::new("/work"), true, home.clone());
        assert_eq!(target, home);
    }

    #[test]
    fn home_directory_targets_global_file() {
        let home = Some(PathBuf::from("/home/ann/.tq.toml"));
        let target = target_path(Path::new("/home/ann"), false, home.clone());
        assert_eq!(target, home);
    }

    #[test]
    fn global_without_home_has_no_target() {
        assert_eq!(target_path(Path::new("/work"), true, None), None);
        assert_eq!(
            target_path(Path::new("/work"), false, None),
            Some(PathBuf::from("/work/.tq.toml"))
        );
    }

    #[test]
    fn existing_file_needs_force() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        fs::write(&path, "root = true\n").unwrap();

        let err = write_config(&path, "new", false).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::AlreadyExists);
        assert_eq!(fs::read_to_string(&path).unwrap(), "root = true\n");

        write_config(&path, "new", true).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "new");
    }
}
