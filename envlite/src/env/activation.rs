//! Scoped overlay of the module and executable search paths.
//!
//! [`ProcessPaths`] models the two process-wide values the original
//! interpreter mutates (`sys.path` and `PATH`) as an explicit struct, so
//! activation is testable without touching real global state. A value built
//! with [`ProcessPaths::from_os`] additionally writes every change back to
//! the real `PATH` through the centralized setter in `config::loader`.

use std::path::PathBuf;

use crate::config::loader;

use super::environment::Environment;

/// Separator used when joining executable search path entries.
#[cfg(windows)]
pub const PATH_SEPARATOR: char = ';';
#[cfg(not(windows))]
pub const PATH_SEPARATOR: char = ':';

/// Process-wide search state: the interpreter module search path and the
/// OS executable search path.
#[derive(Debug, Clone)]
pub struct ProcessPaths {
    /// Ordered module search path entries (`sys.path` equivalent).
    pub module_path: Vec<PathBuf>,
    /// Executable search path, platform-separator-delimited (`PATH`).
    pub exec_path: String,
    sync_os_path: bool,
}

impl ProcessPaths {
    /// Purely in-memory search state. Guards over this value never touch
    /// the process environment.
    pub fn in_memory(module_path: Vec<PathBuf>, exec_path: impl Into<String>) -> Self {
        Self {
            module_path,
            exec_path: exec_path.into(),
            sync_os_path: false,
        }
    }

    /// Capture the real `PATH` as the executable search path. Guards over
    /// this value write every change back to the process environment.
    pub fn from_os(module_path: Vec<PathBuf>) -> Self {
        Self {
            module_path,
            exec_path: std::env::var("PATH").unwrap_or_default(),
            sync_os_path: true,
        }
    }

    fn sync(&self) {
        if self.sync_os_path {
            loader::set_env_var("PATH", &self.exec_path);
        }
    }
}

/// RAII guard over an activated environment.
///
/// Entry saves the prior search state and applies the overlay; drop restores
/// the saved state exactly, whether the scope exits normally or by unwind.
pub struct ActivationGuard<'p> {
    paths: &'p mut ProcessPaths,
    saved_module_path: Vec<PathBuf>,
    saved_exec_path: String,
}

impl<'p> ActivationGuard<'p> {
    pub(super) fn enter(env: &Environment, paths: &'p mut ProcessPaths) -> Self {
        let saved_module_path = paths.module_path.clone();
        let saved_exec_path = paths.exec_path.clone();

        let mut module_path = env.sys_path();
        module_path.extend(saved_module_path.iter().cloned());
        paths.module_path = module_path;
        paths.exec_path = format!(
            "{}{}{}",
            env.bin_path().display(),
            PATH_SEPARATOR,
            saved_exec_path
        );
        paths.sync();

        Self {
            paths,
            saved_module_path,
            saved_exec_path,
        }
    }

    /// The search state with the overlay applied.
    pub fn paths(&self) -> &ProcessPaths {
        self.paths
    }
}

impl Drop for ActivationGuard<'_> {
    fn drop(&mut self) {
        self.paths.module_path = std::mem::take(&mut self.saved_module_path);
        self.paths.exec_path = std::mem::take(&mut self.saved_exec_path);
        self.paths.sync();
    }
}
