//! Environment descriptor: derives module search path entries and the
//! binary directory from an environment root and interpreter version.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::activation::{ActivationGuard, ProcessPaths};

/// An installed Python environment, identified by its root directory and
/// interpreter version.
///
/// Construction never fails: a version with fewer than two components is
/// accepted with a warning, and [`Environment::sys_path`] degrades to an
/// empty list for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Environment {
    env_path: PathBuf,
    version_info: Vec<u32>,
}

impl Environment {
    pub fn new(env_path: impl Into<PathBuf>, version_info: impl Into<Vec<u32>>) -> Self {
        let version_info = version_info.into();
        if version_info.len() < 2 {
            warn!(
                ?version_info,
                "invalid version info: expected at least (major, minor)"
            );
        }

        Self {
            env_path: env_path.into(),
            version_info,
        }
    }

    /// Build a descriptor from the interpreter binary rather than the env
    /// root, assuming the conventional `<root>/bin/<executable>` layout.
    pub fn from_executable(
        executable: impl AsRef<Path>,
        version_info: impl Into<Vec<u32>>,
    ) -> Self {
        let env_path = executable
            .as_ref()
            .parent()
            .and_then(Path::parent)
            .unwrap_or_else(|| Path::new(""))
            .to_path_buf();
        Self::new(env_path, version_info)
    }

    pub fn env_path(&self) -> &Path {
        &self.env_path
    }

    pub fn version_info(&self) -> &[u32] {
        &self.version_info
    }

    /// Module search path entries for this environment, recomputed on every
    /// call. Empty when the version info is unusable (fewer than two
    /// components).
    pub fn sys_path(&self) -> Vec<PathBuf> {
        let (major, minor) = match (self.version_info.first(), self.version_info.get(1)) {
            (Some(major), Some(minor)) => (major, minor),
            _ => return Vec::new(),
        };

        let lib_path = self
            .env_path
            .join("lib")
            .join(format!("python{major}.{minor}"));
        let mut zip_path = lib_path.clone().into_os_string();
        zip_path.push(".zip");

        vec![
            PathBuf::from(zip_path),
            lib_path.clone(),
            lib_path.join("lib-dynload"),
            lib_path.join("site-packages"),
        ]
    }

    /// Binary directory of the environment. Valid regardless of version
    /// info.
    pub fn bin_path(&self) -> PathBuf {
        self.env_path.join("bin")
    }

    /// Overlay this environment onto `paths` for the lifetime of the
    /// returned guard. The exclusive borrow makes overlapping activations
    /// of the same `ProcessPaths` a compile error.
    pub fn activate<'p>(&self, paths: &'p mut ProcessPaths) -> ActivationGuard<'p> {
        ActivationGuard::enter(self, paths)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sys_path_derives_four_entries_in_order() {
        let env = Environment::new("/opt/env", [3u32, 9]);
        assert_eq!(
            env.sys_path(),
            vec![
                PathBuf::from("/opt/env/lib/python3.9.zip"),
                PathBuf::from("/opt/env/lib/python3.9"),
                PathBuf::from("/opt/env/lib/python3.9/lib-dynload"),
                PathBuf::from("/opt/env/lib/python3.9/site-packages"),
            ]
        );
    }

    #[test]
    fn sys_path_uses_only_major_and_minor() {
        let env = Environment::new("/opt/env", [3u32, 11, 4]);
        assert_eq!(
            env.sys_path()[1],
            PathBuf::from("/opt/env/lib/python3.11")
        );
    }

    #[test]
    fn short_version_degrades_to_empty_sys_path() {
        let env = Environment::new("/opt/env", [3u32]);
        assert!(env.sys_path().is_empty());
        // bin path is unaffected by version validity
        assert_eq!(env.bin_path(), PathBuf::from("/opt/env/bin"));
    }

    #[test]
    fn empty_version_degrades_to_empty_sys_path() {
        let env = Environment::new("/opt/env", Vec::new());
        assert!(env.sys_path().is_empty());
    }

    #[test]
    fn bin_path_is_root_bin() {
        let env = Environment::new("/opt/env", [3u32, 9]);
        assert_eq!(env.bin_path(), PathBuf::from("/opt/env/bin"));
    }

    #[test]
    fn from_executable_strips_two_segments() {
        let from_exe = Environment::from_executable("/opt/env/bin/python3", [3u32, 9]);
        let from_root = Environment::new("/opt/env", [3u32, 9]);
        assert_eq!(from_exe, from_root);
    }

    #[test]
    fn from_executable_with_short_path_degrades_to_empty_root() {
        let env = Environment::from_executable("python3", [3u32, 9]);
        assert_eq!(env.env_path(), Path::new(""));
    }

    #[derive(Clone)]
    struct CaptureWriter(std::sync::Arc<std::sync::Mutex<Vec<u8>>>);

    impl std::io::Write for CaptureWriter {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    /// Run `f` under a subscriber that collects WARN-and-above output.
    fn warnings_during(f: impl FnOnce()) -> String {
        let buf = std::sync::Arc::new(std::sync::Mutex::new(Vec::new()));
        let writer = CaptureWriter(buf.clone());
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::WARN)
            .without_time()
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();
        tracing::subscriber::with_default(subscriber, f);
        let bytes = buf.lock().unwrap().clone();
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn short_version_warns_at_construction() {
        let output = warnings_during(|| {
            let _ = Environment::new("/opt/env", [3u32]);
        });
        assert_eq!(output.lines().count(), 1);
        assert!(output.contains("invalid version info"));
        assert!(output.contains("version_info=[3]"));
    }

    #[test]
    fn valid_version_constructs_silently() {
        let output = warnings_during(|| {
            let _ = Environment::new("/opt/env", [3u32, 9]);
        });
        assert!(output.is_empty());
    }

    #[test]
    fn descriptor_round_trips_through_serde() {
        let env = Environment::new("/opt/env", [3u32, 9]);
        let json = serde_json::to_string(&env).unwrap();
        let back: Environment = serde_json::from_str(&json).unwrap();
        assert_eq!(back, env);
    }
}
