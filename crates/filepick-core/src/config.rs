//! Resolver configuration.

use std::env;
use std::path::PathBuf;

const DEFAULT_DOWNLOADS_ROOT: &str = "/storage/emulated/0/Download";
const DEFAULT_PRIVATE_DIR_NAME: &str = "filepick";

/// Paths the resolver needs: the public downloads root that primary-volume
/// document ids resolve against, and the app-private directory stream copies
/// land in.
#[derive(Debug, Clone)]
pub struct ResolverConfig {
    pub public_downloads_root: PathBuf,
    pub private_dir: PathBuf,
}

impl ResolverConfig {
    pub fn new(
        public_downloads_root: impl Into<PathBuf>,
        private_dir: impl Into<PathBuf>,
    ) -> Self {
        ResolverConfig {
            public_downloads_root: public_downloads_root.into(),
            private_dir: private_dir.into(),
        }
    }

    /// Read configuration from the environment, falling back to defaults:
    /// `FILEPICK_DOWNLOADS_ROOT` and `FILEPICK_PRIVATE_DIR`.
    pub fn from_env() -> Self {
        let public_downloads_root = env::var("FILEPICK_DOWNLOADS_ROOT")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_DOWNLOADS_ROOT));
        let private_dir = env::var("FILEPICK_PRIVATE_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| {
                env::current_dir()
                    .unwrap_or_else(|_| PathBuf::from("."))
                    .join(DEFAULT_PRIVATE_DIR_NAME)
            });
        ResolverConfig {
            public_downloads_root,
            private_dir,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_paths_are_kept_verbatim() {
        let config = ResolverConfig::new("/data/downloads", "/data/app/files");
        assert_eq!(config.public_downloads_root, PathBuf::from("/data/downloads"));
        assert_eq!(config.private_dir, PathBuf::from("/data/app/files"));
    }
}
