//! Directory helpers following the XDG Base Directory specification
//!
//! - Config: `~/.config/toolbelt/` - CLI settings (`config.json`)
//!
//! # Example
//!
//! ```no_run
//! use toolbelt::utils::{ensure_dirs, get_config_dir};
//!
//! ensure_dirs().expect("Failed to create directories");
//!
//! if let Some(config_path) = get_config_dir() {
//!     println!("{}", config_path.display());
//! }
//! ```

use directories::ProjectDirs;
use std::path::PathBuf;

pub fn get_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("com", "toolbelt", "toolbelt").map(|pd| pd.config_dir().to_path_buf())
}

pub fn ensure_dirs() -> std::io::Result<()> {
    #[cfg(unix)]
    {
        use std::fs::DirBuilder;
        use std::os::unix::fs::DirBuilderExt;

        let mut builder = DirBuilder::new();
        builder.mode(0o700); // User read/write/execute only
        builder.recursive(true);

        if let Some(dir) = get_config_dir() {
            builder.create(dir)?;
        }
    }

    #[cfg(not(unix))]
    {
        if let Some(dir) = get_config_dir() {
            std::fs::create_dir_all(dir)?;
        }
    }

    Ok(())
}
