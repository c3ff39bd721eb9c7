use std::path::Path;

use super::ToolCommand;
use crate::config::Config;

impl ToolCommand {
    /// Open the companion editor, optionally on a flowgraph file. Runs
    /// from the file's directory (or the given fallback) so relative
    /// paths inside the flowgraph resolve.
    pub fn companion(config: &Config, file: Option<&Path>, fallback_dir: &Path) -> Self {
        let mut args = Vec::new();
        let working_dir = match file {
            Some(file) => {
                args.push(file.display().to_string());
                file.parent().unwrap_or(fallback_dir).to_path_buf()
            }
            None => fallback_dir.to_path_buf(),
        };
        Self::new(&config.companion_cmd, args).with_working_dir(working_dir)
    }

    /// Compile a flowgraph; with `run` the compiled result is executed
    /// afterwards (the compiler's `-r` switch).
    pub fn compiler(config: &Config, file: &Path, run: bool) -> Self {
        let mut args = Vec::new();
        if run {
            args.push("-r".to_string());
        }
        args.push(file.display().to_string());
        let working_dir = file.parent().map(Path::to_path_buf);
        let command = Self::new(&config.compiler_cmd, args);
        match working_dir {
            Some(dir) if dir.as_os_str().is_empty() => command,
            Some(dir) => command.with_working_dir(dir),
            None => command,
        }
    }
}
