use std::io;
use std::path::PathBuf;
use std::process::{Command, ExitStatus};

mod flowgraph;
mod modtool;

pub use modtool::{
    AddBlockOptions, BlockType, Language, validate_block_name, validate_module_name,
};

/// One external tool invocation, fully described before it runs.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolCommand {
    pub program: String,
    pub args: Vec<String>,
    pub working_dir: Option<PathBuf>,
    pub env: Vec<(String, String)>,
}

impl ToolCommand {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
            working_dir: None,
            env: Vec::new(),
        }
    }

    pub fn with_working_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_dir = Some(dir.into());
        self
    }

    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env.push((key.into(), value.into()));
        self
    }

    /// Display form of the invocation, with space-containing arguments
    /// quoted.
    pub fn to_shell_command(&self) -> String {
        let mut cmd = self.program.clone();
        for arg in &self.args {
            cmd.push(' ');
            if arg.contains(' ') {
                cmd.push_str(&format!("'{arg}'"));
            } else {
                cmd.push_str(arg);
            }
        }
        cmd
    }

    /// Run the tool, inheriting stdio, and return its exit status. The
    /// tool's behavior is opaque here; callers interpret the status.
    pub fn execute(&self) -> io::Result<ExitStatus> {
        let mut command = Command::new(&self.program);
        command.args(&self.args);
        if let Some(dir) = &self.working_dir {
            command.current_dir(dir);
        }
        for (key, value) in &self.env {
            command.env(key, value);
        }
        command.status()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_shell_command_rendering() {
        let command = ToolCommand::new(
            "gr_modtool",
            vec!["rename".to_string(), "fir".to_string(), "iir".to_string()],
        );
        assert_eq!(command.to_shell_command(), "gr_modtool rename fir iir");
    }

    #[test]
    fn test_shell_command_quotes_spaces() {
        let command = ToolCommand::new(
            "gr_modtool",
            vec![
                "add".to_string(),
                "--copyright".to_string(),
                "Jane Doe".to_string(),
            ],
        );
        assert_eq!(
            command.to_shell_command(),
            "gr_modtool add --copyright 'Jane Doe'"
        );
    }

    #[test]
    fn test_builder_accumulates_context() {
        let command = ToolCommand::new("grcc", vec!["top.grc".to_string()])
            .with_working_dir("/proj/examples")
            .with_env("GR_PREFIX", "/opt/gnuradio");
        assert_eq!(
            command.working_dir.as_deref(),
            Some(Path::new("/proj/examples"))
        );
        assert_eq!(
            command.env,
            vec![("GR_PREFIX".to_string(), "/opt/gnuradio".to_string())]
        );
    }
}
