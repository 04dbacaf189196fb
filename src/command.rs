//! # Command specification (`CommandSpec`)
//!
//! [`CommandSpec`] names the executable and its ordered arguments. It is
//! immutable once handed to a supervisor: every run of that supervisor
//! launches the same command line. Path resolution is the caller's business;
//! the command is used exactly as given.
//!
//! ## Example
//! ```rust
//! use procvisor::CommandSpec;
//!
//! let cmd = CommandSpec::new("ping").arg("google.com").arg("-c").arg("4");
//! assert_eq!(cmd.program(), "ping");
//! assert_eq!(cmd.get_args().len(), 3);
//! ```

use std::borrow::Cow;

/// Executable path/name plus ordered string arguments.
///
/// Built with a consuming builder; cheap to clone.
#[derive(Clone, Debug)]
pub struct CommandSpec {
    program: Cow<'static, str>,
    args: Vec<String>,
}

impl CommandSpec {
    /// Creates a spec for the given program with no arguments.
    pub fn new(program: impl Into<Cow<'static, str>>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    /// Appends one argument.
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Appends several arguments, preserving order.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Returns the program path/name.
    pub fn program(&self) -> &str {
        &self.program
    }

    /// Returns the arguments in the order they will be passed.
    pub fn get_args(&self) -> &[String] {
        &self.args
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_preserves_order() {
        let cmd = CommandSpec::new("sh").args(["-c", "echo hi"]).arg("extra");
        assert_eq!(cmd.program(), "sh");
        assert_eq!(cmd.get_args(), ["-c", "echo hi", "extra"]);
    }

    #[test]
    fn clone_is_independent() {
        let a = CommandSpec::new("echo").arg("one");
        let b = a.clone().arg("two");
        assert_eq!(a.get_args().len(), 1);
        assert_eq!(b.get_args().len(), 2);
    }

    #[test]
    fn builder_and_getter_coexist() {
        let cmd = CommandSpec::new("sh").args(["-c"]);
        assert_eq!(cmd.get_args(), ["-c"]);
    }
}
