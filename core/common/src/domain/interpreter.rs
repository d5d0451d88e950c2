//! コマンドインタプリタの指定
//!
//! 暗黙に `/bin/sh` を使うのではなく、どのプログラムに何のフラグで渡すかを値として持つ。

use std::path::{Path, PathBuf};

#[cfg(not(windows))]
const DEFAULT_PROGRAM: &str = "/bin/sh";
#[cfg(not(windows))]
const DEFAULT_COMMAND_FLAG: &str = "-c";

#[cfg(windows)]
const DEFAULT_PROGRAM: &str = "cmd.exe";
#[cfg(windows)]
const DEFAULT_COMMAND_FLAG: &str = "/C";

/// コマンド文字列を解釈するプログラムと、コマンドを渡すフラグ
///
/// 実行時は `<program> <command_flag> <command>` の形で起動する。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interpreter {
    program: PathBuf,
    command_flag: String,
}

impl Interpreter {
    pub fn new(program: impl Into<PathBuf>, command_flag: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            command_flag: command_flag.into(),
        }
    }

    /// プラットフォーム既定のインタプリタ（Unix: `/bin/sh -c`、Windows: `cmd.exe /C`）
    pub fn platform_default() -> Self {
        Self::new(DEFAULT_PROGRAM, DEFAULT_COMMAND_FLAG)
    }

    /// プログラムだけ差し替え、フラグは既定のまま
    pub fn with_program(program: impl Into<PathBuf>) -> Self {
        Self::new(program, DEFAULT_COMMAND_FLAG)
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    pub fn command_flag(&self) -> &str {
        &self.command_flag
    }

    /// ログ表示用のコマンドライン（`/bin/sh -c 'exit 3'` のような形）
    pub fn command_line(&self, command: &str) -> String {
        format!(
            "{} {} '{}'",
            self.program.display(),
            self.command_flag,
            command.replace('\'', r"'\''")
        )
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::platform_default()
    }
}

impl std::fmt::Display for Interpreter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.program.display(), self.command_flag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(unix)]
    #[test]
    fn test_platform_default_is_bin_sh() {
        let i = Interpreter::platform_default();
        assert_eq!(i.program(), Path::new("/bin/sh"));
        assert_eq!(i.command_flag(), "-c");
        assert_eq!(i.to_string(), "/bin/sh -c");
    }

    #[test]
    fn test_with_program_keeps_default_flag() {
        let i = Interpreter::with_program("/usr/bin/bash");
        assert_eq!(i.program(), Path::new("/usr/bin/bash"));
        assert_eq!(i.command_flag(), Interpreter::default().command_flag());
    }

    #[test]
    fn test_command_line_quotes_single_quotes() {
        let i = Interpreter::new("/bin/sh", "-c");
        assert_eq!(i.command_line("exit 3"), "/bin/sh -c 'exit 3'");
        assert_eq!(i.command_line("echo 'a'"), r"/bin/sh -c 'echo '\''a'\'''");
    }
}
