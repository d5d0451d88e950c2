//! ドメイン型（Newtype）
//!
//! String / PathBuf を直接運ばず、意味のある型に包んで境界を明確にする。

pub mod interpreter;
pub mod termination;

pub use interpreter::Interpreter;
pub use termination::{Execution, Termination, ABNORMAL_EXIT_CODE};

/// インタプリタへそのまま渡すコマンド文字列
///
/// 構文の検証はしない。空文字列も有効（解釈はインタプリタに任せる）。
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CommandInvocation(String);

impl CommandInvocation {
    pub fn new(command: impl Into<String>) -> Self {
        Self(command.into())
    }

    /// 複数の語を空白 1 つで連結して 1 つのコマンドにする（CLI の位置引数用）
    pub fn from_words<S: AsRef<str>>(words: &[S]) -> Self {
        Self(
            words
                .iter()
                .map(|w| w.as_ref())
                .collect::<Vec<_>>()
                .join(" "),
        )
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::ops::Deref for CommandInvocation {
    type Target = str;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<str> for CommandInvocation {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for CommandInvocation {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for CommandInvocation {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl std::fmt::Display for CommandInvocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_words_joins_with_single_space() {
        let inv = CommandInvocation::from_words(&["echo", "hello", "world"]);
        assert_eq!(inv.as_str(), "echo hello world");
    }

    #[test]
    fn test_from_words_empty() {
        let words: [&str; 0] = [];
        let inv = CommandInvocation::from_words(&words);
        assert_eq!(inv.as_str(), "");
        assert_eq!(inv, CommandInvocation::default());
    }

    #[test]
    fn test_passed_verbatim() {
        let inv = CommandInvocation::from("  exit 3 ; echo \"$HOME\"  ");
        assert_eq!(&*inv, "  exit 3 ; echo \"$HOME\"  ");
    }
}
