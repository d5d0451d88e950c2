//! cmdrun コマンドの enum（Command Pattern）
//!
//! 引数解析の結果を enum に落とし、match でディスパッチする。

use common::domain::CommandInvocation;

/// cmdrun が行うこと
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// ヘルプ表示
    Help,

    /// コマンド文字列をインタプリタで実行する（位置引数なしなら空コマンド）
    Run { invocation: CommandInvocation },
}

impl Command {
    /// 位置引数から Run を作る（語は空白 1 つで連結）
    pub fn run_from_words(words: &[String]) -> Self {
        Command::Run {
            invocation: CommandInvocation::from_words(words),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_from_words() {
        let cmd = Command::run_from_words(&["exit".to_string(), "42".to_string()]);
        assert_eq!(
            cmd,
            Command::Run {
                invocation: CommandInvocation::from("exit 42")
            }
        );
    }

    #[test]
    fn test_run_from_no_words_is_empty_command() {
        let cmd = Command::run_from_words(&[]);
        assert_eq!(
            cmd,
            Command::Run {
                invocation: CommandInvocation::default()
            }
        );
    }
}
