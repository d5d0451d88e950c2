//! 環境変数解決 Outbound ポート
//!
//! インタプリタ・ログファイルの設定を環境変数から解決する。
//! usecase / wiring はこの trait 経由でのみ環境変数にアクセスする。

use crate::domain::Interpreter;
use std::path::PathBuf;

/// インタプリタのプログラムパス
pub const ENV_SHELL: &str = "CMDRUN_SHELL";
/// インタプリタへコマンドを渡すフラグ（例: `-c`）
pub const ENV_SHELL_FLAG: &str = "CMDRUN_SHELL_FLAG";
/// JSONL ログの出力先
pub const ENV_LOG_FILE: &str = "CMDRUN_LOG_FILE";

/// 環境変数解決抽象（Outbound ポート）
///
/// 実装は `common::adapter::StdEnvResolver` やテスト用のモックなど。
/// 空文字列の環境変数は未設定として扱う。
pub trait EnvResolver: Send + Sync {
    /// 環境変数を 1 つ取得する（未設定・空なら None）
    fn var(&self, key: &str) -> Option<String>;

    /// インタプリタを解決する
    ///
    /// 優先順位（プログラム・フラグそれぞれ）:
    /// 1. 引数で渡された値（CLI フラグ）
    /// 2. CMDRUN_SHELL / CMDRUN_SHELL_FLAG
    /// 3. プラットフォーム既定（/bin/sh -c、cmd.exe /C）
    fn resolve_interpreter(
        &self,
        program: Option<&str>,
        command_flag: Option<&str>,
    ) -> Interpreter {
        let default = Interpreter::platform_default();
        let program = program
            .filter(|s| !s.is_empty())
            .map(PathBuf::from)
            .or_else(|| self.var(ENV_SHELL).map(PathBuf::from))
            .unwrap_or_else(|| default.program().to_path_buf());
        let command_flag = command_flag
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .or_else(|| self.var(ENV_SHELL_FLAG))
            .unwrap_or_else(|| default.command_flag().to_string());
        Interpreter::new(program, command_flag)
    }

    /// JSONL ログファイルのパス（引数 > CMDRUN_LOG_FILE > なし）
    fn resolve_log_file_path(&self, explicit: Option<&str>) -> Option<PathBuf> {
        explicit
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .or_else(|| self.var(ENV_LOG_FILE))
            .map(PathBuf::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::path::Path;

    struct MapEnv(HashMap<&'static str, &'static str>);

    impl EnvResolver for MapEnv {
        fn var(&self, key: &str) -> Option<String> {
            self.0
                .get(key)
                .filter(|v| !v.is_empty())
                .map(|v| v.to_string())
        }
    }

    #[test]
    fn test_interpreter_falls_back_to_platform_default() {
        let env = MapEnv(HashMap::new());
        assert_eq!(env.resolve_interpreter(None, None), Interpreter::platform_default());
    }

    #[test]
    fn test_interpreter_from_env() {
        let env = MapEnv(HashMap::from([(ENV_SHELL, "/bin/bash"), (ENV_SHELL_FLAG, "-ec")]));
        let i = env.resolve_interpreter(None, None);
        assert_eq!(i.program(), Path::new("/bin/bash"));
        assert_eq!(i.command_flag(), "-ec");
    }

    #[test]
    fn test_explicit_values_win_over_env() {
        let env = MapEnv(HashMap::from([(ENV_SHELL, "/bin/bash"), (ENV_SHELL_FLAG, "-ec")]));
        let i = env.resolve_interpreter(Some("/bin/dash"), Some("-c"));
        assert_eq!(i.program(), Path::new("/bin/dash"));
        assert_eq!(i.command_flag(), "-c");
    }

    #[test]
    fn test_empty_values_are_unset() {
        let env = MapEnv(HashMap::from([(ENV_SHELL, ""), (ENV_LOG_FILE, "")]));
        assert_eq!(env.resolve_interpreter(Some(""), None), Interpreter::platform_default());
        assert_eq!(env.resolve_log_file_path(Some("")), None);
    }

    #[test]
    fn test_log_file_path_precedence() {
        let env = MapEnv(HashMap::from([(ENV_LOG_FILE, "/tmp/env.jsonl")]));
        assert_eq!(
            env.resolve_log_file_path(None),
            Some(PathBuf::from("/tmp/env.jsonl"))
        );
        assert_eq!(
            env.resolve_log_file_path(Some("/tmp/flag.jsonl")),
            Some(PathBuf::from("/tmp/flag.jsonl"))
        );
    }
}
