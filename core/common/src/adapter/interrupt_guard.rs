//! 子プロセス待機中の SIGINT / SIGQUIT 無視（Unix 用アダプター）
//!
//! `system(3)` と同じく、端末からの Ctrl-C / Ctrl-\ は子プロセスにだけ届き、
//! 待機している呼び出し側は止まらないようにする。
//! シグナルの disposition はプロセス全体の状態なので、複数スレッドからの同時実行に備えて
//! 参照カウントで管理し、最後のガードが drop されたときに元へ戻す。

use std::io;
use std::sync::{Mutex, MutexGuard};

struct SavedActions {
    int: libc::sigaction,
    quit: libc::sigaction,
}

struct GuardState {
    count: usize,
    saved: Option<SavedActions>,
}

static STATE: Mutex<GuardState> = Mutex::new(GuardState {
    count: 0,
    saved: None,
});

fn lock_state() -> MutexGuard<'static, GuardState> {
    // パニックしたスレッドがあってもカウントは整合しているのでそのまま使う
    STATE.lock().unwrap_or_else(|e| e.into_inner())
}

fn ignore_action() -> libc::sigaction {
    unsafe {
        let mut action: libc::sigaction = std::mem::zeroed();
        action.sa_sigaction = libc::SIG_IGN;
        libc::sigemptyset(&mut action.sa_mask);
        action
    }
}

fn set_action(
    sig: libc::c_int,
    action: &libc::sigaction,
    old: Option<&mut libc::sigaction>,
) -> io::Result<()> {
    let old_ptr = match old {
        Some(o) => o as *mut libc::sigaction,
        None => std::ptr::null_mut(),
    };
    if unsafe { libc::sigaction(sig, action, old_ptr) } != 0 {
        return Err(io::Error::last_os_error());
    }
    Ok(())
}

fn is_ignored(action: &libc::sigaction) -> bool {
    action.sa_sigaction == libc::SIG_IGN
}

/// 生存中は SIGINT / SIGQUIT を無視するガード
pub struct InterruptGuard {
    reset_int_in_child: bool,
    reset_quit_in_child: bool,
}

impl InterruptGuard {
    /// SIGINT / SIGQUIT を無視に切り替える（既に他のガードが有効ならカウントを増やすだけ）
    pub fn acquire() -> io::Result<Self> {
        let mut state = lock_state();
        if state.count == 0 {
            let ignore = ignore_action();
            let mut int: libc::sigaction = unsafe { std::mem::zeroed() };
            let mut quit: libc::sigaction = unsafe { std::mem::zeroed() };
            set_action(libc::SIGINT, &ignore, Some(&mut int))?;
            if let Err(e) = set_action(libc::SIGQUIT, &ignore, Some(&mut quit)) {
                let _ = set_action(libc::SIGINT, &int, None);
                return Err(e);
            }
            state.saved = Some(SavedActions { int, quit });
        }
        state.count += 1;

        let (reset_int_in_child, reset_quit_in_child) = match &state.saved {
            Some(saved) => (!is_ignored(&saved.int), !is_ignored(&saved.quit)),
            None => (true, true),
        };
        Ok(Self {
            reset_int_in_child,
            reset_quit_in_child,
        })
    }

    /// 子プロセスの `pre_exec` で呼ぶ処理を返す
    ///
    /// 無視の設定は exec 後も引き継がれるため、元々無視されていなかったシグナルは
    /// 子プロセス側で SIG_DFL に戻す。fork 後に呼ばれるので sigaction のみを使う。
    pub fn child_reset(&self) -> impl FnMut() -> io::Result<()> + Send + Sync + 'static {
        let reset_int = self.reset_int_in_child;
        let reset_quit = self.reset_quit_in_child;
        move || {
            let mut action: libc::sigaction = unsafe { std::mem::zeroed() };
            action.sa_sigaction = libc::SIG_DFL;
            unsafe {
                libc::sigemptyset(&mut action.sa_mask);
            }
            if reset_int {
                set_action(libc::SIGINT, &action, None)?;
            }
            if reset_quit {
                set_action(libc::SIGQUIT, &action, None)?;
            }
            Ok(())
        }
    }
}

impl Drop for InterruptGuard {
    fn drop(&mut self) {
        let mut state = lock_state();
        state.count = state.count.saturating_sub(1);
        if state.count == 0 {
            if let Some(saved) = state.saved.take() {
                let _ = set_action(libc::SIGINT, &saved.int, None);
                let _ = set_action(libc::SIGQUIT, &saved.quit, None);
            }
        }
    }
}

/// disposition を観測するテストと、ガードを取るテストを直列化する
#[cfg(test)]
pub(crate) fn test_lock() -> MutexGuard<'static, ()> {
    static TEST_LOCK: Mutex<()> = Mutex::new(());
    TEST_LOCK.lock().unwrap_or_else(|e| e.into_inner())
}

/// 現在のハンドラ（SIG_DFL / SIG_IGN / 関数アドレス）
#[cfg(test)]
pub(crate) fn current_handler(sig: libc::c_int) -> libc::sighandler_t {
    unsafe {
        let mut old: libc::sigaction = std::mem::zeroed();
        libc::sigaction(sig, std::ptr::null(), &mut old);
        old.sa_sigaction
    }
}
