//! # Rerun Slot Service
//!
//! 監視モードの再実行要求をまとめる単一スロットのキュー

/// 再実行スロット
///
/// サイクル実行中に届いた変更通知は1件分だけ保留し、
/// それ以上の通知は捨てる。サイクル同士は重ならない
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RerunSlot {
    running: bool,
    pending: bool,
}

impl RerunSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// 変更通知を受け取る
    ///
    /// # Returns
    ///
    /// 呼び出し側がすぐにサイクルを開始すべき場合は `true`
    pub fn trigger(&mut self) -> bool {
        if self.running {
            self.pending = true;
            false
        } else {
            self.running = true;
            true
        }
    }

    /// サイクルの完了を通知する
    ///
    /// # Returns
    ///
    /// 保留中の再実行があり、続けてもう1サイクル実行すべき場合は `true`
    pub fn complete(&mut self) -> bool {
        if self.pending {
            self.pending = false;
            true
        } else {
            self.running = false;
            false
        }
    }
}
