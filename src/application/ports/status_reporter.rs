//! # Status Reporter Port
//!
//! 各ステージの進捗をユーザーに表示する

/// 進捗表示
///
/// `start` で進行中の表示を始め、`succeed` / `fail` / `warn` で確定させる
pub trait StatusReporter: Send + Sync {
    /// 進行中のステージを表示する
    fn start(&self, text: &str);

    /// 成功として確定する
    fn succeed(&self, text: &str);

    /// 失敗として確定する
    fn fail(&self, text: &str);

    /// 警告として確定する
    fn warn(&self, text: &str);

    /// 画面をクリアする
    fn clear(&self);
}

/// テスト用: 呼び出しを記録するだけの実装
#[cfg(test)]
pub mod recording {
    use super::StatusReporter;
    use std::sync::Mutex;

    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum Status {
        Start(String),
        Succeed(String),
        Fail(String),
        Warn(String),
        Clear,
    }

    #[derive(Default)]
    pub struct RecordingReporter {
        events: Mutex<Vec<Status>>,
    }

    impl RecordingReporter {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn events(&self) -> Vec<Status> {
            self.events.lock().unwrap().clone()
        }

        pub fn succeeded(&self) -> Vec<String> {
            self.events()
                .into_iter()
                .filter_map(|e| match e {
                    Status::Succeed(text) => Some(text),
                    _ => None,
                })
                .collect()
        }

        pub fn failed(&self) -> Vec<String> {
            self.events()
                .into_iter()
                .filter_map(|e| match e {
                    Status::Fail(text) => Some(text),
                    _ => None,
                })
                .collect()
        }

        pub fn warned(&self) -> Vec<String> {
            self.events()
                .into_iter()
                .filter_map(|e| match e {
                    Status::Warn(text) => Some(text),
                    _ => None,
                })
                .collect()
        }

        fn push(&self, status: Status) {
            self.events.lock().unwrap().push(status);
        }
    }

    impl StatusReporter for RecordingReporter {
        fn start(&self, text: &str) {
            self.push(Status::Start(text.to_string()));
        }

        fn succeed(&self, text: &str) {
            self.push(Status::Succeed(text.to_string()));
        }

        fn fail(&self, text: &str) {
            self.push(Status::Fail(text.to_string()));
        }

        fn warn(&self, text: &str) {
            self.push(Status::Warn(text.to_string()));
        }

        fn clear(&self) {
            self.push(Status::Clear);
        }
    }
}
