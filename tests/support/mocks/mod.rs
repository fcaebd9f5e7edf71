// tests/support/mocks/mod.rs
//! テストサポートモック再エクスポートモジュール
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod api;
pub mod prompt;
pub mod time;
pub mod util;

// 時刻関連
pub use time::fixed_now;

// ユーティリティ関連
pub use util::{DummyClock, SteppingClock};

// クライアント側
pub use api::ScriptedForumApi;
pub use prompt::RecordingPrompt;
