// tests/support/mocks/util.rs
use chrono::{DateTime, Duration, Utc};
use dramaboard::application::ports::time::Clock;
use std::sync::atomic::{AtomicI64, Ordering};

use super::time::fixed_now;

#[derive(Clone)]
pub struct DummyClock;

impl Clock for DummyClock {
    fn now(&self) -> DateTime<Utc> {
        fixed_now()
    }
}

/// 呼び出しごとに 1 秒進む時計。一覧の並び順を決定論的にするために使う。
#[derive(Default)]
pub struct SteppingClock {
    ticks: AtomicI64,
}

impl Clock for SteppingClock {
    fn now(&self) -> DateTime<Utc> {
        let tick = self.ticks.fetch_add(1, Ordering::SeqCst);
        fixed_now() + Duration::seconds(tick)
    }
}
