//! 시간 공급자
//!
//! 토큰 발급 시각과 만료 검증은 모두 [`Clock`]을 통해 현재 시각을 얻습니다.
//! 운영 환경에서는 [`SystemClock`], 테스트에서는 [`ManualClock`]을 주입하여
//! 실제로 15분이나 30일을 기다리지 않고 만료를 검증할 수 있습니다.

use std::sync::{Mutex, PoisonError};

use chrono::{DateTime, Duration, Utc};

/// 현재 시각을 제공하는 trait
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// 시스템 시계 (`Utc::now()`)
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// 수동으로 진행시키는 시계 (테스트 및 시뮬레이션용)
#[derive(Debug)]
pub struct ManualClock {
    now: Mutex<DateTime<Utc>>,
}

impl ManualClock {
    pub fn new(start: DateTime<Utc>) -> Self {
        Self { now: Mutex::new(start) }
    }

    /// 현재 시스템 시각에서 시작하는 시계
    pub fn starting_now() -> Self {
        Self::new(Utc::now())
    }

    /// 시계를 `delta`만큼 앞으로 이동합니다.
    pub fn advance(&self, delta: Duration) {
        let mut now = self.now.lock().unwrap_or_else(PoisonError::into_inner);
        *now = *now + delta;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
