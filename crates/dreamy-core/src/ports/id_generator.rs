//! IdGenerator port - ID 生成の抽象化
//!
//! 永続化フォーマット上の id は「作成時刻のミリ秒」です。ただし同じミリ秒内に
//! 連続で追加すると衝突するので、直前に発行した値より必ず大きくします。
//!
//! # 実装
//! - **MonotonicIdGenerator**: Clock ベース + 単調増加

use std::sync::atomic::{AtomicI64, Ordering};

use crate::domain::TaskId;
use crate::ports::Clock;

/// IdGenerator は Task ID を生成
///
/// # Thread Safety
/// - `Send + Sync` を要求（複数スレッドから使える）
pub trait IdGenerator: Send + Sync {
    fn next_id(&self) -> TaskId;
}

/// `max(now_ms, last + 1)` を発行する ID 生成器
///
/// Clock を使うので、テストでは FixedClock で決定的な ID 列になります。
pub struct MonotonicIdGenerator<C> {
    clock: C,
    last: AtomicI64,
}

impl<C: Clock> MonotonicIdGenerator<C> {
    pub fn new(clock: C) -> Self {
        Self {
            clock,
            last: AtomicI64::new(i64::MIN),
        }
    }
}

impl<C: Clock + Send + Sync> IdGenerator for MonotonicIdGenerator<C> {
    fn next_id(&self) -> TaskId {
        let now_ms = self.clock.now().timestamp_millis();
        let step = |last: i64| now_ms.max(last.saturating_add(1));
        // クロージャは常に Some を返すので Err にはならない
        let prev = match self
            .last
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| Some(step(last)))
        {
            Ok(prev) | Err(prev) => prev,
        };
        TaskId::new(step(prev))
    }
}
