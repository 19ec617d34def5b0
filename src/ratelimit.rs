use governor::{
    Quota, RateLimiter as GovernorRateLimiter,
    clock::{QuantaClock, QuantaInstant},
    middleware::NoOpMiddleware,
    state::{InMemoryState, NotKeyed},
};
use nonzero_ext::nonzero;
use std::{num::NonZeroU32, time::Duration};

// Both boards run on modest shared hosting; stay far below their tolerance.
const REQ_PER_SEC: NonZeroU32 = nonzero!(8u32);
// No two requests closer together than this.
const MIN_REQUEST_GAP: Duration = Duration::from_millis(120);

type DirectRateLimiter =
    GovernorRateLimiter<NotKeyed, InMemoryState, QuantaClock, NoOpMiddleware<QuantaInstant>>;

/// Paces outbound requests: a per-second budget plus a minimum gap between
/// consecutive requests, so a burst the budget admits still spreads out.
pub struct RateLimiter {
    req_per_sec: DirectRateLimiter,
    request_gap: DirectRateLimiter,
}

impl RateLimiter {
    pub fn new() -> Self {
        let req_per_sec = GovernorRateLimiter::direct(Quota::per_second(REQ_PER_SEC));
        let request_gap = GovernorRateLimiter::direct(Quota::with_period(MIN_REQUEST_GAP).unwrap());

        RateLimiter {
            req_per_sec,
            request_gap,
        }
    }

    pub async fn wait_until_ready(&self) {
        // Budget first, then the gap. The gap limiter admits one caller per
        // period, so anything the budget releases at once still leaves
        // single file.
        self.req_per_sec.until_ready().await;
        self.request_gap.until_ready().await;
    }
}
