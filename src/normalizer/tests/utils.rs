use crate::leg::LegRecord;
use proptest::prelude::Strategy;

pub fn leg(day: &str, departure: &str, duration: f64, priority: f64, pre: f64, post: f64) -> LegRecord {
    LegRecord {
        day_label: day.to_string(),
        departure_time: departure.to_string(),
        flight_duration_minutes: duration,
        priority_index: priority,
        pre_flight_buffer_minutes: pre,
        post_flight_buffer_minutes: post,
    }
}

/// Outbound leg freeing its resource at minute 560 of day 1.
pub fn morning_outbound() -> LegRecord {
    leg("1日", "07:00", 120.0, 80.0, 30.0, 20.0)
}

/// Inbound leg with a 40 minute pre-flight buffer.
pub fn inbound(day: &str, departure: &str) -> LegRecord {
    leg(day, departure, 150.0, 70.0, 40.0, 10.0)
}

pub fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

pub fn arb_leg() -> impl Strategy<Value = LegRecord> {
    (
        1..4u32,
        0..24u16,
        0..60u16,
        0..600u32,
        0.0..=100.0f64,
        0..180u32,
        0..180u32,
    )
        .prop_map(|(day, hh, mm, dur, pri, pre, post)| {
            leg(
                &format!("{day}日"),
                &format!("{hh:02}:{mm:02}"),
                f64::from(dur),
                pri,
                f64::from(pre),
                f64::from(post),
            )
        })
}
