//! Home page stat tile that counts up once it scrolls into view

use crate::animation::{sleep_ms, use_reveal, use_trigger_scope};
use dioxus::prelude::*;
use folio_common::animation::presets;
use folio_common::content::Stat;
use folio_common::CountUp;
use tracing::debug;

/// Interval between displayed values
const FRAME_MS: u32 = 16;
/// Delay between successive stats starting to count
const STAGGER_MS: u64 = 200;

pub(crate) fn start_delay_ms(index: usize) -> u64 {
    index as u64 * STAGGER_MS
}

/// Elapsed times at which the counter is redrawn, ending exactly at the duration
pub(crate) fn frame_times(count: CountUp, frame_ms: u32) -> impl Iterator<Item = u32> {
    let step = frame_ms.max(1);
    let duration = count.duration_ms;
    (0..)
        .map(move |i: u32| i.saturating_mul(step))
        .take_while(move |t| *t < duration)
        .chain(std::iter::once(duration))
}

#[component]
pub fn StatCounter(stat: Stat, index: usize) -> Element {
    let motion = presets::FADE_IN.staggered(index, 100);
    let reveal = use_reveal(motion.trigger);
    let scope = use_trigger_scope();
    let mut shown = use_signal(|| 0u32);
    let mut started = use_signal(|| false);

    use_effect(move || {
        if !reveal.fired() || *started.peek() {
            return;
        }
        started.set(true);

        let count = CountUp::new(stat.value);
        scope.spawn(async move {
            sleep_ms(start_delay_ms(index)).await;
            for (frame, elapsed) in frame_times(count, FRAME_MS).enumerate() {
                if frame > 0 {
                    sleep_ms(FRAME_MS as u64).await;
                }
                shown.set(count.value_at(elapsed));
            }
            debug!("Stat {:?} reached {}", stat.label, stat.value);
        });
    });

    rsx! {
        div {
            class: "text-center p-6 bg-gradient-to-b from-white to-gray-50 rounded-2xl shadow-sm hover:shadow-md transition-all border border-gray-100 hover:border-blue-100 hover:-translate-y-1",
            style: "{motion.style(reveal.fired())}",
            onmounted: reveal.onmounted(),
            h3 { class: "text-4xl font-bold font-heading text-gray-900 mb-2", "{shown}" }
            p { class: "text-gray-600 text-sm uppercase tracking-wider", "{stat.label}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_delay_staggers_by_index() {
        assert_eq!(start_delay_ms(0), 0);
        assert_eq!(start_delay_ms(3), 600);
    }

    #[test]
    fn test_frame_times_cover_whole_duration() {
        let count = CountUp::new(50);
        let times: Vec<u32> = frame_times(count, FRAME_MS).collect();
        assert_eq!(times.first(), Some(&0));
        assert_eq!(times.last(), Some(&count.duration_ms));
        assert!(times.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(count.value_at(*times.last().unwrap()), 50);
    }

    #[test]
    fn test_frame_times_zero_duration() {
        let count = CountUp {
            duration_ms: 0,
            ..CountUp::new(5)
        };
        assert_eq!(frame_times(count, FRAME_MS).collect::<Vec<_>>(), vec![0]);
    }
}
