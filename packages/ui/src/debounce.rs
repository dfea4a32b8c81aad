use std::time::Duration;

use dioxus::prelude::*;

async fn sleep(delay: Duration) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(delay).await;
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(delay).await;
}

/// Tickets handed out per keystroke; only the newest one may publish.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
struct Generation(u64);

impl Generation {
    fn advance(&mut self) -> u64 {
        self.0 += 1;
        self.0
    }

    fn is_current(&self, ticket: u64) -> bool {
        self.0 == ticket
    }
}

/// Follows `source`, but only after it has stopped changing for `delay`.
///
/// The returned signal starts at the source's current value and is only
/// written when the settled value actually differs, so effects keyed on it do
/// not run twice on mount.
pub fn use_debounced(source: Signal<String>, delay: Duration) -> Signal<String> {
    let mut settled = use_signal(|| source.peek().clone());
    let mut generation = use_signal(Generation::default);

    use_effect(move || {
        let value = source();
        let ticket = generation.write().advance();
        spawn(async move {
            sleep(delay).await;
            if generation.peek().is_current(ticket) && *settled.peek() != value {
                settled.set(value);
            }
        });
    });

    settled
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_latest_ticket_is_current() {
        let mut generation = Generation::default();
        let first = generation.advance();
        let second = generation.advance();
        assert!(!generation.is_current(first));
        assert!(generation.is_current(second));
    }
}
