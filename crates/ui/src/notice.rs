use std::time::Duration;

use dioxus::prelude::*;

/// Transient acknowledgment line shown after a keyboard toggle. Purely a UX
/// affordance; never logged.
#[derive(Clone, Copy)]
pub struct NoticeHandle {
    current: Signal<Option<&'static str>>,
    seq: Signal<u64>,
}

#[must_use]
pub fn use_notice() -> NoticeHandle {
    let current = use_signal(|| None);
    let seq = use_signal(|| 0_u64);
    NoticeHandle { current, seq }
}

impl NoticeHandle {
    pub const DISMISS_AFTER: Duration = Duration::from_secs(2);

    pub fn show(&self, text: &'static str) {
        let mut current = self.current;
        let mut seq = self.seq;
        let ticket = seq() + 1;
        seq.set(ticket);
        current.set(Some(text));
        spawn(async move {
            tokio::time::sleep(Self::DISMISS_AFTER).await;
            // A newer notice owns the slot by now; leave it alone.
            if seq() == ticket {
                current.set(None);
            }
        });
    }

    #[must_use]
    pub fn current(&self) -> Option<&'static str> {
        (self.current)()
    }
}
