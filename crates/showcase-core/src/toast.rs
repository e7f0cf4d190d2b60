//! Notification toasts with timed auto-dismiss.

use heapless::{Deque, String};
use log::debug;

use crate::{
    TickResult,
    render::{ToastKind, ToastView},
    schedule::Deadline,
};

pub const MAX_TOASTS: usize = 8;
pub const TOAST_MESSAGE_BYTES: usize = 128;

const DISPLAY_MS: u16 = 5_000;
const REMOVE_MS: u16 = 300;

pub type ToastId = u32;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ToastConfig {
    /// Time a toast stays up before dismissing itself.
    pub display_ms: u16,
    /// Fade-out time between dismissal and removal.
    pub remove_ms: u16,
}

impl Default for ToastConfig {
    fn default() -> Self {
        Self {
            display_ms: DISPLAY_MS,
            remove_ms: REMOVE_MS,
        }
    }
}

impl ToastConfig {
    pub const fn with_display_ms(mut self, display_ms: u16) -> Self {
        self.display_ms = display_ms;
        self
    }

    pub const fn with_remove_ms(mut self, remove_ms: u16) -> Self {
        self.remove_ms = remove_ms;
        self
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ToastPhase {
    Shown,
    /// Fading out; removed when its deadline fires.
    Leaving,
}

#[derive(Clone, Debug)]
struct Toast {
    id: ToastId,
    kind: ToastKind,
    message: String<TOAST_MESSAGE_BYTES>,
    phase: ToastPhase,
    deadline: Deadline,
}

/// Stack of on-screen toasts, oldest first.
pub struct ToastQueue {
    config: ToastConfig,
    toasts: Deque<Toast, MAX_TOASTS>,
    next_id: ToastId,
    pending_redraw: bool,
}

impl ToastQueue {
    pub const fn new(config: ToastConfig) -> Self {
        Self {
            config,
            toasts: Deque::new(),
            next_id: 0,
            pending_redraw: false,
        }
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    pub fn phase(&self, id: ToastId) -> Option<ToastPhase> {
        self.toasts
            .iter()
            .find(|toast| toast.id == id)
            .map(|toast| toast.phase)
    }

    /// Shows `message` and schedules its auto-dismiss.
    ///
    /// Messages longer than [`TOAST_MESSAGE_BYTES`] are cut at a character
    /// boundary. A full queue drops its oldest toast.
    pub fn show(&mut self, kind: ToastKind, message: &str, now_ms: u64) -> ToastId {
        if self.toasts.is_full()
            && let Some(evicted) = self.toasts.pop_front()
        {
            debug!("toast: evicted #{} to make room", evicted.id);
        }

        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);

        let mut deadline = Deadline::idle();
        deadline.schedule(now_ms, self.config.display_ms as u64);
        let toast = Toast {
            id,
            kind,
            message: truncated(message),
            phase: ToastPhase::Shown,
            deadline,
        };
        if self.toasts.push_back(toast).is_err() {
            debug!("toast: queue full, dropped #{}", id);
        }
        self.pending_redraw = true;

        debug!("toast: show #{} {:?}", id, kind);
        id
    }

    /// Starts the fade-out for `id`, replacing its auto-dismiss timer.
    ///
    /// Returns `false` when the toast is unknown or already leaving.
    pub fn dismiss(&mut self, id: ToastId, now_ms: u64) -> bool {
        let remove_ms = self.config.remove_ms as u64;
        let Some(toast) = self.toasts.iter_mut().find(|toast| toast.id == id) else {
            return false;
        };
        if toast.phase == ToastPhase::Leaving {
            return false;
        }

        toast.phase = ToastPhase::Leaving;
        toast.deadline.schedule(now_ms, remove_ms);
        self.pending_redraw = true;
        debug!("toast: dismiss #{}", id);
        true
    }

    pub fn tick(&mut self, now_ms: u64) -> TickResult {
        let remove_ms = self.config.remove_ms as u64;
        let mut removed = 0;
        for toast in self.toasts.iter_mut() {
            if !toast.deadline.poll(now_ms) {
                continue;
            }
            match toast.phase {
                ToastPhase::Shown => {
                    toast.phase = ToastPhase::Leaving;
                    toast.deadline.schedule(now_ms, remove_ms);
                }
                ToastPhase::Leaving => removed += 1,
            }
            self.pending_redraw = true;
        }

        if removed > 0 {
            self.remove_settled();
        }

        if self.pending_redraw {
            self.pending_redraw = false;
            TickResult::RenderRequested
        } else {
            TickResult::NoRender
        }
    }

    pub fn with_view<F>(&self, f: F)
    where
        F: FnOnce(&[ToastView<'_>]),
    {
        let mut views = [ToastView::default(); MAX_TOASTS];
        for (slot, toast) in views.iter_mut().zip(self.toasts.iter()) {
            *slot = ToastView {
                id: toast.id,
                kind: toast.kind,
                message: toast.message.as_str(),
                shown: toast.phase == ToastPhase::Shown,
            };
        }
        f(&views[..self.toasts.len()]);
    }

    /// Drops leaving toasts whose fade-out has elapsed, keeping order.
    fn remove_settled(&mut self) {
        let mut kept = Deque::new();
        while let Some(toast) = self.toasts.pop_front() {
            let finished = toast.phase == ToastPhase::Leaving && !toast.deadline.is_pending();
            if finished {
                debug!("toast: removed #{}", toast.id);
            } else if kept.push_back(toast).is_err() {
                break;
            }
        }
        self.toasts = kept;
    }
}

fn truncated(message: &str) -> String<TOAST_MESSAGE_BYTES> {
    let mut out = String::new();
    for ch in message.chars() {
        if out.push(ch).is_err() {
            break;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn queue() -> ToastQueue {
        ToastQueue::new(ToastConfig::default())
    }

    #[test]
    fn toast_auto_dismisses_then_is_removed() {
        let mut toasts = queue();
        let id = toasts.show(ToastKind::Success, "Message sent", 1_000);

        toasts.tick(5_999);
        assert_eq!(toasts.phase(id), Some(ToastPhase::Shown));
        toasts.tick(6_000);
        assert_eq!(toasts.phase(id), Some(ToastPhase::Leaving));

        toasts.tick(6_299);
        assert_eq!(toasts.len(), 1);
        toasts.tick(6_300);
        assert!(toasts.is_empty());
    }

    #[test]
    fn manual_close_cancels_auto_dismiss() {
        let mut toasts = queue();
        let id = toasts.show(ToastKind::Info, "hello", 0);

        assert!(toasts.dismiss(id, 1_000));
        assert!(!toasts.dismiss(id, 1_100));

        toasts.tick(1_299);
        assert_eq!(toasts.phase(id), Some(ToastPhase::Leaving));
        toasts.tick(1_300);
        assert_eq!(toasts.phase(id), None);

        // The original 5000 ms timer must not resurrect anything.
        assert_eq!(toasts.tick(5_000), TickResult::NoRender);
        assert!(toasts.is_empty());
    }

    #[test]
    fn removal_keeps_order_of_survivors() {
        let mut toasts = queue();
        let first = toasts.show(ToastKind::Info, "first", 0);
        let second = toasts.show(ToastKind::Error, "second", 0);
        let third = toasts.show(ToastKind::Warning, "third", 0);

        toasts.dismiss(second, 100);
        toasts.tick(400);

        toasts.with_view(|views| {
            let ids: std::vec::Vec<ToastId> = views.iter().map(|view| view.id).collect();
            assert_eq!(ids, [first, third]);
            assert!(views.iter().all(|view| view.shown));
            assert_eq!(views[1].kind, ToastKind::Warning);
            assert_eq!(views[1].message, "third");
        });
    }

    #[test]
    fn full_queue_evicts_oldest() {
        let mut toasts = queue();
        let first = toasts.show(ToastKind::Info, "0", 0);
        for _ in 1..MAX_TOASTS {
            toasts.show(ToastKind::Info, "n", 0);
        }
        let newest = toasts.show(ToastKind::Info, "newest", 0);

        assert_eq!(toasts.len(), MAX_TOASTS);
        assert_eq!(toasts.phase(first), None);
        assert_eq!(toasts.phase(newest), Some(ToastPhase::Shown));
    }

    #[test]
    fn long_messages_are_cut_on_char_boundary() {
        let mut toasts = queue();
        let message = "é".repeat(TOAST_MESSAGE_BYTES);
        toasts.show(ToastKind::Info, &message, 0);

        toasts.with_view(|views| {
            assert_eq!(views[0].message.len(), TOAST_MESSAGE_BYTES);
            assert!(views[0].message.chars().all(|ch| ch == 'é'));
        });
    }

    #[test]
    fn unknown_toast_cannot_be_dismissed() {
        let mut toasts = queue();
        assert!(!toasts.dismiss(42, 0));
    }
}
