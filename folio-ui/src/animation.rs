//! Animation trigger hooks
//!
//! Every view owns a [`TriggerScope`] created by [`use_trigger_scope`]. Tasks,
//! viewport observers and listeners the view starts are registered there and
//! cancelled together when the view unmounts, whichever way it is left.

use std::future::Future;
use std::rc::Rc;

use dioxus::core::Task;
use dioxus::prelude::*;
use folio_common::{Cancel, Trigger, TriggerSet};
use tracing::warn;

use crate::wasm_utils::{ViewportObserver, WindowEventListener};

/// A running trigger owned by a scope
pub enum TriggerHandle {
    Task(Task),
    Observer(ViewportObserver),
    Listener(WindowEventListener),
}

impl Cancel for TriggerHandle {
    fn cancel(self) {
        match self {
            TriggerHandle::Task(task) => task.cancel(),
            TriggerHandle::Observer(observer) => observer.disconnect(),
            // Detaches in Drop
            TriggerHandle::Listener(listener) => drop(listener),
        }
    }
}

/// Handle to the trigger set of the component that created it
#[derive(Clone, Copy, PartialEq)]
pub struct TriggerScope {
    set: Signal<TriggerSet<TriggerHandle>>,
}

impl TriggerScope {
    pub fn register(&self, handle: TriggerHandle) {
        let mut set = self.set;
        match set.try_write() {
            Ok(mut guard) => guard.register(handle),
            // Scope already torn down
            Err(_) => handle.cancel(),
        };
    }

    /// Spawn a task that is cancelled with the scope
    pub fn spawn(&self, fut: impl Future<Output = ()> + 'static) -> Task {
        let task = spawn(fut);
        self.register(TriggerHandle::Task(task));
        task
    }
}

/// Create a trigger scope tied to the current component's lifetime.
pub fn use_trigger_scope() -> TriggerScope {
    let mut set = use_signal(TriggerSet::<TriggerHandle>::new);

    use_drop(move || {
        if let Ok(mut guard) = set.try_write() {
            guard.cancel_all();
        }
    });

    TriggerScope { set }
}

/// Tracks whether an element's trigger has fired.
///
/// Wire `onmounted()` onto the animated element. `Trigger::Mount` fires on
/// mount; `Trigger::InView` fires when the element scrolls into view.
#[derive(Clone, Copy, PartialEq)]
pub struct RevealHandle {
    fired: Signal<bool>,
    trigger: Trigger,
    scope: TriggerScope,
}

impl RevealHandle {
    pub fn fired(&self) -> bool {
        (self.fired)()
    }

    /// Callback for the animated element's `onmounted`.
    pub fn onmounted(&self) -> impl FnMut(MountedEvent) {
        let handle = *self;
        move |evt: MountedEvent| handle.arm(evt.data())
    }

    fn arm(&self, mounted: Rc<MountedData>) {
        let mut fired = self.fired;
        let threshold = match self.trigger {
            Trigger::Mount => {
                fire(&mut fired);
                return;
            }
            Trigger::InView { threshold } => threshold,
        };

        let Some(element) = mounted.downcast::<web_sys::Element>().cloned() else {
            // Not a DOM renderer; nothing to observe
            fire(&mut fired);
            return;
        };

        let result = ViewportObserver::observe(&element, threshold, move |visible| {
            if visible {
                fire(&mut fired);
            }
        });

        match result {
            Ok(observer) => self.scope.register(TriggerHandle::Observer(observer)),
            Err(e) => {
                warn!("IntersectionObserver unavailable, revealing immediately: {e:?}");
                fire(&mut fired);
            }
        }
    }
}

fn fire(fired: &mut Signal<bool>) {
    if !*fired.peek() {
        fired.set(true);
    }
}

/// Hook that creates a [`RevealHandle`] with its own trigger scope.
pub fn use_reveal(trigger: Trigger) -> RevealHandle {
    let scope = use_trigger_scope();
    let fired = use_signal(|| false);
    RevealHandle {
        fired,
        trigger,
        scope,
    }
}

#[cfg(target_arch = "wasm32")]
pub async fn sleep_ms(ms: u64) {
    gloo_timers::future::TimeoutFuture::new(ms as u32).await;
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn sleep_ms(ms: u64) {
    tokio::time::sleep(std::time::Duration::from_millis(ms)).await;
}

#[cfg(test)]
mod tests {
    use super::*;
    use dioxus::core::NoOpMutations;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::time::Duration;

    // One counter per test, tests run in parallel
    static COMPLETED: [AtomicU32; 2] = [AtomicU32::new(0), AtomicU32::new(0)];

    #[component]
    fn Sleeper(slot: usize) -> Element {
        let scope = use_trigger_scope();
        use_hook(move || {
            scope.spawn(async move {
                sleep_ms(50).await;
                COMPLETED[slot].fetch_add(1, Ordering::SeqCst);
            });
        });
        rsx! { "sleeping" }
    }

    #[component]
    fn Host(slot: usize, unmount_after_ms: Option<u64>) -> Element {
        let mut shown = use_signal(|| true);
        use_hook(move || {
            if let Some(ms) = unmount_after_ms {
                spawn(async move {
                    sleep_ms(ms).await;
                    shown.set(false);
                });
            }
        });
        rsx! {
            if shown() {
                Sleeper { slot }
            }
        }
    }

    async fn run_for(dom: &mut VirtualDom, ms: u64) {
        let _ = tokio::time::timeout(Duration::from_millis(ms), async {
            loop {
                dom.wait_for_work().await;
                dom.render_immediate(&mut NoOpMutations);
            }
        })
        .await;
    }

    #[tokio::test]
    async fn test_unmount_cancels_scope_tasks() {
        let mut dom = VirtualDom::new_with_props(
            Host,
            HostProps {
                slot: 0,
                unmount_after_ms: Some(10),
            },
        );
        dom.rebuild_in_place();
        run_for(&mut dom, 200).await;
        assert_eq!(COMPLETED[0].load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_mounted_scope_tasks_complete() {
        let mut dom = VirtualDom::new_with_props(
            Host,
            HostProps {
                slot: 1,
                unmount_after_ms: None,
            },
        );
        dom.rebuild_in_place();
        run_for(&mut dom, 200).await;
        assert_eq!(COMPLETED[1].load(Ordering::SeqCst), 1);
    }
}
