use futures_util::task::ArcWake;
use std::sync::Arc;
use tao::event_loop::EventLoopProxy;

use super::app::UserEvent;

/// Create a waker that sends a poll event to the event loop.
///
/// The drop-zone future is polled on the main thread, between window events, whenever something it waits on is ready.
pub(crate) fn tao_waker(proxy: &EventLoopProxy<UserEvent>) -> std::task::Waker {
    struct PollHandle(EventLoopProxy<UserEvent>);

    impl ArcWake for PollHandle {
        fn wake_by_ref(arc_self: &Arc<Self>) {
            // the loop is gone once the window closed; nothing left to poll
            _ = arc_self.0.send_event(UserEvent::Poll);
        }
    }

    futures_util::task::waker(Arc::new(PollHandle(proxy.clone())))
}
