use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender, unbounded_channel};

/// A raw scroll-position notification. Raw because the viewport may report
/// transient negative offsets during overscroll; subscribers normalize.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollNotice {
    pub offset: i64,
}

/// Publish side of the scroll notification stream.
///
/// Delivery per subscriber is in publish order with nothing dropped or
/// reordered; the direction comparison downstream depends on that. A
/// subscriber leaves by dropping its [`ScrollSubscription`]; the feed prunes
/// the closed channel on the next publish, so teardown needs no explicit
/// unregister call.
#[derive(Debug, Default)]
pub struct ScrollFeed {
    subscribers: Vec<UnboundedSender<ScrollNotice>>,
}

impl ScrollFeed {
    pub fn subscribe(&mut self) -> ScrollSubscription {
        let (tx, rx) = unbounded_channel();
        self.subscribers.push(tx);
        ScrollSubscription { rx }
    }

    pub fn publish(&mut self, offset: i64) {
        self.subscribers
            .retain(|tx| tx.send(ScrollNotice { offset }).is_ok());
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}

/// Receive side of the stream; owning it is being subscribed.
#[derive(Debug)]
pub struct ScrollSubscription {
    rx: UnboundedReceiver<ScrollNotice>,
}

impl ScrollSubscription {
    /// Next pending notification, if any. Non-blocking: the event loop
    /// drains between steps rather than awaiting.
    pub fn try_next(&mut self) -> Option<ScrollNotice> {
        self.rx.try_recv().ok()
    }
}
