mod controller;
mod feed;

pub use controller::{AnchorSource, NavController, NavPolicy, NavRequest, ScrollOutcome, SectionChange};
pub use feed::{ScrollFeed, ScrollNotice, ScrollSubscription};
