use std::collections::VecDeque;

use crate::config::Config;
use crate::content::Portfolio;
use crate::error::AppResult;
use crate::perf::FrameStats;
use crate::scroll::{NavController, NavPolicy, ScrollFeed, ScrollSubscription};
use crate::ui::LayoutCache;

use super::animator::ScrollAnimator;
use super::state::{AppState, MenuRequest};

const LAYOUT_CACHE_ENTRIES: usize = 4;

/// The controller plus its notification plumbing. The controller holds its
/// subscription for as long as it lives; dropping the subsystem
/// unsubscribes it.
pub struct NavSubsystem {
    pub controller: NavController,
    pub feed: ScrollFeed,
    pub(crate) subscription: ScrollSubscription,
}

pub struct ViewSubsystem {
    pub(crate) animator: ScrollAnimator,
    pub(crate) layouts: LayoutCache,
    pub perf: FrameStats,
}

#[derive(Default)]
pub struct InteractionSubsystem {
    pub(crate) pending_menu: VecDeque<MenuRequest>,
}

pub struct App {
    pub state: AppState,
    pub nav: NavSubsystem,
    pub view: ViewSubsystem,
    pub interaction: InteractionSubsystem,
    pub config: Config,
    pub content: Portfolio,
    pub(crate) source_name: String,
}

impl App {
    pub fn new(content: Portfolio, source_name: impl Into<String>) -> AppResult<Self> {
        let config = Config::load()?;
        Self::new_with_config(content, source_name, config)
    }

    pub fn new_with_config(
        content: Portfolio,
        source_name: impl Into<String>,
        config: Config,
    ) -> AppResult<Self> {
        let controller = NavController::new(
            content.nav_items(),
            content.initial_index(),
            NavPolicy {
                hide_header_threshold: config.scroll.hide_header_threshold,
                active_look_ahead: config.scroll.active_look_ahead,
            },
        )?;
        let mut feed = ScrollFeed::default();
        let subscription = feed.subscribe();

        Ok(Self {
            state: AppState::default(),
            nav: NavSubsystem {
                controller,
                feed,
                subscription,
            },
            view: ViewSubsystem {
                animator: ScrollAnimator::new(config.scroll.animation_ease_divisor),
                layouts: LayoutCache::new(LAYOUT_CACHE_ENTRIES),
                perf: FrameStats::default(),
            },
            interaction: InteractionSubsystem::default(),
            config,
            content,
            source_name: source_name.into(),
        })
    }
}
