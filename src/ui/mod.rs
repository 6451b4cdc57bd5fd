mod chrome;
mod document;
mod layout;
mod overlay;

pub use chrome::draw_chrome;
pub use document::{DocumentLayout, LayoutCache, SectionAnchor, draw_document, layout_document};
pub use layout::{UiLayout, split_layout};
pub use overlay::draw_menu_overlay;
