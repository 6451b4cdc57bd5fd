mod scroll_flow;
mod terminal_surface;
