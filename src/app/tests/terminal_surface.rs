use std::convert::Infallible;
use std::io;

use ratatui::Frame;
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::layout::Size;

use crate::app::App;
use crate::config::Config;
use crate::content::Portfolio;

use super::super::terminal_session::TerminalSurface;

pub(crate) struct TestTerminalSurface {
    terminal: Terminal<TestBackend>,
}

impl TestTerminalSurface {
    pub(crate) fn new(width: u16, height: u16) -> io::Result<Self> {
        let terminal = infallible_to_io(Terminal::new(TestBackend::new(width, height)))?;
        Ok(Self { terminal })
    }

    pub(crate) fn rendered_text(&self) -> String {
        format!("{:?}", self.terminal.backend().buffer())
    }
}

impl TerminalSurface for TestTerminalSurface {
    fn size(&self) -> io::Result<Size> {
        infallible_to_io(self.terminal.size())
    }

    fn clear(&mut self) -> io::Result<()> {
        infallible_to_io(self.terminal.clear())
    }

    fn draw<F>(&mut self, render: F) -> io::Result<()>
    where
        F: FnOnce(&mut Frame<'_>),
    {
        infallible_to_io(self.terminal.draw(render)).map(|_| ())
    }
}

fn infallible_to_io<T>(result: Result<T, Infallible>) -> io::Result<T> {
    match result {
        Ok(value) => Ok(value),
        Err(err) => match err {},
    }
}

const CONTENT: &str = r#"
    name = "Amit Khanal"
    tagline = "Engineer and writer"

    [[sections]]
    id = "about"
    label = "About"
    body = ["An engineer who writes."]

    [[sections]]
    id = "contact"
    label = "Contact"
    body = ["amit@example.com"]
"#;

#[test]
fn terminal_surface_supports_size_and_clear() {
    let mut surface = TestTerminalSurface::new(80, 24).expect("test terminal should initialize");
    let size = surface.size().expect("size should resolve");
    assert_eq!(size, Size::new(80, 24));
    surface.clear().expect("clear should succeed");
}

#[test]
fn render_frame_draws_header_document_and_status() {
    let portfolio = Portfolio::from_toml_str(CONTENT).expect("content should parse");
    let mut app = App::new_with_config(portfolio, "portfolio.toml", Config::default())
        .expect("app should initialize");
    let mut surface = TestTerminalSurface::new(80, 24).expect("test terminal should initialize");

    app.render_frame(&mut surface).expect("frame should render");

    let rendered = surface.rendered_text();
    assert!(rendered.contains("Amit Khanal"), "header shows the name");
    assert!(rendered.contains("About"), "nav and heading are visible");
    assert!(rendered.contains("NORMAL"), "status bar shows the mode");
    assert_eq!(app.view.perf.frame_samples, 1);
}
