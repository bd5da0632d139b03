//! # Text Surface
//!
//! Renders frames as plain lines on any `Write`. The binary uses it on stdout.

use std::io::Write;

use super::views::{Counter, Frame, RateBody, ScreenView};
use super::RenderSurface;
use crate::app::state::{Notification, NotificationLevel};
use crate::core::error::Result;

pub struct TextSurface<W: Write> {
    out: W,
}

impl<W: Write> TextSurface<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn counters(&mut self, counters: &[Counter]) -> Result<()> {
        if counters.is_empty() {
            writeln!(self.out, "  (stats loading)")?;
            return Ok(());
        }
        let line = counters
            .iter()
            .map(|(label, value)| format!("{}: {}", label, value))
            .collect::<Vec<_>>()
            .join(" | ");
        writeln!(self.out, "  {}", line)?;
        Ok(())
    }
}

impl<W: Write> RenderSurface for TextSurface<W> {
    fn draw(&mut self, frame: &Frame) -> Result<()> {
        writeln!(
            self.out,
            "=== {} === [{}]{}",
            frame.title,
            frame.connection.label(),
            frame
                .operator
                .as_deref()
                .map(|name| format!(" operator: {}", name))
                .unwrap_or_default()
        )?;

        match &frame.view {
            ScreenView::Login(view) => {
                if !view.username.is_empty() {
                    writeln!(self.out, "  user: {}", view.username)?;
                }
                if let Some(message) = &view.message {
                    writeln!(self.out, "  {}", message)?;
                }
                if !view.in_flight {
                    writeln!(self.out, "  login <user> <password>")?;
                }
            }
            ScreenView::Dashboard(view) => {
                self.counters(&view.counters)?;
                for row in &view.sources {
                    writeln!(
                        self.out,
                        "  {:<24} {:<10} {:>6} deals  last: {}",
                        row.name, row.source_type, row.deal_count, row.last_scraped
                    )?;
                }
            }
            ScreenView::Scrapers(view) => {
                for source in &view.sources {
                    writeln!(
                        self.out,
                        "  [{}] {:<24} {:<10} last: {}{}",
                        source.id,
                        source.name,
                        source.source_type,
                        source.last_scraped,
                        if source.scraping { "  (scraping)" } else { "" }
                    )?;
                }
                if let Some(panel) = &view.panel {
                    writeln!(self.out, "  > {}", panel)?;
                }
            }
            ScreenView::Deals(view) => {
                writeln!(self.out, "  {}", view.filters)?;
                writeln!(self.out, "  {}", view.summary)?;
                for row in &view.rows {
                    writeln!(
                        self.out,
                        "  #{:<6} {:<24} {:<32} {:<8} {}",
                        row.id, row.merchant, row.title, row.discount, row.category
                    )?;
                }
            }
            ScreenView::Rate(view) => {
                self.counters(&view.counters)?;
                match &view.body {
                    RateBody::Loading => writeln!(self.out, "  Loading...")?,
                    RateBody::Completed(message) => writeln!(self.out, "  {}", message)?,
                    RateBody::Card(card) => {
                        writeln!(self.out, "  {}", card.position)?;
                        writeln!(self.out, "  {} - {}", card.merchant, card.title)?;
                        writeln!(self.out, "  Discount: {}  Category: {}", card.discount, card.category)?;
                        if let Some(description) = &card.description {
                            writeln!(self.out, "  {}", description)?;
                        }
                        if let Some(valid_until) = &card.valid_until {
                            writeln!(self.out, "  Valid until: {}", valid_until)?;
                        }
                        if let Some(cards) = &card.cards {
                            writeln!(self.out, "  Cards: {}", cards)?;
                        }
                    }
                }
            }
        }

        self.out.flush()?;
        Ok(())
    }

    fn notify(&mut self, notification: &Notification) -> Result<()> {
        let tag = match notification.level {
            NotificationLevel::Info => "info",
            NotificationLevel::Success => "ok",
            NotificationLevel::Warning => "warn",
            NotificationLevel::Error => "error",
        };
        writeln!(self.out, "[{}] {}", tag, notification.message)?;
        self.out.flush()?;
        Ok(())
    }

    fn error(&mut self, message: &str) -> Result<()> {
        writeln!(self.out, "! {}", message)?;
        self.out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::{AppState, ConnectionState, ReviewPhase, Screen};

    fn render(state: &AppState) -> String {
        let mut surface = TextSurface::new(Vec::new());
        surface.draw(&Frame::from_state(state)).unwrap();
        String::from_utf8(surface.into_inner()).unwrap()
    }

    #[test]
    fn test_header_shows_title_connection_and_operator() {
        let mut state = AppState::new(Screen::Dashboard, 100);
        state.connection = ConnectionState::Connected;
        state.operator = Some("admin".to_string());

        let text = render(&state);
        assert!(text.starts_with("=== Dashboard === [Connected] operator: admin"));
    }

    #[test]
    fn test_completed_review_prints_message() {
        let mut state = AppState::new(Screen::Rate, 100);
        state.review.phase = ReviewPhase::Completed;
        assert!(render(&state).contains("All deals rated! 🎉"));
    }

    #[test]
    fn test_notifications_are_tagged() {
        let mut surface = TextSurface::new(Vec::new());
        surface
            .notify(&Notification::error("Connection failed. Check backend URL."))
            .unwrap();
        surface.error("Unknown command 'dance'").unwrap();
        let text = String::from_utf8(surface.into_inner()).unwrap();
        assert_eq!(
            text,
            "[error] Connection failed. Check backend URL.\n! Unknown command 'dance'\n"
        );
    }
}
