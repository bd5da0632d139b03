//! # View Models
//!
//! Plain data the rendering surface draws. Built from [`AppState`] in one
//! pass; every placeholder rule (`Never`, `N/A`, `other`) is applied here so
//! surfaces only lay out strings.

use shared::{category_or_other, format_last_scraped, or_na, Deal, RatingStats};

use crate::app::REVIEW_COMPLETE_MESSAGE;
use crate::app::state::{scrape_key, AppState, ConnectionState, ReviewPhase, Screen};

/// One full redraw
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub title: &'static str,
    pub connection: ConnectionState,
    pub operator: Option<String>,
    pub view: ScreenView,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScreenView {
    Login(LoginView),
    Dashboard(DashboardView),
    Scrapers(ScrapersView),
    Deals(DealsView),
    Rate(RateView),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginView {
    pub username: String,
    pub message: Option<String>,
    pub in_flight: bool,
}

/// Label/value pair for a stats card
pub type Counter = (&'static str, u64);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardView {
    /// Empty until stats have loaded
    pub counters: Vec<Counter>,
    pub sources: Vec<SourceStatusRow>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceStatusRow {
    pub name: String,
    pub source_type: String,
    pub deal_count: u64,
    pub last_scraped: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrapersView {
    pub sources: Vec<SourceRow>,
    /// Result panel text, when shown
    pub panel: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceRow {
    pub id: i64,
    pub name: String,
    pub source_type: String,
    pub last_scraped: String,
    pub scraping: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DealsView {
    pub filters: String,
    /// `"{total} deals"`, `"No deals found"` or `"Loading..."`
    pub summary: String,
    pub rows: Vec<DealRow>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DealRow {
    pub id: i64,
    pub merchant: String,
    pub title: String,
    pub discount: String,
    pub category: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RateView {
    pub counters: Vec<Counter>,
    pub body: RateBody,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RateBody {
    Loading,
    Card(DealCard),
    Completed(&'static str),
}

/// The deal under review
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DealCard {
    pub id: i64,
    /// `"Deal {n} of {len}"`
    pub position: String,
    pub merchant: String,
    pub title: String,
    pub discount: String,
    pub category: String,
    pub description: Option<String>,
    pub valid_until: Option<String>,
    pub cards: Option<String>,
}

impl Frame {
    pub fn from_state(state: &AppState) -> Self {
        let view = match state.current_screen {
            Screen::Login => ScreenView::Login(LoginView {
                username: state.login.username.clone(),
                message: state.login.message.clone(),
                in_flight: state.login.in_flight,
            }),
            Screen::Dashboard => ScreenView::Dashboard(dashboard_view(state)),
            Screen::Scrapers => ScreenView::Scrapers(scrapers_view(state)),
            Screen::Deals => ScreenView::Deals(deals_view(state)),
            Screen::Rate => ScreenView::Rate(rate_view(state)),
        };

        Self {
            title: state.current_screen.title(),
            connection: state.connection,
            operator: state.operator.clone(),
            view,
        }
    }
}

fn dashboard_view(state: &AppState) -> DashboardView {
    let counters = state
        .dashboard
        .stats
        .as_ref()
        .map(|stats| {
            vec![
                ("Total Deals", stats.total_deals),
                ("New Deals", stats.new_deals),
                ("Good Deals", stats.good_deals),
                ("Structured", stats.total_structured),
            ]
        })
        .unwrap_or_default();

    let sources = state
        .dashboard
        .sources
        .iter()
        .map(|row| SourceStatusRow {
            name: row.name.clone(),
            source_type: row.source_type.clone(),
            deal_count: row.deal_count,
            last_scraped: format_last_scraped(row.last_scraped.as_deref()),
        })
        .collect();

    DashboardView { counters, sources }
}

fn scrapers_view(state: &AppState) -> ScrapersView {
    let sources = state
        .scrapers
        .sources
        .iter()
        .map(|source| SourceRow {
            id: source.id,
            name: source.name.clone(),
            source_type: source.source_type.clone(),
            last_scraped: format_last_scraped(source.last_scraped.as_deref()),
            scraping: state.is_in_flight(&scrape_key(source.id)),
        })
        .collect();

    ScrapersView {
        sources,
        panel: state.scrapers.panel.text().map(str::to_string),
    }
}

fn deals_view(state: &AppState) -> DealsView {
    let query = &state.deals.query;
    let filters = format!(
        "search: {} | category: {}",
        query.search.as_deref().unwrap_or("-"),
        query.category.as_deref().unwrap_or("all")
    );

    let (summary, rows) = match &state.deals.page {
        None => ("Loading...".to_string(), Vec::new()),
        Some(page) if page.deals.is_empty() => ("No deals found".to_string(), Vec::new()),
        Some(page) => (
            format!("{} deals", page.total),
            page.deals.iter().map(deal_row).collect(),
        ),
    };

    DealsView {
        filters,
        summary,
        rows,
    }
}

fn deal_row(deal: &Deal) -> DealRow {
    DealRow {
        id: deal.id,
        merchant: deal.merchant_name.clone(),
        title: deal.offer_title.clone(),
        discount: or_na(deal.discount_value.as_deref()).to_string(),
        category: category_or_other(deal.category.as_deref()).to_string(),
    }
}

fn rating_counters(stats: Option<&RatingStats>) -> Vec<Counter> {
    match stats {
        Some(stats) => vec![
            ("Good", stats.good),
            ("Mediocre", stats.mediocre),
            ("Bad", stats.bad),
        ],
        None => Vec::new(),
    }
}

fn rate_view(state: &AppState) -> RateView {
    let review = &state.review;
    let body = match review.phase {
        ReviewPhase::Idle | ReviewPhase::Loading => RateBody::Loading,
        ReviewPhase::Completed => RateBody::Completed(REVIEW_COMPLETE_MESSAGE),
        ReviewPhase::Reviewing => match (review.queue.current(), review.queue.position()) {
            (Some(deal), Some((n, len))) => RateBody::Card(DealCard {
                id: deal.id,
                position: format!("Deal {} of {}", n, len),
                merchant: deal.merchant_name.clone(),
                title: deal.offer_title.clone(),
                discount: or_na(deal.discount_value.as_deref()).to_string(),
                category: category_or_other(deal.category.as_deref()).to_string(),
                description: deal.description.clone().filter(|d| !d.is_empty()),
                valid_until: deal.valid_until.clone(),
                cards: deal.applicable_cards.clone(),
            }),
            // Exhausted with a refill about to start
            _ => RateBody::Loading,
        },
    };

    RateView {
        counters: rating_counters(review.stats.as_ref()),
        body,
    }
}
