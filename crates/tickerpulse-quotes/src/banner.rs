//! Display model for the scrolling stock-ticker banner.

use std::fmt;

use serde::Serialize;

use crate::cache::PriceQuote;

pub const PROMPT_TEXT: &str = "Select tickers to see current stock prices";
pub const EMPTY_TEXT: &str = "No tickers selected";

const RATE_LIMIT_LABEL: &str = "API Limit";
const ERROR_LABEL: &str = "Error";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Flat,
}

impl Direction {
    fn of(change: f64) -> Self {
        if change > 0.0 {
            Direction::Up
        } else if change < 0.0 {
            Direction::Down
        } else {
            Direction::Flat
        }
    }

    #[must_use]
    pub fn symbol(self) -> &'static str {
        match self {
            Direction::Up => "▲",
            Direction::Down => "▼",
            Direction::Flat => "–",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum BannerItem {
    Price {
        ticker: String,
        price: f64,
        change: f64,
        change_percent: f64,
        direction: Direction,
    },
    Unavailable {
        ticker: String,
        label: &'static str,
    },
}

impl BannerItem {
    /// A quote with an error or without a price renders as unavailable;
    /// throttled quotes get their own short label.
    #[must_use]
    pub fn from_quote(quote: &PriceQuote) -> Self {
        match (quote.price, &quote.error) {
            (Some(price), None) => {
                let change = quote.change.unwrap_or(0.0);
                BannerItem::Price {
                    ticker: quote.ticker.clone(),
                    price,
                    change,
                    change_percent: quote.change_percent.unwrap_or(0.0),
                    direction: Direction::of(change),
                }
            }
            _ => BannerItem::Unavailable {
                ticker: quote.ticker.clone(),
                label: if quote.is_rate_limited() {
                    RATE_LIMIT_LABEL
                } else {
                    ERROR_LABEL
                },
            },
        }
    }
}

impl fmt::Display for BannerItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BannerItem::Price {
                ticker,
                price,
                change,
                change_percent,
                direction,
            } => write!(
                f,
                "{ticker} ${price:.2} {} {:.2} ({change_percent:.2}%)",
                direction.symbol(),
                change.abs()
            ),
            BannerItem::Unavailable { ticker, label } => write!(f, "{ticker} {label}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "items", rename_all = "snake_case")]
pub enum Banner {
    /// Nothing selected; no prices were requested.
    Prompt,
    /// A refresh returned no quotes.
    Empty,
    Items(Vec<BannerItem>),
}

impl Banner {
    #[must_use]
    pub fn for_selection(selected: &[String], quotes: &[PriceQuote]) -> Self {
        if selected.is_empty() {
            Banner::Prompt
        } else if quotes.is_empty() {
            Banner::Empty
        } else {
            Banner::Items(quotes.iter().map(BannerItem::from_quote).collect())
        }
    }
}

impl fmt::Display for Banner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Banner::Prompt => f.write_str(PROMPT_TEXT),
            Banner::Empty => f.write_str(EMPTY_TEXT),
            Banner::Items(items) => {
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str("   ")?;
                    }
                    write!(f, "{item}")?;
                }
                Ok(())
            }
        }
    }
}
