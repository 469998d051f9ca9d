//! Dashboard computations for tickerpulse.
//!
//! Derives the date axis and ticker registry from the loaded datasets, filters
//! and aggregates records for the current selection, and builds the data for
//! the three charts. [`DashboardSession`] owns all of it and recomputes the
//! full view on every interaction.

pub mod axis;
pub mod engagement;
pub mod error;
pub mod filter;
pub mod quick;
pub mod registry;
pub mod series;
pub mod session;

pub use axis::{format_short, DateAxis, DateRange, DateWindow, RangeControl};
pub use engagement::{engagement_rows, engagement_title, EngagementRow};
pub use error::SessionError;
pub use filter::{aggregate_by_ticker, filter_records, Filtered, TickerAggregate, TickerSelection};
pub use quick::{top_by_mentions, top_by_sentiment};
pub use registry::{TickerRegistry, PALETTE};
pub use series::{ChartFigure, ChartSeries, Emphasis};
pub use session::{
    DashboardSession, DashboardUpdate, DashboardView, Interaction, Phase, SelectionState,
};
