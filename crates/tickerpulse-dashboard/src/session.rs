//! Dashboard session: the loaded datasets plus the user's current selection.
//!
//! Every accepted [`Interaction`] recomputes the whole [`DashboardView`] from
//! scratch and names the tickers whose prices should be refreshed next.

use serde::Serialize;
use tickerpulse_core::Datasets;

use crate::axis::{DateAxis, DateRange, DateWindow, RangeControl};
use crate::engagement::{engagement_rows, engagement_title, EngagementRow};
use crate::error::SessionError;
use crate::filter::{filter_records, TickerSelection};
use crate::quick::{top_by_mentions, top_by_sentiment};
use crate::registry::TickerRegistry;
use crate::series::{mentions_chart, sentiment_chart, ChartFigure};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Initial,
    Loaded,
    Filtered,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectionState {
    pub range: DateRange,
    pub tickers: TickerSelection,
    pub pinned: Option<String>,
}

impl SelectionState {
    fn full(axis: &DateAxis) -> Self {
        Self {
            range: axis.full_range(),
            tickers: TickerSelection::all(),
            pinned: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Interaction {
    /// Select the inclusive axis indices `a..=b`, in either order.
    SetDateRange(usize, usize),
    /// Replace the ticker selection. An empty list selects every ticker.
    SetTickers(Vec<String>),
    /// Pin a ticker; toggling the pinned ticker again unpins it.
    TogglePin(String),
    TopMentions(usize),
    TopSentiment(usize),
    Reset,
}

/// Everything the renderer needs for one frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardView {
    pub range_label: String,
    pub range_control: RangeControl,
    pub window: Option<DateWindow>,
    pub sentiment: ChartFigure<Option<f64>>,
    pub mentions: ChartFigure<u64>,
    pub engagement_title: String,
    pub engagement: Vec<EngagementRow>,
    pub pinned: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardUpdate {
    pub view: DashboardView,
    /// Tickers whose prices should be refreshed. Empty means no fetch.
    pub price_request: Vec<String>,
}

#[derive(Debug)]
struct Loaded {
    datasets: Datasets,
    axis: DateAxis,
    registry: TickerRegistry,
}

#[derive(Debug)]
pub struct DashboardSession {
    loaded: Option<Loaded>,
    selection: SelectionState,
    phase: Phase,
}

impl Default for DashboardSession {
    fn default() -> Self {
        Self::new()
    }
}

impl DashboardSession {
    #[must_use]
    pub fn new() -> Self {
        Self {
            loaded: None,
            selection: SelectionState {
                range: DateRange::new(0, 0),
                tickers: TickerSelection::all(),
                pinned: None,
            },
            phase: Phase::Initial,
        }
    }

    /// Take ownership of the datasets and derive the axis and registry.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::AlreadyLoaded`] if called more than once.
    pub fn load(&mut self, datasets: Datasets) -> Result<DashboardUpdate, SessionError> {
        if self.loaded.is_some() {
            return Err(SessionError::AlreadyLoaded);
        }

        let axis = DateAxis::from_sentiment(&datasets.sentiment);
        let registry = TickerRegistry::build(&datasets.sentiment, &datasets.mentions);
        tracing::info!(
            dates = axis.len(),
            tickers = registry.tickers().len(),
            "dashboard session loaded"
        );

        self.selection = SelectionState::full(&axis);
        self.loaded = Some(Loaded {
            datasets,
            axis,
            registry,
        });
        self.phase = Phase::Loaded;
        self.update()
    }

    /// Apply one user interaction and recompute the view.
    ///
    /// A rejected interaction leaves the selection unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::NotLoaded`] before [`load`](Self::load),
    /// [`SessionError::RangeDisabled`] when the axis has fewer than two dates,
    /// and [`SessionError::RangeOutOfBounds`] for an index past the last date.
    pub fn dispatch(&mut self, interaction: Interaction) -> Result<DashboardUpdate, SessionError> {
        let loaded = self.loaded.as_ref().ok_or(SessionError::NotLoaded)?;

        match interaction {
            Interaction::SetDateRange(a, b) => {
                let range = checked_range(&loaded.axis, a, b)?;
                self.selection.range = range;
                self.phase = Phase::Filtered;
            }
            Interaction::SetTickers(tickers) => {
                self.selection.tickers = TickerSelection::of(tickers);
                self.phase = Phase::Filtered;
            }
            Interaction::TogglePin(ticker) => {
                if self.selection.pinned.as_deref() == Some(ticker.as_str()) {
                    self.selection.pinned = None;
                } else {
                    self.selection.pinned = Some(ticker);
                }
                self.phase = Phase::Filtered;
            }
            Interaction::TopMentions(n) => {
                self.selection.tickers =
                    TickerSelection::of(top_by_mentions(&loaded.datasets.mentions, n));
                self.phase = Phase::Filtered;
            }
            Interaction::TopSentiment(n) => {
                self.selection.tickers =
                    TickerSelection::of(top_by_sentiment(&loaded.datasets.sentiment, n));
                self.phase = Phase::Filtered;
            }
            Interaction::Reset => {
                self.selection = SelectionState::full(&loaded.axis);
                self.phase = Phase::Loaded;
            }
        }

        tracing::debug!(
            phase = ?self.phase,
            start = self.selection.range.start,
            end = self.selection.range.end,
            tickers = self.selection.tickers.tickers().len(),
            pinned = ?self.selection.pinned,
            "selection updated"
        );
        self.update()
    }

    /// The current view without changing the selection.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::NotLoaded`] before [`load`](Self::load).
    pub fn view(&self) -> Result<DashboardView, SessionError> {
        let loaded = self.loaded.as_ref().ok_or(SessionError::NotLoaded)?;
        Ok(self.compute_view(loaded))
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    #[must_use]
    pub fn axis(&self) -> Option<&DateAxis> {
        self.loaded.as_ref().map(|l| &l.axis)
    }

    #[must_use]
    pub fn registry(&self) -> Option<&TickerRegistry> {
        self.loaded.as_ref().map(|l| &l.registry)
    }

    fn update(&self) -> Result<DashboardUpdate, SessionError> {
        Ok(DashboardUpdate {
            view: self.view()?,
            price_request: self.selection.tickers.tickers().to_vec(),
        })
    }

    fn compute_view(&self, loaded: &Loaded) -> DashboardView {
        let Loaded {
            datasets,
            axis,
            registry,
        } = loaded;
        let selection = &self.selection;
        let pinned = selection.pinned.as_deref();

        let window = axis.window(selection.range);
        let dates = axis.dates_in(selection.range);
        let range_control = axis.range_control();
        let range_label = match (&range_control, &window) {
            (RangeControl::Enabled { .. }, Some(w)) => w.label(),
            _ => range_control.label(axis),
        };

        let sentiment = filter_records(&datasets.sentiment, window.as_ref(), &selection.tickers);
        let mentions = filter_records(&datasets.mentions, window.as_ref(), &selection.tickers);

        DashboardView {
            range_label,
            range_control,
            sentiment: sentiment_chart(&sentiment, dates, registry, pinned),
            mentions: mentions_chart(&mentions, dates, registry, pinned),
            engagement_title: engagement_title(window.as_ref()),
            engagement: engagement_rows(
                &datasets.mentions,
                &datasets.sentiment,
                window.as_ref(),
                &selection.tickers,
                registry,
            ),
            window,
            pinned: selection.pinned.clone(),
        }
    }
}

fn checked_range(axis: &DateAxis, a: usize, b: usize) -> Result<DateRange, SessionError> {
    let max_index = match axis.range_control() {
        RangeControl::Enabled { max_index } => max_index,
        disabled @ RangeControl::Disabled { .. } => {
            return Err(SessionError::RangeDisabled {
                reason: disabled.label(axis),
            });
        }
    };
    let range = DateRange::new(a, b);
    if range.end > max_index {
        return Err(SessionError::RangeOutOfBounds {
            index: range.end,
            max_index,
        });
    }
    Ok(range)
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
