//! Individual pipeline steps.

use crate::error::BotError;
use crate::indicators::IndicatorEngine;
use crate::jobs::context::JobContext;
use crate::jobs::types::{Analysis, MarketSnapshot, NotificationOutcome};
use crate::models::price::PriceSeries;
use crate::models::signal::Signal;
use crate::services::notifications::report::{self, ReportContext};
use crate::services::notifications::{dispatch_all, Notifier};
use crate::signals::change::should_notify;
use crate::signals::engine::{change_24h, SignalEngine};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Fetch history, spot price and FX rate concurrently. Only a history failure
/// is fatal; the other two degrade to `None`.
pub async fn fetch_market(ctx: &JobContext) -> Result<MarketSnapshot, BotError> {
    let (history, spot, rate) = tokio::join!(
        ctx.data_provider.get_history(ctx.lookback_days),
        ctx.data_provider.get_spot_price(),
        ctx.data_provider.get_reference_rate(),
    );

    let spot_price = match spot {
        Ok(price) => Some(price),
        Err(e) => {
            warn!(error = %e, "Spot price unavailable");
            None
        }
    };
    let usd_rate = match rate {
        Ok(rate) => Some(rate),
        Err(e) => {
            warn!(error = %e, "USD reference rate unavailable");
            None
        }
    };

    let history = history?;
    info!(
        points = history.len(),
        days = ctx.lookback_days,
        "Fetched {} price points",
        history.len()
    );

    Ok(MarketSnapshot {
        history,
        spot_price,
        usd_rate,
    })
}

/// Indicators, signal and 24h return for a history. Pure.
pub fn analyze(history: &PriceSeries) -> Result<Analysis, BotError> {
    let series = IndicatorEngine::compute(history)?;
    let signal = SignalEngine::evaluate(&series);
    let change_24h = change_24h(&series.closes());

    for reason in &signal.reasons {
        debug!(rule = %reason.description, "Rule fired");
    }

    Ok(Analysis {
        series,
        signal,
        change_24h,
    })
}

/// Subject line and body of the notification for this run.
pub fn render_report(
    analysis: &Analysis,
    snapshot: &MarketSnapshot,
    currency: &str,
) -> Result<(String, String), BotError> {
    let latest = analysis
        .series
        .latest()
        .ok_or_else(|| BotError::InsufficientData("no rows to report".to_string()))?;

    let ctx = ReportContext {
        signal: &analysis.signal,
        latest,
        spot_price: snapshot.spot_price,
        usd_rate: snapshot.usd_rate,
        change_24h: analysis.change_24h,
        currency,
    };

    Ok((
        report::subject(analysis.signal.signal, currency),
        report::render(&ctx),
    ))
}

/// Dispatch through every channel iff `signal` differs from `marker` (or no
/// marker exists). The returned marker is the value to persist: the new
/// signal once all attempts have completed, whatever their individual results.
pub async fn notify_on_change(
    signal: Signal,
    marker: Option<Signal>,
    notifiers: &[Arc<dyn Notifier>],
    subject: &str,
    body: &str,
) -> NotificationOutcome {
    if !should_notify(signal, marker) {
        info!(signal = %signal, "Signal unchanged, no alert sent");
        return NotificationOutcome {
            previous: marker,
            notified: false,
            deliveries: Vec::new(),
            marker,
        };
    }

    info!(
        signal = %signal,
        previous = ?marker,
        channels = notifiers.len(),
        "Signal changed, sending alert"
    );
    if notifiers.is_empty() {
        warn!("No notification channels configured");
    }
    let deliveries = dispatch_all(notifiers, subject, body).await;

    NotificationOutcome {
        previous: marker,
        notified: true,
        deliveries,
        marker: Some(signal),
    }
}
