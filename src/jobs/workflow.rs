//! One full pass: fetch → compute → evaluate → notify.

use crate::error::BotError;
use crate::jobs::context::JobContext;
use crate::jobs::handlers;
use crate::jobs::types::RunOutcome;
use tracing::{error, info, warn};

pub async fn run_pipeline(ctx: &JobContext) -> Result<RunOutcome, BotError> {
    info!("Running signal pipeline");

    let snapshot = handlers::fetch_market(ctx).await?;
    let analysis = handlers::analyze(&snapshot.history)?;
    let signal = analysis.signal.clone();
    info!(
        signal = %signal.signal,
        buy_score = signal.buy_score,
        sell_score = signal.sell_score,
        rationale = %signal.rationale,
        "Signal computed"
    );

    let (subject, report) = handlers::render_report(&analysis, &snapshot, &ctx.currency)?;

    let marker = match ctx.store.load().await {
        Ok(marker) => marker,
        Err(e) => {
            warn!(error = %e, "Could not read signal marker, treating as absent");
            None
        }
    };

    let notification =
        handlers::notify_on_change(signal.signal, marker, &ctx.notifiers, &subject, &report).await;

    if let Some(metrics) = &ctx.metrics {
        for delivery in &notification.deliveries {
            metrics.record_delivery(delivery.channel, delivery.delivered());
        }
    }

    if notification.notified {
        if let Some(new_marker) = notification.marker {
            if let Err(e) = ctx.store.save(new_marker).await {
                error!(error = %e, "Could not persist signal marker");
            }
        }
    }

    info!("Report:\n{}", report);

    Ok(RunOutcome {
        signal,
        subject,
        report,
        notification,
    })
}
