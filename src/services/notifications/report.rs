//! Plain-text report shared by every notification channel.

use crate::models::indicators::IndicatorRow;
use crate::models::signal::{Signal, SignalOutput};
use std::fmt::Write;

pub struct ReportContext<'a> {
    pub signal: &'a SignalOutput,
    /// Latest point of the history; its timestamp and close head the report.
    pub latest: &'a IndicatorRow,
    pub spot_price: Option<f64>,
    /// Units of `currency` per one USD.
    pub usd_rate: Option<f64>,
    pub change_24h: Option<f64>,
    /// Uppercase currency code, e.g. `CLP`.
    pub currency: &'a str,
}

pub fn subject(signal: Signal, currency: &str) -> String {
    format!("BTC/{} alert - {}", currency, signal)
}

pub fn render(ctx: &ReportContext<'_>) -> String {
    let row = ctx.latest;
    let mut out = String::new();

    // Writing to a String cannot fail.
    let _ = writeln!(out, "Signal: {}", ctx.signal.signal);
    let _ = writeln!(out, "Date: {}", row.timestamp.format("%Y-%m-%d %H:%M"));
    let _ = writeln!(out, "Reason: {}", ctx.signal.rationale);
    let _ = writeln!(
        out,
        "Estimated price: {} {}",
        format_thousands(row.close, 2),
        ctx.currency
    );
    match ctx.spot_price {
        Some(price) => {
            let _ = writeln!(out, "Spot price: {} {}", format_thousands(price, 0), ctx.currency);
        }
        None => {
            let _ = writeln!(out, "Spot price: unavailable");
        }
    }
    if let Some(rate) = ctx.usd_rate {
        let _ = writeln!(
            out,
            "USD reference: 1 USD = {} {} (approx. {} USD)",
            format_thousands(rate, 2),
            ctx.currency,
            format_thousands(row.close / rate, 2)
        );
    }

    let _ = writeln!(
        out,
        "RSI: {} | EMA9: {} | EMA21: {}",
        fmt_opt(row.rsi),
        fmt_opt(row.ema9),
        fmt_opt(row.ema21)
    );
    let _ = writeln!(
        out,
        "MACD: {} / Signal: {}",
        fmt_opt(row.macd),
        fmt_opt(row.macd_signal)
    );
    let _ = writeln!(
        out,
        "Bollinger Bands: {} - {} - {}",
        fmt_opt(row.bb_lower),
        fmt_opt(row.bb_middle),
        fmt_opt(row.bb_upper)
    );
    let _ = writeln!(out, "ADX: {}", fmt_opt(row.adx));
    let _ = writeln!(
        out,
        "Stochastic: K={} | D={}",
        fmt_opt(row.stoch_k),
        fmt_opt(row.stoch_d)
    );

    match ctx.change_24h {
        Some(change) => {
            let _ = writeln!(out, "\n24h return: {:.2}%", change);
        }
        None => {
            let _ = writeln!(out, "\n24h return: unavailable");
        }
    }
    let _ = writeln!(out, "\nRecommendation based on automated technical analysis.");

    out
}

fn fmt_opt(value: Option<f64>) -> String {
    match value {
        Some(v) if v.is_finite() => format!("{:.2}", v),
        _ => "n/a".to_string(),
    }
}

/// Fixed-point formatting with `,` grouping the integer digits.
pub fn format_thousands(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = match formatted.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (formatted.as_str(), None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if value < 0.0 && formatted.chars().any(|c| c != '0' && c != '.') {
        "-"
    } else {
        ""
    };
    match frac_part {
        Some(frac) => format!("{}{}.{}", sign, grouped, frac),
        None => format!("{}{}", sign, grouped),
    }
}
