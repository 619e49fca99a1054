//! Unit tests for change detection

use btcsignal::models::signal::Signal;
use btcsignal::signals::change::should_notify;

#[test]
fn test_first_signal_always_notifies() {
    assert!(should_notify(Signal::Wait, None));
    assert!(should_notify(Signal::Buy, None));
}

#[test]
fn test_unchanged_signal_is_silent() {
    for signal in [Signal::Buy, Signal::Sell, Signal::Wait] {
        assert!(!should_notify(signal, Some(signal)));
    }
}

#[test]
fn test_changed_signal_notifies() {
    assert!(should_notify(Signal::Sell, Some(Signal::Buy)));
    assert!(should_notify(Signal::Wait, Some(Signal::Sell)));
}
