//! Integration tests for the IndicatorService cycle:
//! registry → aggregator → signal driver → pause.

use status_blink::BlinkSymbol::{Long, Short};
use status_blink::app::service::IndicatorService;
use status_blink::config::IndicatorConfig;
use status_blink::health::StatusRecord;
use status_blink::{BlinkProtocol, Severity};

use crate::mock_hw::{BrokenPin, MockDelay, MockPin, MockRegistry, Timeline, Wave, decode};

type MockService<'a> = IndicatorService<&'a MockRegistry, MockPin, MockDelay, MockDelay>;

fn make_service<'a>(
    config: &IndicatorConfig,
    registry: &'a MockRegistry,
    timeline: &Timeline,
) -> MockService<'a> {
    IndicatorService::new(
        config,
        registry,
        timeline.pin(),
        timeline.led_delay(),
        timeline.pause_delay(),
    )
}

// ── Heartbeat ─────────────────────────────────────────────────

#[test]
fn healthy_cycle_is_heartbeat_then_pause() {
    let timeline = Timeline::new();
    let registry = MockRegistry::with_values(&[("modbus", "0"), ("spi", "0")]);
    let mut service = make_service(&IndicatorConfig::default(), &registry, &timeline);

    assert_eq!(service.tick().unwrap(), Severity::OK);
    assert_eq!(
        timeline.take(),
        vec![Wave::High, Wave::Wait(100), Wave::Low, Wave::Pause(1000)]
    );
}

#[test]
fn empty_registry_is_healthy() {
    let timeline = Timeline::new();
    let registry = MockRegistry::new(Vec::new());
    let mut service = make_service(&IndicatorConfig::default(), &registry, &timeline);

    assert_eq!(service.tick().unwrap(), Severity::OK);
    let waves = timeline.take();
    assert_eq!(waves.iter().filter(|w| **w == Wave::High).count(), 1);
    assert!(!waves.contains(&Wave::Wait(2000)), "heartbeat must not have a sync gap");
}

// ── Fault blink ───────────────────────────────────────────────

#[test]
fn fault_nine_is_sync_gap_then_long_short_short_long() {
    let timeline = Timeline::new();
    let registry = MockRegistry::with_values(&[("modbus", "9")]);
    let mut service = make_service(&IndicatorConfig::default(), &registry, &timeline);

    assert_eq!(service.tick().unwrap().code(), 9);
    let waves = timeline.take();
    assert_eq!(&waves[..2], &[Wave::Low, Wave::Wait(2000)]);
    assert_eq!(decode(&waves, 600), vec![Long, Short, Short, Long]);
    assert_eq!(waves.last(), Some(&Wave::Pause(1000)));
    // Exactly one gap with the current protocol.
    assert_eq!(waves.iter().filter(|w| **w == Wave::Wait(2000)).count(), 1);
}

#[test]
fn missing_registry_blinks_all_long() {
    let timeline = Timeline::new();
    let registry = MockRegistry::missing();
    let mut service = make_service(&IndicatorConfig::default(), &registry, &timeline);

    assert_eq!(service.tick().unwrap(), Severity::UNREADABLE);
    assert_eq!(decode(&timeline.take(), 600), vec![Long, Long, Long, Long]);
}

#[test]
fn legacy_protocol_sends_eight_bits_between_two_gaps() {
    let timeline = Timeline::new();
    let registry = MockRegistry::with_values(&[("memory", "3")]);
    let config = IndicatorConfig {
        protocol: BlinkProtocol::LEGACY,
        ..IndicatorConfig::default()
    };
    let mut service = make_service(&config, &registry, &timeline);

    service.tick().unwrap();
    let waves = timeline.take();
    assert_eq!(
        decode(&waves, 600),
        vec![Short, Short, Short, Short, Short, Short, Long, Long]
    );
    assert_eq!(waves.iter().filter(|w| **w == Wave::Wait(2000)).count(), 2);
    assert_eq!(
        &waves[waves.len() - 3..],
        &[Wave::Low, Wave::Wait(2000), Wave::Pause(1000)]
    );
}

// ── Ordering and freshness ────────────────────────────────────

#[test]
fn scan_completes_before_led_output() {
    let timeline = Timeline::new();
    let registry = MockRegistry::with_values(&[("a", "5")]).traced(&timeline);
    let mut service = make_service(&IndicatorConfig::default(), &registry, &timeline);

    service.tick().unwrap();
    service.tick().unwrap();
    let waves = timeline.take();

    let scans: Vec<usize> = waves
        .iter()
        .enumerate()
        .filter(|(_, w)| **w == Wave::Scan)
        .map(|(i, _)| i)
        .collect();
    assert_eq!(scans.len(), 2);
    assert_eq!(scans[0], 0, "first cycle must scan before touching the LED");
    // Second scan only after the first cycle's pause.
    assert_eq!(waves[scans[1] - 1], Wave::Pause(1000));
}

#[test]
fn severity_is_recomputed_every_cycle() {
    let timeline = Timeline::new();
    let registry = MockRegistry::with_values(&[("a", "2")]);
    let mut service = make_service(&IndicatorConfig::default(), &registry, &timeline);

    assert_eq!(service.tick().unwrap().code(), 2);
    registry.set(vec![StatusRecord::text("a", "0")]);
    assert_eq!(service.tick().unwrap(), Severity::OK);
    registry.set(vec![StatusRecord::text("a", "6"), StatusRecord::unopenable("b")]);
    assert_eq!(service.tick().unwrap(), Severity::UNREADABLE);

    assert_eq!(registry.scans(), 3);
    assert_eq!(service.cycle_count(), 3);
    assert_eq!(service.last_rendered(), Some(Severity::UNREADABLE));
}

#[test]
fn repeated_ticks_without_change_agree() {
    let timeline = Timeline::new();
    let registry = MockRegistry::with_values(&[("a", "3"), ("b", "7"), ("c", "not-a-number")]);
    let mut service = make_service(&IndicatorConfig::default(), &registry, &timeline);

    let first = service.tick().unwrap();
    let first_waves = timeline.take();
    let second = service.tick().unwrap();
    assert_eq!(first, second);
    assert_eq!(first.code(), 7);
    assert_eq!(first_waves, timeline.take());
}

// ── Failure handling ──────────────────────────────────────────

#[test]
fn broken_pin_still_pauses_and_reports_error() {
    let timeline = Timeline::new();
    let registry = MockRegistry::with_values(&[("a", "1")]);
    let mut service = IndicatorService::new(
        &IndicatorConfig::default(),
        &registry,
        BrokenPin,
        timeline.led_delay(),
        timeline.pause_delay(),
    );

    assert!(service.tick().is_err());
    assert_eq!(timeline.take(), vec![Wave::Pause(1000)]);
    assert_eq!(service.last_rendered(), None);
    assert_eq!(service.cycle_count(), 1);
}
