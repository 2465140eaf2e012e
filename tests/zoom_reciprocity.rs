mod common;

use std::cell::RefCell;
use std::rc::Rc;

use common::{assert_close, engine, sample_book};
use depth_chart_wasm::domain::depth::MIN_SPAN;
use depth_chart_wasm::domain::events::DepthEvent;

#[test]
fn zoom_factor_and_span_are_reciprocal() {
    let (mut engine, log) = engine();
    engine.set_snapshot(sample_book());

    engine.apply_zoom(2.0);
    assert_close(engine.span(), 0.5);
    // Exactly one recompute and one repaint per accepted factor.
    assert_eq!(log.borrow().chart_updates.len(), 2);
    assert_eq!(log.borrow().chart_renders, 2);

    engine.apply_zoom(4.0);
    assert_close(engine.span(), 0.25);

    engine.apply_zoom(0.5);
    assert_close(engine.span(), 2.0);
}

#[test]
fn gesture_publishes_the_full_event_lifecycle() {
    let (mut engine, _log) = engine();
    engine.set_snapshot(sample_book());

    let events: Rc<RefCell<Vec<DepthEvent>>> = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&events);
    engine.subscribe(move |event| sink.borrow_mut().push(event.clone()));

    engine.zoom_started();
    engine.apply_zoom(2.0);
    engine.zoom_ended();

    assert_eq!(
        *events.borrow(),
        vec![
            DepthEvent::ZoomStarted,
            DepthEvent::ZoomChanged { factor: 2.0 },
            DepthEvent::ZoomEnded,
        ]
    );
}

#[test]
fn non_positive_factor_publishes_but_does_not_recompute() {
    let (mut engine, log) = engine();
    engine.set_snapshot(sample_book());
    engine.apply_zoom(2.0);
    let updates_before = log.borrow().chart_updates.len();

    let events: Rc<RefCell<Vec<DepthEvent>>> = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&events);
    engine.subscribe(move |event| sink.borrow_mut().push(event.clone()));

    engine.apply_zoom(0.0);
    engine.apply_zoom(-1.0);

    assert_close(engine.span(), 0.5);
    assert_eq!(log.borrow().chart_updates.len(), updates_before);
    assert_eq!(
        *events.borrow(),
        vec![
            DepthEvent::ZoomChanged { factor: 0.0 },
            DepthEvent::ZoomChanged { factor: -1.0 },
        ]
    );
}

#[test]
fn extreme_zoom_in_clamps_the_span() {
    let (mut engine, _log) = engine();
    engine.set_snapshot(sample_book());

    engine.apply_zoom(1e12);
    assert_close(engine.span(), MIN_SPAN);
}
