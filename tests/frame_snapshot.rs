mod common;

use common::{assert_close, engine_sized, level};
use depth_chart_wasm::domain::depth::ReferencePrice;
use depth_chart_wasm::domain::market_data::BookSnapshot;
use insta::assert_json_snapshot;

/// 100x120 canvas, 20px axis strip: chart floor at y=100, 25px per price
/// unit once the window settles at [98, 102].
fn small_frame_engine() -> (common::TestEngine, std::rc::Rc<std::cell::RefCell<common::CallLog>>) {
    engine_sized(100, 120)
}

fn small_book() -> BookSnapshot {
    BookSnapshot::new(vec![level(99.0, 10.0), level(98.0, 10.0)], vec![level(101.0, 10.0)])
}

#[test]
fn small_book_maps_to_exact_pixels() {
    let (mut engine, _log) = small_frame_engine();
    let frame = engine.set_snapshot(small_book()).unwrap();

    assert_eq!(frame.reference, ReferencePrice::Inferred(100.0));
    assert_close(frame.price_window.low, 98.0);
    assert_close(frame.price_window.high, 102.0);
    assert_close(frame.volume_window.max, 40.0);

    let ticks: Vec<f64> = frame.axis.price_tick_offsets.clone();
    assert_eq!(ticks, vec![0.0, 25.0, 75.0]);
    assert_eq!(frame.axis.volume_tick_offsets, vec![50.0, 75.0, 75.0]);
    assert_close(frame.axis.reference_offset, 50.0);

    let extent = frame.zoom_extent.unwrap();
    assert_close(extent.min, 1.0);
    assert_close(extent.max, 1.0);
}

#[test]
fn curve_snapshot() {
    let (mut engine, _log) = small_frame_engine();
    let frame = engine.set_snapshot(small_book()).unwrap();

    assert_json_snapshot!(frame.buy_curve, @r###"
    [
      {
        "x": 25.0,
        "y": 75.0
      },
      {
        "x": 0.0,
        "y": 50.0
      },
      {
        "x": 0.0,
        "y": 50.0
      }
    ]
    "###);

    assert_json_snapshot!(frame.sell_curve, @r###"
    [
      {
        "x": 75.0,
        "y": 75.0
      },
      {
        "x": 100.0,
        "y": 75.0
      }
    ]
    "###);
}

#[test]
fn axis_label_snapshot() {
    let (mut engine, _log) = small_frame_engine();
    let frame = engine.set_snapshot(small_book()).unwrap();

    assert_json_snapshot!(frame.axis.volume_labels, @r###"
    [
      "20",
      "10",
      "10"
    ]
    "###);

    assert_json_snapshot!(frame.axis.price_labels, @r###"
    [
      "98.00",
      "99.00",
      "101.00"
    ]
    "###);
}
