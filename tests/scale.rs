mod common;

use common::assert_close;
use depth_chart_wasm::domain::depth::LinearScale;

#[test]
fn maps_domain_endpoints_to_range_endpoints() {
    let scale = LinearScale::new((96.0, 104.0), (0.0, 800.0));
    assert_close(scale.map(96.0), 0.0);
    assert_close(scale.map(104.0), 800.0);
    assert_close(scale.map(100.0), 400.0);
}

#[test]
fn inverted_range_flips_direction() {
    let scale = LinearScale::new((0.0, 70.0), (400.0, 0.0));
    assert_close(scale.map(0.0), 400.0);
    assert_close(scale.map(70.0), 0.0);
    assert_close(scale.map(35.0), 200.0);
}

#[test]
fn extrapolates_outside_the_domain() {
    let scale = LinearScale::new((0.0, 10.0), (0.0, 100.0));
    assert_close(scale.map(-5.0), -50.0);
    assert_close(scale.map(15.0), 150.0);
}

#[test]
fn invert_undoes_map() {
    let scale = LinearScale::new((96.0, 104.0), (0.0, 800.0));
    assert_close(scale.invert(scale.map(99.25)), 99.25);
    assert_close(scale.invert(0.0), 96.0);
}

#[test]
fn degenerate_domain_maps_to_range_start() {
    let scale = LinearScale::new((100.0, 100.0), (0.0, 800.0));
    assert_close(scale.map(100.0), 0.0);
    assert_close(scale.map(123.0), 0.0);
}

#[test]
fn degenerate_range_inverts_to_domain_start() {
    let scale = LinearScale::new((0.0, 10.0), (50.0, 50.0));
    assert_close(scale.invert(50.0), 0.0);
}
