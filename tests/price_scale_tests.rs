use approx::assert_relative_eq;
use terminal_chart::core::{Bar, MIN_PRICE_SPAN, PriceScale};
use terminal_chart::error::ChartError;

fn bar_with_envelope(high: f64, low: f64) -> Bar {
    let mid = (high + low) * 0.5;
    Bar::new(0.0, mid, high, low, mid).expect("valid bar")
}

#[test]
fn scale_spans_the_high_low_envelope() {
    let bars = vec![
        bar_with_envelope(10.0, 5.0),
        bar_with_envelope(12.0, 6.0),
        bar_with_envelope(8.0, 4.0),
    ];

    let scale = PriceScale::from_bars(&bars, 100.0).expect("scale");
    assert_eq!(scale.domain(), (4.0, 12.0));
}

#[test]
fn empty_visible_range_is_rejected() {
    let result = PriceScale::from_bars(&[], 100.0);
    assert!(matches!(result, Err(ChartError::EmptyVisibleRange)));
}

#[test]
fn px_per_point_and_close_line_match_reference_scenario() {
    // Single bar: open 100, close 110, high 115, low 95 on a 200px surface.
    let bar = Bar::new(0.0, 100.0, 115.0, 95.0, 110.0).expect("valid bar");
    let scale = PriceScale::from_bars(&[bar], 200.0).expect("scale");

    assert_relative_eq!(scale.px_per_point(), 10.0);
    assert_relative_eq!(scale.price_to_pixel(110.0).expect("close y"), 50.0);
}

#[test]
fn higher_prices_map_to_smaller_pixel_y() {
    let scale = PriceScale::new(0.0, 100.0, 400.0).expect("scale");

    let top = scale.price_to_pixel(100.0).expect("top");
    let bottom = scale.price_to_pixel(0.0).expect("bottom");
    assert_eq!(top, 0.0);
    assert_eq!(bottom, 400.0);
}

#[test]
fn flat_range_is_widened_to_minimum_span() {
    let bars = vec![bar_with_envelope(42.0, 42.0)];

    let scale = PriceScale::from_bars(&bars, 100.0).expect("scale");
    let (min, max) = scale.domain();

    assert!(min < 42.0);
    assert!(max > 42.0);
    assert_relative_eq!(max - min, MIN_PRICE_SPAN, epsilon = 1e-12);
    assert!(scale.px_per_point().is_finite());
}

#[test]
fn explicit_degenerate_domain_is_rejected() {
    let result = PriceScale::new(42.0, 42.0, 100.0);
    assert!(matches!(result, Err(ChartError::DegenerateScale { .. })));
}

#[test]
fn non_finite_prices_are_rejected() {
    assert!(PriceScale::new(f64::NAN, 1.0, 100.0).is_err());

    let scale = PriceScale::new(0.0, 1.0, 100.0).expect("scale");
    assert!(scale.price_to_pixel(f64::INFINITY).is_err());
}

#[test]
fn zero_height_is_rejected() {
    assert!(PriceScale::new(0.0, 1.0, 0.0).is_err());
}
