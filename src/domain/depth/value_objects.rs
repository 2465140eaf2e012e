use derive_more::Constructor;
use serde::Serialize;

use crate::domain::market_data::{BookSnapshot, Side};

/// Vertical space reserved for the horizontal label strip, in CSS pixels.
/// Scaled by the device pixel resolution before it is subtracted from the
/// chart height.
pub const AXIS_HEIGHT: f64 = 20.0;

/// Smallest span accepted from callers. A zero or negative span collapses the
/// price window to a point or inverts it, which is undefined for the scales.
pub const MIN_SPAN: f64 = 1e-6;

/// Value Object - the price at the center of the visible window.
///
/// An explicit tagged choice instead of sentinel zeros: `Indicative` wins
/// over `Mid`, which wins over the `Inferred` average of the two touches.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum ReferencePrice {
    Indicative(f64),
    Mid(f64),
    Inferred(f64),
}

impl ReferencePrice {
    /// Selection order: indicative while an auction is running (> 0), else a
    /// fed mid price (> 0), else the best-bid/best-ask average. `None` when
    /// both sides are empty and neither override is set.
    pub fn select(indicative: f64, mid: f64, snapshot: &BookSnapshot) -> Option<Self> {
        if indicative > 0.0 {
            return Some(Self::Indicative(indicative));
        }
        if mid > 0.0 {
            return Some(Self::Mid(mid));
        }
        let best_buy = snapshot.touch(Side::Buy)?;
        let best_sell = snapshot.touch(Side::Sell)?;
        Some(Self::Inferred((best_buy.value() + best_sell.value()) / 2.0))
    }

    pub fn value(&self) -> f64 {
        match self {
            Self::Indicative(price) | Self::Mid(price) | Self::Inferred(price) => *price,
        }
    }

    /// Mode label shown next to the reference marker on the axis.
    pub fn mode_label(&self) -> &'static str {
        match self {
            Self::Indicative(_) => "Indicative price",
            Self::Mid(_) | Self::Inferred(_) => "Mid Market Price",
        }
    }
}

/// Value Object - invertible linear mapping from a numeric domain interval to
/// a pixel range interval.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    /// Map a domain value to its pixel offset. A degenerate domain maps
    /// everything to the range start instead of producing NaN.
    pub fn map(&self, value: f64) -> f64 {
        let width = self.domain.1 - self.domain.0;
        if width == 0.0 {
            return self.range.0;
        }
        let normalized = (value - self.domain.0) / width;
        self.range.0 + normalized * (self.range.1 - self.range.0)
    }

    /// Inverse mapping from a pixel offset back into the domain.
    pub fn invert(&self, offset: f64) -> f64 {
        let extent = self.range.1 - self.range.0;
        if extent == 0.0 {
            return self.domain.0;
        }
        let normalized = (offset - self.range.0) / extent;
        self.domain.0 + normalized * (self.domain.1 - self.domain.0)
    }

    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    pub fn range(&self) -> (f64, f64) {
        self.range
    }
}

/// Value Object - visible price interval, symmetric around the reference.
#[derive(Debug, Clone, Copy, PartialEq, Constructor, Serialize)]
pub struct PriceWindow {
    pub low: f64,
    pub high: f64,
}

impl PriceWindow {
    pub fn around(reference: f64, max_abs_deviation: f64, span: f64) -> Self {
        Self {
            low: reference - span * max_abs_deviation,
            high: reference + span * max_abs_deviation,
        }
    }

    pub fn contains(&self, price: f64) -> bool {
        price >= self.low && price <= self.high
    }

    pub fn width(&self) -> f64 {
        self.high - self.low
    }
}

/// Value Object - visible volume interval `[0, 2 x tallest visible bar]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct VolumeWindow {
    pub max: f64,
}

impl VolumeWindow {
    /// Doubling reserves headroom above the tallest visible bar.
    pub fn from_visible_max(max_visible: f64) -> Self {
        Self { max: 2.0 * max_visible }
    }
}

/// Value Object - allowed zoom factor interval handed to the axis controller.
#[derive(Debug, Clone, Copy, PartialEq, Constructor, Serialize)]
pub struct ZoomExtent {
    pub min: f64,
    pub max: f64,
}

/// A point mapped into output pixel coordinates; y is inverted so larger
/// volume sits higher on a top-down canvas.
#[derive(Debug, Clone, Copy, PartialEq, Constructor, Serialize)]
pub struct PixelPoint {
    pub x: f64,
    pub y: f64,
}
