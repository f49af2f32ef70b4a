/// Read-only layout measurements supplied by the host UI toolkit.
///
/// Implementations return `None` for anything that has not been laid out yet;
/// the engine treats that (and any non-finite or negative width) as `0`.
pub trait MeasurementProvider {
    /// Number of item elements currently laid out inside the list.
    fn item_count(&self) -> usize;

    /// Rendered width of the viewport (list) element.
    fn viewport_width(&self) -> Option<f64>;

    /// Rendered width of the item element at `index`.
    fn item_width(&self, index: usize) -> Option<f64>;
}

/// Host surface the engine drives: measurements plus the list translation.
pub trait LayoutHost: MeasurementProvider {
    /// Applies a horizontal translation (in pixels) to the item list element.
    fn apply_translate_x(&mut self, px: f64);
}

pub(crate) fn sanitize_width(width: Option<f64>) -> f64 {
    match width {
        Some(value) if value.is_finite() && value > 0.0 => value,
        _ => 0.0,
    }
}

/// Memoized per-index item widths.
///
/// Entries are populated lazily on read and cleared on demand; an index
/// outside `0..len()` always reads as `0` and never touches the cache.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeasurementCache {
    widths: Vec<Option<f64>>,
}

impl MeasurementCache {
    #[must_use]
    pub fn new(total_items: usize) -> Self {
        Self {
            widths: vec![None; total_items],
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.widths.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.widths.is_empty()
    }

    /// Resizes the cache for a new item count and drops every entry.
    pub fn reset(&mut self, total_items: usize) {
        self.widths.clear();
        self.widths.resize(total_items, None);
    }

    /// Returns the memoized width, measuring through `provider` on a miss.
    pub fn width_of<P>(&mut self, index: isize, provider: &P) -> f64
    where
        P: MeasurementProvider + ?Sized,
    {
        self.measure(index, provider, false)
    }

    /// Reads a width, bypassing the memoized value when `force_refresh` is set.
    pub fn measure<P>(&mut self, index: isize, provider: &P, force_refresh: bool) -> f64
    where
        P: MeasurementProvider + ?Sized,
    {
        let Ok(index) = usize::try_from(index) else {
            return 0.0;
        };
        let Some(slot) = self.widths.get_mut(index) else {
            return 0.0;
        };

        if !force_refresh {
            if let Some(width) = *slot {
                return width;
            }
        }

        let width = sanitize_width(provider.item_width(index));
        *slot = Some(width);
        width
    }

    /// Clears every entry; the next read re-measures lazily.
    pub fn invalidate_all(&mut self) {
        self.widths.iter_mut().for_each(|slot| *slot = None);
    }

    /// Measures every item that is not cached yet.
    pub fn prime_all<P>(&mut self, provider: &P)
    where
        P: MeasurementProvider + ?Sized,
    {
        for index in 0..self.widths.len() {
            let _ = self.measure(index as isize, provider, false);
        }
    }

    /// Re-measures every item, replacing stale entries.
    pub fn refresh_all<P>(&mut self, provider: &P)
    where
        P: MeasurementProvider + ?Sized,
    {
        self.invalidate_all();
        self.prime_all(provider);
    }

    #[must_use]
    pub fn cached(&self, index: usize) -> Option<f64> {
        self.widths.get(index).copied().flatten()
    }

    #[must_use]
    pub fn cached_widths(&self) -> &[Option<f64>] {
        &self.widths
    }
}
