//! Rendering boundary seen by the choreographer

use super::handle::CancelHandle;
use super::reveal::{Region, TargetGroup, VisualState};

/// The rendered page, addressed by logical element group
///
/// Implementations resolve groups against whatever the presentation layer
/// rendered. A group that is not rendered yet reports zero elements, and a
/// region that cannot be observed returns `None`; neither is an error.
pub trait Stage {
    /// Number of elements currently rendered for `target`
    fn element_count(&self, target: TargetGroup) -> usize;

    /// Scroll width of the first element of `target`, if rendered
    fn measure_scroll_width(&self, target: TargetGroup) -> Option<f64>;

    /// Write a visual state onto element `index` of `target`
    fn apply(&self, target: TargetGroup, index: usize, state: &VisualState);

    /// Call `on_enter` once when the region's top edge crosses `threshold`
    /// of the viewport height
    fn observe_region(
        &self,
        region: Region,
        threshold: f64,
        on_enter: Box<dyn FnOnce()>,
    ) -> Option<CancelHandle>;
}
