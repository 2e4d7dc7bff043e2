use crate::platform::WindowSurface;

use super::{OverlayLayout, OverlayState, OverlayStyle};

const ENABLE_LOGS: bool = true;

use crate::{log_debug, log_info};

/// Regions shorter than this are left alone.
pub const MIN_GAP: i32 = 100;
/// The overlay never starts above this line, so the strip at the top of the
/// feed stays reachable for scrolling stories back into view.
pub const TOP_RESERVE: i32 = 400;

/// Owns the one overlay view of a service instance.
///
/// The surface is asked whether the view still has a parent before every
/// transition, because the platform can drop it during window teardown
/// without telling us.
#[derive(Debug)]
pub struct OverlayController {
    style: OverlayStyle,
    state: OverlayState,
}

impl OverlayController {
    pub fn new(style: OverlayStyle) -> Self {
        Self {
            style,
            state: OverlayState::Detached,
        }
    }

    pub fn state(&self) -> OverlayState {
        self.state
    }

    pub fn style(&self) -> &OverlayStyle {
        &self.style
    }

    /// Cover `[top, bottom]`, clamped below [`TOP_RESERVE`]. Attaches the view
    /// if needed, otherwise relayouts it in place. Returns false when the
    /// region is too small to be worth covering.
    pub fn show<S: WindowSurface>(&mut self, surface: &mut S, top: i32, bottom: i32) -> bool {
        if top.saturating_add(MIN_GAP) >= bottom {
            log_info!("Not enough to obscure between {} and {}, so skipping", top, bottom);
            return false;
        }

        log_info!("Showing overlay: {} - {}", top, bottom);
        let top = top.max(TOP_RESERVE);
        let height = bottom.saturating_sub(top);
        if height <= 0 {
            log_info!("Region ends above the reserved strip ({}), so skipping", bottom);
            return false;
        }

        let layout = OverlayLayout {
            height,
            y: surface.maximum_window_height().saturating_sub(bottom),
            format: self.style.format,
            focusable: false,
        };

        if surface.overlay_attached() {
            log_debug!("  overlay already attached - updating layout");
            surface.update_overlay_layout(&layout);
        } else {
            log_debug!("  overlay detached - attaching");
            surface.attach_overlay(&self.style, &layout);
        }

        self.state = OverlayState::Attached { top, bottom };
        true
    }

    /// Detach the view. Returns false when there was nothing to detach.
    pub fn hide<S: WindowSurface>(&mut self, surface: &mut S) -> bool {
        if !self.state.is_attached() || !surface.overlay_attached() {
            log_debug!("Overlay already detached");
            self.state = OverlayState::Detached;
            return false;
        }

        log_info!("Hiding overlay");
        surface.detach_overlay();
        self.state = OverlayState::Detached;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Variant;
    use crate::replay::{HostCall, RecordingHost};

    const WINDOW_HEIGHT: i32 = 2400;

    fn controller() -> OverlayController {
        OverlayController::new(OverlayStyle::for_variant(Variant::Distractions, "Test"))
    }

    fn host() -> RecordingHost {
        RecordingHost::new(WINDOW_HEIGHT)
    }

    #[test]
    fn first_show_attaches_with_bottom_anchored_layout() {
        let mut overlay = controller();
        let mut host = host();

        assert!(overlay.show(&mut host, 600, 2200));

        match host.calls() {
            [HostCall::AttachOverlay { layout, .. }] => {
                assert_eq!(layout.height, 1600);
                assert_eq!(layout.y, 200);
                assert!(!layout.focusable);
            }
            other => panic!("unexpected calls: {other:?}"),
        }
        assert_eq!(overlay.state(), OverlayState::Attached { top: 600, bottom: 2200 });
    }

    #[test]
    fn repeated_show_relayouts_instead_of_reattaching() {
        let mut overlay = controller();
        let mut host = host();

        overlay.show(&mut host, 600, 2200);
        overlay.show(&mut host, 600, 2200);
        overlay.show(&mut host, 700, 2200);

        assert_eq!(host.attach_count(), 1);
        assert_eq!(host.relayout_count(), 2);
        assert_eq!(overlay.state(), OverlayState::Attached { top: 700, bottom: 2200 });
    }

    #[test]
    fn small_regions_are_never_shown() {
        let mut overlay = controller();
        let mut host = host();

        assert!(!overlay.show(&mut host, 1000, 1100));
        assert!(!overlay.show(&mut host, 1000, 1050));
        assert!(!overlay.show(&mut host, 1200, 1000));
        assert!(host.calls().is_empty());

        overlay.show(&mut host, 500, 2000);
        assert!(!overlay.show(&mut host, 1000, 1100));
        assert_eq!(host.calls().len(), 1);
    }

    #[test]
    fn top_is_clamped_to_the_reserved_strip() {
        let mut overlay = controller();
        let mut host = host();

        assert!(overlay.show(&mut host, 50, 800));
        assert_eq!(overlay.state(), OverlayState::Attached { top: TOP_RESERVE, bottom: 800 });
        match host.calls() {
            [HostCall::AttachOverlay { layout, .. }] => assert_eq!(layout.height, 400),
            other => panic!("unexpected calls: {other:?}"),
        }
    }

    #[test]
    fn region_entirely_inside_the_reserved_strip_is_skipped() {
        let mut overlay = controller();
        let mut host = host();

        assert!(!overlay.show(&mut host, 50, 300));
        assert!(!overlay.show(&mut host, 100, 400));
        assert!(host.calls().is_empty());
    }

    #[test]
    fn extreme_bounds_do_not_overflow() {
        let mut overlay = controller();
        let mut host = host();

        assert!(!overlay.show(&mut host, i32::MAX - 50, 2250));
        assert!(!overlay.show(&mut host, i32::MAX - 50, i32::MAX));
        assert!(!overlay.show(&mut host, 600, i32::MIN));
        assert!(host.calls().is_empty());

        assert!(overlay.show(&mut host, i32::MIN, i32::MAX));
        match host.calls() {
            [HostCall::AttachOverlay { layout, .. }] => {
                assert_eq!(layout.height, i32::MAX - TOP_RESERVE);
                assert_eq!(layout.y, WINDOW_HEIGHT - i32::MAX);
            }
            other => panic!("unexpected calls: {other:?}"),
        }
    }

    #[test]
    fn hide_is_idempotent() {
        let mut overlay = controller();
        let mut host = host();

        overlay.show(&mut host, 600, 2200);
        assert!(overlay.hide(&mut host));
        assert!(!overlay.hide(&mut host));

        assert_eq!(host.detach_count(), 1);
        assert_eq!(overlay.state(), OverlayState::Detached);
    }

    #[test]
    fn hide_before_any_show_does_nothing() {
        let mut overlay = controller();
        let mut host = host();

        assert!(!overlay.hide(&mut host));
        assert!(host.calls().is_empty());
    }

    #[test]
    fn out_of_band_teardown_is_tolerated() {
        let mut overlay = controller();
        let mut host = host();

        overlay.show(&mut host, 600, 2200);
        host.tear_down_window();

        assert!(!overlay.hide(&mut host));
        assert_eq!(host.detach_count(), 0);

        overlay.show(&mut host, 600, 2200);
        assert_eq!(host.attach_count(), 2);
        assert_eq!(host.relayout_count(), 0);
    }
}
