//! Derives obstacles and z-order from a window enumeration.
//!
//! One pass looks at every top-level window once:
//!
//! - foreign windows crossing the pet's center column become barriers at
//!   their top edge, unless a window enumerated earlier already covers that
//!   row (enumeration order is z-order, topmost first);
//! - peer windows become point charges when repulsion is enabled;
//! - the peer with the smallest index above ours becomes the stack target.

use serde::Serialize;

use super::peer::{MAX_PEER_INDEX, PeerNaming};
use super::rows::RowClaims;
use crate::error::{DeskpetError, DeskpetResult};
use crate::physics::{Barrier, BarrierList, ChargeList, Plane, PointCharge, RectArea};
use crate::platform::{MonitorInfo, StackTarget, WindowHandle, WindowRecord};

/// Charge assigned to every peer window.
const PEER_QUANTITY_PRODUCT: f64 = 1.0;

// ============================================================================
// Pass Input / Output
// ============================================================================

/// What the resolver needs to know about this instance for one pass.
#[derive(Debug, Clone, Copy)]
pub struct PassContext<'a> {
    /// Our own window, skipped during the scan.
    pub own_handle: Option<WindowHandle>,
    /// Our own window title, used to derive our peer index.
    pub own_title: &'a str,
    /// Screen column through the middle of our window.
    pub center_x: i32,
    /// Vertical world range in plane coordinates.
    pub world_top: f64,
    pub world_bottom: f64,
    /// Whether peers should repel us.
    pub repulsion: bool,
}

/// Result of one resolver pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Resolution {
    /// Our own peer index, if our title follows the peer grammar.
    pub own_index: Option<u32>,
    /// Barriers ordered from the world top downward.
    pub barriers: BarrierList,
    pub charges: ChargeList,
    /// Window to place ourselves beneath.
    pub target: StackTarget,
}

impl Resolution {
    /// Replaces the plane's barriers and point charges with this pass's.
    pub fn apply_to(&self, plane: &mut Plane) {
        plane.clear_barriers();
        plane.clear_point_charges();
        for barrier in &self.barriers {
            plane.set_barrier(barrier.y, barrier.x, barrier.width, barrier.is_ground);
        }
        for charge in &self.charges {
            plane.set_point_charge(charge.y, charge.x, charge.quantity_product);
        }
    }
}

// ============================================================================
// Resolver
// ============================================================================

/// Scans window lists using a peer naming scheme.
#[derive(Debug, Clone)]
pub struct StackingResolver<N> {
    naming: N,
}

impl<N: PeerNaming> StackingResolver<N> {
    #[must_use]
    pub const fn new(naming: N) -> Self { Self { naming } }

    /// Runs one pass over `windows`, which must be ordered topmost first.
    #[must_use]
    pub fn resolve(&self, windows: &[WindowRecord], ctx: &PassContext<'_>) -> Resolution {
        let own_index = self.naming.parse(ctx.own_title);
        let mut claims = RowClaims::new();
        let mut barriers = BarrierList::new();
        let mut charges = ChargeList::new();
        let mut next_above: Option<(u32, WindowHandle)> = None;

        for window in windows {
            if Some(window.handle) == ctx.own_handle {
                continue;
            }
            if !window.rect.is_valid() {
                tracing::trace!(handle = %window.handle, "skipping window with unreadable geometry");
                continue;
            }

            match self.naming.parse(&window.title) {
                None => claim_foreign(window, ctx, &mut claims, &mut barriers),
                Some(index) => {
                    if ctx.repulsion && Some(index) != own_index {
                        let (cx, cy) = window.rect.center();
                        charges.push(PointCharge::new(-cy, cx, PEER_QUANTITY_PRODUCT));
                    }
                    let above_us = own_index.is_none_or(|own| index > own);
                    let closer = next_above.is_none_or(|(best, _)| index < best);
                    if above_us && closer && index < MAX_PEER_INDEX {
                        next_above = Some((index, window.handle));
                    }
                }
            }
        }

        barriers.sort_by(|a, b| b.y.total_cmp(&a.y));
        let target = next_above.map_or(StackTarget::Topmost, |(_, handle)| StackTarget::Beneath(handle));

        tracing::debug!(
            own_index,
            barriers = barriers.len(),
            charges = charges.len(),
            ?target,
            "stacking pass"
        );

        Resolution { own_index, barriers, charges, target }
    }
}

/// Records a foreign window's rows; emits a barrier when its top row is free.
fn claim_foreign(
    window: &WindowRecord,
    ctx: &PassContext<'_>,
    claims: &mut RowClaims,
    barriers: &mut BarrierList,
) {
    let rect = window.rect;
    if !rect.spans_column(ctx.center_x) {
        return;
    }
    let hi = -i64::from(rect.top);
    let lo = -i64::from(rect.bottom);
    let (hi_f, lo_f) = (-f64::from(rect.top), -f64::from(rect.bottom));
    if !(lo_f < ctx.world_top && hi_f > ctx.world_bottom) {
        return;
    }

    let top_row_free = !claims.is_claimed(hi);
    let top_row_in_world = hi_f <= ctx.world_top && hi_f > ctx.world_bottom;
    if top_row_free && top_row_in_world {
        barriers.push(Barrier::new(
            hi_f,
            f64::from(rect.left),
            f64::from(rect.width()),
            false,
        ));
    }
    claims.claim(lo, hi);
}

// ============================================================================
// World Construction
// ============================================================================

/// Builds world regions from the monitor list.
///
/// The first monitor is always used; the others only with `multi_monitors`.
///
/// # Errors
///
/// Returns [`DeskpetError::NoMonitors`] if `monitors` is empty.
pub fn build_world(
    monitors: &[MonitorInfo],
    multi_monitors: bool,
    margin_bottom: f64,
) -> DeskpetResult<Vec<RectArea>> {
    if monitors.is_empty() {
        tracing::error!("failed to get monitors information");
        return Err(DeskpetError::NoMonitors);
    }
    let take = if multi_monitors { monitors.len() } else { 1 };
    Ok(monitors
        .iter()
        .take(take)
        .map(|monitor| RectArea::from_monitor(monitor, margin_bottom))
        .collect())
}
