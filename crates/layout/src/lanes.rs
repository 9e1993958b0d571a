//! Greedy first-fit lane packing.

use crate::position::Placement;

/// Assigns a lane to each placement, in the given order.
///
/// Each lane remembers the last column it occupies. A placement takes the
/// first lane whose last column is strictly left of its start, or opens a
/// new lane. Given placements sorted by start, this uses the minimum number
/// of lanes.
pub fn assign_lanes(placements: &[Placement]) -> Vec<u32> {
    let mut lane_ends: Vec<u32> = Vec::new();
    let mut lanes = Vec::with_capacity(placements.len());

    for placement in placements {
        let free = lane_ends
            .iter()
            .position(|&end| end < placement.x_start);
        let lane = match free {
            Some(lane) => {
                lane_ends[lane] = placement.x_end();
                lane
            }
            None => {
                lane_ends.push(placement.x_end());
                lane_ends.len() - 1
            }
        };
        lanes.push(lane as u32);
    }

    lanes
}

/// Returns the number of lanes in use: highest lane + 1, or 0 when empty.
pub fn lane_count<I: IntoIterator<Item = u32>>(lanes: I) -> u32 {
    lanes.into_iter().max().map_or(0, |max| max + 1)
}
