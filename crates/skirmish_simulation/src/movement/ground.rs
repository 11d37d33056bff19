//! Ground detection through the spatial query service.

use bevy::prelude::*;

use crate::components::GroundProbe;
use crate::shared::{SpatialQuery, SurfaceTag};

/// Cast the probe straight down from `base`; grounded iff it hits `Ground`.
pub fn probe_ground(spatial: &dyn SpatialQuery, probe: &GroundProbe, base: Vec3) -> bool {
    spatial
        .cast_ray(probe.origin(base), Vec3::NEG_Y, probe.ray_length())
        .is_some_and(|hit| hit.tag == SurfaceTag::Ground)
}
