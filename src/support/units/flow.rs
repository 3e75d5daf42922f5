use uom::si::{f64::VolumeRate, volume_rate::cubic_foot_per_minute};

const CFM_PER_KCFM: f64 = 1000.0;

/// Creates a [`VolumeRate`] from a value in thousands of cubic feet per minute.
#[must_use]
pub fn kcfm(value: f64) -> VolumeRate {
    VolumeRate::new::<cubic_foot_per_minute>(value * CFM_PER_KCFM)
}

/// Returns a [`VolumeRate`] in thousands of cubic feet per minute.
#[must_use]
pub fn to_kcfm(flow: VolumeRate) -> f64 {
    flow.get::<cubic_foot_per_minute>() / CFM_PER_KCFM
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn thousand_cfm_round_trip() {
        let flow = kcfm(140.0);
        assert_relative_eq!(flow.get::<cubic_foot_per_minute>(), 140_000.0, epsilon = 1e-6);
        assert_relative_eq!(to_kcfm(flow), 140.0, epsilon = 1e-9);
    }
}
