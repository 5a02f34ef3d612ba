use super::roles::{Role, RoleCounts};

/// Exponent scale applied to each role count before the softmax-style blend.
///
/// Tank is left unscaled while damage and support are halved, which biases the
/// visual weight towards tank presence. These are tuning values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoleWeights {
    pub tank: f64,
    pub damage: f64,
    pub support: f64,
}

impl RoleWeights {
    pub const DEFAULT: RoleWeights = RoleWeights {
        tank: 1.0,
        damage: 0.5,
        support: 0.5,
    };

    pub fn scale(&self, role: Role) -> f64 {
        match role {
            Role::Tank => self.tank,
            Role::Damage => self.damage,
            Role::Support => self.support,
        }
    }

    /// Blend raw counts into normalized per-role weights.
    ///
    /// All-zero counts give exp(0) for every role, i.e. the uniform
    /// (1/3, 1/3, 1/3) "no data" state. The largest exponent is subtracted
    /// before `exp` so large counts cannot overflow.
    pub fn proportions(&self, counts: &RoleCounts) -> ProportionVector {
        let exponents = Role::ALL.map(|role| counts.get(role) as f64 * self.scale(role));
        let max = exponents.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let raw = exponents.map(|e| (e - max).exp());
        let sum: f64 = raw.iter().sum();

        ProportionVector {
            tank: raw[0] / sum,
            damage: raw[1] / sum,
            support: raw[2] / sum,
        }
    }
}

impl Default for RoleWeights {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Normalized role weights in [0, 1] that sum to 1
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProportionVector {
    pub tank: f64,
    pub damage: f64,
    pub support: f64,
}

impl ProportionVector {
    pub fn get(&self, role: Role) -> f64 {
        match role {
            Role::Tank => self.tank,
            Role::Damage => self.damage,
            Role::Support => self.support,
        }
    }

    pub fn sum(&self) -> f64 {
        self.tank + self.damage + self.support
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_zero_counts_are_uniform() {
        let p = RoleWeights::DEFAULT.proportions(&RoleCounts::default());
        for role in Role::ALL {
            assert!((p.get(role) - 1.0 / 3.0).abs() < EPS);
        }
    }

    #[test]
    fn test_two_supports() {
        let p = RoleWeights::DEFAULT.proportions(&RoleCounts::new(0, 0, 2));
        let denom = 2.0 + 1.0_f64.exp();
        assert!((p.tank - 1.0 / denom).abs() < EPS);
        assert!((p.damage - 1.0 / denom).abs() < EPS);
        assert!((p.support - 1.0_f64.exp() / denom).abs() < EPS);
        assert!((p.tank - 0.2119).abs() < 1e-3);
        assert!((p.support - 0.5761).abs() < 1e-3);
    }

    #[test]
    fn test_tank_is_weighted_more_heavily() {
        let p = RoleWeights::DEFAULT.proportions(&RoleCounts::new(2, 2, 2));
        assert!(p.tank > p.damage);
        assert!((p.damage - p.support).abs() < EPS);
    }

    #[test]
    fn test_sums_to_one() {
        for tank in 0..6 {
            for damage in 0..8 {
                for support in [0, 1, 5, 13] {
                    let p = RoleWeights::DEFAULT.proportions(&RoleCounts::new(tank, damage, support));
                    assert!((p.sum() - 1.0).abs() < 1e-9, "sum {} for {tank}/{damage}/{support}", p.sum());
                    assert!(p.tank >= 0.0 && p.tank <= 1.0);
                }
            }
        }
    }

    #[test]
    fn test_large_counts_stay_normalized() {
        for counts in [
            RoleCounts::new(710, 0, 0),
            RoleCounts::new(0, 1420, 3),
            RoleCounts::new(5000, 5000, 5000),
        ] {
            let p = RoleWeights::DEFAULT.proportions(&counts);
            assert!((p.sum() - 1.0).abs() < 1e-9, "sum {} for {:?}", p.sum(), counts);
            for role in Role::ALL {
                assert!(p.get(role).is_finite());
            }
        }

        let p = RoleWeights::DEFAULT.proportions(&RoleCounts::new(710, 0, 0));
        assert!((p.tank - 1.0).abs() < EPS);
    }

    #[test]
    fn test_custom_weights() {
        let even = RoleWeights {
            tank: 0.5,
            damage: 0.5,
            support: 0.5,
        };
        let p = even.proportions(&RoleCounts::new(2, 2, 2));
        assert!((p.tank - p.damage).abs() < EPS);
    }
}
