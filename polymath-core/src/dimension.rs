//! Dimensional analysis types
//!
//! Each physical quantity has dimensions represented as a 9-element vector:
//! [length, mass, time, current, temperature, luminosity, amount, angle, bit]
//!
//! Angle is kept as its own base dimension so that functions which only
//! accept angles can tell `2 rad` apart from a bare `2`.

use std::fmt;
use serde::{Serialize, Deserialize};

/// Number of base dimensions tracked
pub const BASE_COUNT: usize = 9;

const SYMBOLS: [&str; BASE_COUNT] = ["L", "M", "T", "I", "Θ", "J", "N", "A", "b"];

/// Exponents of the base dimensions for a physical quantity.
/// Compared by structural equality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Dimension {
    /// [length, mass, time, current, temperature, luminosity, amount, angle, bit]
    pub exponents: [i32; BASE_COUNT],
}

impl Dimension {
    pub const DIMENSIONLESS: Dimension = Dimension { exponents: [0, 0, 0, 0, 0, 0, 0, 0, 0] };
    pub const LENGTH: Dimension = Dimension { exponents: [1, 0, 0, 0, 0, 0, 0, 0, 0] };
    pub const MASS: Dimension = Dimension { exponents: [0, 1, 0, 0, 0, 0, 0, 0, 0] };
    pub const TIME: Dimension = Dimension { exponents: [0, 0, 1, 0, 0, 0, 0, 0, 0] };
    pub const CURRENT: Dimension = Dimension { exponents: [0, 0, 0, 1, 0, 0, 0, 0, 0] };
    pub const TEMPERATURE: Dimension = Dimension { exponents: [0, 0, 0, 0, 1, 0, 0, 0, 0] };
    pub const LUMINOSITY: Dimension = Dimension { exponents: [0, 0, 0, 0, 0, 1, 0, 0, 0] };
    pub const AMOUNT: Dimension = Dimension { exponents: [0, 0, 0, 0, 0, 0, 1, 0, 0] };
    pub const ANGLE: Dimension = Dimension { exponents: [0, 0, 0, 0, 0, 0, 0, 1, 0] };
    pub const BIT: Dimension = Dimension { exponents: [0, 0, 0, 0, 0, 0, 0, 0, 1] };

    /// Velocity [L T^-1]
    pub const VELOCITY: Dimension = Dimension { exponents: [1, 0, -1, 0, 0, 0, 0, 0, 0] };

    /// Area [L^2]
    pub const AREA: Dimension = Dimension { exponents: [2, 0, 0, 0, 0, 0, 0, 0, 0] };

    /// Frequency [T^-1]
    pub const FREQUENCY: Dimension = Dimension { exponents: [0, 0, -1, 0, 0, 0, 0, 0, 0] };

    pub fn new(exponents: [i32; BASE_COUNT]) -> Self {
        Dimension { exponents }
    }

    pub fn is_dimensionless(&self) -> bool {
        self.exponents.iter().all(|&e| e == 0)
    }

    /// Multiply dimensions (add exponents)
    pub fn multiply(&self, other: &Dimension) -> Dimension {
        let mut result = [0i32; BASE_COUNT];
        for (i, slot) in result.iter_mut().enumerate() {
            *slot = self.exponents[i] + other.exponents[i];
        }
        Dimension { exponents: result }
    }

    /// Divide dimensions (subtract exponents)
    pub fn divide(&self, other: &Dimension) -> Dimension {
        let mut result = [0i32; BASE_COUNT];
        for (i, slot) in result.iter_mut().enumerate() {
            *slot = self.exponents[i] - other.exponents[i];
        }
        Dimension { exponents: result }
    }

    /// Raise to integer power (multiply exponents)
    pub fn power(&self, exp: i32) -> Dimension {
        let mut result = self.exponents;
        for slot in result.iter_mut() {
            *slot *= exp;
        }
        Dimension { exponents: result }
    }

    /// Name of a common dimension, if this is one
    pub fn name(&self) -> Option<&'static str> {
        match self.exponents {
            [0, 0, 0, 0, 0, 0, 0, 0, 0] => Some("dimensionless"),
            [1, 0, 0, 0, 0, 0, 0, 0, 0] => Some("length"),
            [0, 1, 0, 0, 0, 0, 0, 0, 0] => Some("mass"),
            [0, 0, 1, 0, 0, 0, 0, 0, 0] => Some("time"),
            [0, 0, 0, 1, 0, 0, 0, 0, 0] => Some("current"),
            [0, 0, 0, 0, 1, 0, 0, 0, 0] => Some("temperature"),
            [0, 0, 0, 0, 0, 1, 0, 0, 0] => Some("luminosity"),
            [0, 0, 0, 0, 0, 0, 1, 0, 0] => Some("amount"),
            [0, 0, 0, 0, 0, 0, 0, 1, 0] => Some("angle"),
            [0, 0, 0, 0, 0, 0, 0, 0, 1] => Some("bit"),
            [1, 0, -1, 0, 0, 0, 0, 0, 0] => Some("velocity"),
            [2, 0, 0, 0, 0, 0, 0, 0, 0] => Some("area"),
            [0, 0, -1, 0, 0, 0, 0, 0, 0] => Some("frequency"),
            _ => None,
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::new();

        for (i, &exp) in self.exponents.iter().enumerate() {
            if exp == 1 {
                parts.push(SYMBOLS[i].to_string());
            } else if exp != 0 {
                parts.push(format!("{}^{}", SYMBOLS[i], exp));
            }
        }

        if parts.is_empty() {
            write!(f, "1")
        } else {
            write!(f, "{}", parts.join(" "))
        }
    }
}

impl Default for Dimension {
    fn default() -> Self {
        Self::DIMENSIONLESS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimensionless() {
        assert!(Dimension::DIMENSIONLESS.is_dimensionless());
        assert!(!Dimension::ANGLE.is_dimensionless());
    }

    #[test]
    fn test_angle_is_distinct() {
        assert_ne!(Dimension::ANGLE, Dimension::DIMENSIONLESS);
        assert_ne!(Dimension::ANGLE, Dimension::LENGTH);
        assert_eq!(Dimension::ANGLE, Dimension::new([0, 0, 0, 0, 0, 0, 0, 1, 0]));
    }

    #[test]
    fn test_divide() {
        let velocity = Dimension::LENGTH.divide(&Dimension::TIME);
        assert_eq!(velocity, Dimension::VELOCITY);
    }

    #[test]
    fn test_power() {
        assert_eq!(Dimension::LENGTH.power(2), Dimension::AREA);
        assert_eq!(Dimension::TIME.power(-1), Dimension::FREQUENCY);
    }

    #[test]
    fn test_angle_per_angle_is_dimensionless() {
        assert!(Dimension::ANGLE.divide(&Dimension::ANGLE).is_dimensionless());
        assert_eq!(Dimension::ANGLE.multiply(&Dimension::DIMENSIONLESS), Dimension::ANGLE);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Dimension::DIMENSIONLESS), "1");
        assert_eq!(format!("{}", Dimension::ANGLE), "A");
        assert_eq!(format!("{}", Dimension::VELOCITY), "L T^-1");
        assert_eq!(Dimension::ANGLE.name(), Some("angle"));
    }
}
