//! Units of measurement and the global unit table

use std::collections::HashMap;
use std::fmt;
use std::num::NonZeroU32;
use std::sync::LazyLock;
use serde::{Serialize, Deserialize};
use crate::{Dimension, Number};

/// Denominator of a unit factor; zero fails at compile time
const fn den(n: u32) -> NonZeroU32 {
    match NonZeroU32::new(n) {
        Some(n) => n,
        None => panic!("zero denominator in unit factor"),
    }
}

/// (symbol, name, num, den): factor to radians is `pi * num / den`
const ANGLE_UNITS: [(&str, &str, i64, NonZeroU32); 5] = [
    ("deg", "degree", 1, den(180)),
    ("grad", "gradian", 1, den(200)),
    ("arcmin", "arcminute", 1, den(10800)),
    ("arcsec", "arcsecond", 1, den(648000)),
    ("cycle", "cycle", 2, den(1)),
];

const CENTI: NonZeroU32 = den(100);
const MILLI: NonZeroU32 = den(1000);

/// Global unit table
pub static UNITS: LazyLock<UnitTable> = LazyLock::new(UnitTable::new);

/// A physical unit with its dimension and factor to SI base units
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Unit {
    /// The unit symbol (e.g., "m", "deg", "s")
    pub symbol: String,
    /// The unit name (e.g., "meter", "degree", "second")
    pub name: String,
    /// The dimensional signature
    pub dimension: Dimension,
    /// value_si = value * to_si_factor
    pub to_si_factor: Number,
}

impl Unit {
    pub fn new(symbol: &str, name: &str, dimension: Dimension, to_si_factor: Number) -> Self {
        Unit {
            symbol: symbol.to_string(),
            name: name.to_string(),
            dimension,
            to_si_factor,
        }
    }

    /// Look up a unit by symbol or alias in the global table
    pub fn lookup(symbol: &str) -> Option<Unit> {
        UNITS.get(symbol).cloned()
    }

    pub fn is_si_base(&self) -> bool {
        self.to_si_factor == Number::from_i64(1)
    }

    /// Check if two units are dimensionally compatible
    pub fn is_compatible(&self, other: &Unit) -> bool {
        self.dimension == other.dimension
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol)
    }
}

/// Registry of known units
pub struct UnitTable {
    units: HashMap<String, Unit>,
    aliases: HashMap<String, String>,
}

impl UnitTable {
    pub fn new() -> Self {
        let mut table = UnitTable {
            units: HashMap::new(),
            aliases: HashMap::new(),
        };
        table.register_angle_units();
        table.register_length_units();
        table.register_mass_units();
        table.register_time_units();
        table
    }

    /// Get a unit by symbol or alias
    pub fn get(&self, symbol: &str) -> Option<&Unit> {
        if let Some(unit) = self.units.get(symbol) {
            return Some(unit);
        }
        self.aliases.get(symbol).and_then(|canonical| self.units.get(canonical))
    }

    /// All units of a dimension, sorted by symbol
    pub fn by_dimension(&self, dimension: Dimension) -> Vec<&Unit> {
        let mut units: Vec<&Unit> = self.units.values()
            .filter(|u| u.dimension == dimension)
            .collect();
        units.sort_by(|a, b| a.symbol.cmp(&b.symbol));
        units
    }

    fn register(&mut self, unit: Unit) {
        self.units.insert(unit.symbol.clone(), unit);
    }

    fn alias(&mut self, alias: &str, symbol: &str) {
        self.aliases.insert(alias.to_string(), symbol.to_string());
    }

    fn register_angle_units(&mut self) {
        let pi = Number::pi(64);

        self.register(Unit::new("rad", "radian", Dimension::ANGLE, Number::from_i64(1)));
        for (symbol, name, num, den) in ANGLE_UNITS {
            let factor = pi.mul(&Number::from_ratio(num, den));
            self.register(Unit::new(symbol, name, Dimension::ANGLE, factor));
        }

        self.alias("radian", "rad");
        self.alias("radians", "rad");
        self.alias("degree", "deg");
        self.alias("degrees", "deg");
        self.alias("°", "deg");
        self.alias("gradian", "grad");
        self.alias("gradians", "grad");
        self.alias("turn", "cycle");
        self.alias("cycles", "cycle");
    }

    fn register_length_units(&mut self) {
        self.register(Unit::new("m", "meter", Dimension::LENGTH, Number::from_i64(1)));
        self.register(Unit::new("km", "kilometer", Dimension::LENGTH, Number::from_i64(1000)));
        self.register(Unit::new("cm", "centimeter", Dimension::LENGTH, Number::from_ratio(1, CENTI)));
        self.register(Unit::new("mm", "millimeter", Dimension::LENGTH, Number::from_ratio(1, MILLI)));

        self.alias("meter", "m");
        self.alias("meters", "m");
    }

    fn register_mass_units(&mut self) {
        self.register(Unit::new("kg", "kilogram", Dimension::MASS, Number::from_i64(1)));
        self.register(Unit::new("g", "gram", Dimension::MASS, Number::from_ratio(1, MILLI)));

        self.alias("kilogram", "kg");
        self.alias("gram", "g");
    }

    fn register_time_units(&mut self) {
        self.register(Unit::new("s", "second", Dimension::TIME, Number::from_i64(1)));
        self.register(Unit::new("min", "minute", Dimension::TIME, Number::from_i64(60)));
        self.register(Unit::new("h", "hour", Dimension::TIME, Number::from_i64(3600)));

        self.alias("sec", "s");
        self.alias("second", "s");
        self.alias("hour", "h");
    }
}

impl Default for UnitTable {
    fn default() -> Self {
        Self::new()
    }
}
