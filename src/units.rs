use std::str::FromStr;

use derive_more::Display;

use crate::error::MarchingCubesError;

/// Physical length units accepted for calibrations and forced mesh output.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LengthUnit {
    #[display("nm")]
    Nanometer,
    #[display("µm")]
    Micrometer,
    #[display("mm")]
    Millimeter,
    #[display("cm")]
    Centimeter,
    #[display("dm")]
    Decimeter,
    #[display("m")]
    Meter,
    #[display("km")]
    Kilometer,
}

impl LengthUnit {
    /// Size of one unit in meters.
    pub fn meters(self) -> f64 {
        match self {
            LengthUnit::Nanometer => 1e-9,
            LengthUnit::Micrometer => 1e-6,
            LengthUnit::Millimeter => 1e-3,
            LengthUnit::Centimeter => 1e-2,
            LengthUnit::Decimeter => 1e-1,
            LengthUnit::Meter => 1.,
            LengthUnit::Kilometer => 1e3,
        }
    }

    /// Factor that converts a length in `self` into `target`.
    pub fn conversion_factor(self, target: LengthUnit) -> f64 {
        if self == target {
            return 1.;
        }
        self.meters() / target.meters()
    }
}

impl FromStr for LengthUnit {
    type Err = MarchingCubesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unit = match s.trim() {
            "nm" | "nanometer" | "nanometers" => LengthUnit::Nanometer,
            "µm" | "μm" | "um" | "micron" | "microns" | "micrometer" | "micrometers" => {
                LengthUnit::Micrometer
            }
            "mm" | "millimeter" | "millimeters" => LengthUnit::Millimeter,
            "cm" | "centimeter" | "centimeters" => LengthUnit::Centimeter,
            "dm" | "decimeter" | "decimeters" => LengthUnit::Decimeter,
            "m" | "meter" | "meters" => LengthUnit::Meter,
            "km" | "kilometer" | "kilometers" => LengthUnit::Kilometer,
            other => {
                return Err(MarchingCubesError::UnknownLengthUnit {
                    unit: other.to_owned(),
                });
            }
        };
        Ok(unit)
    }
}
