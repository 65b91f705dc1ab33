use std::fmt;

/// The phase region of a resolved steam state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    /// Single-phase liquid below its saturation temperature.
    ///
    /// Also used for supercritical states below the critical temperature.
    SubCooledLiquid,

    /// On the saturation curve: saturated liquid (x = 0) or saturated vapor (x = 1).
    Saturated,

    /// A liquid-vapor mixture inside the dome (0 < x < 1).
    TwoPhase,

    /// Single-phase vapor above its saturation temperature.
    ///
    /// Also used for supercritical states at or above the critical temperature
    /// and for vapor below the triple point pressure.
    SuperHeatedVapor,
}

impl Region {
    /// Returns the region for a quality on the saturation dome.
    pub(super) fn from_quality(quality: f64) -> Self {
        if quality <= 0.0 || quality >= 1.0 {
            Self::Saturated
        } else {
            Self::TwoPhase
        }
    }

    /// Returns `true` for sub-cooled liquid and super-heated vapor.
    #[must_use]
    pub fn is_single_phase(self) -> bool {
        matches!(self, Self::SubCooledLiquid | Self::SuperHeatedVapor)
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::SubCooledLiquid => "sub-cooled liquid",
            Self::Saturated => "saturated",
            Self::TwoPhase => "two-phase",
            Self::SuperHeatedVapor => "super-heated vapor",
        })
    }
}
