use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FractalKind {
    Mandelbrot,
    Julia,
    BurningShip,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid fractal type '{name}', use: mandelbrot, julia, or burning_ship")]
pub struct UnknownFractalKindError {
    pub name: String,
}

impl FractalKind {
    pub const ALL: &'static [Self] = &[Self::Mandelbrot, Self::Julia, Self::BurningShip];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Mandelbrot => "Mandelbrot",
            Self::Julia => "Julia",
            Self::BurningShip => "Burning Ship",
        }
    }

    /// Name accepted on the command line.
    #[must_use]
    pub const fn cli_name(self) -> &'static str {
        match self {
            Self::Mandelbrot => "mandelbrot",
            Self::Julia => "julia",
            Self::BurningShip => "burning_ship",
        }
    }
}

impl FromStr for FractalKind {
    type Err = UnknownFractalKindError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.cli_name() == name)
            .ok_or_else(|| UnknownFractalKindError {
                name: name.to_owned(),
            })
    }
}

impl fmt::Display for FractalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
