use super::ConfigError;

/// Nelder-Mead move coefficients.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coefficients {
    /// Reflection coefficient `α`.
    pub reflection: f64,

    /// Expansion coefficient `γ`.
    pub expansion: f64,

    /// Contraction coefficient `ρ`, shared by inside and outside contraction.
    pub contraction: f64,

    /// Shrink coefficient `σ`.
    pub shrink: f64,
}

impl Coefficients {
    /// The textbook coefficients: `α = 1`, `γ = 2`, `ρ = 0.5`, `σ = 0.5`.
    pub const STANDARD: Self = Self {
        reflection: 1.0,
        expansion: 2.0,
        contraction: 0.5,
        shrink: 0.5,
    };

    /// Dimension-dependent coefficients (Gao and Han, 2012).
    ///
    /// These coincide with [`Coefficients::STANDARD`] for `n = 2` and take
    /// smaller expansion and shrink steps as the dimension grows, which keeps
    /// the simplex from degenerating on problems with many parameters.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn adaptive(n: usize) -> Self {
        let n = n as f64;
        Self {
            reflection: 1.0,
            expansion: 1.0 + 2.0 / n,
            contraction: 0.75 - 1.0 / (2.0 * n),
            shrink: 1.0 - 1.0 / n,
        }
    }

    /// Validates the coefficients.
    ///
    /// # Errors
    ///
    /// Returns an error unless `α > 0`, `γ > 1`, `γ > α`, `0 < ρ < 1` and
    /// `0 < σ < 1`, all finite.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.reflection.is_finite() || self.reflection <= 0.0 {
            return Err(ConfigError::Reflection);
        }
        if !self.expansion.is_finite() || self.expansion <= 1.0 || self.expansion <= self.reflection
        {
            return Err(ConfigError::Expansion);
        }
        if !(self.contraction > 0.0 && self.contraction < 1.0) {
            return Err(ConfigError::Contraction);
        }
        if !(self.shrink > 0.0 && self.shrink < 1.0) {
            return Err(ConfigError::Shrink);
        }
        Ok(())
    }
}

/// Selects the move coefficients a search uses.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum CoefficientScheme {
    /// [`Coefficients::STANDARD`].
    #[default]
    Standard,

    /// [`Coefficients::adaptive`] for the problem's dimension.
    Adaptive,

    /// Caller-provided coefficients, validated with the config.
    Custom(Coefficients),
}

impl CoefficientScheme {
    /// Resolves the coefficients for a problem with `n` parameters.
    #[must_use]
    pub fn resolve(&self, n: usize) -> Coefficients {
        match self {
            Self::Standard => Coefficients::STANDARD,
            Self::Adaptive => Coefficients::adaptive(n),
            Self::Custom(coefficients) => *coefficients,
        }
    }
}
