use crate::error::{Error, Result};

pub mod force;

#[derive(Debug, Clone, PartialEq)]
pub struct LayoutOptions {
    /// Number of fixed time steps. There is no convergence check; `0` leaves positions untouched.
    pub iterations: usize,
    /// Time increment per step.
    pub dt: f64,
    /// Linear drag coefficient applied against the current velocity.
    pub damping: f64,
    /// Magnitude of the constant pull toward the point's own cluster centroid.
    pub attraction: f64,
    /// Pairwise inverse-square repulsion coefficient (`repulsion / distance^2`).
    pub repulsion: f64,
    /// Upper bound on velocity magnitude after each step.
    pub max_speed: f64,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            iterations: 1000,
            dt: 0.1,
            damping: 1.0,
            attraction: 1.0,
            repulsion: 0.1,
            max_speed: 10.0,
        }
    }
}

impl LayoutOptions {
    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    pub fn validate(&self) -> Result<()> {
        positive("dt", self.dt)?;
        non_negative("damping", self.damping)?;
        non_negative("attraction", self.attraction)?;
        non_negative("repulsion", self.repulsion)?;
        positive("max_speed", self.max_speed)?;
        Ok(())
    }
}

fn positive(name: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(Error::InvalidOption { name, value })
    }
}

fn non_negative(name: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(Error::InvalidOption { name, value })
    }
}
