//! The numeric building blocks shared by every color model.

/// A 64-bit floating point value that all components are stored as.
///
/// The published conversion constants carry more significant digits than an
/// `f32` can hold, so components are always double precision.
pub type Component = f64;

/// Represent the three components that describe any color.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Components(pub Component, pub Component, pub Component);

impl Components {
    /// Return new components with each component mapped with the given
    /// function.
    pub fn map(&self, f: impl Fn(Component) -> Component) -> Self {
        Self(f(self.0), f(self.1), f(self.2))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_applies_to_each_component() {
        let c = Components(0.1, 0.2, 0.3).map(|v| v * 2.0);
        assert_eq!(c, Components(0.2, 0.4, 0.6));
    }
}
