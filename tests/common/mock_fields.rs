//! Simple reference fields with obvious discrete behaviour

use diffusion_rs::physics::ReferenceField;

/// u(x, t) = c, a steady solution for any D
pub struct ConstantField {
    pub value: f64,
    pub diffusivity: f64,
}

impl ConstantField {
    pub fn new(value: f64, diffusivity: f64) -> Self {
        Self { value, diffusivity }
    }
}

impl ReferenceField for ConstantField {
    fn value(&self, _x: f64, _t: f64) -> f64 {
        self.value
    }

    fn diffusivity(&self) -> f64 {
        self.diffusivity
    }

    fn name(&self) -> &str {
        "Constant"
    }
}

/// u(x, t) = a·x + b, a steady solution with a zero second difference
pub struct LinearField {
    pub slope: f64,
    pub offset: f64,
    pub diffusivity: f64,
}

impl LinearField {
    pub fn new(slope: f64, offset: f64, diffusivity: f64) -> Self {
        Self { slope, offset, diffusivity }
    }
}

impl ReferenceField for LinearField {
    fn value(&self, x: f64, _t: f64) -> f64 {
        self.slope * x + self.offset
    }

    fn diffusivity(&self) -> f64 {
        self.diffusivity
    }

    fn name(&self) -> &str {
        "Linear"
    }
}
