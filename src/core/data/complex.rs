use std::fmt;
use std::ops::{Add, Mul};

// implement Complex instead of using the num-complex trait for learning
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Complex {
    pub real: f64,
    pub imag: f64,
}

impl Complex {
    pub const ZERO: Self = Self {
        real: 0.0,
        imag: 0.0,
    };

    #[must_use]
    pub const fn new(real: f64, imag: f64) -> Self {
        Self { real, imag }
    }

    #[must_use]
    pub fn magnitude_squared(&self) -> f64 {
        self.real * self.real + self.imag * self.imag
    }

    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.real.is_finite() && self.imag.is_finite()
    }

    /// Snaps both parts to the nearest multiple of 0.01.
    #[must_use]
    pub fn rounded_to_hundredths(&self) -> Self {
        Self {
            real: (self.real * 100.0).round() / 100.0,
            imag: (self.imag * 100.0).round() / 100.0,
        }
    }
}

impl Add for Complex {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            real: self.real + other.real,
            imag: self.imag + other.imag,
        }
    }
}

impl Mul for Complex {
    type Output = Self;

    fn mul(self, other: Self) -> Self {
        Self {
            real: self.real * other.real - self.imag * other.imag,
            imag: self.real * other.imag + self.imag * other.real,
        }
    }
}

fn write_imag(f: &mut fmt::Formatter<'_>, imag: f64) -> fmt::Result {
    if imag == 1.0 {
        write!(f, "i")
    } else {
        write!(f, "{}i", imag)
    }
}

/// Formats as `re + imi`, dropping whichever part is zero.
impl fmt::Display for Complex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.real == 0.0, self.imag == 0.0) {
            (_, true) if self.real == 0.0 => write!(f, "0"),
            (_, true) => write!(f, "{}", self.real),
            (true, false) if self.imag < 0.0 => {
                write!(f, "-")?;
                write_imag(f, -self.imag)
            }
            (true, false) => write_imag(f, self.imag),
            (false, false) => {
                write!(f, "{}", self.real)?;

                if self.imag < 0.0 {
                    write!(f, " - ")?;
                    write_imag(f, -self.imag)
                } else {
                    write!(f, " + ")?;
                    write_imag(f, self.imag)
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_magnitude_squared() {
        let c = Complex {
            real: 3.0,
            imag: 4.0,
        };
        assert_eq!(c.magnitude_squared(), 25.0); // 3² + 4² = 25
    }

    #[test]
    fn test_magnitude_squared_negative_real_and_imag() {
        let c = Complex {
            real: -3.0,
            imag: -4.0,
        };
        assert_eq!(c.magnitude_squared(), 25.0);
    }

    #[test]
    fn test_magnitude_squared_zero() {
        assert_eq!(Complex::ZERO.magnitude_squared(), 0.0);
    }

    #[test]
    fn test_add() {
        let a = Complex {
            real: 1.0,
            imag: 2.0,
        };
        let b = Complex {
            real: -3.0,
            imag: -7.0,
        };
        let result = a + b;
        assert_eq!(result.real, -2.0);
        assert_eq!(result.imag, -5.0);
    }

    #[test]
    fn test_mul() {
        let a = Complex {
            real: 1.0,
            imag: 2.0,
        };
        let b = Complex {
            real: 3.0,
            imag: 4.0,
        };
        let result = a * b;
        assert_eq!(result.real, -5.0); // 1*3 - 2*4
        assert_eq!(result.imag, 10.0); // 1*4 + 2*3
    }

    #[test]
    fn test_square_of_i_is_minus_one() {
        let i = Complex::new(0.0, 1.0);
        assert_eq!(i * i, Complex::new(-1.0, 0.0));
    }

    #[test]
    fn test_is_finite() {
        assert!(Complex::new(1.0, -1.0).is_finite());
        assert!(!Complex::new(f64::NAN, 0.0).is_finite());
        assert!(!Complex::new(0.0, f64::INFINITY).is_finite());
    }

    #[test]
    fn test_rounded_to_hundredths() {
        let rounded = Complex::new(0.2834, -0.0051).rounded_to_hundredths();
        assert_eq!(rounded, Complex::new(0.28, -0.01));
    }

    #[test]
    fn test_display_both_parts() {
        assert_eq!(Complex::new(0.28, 0.01).to_string(), "0.28 + 0.01i");
        assert_eq!(Complex::new(-0.7, -0.27).to_string(), "-0.7 - 0.27i");
    }

    #[test]
    fn test_display_single_part() {
        assert_eq!(Complex::new(0.28, 0.0).to_string(), "0.28");
        assert_eq!(Complex::new(0.0, 0.5).to_string(), "0.5i");
        assert_eq!(Complex::new(0.0, -0.5).to_string(), "-0.5i");
        assert_eq!(Complex::ZERO.to_string(), "0");
    }

    #[test]
    fn test_display_unit_imaginary() {
        assert_eq!(Complex::new(0.0, 1.0).to_string(), "i");
        assert_eq!(Complex::new(0.0, -1.0).to_string(), "-i");
        assert_eq!(Complex::new(1.0, -1.0).to_string(), "1 - i");
    }
}
