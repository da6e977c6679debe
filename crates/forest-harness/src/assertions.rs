//! Assertion helpers with diagnostic output.
//!
//! Every failure names the context and shows expected vs. actual, so a
//! scenario test failing deep in a batch is still readable.

/// Unified error type for the test harness.
#[derive(Debug, thiserror::Error)]
pub enum HarnessError {
    #[error("assertion failed: {detail}")]
    AssertionFailed { detail: String },
}

/// Assert `min <= value <= max`.
pub fn assert_in_range(value: f32, min: f32, max: f32, ctx: &str) -> Result<(), HarnessError> {
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(HarnessError::AssertionFailed {
            detail: format!("[{ctx}] expected {value} in [{min}, {max}]"),
        })
    }
}

/// Assert `|a - b| <= tol`.
pub fn assert_near(a: f32, b: f32, tol: f32, ctx: &str) -> Result<(), HarnessError> {
    if (a - b).abs() <= tol {
        Ok(())
    } else {
        Err(HarnessError::AssertionFailed {
            detail: format!("[{ctx}] expected {a} ≈ {b} (tol {tol}), delta {}", (a - b).abs()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn in_range_accepts_bounds() {
        assert!(assert_in_range(1.0, 1.0, 2.0, "lo").is_ok());
        assert!(assert_in_range(2.0, 1.0, 2.0, "hi").is_ok());
        assert!(assert_in_range(2.1, 1.0, 2.0, "out").is_err());
    }

    #[test]
    fn near_respects_tolerance() {
        assert!(assert_near(1.0, 1.00005, 1e-4, "close").is_ok());
        let err = assert_near(1.0, 1.1, 1e-4, "far").unwrap_err();
        assert!(err.to_string().contains("far"));
    }
}
