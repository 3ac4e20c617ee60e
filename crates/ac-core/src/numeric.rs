use crate::AcError;

/// Floating point type used for costs and penalties
pub type Real = f64;

pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, AcError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(AcError::NonFinite { what, value: v })
    }
}

/// Like [`ensure_finite`], additionally rejecting negative values.
pub fn ensure_non_negative(v: Real, what: &'static str) -> Result<Real, AcError> {
    let v = ensure_finite(v, what)?;
    if v < 0.0 {
        return Err(AcError::InvalidArg { what });
    }
    Ok(v)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ensure_finite_detects_nan() {
        let err = ensure_finite(Real::NAN, "test").unwrap_err();
        let msg = format!("{err}");
        assert!(msg.contains("Non-finite"));
    }

    #[test]
    fn ensure_non_negative_rejects_negative() {
        assert_eq!(ensure_non_negative(0.25, "penalty"), Ok(0.25));
        assert_eq!(ensure_non_negative(0.0, "penalty"), Ok(0.0));
        assert!(matches!(
            ensure_non_negative(-1.0, "penalty"),
            Err(AcError::InvalidArg { what: "penalty" })
        ));
        assert!(matches!(
            ensure_non_negative(Real::INFINITY, "penalty"),
            Err(AcError::NonFinite { .. })
        ));
    }
}
