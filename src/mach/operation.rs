use super::Val;
use crate::error;
use crate::lang::Error;

type Result<T> = std::result::Result<T, Error>;

/// ## Arithmetic on stored values
///
/// Integers stay integers for `+ - *` and report overflow instead of
/// wrapping. Division always yields a float. Strings never take part.
pub struct Operation {}

impl Operation {
    fn mismatch(lhs: &Val, rhs: &Val) -> Error {
        let msg = format!("cannot do arithmetic on {} and {}", lhs.type_name(), rhs.type_name());
        error!(TypeMismatch; &msg)
    }

    fn checked(
        lhs: Val,
        rhs: Val,
        int: fn(i64, i64) -> Option<i64>,
        float: fn(f64, f64) -> f64,
    ) -> Result<Val> {
        use Val::*;
        match (&lhs, &rhs) {
            (Integer(l), Integer(r)) => match int(*l, *r) {
                Some(n) => Ok(Integer(n)),
                None => Err(error!(Overflow)),
            },
            (Integer(l), Float(r)) => Ok(Float(float(*l as f64, *r))),
            (Float(l), Integer(r)) => Ok(Float(float(*l, *r as f64))),
            (Float(l), Float(r)) => Ok(Float(float(*l, *r))),
            _ => Err(Operation::mismatch(&lhs, &rhs)),
        }
    }

    pub fn sum(lhs: Val, rhs: Val) -> Result<Val> {
        Operation::checked(lhs, rhs, i64::checked_add, |l, r| l + r)
    }

    pub fn subtract(lhs: Val, rhs: Val) -> Result<Val> {
        Operation::checked(lhs, rhs, i64::checked_sub, |l, r| l - r)
    }

    pub fn multiply(lhs: Val, rhs: Val) -> Result<Val> {
        Operation::checked(lhs, rhs, i64::checked_mul, |l, r| l * r)
    }

    pub fn divide(lhs: Val, rhs: Val) -> Result<Val> {
        use Val::*;
        let (l, r) = match (&lhs, &rhs) {
            (Integer(l), Integer(r)) => (*l as f64, *r as f64),
            (Integer(l), Float(r)) => (*l as f64, *r),
            (Float(l), Integer(r)) => (*l, *r as f64),
            (Float(l), Float(r)) => (*l, *r),
            _ => return Err(Operation::mismatch(&lhs, &rhs)),
        };
        if r == 0.0 {
            return Err(error!(DivisionByZero));
        }
        Ok(Float(l / r))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::ErrorCode;
    use Val::*;

    #[test]
    fn test_integer_stays_integer() {
        assert_eq!(Operation::sum(Integer(5), Integer(3)), Ok(Integer(8)));
        assert_eq!(Operation::subtract(Integer(5), Integer(8)), Ok(Integer(-3)));
        assert_eq!(Operation::multiply(Integer(6), Integer(7)), Ok(Integer(42)));
    }

    #[test]
    fn test_mixed_promotes() {
        assert_eq!(Operation::sum(Integer(1), Float(0.5)), Ok(Float(1.5)));
        assert_eq!(Operation::multiply(Float(1.5), Integer(2)), Ok(Float(3.0)));
    }

    #[test]
    fn test_divide_is_float() {
        assert_eq!(Operation::divide(Integer(8), Integer(2)), Ok(Float(4.0)));
        assert_eq!(Operation::divide(Integer(1), Integer(4)), Ok(Float(0.25)));
    }

    #[test]
    fn test_divide_by_zero() {
        let e = Operation::divide(Float(1.0), Integer(0)).unwrap_err();
        assert!(e.is(ErrorCode::DivisionByZero));
    }

    #[test]
    fn test_overflow() {
        let e = Operation::sum(Integer(i64::MAX), Integer(1)).unwrap_err();
        assert!(e.is(ErrorCode::Overflow));
    }

    #[test]
    fn test_string_mismatch() {
        let e = Operation::sum(String("a".into()), Integer(1)).unwrap_err();
        assert!(e.is(ErrorCode::TypeMismatch));
        assert_eq!(e.text(), "cannot do arithmetic on string and integer");
    }
}
