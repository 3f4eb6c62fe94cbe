//! Typed adapters between [`SqlValue`] arguments and native kernels.
//!
//! A [`Kernel`] carries a strongly typed function pointer for its arity, so
//! no signature casts are needed and one validation path serves every
//! function of that shape.
//!
//! | Variant | Arity | Native signature | Result |
//! |---------|-------|------------------|--------|
//! | [`Constant`](Kernel::Constant) | 0 | `fn() -> f64` | Float |
//! | [`Random`](Kernel::Random) | 0 | draws from [`RandomSource`] | Float |
//! | [`Unary`](Kernel::Unary) | 1 | `fn(f64) -> f64` | Float |
//! | [`Binary`](Kernel::Binary) | 2 | `fn(f64, f64) -> f64` | Float |
//! | [`BinaryInt`](Kernel::BinaryInt) | 2 | `fn(i32, i64) -> Option<i64>` | Integer |
//! | [`Quaternary`](Kernel::Quaternary) | 4 | `fn(f64, f64, f64, f64) -> f64` | Float |
//!
//! # No result
//!
//! [`Kernel::apply`] returns `None` when any argument is not numeric, when the
//! slice length does not match the arity, or when an integer kernel rejects
//! its input. All arguments are checked before any conversion. There is no
//! error channel: the host maps `None` to NULL for that row only.

use crate::random::RandomSource;
use crate::value::SqlValue;

#[derive(Clone, Copy)]
pub enum Kernel {
    Constant(fn() -> f64),
    Random,
    Unary(fn(f64) -> f64),
    Binary(fn(f64, f64) -> f64),
    BinaryInt(fn(i32, i64) -> Option<i64>),
    Quaternary(fn(f64, f64, f64, f64) -> f64),
}

impl std::fmt::Debug for Kernel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let shape = match self {
            Kernel::Constant(_) => "Constant",
            Kernel::Random => "Random",
            Kernel::Unary(_) => "Unary",
            Kernel::Binary(_) => "Binary",
            Kernel::BinaryInt(_) => "BinaryInt",
            Kernel::Quaternary(_) => "Quaternary",
        };
        write!(f, "Kernel::{}", shape)
    }
}

fn float_args<const N: usize>(args: &[SqlValue]) -> Option<[f64; N]> {
    let args: &[SqlValue; N] = args.try_into().ok()?;
    if !args.iter().all(SqlValue::is_numeric) {
        return None;
    }
    let mut out = [0.0; N];
    for (slot, arg) in out.iter_mut().zip(args) {
        *slot = arg.as_f64()?;
    }
    Some(out)
}

impl Kernel {
    pub fn arity(&self) -> usize {
        match self {
            Kernel::Constant(_) | Kernel::Random => 0,
            Kernel::Unary(_) => 1,
            Kernel::Binary(_) | Kernel::BinaryInt(_) => 2,
            Kernel::Quaternary(_) => 4,
        }
    }

    /// Only [`Random`](Kernel::Random) reads shared state.
    pub fn is_pure(&self) -> bool {
        !matches!(self, Kernel::Random)
    }

    /// Validate, convert, call, and wrap the result.
    pub fn apply(&self, args: &[SqlValue], rng: &RandomSource) -> Option<SqlValue> {
        match *self {
            Kernel::Constant(f) => {
                float_args::<0>(args)?;
                Some(SqlValue::Float(f()))
            }
            Kernel::Random => {
                float_args::<0>(args)?;
                Some(SqlValue::Float(rng.next_f64()))
            }
            Kernel::Unary(f) => {
                let [x] = float_args(args)?;
                Some(SqlValue::Float(f(x)))
            }
            Kernel::Binary(f) => {
                let [x, y] = float_args(args)?;
                Some(SqlValue::Float(f(x, y)))
            }
            Kernel::BinaryInt(f) => {
                let [level, id] = <&[SqlValue; 2]>::try_from(args).ok()?;
                if !(level.is_numeric() && id.is_numeric()) {
                    return None;
                }
                f(level.as_i32()?, id.as_i64()?).map(SqlValue::Integer)
            }
            Kernel::Quaternary(f) => {
                let [a, b, c, d] = float_args(args)?;
                Some(SqlValue::Float(f(a, b, c, d)))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rng() -> RandomSource {
        RandomSource::seeded(0)
    }

    fn add_level(level: i32, id: i64) -> Option<i64> {
        Some(id + level as i64)
    }

    #[test]
    fn test_arity() {
        assert_eq!(Kernel::Constant(|| 1.0).arity(), 0);
        assert_eq!(Kernel::Random.arity(), 0);
        assert_eq!(Kernel::Unary(f64::abs).arity(), 1);
        assert_eq!(Kernel::Binary(f64::powf).arity(), 2);
        assert_eq!(Kernel::BinaryInt(add_level).arity(), 2);
        assert_eq!(Kernel::Quaternary(|a, _, _, _| a).arity(), 4);
    }

    #[test]
    fn test_unary_converts_integers() {
        let k = Kernel::Unary(|x| x * 2.0);
        assert_eq!(k.apply(&[SqlValue::Integer(3)], &rng()), Some(SqlValue::Float(6.0)));
        assert_eq!(k.apply(&["1.5".into()], &rng()), Some(SqlValue::Float(3.0)));
    }

    #[test]
    fn test_non_numeric_gives_no_result() {
        let rng = rng();
        let unary = Kernel::Unary(|x| x);
        let binary = Kernel::Binary(|x, y| x + y);
        let quad = Kernel::Quaternary(|a, b, c, d| a + b + c + d);

        assert_eq!(unary.apply(&[SqlValue::Null], &rng), None);
        assert_eq!(unary.apply(&["north".into()], &rng), None);
        assert_eq!(binary.apply(&[1.0.into(), SqlValue::Blob(vec![])], &rng), None);
        assert_eq!(binary.apply(&[SqlValue::Null, 1.0.into()], &rng), None);
        assert_eq!(
            quad.apply(&[1.0.into(), 2.0.into(), "x".into(), 4.0.into()], &rng),
            None
        );
    }

    #[test]
    fn test_wrong_slice_length_gives_no_result() {
        let rng = rng();
        assert_eq!(Kernel::Unary(|x| x).apply(&[], &rng), None);
        assert_eq!(Kernel::Binary(|x, _| x).apply(&[1.0.into()], &rng), None);
        assert_eq!(Kernel::Constant(|| 1.0).apply(&[1.0.into()], &rng), None);
        assert_eq!(Kernel::BinaryInt(add_level).apply(&[1.into()], &rng), None);
    }

    #[test]
    fn test_binary_int_truncates_and_returns_integer() {
        let k = Kernel::BinaryInt(add_level);
        assert_eq!(
            k.apply(&[SqlValue::Float(2.9), SqlValue::Integer(10)], &rng()),
            Some(SqlValue::Integer(12))
        );
        assert_eq!(
            k.apply(&[SqlValue::Integer(1), SqlValue::Float(10.7)], &rng()),
            Some(SqlValue::Integer(11))
        );
        assert_eq!(k.apply(&[SqlValue::Integer(1), "id".into()], &rng()), None);
    }

    #[test]
    fn test_binary_int_kernel_rejection_is_no_result() {
        let k = Kernel::BinaryInt(|_, _| None);
        assert_eq!(k.apply(&[1.into(), 2.into()], &rng()), None);
    }

    #[test]
    fn test_nan_is_a_value_not_absent() {
        let k = Kernel::Unary(f64::sqrt);
        match k.apply(&[SqlValue::Float(-1.0)], &rng()) {
            Some(SqlValue::Float(v)) => assert!(v.is_nan()),
            other => panic!("expected NaN float, got {:?}", other),
        }
    }

    #[test]
    fn test_random_draws_from_source() {
        let source = RandomSource::seeded(99);
        let reference = RandomSource::seeded(99);
        assert_eq!(
            Kernel::Random.apply(&[], &source),
            Some(SqlValue::Float(reference.next_f64()))
        );
        assert!(!Kernel::Random.is_pure());
        assert!(Kernel::Unary(f64::abs).is_pure());
    }
}
