//! Property-based tests for base-generic arithmetic.

#[cfg(test)]
mod tests {
    use dashu::integer::IBig;
    use proptest::prelude::*;

    use crate::{BigNumber, DigitBase, Notation, NumberError};

    const ALPHABET: &str = "0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

    // Strategy for generating small integers
    fn small_int() -> impl Strategy<Value = i64> {
        -1000i64..1000i64
    }

    // Strategy for generating non-zero integers
    fn non_zero_int() -> impl Strategy<Value = i64> {
        prop_oneof![(-1000i64..=-1i64), (1i64..=1000i64)]
    }

    // Strategy for generating bases that have an alphabet
    fn any_base() -> impl Strategy<Value = usize> {
        2usize..=ALPHABET.len()
    }

    // Strategy for generating signed decimal numbers of up to 40 digits
    fn big_decimal() -> impl Strategy<Value = (bool, String)> {
        (
            any::<bool>(),
            prop_oneof![Just("0".to_string()), "[1-9][0-9]{0,40}"],
        )
    }

    fn alphabet(base: usize) -> DigitBase<u8> {
        DigitBase::from_symbols(&ALPHABET[..base]).unwrap()
    }

    fn number(value: i64, base: usize) -> BigNumber {
        BigNumber::from_i64(value, base)
    }

    fn both(negative: bool, magnitude: &str) -> (BigNumber, IBig) {
        let decimal = DigitBase::decimal();
        let mut ours = BigNumber::parse(magnitude, &decimal).unwrap();
        ours.set_positive(!negative);
        let oracle = IBig::from_str_radix(magnitude, 10).unwrap();
        (ours, if negative { -oracle } else { oracle })
    }

    fn decimal_text(n: &BigNumber) -> String {
        n.render(&DigitBase::decimal(), Notation::Infix).unwrap()
    }

    proptest! {
        // Bases

        #[test]
        fn base_is_a_bijection(base in any_base()) {
            let digits = alphabet(base);
            prop_assert_eq!(digits.base_size(), base);
            for v in 0..base {
                let v = u8::try_from(v).unwrap();
                prop_assert_eq!(digits.value_of(digits.symbol_of(v).unwrap()), Ok(v));
            }
        }

        // Text

        #[test]
        fn parse_render_round_trip(
            base in any_base(),
            raw in prop::collection::vec(any::<usize>(), 1..30),
        ) {
            let digits = alphabet(base);
            let mut text: String = raw
                .iter()
                .map(|&i| char::from(ALPHABET.as_bytes()[i % base]))
                .collect();
            if text.starts_with('0') {
                text.replace_range(..1, &ALPHABET[1..2]);
            }
            let n = BigNumber::parse(&text, &digits).unwrap();
            prop_assert_eq!(n.render(&digits, Notation::Infix).unwrap(), text);
        }

        #[test]
        fn zero_renders_without_sign(base in any_base(), positive in any::<bool>()) {
            let digits = alphabet(base);
            let mut zero = BigNumber::new(base);
            zero.set_positive(positive);
            for notation in [Notation::Infix, Notation::Prefix, Notation::Postfix] {
                prop_assert_eq!(zero.render(&digits, notation).unwrap(), "0");
            }
        }

        #[test]
        fn notations_share_digits(a in non_zero_int()) {
            let digits = DigitBase::decimal();
            let n = number(a, 10);
            let infix = n.render(&digits, Notation::Infix).unwrap();
            let prefix = n.render(&digits, Notation::Prefix).unwrap();
            let postfix = n.render(&digits, Notation::Postfix).unwrap();
            let magnitude = a.unsigned_abs().to_string();

            prop_assert_eq!(infix.trim_start_matches('-'), magnitude.as_str());
            prop_assert_eq!(prefix.trim_start_matches("- 0 "), magnitude.as_str());
            let postfix = postfix.trim_start_matches("0 ").trim_end_matches(" -");
            prop_assert_eq!(postfix, magnitude.as_str());
        }

        // Ring laws in arbitrary bases

        #[test]
        fn add_commutative(base in any_base(), a in small_int(), b in small_int()) {
            let a = number(a, base);
            let b = number(b, base);
            prop_assert_eq!(&a + &b, &b + &a);
        }

        #[test]
        fn add_associative(
            base in any_base(),
            a in small_int(),
            b in small_int(),
            c in small_int(),
        ) {
            let a = number(a, base);
            let b = number(b, base);
            let c = number(c, base);
            prop_assert_eq!(&(&a + &b) + &c, &a + &(&b + &c));
        }

        #[test]
        fn mul_distributive(
            base in any_base(),
            a in small_int(),
            b in small_int(),
            c in small_int(),
        ) {
            let a = number(a, base);
            let b = number(b, base);
            let c = number(c, base);
            prop_assert_eq!(&a * &(&b + &c), &(&a * &b) + &(&a * &c));
        }

        #[test]
        fn additive_inverse(base in any_base(), a in small_int()) {
            let a = number(a, base);
            let sum = &a + &(-&a);
            prop_assert!(sum.is_zero());
        }

        #[test]
        fn ops_match_machine_integers(base in any_base(), a in small_int(), b in non_zero_int()) {
            let x = number(a, base);
            let y = number(b, base);
            prop_assert_eq!((&x + &y).to_i64(), Some(a + b));
            prop_assert_eq!((&x - &y).to_i64(), Some(a - b));
            prop_assert_eq!((&x * &y).to_i64(), Some(a * b));
            prop_assert_eq!((&x / &y).to_i64(), Some(a / b));
            prop_assert_eq!((&x % &y).to_i64(), Some(a % b));
        }

        #[test]
        fn ordering_matches_machine_integers(
            base in any_base(),
            a in small_int(),
            b in small_int(),
        ) {
            prop_assert_eq!(number(a, base).partial_cmp(&number(b, base)), Some(a.cmp(&b)));
            prop_assert_eq!(number(a, base) == number(b, base), a == b);
        }

        #[test]
        fn mul_by_zero_is_zero(base in any_base(), a in small_int()) {
            let product = number(a, base) * BigNumber::new(base);
            prop_assert!(product.is_zero());
            prop_assert!(!bool::from(&product));
        }

        #[test]
        fn product_width_bounded(base in any_base(), a in small_int(), b in small_int()) {
            let a = number(a, base);
            let b = number(b, base);
            let product = &a * &b;
            prop_assert!(product.digit_count() <= a.digit_count() + b.digit_count());
        }

        #[test]
        fn division_identity(base in any_base(), a in small_int(), b in non_zero_int()) {
            let a = number(a, base);
            let b = number(b, base);
            let (q, r) = a.div_rem(&b).unwrap();
            prop_assert_eq!(&(&q * &b) + &r, a);
            prop_assert_eq!(r.cmp_magnitude(&b), std::cmp::Ordering::Less);
        }

        // Errors

        #[test]
        fn mismatched_bases_fail(base in 2usize..30, a in small_int(), b in small_int()) {
            let x = number(a, base);
            let y = number(b, base + 1);
            let expected = Err(NumberError::MismatchedBase { left: base, right: base + 1 });
            prop_assert_eq!(x.checked_add(&y), expected.clone());
            prop_assert_eq!(x.checked_mul(&y), expected);
        }

        #[test]
        fn division_by_zero_fails(base in any_base(), a in small_int()) {
            let zero = BigNumber::new(base);
            prop_assert_eq!(number(a, base).checked_div(&zero), Err(NumberError::DivideByZero));
            prop_assert_eq!(number(a, base).checked_rem(&zero), Err(NumberError::DivideByZero));
        }

        // Roots and logarithms

        #[test]
        fn sqrt_brackets_value(base in any_base(), a in 0i64..1_000_000) {
            let n = number(a, base);
            let r = n.sqrt().unwrap();
            let next = &r + &number(1, base);
            prop_assert!(&r * &r <= n);
            prop_assert!(&next * &next > n);
        }

        #[test]
        fn log_brackets_value(base in any_base(), a in 1i64..1_000_000, b in 2i64..20) {
            let n = number(a, base);
            let b = number(b, base);
            let k = n.log(&b).unwrap();
            let next = &k + &number(1, base);
            prop_assert!(b.pow(&k).unwrap() <= n);
            prop_assert!(b.pow(&next).unwrap() > n);
        }

        // Large operands against dashu

        #[test]
        fn big_add_sub_match_dashu((sa, a) in big_decimal(), (sb, b) in big_decimal()) {
            let (x, ix) = both(sa, &a);
            let (y, iy) = both(sb, &b);
            prop_assert_eq!(decimal_text(&(&x + &y)), (&ix + &iy).to_string());
            prop_assert_eq!(decimal_text(&(&x - &y)), (&ix - &iy).to_string());
        }

        #[test]
        fn big_mul_matches_dashu((sa, a) in big_decimal(), (sb, b) in big_decimal()) {
            let (x, ix) = both(sa, &a);
            let (y, iy) = both(sb, &b);
            prop_assert_eq!(decimal_text(&(&x * &y)), (&ix * &iy).to_string());
        }

        #[test]
        fn big_div_rem_match_dashu((sa, a) in big_decimal(), (sb, b) in big_decimal()) {
            prop_assume!(b != "0");
            let (x, ix) = both(sa, &a);
            let (y, iy) = both(sb, &b);
            let (q, r) = x.div_rem(&y).unwrap();
            prop_assert_eq!(decimal_text(&q), (&ix / &iy).to_string());
            prop_assert_eq!(decimal_text(&r), (&ix % &iy).to_string());
        }
    }
}
