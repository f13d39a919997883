//! Parameter derivation: failure on out-of-range K, and the quantified
//! invariants from spec.md section 8 ("For every valid K ... parameters
//! exist; S and L' are prime; C(H, H') >= K + S").

use raptor10::tables::DefaultTables;
use raptor10::{params, RaptorError};

fn is_prime(n: u32) -> bool {
    if n < 2 {
        return false;
    }
    let mut d = 2u64;
    while d * d <= n as u64 {
        if n as u64 % d == 0 {
            return false;
        }
        d += 1;
    }
    true
}

fn binomial(n: u32, k: u32) -> u64 {
    if k > n {
        return 0;
    }
    let k = k.min(n - k);
    let mut result: u128 = 1;
    for i in 0..k {
        result = result * (n - i) as u128 / (i + 1) as u128;
    }
    result.min(u64::MAX as u128) as u64
}

#[test]
fn k_below_minimum_fails_with_parameter_error() {
    let err = params::derive(3, &DefaultTables).unwrap_err();
    assert_eq!(err.k, 3);
    assert!(err.reason.contains("k must be between 4 and 8192"));

    let wrapped: RaptorError = err.clone().into();
    assert!(matches!(wrapped, RaptorError::Parameter(_)));
}

#[test]
fn k_above_maximum_fails_with_parameter_error() {
    assert!(params::derive(8193, &DefaultTables).is_err());
}

#[test]
fn derived_parameters_satisfy_the_quantified_invariants() {
    for k in [4u32, 5, 10, 100, 1000, 4096, 8192] {
        let p = params::derive(k, &DefaultTables).unwrap();
        assert!(is_prime(p.s), "s={} is not prime for k={k}", p.s);
        assert!(is_prime(p.l_prime), "l_prime={} is not prime for k={k}", p.l_prime);
        assert!(
            binomial(p.h, p.h_prime) >= (p.k + p.s) as u64,
            "C(H, H') < K + S for k={k}"
        );
        assert_eq!(p.l, p.k + p.s + p.h);
        assert!(p.l_prime >= p.l);
    }
}
