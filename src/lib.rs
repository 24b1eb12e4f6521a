/// Largest n whose factorial fits in a u64 (21! overflows).
pub const MAX_FACTORIAL_INPUT: i64 = 20;

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum Error {
    #[error("factorial is undefined for negative input: {0}")]
    NegativeInput(i64),
    #[error("factorial of {0} does not fit in u64")]
    Overflow(i64),
}

/// Computes n! with an accumulating loop.
///
/// Returns an error for negative n and for n > 20, where the product
/// no longer fits in a u64.
pub fn iterative_factorial(n: i64) -> Result<u64, Error> {
    check_domain(n)?;
    let mut acc: u64 = 1;
    for i in 2..=n as u64 {
        acc *= i;
    }
    Ok(acc)
}

/// Computes n! by recursion on n, with n < 2 as the base case.
///
/// Same domain and results as [`iterative_factorial`]: negative n is
/// rejected before the recursion starts, so the decrement always
/// reaches the base case, and overflow surfaces as an error.
pub fn recursive_factorial(n: i64) -> Result<u64, Error> {
    check_domain(n)?;
    fn go(n: u64) -> u64 {
        if n < 2 {
            1
        } else {
            n * go(n - 1)
        }
    }
    Ok(go(n as u64))
}

// Rejecting out-of-domain n up front keeps the recursion depth bounded
// and lets the multiplications run unchecked.
fn check_domain(n: i64) -> Result<(), Error> {
    if n < 0 {
        Err(Error::NegativeInput(n))
    } else if n > MAX_FACTORIAL_INPUT {
        Err(Error::Overflow(n))
    } else {
        Ok(())
    }
}

/// Builds the single output line of the program: whether both
/// computation paths agree on n!.
pub fn report(n: i64) -> Result<String, Error> {
    let iterative = iterative_factorial(n)?;
    let recursive = recursive_factorial(n)?;
    Ok(format!("Same results? {}", iterative == recursive))
}
