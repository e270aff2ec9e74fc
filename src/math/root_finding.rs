/// Safeguarded Newton's method on a bracket [lo, hi] where f changes sign.
///
/// Every Newton step that would leave the (shrinking) bracket is replaced by
/// a bisection step, so this converges whenever the bracket is valid. After
/// `num_iterations` the current best guess is returned.
///
/// Adapted from `rtsafe` in http://www.grad.hr/nastava/gs/prg/NumericalRecipesinC.pdf
#[allow(clippy::float_cmp)]
pub fn newton_plus_bisection(
    f_and_f_prime: impl Fn(f64) -> (f64, f64),
    mut lo: f64,
    mut hi: f64,
    num_iterations: usize,
) -> f64 {
    if lo > hi {
        std::mem::swap(&mut lo, &mut hi);
    }

    let lo_is_neg = f_and_f_prime(lo).0 < 0.0;
    let mut guess = 0.5 * (lo + hi);

    for _ in 0..num_iterations {
        let (f, f_prime) = f_and_f_prime(guess);
        if f == 0.0 {
            return guess;
        }

        // Keep the root inside [lo, hi]
        if (f < 0.0) == lo_is_neg {
            lo = guess;
        } else {
            hi = guess;
        }

        let midpoint = 0.5 * (lo + hi);
        if midpoint == lo || midpoint == hi {
            return guess;
        }

        let newton_guess = guess - f / f_prime;
        guess = if newton_guess > lo && newton_guess < hi {
            newton_guess
        } else {
            midpoint
        };
    }

    guess
}
