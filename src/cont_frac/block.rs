use core::mem::swap;
use num_integer::Integer;
use num_traits::{NumRef, One, RefNum, Zero};

/// The last two convergents `p_(k-1)/q_(k-1)` and `p_(k-2)/q_(k-2)` of a continued fraction,
/// as used by the recurrence `p_k = a_k * p_(k-1) + p_(k-2)` (same for `q`).
/// See <https://crypto.stanford.edu/pbc/notes/contfrac/compute.html>
#[derive(Debug, Clone)]
pub struct Block<T> {
    pm1: T, // p_(k-1)
    pm2: T, // p_(k-2)
    qm1: T, // q_(k-1)
    qm2: T, // q_(k-2)
}

impl<T: Zero + One> Block<T> {
    /// The block before any coefficient is consumed, `p_(-1)/q_(-1) = 1/0`, `p_(-2)/q_(-2) = 0/1`
    pub fn identity() -> Self {
        Block { pm1: T::one(), pm2: T::zero(), qm1: T::zero(), qm2: T::one() }
    }
}

impl<T: Integer + NumRef + Clone> Block<T>
where
    for<'r> &'r T: RefNum<T>,
{
    /// Consume the next coefficient and return the new convergent `(p_k, q_k)`
    pub fn advance(&mut self, a: &T) -> (T, T) {
        let p = a * &self.pm1 + &self.pm2;
        let q = a * &self.qm1 + &self.qm2;

        swap(&mut self.pm2, &mut self.pm1); // self.pm2 = self.pm1
        swap(&mut self.qm2, &mut self.qm1); // self.qm2 = self.qm1
        self.pm1 = p.clone();
        self.qm1 = q.clone();
        (p, q)
    }
}
