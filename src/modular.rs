//! # Modular Arithmetic
//!
//! Residues modulo the prime 998244353 and a factorial table for binomial
//! and multinomial coefficients.

use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

pub const MOD: u32 = 998_244_353;

/// A residue modulo [`MOD`], always kept in `[0, MOD)`.
#[derive(Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Mint(u32);

impl Mint {
    pub const fn zero() -> Self {
        Self(0)
    }

    pub const fn one() -> Self {
        Self(1)
    }

    pub fn new(val: u64) -> Self {
        Self((val % MOD as u64) as u32)
    }

    pub fn val(self) -> u32 {
        self.0
    }

    pub fn pow(self, mut exp: u64) -> Self {
        let mut base = self;
        let mut ret = Self::one();
        while exp > 0 {
            if exp & 1 == 1 {
                ret *= base;
            }
            base *= base;
            exp >>= 1;
        }
        ret
    }

    /// Multiplicative inverse by Fermat's little theorem. The inverse of zero is zero.
    pub fn inv(self) -> Self {
        self.pow(MOD as u64 - 2)
    }
}

impl From<u32> for Mint {
    fn from(v: u32) -> Self {
        Self::new(v as u64)
    }
}

impl From<u64> for Mint {
    fn from(v: u64) -> Self {
        Self::new(v)
    }
}

impl From<usize> for Mint {
    fn from(v: usize) -> Self {
        Self::new(v as u64)
    }
}

impl fmt::Display for Mint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for Mint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Add for Mint {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        let s = self.0 + rhs.0;
        Self(if s >= MOD { s - MOD } else { s })
    }
}

impl Sub for Mint {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self(if self.0 >= rhs.0 {
            self.0 - rhs.0
        } else {
            self.0 + MOD - rhs.0
        })
    }
}

impl Mul for Mint {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        Self((self.0 as u64 * rhs.0 as u64 % MOD as u64) as u32)
    }
}

impl Neg for Mint {
    type Output = Self;
    fn neg(self) -> Self {
        Self::zero() - self
    }
}

impl AddAssign for Mint {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for Mint {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl MulAssign for Mint {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl Sum for Mint {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), |acc, x| acc + x)
    }
}

impl<'a> Sum<&'a Mint> for Mint {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

/// Factorials and inverse factorials of `0..=limit`.
///
/// Only `inv_fact[limit]` costs a modular exponentiation; every other inverse
/// factorial comes from `inv_fact[i] = inv_fact[i + 1] * (i + 1)`.
#[derive(Clone, Debug)]
pub struct FactorialTable {
    fact: Vec<Mint>,
    inv_fact: Vec<Mint>,
}

impl FactorialTable {
    pub fn new(limit: usize) -> Self {
        let mut fact = Vec::with_capacity(limit + 1);
        fact.push(Mint::one());
        for i in 1..=limit {
            fact.push(fact[i - 1] * Mint::from(i));
        }
        let mut inv_fact = vec![Mint::one(); limit + 1];
        inv_fact[limit] = fact[limit].inv();
        for i in (0..limit).rev() {
            inv_fact[i] = inv_fact[i + 1] * Mint::from(i + 1);
        }
        Self { fact, inv_fact }
    }

    pub fn limit(&self) -> usize {
        self.fact.len() - 1
    }

    pub fn fact(&self, n: usize) -> Mint {
        self.fact[n]
    }

    pub fn inv_fact(&self, n: usize) -> Mint {
        self.inv_fact[n]
    }

    /// Binomial coefficient, zero outside `0 <= k <= n`.
    ///
    /// Panics if `n` exceeds [`limit`](Self::limit).
    pub fn comb(&self, n: i64, k: i64) -> Mint {
        if n < 0 || k < 0 || k > n {
            return Mint::zero();
        }
        let (n, k) = (n as usize, k as usize);
        self.fact[n] * self.inv_fact[k] * self.inv_fact[n - k]
    }

    /// `(Σ parts)! / Π parts[i]!`
    pub fn multinomial(&self, parts: &[u32]) -> Mint {
        let total: usize = parts.iter().map(|&c| c as usize).sum();
        parts
            .iter()
            .fold(self.fact[total], |acc, &c| acc * self.inv_fact[c as usize])
    }

    /// Number of ways to write `total` as an ordered sum of `parts` non-negative integers.
    pub fn compositions(&self, total: usize, parts: usize) -> Mint {
        if parts == 0 {
            return if total == 0 { Mint::one() } else { Mint::zero() };
        }
        self.comb((total + parts - 1) as i64, (parts - 1) as i64)
    }
}
