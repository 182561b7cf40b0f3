/// エラトステネスの篩
///
/// `0..=max`の範囲の整数が素数かどうかを前計算する.
#[derive(Clone)]
pub struct Sieve(Box<[bool]>);

impl Sieve {
    /// `0..=max`の範囲で篩を構築する.
    ///
    /// # Time complexity
    ///
    /// - *O*(*n* log log *n*)
    #[must_use]
    pub fn new(max: usize) -> Self {
        let mut table = vec![true; max + 1];
        table[0] = false;
        if max >= 1 {
            table[1] = false;
        }
        for i in (4..=max).step_by(2) {
            table[i] = false;
        }
        let mut p = 3;
        while p <= max / p {
            if table[p] {
                for j in (p * p..=max).step_by(2 * p) {
                    table[j] = false;
                }
            }
            p += 2;
        }
        log::debug!("built Sieve: max = {max}");
        Self(table.into_boxed_slice())
    }

    /// 篩の上限を返す
    #[must_use]
    pub fn max(&self) -> usize {
        self.0.len() - 1
    }

    /// `n`が素数か判定する
    ///
    /// # Constraints
    ///
    /// - `n <= self.max()`
    ///
    /// # Time complexity
    ///
    /// - *O*(1)
    #[must_use]
    pub fn is_prime(&self, n: usize) -> bool {
        debug_assert!(n <= self.max());
        self.0[n]
    }

    /// `self.max()`以下の素数を昇順に列挙する
    pub fn primes(&self) -> impl Iterator<Item = usize> + '_ {
        self.0
            .iter()
            .enumerate()
            .filter_map(|(i, &b)| if b { Some(i) } else { None })
    }
}

/// 最小素因数の表
///
/// 線形篩で`0..=max`の範囲の整数の最小素因数を前計算し, 素因数分解を高速に行う.
#[derive(Clone)]
pub struct MinFactorSieve {
    min_factor: Box<[usize]>,
    primes: Vec<usize>,
}

impl MinFactorSieve {
    /// `0..=max`の範囲で表を構築する.
    ///
    /// # Time complexity
    ///
    /// - *O*(*n*)
    #[must_use]
    pub fn new(max: usize) -> Self {
        let mut min_factor = vec![0; max + 1];
        let mut primes = Vec::new();
        for i in 2..=max {
            if min_factor[i] == 0 {
                min_factor[i] = i;
                primes.push(i);
            }
            for &p in &primes {
                if p > min_factor[i] || p > max / i {
                    break;
                }
                min_factor[p * i] = p;
            }
        }
        log::debug!("built MinFactorSieve: max = {max}, primes = {}", primes.len());
        Self {
            min_factor: min_factor.into_boxed_slice(),
            primes,
        }
    }

    /// 表の上限を返す
    #[must_use]
    pub fn max(&self) -> usize {
        self.min_factor.len() - 1
    }

    /// `n`の最小素因数を返す
    ///
    /// # Constraints
    ///
    /// - `2 <= n <= self.max()`
    ///
    /// # Time complexity
    ///
    /// - *O*(1)
    #[must_use]
    pub fn min_factor(&self, n: usize) -> usize {
        debug_assert!((2..=self.max()).contains(&n));
        self.min_factor[n]
    }

    /// `n`が素数か判定する
    ///
    /// # Constraints
    ///
    /// - `n <= self.max()`
    ///
    /// # Time complexity
    ///
    /// - *O*(1)
    #[must_use]
    pub fn is_prime(&self, n: usize) -> bool {
        debug_assert!(n <= self.max());
        n >= 2 && self.min_factor[n] == n
    }

    /// `self.max()`以下の素数を昇順に並べたもの
    #[must_use]
    pub fn primes(&self) -> &[usize] {
        &self.primes
    }

    /// `n`を素因数分解して`(素因数, 指数)`を素因数の昇順に返す. `n == 1`なら空.
    ///
    /// # Constraints
    ///
    /// - `1 <= n <= self.max()`
    ///
    /// # Time complexity
    ///
    /// - *O*(log *n*)
    #[must_use]
    pub fn factorize(&self, mut n: usize) -> Vec<(usize, u32)> {
        debug_assert!((1..=self.max()).contains(&n));
        let mut factors: Vec<(usize, u32)> = Vec::new();
        while n > 1 {
            let p = self.min_factor[n];
            match factors.last_mut() {
                Some((q, e)) if *q == p => *e += 1,
                _ => factors.push((p, 1)),
            }
            n /= p;
        }
        factors
    }
}
