/// オイラーのφ関数. `n`以下で`n`と互いに素な正の整数の個数を返す.
///
/// `euler_phi(0) == 0`とする.
///
/// # Time complexity
///
/// - *O*(√*n*)
#[must_use]
pub fn euler_phi(mut n: u64) -> u64 {
    let mut r = n;
    let mut i = 2;
    while i <= n / i {
        if n % i == 0 {
            while n % i == 0 {
                n /= i;
            }
            r -= r / i;
        }
        i += 1;
    }
    if n > 1 {
        r -= r / n;
    }
    r
}

/// `0..=max`の範囲のオイラーのφ関数の値の表
#[derive(Clone)]
pub struct TotientTable(Box<[usize]>);

impl TotientTable {
    /// 篩の要領で表を構築する.
    ///
    /// # Time complexity
    ///
    /// - *O*(*n* log log *n*)
    #[must_use]
    pub fn new(max: usize) -> Self {
        let mut phi: Vec<usize> = (0..=max).collect();
        for p in 2..=max {
            // まだ誰にも割られていなければ素数
            if phi[p] == p {
                for j in (p..=max).step_by(p) {
                    phi[j] -= phi[j] / p;
                }
            }
        }
        log::debug!("built TotientTable: max = {max}");
        Self(phi.into_boxed_slice())
    }

    /// 表の上限を返す
    #[must_use]
    pub fn max(&self) -> usize {
        self.0.len() - 1
    }

    /// φ(`n`)を返す
    ///
    /// # Constraints
    ///
    /// - `n <= self.max()`
    ///
    /// # Time complexity
    ///
    /// - *O*(1)
    #[must_use]
    pub fn get(&self, n: usize) -> usize {
        debug_assert!(n <= self.max());
        self.0[n]
    }
}
