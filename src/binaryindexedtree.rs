use crate::error::to_half_open;
use crate::util::{Commutativity, Inverse, Monoid, Repeat};

/// 可換モノイドのトレイト
pub trait CommutativeMonoid: Monoid + Commutativity {}
impl<T: Monoid + Commutativity> CommutativeMonoid for T {}

/// アーベル群のトレイト
pub trait AbelianGroup: CommutativeMonoid + Inverse {}
impl<T: CommutativeMonoid + Inverse> AbelianGroup for T {}

fn add_raw<M: CommutativeMonoid>(monoid: &M, tree: &mut [M::T], mut index: usize, val: &M::T) {
    while index < tree.len() {
        tree[index] = monoid.op(&tree[index], val);
        index |= index + 1;
    }
}

fn prefix_raw<M: CommutativeMonoid>(monoid: &M, tree: &[M::T], mut end: usize) -> M::T {
    let mut s = monoid.e();
    while end > 0 {
        s = monoid.op(&s, &tree[end - 1]);
        end &= end - 1;
    }
    s
}

fn unwrap_range(range: impl std::ops::RangeBounds<usize>, len: usize) -> (usize, usize) {
    to_half_open(range, len).unwrap_or_else(|e| panic!("{e}"))
}

/// BinaryIndexedTree. FenwickTreeとも
///
/// SegmentTreeがモノイドが可換なときに限定して高速化されている. 添字は0始まり.
#[derive(Clone)]
pub struct BinaryIndexedTree<M: CommutativeMonoid>(Box<[M::T]>, M);

impl<M: CommutativeMonoid> BinaryIndexedTree<M> {
    /// 全ての要素が`monoid.e()`の長さ`n`のBinaryIndexedTreeを構築する.
    ///
    /// # Time complexity
    ///
    /// - *O*(*n*)
    #[must_use]
    pub fn new(monoid: M, n: usize) -> Self {
        Self((0..n).map(|_| monoid.e()).collect(), monoid)
    }

    /// 配列`vec`からBinaryIndexedTreeを構築する.
    ///
    /// # Time complexity
    ///
    /// - *O*(*n*)
    #[must_use]
    pub fn from_vec(monoid: M, mut vec: Vec<M::T>) -> Self {
        let n = vec.len();
        for i in 0..n {
            let j = i | (i + 1);
            if j < n {
                vec[j] = monoid.op(&vec[j], &vec[i]);
            }
        }
        log::debug!("built BinaryIndexedTree: len = {n}");
        Self(vec.into_boxed_slice(), monoid)
    }

    /// BinaryIndexedTreeの長さを返す
    ///
    /// # Time complexity
    ///
    /// - *O*(1)
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// BinaryIndexedTreeが空か判定する
    ///
    /// # Time complexity
    ///
    /// - *O*(1)
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// `index`番目の要素に`val`を掛ける
    ///
    /// # Constraints
    ///
    /// - `index < self.len()`
    ///
    /// # Time complexity
    ///
    /// - *O*(log *n*)
    pub fn add(&mut self, index: usize, val: &M::T) {
        debug_assert!(index < self.len());
        add_raw(&self.1, &mut self.0, index, val);
    }

    /// `0..end`の範囲の要素の総積を計算する
    ///
    /// # Constraints
    ///
    /// - `end <= self.len()`
    ///
    /// # Time complexity
    ///
    /// - *O*(log *n*)
    #[must_use]
    pub fn prefix(&self, end: usize) -> M::T {
        debug_assert!(end <= self.len());
        prefix_raw(&self.1, &self.0, end)
    }
}

impl<G: AbelianGroup> BinaryIndexedTree<G> {
    /// `range`の範囲の要素の総積を計算する
    ///
    /// # Constraints
    ///
    /// - `range`は`0..self.len()`に含まれる区間である. 満たさない場合はpanicする.
    ///
    /// # Time complexity
    ///
    /// - *O*(log *n*)
    #[must_use]
    pub fn sum(&self, range: impl std::ops::RangeBounds<usize>) -> G::T {
        let (mut left, mut right) = unwrap_range(range, self.len());
        let mut s = self.1.e();
        while left != right {
            if left < right {
                s = self.1.op(&s, &self.0[right - 1]);
                right &= right - 1;
            } else {
                s = self.1.opinv(&s, &self.0[left - 1]);
                left &= left - 1;
            }
        }
        s
    }

    /// `index`番目の要素を取得する
    ///
    /// # Constraints
    ///
    /// - `index < self.len()`
    ///
    /// # Time complexity
    ///
    /// - *O*(log *n*)
    #[must_use]
    pub fn get(&self, index: usize) -> G::T {
        self.sum(index..=index)
    }
}

/// 区間への加算と区間の総和を扱えるBinaryIndexedTree
///
/// 2本のBinaryIndexedTreeで実現している.
/// `add`で区間の各要素に同じ値を掛け, `sum`で区間の総積を計算する.
#[derive(Clone)]
pub struct RangeBinaryIndexedTree<G: AbelianGroup + Repeat> {
    slope: Box<[G::T]>,
    offset: Box<[G::T]>,
    group: G,
}

impl<G: AbelianGroup + Repeat> RangeBinaryIndexedTree<G> {
    /// 全ての要素が`group.e()`の長さ`n`のRangeBinaryIndexedTreeを構築する.
    ///
    /// # Time complexity
    ///
    /// - *O*(*n*)
    #[must_use]
    pub fn new(group: G, n: usize) -> Self {
        Self {
            slope: (0..n).map(|_| group.e()).collect(),
            offset: (0..n).map(|_| group.e()).collect(),
            group,
        }
    }

    /// 列の長さを返す
    ///
    /// # Time complexity
    ///
    /// - *O*(1)
    #[must_use]
    pub fn len(&self) -> usize {
        self.slope.len()
    }

    /// 列が空か判定する
    ///
    /// # Time complexity
    ///
    /// - *O*(1)
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slope.is_empty()
    }

    /// `range`の範囲の全ての要素に`val`を掛ける
    ///
    /// # Constraints
    ///
    /// - `range`は`0..self.len()`に含まれる区間である. 満たさない場合はpanicする.
    ///
    /// # Time complexity
    ///
    /// - *O*(log *n*)
    pub fn add(&mut self, range: impl std::ops::RangeBounds<usize>, val: &G::T) {
        let (left, right) = unwrap_range(range, self.len());
        if left == right {
            return;
        }
        let g = &self.group;
        add_raw(g, &mut self.slope, left, val);
        add_raw(g, &mut self.offset, left, &g.repeat(val, left));
        // right == len の位置は前方の総積に現れないので省略する
        if right < self.len() {
            add_raw(g, &mut self.slope, right, &g.inv(val));
            add_raw(g, &mut self.offset, right, &g.inv(&g.repeat(val, right)));
        }
    }

    fn prefix(&self, end: usize) -> G::T {
        let g = &self.group;
        g.opinv(
            &g.repeat(&prefix_raw(g, &self.slope, end), end),
            &prefix_raw(g, &self.offset, end),
        )
    }

    /// `range`の範囲の要素の総積を計算する
    ///
    /// # Constraints
    ///
    /// - `range`は`0..self.len()`に含まれる区間である. 満たさない場合はpanicする.
    ///
    /// # Time complexity
    ///
    /// - *O*(log *n*)
    #[must_use]
    pub fn sum(&self, range: impl std::ops::RangeBounds<usize>) -> G::T {
        let (left, right) = unwrap_range(range, self.len());
        self.group.opinv(&self.prefix(right), &self.prefix(left))
    }

    /// `index`番目の要素を取得する
    ///
    /// # Constraints
    ///
    /// - `index < self.len()`
    ///
    /// # Time complexity
    ///
    /// - *O*(log *n*)
    #[must_use]
    pub fn get(&self, index: usize) -> G::T {
        self.sum(index..=index)
    }
}
