use crate::error::{check_closed, to_half_open, RangeError};
use crate::util::{Additive, Integer, Maximum, Minimum, Monoid};

/// 作用素付きモノイド
///
/// `comp`は結合的で`id`を単位元に持つ必要がある. また`act`は区間の長さによらず定数時間で計算できなければならない.
pub trait LazyMonoid: Monoid {
    /// 作用素の型
    type F: Eq + Clone;

    /// 何もしない作用素を返す
    fn id(&self) -> Self::F;
    /// `f`を適用した後に`g`を適用するのと同じ作用素を返す
    fn comp(&self, f: &Self::F, g: &Self::F) -> Self::F;
    /// 長さ`len`の区間の総積が`x`であるとき, 区間の全要素に`f`を適用した後の総積を返す
    fn act(&self, x: &Self::T, len: usize, f: &Self::F) -> Self::T;
}

/// 遅延伝搬セグメントツリー
///
/// 区間への作用素の適用と区間の総積の計算をどちらも *O*(log *n*) で行う.
/// モノイドは可換である必要はなく, 総積は常に添字の小さい方から順に計算される.
///
/// 区間は両端を含む閉区間`[left, right]`で指定する.
pub struct LazyRangeTree<M: LazyMonoid> {
    len: usize,
    tree: Box<[M::T]>,
    lazy: Box<[M::F]>,
    monoid: M,
}

impl<M: LazyMonoid> LazyRangeTree<M> {
    /// 全ての要素が`monoid.e()`で初期化された長さ`n`のLazyRangeTreeを構築する.
    ///
    /// # Time complexity
    ///
    /// - *O*(*n*)
    #[must_use]
    pub fn new(monoid: M, n: usize) -> Self {
        let vec = (0..n).map(|_| monoid.e()).collect();
        Self::from_vec(monoid, vec)
    }

    /// 配列`vec`からLazyRangeTreeを構築する.
    ///
    /// # Time complexity
    ///
    /// - *O*(*n*)
    #[must_use]
    pub fn from_vec(monoid: M, vec: Vec<M::T>) -> Self {
        let len = vec.len();
        let mut tree = Self {
            len,
            tree: (0..len * 4).map(|_| monoid.e()).collect(),
            lazy: (0..len * 4).map(|_| monoid.id()).collect(),
            monoid,
        };
        if len > 0 {
            tree.build(0, 0, len - 1, &vec);
        }
        log::debug!("built LazyRangeTree: len = {len}, nodes = {}", len * 4);
        tree
    }

    /// 列の長さを返す.
    ///
    /// # Time complexity
    ///
    /// - *O*(1)
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// 列が空かどうか判定する
    ///
    /// # Time complexity
    ///
    /// - *O*(1)
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn build(&mut self, p: usize, l: usize, r: usize, items: &[M::T]) {
        if l == r {
            self.tree[p] = items[l].clone();
            return;
        }
        let m = (l + r) / 2;
        self.build(2 * p + 1, l, m, items);
        self.build(2 * p + 2, m + 1, r, items);
        self.tree[p] = self.monoid.op(&self.tree[2 * p + 1], &self.tree[2 * p + 2]);
    }

    /// 節点`p`に溜まっている作用素を`p`自身に適用し, 子には遅延させたまま渡す
    fn propagate(&mut self, p: usize, l: usize, r: usize) {
        if self.lazy[p] == self.monoid.id() {
            return;
        }
        let f = std::mem::replace(&mut self.lazy[p], self.monoid.id());
        self.tree[p] = self.monoid.act(&self.tree[p], r + 1 - l, &f);
        if l != r {
            self.lazy[2 * p + 1] = self.monoid.comp(&self.lazy[2 * p + 1], &f);
            self.lazy[2 * p + 2] = self.monoid.comp(&self.lazy[2 * p + 2], &f);
        }
    }

    fn update_rec(&mut self, p: usize, l: usize, r: usize, i: usize, j: usize, f: &M::F) {
        self.propagate(p, l, r);
        if j < l || r < i {
            return;
        }
        if i <= l && r <= j {
            self.tree[p] = self.monoid.act(&self.tree[p], r + 1 - l, f);
            if l != r {
                self.lazy[2 * p + 1] = self.monoid.comp(&self.lazy[2 * p + 1], f);
                self.lazy[2 * p + 2] = self.monoid.comp(&self.lazy[2 * p + 2], f);
            }
            return;
        }
        let m = (l + r) / 2;
        self.update_rec(2 * p + 1, l, m, i, j, f);
        self.update_rec(2 * p + 2, m + 1, r, i, j, f);
        self.tree[p] = self.monoid.op(&self.tree[2 * p + 1], &self.tree[2 * p + 2]);
    }

    fn query_rec(&mut self, p: usize, l: usize, r: usize, i: usize, j: usize) -> M::T {
        self.propagate(p, l, r);
        if j < l || r < i {
            return self.monoid.e();
        }
        if i <= l && r <= j {
            return self.tree[p].clone();
        }
        let m = (l + r) / 2;
        let left = self.query_rec(2 * p + 1, l, m, i, j);
        let right = self.query_rec(2 * p + 2, m + 1, r, i, j);
        self.monoid.op(&left, &right)
    }

    fn collect(&mut self, p: usize, l: usize, r: usize, out: &mut Vec<M::T>) {
        self.propagate(p, l, r);
        if l == r {
            out.push(self.tree[p].clone());
            return;
        }
        let m = (l + r) / 2;
        self.collect(2 * p + 1, l, m, out);
        self.collect(2 * p + 2, m + 1, r, out);
    }

    /// 閉区間`[left, right]`の全ての要素に作用素`f`を適用する.
    ///
    /// # Errors
    ///
    /// - `left > right`なら`RangeError::InvertedRange`
    /// - `right >= self.len()`なら`RangeError::IndexOutOfRange`
    ///
    /// # Time complexity
    ///
    /// - *O*(log *n*)
    pub fn try_update(&mut self, left: usize, right: usize, f: &M::F) -> Result<(), RangeError> {
        check_closed(left, right, self.len)?;
        self.update_rec(0, 0, self.len - 1, left, right, f);
        Ok(())
    }

    /// 閉区間`[left, right]`の全ての要素に作用素`f`を適用する.
    ///
    /// # Constraints
    ///
    /// - `left <= right < self.len()`. 満たさない場合はpanicする.
    ///
    /// # Time complexity
    ///
    /// - *O*(log *n*)
    pub fn update(&mut self, left: usize, right: usize, f: &M::F) {
        if let Err(e) = self.try_update(left, right, f) {
            panic!("{e}");
        }
    }

    /// 閉区間`[left, right]`の要素の総積を計算する.
    ///
    /// 遅延していた作用素の伝搬が起きるので`&mut self`を取る.
    ///
    /// # Errors
    ///
    /// - `left > right`なら`RangeError::InvertedRange`
    /// - `right >= self.len()`なら`RangeError::IndexOutOfRange`
    ///
    /// # Time complexity
    ///
    /// - *O*(log *n*)
    pub fn try_query(&mut self, left: usize, right: usize) -> Result<M::T, RangeError> {
        check_closed(left, right, self.len)?;
        Ok(self.query_rec(0, 0, self.len - 1, left, right))
    }

    /// 閉区間`[left, right]`の要素の総積を計算する.
    ///
    /// # Constraints
    ///
    /// - `left <= right < self.len()`. 満たさない場合はpanicする.
    ///
    /// # Time complexity
    ///
    /// - *O*(log *n*)
    pub fn query(&mut self, left: usize, right: usize) -> M::T {
        self.try_query(left, right).unwrap_or_else(|e| panic!("{e}"))
    }

    /// 指定した区間の値の総積を計算する. 区間が空なら`monoid.e()`を返す.
    ///
    /// # Constraints
    ///
    /// - `range`は`0..self.len()`に含まれる区間である.
    ///
    /// # Time complexity
    ///
    /// - *O*(log *n*)
    pub fn prod(&mut self, range: impl std::ops::RangeBounds<usize>) -> M::T {
        match to_half_open(range, self.len) {
            Ok((l, r)) if l == r => self.monoid.e(),
            Ok((l, r)) => self.query(l, r - 1),
            Err(e) => panic!("{e}"),
        }
    }

    /// 指定した区間に作用素`f`を適用する. 区間が空なら何もしない.
    ///
    /// # Constraints
    ///
    /// - `range`は`0..self.len()`に含まれる区間である.
    ///
    /// # Time complexity
    ///
    /// - *O*(log *n*)
    pub fn apply(&mut self, range: impl std::ops::RangeBounds<usize>, f: &M::F) {
        match to_half_open(range, self.len) {
            Ok((l, r)) if l == r => {}
            Ok((l, r)) => self.update(l, r - 1, f),
            Err(e) => panic!("{e}"),
        }
    }

    /// 指定した位置の値を取得する
    ///
    /// # Constraints
    ///
    /// - `index < self.len()`
    ///
    /// # Time complexity
    ///
    /// - *O*(log *n*)
    #[must_use]
    pub fn get(&mut self, index: usize) -> M::T {
        self.query(index, index)
    }

    /// 指定した位置の値を, 作用素の伝搬を起こさずに取得する
    ///
    /// # Constraints
    ///
    /// - `index < self.len()`
    ///
    /// # Time complexity
    ///
    /// - *O*(log *n*)
    #[must_use]
    pub fn get_imu(&self, index: usize) -> M::T {
        if let Err(e) = check_closed(index, index, self.len) {
            panic!("{e}");
        }
        let (mut p, mut l, mut r) = (0, 0, self.len - 1);
        let mut path = Vec::with_capacity(usize::BITS as usize);
        loop {
            path.push(p);
            if l == r {
                break;
            }
            let m = (l + r) / 2;
            if index <= m {
                p = 2 * p + 1;
                r = m;
            } else {
                p = 2 * p + 2;
                l = m + 1;
            }
        }
        // 深い節点に溜まっている作用素ほど先に適用されたもの
        let f = path
            .iter()
            .rev()
            .fold(self.monoid.id(), |f, &q| self.monoid.comp(&f, &self.lazy[q]));
        self.monoid.act(&self.tree[p], 1, &f)
    }

    /// 現在の列を配列にして返す
    ///
    /// # Time complexity
    ///
    /// - *O*(*n*)
    #[must_use]
    pub fn to_vec(&mut self) -> Vec<M::T> {
        let mut out = Vec::with_capacity(self.len);
        if self.len > 0 {
            self.collect(0, 0, self.len - 1, &mut out);
        }
        out
    }
}

impl<M: LazyMonoid + Default> From<Vec<M::T>> for LazyRangeTree<M> {
    fn from(value: Vec<M::T>) -> Self {
        Self::from_vec(M::default(), value)
    }
}

impl<M: LazyMonoid> std::fmt::Debug for LazyRangeTree<M>
where
    M::T: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries((0..self.len).map(|i| self.get_imu(i)))
            .finish()
    }
}

impl<T: Integer> LazyMonoid for Additive<T> {
    type F = T;
    fn id(&self) -> T {
        T::zero()
    }
    fn comp(&self, &f: &T, &g: &T) -> T {
        f + g
    }
    fn act(&self, &x: &T, len: usize, &f: &T) -> T {
        x + f * T::from_len(len)
    }
}

impl<T: Integer> LazyMonoid for Minimum<T> {
    type F = T;
    fn id(&self) -> T {
        T::zero()
    }
    fn comp(&self, &f: &T, &g: &T) -> T {
        f + g
    }
    fn act(&self, &x: &T, _len: usize, &f: &T) -> T {
        x + f
    }
}

impl<T: Integer> LazyMonoid for Maximum<T> {
    type F = T;
    fn id(&self) -> T {
        T::zero()
    }
    fn comp(&self, &f: &T, &g: &T) -> T {
        f + g
    }
    fn act(&self, &x: &T, _len: usize, &f: &T) -> T {
        x + f
    }
}

/// 区間加算・区間和
pub type RangeSumQuery<T> = LazyRangeTree<Additive<T>>;
/// 区間加算・区間最小値
///
/// `new`で作ると全要素が`T::MAX`という普通の値になるので, 正の値を足すと溢れる. 初期値は`from_vec`で与える.
pub type RangeMinQuery<T> = LazyRangeTree<Minimum<T>>;
/// 区間加算・区間最大値
///
/// `new`で作ると全要素が`T::MIN`という普通の値になるので, 負の値を足すと溢れる. 初期値は`from_vec`で与える.
pub type RangeMaxQuery<T> = LazyRangeTree<Maximum<T>>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::{Associativity, Identity, Magma};
    use proptest::{collection::vec, prelude::*, test_runner::Config as ProptestConfig};

    /// 先頭の値, 末尾の値, 総和. 可換でないモノイド
    #[derive(Default)]
    struct Ends;
    impl Magma for Ends {
        type T = Option<(i64, i64, i64)>;
        fn op(&self, a: &Self::T, b: &Self::T) -> Self::T {
            match (a, b) {
                (None, _) => *b,
                (_, None) => *a,
                (Some((first, _, s)), Some((_, last, t))) => Some((*first, *last, s + t)),
            }
        }
    }
    impl Identity for Ends {
        fn e(&self) -> Self::T {
            None
        }
    }
    impl Associativity for Ends {}
    impl LazyMonoid for Ends {
        type F = i64;
        fn id(&self) -> i64 {
            0
        }
        fn comp(&self, f: &i64, g: &i64) -> i64 {
            f + g
        }
        fn act(&self, x: &Self::T, len: usize, f: &i64) -> Self::T {
            x.map(|(a, b, s)| (a + f, b + f, s + f * len as i64))
        }
    }

    const MOD: u64 = 998244353;

    /// 区間和に`x ↦ a x + b`を作用させる. 作用素の合成が可換でない
    #[derive(Default)]
    struct AffineSum;
    impl Magma for AffineSum {
        type T = u64;
        fn op(&self, a: &u64, b: &u64) -> u64 {
            (a + b) % MOD
        }
    }
    impl Identity for AffineSum {
        fn e(&self) -> u64 {
            0
        }
    }
    impl Associativity for AffineSum {}
    impl LazyMonoid for AffineSum {
        type F = (u64, u64);
        fn id(&self) -> (u64, u64) {
            (1, 0)
        }
        fn comp(&self, &(fa, fb): &(u64, u64), &(ga, gb): &(u64, u64)) -> (u64, u64) {
            (ga * fa % MOD, (ga * fb + gb) % MOD)
        }
        fn act(&self, x: &u64, len: usize, &(a, b): &(u64, u64)) -> u64 {
            (a * x + b * len as u64) % MOD
        }
    }

    fn ends(v: &[i64]) -> Vec<Option<(i64, i64, i64)>> {
        v.iter().map(|&x| Some((x, x, x))).collect()
    }

    #[test]
    fn sum_add() {
        let mut seg = RangeSumQuery::<i64>::from(vec![1, 2, 3, 4, 5]);
        assert_eq!(seg.query(0, 4), 15);
        seg.update(1, 3, &10);
        assert_eq!(seg.query(0, 4), 45);
        assert_eq!(seg.query(1, 1), 12);
        assert_eq!(seg.query(4, 4), 5);
        assert_eq!(seg.to_vec(), vec![1, 12, 13, 14, 5]);
    }

    #[test]
    fn min_add() {
        let mut seg = RangeMinQuery::<i32>::from(vec![5, 1, 4, 2]);
        assert_eq!(seg.query(0, 3), 1);
        seg.update(0, 1, &3);
        assert_eq!(seg.query(0, 3), 2);
        assert_eq!(seg.query(0, 1), 4);
        assert_eq!(seg.to_vec(), vec![8, 4, 4, 2]);
    }

    #[test]
    fn max_add() {
        let mut seg = RangeMaxQuery::<i32>::from((0..10).collect::<Vec<_>>());
        assert_eq!(seg.query(2, 6), 6);
        assert_eq!(seg.prod(5..), 9);
        seg.apply(1..4, &12);
        assert_eq!(seg.query(2, 6), 15);
        assert_eq!(seg.prod(5..), 9);
        seg.apply(3..8, &-20);
        assert_eq!(seg.query(2, 6), 14);
        assert_eq!(seg.prod(5..), 9);
        assert_eq!(seg.prod(3..8), -5);
    }

    #[test]
    fn identity_elements() {
        let mut seg = RangeMinQuery::<i32>::new(Minimum::default(), 6);
        assert_eq!(seg.query(0, 5), i32::MAX);
        assert_eq!(seg.prod(2..2), i32::MAX);
        seg.update(1, 2, &-7);
        assert_eq!(seg.query(0, 5), i32::MAX - 7);
        assert_eq!(seg.query(3, 5), i32::MAX);

        let mut seg = RangeSumQuery::<u32>::new(Additive::default(), 6);
        seg.update(2, 4, &3);
        assert_eq!(seg.query(0, 5), 9);
        seg.apply(3..3, &100);
        assert_eq!(seg.query(0, 5), 9);
    }

    #[test]
    fn extreme_values() {
        let mut seg = RangeMinQuery::<i64>::from(vec![i64::MAX, 3]);
        seg.update(0, 1, &-5);
        assert_eq!(seg.query(0, 0), i64::MAX - 5);
        assert_eq!(seg.query(0, 1), -2);

        let mut seg = RangeMaxQuery::<i32>::from(vec![i32::MIN, 3]);
        seg.update(0, 0, &7);
        assert_eq!(seg.query(0, 0), i32::MIN + 7);
        assert_eq!(seg.get_imu(0), i32::MIN + 7);
        assert_eq!(seg.query(0, 1), 3);
    }

    #[test]
    fn single_element() {
        let mut seg = RangeSumQuery::<i64>::from(vec![7]);
        assert_eq!(seg.len(), 1);
        seg.update(0, 0, &5);
        seg.update(0, 0, &-2);
        assert_eq!(seg.query(0, 0), 10);
        assert_eq!(seg.get_imu(0), 10);
    }

    #[test]
    fn not_commutative() {
        let mut seg = LazyRangeTree::from_vec(Ends, ends(&[3, 1, 4, 1, 5, 9, 2, 6]));
        assert_eq!(seg.query(0, 7), Some((3, 6, 31)));
        assert_eq!(seg.query(2, 5), Some((4, 9, 19)));
        seg.update(1, 6, &10);
        assert_eq!(seg.query(0, 2), Some((3, 14, 28)));
        assert_eq!(seg.query(5, 7), Some((19, 6, 37)));
        // 部分的に重なる更新の後で、伝搬前後どちらから読んでも同じ値になる
        seg.update(3, 4, &-1);
        assert_eq!(seg.get_imu(4), Some((14, 14, 14)));
        assert_eq!(seg.query(3, 6), Some((10, 12, 55)));
        assert_eq!(seg.get(4), Some((14, 14, 14)));
    }

    #[test]
    fn affine_order() {
        let mut seg = LazyRangeTree::from_vec(AffineSum, vec![1, 2, 3, 4]);
        seg.update(0, 3, &(2, 0));
        seg.update(1, 2, &(1, 5));
        seg.update(0, 1, &(3, 1));
        // [1, 2, 3, 4] -> [2, 4, 6, 8] -> [2, 9, 11, 8] -> [7, 28, 11, 8]
        assert_eq!(seg.get_imu(1), 28);
        assert_eq!(seg.query(0, 3), 54);
        assert_eq!(seg.to_vec(), vec![7, 28, 11, 8]);
    }

    #[test]
    fn errors() {
        let mut seg = RangeSumQuery::<i64>::from(vec![1, 2, 3]);
        assert_eq!(
            seg.try_query(2, 1),
            Err(RangeError::InvertedRange { left: 2, right: 1 })
        );
        assert_eq!(
            seg.try_update(0, 3, &1),
            Err(RangeError::IndexOutOfRange { index: 3, len: 3 })
        );
        // 失敗した操作は何も変更しない
        assert_eq!(seg.to_vec(), vec![1, 2, 3]);

        let mut empty = RangeSumQuery::<i64>::from(vec![]);
        assert!(empty.is_empty());
        assert_eq!(
            empty.try_query(0, 0),
            Err(RangeError::IndexOutOfRange { index: 0, len: 0 })
        );
        assert_eq!(empty.prod(..), 0);
        assert_eq!(empty.to_vec(), Vec::<i64>::new());
    }

    #[test]
    #[should_panic(expected = "範囲外")]
    fn query_out_of_range() {
        let mut seg = RangeSumQuery::<i64>::from(vec![1, 2, 3]);
        let _ = seg.query(1, 3);
    }

    #[test]
    #[should_panic(expected = "左端が右端より大きい")]
    fn update_inverted() {
        let mut seg = RangeSumQuery::<i64>::from(vec![1, 2, 3]);
        seg.update(2, 0, &1);
    }

    #[test]
    fn debug() {
        let mut seg = RangeSumQuery::<i64>::from(vec![1, 2, 3, 4]);
        seg.update(1, 2, &1);
        assert_eq!(format!("{seg:?}"), "[1, 3, 4, 4]");
    }

    #[derive(Clone, Debug)]
    enum Op {
        Update(usize, usize, u64, u64),
        Query(usize, usize),
    }

    fn scenario() -> impl Strategy<Value = (Vec<u64>, Vec<Op>)> {
        (1usize..40).prop_flat_map(|n| {
            let op = prop_oneof![
                (0..n, 0..n, 0..MOD, 0..MOD)
                    .prop_map(|(i, j, a, b)| Op::Update(i.min(j), i.max(j), a, b)),
                (0..n, 0..n).prop_map(|(i, j)| Op::Query(i.min(j), i.max(j))),
            ];
            (vec(0..MOD, n), vec(op, 0..80))
        })
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(256))]

        #[test]
        fn proptest_affine_naive((initial, ops) in scenario()) {
            let mut naive = initial.clone();
            let mut seg = LazyRangeTree::from_vec(AffineSum, initial);
            for op in ops {
                match op {
                    Op::Update(i, j, a, b) => {
                        seg.update(i, j, &(a, b));
                        for x in &mut naive[i..=j] {
                            *x = (a * *x + b) % MOD;
                        }
                    }
                    Op::Query(i, j) => {
                        let expected = naive[i..=j].iter().fold(0, |s, x| (s + x) % MOD);
                        prop_assert_eq!(seg.query(i, j), expected);
                    }
                }
            }
            prop_assert_eq!(seg.to_vec(), naive);
        }

        #[test]
        fn proptest_build_fold(v in vec(-1000i64..1000, 1..60)) {
            let n = v.len();
            let expected = v.iter().fold(None, |acc, &x| Ends.op(&acc, &Some((x, x, x))));
            let mut seg = LazyRangeTree::from_vec(Ends, ends(&v));
            prop_assert_eq!(seg.query(0, n - 1), expected);
        }

        #[test]
        fn proptest_split(
            v in vec(-1000i64..1000, 2..60),
            f in -50i64..50,
            seed in any::<(usize, usize, usize, usize, usize)>(),
        ) {
            let n = v.len();
            let (a, b, c, d, m) = seed;
            let mut seg = LazyRangeTree::from_vec(Ends, ends(&v));
            seg.update((a % n).min(b % n), (a % n).max(b % n), &f);
            let (i, j) = ((c % n).min(d % n), (c % n).max(d % n));
            prop_assume!(i < j);
            let m = i + m % (j - i);
            let whole = seg.query(i, j);
            let left = seg.query(i, m);
            let right = seg.query(m + 1, j);
            prop_assert_eq!(whole, Ends.op(&left, &right));
        }

        #[test]
        fn proptest_additivity(
            v in vec(0..MOD, 1..50),
            f in (0..MOD, 0..MOD),
            g in (0..MOD, 0..MOD),
            seed in any::<(usize, usize, usize, usize)>(),
        ) {
            let n = v.len();
            let (a, b, c, d) = seed;
            let (i, j) = ((a % n).min(b % n), (a % n).max(b % n));
            let mut twice = LazyRangeTree::from_vec(AffineSum, v.clone());
            let mut once = LazyRangeTree::from_vec(AffineSum, v);
            twice.update(i, j, &f);
            twice.update(i, j, &g);
            once.update(i, j, &AffineSum.comp(&f, &g));
            let (k, l) = (i + c % (j - i + 1), i + d % (j - i + 1));
            let (k, l) = (k.min(l), k.max(l));
            prop_assert_eq!(twice.query(k, l), once.query(k, l));
        }

        #[test]
        fn proptest_disjoint(
            v in vec(-1000i64..1000, 1..50),
            f in -50i64..50,
            seed in any::<(usize, usize)>(),
        ) {
            let n = v.len();
            let (i, j) = ((seed.0 % n).min(seed.1 % n), (seed.0 % n).max(seed.1 % n));
            let mut seg = RangeSumQuery::<i64>::from(v.clone());
            seg.update(i, j, &f);
            for k in (0..n).filter(|&k| k < i || j < k) {
                prop_assert_eq!(seg.query(k, k), v[k]);
            }
            for k in i..=j {
                prop_assert_eq!(seg.get_imu(k), v[k] + f);
            }
        }
    }
}
