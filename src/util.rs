use std::marker::PhantomData;
use std::ops::{Add, Mul, Neg};

/// 「0」に相当する値が存在することを表すトレイト
pub trait HasZero {
    /// 0の値を返す
    fn zero() -> Self;
}
/// その型に最小値が存在することを表すトレイト
pub trait HasMin {
    /// その型が取り得る最も小さい値を返す
    fn min_value() -> Self;
}
/// その型に最大値が存在することを表すトレイト
pub trait HasMax {
    /// その型が取り得る最も大きい値を返す
    fn max_value() -> Self;
}
/// 区間の長さから値を作れることを表すトレイト
pub trait FromLen {
    /// 長さ`len`を自身の型に変換する
    ///
    /// # Constraints
    ///
    /// - `len`は自身の型で表せる. 表せない場合はデバッグビルドでpanicする.
    fn from_len(len: usize) -> Self;
}

/// 整数型にHasZero, HasMin, HasMax, FromLenを実装するマクロ
macro_rules! impl_zero {
    ($($t: ty),*) => {$(
        impl HasZero for $t {
            fn zero() -> $t { 0 }
        }
        impl HasMin for $t {
            fn min_value() -> $t { Self::MIN }
        }
        impl HasMax for $t {
            fn max_value() -> $t { Self::MAX }
        }
        impl FromLen for $t {
            fn from_len(len: usize) -> $t {
                debug_assert!(<$t>::try_from(len).is_ok(), "長さ {len} は {} で表せない", stringify!($t));
                len as $t
            }
        }
    )*};
}

impl_zero! { u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize }

/// プリセットのモノイドが扱う整数型
pub trait Integer:
    Copy + Ord + Add<Output = Self> + Mul<Output = Self> + HasZero + HasMin + HasMax + FromLen
{
}
impl<T> Integer for T where
    T: Copy + Ord + Add<Output = T> + Mul<Output = T> + HasZero + HasMin + HasMax + FromLen
{
}

/// マグマ. 二項演算で閉じている代数構造
pub trait Magma {
    /// マグマの元の型
    type T: Eq;
    /// 二項演算
    fn op(&self, lhs: &Self::T, rhs: &Self::T) -> Self::T;
}

/// マグマに単位元があることを表すトレイト
pub trait Identity: Magma<T: Clone> {
    /// 単位元を構築して返す
    fn e(&self) -> Self::T;
}

/// マグマの全ての元が逆元を持つことを表すトレイト
pub trait Inverse: Magma {
    /// 逆元を返す
    fn inv(&self, v: &Self::T) -> Self::T;

    /// self.op(lhs, &self.inv(rhs)) と同じ
    fn opinv(&self, lhs: &Self::T, rhs: &Self::T) -> Self::T {
        self.op(lhs, &self.inv(rhs))
    }
}

/// 同じ元を繰り返し演算した値を定数時間で計算できることを表すトレイト
pub trait Repeat: Identity {
    /// `x`を`n`個並べて演算した値を返す. `n == 0`なら単位元
    fn repeat(&self, x: &Self::T, n: usize) -> Self::T;
}

/// マグマが結合律が成り立つことを表すトレイト
pub trait Associativity: Magma {}
/// マグマが交換則が成り立つことを表すトレイト
pub trait Commutativity: Magma {}

/// モノイド
///
/// 以下の条件を満たす必要があるが, 実行時には検査されない.
/// - 任意の `x`, `y`, `z` について `op(&op(&x, &y), &z) == op(&x, &op(&y, &z))`
/// - 任意の `x` について `op(&e(), &x) == x && op(&x, &e()) == x`
pub trait Monoid: Associativity + Identity {}
impl<T: Associativity + Identity> Monoid for T {}

/// 整数の加法
#[derive(Clone, Copy, Default, Debug)]
pub struct Additive<T>(PhantomData<T>);

/// 整数の最小値
#[derive(Clone, Copy, Default, Debug)]
pub struct Minimum<T>(PhantomData<T>);

/// 整数の最大値
#[derive(Clone, Copy, Default, Debug)]
pub struct Maximum<T>(PhantomData<T>);

impl<T: Integer> Magma for Additive<T> {
    type T = T;
    fn op(&self, &a: &T, &b: &T) -> T {
        a + b
    }
}
impl<T: Integer> Identity for Additive<T> {
    fn e(&self) -> T {
        T::zero()
    }
}
impl<T: Integer + Neg<Output = T>> Inverse for Additive<T> {
    fn inv(&self, &v: &T) -> T {
        -v
    }
}
impl<T: Integer> Repeat for Additive<T> {
    fn repeat(&self, &x: &T, n: usize) -> T {
        x * T::from_len(n)
    }
}
impl<T: Integer> Associativity for Additive<T> {}
impl<T: Integer> Commutativity for Additive<T> {}

impl<T: Integer> Magma for Minimum<T> {
    type T = T;
    fn op(&self, &a: &T, &b: &T) -> T {
        a.min(b)
    }
}
impl<T: Integer> Identity for Minimum<T> {
    fn e(&self) -> T {
        T::max_value()
    }
}
impl<T: Integer> Associativity for Minimum<T> {}
impl<T: Integer> Commutativity for Minimum<T> {}

impl<T: Integer> Magma for Maximum<T> {
    type T = T;
    fn op(&self, &a: &T, &b: &T) -> T {
        a.max(b)
    }
}
impl<T: Integer> Identity for Maximum<T> {
    fn e(&self) -> T {
        T::min_value()
    }
}
impl<T: Integer> Associativity for Maximum<T> {}
impl<T: Integer> Commutativity for Maximum<T> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets() {
        let add = Additive::<i64>::default();
        assert_eq!(add.op(&3, &4), 7);
        assert_eq!(add.e(), 0);
        assert_eq!(add.opinv(&3, &4), -1);
        assert_eq!(add.repeat(&6, 7), 42);
        assert_eq!(add.repeat(&6, 0), add.e());

        let min = Minimum::<u8>::default();
        assert_eq!(min.op(&3, &4), 3);
        assert_eq!(min.op(&min.e(), &9), 9);

        let max = Maximum::<i32>::default();
        assert_eq!(max.op(&3, &4), 4);
        assert_eq!(max.op(&-9, &max.e()), -9);
    }

    #[test]
    fn from_len() {
        assert_eq!(i8::from_len(127), 127);
        assert_eq!(u128::from_len(usize::MAX), usize::MAX as u128);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "で表せない")]
    fn from_len_overflow() {
        let _ = i8::from_len(200);
    }
}
