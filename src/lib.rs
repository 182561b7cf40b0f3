//! 遅延伝搬セグメントツリーを中心とした私用の競技プログラミングライブラリ
//!
//! 各データ構造は演算をモノイドなどのトレイトを実装した値として受け取る.
//! よく使う組み合わせは[`RangeSumQuery`], [`RangeMinQuery`], [`RangeMaxQuery`]として用意している.
//!
//! ```
//! use rangetree::RangeSumQuery;
//!
//! let mut seg = RangeSumQuery::<i64>::from(vec![1, 2, 3, 4, 5]);
//! seg.update(1, 3, &10);
//! assert_eq!(seg.query(0, 4), 45);
//! ```

pub mod binaryindexedtree;
pub mod error;
pub mod lazyrangetree;
pub mod sieve;
pub mod totient;
pub mod unionfind;
pub mod util;

pub use binaryindexedtree::{BinaryIndexedTree, RangeBinaryIndexedTree};
pub use error::RangeError;
pub use lazyrangetree::{LazyMonoid, LazyRangeTree, RangeMaxQuery, RangeMinQuery, RangeSumQuery};
pub use sieve::{MinFactorSieve, Sieve};
pub use totient::{euler_phi, TotientTable};
pub use unionfind::UnionFind;
