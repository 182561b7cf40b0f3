/// 素集合データ構造
///
/// 幾つかのグループのマージとグループの所属判定を高速に行える.
/// 経路圧縮とランクによる併合を両方行う.
#[derive(Clone)]
pub struct UnionFind {
    parent: Box<[usize]>,
    rank: Box<[u8]>,
    size: Box<[usize]>,
    count: usize,
}

impl UnionFind {
    /// `n`個の要素があり, それぞれ別のグループに属しているUnionFindを作る.
    ///
    /// # Time complexity
    ///
    /// - *O*(*n*)
    #[must_use]
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            rank: vec![0; n].into_boxed_slice(),
            size: vec![1; n].into_boxed_slice(),
            count: n,
        }
    }

    /// 要素の総数を返す.
    ///
    /// # Time complexity
    ///
    /// - *O*(1)
    #[must_use]
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// 要素が1つもないか判定する.
    ///
    /// # Time complexity
    ///
    /// - *O*(1)
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// グループの総数を返す.
    ///
    /// # Time complexity
    ///
    /// - *O*(1)
    #[must_use]
    pub fn count(&self) -> usize {
        self.count
    }

    /// 要素`a`が属するグループと要素`b`が属するグループを1つのグループにマージし, 新しいグループの代表を返す.
    /// 最初から同じグループに属していた場合は, 何もせずにそのグループの代表を返す.
    ///
    /// # Time complexity
    ///
    /// - *O*(α(*n*))
    pub fn union(&mut self, a: usize, b: usize) -> usize {
        debug_assert!(a < self.len());
        debug_assert!(b < self.len());
        let mut a = self.find(a);
        let mut b = self.find(b);
        if a == b {
            return a;
        }
        if self.rank[a] < self.rank[b] {
            std::mem::swap(&mut a, &mut b);
        }
        if self.rank[a] == self.rank[b] {
            self.rank[a] += 1;
        }
        self.parent[b] = a;
        self.size[a] += self.size[b];
        self.count -= 1;
        a
    }

    /// 要素`a`が属するグループの代表を返す.
    ///
    /// # Time complexity
    ///
    /// - *O*(α(*n*))
    #[must_use]
    pub fn find(&mut self, mut a: usize) -> usize {
        debug_assert!(a < self.len());
        let root = self.find_imu(a);
        while self.parent[a] != root {
            a = std::mem::replace(&mut self.parent[a], root);
        }
        root
    }

    /// 要素`a`が属するグループの代表を返す.
    ///
    /// # Time complexity
    ///
    /// - *O*(log *n*)
    #[must_use]
    pub fn find_imu(&self, mut a: usize) -> usize {
        debug_assert!(a < self.len());
        while self.parent[a] != a {
            a = self.parent[a];
        }
        a
    }

    /// 要素`a`, `b`が同じグループに属するか判定する.
    ///
    /// # Time complexity
    ///
    /// - *O*(α(*n*))
    #[must_use]
    pub fn same(&mut self, a: usize, b: usize) -> bool {
        self.find(a) == self.find(b)
    }

    /// 要素`a`が属するグループの要素数を返す.
    ///
    /// # Time complexity
    ///
    /// - *O*(α(*n*))
    #[must_use]
    pub fn size(&mut self, a: usize) -> usize {
        let root = self.find(a);
        self.size[root]
    }

    /// 全てのグループを, 各グループの要素を昇順に並べた形で返す.
    ///
    /// グループは最小の要素の昇順に並ぶ.
    ///
    /// # Time complexity
    ///
    /// - *O*(*n* α(*n*))
    #[must_use]
    pub fn groups(&mut self) -> Vec<Vec<usize>> {
        let mut index = vec![usize::MAX; self.len()];
        let mut groups: Vec<Vec<usize>> = Vec::with_capacity(self.count);
        for a in 0..self.len() {
            let root = self.find(a);
            if index[root] == usize::MAX {
                index[root] = groups.len();
                groups.push(Vec::with_capacity(self.size[root]));
            }
            groups[index[root]].push(a);
        }
        groups
    }
}

impl std::fmt::Debug for UnionFind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let groups = self.clone().groups();
        f.debug_set()
            .entries(groups.iter().map(|g| DebugSet(g)))
            .finish()
    }
}

struct DebugSet<'a>(&'a [usize]);
impl std::fmt::Debug for DebugSet<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.0).finish()
    }
}

impl Default for UnionFind {
    fn default() -> Self {
        Self::new(0)
    }
}
