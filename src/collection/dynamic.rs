// 動的表現 - 共通インターフェースのハンドル列

use super::StrategyCollection;
use crate::invoke::Invoke;
use crate::strategy::{shared, Computer, ComputerHandle, SharedComputer};

/// 実行時にサイズが決まるストラテジー列
///
/// 既定のハンドルは`SharedComputer`。ハンドル型は`ComputerHandle`に限られ、
/// `Computer`を実装しない型はどの構築経路でもコンパイル時に弾かれる。
#[derive(Clone)]
pub struct DynamicCollection<H: ComputerHandle = SharedComputer> {
    handles: Vec<H>,
}

impl DynamicCollection {
    /// 空の共有ハンドル列を作成
    pub fn new() -> Self {
        Self {
            handles: Vec::new(),
        }
    }

    pub fn builder() -> DynamicCollectionBuilder {
        DynamicCollectionBuilder::default()
    }

    /// 具象ストラテジーを共有ハンドルとして末尾に追加
    pub fn push<C: Computer + 'static>(&mut self, computer: C) {
        self.handles.push(shared(computer));
    }
}

impl Default for DynamicCollection {
    fn default() -> Self {
        Self::new()
    }
}

impl<H: ComputerHandle> DynamicCollection<H> {
    /// ハンドル列から作成
    ///
    /// 具象ストラテジーを直接並べることはできない:
    ///
    /// ```compile_fail
    /// use dispatch_bench::{DynamicCollection, Multiplication};
    ///
    /// let computers = DynamicCollection::from_handles(vec![Multiplication]);
    /// ```
    ///
    /// ```compile_fail
    /// use dispatch_bench::{DynamicCollection, Multiplication};
    ///
    /// let computers: DynamicCollection<_> = [Multiplication].into_iter().collect();
    /// ```
    pub fn from_handles(handles: Vec<H>) -> Self {
        Self { handles }
    }

    /// ハンドルをそのまま末尾に追加
    pub fn push_handle(&mut self, handle: H) {
        self.handles.push(handle);
    }

    pub fn len(&self) -> usize {
        self.handles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }

    pub fn handles(&self) -> &[H] {
        &self.handles
    }
}

impl<H: ComputerHandle> FromIterator<H> for DynamicCollection<H> {
    fn from_iter<I: IntoIterator<Item = H>>(iter: I) -> Self {
        Self::from_handles(iter.into_iter().collect())
    }
}

impl<F, A, H> StrategyCollection<F, A> for DynamicCollection<H>
where
    H: ComputerHandle,
    F: Invoke<H, A>,
    A: Copy,
{
    type Output = Vec<u32>;

    #[inline]
    fn apply(&mut self, invoker: &F, args: A) -> Vec<u32> {
        let mut results = Vec::with_capacity(self.handles.len());
        results.extend(
            self.handles
                .iter_mut()
                .map(|handle| invoker.invoke(handle, args)),
        );
        results
    }

    fn len(&self) -> usize {
        self.handles.len()
    }
}

/// `DynamicCollection`のビルダー
#[derive(Default)]
pub struct DynamicCollectionBuilder {
    collection: DynamicCollection,
}

impl DynamicCollectionBuilder {
    pub fn with<C: Computer + 'static>(mut self, computer: C) -> Self {
        self.collection.push(computer);
        self
    }

    pub fn build(self) -> DynamicCollection {
        self.collection
    }
}
