// ストラテジーコレクション - エンジンが走査する2種類の表現
//
// - DynamicCollection: 実行時サイズ、共通インターフェース経由（ループ）
// - タプル: コンパイル時に固定された異種型の並び（展開）

pub mod dynamic;
pub mod fixed;

pub use dynamic::{DynamicCollection, DynamicCollectionBuilder};
pub use fixed::FixedArity;

/// 呼び出し関数`F`と引数`A`で全要素を順に評価できるコレクション
///
/// どちらの実現が使われるかは型で決まり、呼び出しごとには判定しない。
pub trait StrategyCollection<F, A> {
    /// 1回分の結果列（要素数と順序はコレクションと一致）
    type Output: AsRef<[u32]>;

    /// 全要素に`invoker`を挿入順で1回ずつ適用する
    fn apply(&mut self, invoker: &F, args: A) -> Self::Output;

    /// 要素数
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
