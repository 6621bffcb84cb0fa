// 静的表現 - 型レベルで固定された異種ストラテジーのタプル
//
// 要素型は共通トレイトを必要としない。呼び出し関数`F`が各要素型に対して
// `Invoke`を実装していればよい。

use super::StrategyCollection;
use crate::invoke::Invoke;

/// コンパイル時に確定する要素数
pub trait FixedArity {
    const LEN: usize;
}

impl<F, A> StrategyCollection<F, A> for () {
    type Output = [u32; 0];

    #[inline]
    fn apply(&mut self, _invoker: &F, _args: A) -> [u32; 0] {
        []
    }

    fn len(&self) -> usize {
        0
    }
}

impl FixedArity for () {
    const LEN: usize = 0;
}

// 要素ごとの呼び出しをマクロで展開し、結果を固定長配列で返す
macro_rules! impl_fixed_collection {
    ($len:literal => $($idx:tt $strategy:ident),+) => {
        impl<F, A, $($strategy),+> StrategyCollection<F, A> for ($($strategy,)+)
        where
            A: Copy,
            $(F: Invoke<$strategy, A>,)+
        {
            type Output = [u32; $len];

            #[inline]
            fn apply(&mut self, invoker: &F, args: A) -> [u32; $len] {
                [$(invoker.invoke(&mut self.$idx, args)),+]
            }

            fn len(&self) -> usize {
                $len
            }
        }

        impl<$($strategy),+> FixedArity for ($($strategy,)+) {
            const LEN: usize = $len;
        }
    };
}

impl_fixed_collection!(1 => 0 S0);
impl_fixed_collection!(2 => 0 S0, 1 S1);
impl_fixed_collection!(3 => 0 S0, 1 S1, 2 S2);
impl_fixed_collection!(4 => 0 S0, 1 S1, 2 S2, 3 S3);
impl_fixed_collection!(5 => 0 S0, 1 S1, 2 S2, 3 S3, 4 S4);
impl_fixed_collection!(6 => 0 S0, 1 S1, 2 S2, 3 S3, 4 S4, 5 S5);
impl_fixed_collection!(7 => 0 S0, 1 S1, 2 S2, 3 S3, 4 S4, 5 S5, 6 S6);
impl_fixed_collection!(8 => 0 S0, 1 S1, 2 S2, 3 S3, 4 S4, 5 S5, 6 S6, 7 S7);
impl_fixed_collection!(9 => 0 S0, 1 S1, 2 S2, 3 S3, 4 S4, 5 S5, 6 S6, 7 S7, 8 S8);
impl_fixed_collection!(10 => 0 S0, 1 S1, 2 S2, 3 S3, 4 S4, 5 S5, 6 S6, 7 S7, 8 S8, 9 S9);
impl_fixed_collection!(11 => 0 S0, 1 S1, 2 S2, 3 S3, 4 S4, 5 S5, 6 S6, 7 S7, 8 S8, 9 S9, 10 S10);
impl_fixed_collection!(12 => 0 S0, 1 S1, 2 S2, 3 S3, 4 S4, 5 S5, 6 S6, 7 S7, 8 S8, 9 S9, 10 S10, 11 S11);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::invoke::{Compute, ViaComputer};
    use crate::strategy::{
        AccumulateFirstArg, Addition, Multiplication, MultiplyAdd, Subtraction,
    };

    type Mixed = (Addition, Subtraction, Multiplication, AccumulateFirstArg);

    // 要素数はコンパイル時に検査できる
    const _: () = assert!(<Mixed as FixedArity>::LEN == 4);

    #[test]
    fn test_unrolled_apply_preserves_order() {
        let mut strategies: Mixed = (
            Addition,
            Subtraction,
            Multiplication,
            AccumulateFirstArg::new(),
        );

        assert_eq!(strategies.apply(&Compute, (3, 2)), [5, 1, 6, 3]);
        assert_eq!(strategies.apply(&Compute, (4, 2)), [6, 2, 8, 7]);
    }

    #[test]
    fn test_empty_tuple() {
        let results: [u32; 0] =
            StrategyCollection::<Compute, (u32, u32)>::apply(&mut (), &Compute, (1, 2));

        assert!(results.is_empty());
        assert_eq!(<() as FixedArity>::LEN, 0);
    }

    #[test]
    fn test_trait_bound_tuple() {
        let mut strategies = (Addition, Subtraction, AccumulateFirstArg::new());

        assert_eq!(strategies.apply(&ViaComputer, (3, 2)), [5, 1, 3]);
        assert_eq!(
            StrategyCollection::<ViaComputer, (u32, u32)>::len(&strategies),
            3
        );
    }

    #[test]
    fn test_ternary_arguments() {
        let mut strategies = (MultiplyAdd, AccumulateFirstArg::new());

        assert_eq!(strategies.apply(&Compute, (3, 2, 1)), [7, 3]);
        assert_eq!(strategies.apply(&Compute, (1, 1, 1)), [2, 4]);
    }
}
