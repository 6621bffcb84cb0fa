//! 呼び出し関数（コレクションの1要素に計算を適用するアダプタ）
//!
//! エンジンは要素型ではなく「1要素への適用方法」でパラメータ化される。
//! 同じ呼び出し関数を動的・静的どちらのコレクションにも渡せる。

use crate::strategy::{
    AccumulateFirstArg, Addition, BoxedComputer, Computer, DigitConcat, Multiplication,
    MultiplyAdd, SharedComputer, Subtraction,
};

/// ストラテジー`S`に引数`A`を適用する呼び出し関数
///
/// 自身は状態を持たない。間接参照を外すかどうかだけを知っている。
pub trait Invoke<S: ?Sized, A> {
    fn invoke(&self, strategy: &mut S, args: A) -> u32;
}

// 参照渡しでも値渡しでもエンジンに渡せる
impl<S: ?Sized, A, F: Invoke<S, A> + ?Sized> Invoke<S, A> for &F {
    #[inline]
    fn invoke(&self, strategy: &mut S, args: A) -> u32 {
        (**self).invoke(strategy, args)
    }
}

/// 標準の呼び出し関数
///
/// - 共有ハンドル / Box: 間接参照を外して`Computer::compute`を呼ぶ
/// - 具象ストラテジー: 固有メソッド`compute`を直接呼ぶ
#[derive(Debug, Default, Clone, Copy)]
pub struct Compute;

impl Invoke<SharedComputer, (u32, u32)> for Compute {
    #[inline]
    fn invoke(&self, strategy: &mut SharedComputer, (a, b): (u32, u32)) -> u32 {
        strategy.borrow_mut().compute(a, b)
    }
}

impl Invoke<BoxedComputer, (u32, u32)> for Compute {
    #[inline]
    fn invoke(&self, strategy: &mut BoxedComputer, (a, b): (u32, u32)) -> u32 {
        strategy.compute(a, b)
    }
}

macro_rules! impl_compute_binary {
    ($($strategy:ty),* $(,)?) => {
        $(
            impl Invoke<$strategy, (u32, u32)> for Compute {
                #[inline]
                fn invoke(&self, strategy: &mut $strategy, (a, b): (u32, u32)) -> u32 {
                    <$strategy>::compute(strategy, a, b)
                }
            }
        )*
    };
}

impl_compute_binary!(Addition, Subtraction, Multiplication, DigitConcat, AccumulateFirstArg);

impl Invoke<MultiplyAdd, (u32, u32, u32)> for Compute {
    #[inline]
    fn invoke(&self, strategy: &mut MultiplyAdd, (a, b, c): (u32, u32, u32)) -> u32 {
        strategy.compute(a, b, c)
    }
}

impl Invoke<AccumulateFirstArg, (u32, u32, u32)> for Compute {
    #[inline]
    fn invoke(&self, strategy: &mut AccumulateFirstArg, (a, b, _): (u32, u32, u32)) -> u32 {
        AccumulateFirstArg::compute(strategy, a, b)
    }
}

/// `Computer`実装型を静的ディスパッチで呼ぶ呼び出し関数
#[derive(Debug, Default, Clone, Copy)]
pub struct ViaComputer;

impl<S: Computer + ?Sized> Invoke<S, (u32, u32)> for ViaComputer {
    #[inline]
    fn invoke(&self, strategy: &mut S, (a, b): (u32, u32)) -> u32 {
        strategy.compute(a, b)
    }
}

/// クロージャから作る呼び出し関数
#[derive(Debug, Clone, Copy)]
pub struct FromFn<F>(F);

/// `Fn(&mut S, A) -> u32`を呼び出し関数として使う
///
/// ```
/// use dispatch_bench::{from_fn, invoke::Invoke, Addition};
///
/// let double_sum = from_fn(|s: &mut Addition, (a, b): (u32, u32)| s.compute(a, b) * 2);
/// assert_eq!(double_sum.invoke(&mut Addition, (3, 2)), 10);
/// ```
pub fn from_fn<F>(f: F) -> FromFn<F> {
    FromFn(f)
}

impl<S: ?Sized, A, F: Fn(&mut S, A) -> u32> Invoke<S, A> for FromFn<F> {
    #[inline]
    fn invoke(&self, strategy: &mut S, args: A) -> u32 {
        (self.0)(strategy, args)
    }
}
