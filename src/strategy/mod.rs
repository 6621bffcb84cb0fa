//! ストラテジー（1回分の計算単位）
//!
//! 各ストラテジーは固有メソッド`compute`を持つ値型。動的ディスパッチ用の
//! 共通インターフェース`Computer`は一部の型だけが実装する。
//!
//! - `Addition` / `Subtraction` / `DigitConcat` / `AccumulateFirstArg`: `Computer`を実装
//! - `Multiplication` / `MultiplyAdd`: `Computer`を実装しない（タプル表現専用）

pub mod accumulate;
pub mod arithmetic;

pub use accumulate::AccumulateFirstArg;
pub use arithmetic::{Addition, DigitConcat, Multiplication, MultiplyAdd, Subtraction};

use std::cell::RefCell;
use std::rc::Rc;

/// 動的ディスパッチ用の2引数計算インターフェース
///
/// このトレイトを実装しない型は`DynamicCollection`に追加できない。
/// 判定はコンパイル時に行われる:
///
/// ```
/// use dispatch_bench::{Addition, DynamicCollection, Subtraction};
///
/// let mut computers = DynamicCollection::new();
/// computers.push(Addition);
/// computers.push(Subtraction);
/// assert_eq!(computers.len(), 2);
/// ```
///
/// ```compile_fail
/// use dispatch_bench::{DynamicCollection, Multiplication};
///
/// let mut computers = DynamicCollection::new();
/// computers.push(Multiplication);
/// ```
pub trait Computer {
    fn compute(&mut self, a: u32, b: u32) -> u32;
}

// Computer for Box<dyn Computer>
impl<C: Computer + ?Sized> Computer for Box<C> {
    fn compute(&mut self, a: u32, b: u32) -> u32 {
        self.as_mut().compute(a, b)
    }
}

/// 共有所有の`Computer`ハンドル
///
/// 状態を持つストラテジーを共有ハンドル越しに変更するため`RefCell`で包む。
/// シングルスレッド専用。
pub type SharedComputer = Rc<RefCell<dyn Computer>>;

/// 排他所有の`Computer`ハンドル
pub type BoxedComputer = Box<dyn Computer>;

mod sealed {
    pub trait Sealed {}

    impl Sealed for super::SharedComputer {}
    impl Sealed for super::BoxedComputer {}
}

/// `DynamicCollection`に格納できる`Computer`ハンドル
///
/// `SharedComputer`と`BoxedComputer`だけが実装する。外部からは実装できない。
pub trait ComputerHandle: sealed::Sealed {}

impl ComputerHandle for SharedComputer {}
impl ComputerHandle for BoxedComputer {}

/// 具象ストラテジーを共有ハンドルに変換
pub fn shared<C: Computer + 'static>(computer: C) -> SharedComputer {
    Rc::new(RefCell::new(computer))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shared_handle_mutates_in_place() {
        let handle = shared(AccumulateFirstArg::new());
        let alias = Rc::clone(&handle);

        assert_eq!(handle.borrow_mut().compute(3, 0), 3);
        assert_eq!(alias.borrow_mut().compute(4, 0), 7);
    }

    fn assert_handle<H: ComputerHandle>() {}

    #[test]
    fn test_handle_types() {
        assert_handle::<SharedComputer>();
        assert_handle::<BoxedComputer>();
    }

    #[test]
    fn test_boxed_computer_forwards() {
        let mut boxed: Box<BoxedComputer> = Box::new(Box::new(Subtraction));
        assert_eq!(boxed.compute(5, 3), 2);
    }
}
