// 状態を持たない算術ストラテジー
//
// 全て u32 のラップアラウンド演算で、どの入力に対しても失敗しない

use super::Computer;

/// `a + b`
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Addition;

impl Addition {
    #[inline]
    pub fn compute(&self, a: u32, b: u32) -> u32 {
        a.wrapping_add(b)
    }
}

impl Computer for Addition {
    fn compute(&mut self, a: u32, b: u32) -> u32 {
        Addition::compute(self, a, b)
    }
}

/// `a - b`（`b > a`ならラップアラウンド）
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Subtraction;

impl Subtraction {
    #[inline]
    pub fn compute(&self, a: u32, b: u32) -> u32 {
        a.wrapping_sub(b)
    }
}

impl Computer for Subtraction {
    fn compute(&mut self, a: u32, b: u32) -> u32 {
        Subtraction::compute(self, a, b)
    }
}

/// `a * b`
///
/// `Computer`を実装しないため`DynamicCollection`には入れられない。
/// タプル表現でのみ使える。
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Multiplication;

impl Multiplication {
    #[inline]
    pub fn compute(&self, a: u32, b: u32) -> u32 {
        a.wrapping_mul(b)
    }
}

/// 10進表記の連結（`12, 34 -> 1234`）
///
/// 桁あふれは u32 のラップアラウンドで扱う
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DigitConcat;

impl DigitConcat {
    #[inline]
    pub fn compute(&self, a: u32, b: u32) -> u32 {
        let mut shift: u32 = 10;
        let mut rest = b / 10;
        while rest > 0 {
            shift = shift.wrapping_mul(10);
            rest /= 10;
        }
        a.wrapping_mul(shift).wrapping_add(b)
    }
}

impl Computer for DigitConcat {
    fn compute(&mut self, a: u32, b: u32) -> u32 {
        DigitConcat::compute(self, a, b)
    }
}

/// 3引数ストラテジー `a * b + c`
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MultiplyAdd;

impl MultiplyAdd {
    #[inline]
    pub fn compute(&self, a: u32, b: u32, c: u32) -> u32 {
        a.wrapping_mul(b).wrapping_add(c)
    }
}
