// 呼び出しをまたいで状態を持つストラテジー

use super::Computer;

/// 第1引数を内部状態に加算し、加算後の値を返す
///
/// 第2引数以降は無視する。状態はインスタンスが排他的に所有する。
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct AccumulateFirstArg {
    accum: u32,
}

impl AccumulateFirstArg {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn compute(&mut self, a: u32, _b: u32) -> u32 {
        self.accum = self.accum.wrapping_add(a);
        self.accum
    }

    /// 現在の累積値
    pub fn state(&self) -> u32 {
        self.accum
    }

    /// 累積値を0に戻す
    pub fn reset(&mut self) {
        self.accum = 0;
    }
}

impl Computer for AccumulateFirstArg {
    fn compute(&mut self, a: u32, b: u32) -> u32 {
        AccumulateFirstArg::compute(self, a, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accumulates_first_argument() {
        let mut acc = AccumulateFirstArg::new();
        let results: Vec<u32> = [3, 4, 5].iter().map(|&a| acc.compute(a, 100)).collect();

        assert_eq!(results, vec![3, 7, 12]);
        assert_eq!(acc.state(), 12);
    }

    #[test]
    fn test_reset_restarts_from_zero() {
        let mut acc = AccumulateFirstArg::new();
        acc.compute(3, 0);
        acc.compute(4, 0);

        acc.reset();
        assert_eq!(acc.state(), 0);
        assert_eq!(acc.compute(3, 0), 3);
        assert_eq!(acc.compute(4, 0), 7);
    }

    #[test]
    fn test_accumulator_wraps() {
        let mut acc = AccumulateFirstArg::new();
        acc.compute(u32::MAX, 0);
        assert_eq!(acc.compute(2, 0), 1);
    }

    #[test]
    fn test_ignores_second_argument() {
        let mut a = AccumulateFirstArg::new();
        let mut b = AccumulateFirstArg::new();
        assert_eq!(a.compute(5, 0), b.compute(5, u32::MAX));
    }
}
