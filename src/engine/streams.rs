// 引数ストリーム - ループの i 回目に渡す引数の供給源

use crate::core::{BenchError, BenchResult};

/// u32 の引数列
pub trait ArgStream {
    /// 読み出せる要素数
    fn len(&self) -> usize;

    /// `index`番目の値（`index < len()`であること）
    fn at(&self, index: usize) -> u32;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ArgStream for [u32] {
    #[inline]
    fn len(&self) -> usize {
        <[u32]>::len(self)
    }

    #[inline]
    fn at(&self, index: usize) -> u32 {
        self[index]
    }
}

impl ArgStream for Vec<u32> {
    #[inline]
    fn len(&self) -> usize {
        self.as_slice().len()
    }

    #[inline]
    fn at(&self, index: usize) -> u32 {
        self[index]
    }
}

impl<T: ArgStream + ?Sized> ArgStream for &T {
    #[inline]
    fn len(&self) -> usize {
        (**self).len()
    }

    #[inline]
    fn at(&self, index: usize) -> u32 {
        (**self).at(index)
    }
}

/// 常に同じ値を返す無限長ストリーム
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Constant(pub u32);

impl ArgStream for Constant {
    fn len(&self) -> usize {
        usize::MAX
    }

    #[inline]
    fn at(&self, _index: usize) -> u32 {
        self.0
    }
}

/// 複数ストリームを束ねて1回分の引数パックを作る
pub trait ArgStreams {
    type Args: Copy;

    /// 各ストリームの長さ（ストリーム順）
    fn lens(&self) -> Vec<usize>;

    /// `index`番目の引数パック
    fn at(&self, index: usize) -> Self::Args;

    /// 全ストリームが`loops`回分の長さを持つか検証
    ///
    /// 最初に長さが足りなかったストリームを報告する
    fn validate(&self, loops: usize) -> BenchResult<()> {
        match self
            .lens()
            .into_iter()
            .enumerate()
            .find(|&(_, len)| len < loops)
        {
            Some((stream, len)) => Err(BenchError::stream_too_short(stream, len, loops)),
            None => Ok(()),
        }
    }
}

impl<X: ArgStream, Y: ArgStream> ArgStreams for (X, Y) {
    type Args = (u32, u32);

    fn lens(&self) -> Vec<usize> {
        vec![self.0.len(), self.1.len()]
    }

    #[inline]
    fn at(&self, index: usize) -> (u32, u32) {
        (self.0.at(index), self.1.at(index))
    }
}

impl<X: ArgStream, Y: ArgStream, Z: ArgStream> ArgStreams for (X, Y, Z) {
    type Args = (u32, u32, u32);

    fn lens(&self) -> Vec<usize> {
        vec![self.0.len(), self.1.len(), self.2.len()]
    }

    #[inline]
    fn at(&self, index: usize) -> (u32, u32, u32) {
        (self.0.at(index), self.1.at(index), self.2.at(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slice_and_vec_streams() {
        let values = vec![1, 2, 3];
        let slice: &[u32] = &values;

        assert_eq!(ArgStream::len(&values), 3);
        assert_eq!(ArgStream::len(slice), 3);
        assert_eq!(values.at(2), 3);
        assert_eq!(slice.at(0), 1);
    }

    #[test]
    fn test_constant_stream_is_unbounded() {
        let stream = Constant(7);

        assert_eq!(stream.len(), usize::MAX);
        assert_eq!(stream.at(0), 7);
        assert_eq!(stream.at(1_000_000), 7);
    }

    #[test]
    fn test_pair_at() {
        let a = [1u32, 2, 3];
        let b = [4u32, 5, 6];
        let streams = (&a[..], &b[..]);

        assert_eq!(streams.at(1), (2, 5));
        assert_eq!(streams.lens(), vec![3, 3]);
    }

    #[test]
    fn test_validate_reports_first_short_stream() {
        let a = vec![1u32; 3];
        let b = vec![1u32; 2];
        let streams = (&a, &b, Constant(0));

        assert!(streams.validate(2).is_ok());
        match streams.validate(3) {
            Err(BenchError::StreamTooShort { stream, len, loops }) => {
                assert_eq!((stream, len, loops), (1, 2, 3));
            }
            other => panic!("StreamTooShort が期待されます: {other:?}"),
        }
    }

    #[test]
    fn test_validate_zero_loops_accepts_empty_streams() {
        let empty: Vec<u32> = Vec::new();
        assert!((&empty, &empty).validate(0).is_ok());
    }
}
