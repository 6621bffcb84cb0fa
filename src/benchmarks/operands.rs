// 計測に使う引数の生成

use crate::services::config::{BenchConfig, OperandMode};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// 全シナリオで共有する引数
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operands {
    /// ループごとの引数列
    Streams { a: Vec<u32>, b: Vec<u32> },
    /// 全ループ共通の1組
    Scalars { a: u32, b: u32 },
}

impl Operands {
    /// 設定に従って引数を生成する
    ///
    /// シードがあれば同じ設定から常に同じ引数が得られる。
    /// 設定は事前に`validate`済みであること。
    pub fn generate(config: &BenchConfig) -> Self {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let range = config.operand_min..=config.operand_max;

        match config.operands {
            OperandMode::Random => {
                let a = (0..config.loops)
                    .map(|_| rng.gen_range(range.clone()))
                    .collect();
                let b = (0..config.loops)
                    .map(|_| rng.gen_range(range.clone()))
                    .collect();
                Self::Streams { a, b }
            }
            OperandMode::Constant => Self::Scalars {
                a: rng.gen_range(range.clone()),
                b: rng.gen_range(range),
            },
        }
    }

    /// 供給できるループ回数
    pub fn len(&self) -> usize {
        match self {
            Self::Streams { a, b } => a.len().min(b.len()),
            Self::Scalars { .. } => usize::MAX,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
