use super::*;
use ndarray::Array2;

/// Generation strategy that duplicates a prefix of the alphabet and lays the
/// pairs out with an unbiased shuffle.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ShuffleGenerator {
    seed: u64,
}

impl ShuffleGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl BoardGenerator for ShuffleGenerator {
    fn generate(self, config: &GameConfig) -> Result<Board> {
        use rand::prelude::*;

        let total_cells = config.total_cells();
        if total_cells % 2 != 0 {
            return Err(GameError::UnpairableBoard);
        }

        let needed = config.pair_count();
        let available: CellCount = config
            .alphabet
            .chars()
            .count()
            .min(CellCount::MAX as usize)
            .try_into()
            .unwrap();
        if needed > available {
            return Err(GameError::PoolTooSmall { needed, available });
        }

        let mut pool: Vec<Symbol> = config.alphabet.chars().take(needed.into()).collect();
        pool.extend_from_within(..);

        // Fisher-Yates, every permutation equally likely
        let mut rng = SmallRng::seed_from_u64(self.seed);
        pool.shuffle(&mut rng);

        let size = usize::from(config.size);
        let cells = Array2::from_shape_vec((size, size), pool)
            .map_err(|_| GameError::InvalidBoardShape)?;
        log::debug!("generated {}x{} board, {} pairs", size, size, needed);

        Board::new(cells)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    const POOL: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

    fn counts(board: &Board) -> BTreeMap<Symbol, u32> {
        let size = board.size();
        let mut counts = BTreeMap::new();
        for row in 0..size {
            for col in 0..size {
                *counts.entry(board[(row, col)]).or_default() += 1;
            }
        }
        counts
    }

    #[test]
    fn generated_board_has_every_symbol_exactly_twice() {
        for size in [2, 4, 6] {
            let config = GameConfig::new(size, POOL);
            let board = ShuffleGenerator::new(7).generate(&config).unwrap();

            let counts = counts(&board);
            assert_eq!(counts.len(), usize::from(config.pair_count()));
            assert!(counts.values().all(|&n| n == 2));
        }
    }

    #[test]
    fn generator_draws_from_the_alphabet_prefix() {
        let config = GameConfig::new(2, POOL);
        let board = ShuffleGenerator::new(3).generate(&config).unwrap();

        let counts = counts(&board);
        assert_eq!(counts.keys().copied().collect::<Vec<_>>(), vec!['A', 'B']);
    }

    #[test]
    fn generation_is_deterministic_per_seed() {
        let config = GameConfig::new(4, POOL);
        let first = ShuffleGenerator::new(42).generate(&config).unwrap();
        let second = ShuffleGenerator::new(42).generate(&config).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn undersized_pool_is_a_config_error() {
        // 10x10 needs 50 pairs, the pool only has 36 symbols
        let config = GameConfig::new(10, POOL);
        let result = ShuffleGenerator::new(0).generate(&config);

        let err = result.unwrap_err();
        assert_eq!(
            err,
            GameError::PoolTooSmall {
                needed: 50,
                available: 36,
            }
        );
        assert!(err.is_config());
    }

    #[test]
    fn odd_area_cannot_be_paired() {
        let config = GameConfig::new(3, POOL);
        let result = ShuffleGenerator::new(0).generate(&config);

        assert_eq!(result.unwrap_err(), GameError::UnpairableBoard);
    }
}
